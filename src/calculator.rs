//! Cost Comparison Assembly
//!
//! The single call boundary of the crate: build every derived monetary
//! value for a commute profile, classify the result, and attach the
//! recommendation sentence. The form layer calls this on every input
//! change and renders the fields directly.

use serde::Serialize;

use crate::costs;
use crate::input::CommuteProfile;
use crate::recommendation::{self, Recommendation};

/// Complete output panel for one commute profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    /// Monthly pass cost before any subsidy
    pub full_pass_cost: f64,

    /// Dollar amount the employer covers (0 when the subsidy is off)
    pub subsidy_amount: f64,

    /// Out-of-pocket monthly pass cost after the subsidy
    pub subsidized_pass_cost: f64,

    /// Monthly total when paying per ride
    pub pay_per_ride_cost: f64,

    /// Monthly savings from pre-tax payroll deduction of the pass cost
    pub monthly_pre_tax_savings: f64,

    /// Pay-per-ride total minus the pass cost net of its tax benefit;
    /// positive favors the pass
    pub net_savings: f64,

    /// Which strategy the comparison favors
    pub recommendation: Recommendation,

    /// Recommendation sentence for display
    pub message: String,
}

/// Compare the monthly pass against paying per ride for one profile.
///
/// Pure and synchronous; every call is a fresh derivation.
pub fn compare_costs(profile: &CommuteProfile) -> CostComparison {
    let full_pass_cost = costs::full_pass_cost(profile);
    let subsidy_amount = costs::subsidy_amount(profile);
    let subsidized_pass_cost = costs::subsidized_pass_cost(profile);
    let pay_per_ride_cost = costs::pay_per_ride_cost(profile);

    // The tax benefit applies to what the commuter actually pays
    let monthly_pre_tax_savings = costs::pre_tax_savings(subsidized_pass_cost, profile.tax_bracket);
    let net_savings = pay_per_ride_cost - (subsidized_pass_cost - monthly_pre_tax_savings);

    let recommendation = recommendation::classify(net_savings);
    let message = recommendation::summary_message(
        recommendation,
        net_savings,
        monthly_pre_tax_savings,
        subsidy_amount,
        profile.employer_subsidy,
    );

    CostComparison {
        full_pass_cost,
        subsidy_amount,
        subsidized_pass_cost,
        pay_per_ride_cost,
        monthly_pre_tax_savings,
        net_savings,
        recommendation,
        message,
    }
}

/// Format a dollar amount for display, e.g. "$67.92".
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compare_costs_default_profile() {
        let comparison = compare_costs(&CommuteProfile::default());

        assert_relative_eq!(comparison.full_pass_cost, 90.00);
        assert_relative_eq!(comparison.subsidy_amount, 54.00, epsilon = 1e-9);
        assert_relative_eq!(comparison.subsidized_pass_cost, 36.00, epsilon = 1e-9);
        assert_relative_eq!(comparison.pay_per_ride_cost, 96.00);
        assert_relative_eq!(comparison.monthly_pre_tax_savings, 7.92, epsilon = 1e-9);
        assert_relative_eq!(comparison.net_savings, 67.92, epsilon = 1e-9);
        assert_eq!(comparison.recommendation, Recommendation::MonthlyPass);
    }

    #[test]
    fn test_net_savings_field_matches_standalone_operation() {
        let profile = CommuteProfile::default();
        let comparison = compare_costs(&profile);
        assert_eq!(comparison.net_savings, costs::net_savings(&profile));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(90.0), "$90.00");
        assert_eq!(format_currency(7.918), "$7.92");
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
