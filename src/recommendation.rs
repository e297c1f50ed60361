//! Purchase Recommendation
//!
//! Classifies the net-savings comparison into a recommendation and renders
//! the sentence the form shows the commuter. All currency renders to two
//! decimals.

use serde::{Deserialize, Serialize};

/// Which purchasing strategy the comparison favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Net savings favor the monthly pass
    MonthlyPass,
    /// The pass costs more than the rides are worth
    PayPerRide,
    /// Both strategies cost the same
    Neutral,
}

impl Recommendation {
    /// Friendly name for display
    pub fn display_text(&self) -> &'static str {
        match self {
            Recommendation::MonthlyPass => "Monthly Pass",
            Recommendation::PayPerRide => "Pay Per Ride",
            Recommendation::Neutral => "Either",
        }
    }
}

/// Classify by the sign of the net savings. Exactly zero is Neutral.
pub fn classify(net_savings: f64) -> Recommendation {
    if net_savings > 0.0 {
        Recommendation::MonthlyPass
    } else if net_savings < 0.0 {
        Recommendation::PayPerRide
    } else {
        Recommendation::Neutral
    }
}

/// Render the recommendation sentence.
///
/// The employer-subsidy clause appears only when the subsidy is enabled;
/// the pre-tax component always does, since the deduction applies to any
/// pass purchase.
pub fn summary_message(
    recommendation: Recommendation,
    net_savings: f64,
    pre_tax_savings: f64,
    subsidy_amount: f64,
    employer_subsidy: bool,
) -> String {
    match recommendation {
        Recommendation::MonthlyPass => {
            let subsidy_clause = if employer_subsidy {
                format!(" and ${:.2} in employer subsidy", subsidy_amount)
            } else {
                String::new()
            };
            format!(
                "We recommend getting the Monthly Pass. You'll save ${:.2} per month \
                 including ${:.2} in tax savings{}.",
                net_savings, pre_tax_savings, subsidy_clause
            )
        }
        Recommendation::PayPerRide => {
            let subsidy_clause = if employer_subsidy {
                " and employer subsidy"
            } else {
                ""
            };
            format!(
                "We recommend paying per ride. The monthly pass would cost ${:.2} more \
                 than what you need, even with tax savings{}.",
                net_savings.abs(),
                subsidy_clause
            )
        }
        Recommendation::Neutral => {
            "Both options cost about the same. Consider the monthly pass for convenience \
             and tax savings."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matches_sign() {
        assert_eq!(classify(67.92), Recommendation::MonthlyPass);
        assert_eq!(classify(0.01), Recommendation::MonthlyPass);
        assert_eq!(classify(-14.50), Recommendation::PayPerRide);
        assert_eq!(classify(0.0), Recommendation::Neutral);
    }

    #[test]
    fn test_pass_message_with_subsidy() {
        let message = summary_message(Recommendation::MonthlyPass, 67.92, 7.92, 54.00, true);
        assert_eq!(
            message,
            "We recommend getting the Monthly Pass. You'll save $67.92 per month \
             including $7.92 in tax savings and $54.00 in employer subsidy."
        );
    }

    #[test]
    fn test_pass_message_without_subsidy() {
        let message = summary_message(Recommendation::MonthlyPass, 9.00, 9.00, 0.0, false);
        assert_eq!(
            message,
            "We recommend getting the Monthly Pass. You'll save $9.00 per month \
             including $9.00 in tax savings."
        );
    }

    #[test]
    fn test_per_ride_message_reports_excess_cost() {
        let message = summary_message(Recommendation::PayPerRide, -21.30, 3.50, 0.0, false);
        assert_eq!(
            message,
            "We recommend paying per ride. The monthly pass would cost $21.30 more \
             than what you need, even with tax savings."
        );

        let with_subsidy = summary_message(Recommendation::PayPerRide, -21.30, 3.50, 54.00, true);
        assert!(with_subsidy.ends_with("even with tax savings and employer subsidy."));
    }

    #[test]
    fn test_neutral_message_is_fixed() {
        let message = summary_message(Recommendation::Neutral, 0.0, 0.0, 0.0, true);
        assert_eq!(
            message,
            "Both options cost about the same. Consider the monthly pass for convenience \
             and tax savings."
        );
    }
}
