//! Sample Commute Scenarios
//!
//! Runs the cost comparison over a fixed set of commute profiles and
//! prints the output panel for each, plus the JSON form of the first
//! comparison as a reference for form-layer integration.
//!
//! Run with: cargo run --bin sample_scenarios

use anyhow::Result;

use transit_benefit_calculator::{
    compare_costs, format_currency, CommuteProfile, TaxBracket, TransitMode,
};

/// Named profiles covering the three modes and both subsidy states
fn sample_profiles() -> Vec<(&'static str, CommuteProfile)> {
    vec![
        ("Downtown subway commuter", CommuteProfile::default()),
        (
            "Subway + bus transfer, no subsidy",
            CommuteProfile {
                bus_rides_per_day: 2,
                employer_subsidy: false,
                ..CommuteProfile::default()
            },
        ),
        (
            "Zone 8 commuter rail with subway connection",
            CommuteProfile {
                transit_mode: TransitMode::CommuterRail,
                commuter_zone: "8".to_string(),
                includes_subway_connection: true,
                tax_bracket: TaxBracket::TwentyFour,
                ..CommuteProfile::default()
            },
        ),
        (
            "Hingham-Hull ferry, part-time",
            CommuteProfile {
                transit_mode: TransitMode::Ferry,
                ferry_route: "hingham-hull".to_string(),
                work_days_per_month: 12,
                employer_subsidy: false,
                ..CommuteProfile::default()
            },
        ),
        (
            "Occasional rider",
            CommuteProfile {
                work_days_per_month: 6,
                subway_rides_per_day: 2,
                employer_subsidy: false,
                ..CommuteProfile::default()
            },
        ),
    ]
}

fn main() -> Result<()> {
    println!("Transit Benefit Calculator - Sample Scenarios\n");
    println!("=============================================\n");

    let profiles = sample_profiles();

    for (name, profile) in &profiles {
        let comparison = compare_costs(profile);

        println!("## {}", name);
        println!(
            "   Mode: {} ({} days/month)",
            profile.transit_mode.display_text(),
            profile.work_days_per_month
        );
        println!(
            "   Monthly Pass Cost (Full):  {}",
            format_currency(comparison.full_pass_cost)
        );
        if profile.employer_subsidy {
            println!(
                "   Employer Subsidy (60%):   -{}",
                format_currency(comparison.subsidy_amount)
            );
        }
        println!(
            "   Your Monthly Pass Cost:    {}",
            format_currency(comparison.subsidized_pass_cost)
        );
        println!(
            "   Pay-per-ride Total:        {}",
            format_currency(comparison.pay_per_ride_cost)
        );
        println!(
            "   Monthly Pre-tax Savings:   {}",
            format_currency(comparison.monthly_pre_tax_savings)
        );
        println!("   Recommendation: {}", comparison.message);
        println!();
    }

    // JSON shape a form layer receives
    let (_, reference_profile) = &profiles[0];
    let comparison = compare_costs(reference_profile);
    println!("Reference JSON output:\n{}", serde_json::to_string_pretty(&comparison)?);

    println!("\n=============================================");
    println!("Done! Compared {} scenarios", profiles.len());

    Ok(())
}
