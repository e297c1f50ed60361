//! Cost Operations
//!
//! The pure monetary derivations: pass pricing, subsidy adjustment,
//! pay-per-ride totals, pre-tax payroll savings, and the net comparison.
//! Every function is a fresh derivation from the profile; nothing here
//! holds state or fails for in-domain values.

use crate::fares::{
    commuter_rail_price, ferry_price, BUS_FARE, CONNECTING_SUBWAY_RIDES_PER_DAY,
    MONTHLY_LINK_PASS, RIDES_PER_PASS_MONTH, SUBSIDY_RATE, SUBWAY_FARE,
};
use crate::input::{CommuteProfile, TaxBracket, TransitMode};

/// Full (unsubsidized) monthly pass cost for the profile's mode.
///
/// Subway/bus is the flat LinkPass price; commuter rail and ferry are
/// priced from the fare tables by the active code. A code with no
/// configured price yields $0.00, not an error.
pub fn full_pass_cost(profile: &CommuteProfile) -> f64 {
    match profile.transit_mode {
        TransitMode::SubwayBus => MONTHLY_LINK_PASS,
        TransitMode::CommuterRail => {
            commuter_rail_price(&profile.commuter_zone).unwrap_or(0.0)
        }
        TransitMode::Ferry => ferry_price(&profile.ferry_route).unwrap_or(0.0),
    }
}

/// Dollar amount the employer covers, 0 when the subsidy is off.
pub fn subsidy_amount(profile: &CommuteProfile) -> f64 {
    if profile.employer_subsidy {
        full_pass_cost(profile) * SUBSIDY_RATE
    } else {
        0.0
    }
}

/// Monthly pass cost after the employer subsidy.
pub fn subsidized_pass_cost(profile: &CommuteProfile) -> f64 {
    let full_cost = full_pass_cost(profile);
    if profile.employer_subsidy {
        full_cost * (1.0 - SUBSIDY_RATE)
    } else {
        full_cost
    }
}

/// Monthly total when paying per ride instead of buying a pass.
///
/// Subway/bus multiplies the daily ride counts out by the single-ride
/// fares. Commuter rail and ferry have no published single-ride fare
/// here, so the pass price is treated as 20 rides and spread over the
/// work days; a subway connection adds two fixed subway rides per day.
pub fn pay_per_ride_cost(profile: &CommuteProfile) -> f64 {
    match profile.transit_mode {
        TransitMode::SubwayBus => {
            let monthly_subway_rides = f64::from(profile.work_days_per_month)
                * f64::from(profile.subway_rides_per_day);
            let monthly_bus_rides = f64::from(profile.work_days_per_month)
                * f64::from(profile.bus_rides_per_day);
            monthly_subway_rides * SUBWAY_FARE + monthly_bus_rides * BUS_FARE
        }
        TransitMode::CommuterRail => {
            daily_equivalent_cost(commuter_rail_price(&profile.commuter_zone), profile)
        }
        TransitMode::Ferry => daily_equivalent_cost(ferry_price(&profile.ferry_route), profile),
    }
}

/// Spread a monthly pass price over the work days as an approximate
/// per-ride total, plus the fixed connecting subway rides when set.
fn daily_equivalent_cost(table_price: Option<f64>, profile: &CommuteProfile) -> f64 {
    let work_days = f64::from(profile.work_days_per_month);

    let mut base_ride_cost =
        table_price.map_or(0.0, |price| price / RIDES_PER_PASS_MONTH) * work_days;

    if profile.includes_subway_connection {
        base_ride_cost += work_days * CONNECTING_SUBWAY_RIDES_PER_DAY * SUBWAY_FARE;
    }

    base_ride_cost
}

/// Monthly savings from paying the cost through a pre-tax payroll
/// deduction at the profile's marginal rate.
///
/// Computed via the annual cost and divided back down. The round trip is
/// algebraically a no-op but fixes the exact sequence of floating-point
/// operations, so displayed cents never shift between releases.
pub fn pre_tax_savings(monthly_cost: f64, tax_bracket: TaxBracket) -> f64 {
    let annual_cost = monthly_cost * 12.0;
    let tax_savings = annual_cost * (f64::from(tax_bracket.percent()) / 100.0);
    tax_savings / 12.0
}

/// Headline comparison: pay-per-ride total minus the pass cost net of the
/// tax benefit the pass itself generates. Positive favors the pass.
pub fn net_savings(profile: &CommuteProfile) -> f64 {
    let per_ride = pay_per_ride_cost(profile);
    let pass_cost = subsidized_pass_cost(profile);
    let tax_benefit = pre_tax_savings(pass_cost, profile.tax_bracket);

    per_ride - (pass_cost - tax_benefit)
}
