//! MBTA Fare Reference Tables
//!
//! Embedded monthly pass pricing for the three transit modes, plus the
//! per-ride fares and program constants every cost calculation shares.
//!
//! Prices are the published MBTA monthly pass rates, loaded once at
//! process start and never mutated.

/// A single fare table row: a zone or route code and its monthly pass price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareEntry {
    pub code: &'static str,
    pub monthly_price: f64,
}

// ============================================================================
// FARE CONSTANTS
// ============================================================================

/// Monthly LinkPass price (unlimited subway + bus).
pub const MONTHLY_LINK_PASS: f64 = 90.00;

/// Single subway ride fare.
pub const SUBWAY_FARE: f64 = 2.40;

/// Single bus ride fare.
pub const BUS_FARE: f64 = 1.70;

/// Fraction of the monthly pass cost covered by a participating employer.
pub const SUBSIDY_RATE: f64 = 0.60;

/// Ride count a monthly pass is treated as representing when approximating
/// a per-ride cost for commuter rail and ferry (price / 20 per day).
pub const RIDES_PER_PASS_MONTH: f64 = 20.0;

/// Assumed connecting subway rides per work day when a commuter rail or
/// ferry trip continues on the subway. Independent of the subway ride
/// count fields, which only apply to subway/bus mode.
pub const CONNECTING_SUBWAY_RIDES_PER_DAY: f64 = 2.0;

// ============================================================================
// EMBEDDED FARE TABLES
// ============================================================================

/// Commuter rail monthly pass prices by fare zone, ordered outward from
/// the core (Zone 1A) to Zone 10.
pub static COMMUTER_RAIL_ZONES: &[FareEntry] = &[
    FareEntry { code: "1A", monthly_price: 90.00 },
    FareEntry { code: "1", monthly_price: 214.00 },
    FareEntry { code: "2", monthly_price: 232.00 },
    FareEntry { code: "3", monthly_price: 261.00 },
    FareEntry { code: "4", monthly_price: 281.00 },
    FareEntry { code: "5", monthly_price: 311.00 },
    FareEntry { code: "6", monthly_price: 340.00 },
    FareEntry { code: "7", monthly_price: 360.00 },
    FareEntry { code: "8", monthly_price: 388.00 },
    FareEntry { code: "9", monthly_price: 406.00 },
    FareEntry { code: "10", monthly_price: 426.00 },
];

/// Ferry monthly pass prices by route.
pub static FERRY_ROUTES: &[FareEntry] = &[
    FareEntry { code: "charlestown", monthly_price: 90.00 },
    FareEntry { code: "hingham-hull", monthly_price: 329.00 },
    FareEntry { code: "east-boston", monthly_price: 90.00 },
];

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Monthly pass price for a commuter rail zone code.
///
/// Returns None for a code with no configured price. Callers treat a miss
/// as a zero price rather than an error, so an unconfigured zone never
/// aborts a calculation.
///
/// # Examples
/// ```
/// use transit_benefit_calculator::fares::commuter_rail_price;
///
/// assert_eq!(commuter_rail_price("1A"), Some(90.00));
/// assert_eq!(commuter_rail_price("99"), None);
/// ```
pub fn commuter_rail_price(zone_code: &str) -> Option<f64> {
    COMMUTER_RAIL_ZONES
        .iter()
        .find(|entry| entry.code == zone_code)
        .map(|entry| entry.monthly_price)
}

/// Monthly pass price for a ferry route code.
pub fn ferry_price(route_code: &str) -> Option<f64> {
    FERRY_ROUTES
        .iter()
        .find(|entry| entry.code == route_code)
        .map(|entry| entry.monthly_price)
}

// ============================================================================
// DISPLAY LABELS
// ============================================================================

/// Dropdown label for a commuter rail zone, e.g. "Zone 1A - $90.00".
pub fn zone_label(entry: &FareEntry) -> String {
    format!("Zone {} - ${:.2}", entry.code, entry.monthly_price)
}

/// Dropdown label for a ferry route, e.g. "Hingham-Hull - $329.00".
///
/// Route codes are lowercase hyphenated; each hyphen-separated word is
/// title-cased and the hyphens kept.
pub fn ferry_label(entry: &FareEntry) -> String {
    let name = entry
        .code
        .split('-')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join("-");
    format!("{} - ${:.2}", name, entry.monthly_price)
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Footnotes shown under the calculator form.
pub fn fare_notes() -> Vec<String> {
    vec![
        format!("Subway fare: ${:.2} per ride", SUBWAY_FARE),
        format!("Bus fare: ${:.2} per ride", BUS_FARE),
        "Monthly passes include unlimited rides for their respective modes".to_string(),
        "Commuter Rail and Ferry passes include subway/bus access".to_string(),
        "Pre-tax savings are estimated based on your tax bracket".to_string(),
        "Employer subsidy covers 60% of the monthly pass cost when selected".to_string(),
        "Calculations assume regular weekday travel patterns".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_lookup() {
        assert_eq!(commuter_rail_price("1A"), Some(90.00));
        assert_eq!(commuter_rail_price("5"), Some(311.00));
        assert_eq!(commuter_rail_price("10"), Some(426.00));
        assert_eq!(commuter_rail_price("11"), None);
        assert_eq!(commuter_rail_price(""), None);
    }

    #[test]
    fn test_ferry_lookup() {
        assert_eq!(ferry_price("charlestown"), Some(90.00));
        assert_eq!(ferry_price("hingham-hull"), Some(329.00));
        assert_eq!(ferry_price("east-boston"), Some(90.00));
        assert_eq!(ferry_price("quincy"), None);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(COMMUTER_RAIL_ZONES.len(), 11);
        assert_eq!(FERRY_ROUTES.len(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(zone_label(&COMMUTER_RAIL_ZONES[0]), "Zone 1A - $90.00");
        assert_eq!(zone_label(&COMMUTER_RAIL_ZONES[1]), "Zone 1 - $214.00");
        assert_eq!(ferry_label(&FERRY_ROUTES[0]), "Charlestown - $90.00");
        assert_eq!(ferry_label(&FERRY_ROUTES[1]), "Hingham-Hull - $329.00");
        assert_eq!(ferry_label(&FERRY_ROUTES[2]), "East-Boston - $90.00");
    }

    #[test]
    fn test_fare_notes() {
        let notes = fare_notes();
        assert_eq!(notes.len(), 7);
        assert_eq!(notes[0], "Subway fare: $2.40 per ride");
        assert_eq!(notes[1], "Bus fare: $1.70 per ride");
    }
}
