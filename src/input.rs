//! Commute Profile and Input Contract
//!
//! Defines the immutable input struct the calculator consumes, the closed
//! enums for transit mode and federal tax bracket, and the clamping/parsing
//! helpers a form layer uses to turn raw field entry into valid values.
//!
//! The form layer owns the mutable copy of these values; the calculator
//! only ever sees a fully-built `CommuteProfile`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which MBTA service the commuter rides to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitMode {
    /// Subway and/or bus, covered by the monthly LinkPass
    SubwayBus,
    /// Commuter rail, priced by fare zone
    CommuterRail,
    /// Ferry, priced by route
    Ferry,
}

impl TransitMode {
    /// Friendly name for display
    pub fn display_text(&self) -> &'static str {
        match self {
            TransitMode::SubwayBus => "Subway/Bus",
            TransitMode::CommuterRail => "Commuter Rail",
            TransitMode::Ferry => "Ferry",
        }
    }

    /// All modes, in form display order
    pub fn all() -> &'static [TransitMode] {
        &[
            TransitMode::SubwayBus,
            TransitMode::CommuterRail,
            TransitMode::Ferry,
        ]
    }
}

/// Raised when a raw percent value is not one of the federal brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no federal tax bracket at {0}%")]
pub struct UnknownTaxBracket(pub u8);

/// Federal marginal tax bracket (2023 single-filer thresholds).
///
/// A closed set: pre-tax savings only make sense at one of the published
/// marginal rates, so arbitrary percentages are rejected at construction.
/// Serialized as the bare percent number, which is what the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaxBracket {
    Ten,
    Twelve,
    TwentyTwo,
    TwentyFour,
    ThirtyTwo,
    ThirtyFive,
    ThirtySeven,
}

impl TaxBracket {
    /// Marginal rate as a whole percent
    pub fn percent(&self) -> u8 {
        match self {
            TaxBracket::Ten => 10,
            TaxBracket::Twelve => 12,
            TaxBracket::TwentyTwo => 22,
            TaxBracket::TwentyFour => 24,
            TaxBracket::ThirtyTwo => 32,
            TaxBracket::ThirtyFive => 35,
            TaxBracket::ThirtySeven => 37,
        }
    }

    /// Build from a raw percent, rejecting values outside the bracket set
    pub fn from_percent(percent: u8) -> Result<Self, UnknownTaxBracket> {
        match percent {
            10 => Ok(TaxBracket::Ten),
            12 => Ok(TaxBracket::Twelve),
            22 => Ok(TaxBracket::TwentyTwo),
            24 => Ok(TaxBracket::TwentyFour),
            32 => Ok(TaxBracket::ThirtyTwo),
            35 => Ok(TaxBracket::ThirtyFive),
            37 => Ok(TaxBracket::ThirtySeven),
            other => Err(UnknownTaxBracket(other)),
        }
    }

    /// Dropdown label with the income range, e.g. "22% - $44,726 to $95,375"
    pub fn income_range_label(&self) -> &'static str {
        match self {
            TaxBracket::Ten => "10% - Up to $11,000",
            TaxBracket::Twelve => "12% - $11,001 to $44,725",
            TaxBracket::TwentyTwo => "22% - $44,726 to $95,375",
            TaxBracket::TwentyFour => "24% - $95,376 to $182,100",
            TaxBracket::ThirtyTwo => "32% - $182,101 to $231,250",
            TaxBracket::ThirtyFive => "35% - $231,251 to $578,125",
            TaxBracket::ThirtySeven => "37% - $578,126 or more",
        }
    }

    /// All brackets, lowest rate first
    pub fn all() -> &'static [TaxBracket] {
        &[
            TaxBracket::Ten,
            TaxBracket::Twelve,
            TaxBracket::TwentyTwo,
            TaxBracket::TwentyFour,
            TaxBracket::ThirtyTwo,
            TaxBracket::ThirtyFive,
            TaxBracket::ThirtySeven,
        ]
    }
}

impl TryFrom<u8> for TaxBracket {
    type Error = UnknownTaxBracket;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        TaxBracket::from_percent(percent)
    }
}

impl From<TaxBracket> for u8 {
    fn from(bracket: TaxBracket) -> u8 {
        bracket.percent()
    }
}

/// A commuter's monthly travel pattern and benefit eligibility.
///
/// One immutable value per calculation. Only one of `commuter_zone` /
/// `ferry_route` is live at a time, selected by `transit_mode`; the other
/// keeps its last form value so switching modes round-trips cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommuteProfile {
    /// Transit service used for the commute
    pub transit_mode: TransitMode,

    /// Commuter rail fare zone code (live when mode is CommuterRail)
    pub commuter_zone: String,

    /// Ferry route code (live when mode is Ferry)
    pub ferry_route: String,

    /// Commuter rail/ferry trip continues on the subway to the destination
    pub includes_subway_connection: bool,

    /// Commuting days per month, clamped to [0, 31] by the form
    pub work_days_per_month: u32,

    /// Subway boardings per work day (subway/bus mode only)
    pub subway_rides_per_day: u32,

    /// Bus boardings per work day (subway/bus mode only)
    pub bus_rides_per_day: u32,

    /// Employer pays 60% of the monthly pass
    pub employer_subsidy: bool,

    /// Marginal tax bracket for pre-tax payroll deduction savings
    pub tax_bracket: TaxBracket,
}

impl Default for CommuteProfile {
    /// Initial form state: a 20-day subway commuter with the subsidy on.
    fn default() -> Self {
        Self {
            transit_mode: TransitMode::SubwayBus,
            commuter_zone: "1A".to_string(),
            ferry_route: "charlestown".to_string(),
            includes_subway_connection: false,
            work_days_per_month: 20,
            subway_rides_per_day: 2,
            bus_rides_per_day: 0,
            employer_subsidy: true,
            tax_bracket: TaxBracket::TwentyTwo,
        }
    }
}

impl CommuteProfile {
    /// The fare table code selected by the current mode, if the mode is
    /// table-priced. Subway/bus has a flat pass price and no code.
    pub fn active_fare_code(&self) -> Option<&str> {
        match self.transit_mode {
            TransitMode::SubwayBus => None,
            TransitMode::CommuterRail => Some(&self.commuter_zone),
            TransitMode::Ferry => Some(&self.ferry_route),
        }
    }
}

// ============================================================================
// FORM FIELD SANITIZERS
// ============================================================================
//
// The calculator assumes pre-validated values. These helpers are the
// validation contract for the form layer: numeric entry degrades to 0
// rather than erroring, and work days stay within a calendar month.

/// Clamp a raw work-days entry to [0, 31]
pub fn clamp_work_days(raw: i64) -> u32 {
    raw.clamp(0, 31) as u32
}

/// Clamp a raw ride-count entry to a non-negative count
pub fn clamp_ride_count(raw: i64) -> u32 {
    raw.max(0) as u32
}

/// Parse a raw text field as a count; anything unparseable or negative is 0
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse::<i64>().map_or(0, |value| value.max(0) as u32)
}
