//! Equipment domain rules: fuel-type vocabulary and field validation.
//!
//! Lives in `core` (zero internal deps) so both the repository layer and
//! the API handlers validate against the same vocabulary the database
//! CHECK constraint enforces.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Fuel type constants
// ---------------------------------------------------------------------------

/// Hydroelectric generation.
pub const FUEL_HYDRO: &str = "hydro";
/// Thermal generation (coal, gas, diesel).
pub const FUEL_THERMAL: &str = "thermal";
/// Photovoltaic or solar-thermal generation.
pub const FUEL_SOLAR: &str = "solar";
/// Wind turbines.
pub const FUEL_WIND: &str = "wind";
/// Anything that does not fit the named categories.
pub const FUEL_OTHER: &str = "other";

/// All valid fuel types.
pub const VALID_FUEL_TYPES: &[&str] =
    &[FUEL_HYDRO, FUEL_THERMAL, FUEL_SOLAR, FUEL_WIND, FUEL_OTHER];

/// Fuel type assigned when a create request omits one.
pub const DEFAULT_FUEL_TYPE: &str = FUEL_HYDRO;

/// Human-readable label for a fuel type, as shown in dashboard charts.
///
/// Unknown values (impossible for rows that passed the CHECK constraint)
/// pass through unchanged.
pub fn fuel_type_label(fuel_type: &str) -> &str {
    match fuel_type {
        FUEL_HYDRO => "Hydro",
        FUEL_THERMAL => "Thermal",
        FUEL_SOLAR => "Solar",
        FUEL_WIND => "Wind",
        FUEL_OTHER => "Other",
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a fuel type string is one of the known types.
pub fn validate_fuel_type(fuel_type: &str) -> Result<(), CoreError> {
    if VALID_FUEL_TYPES.contains(&fuel_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown fuel type: '{fuel_type}'. Valid types: {}",
            VALID_FUEL_TYPES.join(", ")
        )))
    }
}

/// Validate that a unit number is positive. Unit numbers are optional on
/// equipment; this only runs when one is supplied.
pub fn validate_unit_number(unit_number: i32) -> Result<(), CoreError> {
    if unit_number > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unit number must be positive (got {unit_number})"
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
