//! Timezone lookup from coordinates

use crate::domain::TimezoneLookup;
use crate::error::{DaymarkError, Result};
use tzf_rs::DefaultFinder;

/// Offline lookup against bundled timezone boundary data
pub struct BoundaryTimezoneLookup {
    finder: DefaultFinder,
}

impl BoundaryTimezoneLookup {
    pub fn new() -> Self {
        BoundaryTimezoneLookup {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for BoundaryTimezoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for BoundaryTimezoneLookup {
    fn timezone_at(&self, latitude: f64, longitude: f64) -> Result<String> {
        check_range(latitude, longitude)?;

        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            return Err(DaymarkError::Timezone(format!(
                "no zone contains ({}, {})",
                latitude, longitude
            )));
        }
        Ok(name.to_string())
    }
}

/// Lookup that never resolves; used when timezone resolution is turned off
pub struct DisabledTimezoneLookup;

impl TimezoneLookup for DisabledTimezoneLookup {
    fn timezone_at(&self, _latitude: f64, _longitude: f64) -> Result<String> {
        Err(DaymarkError::Timezone("lookup disabled".to_string()))
    }

    fn enabled(&self) -> bool {
        false
    }
}

fn check_range(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(DaymarkError::Timezone(format!(
            "latitude {} out of range",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(DaymarkError::Timezone(format!(
            "longitude {} out of range",
            longitude
        )));
    }
    Ok(())
}
