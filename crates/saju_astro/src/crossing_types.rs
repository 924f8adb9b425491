//! Types for the solar longitude crossing search.

/// Configuration for the longitude crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingConfig {
    /// Half-width of the coarse scan window around the seed, in days (default 7.0).
    pub scan_days: f64,
    /// Coarse scan step in hours (default 6.0).
    pub step_hours: f64,
    /// Half-width of the fallback bracket used when the scan finds no sign
    /// change, in days (default 1.0).
    pub fallback_days: f64,
    /// Bisection iteration count (default 100, far past f64 resolution).
    pub max_iterations: u32,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            scan_days: 7.0,
            step_hours: 6.0,
            fallback_days: 1.0,
            max_iterations: 100,
        }
    }
}

impl CrossingConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.scan_days.is_finite() || self.scan_days <= 0.0 {
            return Err("scan_days must be positive");
        }
        if !self.step_hours.is_finite() || self.step_hours <= 0.0 {
            return Err("step_hours must be positive");
        }
        if !self.fallback_days.is_finite() || self.fallback_days <= 0.0 {
            return Err("fallback_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = CrossingConfig::default();
        assert!((c.scan_days - 7.0).abs() < 1e-10);
        assert!((c.step_hours - 6.0).abs() < 1e-10);
        assert_eq!(c.max_iterations, 100);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_zero_scan() {
        let c = CrossingConfig { scan_days: 0.0, ..CrossingConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_negative_step() {
        let c = CrossingConfig { step_hours: -6.0, ..CrossingConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_nonfinite_step() {
        let c = CrossingConfig { step_hours: f64::NAN, ..CrossingConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_fallback() {
        let c = CrossingConfig { fallback_days: 0.0, ..CrossingConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let c = CrossingConfig { max_iterations: 0, ..CrossingConfig::default() };
        assert!(c.validate().is_err());
    }
}
