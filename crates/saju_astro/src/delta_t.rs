//! Delta-T (TT minus UT) estimation from polynomial fits.
//!
//! Three piecewise fits cover the years this crate cares about: the
//! Espenak/Meeus quintic for 1986..2005, a quadratic for 2005..=2050, and a
//! long-range centennial quadratic everywhere else. Accuracy is a few seconds
//! at worst, which moves an apparent solar longitude by well under 0.001 deg.

/// Delta-T in seconds for the given calendar year.
pub fn delta_t_seconds(year: i32) -> f64 {
    if (2005..=2050).contains(&year) {
        let t = (year - 2000) as f64;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (1986..2005).contains(&year) {
        let t = (year - 2000) as f64;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else {
        let t = (year - 2000) as f64 / 100.0;
        62.92 + 32.217 * t + 55.89 * t * t
    }
}
