//! The wind-chill model: apparent temperature from air temperature and wind speed.
//!
//! Uses the Environment Canada formulation with temperature in °C and wind speed
//! in km/h. Outside the region where the formula applies (warm air or near-calm
//! wind) the air temperature is returned unchanged.

/// Air temperature above which wind chill has no meaning (°C, exclusive).
pub const MAX_WIND_CHILL_TEMPERATURE: f64 = 10.0;

/// Wind speed below which wind chill has no meaning (km/h, exclusive).
pub const MIN_WIND_CHILL_SPEED: f64 = 4.8;

/// Computes the wind chill for an air temperature `temperature_c` (°C) and a
/// wind speed `wind_speed_kmh` (km/h).
///
/// Returns `temperature_c` unchanged when `temperature_c > 10` or
/// `wind_speed_kmh < 4.8`. Both boundaries themselves take the formula path.
/// No rounding is applied.
///
/// # Examples
///
/// ```
/// use windchill::wind_chill;
///
/// // Warm air: no wind-chill effect.
/// assert_eq!(wind_chill(15.0, 40.0), 15.0);
///
/// // Cold and windy: feels colder than the air.
/// assert!(wind_chill(-10.0, 20.0) < -10.0);
/// ```
pub fn wind_chill(temperature_c: f64, wind_speed_kmh: f64) -> f64 {
    if temperature_c > MAX_WIND_CHILL_TEMPERATURE || wind_speed_kmh < MIN_WIND_CHILL_SPEED {
        return temperature_c;
    }
    let v = wind_speed_kmh.powf(0.16);
    13.12 + 0.6215 * temperature_c - 11.37 * v + 0.3965 * temperature_c * v
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_warm_air_is_identity() {
        for t in [10.5, 11.0, 25.0, 40.0] {
            for v in [0.0, 4.8, 20.0, 150.0] {
                assert_eq!(wind_chill(t, v), t, "T={t} V={v}");
            }
        }
    }

    #[test]
    fn test_calm_wind_is_identity() {
        for t in [-40.0, -10.0, 0.0, 10.0] {
            for v in [0.0, 1.0, 4.79, -3.0] {
                assert_eq!(wind_chill(t, v), t, "T={t} V={v}");
            }
        }
    }

    #[test]
    fn test_speed_boundary_takes_formula() {
        let v = 4.8f64.powf(0.16);
        let expected = 13.12 + 0.6215 * 0.0 - 11.37 * v + 0.3965 * 0.0 * v;
        assert!((wind_chill(0.0, 4.8) - expected).abs() < TOLERANCE);
        assert_ne!(wind_chill(0.0, 4.8), 0.0);
    }

    #[test]
    fn test_temperature_boundary_takes_formula() {
        let v = 30.0f64.powf(0.16);
        let expected = 13.12 + 0.6215 * 10.0 - 11.37 * v + 0.3965 * 10.0 * v;
        assert!((wind_chill(10.0, 30.0) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_deterministic() {
        let first = wind_chill(-10.0, 20.0);
        for _ in 0..100 {
            assert!((wind_chill(-10.0, 20.0) - first).abs() < TOLERANCE);
        }
        // Environment Canada table value for -10 °C at 20 km/h is about -17.9.
        assert!((first - -17.86).abs() < 0.01, "got {first}");
    }

    #[test]
    fn test_total_over_extreme_inputs() {
        assert!(wind_chill(-60.0, 300.0).is_finite());
        assert!(wind_chill(-1000.0, 1e6).is_finite());
        assert_eq!(wind_chill(1e9, 1e9), 1e9);
    }
}
