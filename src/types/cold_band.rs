use serde::Serialize;

/// Coarse classification of a wind-chill value, used for table and gauge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColdBand {
    /// At or below the alert threshold.
    Extreme,
    /// At or below freezing.
    Cold,
    Mild,
}

impl ColdBand {
    /// Classifies `wind_chill` against `threshold`. Both comparisons are inclusive.
    ///
    /// ```
    /// use windchill::ColdBand;
    ///
    /// assert_eq!(ColdBand::classify(-20.0, -20.0), ColdBand::Extreme);
    /// assert_eq!(ColdBand::classify(0.0, -20.0), ColdBand::Cold);
    /// assert_eq!(ColdBand::classify(0.1, -20.0), ColdBand::Mild);
    /// ```
    pub fn classify(wind_chill: f64, threshold: f64) -> Self {
        if wind_chill <= threshold {
            ColdBand::Extreme
        } else if wind_chill <= 0.0 {
            ColdBand::Cold
        } else {
            ColdBand::Mild
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wind_chill::wind_chill;

    #[test]
    fn test_bands_follow_threshold() {
        assert_eq!(ColdBand::classify(-35.0, -30.0), ColdBand::Extreme);
        assert_eq!(ColdBand::classify(-25.0, -30.0), ColdBand::Cold);
        assert_eq!(ColdBand::classify(-35.0, -35.0), ColdBand::Extreme);
        assert_eq!(ColdBand::classify(-5.0, 5.0), ColdBand::Extreme);
    }

    #[test]
    fn test_classifies_model_output() {
        // -10 °C in 20 km/h feels like about -17.9 °C.
        let felt = wind_chill(-10.0, 20.0);
        assert_eq!(ColdBand::classify(felt, -20.0), ColdBand::Cold);
        assert_eq!(ColdBand::classify(felt, -15.0), ColdBand::Extreme);
        assert_eq!(ColdBand::classify(wind_chill(12.0, 30.0), -20.0), ColdBand::Mild);
    }
}
