//! Preset scenarios for common what-if questions.
//!
//! Provides ready-to-use scenarios:
//! - Market crash: -20% market event on day 5, 14-day recovery
//! - Earnings beat: +15% one-time spike on day 10
//! - Sector rotation: +8% gradual change over 20 days from day 1

use crate::error::ScenarioError;
use crate::spec::{ScenarioKind, ScenarioSpec};

/// Market event with linear recovery.
pub fn market_crash(
    crash_pct: f64,
    start_offset: usize,
    recovery_days: usize,
) -> Result<ScenarioSpec, ScenarioError> {
    ScenarioSpec::market_event(crash_pct, recovery_days, start_offset)
}

/// One-time spike from an earnings surprise.
pub fn earnings_beat(surprise_pct: f64, start_offset: usize) -> Result<ScenarioSpec, ScenarioError> {
    ScenarioSpec::one_time_spike(surprise_pct, start_offset)
}

/// Gradual, sustained flow into (or out of) a sector.
pub fn sector_rotation(
    rotation_pct: f64,
    duration: usize,
    start_offset: usize,
) -> Result<ScenarioSpec, ScenarioError> {
    ScenarioSpec::gradual_change(rotation_pct, duration, start_offset)
}

/// Types of preset scenarios.
///
/// # Examples
/// ```
/// use forecast_scenarios::PresetScenarioType;
///
/// let spec = PresetScenarioType::MarketCrash.generate();
/// assert_eq!(spec.magnitude_pct(), -20.0);
/// assert_eq!(spec.recovery_days(), Some(14));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PresetScenarioType {
    /// -20% market event, day 5, 14-day recovery
    MarketCrash,
    /// +15% spike, day 10
    EarningsBeat,
    /// +8% gradual change over 20 days, day 1
    SectorRotation,
}

impl PresetScenarioType {
    /// All presets in catalogue order.
    pub fn all() -> Vec<Self> {
        vec![Self::MarketCrash, Self::EarningsBeat, Self::SectorRotation]
    }

    /// Registry key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::MarketCrash => "market_crash",
            Self::EarningsBeat => "earnings_beat",
            Self::SectorRotation => "sector_rotation",
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MarketCrash => "Market Crash",
            Self::EarningsBeat => "Earnings Beat",
            Self::SectorRotation => "Sector Rotation",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MarketCrash => "Broad sell-off of 20% on day 5, recovering over 14 days",
            Self::EarningsBeat => "Earnings surprise lifting the price 15% on day 10",
            Self::SectorRotation => "Steady 8% re-rating over 20 days from day 1",
        }
    }

    /// Generate the preset spec with its default parameters.
    pub fn generate(&self) -> ScenarioSpec {
        match self {
            Self::MarketCrash => ScenarioSpec::from_valid_parts(
                ScenarioKind::MarketEvent { recovery_days: 14 },
                -20.0,
                5,
            ),
            Self::EarningsBeat => {
                ScenarioSpec::from_valid_parts(ScenarioKind::OneTimeSpike, 15.0, 10)
            }
            Self::SectorRotation => ScenarioSpec::from_valid_parts(
                ScenarioKind::GradualChange { duration: 20 },
                8.0,
                1,
            ),
        }
    }

    /// Generate all presets keyed by [`PresetScenarioType::key`].
    pub fn generate_all() -> Vec<(String, ScenarioSpec)> {
        Self::all()
            .into_iter()
            .map(|p| (p.key().to_string(), p.generate()))
            .collect()
    }
}

impl std::str::FromStr for PresetScenarioType {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ScenarioError::InvalidSpec(format!("unknown preset '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_defaults() {
        let crash = PresetScenarioType::MarketCrash.generate();
        assert_eq!(crash, market_crash(-20.0, 5, 14).unwrap());
        assert_eq!(crash.kind().label(), "event");

        let beat = PresetScenarioType::EarningsBeat.generate();
        assert_eq!(beat, earnings_beat(15.0, 10).unwrap());

        let rotation = PresetScenarioType::SectorRotation.generate();
        assert_eq!(rotation, sector_rotation(8.0, 20, 1).unwrap());
        assert_eq!(rotation.duration(), Some(20));
    }

    #[test]
    fn test_preset_generated_specs_are_valid() {
        for preset in PresetScenarioType::all() {
            let spec = preset.generate();
            let rebuilt = ScenarioSpec::new(spec.kind(), spec.magnitude_pct(), spec.start_offset());
            assert_eq!(rebuilt.unwrap(), spec);
        }
    }

    #[test]
    fn test_preset_factories_validate() {
        assert!(market_crash(-20.0, 5, 0).is_err());
        assert!(earnings_beat(f64::NAN, 10).is_err());
        assert!(sector_rotation(8.0, 20, 0).is_err());
    }

    #[test]
    fn test_preset_names_and_keys() {
        assert_eq!(PresetScenarioType::MarketCrash.name(), "Market Crash");
        assert_eq!(PresetScenarioType::SectorRotation.key(), "sector_rotation");
        assert!(PresetScenarioType::EarningsBeat.description().contains("15%"));
        assert_eq!(
            "earnings_beat".parse::<PresetScenarioType>().unwrap(),
            PresetScenarioType::EarningsBeat
        );
        assert!("bogus".parse::<PresetScenarioType>().is_err());
    }

    #[test]
    fn test_generate_all_order() {
        let keys: Vec<String> = PresetScenarioType::generate_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["market_crash", "earnings_beat", "sector_rotation"]);
    }
}
