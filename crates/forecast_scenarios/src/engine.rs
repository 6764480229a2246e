//! Scenario execution engine.
//!
//! Pure transform `baseline + spec -> modified series`. The three temporal
//! shapes live here and nowhere else; the analyzer and the CLI both call
//! [`ScenarioEngine::apply`].
//!
//! Every shape reads the **baseline** value at each index, never a value
//! produced earlier in the same pass.

use forecast_core::types::{ForecastPoint, ForecastSeries};
use tracing::{debug, warn};

use crate::error::ScenarioError;
use crate::spec::{ScenarioKind, ScenarioSpec};

/// Shape constants shared by all scenarios.
///
/// # Fields
/// - `spike_decay_days`: e-folding time of a one-time spike
/// - `lower_band_factor`: share of the point change applied to `lower`
/// - `upper_band_factor`: share of the point change applied to `upper`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ShapeParams {
    /// Spike decay constant in days
    pub spike_decay_days: f64,
    /// Lower-bound band factor
    pub lower_band_factor: f64,
    /// Upper-bound band factor
    pub upper_band_factor: f64,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            spike_decay_days: 10.0,
            lower_band_factor: 0.8,
            upper_band_factor: 1.2,
        }
    }
}

impl ShapeParams {
    /// Set the spike decay constant.
    pub fn with_spike_decay_days(mut self, days: f64) -> Self {
        self.spike_decay_days = days;
        self
    }

    /// Set both band factors.
    pub fn with_band_factors(mut self, lower: f64, upper: f64) -> Self {
        self.lower_band_factor = lower;
        self.upper_band_factor = upper;
        self
    }

    /// Check that every constant is finite and positive.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let fields = [
            ("spike_decay_days", self.spike_decay_days),
            ("lower_band_factor", self.lower_band_factor),
            ("upper_band_factor", self.upper_band_factor),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScenarioError::InvalidSpec(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Engine applying scenario specs to baseline forecasts.
///
/// # Examples
/// ```
/// use forecast_core::types::{Date, ForecastPoint, ForecastSeries};
/// use forecast_scenarios::{ScenarioEngine, ScenarioSpec};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let baseline = ForecastSeries::new(
///     (0..10).map(|i| ForecastPoint::new(start.add_days(i), 100.0, 95.0, 105.0)).collect(),
///     0,
/// ).unwrap();
///
/// let spec = ScenarioSpec::market_event(-30.0, 3, 1).unwrap();
/// let modified = ScenarioEngine::default().apply(&baseline, &spec, 0);
///
/// assert!((modified.get(0).unwrap().point - 70.0).abs() < 1e-9);
/// assert_eq!(modified.get(3).unwrap().point, 100.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScenarioEngine {
    params: ShapeParams,
}

impl ScenarioEngine {
    /// Create an engine with validated shape constants.
    pub fn new(params: ShapeParams) -> Result<Self, ScenarioError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Shape constants in use.
    pub fn params(&self) -> &ShapeParams {
        &self.params
    }

    /// Apply `spec` to `baseline`, treating the first `history_len` records
    /// as history.
    ///
    /// Returns a new series with the baseline's length and dates. Records
    /// before `history_len + start_offset - 1` are copied unchanged; a start
    /// beyond the series end or a zero magnitude returns a copy of the
    /// baseline. Bounds are clamped so `lower <= point <= upper` holds.
    pub fn apply(
        &self,
        baseline: &ForecastSeries,
        spec: &ScenarioSpec,
        history_len: usize,
    ) -> ForecastSeries {
        let start = spec.start_index(history_len);
        if start >= baseline.len() {
            warn!(
                start_index = start,
                len = baseline.len(),
                kind = spec.kind().label(),
                "Scenario starts beyond the forecast horizon; returning baseline"
            );
            return baseline.clone();
        }
        if spec.magnitude_pct() == 0.0 {
            return baseline.clone();
        }

        debug!(
            kind = spec.kind().label(),
            magnitude_pct = spec.magnitude_pct(),
            start_index = start,
            "Applying scenario"
        );

        let m = spec.magnitude_pct() / 100.0;
        match spec.kind() {
            ScenarioKind::OneTimeSpike => {
                baseline.rebuild_from(start, |i, p| self.spike(p, m, (i - start) as f64))
            }
            ScenarioKind::GradualChange { duration } => baseline.rebuild_from(start, |i, p| {
                let k = i - start;
                let change = if k < duration {
                    m * ((k + 1) as f64 / duration as f64)
                } else {
                    m
                };
                self.scale(p, change)
            }),
            ScenarioKind::MarketEvent { recovery_days } => {
                baseline.rebuild_from(start, |i, p| {
                    let k = i - start;
                    if k < recovery_days {
                        let progress = k as f64 / recovery_days as f64;
                        self.scale(p, m * (1.0 - progress))
                    } else {
                        *p
                    }
                })
            }
        }
    }

    /// Additive shock `point × m × e^(-k / decay)`.
    fn spike(&self, p: &ForecastPoint, m: f64, k: f64) -> ForecastPoint {
        let decay = (-k / self.params.spike_decay_days).exp();
        let delta = p.point * m * decay;
        ordered(
            p,
            p.point + delta,
            p.lower + self.params.lower_band_factor * delta,
            p.upper + self.params.upper_band_factor * delta,
        )
    }

    /// Multiplicative change with band-scaled bounds.
    fn scale(&self, p: &ForecastPoint, change: f64) -> ForecastPoint {
        ordered(
            p,
            p.point * (1.0 + change),
            p.lower * (1.0 + self.params.lower_band_factor * change),
            p.upper * (1.0 + self.params.upper_band_factor * change),
        )
    }
}

fn ordered(p: &ForecastPoint, point: f64, lower: f64, upper: f64) -> ForecastPoint {
    let point = saturate(point, p.point);
    let lower = saturate(lower, p.lower);
    let upper = saturate(upper, p.upper);
    ForecastPoint::new(p.date, point, lower.min(point), upper.max(point))
}

/// Clamp overflow to the finite range; NaN falls back to `base`.
fn saturate(value: f64, base: f64) -> f64 {
    if value.is_nan() {
        base
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}
