//! Scenario definitions.
//!
//! A [`ScenarioSpec`] is a validated description of one hypothetical
//! perturbation: its temporal shape ([`ScenarioKind`]), signed magnitude in
//! percent, and the 1-based horizon day on which it starts.

use std::fmt;

use crate::error::ScenarioError;

/// Default ramp length for a gradual change when none is given.
pub const DEFAULT_DURATION: usize = 7;

/// Default recovery period for a market event when none is given.
pub const DEFAULT_RECOVERY_DAYS: usize = 5;

/// Temporal shape of a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum ScenarioKind {
    /// Immediate shock decaying exponentially
    #[cfg_attr(feature = "serde", serde(rename = "spike"))]
    OneTimeSpike,
    /// Linear ramp to the full magnitude, then sustained
    #[cfg_attr(feature = "serde", serde(rename = "gradual"))]
    GradualChange {
        /// Ramp length in days
        #[cfg_attr(feature = "serde", serde(default = "default_duration"))]
        duration: usize,
    },
    /// Immediate shock reverting linearly to zero
    #[cfg_attr(feature = "serde", serde(rename = "event"))]
    MarketEvent {
        /// Recovery period in days
        #[cfg_attr(feature = "serde", serde(default = "default_recovery_days"))]
        recovery_days: usize,
    },
}

#[cfg(feature = "serde")]
fn default_duration() -> usize {
    DEFAULT_DURATION
}

#[cfg(feature = "serde")]
fn default_recovery_days() -> usize {
    DEFAULT_RECOVERY_DAYS
}

impl ScenarioKind {
    /// Short machine label (`spike`, `gradual`, `event`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneTimeSpike => "spike",
            Self::GradualChange { .. } => "gradual",
            Self::MarketEvent { .. } => "event",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OneTimeSpike => "One-time Spike/Drop",
            Self::GradualChange { .. } => "Gradual Change",
            Self::MarketEvent { .. } => "Market Event",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated scenario description.
///
/// Construct through [`ScenarioSpec::new`] or one of the per-kind
/// constructors; every instance satisfies:
/// - `magnitude_pct` is finite
/// - `start_offset >= 1`
/// - `duration >= 1` / `recovery_days >= 1` where applicable
///
/// # Examples
/// ```
/// use forecast_scenarios::ScenarioSpec;
///
/// let spec = ScenarioSpec::gradual_change(8.0, 20, 1).unwrap();
/// assert_eq!(spec.duration(), Some(20));
/// assert_eq!(spec.description(), "Gradual 8% increase over 20 days");
///
/// assert!(ScenarioSpec::one_time_spike(f64::NAN, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawScenarioSpec")
)]
pub struct ScenarioSpec {
    #[cfg_attr(feature = "serde", serde(flatten))]
    kind: ScenarioKind,
    magnitude_pct: f64,
    start_offset: usize,
}

/// Unvalidated wire form of [`ScenarioSpec`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScenarioSpec {
    #[serde(flatten)]
    kind: ScenarioKind,
    #[serde(alias = "magnitude")]
    magnitude_pct: f64,
    #[serde(alias = "start_day", default = "default_start_offset")]
    start_offset: usize,
}

#[cfg(feature = "serde")]
fn default_start_offset() -> usize {
    1
}

#[cfg(feature = "serde")]
impl TryFrom<RawScenarioSpec> for ScenarioSpec {
    type Error = ScenarioError;

    fn try_from(raw: RawScenarioSpec) -> Result<Self, Self::Error> {
        ScenarioSpec::new(raw.kind, raw.magnitude_pct, raw.start_offset)
    }
}

impl ScenarioSpec {
    /// Create a validated spec.
    ///
    /// # Errors
    /// `InvalidSpec` if the magnitude is not finite, `start_offset < 1`, or a
    /// kind-specific length is zero.
    pub fn new(
        kind: ScenarioKind,
        magnitude_pct: f64,
        start_offset: usize,
    ) -> Result<Self, ScenarioError> {
        if !magnitude_pct.is_finite() {
            return Err(ScenarioError::InvalidSpec(format!(
                "magnitude must be finite, got {}",
                magnitude_pct
            )));
        }
        if start_offset < 1 {
            return Err(ScenarioError::InvalidSpec(
                "start_offset must be at least 1".to_string(),
            ));
        }
        match kind {
            ScenarioKind::GradualChange { duration: 0 } => {
                return Err(ScenarioError::InvalidSpec(
                    "duration must be at least 1".to_string(),
                ))
            }
            ScenarioKind::MarketEvent { recovery_days: 0 } => {
                return Err(ScenarioError::InvalidSpec(
                    "recovery_days must be at least 1".to_string(),
                ))
            }
            _ => {}
        }
        Ok(Self {
            kind,
            magnitude_pct,
            start_offset,
        })
    }

    /// Build from parameters already known to be valid.
    pub(crate) const fn from_valid_parts(
        kind: ScenarioKind,
        magnitude_pct: f64,
        start_offset: usize,
    ) -> Self {
        Self {
            kind,
            magnitude_pct,
            start_offset,
        }
    }

    /// One-time spike (or drop) with exponential recovery.
    pub fn one_time_spike(magnitude_pct: f64, start_offset: usize) -> Result<Self, ScenarioError> {
        Self::new(ScenarioKind::OneTimeSpike, magnitude_pct, start_offset)
    }

    /// Gradual change ramping over `duration` days and then sustained.
    pub fn gradual_change(
        magnitude_pct: f64,
        duration: usize,
        start_offset: usize,
    ) -> Result<Self, ScenarioError> {
        Self::new(
            ScenarioKind::GradualChange { duration },
            magnitude_pct,
            start_offset,
        )
    }

    /// Market event reverting to the baseline over `recovery_days` days.
    pub fn market_event(
        magnitude_pct: f64,
        recovery_days: usize,
        start_offset: usize,
    ) -> Result<Self, ScenarioError> {
        Self::new(
            ScenarioKind::MarketEvent { recovery_days },
            magnitude_pct,
            start_offset,
        )
    }

    /// Temporal shape.
    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    /// Signed magnitude in percent.
    pub fn magnitude_pct(&self) -> f64 {
        self.magnitude_pct
    }

    /// 1-based horizon day on which the scenario starts.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Ramp length for a gradual change.
    pub fn duration(&self) -> Option<usize> {
        match self.kind {
            ScenarioKind::GradualChange { duration } => Some(duration),
            _ => None,
        }
    }

    /// Recovery period for a market event.
    pub fn recovery_days(&self) -> Option<usize> {
        match self.kind {
            ScenarioKind::MarketEvent { recovery_days } => Some(recovery_days),
            _ => None,
        }
    }

    /// Series index of the first affected record for a history of
    /// `history_len` rows.
    pub fn start_index(&self, history_len: usize) -> usize {
        history_len.saturating_add(self.start_offset - 1)
    }

    fn magnitude_label(&self) -> f64 {
        self.magnitude_pct.abs()
    }

    fn is_positive(&self) -> bool {
        self.magnitude_pct > 0.0
    }

    /// One-line summary built from the spec fields only.
    pub fn description(&self) -> String {
        let m = self.magnitude_label();
        match self.kind {
            ScenarioKind::OneTimeSpike => format!(
                "{}% {} on day {} with recovery",
                m,
                if self.is_positive() { "spike" } else { "drop" },
                self.start_offset
            ),
            ScenarioKind::GradualChange { duration } => format!(
                "Gradual {}% {} over {} days",
                m,
                if self.is_positive() {
                    "increase"
                } else {
                    "decrease"
                },
                duration
            ),
            ScenarioKind::MarketEvent { recovery_days } => format!(
                "Market event: {}% {} impact with {}-day recovery",
                m,
                if self.is_positive() {
                    "positive"
                } else {
                    "negative"
                },
                recovery_days
            ),
        }
    }

    /// Longer sentence fragment suitable for an analysis summary.
    ///
    /// # Examples
    /// ```
    /// use forecast_scenarios::ScenarioSpec;
    ///
    /// let spec = ScenarioSpec::one_time_spike(10.0, 5).unwrap();
    /// assert_eq!(spec.narrative(), "a 10% spike on day 5 with exponential recovery");
    /// ```
    pub fn narrative(&self) -> String {
        let m = self.magnitude_label();
        match self.kind {
            ScenarioKind::OneTimeSpike => format!(
                "a {}% {} on day {} with exponential recovery",
                m,
                if self.is_positive() { "spike" } else { "drop" },
                self.start_offset
            ),
            ScenarioKind::GradualChange { duration } => format!(
                "a gradual {}% {} over {} days starting on day {}",
                m,
                if self.is_positive() {
                    "increase"
                } else {
                    "decrease"
                },
                duration,
                self.start_offset
            ),
            ScenarioKind::MarketEvent { recovery_days } => format!(
                "a {}% {} market event on day {} with {}-day recovery",
                m,
                if self.is_positive() {
                    "positive"
                } else {
                    "negative"
                },
                self.start_offset,
                recovery_days
            ),
        }
    }
}
