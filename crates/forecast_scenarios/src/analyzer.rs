//! What-if analysis session.
//!
//! [`WhatIfAnalyzer`] owns one history, one baseline and a registry of named
//! scenarios. It is an ordinary value held by the caller; nothing here is
//! global.

use std::borrow::Cow;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use forecast_core::types::{ForecastSeries, HistoricalSeries};
use forecast_models::Forecaster;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::engine::ScenarioEngine;
use crate::error::ScenarioError;
use crate::metrics::{BaselineDelta, ForecastMetrics, ImpactReport, MetricKind, MetricSet};
use crate::spec::{ScenarioKind, ScenarioSpec};

/// The session baseline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Baseline {
    /// Horizon length the baseline was generated for
    pub periods: usize,
    /// Baseline series
    pub series: ForecastSeries,
    /// Metrics of `series`
    pub metrics: ForecastMetrics,
}

/// A stored scenario outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioResult {
    /// Registry key
    pub name: String,
    /// Applied scenario
    pub spec: ScenarioSpec,
    /// Horizon length
    pub periods: usize,
    /// Modified series
    pub series: ForecastSeries,
    /// Metrics of `series`
    pub metrics: ForecastMetrics,
    /// Final point of the baseline the scenario was applied to
    pub baseline_final: f64,
}

/// Presentation-ready scenario summary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioSummary {
    /// Registry key
    pub name: String,
    /// Temporal shape
    pub kind: ScenarioKind,
    /// Signed magnitude in percent
    pub magnitude_pct: f64,
    /// 1-based horizon start day
    pub start_offset: usize,
    /// Final point value
    pub final_price: f64,
    /// Largest point value
    pub max_price: f64,
    /// Smallest point value
    pub min_price: f64,
    /// Template description of the spec
    pub description: String,
}

/// Metrics of one scenario within a comparison.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioMetrics {
    /// Requested metric values
    pub metrics: MetricSet,
    /// Final-price difference against the session baseline
    pub vs_baseline: BaselineDelta,
}

/// Baseline metrics plus per-scenario metrics keyed by name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioComparison {
    /// Requested baseline metric values
    pub baseline: MetricSet,
    /// Scenario metrics in name order
    pub scenarios: BTreeMap<String, ScenarioMetrics>,
}

/// Stateful what-if session over a single history.
///
/// # Examples
/// ```
/// use forecast_core::types::{Date, HistoricalSeries, Observation};
/// use forecast_models::LinearTrendForecaster;
/// use forecast_scenarios::{MetricKind, PresetScenarioType, WhatIfAnalyzer};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let history = HistoricalSeries::new(
///     (0..20).map(|i| Observation::new(start.add_days(i), 100.0 + i as f64)).collect(),
/// ).unwrap();
///
/// let mut analyzer = WhatIfAnalyzer::new(history, LinearTrendForecaster::default()).unwrap();
/// analyzer.generate_baseline(30).unwrap();
/// analyzer
///     .add_scenario("crash", PresetScenarioType::MarketCrash.generate(), 30)
///     .unwrap();
///
/// let comparison = analyzer.compare_scenarios(&MetricKind::DEFAULT).unwrap();
/// assert!(comparison.scenarios.contains_key("crash"));
/// ```
#[derive(Debug)]
pub struct WhatIfAnalyzer<F: Forecaster> {
    history: HistoricalSeries,
    forecaster: F,
    engine: ScenarioEngine,
    baseline: Option<Baseline>,
    scenarios: BTreeMap<String, ScenarioResult>,
}

impl<F: Forecaster> WhatIfAnalyzer<F> {
    /// Start a session.
    ///
    /// # Errors
    /// `InsufficientHistory` for an empty history.
    pub fn new(history: HistoricalSeries, forecaster: F) -> Result<Self, ScenarioError> {
        if history.is_empty() {
            return Err(ScenarioError::InsufficientHistory { got: 0 });
        }
        Ok(Self {
            history,
            forecaster,
            engine: ScenarioEngine::default(),
            baseline: None,
            scenarios: BTreeMap::new(),
        })
    }

    /// Use a specific engine.
    pub fn with_engine(mut self, engine: ScenarioEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Session history.
    pub fn history(&self) -> &HistoricalSeries {
        &self.history
    }

    /// The forecaster producing baselines.
    pub fn forecaster(&self) -> &F {
        &self.forecaster
    }

    /// Last observed value.
    pub fn current_price(&self) -> Option<f64> {
        self.history.last().map(|o| o.y)
    }

    /// Engine in use.
    pub fn engine(&self) -> &ScenarioEngine {
        &self.engine
    }

    /// Current baseline, if generated.
    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    /// Stored scenario by name.
    pub fn scenario(&self, name: &str) -> Option<&ScenarioResult> {
        self.scenarios.get(name)
    }

    /// Stored scenarios in name order.
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.scenarios.values()
    }

    /// Number of stored scenarios.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Remove a stored scenario.
    pub fn remove_scenario(&mut self, name: &str) -> Option<ScenarioResult> {
        self.scenarios.remove(name)
    }

    /// Forecast `periods` days and make it the session baseline.
    ///
    /// Stored scenarios are re-evaluated against the new baseline.
    pub fn generate_baseline(&mut self, periods: usize) -> Result<&ForecastSeries, ScenarioError> {
        let series = self.forecaster.forecast(&self.history, periods)?;
        let metrics = ForecastMetrics::from_series(&series).ok_or(ScenarioError::EmptyForecast)?;
        let baseline = Baseline {
            periods,
            series,
            metrics,
        };

        let stored: Vec<(String, ScenarioSpec, usize)> = self
            .scenarios
            .values()
            .map(|r| (r.name.clone(), r.spec, r.periods))
            .collect();
        let refreshed: Vec<ScenarioResult> = stored
            .par_iter()
            .map(|(name, spec, p)| self.evaluate(&baseline, name, spec, *p))
            .collect::<Result<_, _>>()?;
        for result in refreshed {
            self.scenarios.insert(result.name.clone(), result);
        }

        info!(
            forecaster = self.forecaster.name(),
            observations = self.history.len(),
            periods,
            refreshed = stored.len(),
            "Generated baseline"
        );

        Ok(&self.baseline.insert(baseline).series)
    }

    /// Apply `spec` and store the result under `name`, replacing any
    /// scenario of the same name.
    ///
    /// When `periods` differs from the baseline horizon, a baseline of the
    /// requested horizon is forecast for this scenario.
    pub fn add_scenario(
        &mut self,
        name: impl Into<String>,
        spec: ScenarioSpec,
        periods: usize,
    ) -> Result<&ForecastSeries, ScenarioError> {
        let name = name.into();
        let baseline = self.baseline.as_ref().ok_or(ScenarioError::NoBaseline)?;
        let result = self.evaluate(baseline, &name, &spec, periods)?;
        debug!(name = %name, kind = spec.kind().label(), "Stored scenario");

        let slot = match self.scenarios.entry(name) {
            Entry::Occupied(mut e) => {
                e.insert(result);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(result),
        };
        Ok(&slot.series)
    }

    /// Evaluate a batch in parallel, then store in input order.
    ///
    /// A name repeated within the batch resolves to its last occurrence.
    /// Nothing is stored if any scenario fails.
    pub fn add_scenarios<I, S>(&mut self, batch: I, periods: usize) -> Result<(), ScenarioError>
    where
        I: IntoIterator<Item = (S, ScenarioSpec)>,
        S: Into<String>,
    {
        let batch: Vec<(String, ScenarioSpec)> =
            batch.into_iter().map(|(n, s)| (n.into(), s)).collect();
        let baseline = self.baseline.as_ref().ok_or(ScenarioError::NoBaseline)?;
        let results: Vec<ScenarioResult> = batch
            .par_iter()
            .map(|(name, spec)| self.evaluate(baseline, name, spec, periods))
            .collect::<Result<_, _>>()?;

        debug!(count = results.len(), "Stored scenario batch");
        for result in results {
            self.scenarios.insert(result.name.clone(), result);
        }
        Ok(())
    }

    /// Compare every stored scenario against the baseline.
    ///
    /// # Errors
    /// - `NoBaseline` before `generate_baseline`
    /// - `DivisionUndefined` if a scenario exists and the baseline final
    ///   price is zero
    pub fn compare_scenarios(
        &self,
        metrics: &[MetricKind],
    ) -> Result<ScenarioComparison, ScenarioError> {
        let baseline = self.baseline.as_ref().ok_or(ScenarioError::NoBaseline)?;
        let scenarios: BTreeMap<String, ScenarioMetrics> = self
            .scenarios
            .iter()
            .map(|(name, result)| -> Result<(String, ScenarioMetrics), ScenarioError> {
                let vs_baseline = BaselineDelta::between(
                    result.metrics.final_price,
                    baseline.metrics.final_price,
                )?;
                Ok((
                    name.clone(),
                    ScenarioMetrics {
                        metrics: result.metrics.select(metrics),
                        vs_baseline,
                    },
                ))
            })
            .collect::<Result<_, _>>()?;

        Ok(ScenarioComparison {
            baseline: baseline.metrics.select(metrics),
            scenarios,
        })
    }

    /// Summary of a stored scenario.
    pub fn get_scenario_summary(&self, name: &str) -> Result<ScenarioSummary, ScenarioError> {
        let result = self
            .scenarios
            .get(name)
            .ok_or_else(|| ScenarioError::ScenarioNotFound(name.to_string()))?;
        Ok(ScenarioSummary {
            name: result.name.clone(),
            kind: result.spec.kind(),
            magnitude_pct: result.spec.magnitude_pct(),
            start_offset: result.spec.start_offset(),
            final_price: result.metrics.final_price,
            max_price: result.metrics.max_price,
            min_price: result.metrics.min_price,
            description: result.spec.description(),
        })
    }

    /// Impact of a stored scenario relative to the current price and its
    /// baseline.
    pub fn impact_report(&self, name: &str) -> Result<ImpactReport, ScenarioError> {
        let result = self
            .scenarios
            .get(name)
            .ok_or_else(|| ScenarioError::ScenarioNotFound(name.to_string()))?;
        let current = self
            .current_price()
            .ok_or(ScenarioError::InsufficientHistory { got: 0 })?;
        ImpactReport::new(current, result.baseline_final, result.metrics.final_price)
    }

    fn evaluate(
        &self,
        baseline: &Baseline,
        name: &str,
        spec: &ScenarioSpec,
        periods: usize,
    ) -> Result<ScenarioResult, ScenarioError> {
        let base: Cow<'_, ForecastSeries> = if periods == baseline.periods {
            Cow::Borrowed(&baseline.series)
        } else {
            Cow::Owned(self.forecaster.forecast(&self.history, periods)?)
        };
        let series = self.engine.apply(&base, spec, base.history_len());
        let metrics = ForecastMetrics::from_series(&series).ok_or(ScenarioError::EmptyForecast)?;
        let baseline_final = base.final_point().ok_or(ScenarioError::EmptyForecast)?;
        Ok(ScenarioResult {
            name: name.to_string(),
            spec: *spec,
            periods,
            series,
            metrics,
            baseline_final,
        })
    }
}
