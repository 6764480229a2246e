//! Forecast metrics and baseline comparisons.
//!
//! This module provides:
//! - [`MetricKind`] / [`ForecastMetrics`]: descriptive statistics of a
//!   series' point values
//! - [`BaselineDelta`]: final-price difference against the baseline
//! - [`ImpactReport`] / [`ImpactLevel`]: current-price relative view with a
//!   severity classification

use std::collections::BTreeMap;
use std::fmt;

use forecast_core::math::statistics::{max, mean, min, sample_std_dev};
use forecast_core::types::ForecastSeries;

use crate::error::ScenarioError;

/// A single comparable metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MetricKind {
    /// Point value of the last record
    FinalPrice,
    /// Largest point value
    MaxPrice,
    /// Smallest point value
    MinPrice,
    /// Sample standard deviation of point values
    Volatility,
    /// Mean point value
    AvgPrice,
}

impl MetricKind {
    /// Metrics reported when none are requested.
    pub const DEFAULT: [MetricKind; 4] = [
        MetricKind::FinalPrice,
        MetricKind::MaxPrice,
        MetricKind::MinPrice,
        MetricKind::Volatility,
    ];

    /// Every metric.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::FinalPrice,
        MetricKind::MaxPrice,
        MetricKind::MinPrice,
        MetricKind::Volatility,
        MetricKind::AvgPrice,
    ];

    /// Snake-case identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FinalPrice => "final_price",
            Self::MaxPrice => "max_price",
            Self::MinPrice => "min_price",
            Self::Volatility => "volatility",
            Self::AvgPrice => "avg_price",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selected metric values. Undefined metrics are omitted.
pub type MetricSet = BTreeMap<MetricKind, f64>;

/// All metrics of one series, computed once.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastMetrics {
    /// Point value of the last record
    pub final_price: f64,
    /// Largest point value
    pub max_price: f64,
    /// Smallest point value
    pub min_price: f64,
    /// Sample standard deviation; `None` for fewer than two records
    pub volatility: Option<f64>,
    /// Mean point value
    pub avg_price: f64,
}

impl ForecastMetrics {
    /// Compute metrics over the series' point values.
    ///
    /// Returns `None` for an empty series.
    pub fn from_series(series: &ForecastSeries) -> Option<Self> {
        let values = series.point_values();
        Some(Self {
            final_price: *values.last()?,
            max_price: max(&values)?,
            min_price: min(&values)?,
            volatility: sample_std_dev(&values),
            avg_price: mean(&values)?,
        })
    }

    /// Value of one metric.
    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::FinalPrice => Some(self.final_price),
            MetricKind::MaxPrice => Some(self.max_price),
            MetricKind::MinPrice => Some(self.min_price),
            MetricKind::Volatility => self.volatility,
            MetricKind::AvgPrice => Some(self.avg_price),
        }
    }

    /// Values of the requested metrics.
    pub fn select(&self, kinds: &[MetricKind]) -> MetricSet {
        kinds
            .iter()
            .filter_map(|&k| self.get(k).map(|v| (k, v)))
            .collect()
    }
}

/// Final-price difference of a scenario against the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineDelta {
    /// `scenario.final - baseline.final`
    pub final_price_diff: f64,
    /// `diff / baseline.final × 100`
    pub final_price_pct: f64,
}

impl BaselineDelta {
    /// Compare two final prices.
    ///
    /// # Errors
    /// `DivisionUndefined` when `baseline_final` is zero.
    pub fn between(scenario_final: f64, baseline_final: f64) -> Result<Self, ScenarioError> {
        let diff = scenario_final - baseline_final;
        Ok(Self {
            final_price_diff: diff,
            final_price_pct: percent_of(diff, baseline_final, "baseline final price")?,
        })
    }
}

fn percent_of(amount: f64, reference: f64, what: &'static str) -> Result<f64, ScenarioError> {
    if reference == 0.0 {
        return Err(ScenarioError::DivisionUndefined(what));
    }
    Ok(amount / reference * 100.0)
}

/// Severity of a scenario's final-price impact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ImpactLevel {
    /// `|impact| <= 2%`
    Minor,
    /// `2% < |impact| <= 5%`
    Moderate,
    /// `|impact| > 5%`
    Significant,
}

impl ImpactLevel {
    /// Classify a percentage impact.
    pub fn classify(impact_pct: f64) -> Self {
        let magnitude = impact_pct.abs();
        if magnitude > 5.0 {
            Self::Significant
        } else if magnitude > 2.0 {
            Self::Moderate
        } else {
            Self::Minor
        }
    }

    /// Lower-case adjective.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Significant => "significant",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scenario impact relative to the current price and the baseline.
///
/// # Examples
/// ```
/// use forecast_scenarios::{ImpactLevel, ImpactReport};
///
/// let report = ImpactReport::new(100.0, 110.0, 99.0).unwrap();
/// assert!((report.baseline_change_pct - 10.0).abs() < 1e-12);
/// assert!((report.impact_pct + 10.0).abs() < 1e-12);
/// assert_eq!(report.level, ImpactLevel::Significant);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactReport {
    /// Last observed value
    pub current_price: f64,
    /// Baseline final point value
    pub baseline_final: f64,
    /// Baseline final vs current, in percent
    pub baseline_change_pct: f64,
    /// Scenario final point value
    pub scenario_final: f64,
    /// Scenario final vs current, in percent
    pub scenario_change_pct: f64,
    /// `scenario_final - baseline_final`
    pub delta_vs_baseline: f64,
    /// Delta vs baseline final, in percent
    pub impact_pct: f64,
    /// Severity of `impact_pct`
    pub level: ImpactLevel,
}

impl ImpactReport {
    /// Build a report.
    ///
    /// # Errors
    /// `DivisionUndefined` when `current_price` or `baseline_final` is zero.
    pub fn new(
        current_price: f64,
        baseline_final: f64,
        scenario_final: f64,
    ) -> Result<Self, ScenarioError> {
        let delta = BaselineDelta::between(scenario_final, baseline_final)?;
        Ok(Self {
            current_price,
            baseline_final,
            baseline_change_pct: percent_of(
                baseline_final - current_price,
                current_price,
                "current price",
            )?,
            scenario_final,
            scenario_change_pct: percent_of(
                scenario_final - current_price,
                current_price,
                "current price",
            )?,
            delta_vs_baseline: delta.final_price_diff,
            impact_pct: delta.final_price_pct,
            level: ImpactLevel::classify(delta.final_price_pct),
        })
    }

    /// One-sentence severity statement.
    pub fn headline(&self) -> String {
        format!(
            "This scenario shows a {} {:.1}% impact on the final forecast price.",
            self.level,
            self.impact_pct.abs()
        )
    }
}
