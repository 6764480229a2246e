//! # Forecast Scenarios (L4: What-If Analysis)
//!
//! Hypothetical perturbations of a baseline forecast and their quantified
//! impact.
//!
//! This crate provides:
//! - Scenario definitions ([`ScenarioSpec`], [`ScenarioKind`])
//! - The pure transform [`ScenarioEngine`] with configurable [`ShapeParams`]
//! - Preset scenarios ([`PresetScenarioType`], [`presets`])
//! - Metrics and impact classification ([`ForecastMetrics`], [`ImpactReport`])
//! - The stateful session [`WhatIfAnalyzer`]
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │               WhatIfAnalyzer                  │
//! ├───────────────────────────────────────────────┤
//! │  Forecaster      - baseline from history      │
//! │  ScenarioEngine  - baseline + spec -> series  │
//! │  ScenarioResult  - named series + metrics     │
//! │  Comparison      - metrics vs baseline        │
//! └───────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod analyzer;
mod engine;
mod error;
mod metrics;
pub mod presets;
mod spec;

pub use analyzer::{
    Baseline, ScenarioComparison, ScenarioMetrics, ScenarioResult, ScenarioSummary,
    WhatIfAnalyzer,
};
pub use engine::{ScenarioEngine, ShapeParams};
pub use error::ScenarioError;
pub use metrics::{BaselineDelta, ForecastMetrics, ImpactLevel, ImpactReport, MetricKind, MetricSet};
pub use presets::PresetScenarioType;
pub use spec::{ScenarioKind, ScenarioSpec, DEFAULT_DURATION, DEFAULT_RECOVERY_DAYS};
