//! Forecast and history series containers.
//!
//! - [`ForecastPoint`]: one `{date, point, lower, upper}` record
//! - [`ForecastSeries`]: ordered records, the first `history_len` of which
//!   are the in-sample fit and the rest the forecast horizon
//! - [`Observation`] / [`HistoricalSeries`]: observed `{ds, y}` history

use super::error::SeriesError;
use super::time::Date;

/// A single forecast record.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastPoint {
    /// Calendar date of the record
    pub date: Date,
    /// Point estimate
    pub point: f64,
    /// Lower interval bound
    pub lower: f64,
    /// Upper interval bound
    pub upper: f64,
}

impl ForecastPoint {
    /// Create a new forecast record.
    pub fn new(date: Date, point: f64, lower: f64, upper: f64) -> Self {
        Self {
            date,
            point,
            lower,
            upper,
        }
    }

    /// Check `lower <= point <= upper`.
    pub fn is_ordered(&self) -> bool {
        self.lower <= self.point && self.point <= self.upper
    }

    /// Check that all three values are finite.
    pub fn is_finite(&self) -> bool {
        self.point.is_finite() && self.lower.is_finite() && self.upper.is_finite()
    }

    /// Interval width (`upper - lower`).
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Ordered, time-indexed forecast series.
///
/// Indices `0..history_len` reproduce the historical fit; indices
/// `history_len..len` are the forecast horizon. Every record satisfies
/// `lower <= point <= upper` and dates are strictly increasing.
///
/// A series is never mutated in place; transforms build a new series via
/// [`ForecastSeries::rebuild_from`].
///
/// # Examples
///
/// ```
/// use forecast_core::types::{Date, ForecastSeries};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let dates: Vec<Date> = (0..4).map(|i| start.add_days(i)).collect();
/// let series = ForecastSeries::from_columns(
///     dates,
///     vec![10.0, 11.0, 12.0, 13.0],
///     vec![9.0, 10.0, 11.0, 12.0],
///     vec![11.0, 12.0, 13.0, 14.0],
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(series.horizon_len(), 2);
/// assert_eq!(series.final_point(), Some(13.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawForecastSeries")
)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
    history_len: usize,
}

/// Unvalidated wire form of [`ForecastSeries`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawForecastSeries {
    points: Vec<ForecastPoint>,
    history_len: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawForecastSeries> for ForecastSeries {
    type Error = SeriesError;

    fn try_from(raw: RawForecastSeries) -> Result<Self, Self::Error> {
        ForecastSeries::new(raw.points, raw.history_len)
    }
}

impl ForecastSeries {
    /// Create a validated series from records.
    ///
    /// # Errors
    ///
    /// - `HistoryTooLong` if `history_len > points.len()`
    /// - `NonFinite` / `IntervalOrdering` for the first offending record
    /// - `UnorderedDates` if dates are not strictly increasing
    pub fn new(points: Vec<ForecastPoint>, history_len: usize) -> Result<Self, SeriesError> {
        if history_len > points.len() {
            return Err(SeriesError::HistoryTooLong {
                history_len,
                len: points.len(),
            });
        }
        for (index, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }
            if !p.is_ordered() {
                return Err(SeriesError::IntervalOrdering { index });
            }
            if index > 0 && points[index - 1].date >= p.date {
                return Err(SeriesError::UnorderedDates { index });
            }
        }
        Ok(Self {
            points,
            history_len,
        })
    }

    /// Create a validated series from parallel columns.
    pub fn from_columns(
        dates: Vec<Date>,
        point: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
        history_len: usize,
    ) -> Result<Self, SeriesError> {
        let n = dates.len();
        if point.len() != n || lower.len() != n || upper.len() != n {
            return Err(SeriesError::LengthMismatch {
                dates: n,
                point: point.len(),
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        let points = dates
            .into_iter()
            .zip(point)
            .zip(lower)
            .zip(upper)
            .map(|(((date, p), l), u)| ForecastPoint::new(date, p, l, u))
            .collect();
        Self::new(points, history_len)
    }

    /// Build a new series sharing this series' dates and history length.
    ///
    /// Records before `start` are copied unchanged. For every index
    /// `i >= start`, `f(i, &self[i])` supplies the new values; the date is
    /// always taken from `self`, so length and dates cannot drift.
    pub fn rebuild_from<F>(&self, start: usize, mut f: F) -> ForecastSeries
    where
        F: FnMut(usize, &ForecastPoint) -> ForecastPoint,
    {
        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i < start {
                    *p
                } else {
                    ForecastPoint {
                        date: p.date,
                        ..f(i, p)
                    }
                }
            })
            .collect();
        ForecastSeries {
            points,
            history_len: self.history_len,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series has no records.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of history-anchored records.
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Number of forecast-horizon records.
    pub fn horizon_len(&self) -> usize {
        self.points.len() - self.history_len
    }

    /// All records.
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Forecast-horizon records only.
    pub fn horizon(&self) -> &[ForecastPoint] {
        &self.points[self.history_len..]
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&ForecastPoint> {
        self.points.get(index)
    }

    /// Dates column.
    pub fn dates(&self) -> Vec<Date> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Point estimate column.
    pub fn point_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.point).collect()
    }

    /// Lower bound column.
    pub fn lower_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lower).collect()
    }

    /// Upper bound column.
    pub fn upper_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.upper).collect()
    }

    /// Point estimate of the last record.
    pub fn final_point(&self) -> Option<f64> {
        self.points.last().map(|p| p.point)
    }

    /// Iterate over records.
    pub fn iter(&self) -> std::slice::Iter<'_, ForecastPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a ForecastPoint;
    type IntoIter = std::slice::Iter<'a, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A single historical observation (`ds`, `y`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Observation date
    pub ds: Date,
    /// Observed value (closing price)
    pub y: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(ds: Date, y: f64) -> Self {
        Self { ds, y }
    }
}

/// Historical observations sorted ascending by date.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawHistoricalSeries")
)]
pub struct HistoricalSeries {
    observations: Vec<Observation>,
}

/// Unvalidated wire form of [`HistoricalSeries`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHistoricalSeries {
    observations: Vec<Observation>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHistoricalSeries> for HistoricalSeries {
    type Error = SeriesError;

    fn try_from(raw: RawHistoricalSeries) -> Result<Self, Self::Error> {
        HistoricalSeries::new(raw.observations)
    }
}

impl HistoricalSeries {
    /// Create a history, sorting observations ascending by date.
    ///
    /// # Errors
    ///
    /// `NonFinite` if any observed value is NaN or infinite (index refers to
    /// the sorted order).
    pub fn new(mut observations: Vec<Observation>) -> Result<Self, SeriesError> {
        observations.sort_by_key(|o| o.ds);
        if let Some(index) = observations.iter().position(|o| !o.y.is_finite()) {
            return Err(SeriesError::NonFinite { index });
        }
        Ok(Self { observations })
    }

    /// An empty history.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Observed values column.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.y).collect()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Earliest observation.
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }
}
