//! Index series store for historical monthly changes.
//!
//! Provides storage and retrieval of monthly price-index observations
//! (IPCA, or any monthly-change series) for reference-value accumulation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use tesouro_core::types::{Date, IndexPoint};

/// Ordered store of monthly index observations.
///
/// Internally uses a `BTreeMap` keyed by publication date, which keeps the
/// series chronological and deduplicated by construction and enables
/// efficient inclusive range queries for accumulation windows.
///
/// # Example
///
/// ```rust
/// use tesouro_bonds::indices::IndexSeries;
/// use tesouro_core::types::{Date, IndexPoint};
/// use rust_decimal_macros::dec;
///
/// let mut series = IndexSeries::new();
/// series.insert(IndexPoint::new(Date::from_ymd(2024, 9, 1).unwrap(), dec!(0.0044)));
/// series.insert(IndexPoint::new(Date::from_ymd(2024, 10, 1).unwrap(), dec!(0.0056)));
///
/// let start = Date::from_ymd(2024, 9, 1).unwrap();
/// let end = Date::from_ymd(2024, 12, 31).unwrap();
/// assert_eq!(series.range(start, end).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSeries {
    points: BTreeMap<Date, Decimal>,
}

impl IndexSeries {
    /// Creates a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Builds a series from an iterator of points.
    ///
    /// Later points win on duplicate dates.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = IndexPoint>) -> Self {
        let mut series = Self::new();
        for point in points {
            series.insert(point);
        }
        series
    }

    /// Inserts a single observation, replacing any existing one on the
    /// same date.
    pub fn insert(&mut self, point: IndexPoint) {
        self.points.insert(point.date, point.monthly_change);
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns all observations with dates in `[start, end]`, in
    /// chronological order.
    #[must_use]
    pub fn range(&self, start: Date, end: Date) -> Vec<IndexPoint> {
        if start > end {
            return Vec::new();
        }
        self.points
            .range(start..=end)
            .map(|(date, change)| IndexPoint::new(*date, *change))
            .collect()
    }

    /// Returns the latest observation on or before the given date.
    #[must_use]
    pub fn last_on_or_before(&self, date: Date) -> Option<IndexPoint> {
        self.points
            .range(..=date)
            .next_back()
            .map(|(d, change)| IndexPoint::new(*d, *change))
    }

    /// Returns the product of growth factors over `[start, end]`.
    ///
    /// An empty window yields `1` (the neutral factor); callers that need
    /// to distinguish "no data" from "no growth" should check the range
    /// first.
    #[must_use]
    pub fn accumulation_factor(&self, start: Date, end: Date) -> Decimal {
        self.range(start, end)
            .iter()
            .fold(Decimal::ONE, |acc, point| acc * point.growth_factor())
    }
}
