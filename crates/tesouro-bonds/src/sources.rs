//! Collaborator seams for external data.
//!
//! The engine never fetches anything itself: index series, floating
//! reference values, and catalog entries arrive through these capability
//! traits. Live network adapters (the BCB SGS API, the Tesouro Direto
//! catalog) live outside this workspace; the implementations here are the
//! in-memory adapter used by tests and offline runs, and the constant
//! fallback supplier for degraded mode.

use rust_decimal::Decimal;

use tesouro_core::types::{Date, IndexPoint, ReferenceValue};

use crate::error::{BondError, BondResult};
use crate::indices::IndexSeries;

/// Supplier of historical monthly index observations.
///
/// The contract is "supply the points or signal unavailability": callers
/// apply their own fallback policy (see
/// [`crate::projection::reference_value_or_fallback`]).
pub trait IndexSeriesSource: Send + Sync {
    /// Name of the source, used in error context and logs.
    fn name(&self) -> &str;

    /// Returns the observations with dates in `[start, end]`, in
    /// chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::SourceUnavailable`] when the data cannot be
    /// supplied. An `Ok` with an empty vector means the source is healthy
    /// but has no data in the window.
    fn monthly_changes(&self, start: Date, end: Date) -> BondResult<Vec<IndexPoint>>;
}

/// Supplier of the latest floating-family reference value (LFT VNA).
pub trait FloatingReferenceSource: Send + Sync {
    /// Name of the source, used in error context and logs.
    fn name(&self) -> &str;

    /// Returns the latest published reference value.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::SourceUnavailable`] when the value cannot be
    /// supplied. Unlike the IPCA accumulation path, floating-family
    /// callers propagate this rather than guessing a value.
    fn latest(&self) -> BondResult<ReferenceValue>;
}

/// In-memory index series source.
///
/// Wraps an [`IndexSeries`] already loaded from elsewhere (a file, a test
/// fixture, a completed network fetch).
#[derive(Debug, Clone)]
pub struct InMemorySeriesSource {
    name: String,
    series: IndexSeries,
}

impl InMemorySeriesSource {
    /// Creates a source over an existing series.
    #[must_use]
    pub fn new(name: impl Into<String>, series: IndexSeries) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }

    /// Returns the wrapped series.
    #[must_use]
    pub fn series(&self) -> &IndexSeries {
        &self.series
    }
}

impl IndexSeriesSource for InMemorySeriesSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn monthly_changes(&self, start: Date, end: Date) -> BondResult<Vec<IndexPoint>> {
        Ok(self.series.range(start, end))
    }
}

/// Constant reference-value supplier.
///
/// Wraps a fixed [`ReferenceValue`], typically an
/// [`ReferenceValue::estimated`] vintage constant, for use as the degraded
/// mode of a live source or as a CLI-provided override.
#[derive(Debug, Clone)]
pub struct ConstantReference {
    name: String,
    value: ReferenceValue,
}

impl ConstantReference {
    /// Creates a constant supplier.
    #[must_use]
    pub fn new(name: impl Into<String>, value: ReferenceValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl FloatingReferenceSource for ConstantReference {
    fn name(&self) -> &str {
        &self.name
    }

    fn latest(&self) -> BondResult<ReferenceValue> {
        Ok(self.value.clone())
    }
}

/// A source that is always unavailable.
///
/// Stands in for a failed network adapter in tests and in offline runs
/// where the fallback path is the intended behavior.
#[derive(Debug, Clone, Default)]
pub struct UnavailableSource {
    name: String,
}

impl UnavailableSource {
    /// Creates an always-failing source.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn error(&self) -> BondError {
        BondError::source_unavailable(&self.name, "source is offline")
    }
}

impl IndexSeriesSource for UnavailableSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn monthly_changes(&self, _start: Date, _end: Date) -> BondResult<Vec<IndexPoint>> {
        Err(self.error())
    }
}

impl FloatingReferenceSource for UnavailableSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn latest(&self) -> BondResult<ReferenceValue> {
        Err(self.error())
    }
}

/// Convenience: a constant floating reference from a raw decimal and label.
#[must_use]
pub fn constant_floating_reference(value: Decimal, label: impl Into<String>) -> ConstantReference {
    ConstantReference::new("constant", ReferenceValue::estimated(value, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_memory_source_serves_range() {
        let date = Date::from_ymd(2024, 10, 1).unwrap();
        let series = IndexSeries::from_points(vec![IndexPoint::new(date, dec!(0.0056))]);
        let source = InMemorySeriesSource::new("fixture", series);

        let points = source
            .monthly_changes(
                Date::from_ymd(2024, 1, 1).unwrap(),
                Date::from_ymd(2024, 12, 31).unwrap(),
            )
            .unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(source.name(), "fixture");
    }

    #[test]
    fn test_unavailable_source_errors() {
        let source = UnavailableSource::new("bcb-sgs");
        let err = source.latest().unwrap_err();
        assert!(matches!(err, BondError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_constant_reference_is_estimate() {
        let source = constant_floating_reference(dec!(15000.00), "test vintage");
        let value = source.latest().unwrap();
        assert!(value.is_estimate());
        assert_eq!(value.value, dec!(15000.00));
    }
}
