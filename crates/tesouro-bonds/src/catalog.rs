//! Bond catalog lookup seam.
//!
//! One interface replaces the per-year search helpers the ad-hoc scripts
//! repeated for every maturity: a catalog is asked for a (family,
//! maturity year) pair and answers with a tagged `Found`/`NotFound`
//! result. Live catalog adapters (the Tesouro Direto feed) live outside
//! this workspace; [`StaticCatalog`] serves tests and offline runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tesouro_core::types::{BondFamily, BondTerms};
use tesouro_core::TesouroError;

use crate::error::{BondError, BondResult};

/// One catalog row: a tradable bond with its current quoted price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name (e.g., "Tesouro Prefixado 2032").
    pub name: String,
    /// Contractual terms.
    pub terms: BondTerms,
    /// Quoted unit price, when the feed publishes one.
    pub quoted_unit_price: Option<Decimal>,
}

impl CatalogEntry {
    /// Creates an entry without a quoted price.
    #[must_use]
    pub fn new(name: impl Into<String>, terms: BondTerms) -> Self {
        Self {
            name: name.into(),
            terms,
            quoted_unit_price: None,
        }
    }

    /// Attaches a quoted unit price.
    #[must_use]
    pub fn with_quoted_price(mut self, price: Decimal) -> Self {
        self.quoted_unit_price = Some(price);
        self
    }
}

/// Result of a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogLookup {
    /// A matching bond was found.
    Found(CatalogEntry),
    /// No bond of the requested family matures in the requested year.
    NotFound,
}

impl CatalogLookup {
    /// Converts the lookup into a result, mapping `NotFound` to the
    /// structured not-found error.
    ///
    /// # Errors
    ///
    /// Returns `TesouroError::NotFound` (wrapped) for `NotFound`.
    pub fn into_result(self, family: BondFamily, maturity_year: i32) -> BondResult<CatalogEntry> {
        match self {
            Self::Found(entry) => Ok(entry),
            Self::NotFound => Err(BondError::from(TesouroError::not_found(
                family.market_name(),
                maturity_year,
            ))),
        }
    }
}

/// Catalog lookup capability.
pub trait BondCatalog: Send + Sync {
    /// Looks up a bond by family and maturity year.
    fn entry(&self, family: BondFamily, maturity_year: i32) -> CatalogLookup;

    /// Lists the maturity years available for a family, ascending.
    fn available_years(&self, family: BondFamily) -> Vec<i32>;
}

/// In-memory catalog backed by a vector of entries.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder-style.
    #[must_use]
    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Adds an entry in place.
    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }
}

impl BondCatalog for StaticCatalog {
    fn entry(&self, family: BondFamily, maturity_year: i32) -> CatalogLookup {
        self.entries
            .iter()
            .find(|e| e.terms.family == family && e.terms.maturity.year() == maturity_year)
            .cloned()
            .map_or(CatalogLookup::NotFound, CatalogLookup::Found)
    }

    fn available_years(&self, family: BondFamily) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .entries
            .iter()
            .filter(|e| e.terms.family == family)
            .map(|e| e.terms.maturity.year())
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
