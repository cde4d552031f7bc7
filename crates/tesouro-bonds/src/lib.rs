//! # Tesouro Bonds
//!
//! Bond pricing and index projection for the Tesouro bond pricing engine.
//!
//! This crate provides:
//!
//! - **Projection**: reference-value (VNA) accumulation from the monthly
//!   index series, dia-15 proration, and settlement rolls
//! - **Pricing**: one present-value function per bond family, plus the
//!   per-family orchestration that produces a `PricingResult`
//! - **Sources**: capability traits for the external index series,
//!   floating reference value, and bond catalog, with in-memory and
//!   constant-fallback implementations
//! - **Comparison**: computed-vs-quoted deviation bands and ágio/deságio
//!   classification
//!
//! ## Example
//!
//! ```rust
//! use tesouro_bonds::pricing::price_fixed;
//! use tesouro_core::types::{BondTerms, Date};
//! use rust_decimal_macros::dec;
//!
//! let terms = BondTerms::fixed(Date::from_ymd(2032, 1, 1).unwrap(), dec!(13.92));
//! let purchase = Date::from_ymd(2026, 1, 2).unwrap();
//! let result = price_fixed(&terms, purchase).unwrap();
//! assert!(result.unit_price < terms.face_value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod catalog;
pub mod comparison;
pub mod error;
pub mod indices;
pub mod pricing;
pub mod projection;
pub mod sources;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::catalog::{BondCatalog, CatalogEntry, CatalogLookup, StaticCatalog};
    pub use crate::comparison::{compare_with_quote, DeviationBand, PriceComparison, RateStance};
    pub use crate::error::{BondError, BondResult};
    pub use crate::indices::IndexSeries;
    pub use crate::pricing::{
        fixed_rate_price, floating_rate_price, inflation_linked_price, price_fixed,
        price_floating, price_inflation_linked, price_inflation_linked_from_reference,
        QuotedPrice,
    };
    pub use crate::projection::{
        accumulated_reference_value, prorated_exponent, reference_value_or_fallback,
        roll_by_rate, roll_one_business_day,
    };
    pub use crate::sources::{
        ConstantReference, FloatingReferenceSource, InMemorySeriesSource, IndexSeriesSource,
        UnavailableSource,
    };
}

pub use error::{BondError, BondResult};
