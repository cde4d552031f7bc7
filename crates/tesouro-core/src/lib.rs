//! # Tesouro Core
//!
//! Core types, day counts, and errors for the Tesouro bond pricing engine.
//!
//! This crate provides the foundational building blocks used throughout the
//! workspace:
//!
//! - **Types**: Domain-specific types like `Date`, `BondTerms`,
//!   `ReferenceValue`, `PricingResult`
//! - **Day Counts**: The BUS/252 statistical approximation used as the
//!   discounting exponent base
//! - **Errors**: The structured `TesouroError` taxonomy
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Pure Functions**: Every calculation is reproducible from its inputs;
//!   there is no shared mutable state
//! - **Explicit Degradation**: Fallback estimates are distinguishable from
//!   live values in the type, never silently substituted
//!
//! ## Example
//!
//! ```rust
//! use tesouro_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let purchase = Date::from_ymd(2025, 1, 2).unwrap();
//! let maturity = Date::from_ymd(2032, 1, 1).unwrap();
//! let terms = BondTerms::fixed(maturity, dec!(13.92));
//! let span = business_term(purchase, terms.maturity);
//! assert!(span.business_days > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{business_term, Bus252Approx, DayCount};
    pub use crate::error::{TesouroError, TesouroResult};
    pub use crate::types::{
        BondFamily, BondTerms, Date, IndexPoint, PricingResult, ReferenceBasis, ReferenceValue,
        TermSpan,
    };
}

// Re-export commonly used types at crate root
pub use error::{TesouroError, TesouroResult};
pub use types::{BondFamily, BondTerms, Date, PricingResult, ReferenceValue, TermSpan};
