//! Domain value types for the pricing engine.

mod date;
mod family;
mod index;
mod reference;
mod terms;

pub use date::{Date, PUBLICATION_DAY};
pub use family::BondFamily;
pub use index::IndexPoint;
pub use reference::{ReferenceBasis, ReferenceValue};
pub use terms::{BondTerms, PricingResult, TermSpan, STANDARD_FACE_VALUE};
