//! Ordered storage for monthly index observations.

mod series;

pub use series::IndexSeries;
