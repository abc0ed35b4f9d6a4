//! Labelled categorical samples and their aggregated counts.
//!
//! Raw rows are never kept around: [`SampleReader`] folds them into a
//! [`Dataset`], a table from [`SampleKey`] to [`LabelCounts`]
//! with the [`Schema`] held alongside.

// Provides the binary outcome and per-key counters.
pub(crate) mod label;
// Provides the attribute names and the sample keys.
pub(crate) mod schema;
// Provides the aggregated table.
pub(crate) mod dataset;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use label::{Label, LabelCounts};
pub use schema::{Schema, SampleKey};
pub use dataset::Dataset;
pub use sample_reader::SampleReader;
