//! Tabular data: CSV parsing, typed rows and the fetch interface.
//!
//! - `csv`: grammar-based CSV parser producing a [`Table`]
//! - `records`: typed rows ([`Solution`], [`Resource`], [`Quote`], [`CaseStudy`])
//! - `dataset`: the sorted, category-grouped [`Dataset`] the layout consumes
//! - `source`: the [`DataSource`] fetch interface and its implementations

pub mod csv;
pub mod dataset;
pub mod records;
pub mod source;

pub use csv::{Row, Table, parse_table};
pub use dataset::{CategoryGroup, Dataset};
pub use records::{CaseStudy, FromRow, Quote, Resource, Solution, SolutionId, decode};
pub use source::{DataSource, DatasetKind, DirectorySource, InMemorySource, load_dataset};
