//! The fetch interface for the four datasets

use std::collections::HashMap;
use std::path::PathBuf;

use super::csv::{Table, parse_table};
use super::dataset::Dataset;
use super::records::{Solution, decode};
use crate::errors::DataError;

/// Which of the four exports to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Solutions,
    Resources,
    Quotes,
    CaseStudies,
}

impl DatasetKind {
    /// File name under the `data/` asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            DatasetKind::Solutions => "solutions-data.csv",
            DatasetKind::Resources => "resources-data.csv",
            DatasetKind::Quotes => "quotes-data.csv",
            DatasetKind::CaseStudies => "case-studies-data.csv",
        }
    }
}

/// Anything that can hand back one of the CSV exports as a table.
pub trait DataSource {
    fn fetch(&self, kind: DatasetKind) -> Result<Table, DataError>;
}

/// Reads `<root>/data/<file>` from disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: DatasetKind) -> PathBuf {
        self.root.join("data").join(kind.file_name())
    }
}

impl DataSource for DirectorySource {
    fn fetch(&self, kind: DatasetKind) -> Result<Table, DataError> {
        let path = self.path_for(kind);
        let text = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        parse_table(&path.display().to_string(), &text)
    }
}

/// CSV text held in memory, keyed by dataset. Missing datasets fetch as
/// empty tables.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    texts: HashMap<DatasetKind, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: DatasetKind, csv: impl Into<String>) -> Self {
        self.texts.insert(kind, csv.into());
        self
    }
}

impl DataSource for InMemorySource {
    fn fetch(&self, kind: DatasetKind) -> Result<Table, DataError> {
        match self.texts.get(&kind) {
            Some(text) => parse_table(kind.file_name(), text),
            None => Ok(Table::default()),
        }
    }
}

/// Fetch and decode the primary dataset.
pub fn load_dataset(source: &dyn DataSource) -> Result<Dataset, DataError> {
    let table = source.fetch(DatasetKind::Solutions)?;
    if table.headers().is_empty() {
        return Ok(Dataset::empty());
    }
    let solutions: Vec<Solution> = decode(&table)?;
    Ok(Dataset::new(solutions))
}
