//! Typed rows decoded from the four CSV exports

use std::fmt;

use super::csv::{Row, Table};
use crate::errors::DataError;

/// The `Solution ID` column value; the identity used for hover and selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolutionId(String);

impl SolutionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SolutionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Decode a row of a known table into a typed record.
pub trait FromRow: Sized {
    /// Table name used in diagnostics
    const TABLE: &'static str;

    fn from_row(row: &Row<'_>) -> Result<Self, DataError>;
}

/// Decode every row of `table` as `T`.
pub fn decode<T: FromRow>(table: &Table) -> Result<Vec<T>, DataError> {
    table.rows().map(|row| T::from_row(&row)).collect()
}

/// One petal: a childcare solution
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub id: SolutionId,
    pub category: String,
    pub abbreviation: String,
    pub name: String,
}

impl Solution {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        abbreviation: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: SolutionId::new(id),
            category: category.into(),
            abbreviation: abbreviation.into(),
            name: name.into(),
        }
    }
}

impl FromRow for Solution {
    const TABLE: &'static str = "solutions";

    fn from_row(row: &Row<'_>) -> Result<Self, DataError> {
        Ok(Solution::new(
            row.get(Self::TABLE, "Solution ID")?,
            row.get(Self::TABLE, "Category")?,
            row.get(Self::TABLE, "Solution abbreviation")?,
            row.get(Self::TABLE, "Solution")?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub solution_id: SolutionId,
    pub link: String,
    pub title: String,
    pub description: String,
}

impl FromRow for Resource {
    const TABLE: &'static str = "resources";

    fn from_row(row: &Row<'_>) -> Result<Self, DataError> {
        Ok(Resource {
            solution_id: row.get(Self::TABLE, "Solution ID")?.into(),
            link: row.get(Self::TABLE, "Resource link")?.to_string(),
            title: row.get(Self::TABLE, "Resource title")?.to_string(),
            description: row.get(Self::TABLE, "Resource description")?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub solution_id: SolutionId,
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
}

impl FromRow for Quote {
    const TABLE: &'static str = "quotes";

    fn from_row(row: &Row<'_>) -> Result<Self, DataError> {
        Ok(Quote {
            solution_id: row.get(Self::TABLE, "Solution ID")?.into(),
            quote: row.get(Self::TABLE, "Quote")?.to_string(),
            author_name: row.get(Self::TABLE, "Author name")?.to_string(),
            author_title: row.get(Self::TABLE, "Author title")?.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStudy {
    pub solution_id: SolutionId,
    pub title: String,
    pub description: String,
    pub link: String,
}

impl FromRow for CaseStudy {
    const TABLE: &'static str = "case studies";

    fn from_row(row: &Row<'_>) -> Result<Self, DataError> {
        Ok(CaseStudy {
            solution_id: row.get(Self::TABLE, "Solution ID")?.into(),
            title: row.get(Self::TABLE, "Case study title")?.to_string(),
            description: row.get(Self::TABLE, "Case study description")?.to_string(),
            link: row.get(Self::TABLE, "Case study link")?.to_string(),
        })
    }
}
