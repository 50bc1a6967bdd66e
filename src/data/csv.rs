//! CSV parsing into a header-indexed [`Table`]

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::{DataError, SourceContext};

#[derive(Parser)]
#[grammar = "grammar/csv.pest"]
pub struct CsvParser;

/// A parsed CSV document: one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a header, matched after trimming.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate rows as header-addressable views.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row { table: self, cells })
    }
}

/// One data row, addressable by header name
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Cell under `column`; short rows read as empty.
    pub fn get(&self, table: &'static str, column: &'static str) -> Result<&'a str, DataError> {
        let idx = self
            .table
            .column(column)
            .ok_or(DataError::MissingColumn { table, column })?;
        Ok(self.cells.get(idx).map(String::as_str).unwrap_or(""))
    }
}

/// Parse CSV text. `name` labels the source in diagnostics.
pub fn parse_table(name: &str, source: &str) -> Result<Table, DataError> {
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut pairs = CsvParser::parse(Rule::file, text).map_err(|e| {
        let span = match e.location {
            pest::error::InputLocation::Pos(p) => (p, 0).into(),
            pest::error::InputLocation::Span((s, end)) => (s, end - s).into(),
        };
        DataError::Syntax {
            message: e.variant.message().into_owned(),
            src: SourceContext::new(name, text).named_source(),
            span,
        }
    })?;

    let mut records = Vec::new();
    if let Some(file) = pairs.next() {
        for inner in file.into_inner() {
            if inner.as_rule() == Rule::record {
                // Zero-length lines, including the one after a trailing newline.
                // A quoted empty cell (`""`) is still a row.
                if inner.as_str().is_empty() {
                    continue;
                }
                records.push(parse_record(inner));
            }
        }
    }

    let mut records = records.into_iter();
    let headers = records
        .next()
        .map(|h| h.into_iter().map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();
    let rows: Vec<Vec<String>> = records.collect();

    crate::log::debug!(source = name, columns = ?headers, rows = rows.len(), "parsed table");

    Ok(Table { headers, rows })
}

fn parse_record(pair: Pair<Rule>) -> Vec<String> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::field)
        .map(parse_field)
        .collect()
}

fn parse_field(pair: Pair<Rule>) -> String {
    match pair.into_inner().next() {
        Some(inner) if inner.as_rule() == Rule::quoted => inner
            .into_inner()
            .next()
            .map(|q| q.as_str().replace("\"\"", "\""))
            .unwrap_or_default(),
        Some(inner) => inner.as_str().to_string(),
        None => String::new(),
    }
}
