//! Publication analytics over the exported CSV.
//!
//! # Responsibility
//! - Load `publications.csv` rows and compute the aggregates backing the
//!   metrics row, the per-period bar chart and the top-venues chart.
//!
//! This feature is dormant: no page calls it. The original dashboard halts
//! before reaching it, and it stays disabled here pending a product decision.
//! Charts and metric widgets are opaque UI primitives; this module only
//! supplies their backing data.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Publication kinds counted by the venue breakdown.
pub const VENUE_KINDS: [&str; 3] = [
    "Artículo publicado en journal",
    "Artículo publicado en proceeding de congreso",
    "Presentación en congreso (sin artículo)",
];

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[derive(Debug)]
pub enum AnalyticsError {
    Csv(csv::Error),
    Io(std::io::Error),
}

impl Display for AnalyticsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for AnalyticsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// One row of the publications export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRow {
    #[serde(rename = "Tipo de publicación")]
    pub kind: String,
    #[serde(rename = "Título")]
    pub title: String,
    #[serde(rename = "Fecha de publicación")]
    pub published_on: String,
    #[serde(rename = "Nombre de la Publicación / Evento")]
    pub venue: String,
}

impl PublicationRow {
    /// Four-digit year extracted from the publication date, when present.
    pub fn year(&self) -> Option<String> {
        YEAR_RE
            .find(&self.published_on)
            .map(|m| m.as_str().to_string())
    }
}

/// Loads all publication rows from the CSV export.
pub fn load_publications(path: impl AsRef<Path>) -> AnalyticsResult<Vec<PublicationRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Publication count per kind, the metrics row.
pub fn totals_by_kind(rows: &[PublicationRow]) -> BTreeMap<String, usize> {
    let mut totals = BTreeMap::new();
    for row in rows {
        *totals.entry(row.kind.clone()).or_insert(0) += 1;
    }
    totals
}

/// Publication count per (year, kind), the bar chart backing data.
///
/// Rows without a recognizable year in their date are skipped.
pub fn counts_by_year_and_kind(rows: &[PublicationRow]) -> BTreeMap<(String, String), usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        let Some(year) = row.year() else {
            continue;
        };
        *counts.entry((year, row.kind.clone())).or_insert(0) += 1;
    }
    counts
}

/// Publication count per (kind, venue), restricted to the journal,
/// proceedings and talk kinds. The top-venues chart backing data.
pub fn venue_breakdown(rows: &[PublicationRow]) -> BTreeMap<(String, String), usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        if !VENUE_KINDS.contains(&row.kind.as_str()) {
            continue;
        }
        *counts
            .entry((row.kind.clone(), row.venue.clone()))
            .or_insert(0) += 1;
    }
    counts
}

/// Re-encodes rows as CSV for the download action.
pub fn to_csv_bytes(rows: &[PublicationRow]) -> AnalyticsResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|err| AnalyticsError::Io(err.into_error()))
}
