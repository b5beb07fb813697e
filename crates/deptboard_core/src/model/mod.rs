//! Domain records for the reporting board.
//!
//! # Responsibility
//! - Define the canonical shapes for people, journals, projects and papers.
//! - Keep record-level invariants next to the data they guard.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - A paper's corresponding author, when set, is one of its authors.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod journal;
pub mod paper;
pub mod person;
pub mod project;

/// Record-level validation failures shared by write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// ORCID value does not match the `dddd-dddd-dddd-ddd[dX]` shape.
    InvalidOrcid(String),
    /// Paper issue below the form minimum of 1.
    IssueOutOfRange(u32),
    /// Paper year below the form minimum of 2020.
    YearOutOfRange(i32),
    /// Corresponding author is not part of the author list.
    CorrespondingNotAuthor(Uuid),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrcid(value) => write!(f, "invalid orcid: `{value}`"),
            Self::IssueOutOfRange(issue) => write!(f, "issue out of range: {issue}"),
            Self::YearOutOfRange(year) => write!(f, "year out of range: {year}"),
            Self::CorrespondingNotAuthor(id) => {
                write!(f, "corresponding author {id} is not listed as an author")
            }
        }
    }
}

impl Error for ValidationError {}
