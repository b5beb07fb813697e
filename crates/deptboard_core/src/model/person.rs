//! Person reference record.
//!
//! People are read-only in the board pages: they are enumerated for author
//! and member pickers, never created or edited there.

use crate::model::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a person.
pub type PersonId = Uuid;

static ORCID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[\dX]$").expect("valid orcid regex"));

/// A researcher known to the department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable global ID.
    pub uuid: PersonId,
    pub name: String,
    pub institution: String,
    /// Optional ORCID identifier, rendered as a profile link when present.
    pub orcid: Option<String>,
}

impl Person {
    /// Creates a person with a generated stable ID and no ORCID.
    pub fn new(name: impl Into<String>, institution: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            institution: institution.into(),
            orcid: None,
        }
    }

    /// Sets the ORCID identifier. Validity is checked on persistence.
    pub fn with_orcid(mut self, orcid: impl Into<String>) -> Self {
        self.orcid = Some(orcid.into());
        self
    }

    /// Checks the ORCID shape when one is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(orcid) = self.orcid.as_deref() {
            if !ORCID_RE.is_match(orcid) {
                return Err(ValidationError::InvalidOrcid(orcid.to_string()));
            }
        }
        Ok(())
    }

    /// ORCID profile URL, when an identifier is set.
    pub fn orcid_url(&self) -> Option<String> {
        self.orcid
            .as_deref()
            .map(|orcid| format!("https://orcid.org/{orcid}"))
    }
}
