//! Journal paper record.
//!
//! # Responsibility
//! - Define the persisted paper shape with its ordered author list.
//! - Enforce form minimums and the corresponding-author membership invariant.
//!
//! # Invariants
//! - `corresponding`, when set, refers to an element of `authors`.
//! - `issue >= 1` and `year >= 2020` (the entry form minimums).

use crate::model::journal::Journal;
use crate::model::person::{Person, PersonId};
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a paper.
pub type PaperId = Uuid;

/// Minimum accepted issue number.
pub const MIN_ISSUE: u32 = 1;
/// Minimum accepted publication year.
pub const MIN_YEAR: i32 = 2020;

/// A journal article, transient until saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPaper {
    /// Stable global ID, durable once persisted.
    pub uuid: PaperId,
    pub title: String,
    /// Ordered author list.
    pub authors: Vec<Person>,
    /// Corresponding author; must be one of `authors` when set.
    pub corresponding: Option<PersonId>,
    pub journal: Journal,
    pub issue: u32,
    pub year: i32,
}

impl JournalPaper {
    /// Checks form minimums and corresponding-author membership.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.issue < MIN_ISSUE {
            return Err(ValidationError::IssueOutOfRange(self.issue));
        }
        if self.year < MIN_YEAR {
            return Err(ValidationError::YearOutOfRange(self.year));
        }
        if let Some(corresponding) = self.corresponding {
            if !self.authors.iter().any(|a| a.uuid == corresponding) {
                return Err(ValidationError::CorrespondingNotAuthor(corresponding));
            }
        }
        Ok(())
    }

    /// Resolves the corresponding author against the author list.
    pub fn corresponding_author(&self) -> Option<&Person> {
        let id = self.corresponding?;
        self.authors.iter().find(|a| a.uuid == id)
    }

    /// First author, used as the display handle in edit pickers.
    pub fn first_author(&self) -> Option<&Person> {
        self.authors.first()
    }
}

/// Default index for the corresponding-author selector.
///
/// Keeps the previous selection when that author is still listed, falls back
/// to the first author otherwise, and is absent for an empty author list.
pub fn default_corresponding_index(
    authors: &[Person],
    previous: Option<PersonId>,
) -> Option<usize> {
    if authors.is_empty() {
        return None;
    }
    let kept = previous.and_then(|id| authors.iter().position(|a| a.uuid == id));
    Some(kept.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::{default_corresponding_index, JournalPaper, MIN_YEAR};
    use crate::model::journal::Journal;
    use crate::model::person::Person;
    use crate::model::ValidationError;
    use uuid::Uuid;

    fn paper(authors: Vec<Person>) -> JournalPaper {
        JournalPaper {
            uuid: Uuid::new_v4(),
            title: "Sobre grafos".to_string(),
            authors,
            corresponding: None,
            journal: Journal::new("RCM", "UH Press", "2218-6416"),
            issue: 1,
            year: MIN_YEAR,
        }
    }

    #[test]
    fn corresponding_must_be_listed_author() {
        let ana = Person::new("Ana", "UH");
        let mut p = paper(vec![ana.clone()]);
        p.corresponding = Some(ana.uuid);
        assert!(p.validate().is_ok());
        assert_eq!(p.corresponding_author().map(|a| a.name.as_str()), Some("Ana"));

        let stranger = Uuid::new_v4();
        p.corresponding = Some(stranger);
        assert_eq!(
            p.validate().unwrap_err(),
            ValidationError::CorrespondingNotAuthor(stranger)
        );
    }

    #[test]
    fn form_minimums_are_enforced() {
        let mut p = paper(vec![]);
        p.issue = 0;
        assert_eq!(p.validate().unwrap_err(), ValidationError::IssueOutOfRange(0));

        p.issue = 1;
        p.year = 2019;
        assert_eq!(p.validate().unwrap_err(), ValidationError::YearOutOfRange(2019));
    }

    #[test]
    fn default_index_keeps_previous_author_when_present() {
        let ana = Person::new("Ana", "UH");
        let luis = Person::new("Luis", "UH");
        let authors = vec![ana.clone(), luis.clone()];

        assert_eq!(default_corresponding_index(&authors, Some(luis.uuid)), Some(1));
        assert_eq!(default_corresponding_index(&authors, None), Some(0));
    }

    #[test]
    fn default_index_falls_back_to_first_author() {
        let ana = Person::new("Ana", "UH");
        let gone = Person::new("Gone", "UH");
        let authors = vec![ana];

        assert_eq!(default_corresponding_index(&authors, Some(gone.uuid)), Some(0));
        assert_eq!(default_corresponding_index(&[], Some(gone.uuid)), None);
    }
}
