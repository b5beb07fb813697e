//! Research entry use-case service.
//!
//! # Responsibility
//! - Persist journal/paper entry pairs in the order the page requires:
//!   journal first, so the paper always references a durable journal id.
//! - Serve the year-filtered paper listing.
//!
//! # Invariants
//! - `save_entry` persists an inline-created journal before the paper.
//! - The journal+paper pair is deliberately not transactional: a paper
//!   failure after a journal save leaves the journal persisted.

use crate::model::journal::Journal;
use crate::model::paper::{JournalPaper, PaperId};
use crate::repo::journal_repo::JournalRepository;
use crate::repo::paper_repo::{PaperListQuery, PaperRepository};
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for research entry use-cases.
#[derive(Debug)]
pub enum ResearchServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ResearchServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent entry state: {details}"),
        }
    }
}

impl Error for ResearchServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for ResearchServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Outcome of a successful entry save.
#[derive(Debug, Clone)]
pub struct SavedEntry {
    /// The paper as read back from storage.
    pub paper: JournalPaper,
    /// Whether the journal was persisted by this save.
    pub created_journal: bool,
}

/// Research service facade over paper and journal repositories.
pub struct ResearchService<P: PaperRepository, J: JournalRepository> {
    papers: P,
    journals: J,
}

impl<P: PaperRepository, J: JournalRepository> ResearchService<P, J> {
    /// Creates a service using the provided repository implementations.
    pub fn new(papers: P, journals: J) -> Self {
        Self { papers, journals }
    }

    /// Saves one entry: the journal first when it is not persisted yet, then
    /// the paper (insert for new ids, full update for existing ones).
    pub fn save_entry(&self, paper: &JournalPaper) -> Result<SavedEntry, ResearchServiceError> {
        let created_journal = match self.journals.get_journal(paper.journal.uuid)? {
            Some(_) => false,
            None => {
                self.journals.create_journal(&paper.journal)?;
                info!(
                    "event=journal_save module=service status=ok journal={}",
                    paper.journal.uuid
                );
                true
            }
        };

        if self.papers.get_paper(paper.uuid)?.is_some() {
            self.papers.update_paper(paper)?;
        } else {
            self.papers.create_paper(paper)?;
        }
        info!("event=entry_save module=service status=ok paper={}", paper.uuid);

        let paper = self
            .papers
            .get_paper(paper.uuid)?
            .ok_or(ResearchServiceError::InconsistentState(
                "saved paper not found in read-back",
            ))?;

        Ok(SavedEntry {
            paper,
            created_journal,
        })
    }

    /// Gets one paper by stable ID.
    pub fn get_paper(&self, id: PaperId) -> RepoResult<Option<JournalPaper>> {
        self.papers.get_paper(id)
    }

    /// Papers published in `year`, sorted by title.
    pub fn list_papers(&self, year: i32) -> RepoResult<Vec<JournalPaper>> {
        self.papers.list_papers(&PaperListQuery { year: Some(year) })
    }

    /// All journals sorted by title, for the journal selector.
    pub fn list_journals(&self) -> RepoResult<Vec<Journal>> {
        self.journals.list_journals()
    }
}
