//! Core domain logic for the departmental reporting board.
//! This crate is the single source of truth for record invariants.

pub mod analytics;
pub mod db;
pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging};
pub use model::journal::{Journal, JournalId};
pub use model::paper::{
    default_corresponding_index, JournalPaper, PaperId, MIN_ISSUE, MIN_YEAR,
};
pub use model::person::{Person, PersonId};
pub use model::project::{Project, ProjectDraft, ProjectId, ProjectValidation};
pub use model::ValidationError;
pub use repo::journal_repo::{JournalRepository, SqliteJournalRepository};
pub use repo::paper_repo::{PaperListQuery, PaperRepository, SqlitePaperRepository};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::{RepoError, RepoResult};
pub use service::project_service::{ProjectService, ProjectServiceError};
pub use service::research_service::{ResearchService, ResearchServiceError, SavedEntry};
pub use session::{field_key, SessionStore, SessionValue, CURRENT_PROJECT_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
