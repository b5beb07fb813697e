//! Project use-case service.
//!
//! # Responsibility
//! - Persist validated project records and list them for the board.
//!
//! # Invariants
//! - Created records are read back before being reported to the caller.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for project use-cases.
#[derive(Debug)]
pub enum ProjectServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent project state: {details}"),
        }
    }
}

impl Error for ProjectServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for ProjectServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Project service facade over repository implementations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one complete project and returns the stored record.
    pub fn create_project(&self, project: &Project) -> Result<Project, ProjectServiceError> {
        let project_id = self.repo.create_project(project)?;
        info!("event=project_save module=service status=ok project={project_id}");
        self.repo
            .get_project(project_id)?
            .ok_or(ProjectServiceError::InconsistentState(
                "created project not found in read-back",
            ))
    }

    /// Gets one project by stable ID.
    pub fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        self.repo.get_project(id)
    }

    /// Lists all projects sorted by title.
    pub fn list_projects(&self) -> RepoResult<Vec<Project>> {
        self.repo.list_projects()
    }
}
