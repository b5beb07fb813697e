//! Project list/create flow.
//!
//! # Responsibility
//! - Render project summaries and two-column detail views.
//! - Gate creation on write access and drive the draft-validate-save cycle
//!   against session state.
//!
//! # Invariants
//! - The displayed participant count equals `members.len()`.
//! - Saving purges every session entry under the edit-session prefix, then
//!   the current-project marker, in that order.
//! - Without write access no session key is allocated and nothing mutates.

use crate::model::person::Person;
use crate::model::project::{Project, ProjectDraft, ProjectValidation};
use crate::repo::project_repo::ProjectRepository;
use crate::service::project_service::{ProjectService, ProjectServiceError};
use crate::session::{field_key, SessionStore, CURRENT_PROJECT_KEY};
use log::info;
use uuid::Uuid;

/// Notice shown instead of the form when the viewer cannot write.
pub const READ_ONLY_NOTICE: &str =
    "Acceso de solo lectura. Vaya a la página principal para loguearse.";
/// Warning shown while required fields are missing.
pub const INCOMPLETE_WARNING: &str = "Complete la información obligatoria";
/// Success notice shown after a save.
pub const SAVE_SUCCESS_NOTICE: &str = "Proyecto guardado con éxito";

/// Rendered list entry for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    /// Collapsible summary line.
    pub header: String,
    /// Detail heading with the project code.
    pub title_line: String,
    /// Administrative fields, coordinator and member list.
    pub left: Vec<String>,
    /// Executing/participating entities and funding sources.
    pub right: Vec<String>,
}

/// State of the create tab for the current interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateView {
    /// Viewer lacks write access; no mutation happened.
    ReadOnly { notice: &'static str },
    /// Draft is missing required fields; a warning replaces the save control.
    Incomplete {
        prefix: String,
        missing_fields: Vec<&'static str>,
        warning: &'static str,
    },
    /// Draft is complete; the save control may commit `record`.
    Ready { prefix: String, record: Project },
}

/// Renders the title-ordered project list.
pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects.iter().map(project_card).collect()
}

fn project_card(project: &Project) -> ProjectCard {
    let mut left = vec![
        format!("**Tipo**: {}", project.project_type),
        format!("**Programa**: {}", project.program.as_deref().unwrap_or("")),
        format!(
            "**Coordinador**: {} ({})",
            project.head.name, project.head.institution
        ),
        format!("**Estado**: {}", project.status),
    ];
    left.push(format!(
        "##### Miembros:\n{}",
        bullet_lines(project.members.iter().map(member_line))
    ));

    let right = vec![
        format!("##### Entidad ejecutora principal:\n{}", project.main_entity),
        format!(
            "##### Entidades participantes adicionales:\n{}",
            bullet_lines(project.entities.iter().cloned())
        ),
        format!(
            "##### Entidades que financian:\n{}",
            bullet_lines(project.funding.iter().cloned())
        ),
    ];

    ProjectCard {
        header: summary_header(project),
        title_line: format!("#### {} [{}]", project.title, project.code),
        left,
        right,
    }
}

/// Summary line with the displayed participant count.
pub fn summary_header(project: &Project) -> String {
    format!(
        "{} - {} - {} ({} participantes)",
        project.title,
        project.main_entity,
        project.project_type,
        project.members.len()
    )
}

/// Payload for the per-project download action.
///
/// TODO: emit a real export; the original page ships an empty payload and the
/// stub is preserved until the export format is decided.
pub fn download_payload(_project: &Project) -> Vec<u8> {
    Vec::new()
}

/// Runs the create tab for one interaction.
///
/// Allocates the opaque edit-session key on first visit, rebuilds the draft
/// from staged session fields and validates it. Member and head references
/// are resolved against `people`.
pub fn create_view(
    session: &mut SessionStore,
    people: &[Person],
    write_access: bool,
) -> CreateView {
    if !write_access {
        return CreateView::ReadOnly {
            notice: READ_ONLY_NOTICE,
        };
    }

    let prefix = match session.get_text(CURRENT_PROJECT_KEY) {
        Some(existing) => existing.to_string(),
        None => {
            let fresh = Uuid::new_v4().to_string();
            session.set_text(CURRENT_PROJECT_KEY, fresh.clone());
            fresh
        }
    };

    let draft = draft_from_session(session, &prefix, people);
    match draft.validate() {
        ProjectValidation {
            record: Some(record),
            ..
        } => CreateView::Ready { prefix, record },
        ProjectValidation { missing_fields, .. } => CreateView::Incomplete {
            prefix,
            missing_fields,
            warning: INCOMPLETE_WARNING,
        },
    }
}

/// Stages one single-valued form field under the edit-session prefix.
pub fn stage_text(session: &mut SessionStore, prefix: &str, field: &str, value: impl Into<String>) {
    session.set_text(field_key(prefix, field), value);
}

/// Stages one multi-valued form field under the edit-session prefix.
pub fn stage_list(session: &mut SessionStore, prefix: &str, field: &str, values: Vec<String>) {
    session.set_list(field_key(prefix, field), values);
}

/// Rebuilds the in-progress draft from staged session fields.
pub fn draft_from_session(session: &SessionStore, prefix: &str, people: &[Person]) -> ProjectDraft {
    let text = |field: &str| {
        session
            .get_text(&field_key(prefix, field))
            .unwrap_or_default()
            .to_string()
    };
    let list = |field: &str| {
        session
            .get_list(&field_key(prefix, field))
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    };

    let program = text("program");
    let head = session
        .get_text(&field_key(prefix, "head"))
        .and_then(|id| find_person(people, id));
    let members = list("members")
        .iter()
        .filter_map(|id| find_person(people, id))
        .collect();

    ProjectDraft {
        title: text("title"),
        code: text("code"),
        project_type: text("project_type"),
        program: if program.is_empty() { None } else { Some(program) },
        status: text("status"),
        head,
        members,
        main_entity: text("main_entity"),
        entities: list("entities"),
        funding: list("funding"),
    }
}

/// Commits the in-progress project.
///
/// Persists the record, purges every staged field under the session prefix,
/// removes the current-project marker and returns the success notice.
pub fn save_project<R: ProjectRepository>(
    session: &mut SessionStore,
    service: &ProjectService<R>,
    record: &Project,
    prefix: &str,
) -> Result<&'static str, ProjectServiceError> {
    service.create_project(record)?;

    let purged = session.remove_prefix(prefix);
    session.remove(CURRENT_PROJECT_KEY);
    info!(
        "event=project_commit module=page status=ok project={} purged_keys={purged}",
        record.uuid
    );

    Ok(SAVE_SUCCESS_NOTICE)
}

fn find_person(people: &[Person], id: &str) -> Option<Person> {
    people.iter().find(|p| p.uuid.to_string() == id).cloned()
}

fn member_line(person: &Person) -> String {
    format!("{} ({})", person.name, person.institution)
}

fn bullet_lines(items: impl Iterator<Item = String>) -> String {
    items
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
