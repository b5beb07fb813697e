//! Project record and in-progress draft.
//!
//! # Responsibility
//! - Define the persisted project shape with its ordered collections.
//! - Turn a partially filled draft into either a complete record or the list
//!   of missing required fields.
//!
//! # Invariants
//! - `members` order is preserved through persistence.
//! - A complete draft always yields a record with a fresh stable ID.

use crate::model::person::Person;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// A persisted research project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID, distinct from any edit-session key.
    pub uuid: ProjectId,
    pub title: String,
    pub code: String,
    pub project_type: String,
    pub program: Option<String>,
    pub status: String,
    /// Project coordinator.
    pub head: Person,
    /// Ordered member list; its length is the displayed participant count.
    pub members: Vec<Person>,
    /// Main executing entity.
    pub main_entity: String,
    /// Additional participating entities.
    pub entities: Vec<String>,
    /// Funding sources.
    pub funding: Vec<String>,
}

/// In-progress project held in per-session state while the form is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub code: String,
    pub project_type: String,
    pub program: Option<String>,
    pub status: String,
    pub head: Option<Person>,
    pub members: Vec<Person>,
    pub main_entity: String,
    pub entities: Vec<String>,
    pub funding: Vec<String>,
}

/// Outcome of draft validation: a complete record, or what is still missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectValidation {
    /// Present exactly when `missing_fields` is empty.
    pub record: Option<Project>,
    /// Required fields still unfilled, in form order.
    pub missing_fields: Vec<&'static str>,
}

impl ProjectValidation {
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

impl ProjectDraft {
    /// Validates required fields and builds the record when complete.
    ///
    /// Required: title, code, project_type, status, main_entity, head.
    /// Program, members, entities and funding are optional.
    pub fn validate(&self) -> ProjectValidation {
        let mut missing = Vec::new();
        for (field, value) in [
            ("title", self.title.as_str()),
            ("code", self.code.as_str()),
            ("project_type", self.project_type.as_str()),
            ("status", self.status.as_str()),
            ("main_entity", self.main_entity.as_str()),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        if self.head.is_none() {
            missing.push("head");
        }

        let head = match self.head.clone() {
            Some(head) if missing.is_empty() => head,
            _ => {
                return ProjectValidation {
                    record: None,
                    missing_fields: missing,
                }
            }
        };

        ProjectValidation {
            record: Some(Project {
                uuid: Uuid::new_v4(),
                title: self.title.clone(),
                code: self.code.clone(),
                project_type: self.project_type.clone(),
                program: self.program.clone(),
                status: self.status.clone(),
                head,
                members: self.members.clone(),
                main_entity: self.main_entity.clone(),
                entities: self.entities.clone(),
                funding: self.funding.clone(),
            }),
            missing_fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectDraft;
    use crate::model::person::Person;

    fn filled_draft() -> ProjectDraft {
        ProjectDraft {
            title: "Grafos".to_string(),
            code: "PN-01".to_string(),
            project_type: "Nacional".to_string(),
            program: None,
            status: "Activo".to_string(),
            head: Some(Person::new("Ana", "Universidad de La Habana")),
            members: vec![Person::new("Luis", "UH")],
            main_entity: "MatCom".to_string(),
            entities: vec![],
            funding: vec![],
        }
    }

    #[test]
    fn complete_draft_yields_record_with_fresh_id() {
        let draft = filled_draft();
        let first = draft.validate();
        let second = draft.validate();
        assert!(first.is_complete());
        let a = first.record.unwrap();
        let b = second.record.unwrap();
        assert_ne!(a.uuid, b.uuid);
        assert_eq!(a.title, "Grafos");
        assert_eq!(a.members.len(), 1);
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let mut draft = filled_draft();
        draft.title.clear();
        draft.status = "   ".to_string();
        draft.head = None;

        let validation = draft.validate();
        assert!(!validation.is_complete());
        assert_eq!(validation.record, None);
        assert_eq!(validation.missing_fields, vec!["title", "status", "head"]);
    }

    #[test]
    fn program_and_collections_are_optional() {
        let mut draft = filled_draft();
        draft.program = None;
        draft.members.clear();
        assert!(draft.validate().is_complete());
    }
}
