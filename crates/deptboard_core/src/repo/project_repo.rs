//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist projects together with their ordered side collections
//!   (members, participating entities, funding sources) in one transaction.
//! - Hydrate full project records for the list page.
//!
//! # Invariants
//! - Side-table rows keep their `ord` position; reads restore form order.
//! - There is no update path: the board has no project edit flow.

use crate::model::person::Person;
use crate::model::project::{Project, ProjectId};
use crate::repo::person_repo::parse_person_row;
use crate::repo::{parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    code,
    project_type,
    program,
    status,
    head_uuid,
    main_entity
FROM projects";

/// Repository interface for project records.
pub trait ProjectRepository {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// All projects ordered by title, the list page order.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, project: &Project) -> RepoResult<ProjectId> {
        let tx = self.conn.unchecked_transaction()?;
        let uuid = project.uuid.to_string();

        tx.execute(
            "INSERT INTO projects (
                uuid,
                title,
                code,
                project_type,
                program,
                status,
                head_uuid,
                main_entity
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                uuid.as_str(),
                project.title.as_str(),
                project.code.as_str(),
                project.project_type.as_str(),
                project.program.as_deref(),
                project.status.as_str(),
                project.head.uuid.to_string(),
                project.main_entity.as_str(),
            ],
        )?;

        for (ord, member) in project.members.iter().enumerate() {
            tx.execute(
                "INSERT INTO project_members (project_uuid, person_uuid, ord)
                 VALUES (?1, ?2, ?3);",
                params![uuid.as_str(), member.uuid.to_string(), ord as i64],
            )?;
        }

        insert_named_rows(&tx, "project_entities", &uuid, &project.entities)?;
        insert_named_rows(&tx, "project_funding", &uuid, &project.funding)?;

        tx.commit()?;
        Ok(project.uuid)
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY title ASC, uuid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(self.conn, row)?);
        }
        Ok(projects)
    }
}

fn insert_named_rows(
    tx: &rusqlite::Transaction<'_>,
    table: &str,
    project_uuid: &str,
    names: &[String],
) -> RepoResult<()> {
    for (ord, name) in names.iter().enumerate() {
        tx.execute(
            &format!("INSERT INTO {table} (project_uuid, name, ord) VALUES (?1, ?2, ?3);"),
            params![project_uuid, name.as_str(), ord as i64],
        )?;
    }
    Ok(())
}

fn parse_project_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Project> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "projects.uuid")?;

    let head_text: String = row.get("head_uuid")?;
    let head_uuid = parse_uuid(&head_text, "projects.head_uuid")?;
    let head = load_person(conn, &head_text)?.ok_or_else(|| RepoError::NotFound(head_uuid))?;

    Ok(Project {
        uuid,
        title: row.get("title")?,
        code: row.get("code")?,
        project_type: row.get("project_type")?,
        program: row.get("program")?,
        status: row.get("status")?,
        head,
        members: load_members(conn, &uuid_text)?,
        main_entity: row.get("main_entity")?,
        entities: load_named_rows(conn, "project_entities", &uuid_text)?,
        funding: load_named_rows(conn, "project_funding", &uuid_text)?,
    })
}

fn load_person(conn: &Connection, person_uuid: &str) -> RepoResult<Option<Person>> {
    let mut stmt =
        conn.prepare("SELECT uuid, name, institution, orcid FROM people WHERE uuid = ?1;")?;
    let mut rows = stmt.query([person_uuid])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_person_row(row)?));
    }
    Ok(None)
}

fn load_members(conn: &Connection, project_uuid: &str) -> RepoResult<Vec<Person>> {
    let mut stmt = conn.prepare(
        "SELECT p.uuid, p.name, p.institution, p.orcid
         FROM project_members pm
         INNER JOIN people p ON p.uuid = pm.person_uuid
         WHERE pm.project_uuid = ?1
         ORDER BY pm.ord ASC;",
    )?;
    let mut rows = stmt.query([project_uuid])?;
    let mut members = Vec::new();
    while let Some(row) = rows.next()? {
        members.push(parse_person_row(row)?);
    }
    Ok(members)
}

fn load_named_rows(conn: &Connection, table: &str, project_uuid: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT name FROM {table} WHERE project_uuid = ?1 ORDER BY ord ASC;"
    ))?;
    let mut rows = stmt.query([project_uuid])?;
    let mut names = Vec::new();
    while let Some(row) = rows.next()? {
        names.push(row.get(0)?);
    }
    Ok(names)
}
