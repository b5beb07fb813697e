//! Person repository contract and SQLite implementation.
//!
//! People are reference data for the board pages: created by administrative
//! tooling, enumerated by pickers, never edited from the pages themselves.

use crate::model::person::{Person, PersonId};
use crate::repo::{parse_uuid, RepoResult};
use rusqlite::{params, Connection, Row};

const PERSON_SELECT_SQL: &str = "SELECT uuid, name, institution, orcid FROM people";

/// Repository interface for person reference data.
pub trait PersonRepository {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    /// All people ordered by name, the picker enumeration order.
    fn list_people(&self) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId> {
        person.validate()?;

        self.conn.execute(
            "INSERT INTO people (uuid, name, institution, orcid) VALUES (?1, ?2, ?3, ?4);",
            params![
                person.uuid.to_string(),
                person.name.as_str(),
                person.institution.as_str(),
                person.orcid.as_deref(),
            ],
        )?;

        Ok(person.uuid)
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row)?));
        }
        Ok(None)
    }

    fn list_people(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY name ASC, uuid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row)?);
        }
        Ok(people)
    }
}

pub(crate) fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    Ok(Person {
        uuid: parse_uuid(&uuid_text, "people.uuid")?,
        name: row.get("name")?,
        institution: row.get("institution")?,
        orcid: row.get("orcid")?,
    })
}
