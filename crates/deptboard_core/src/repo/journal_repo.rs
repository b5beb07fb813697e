//! Journal repository contract and SQLite implementation.

use crate::model::journal::{Journal, JournalId};
use crate::repo::{parse_uuid, RepoResult};
use rusqlite::{params, Connection, Row};

const JOURNAL_SELECT_SQL: &str = "SELECT uuid, title, publisher, issn FROM journals";

/// Repository interface for journal venues.
pub trait JournalRepository {
    fn create_journal(&self, journal: &Journal) -> RepoResult<JournalId>;
    fn get_journal(&self, id: JournalId) -> RepoResult<Option<Journal>>;
    /// All journals ordered by title, the selector enumeration order.
    fn list_journals(&self) -> RepoResult<Vec<Journal>>;
}

/// SQLite-backed journal repository.
pub struct SqliteJournalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteJournalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl JournalRepository for SqliteJournalRepository<'_> {
    fn create_journal(&self, journal: &Journal) -> RepoResult<JournalId> {
        self.conn.execute(
            "INSERT INTO journals (uuid, title, publisher, issn) VALUES (?1, ?2, ?3, ?4);",
            params![
                journal.uuid.to_string(),
                journal.title.as_str(),
                journal.publisher.as_str(),
                journal.issn.as_str(),
            ],
        )?;

        Ok(journal.uuid)
    }

    fn get_journal(&self, id: JournalId) -> RepoResult<Option<Journal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{JOURNAL_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_journal_row(row)?));
        }
        Ok(None)
    }

    fn list_journals(&self) -> RepoResult<Vec<Journal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{JOURNAL_SELECT_SQL} ORDER BY title ASC, uuid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut journals = Vec::new();
        while let Some(row) = rows.next()? {
            journals.push(parse_journal_row(row)?);
        }
        Ok(journals)
    }
}

pub(crate) fn parse_journal_row(row: &Row<'_>) -> RepoResult<Journal> {
    let uuid_text: String = row.get("uuid")?;
    Ok(Journal {
        uuid: parse_uuid(&uuid_text, "journals.uuid")?,
        title: row.get("title")?,
        publisher: row.get("publisher")?,
        issn: row.get("issn")?,
    })
}
