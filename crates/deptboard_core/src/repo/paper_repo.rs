//! Journal paper repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist papers together with their ordered author rows in one
//!   transaction.
//! - Serve the year-filtered, title-ordered listing behind the research page.
//!
//! # Invariants
//! - Write paths call `JournalPaper::validate()` before SQL mutations.
//! - `update_paper` replaces the whole author set.

use crate::model::journal::Journal;
use crate::model::paper::{JournalPaper, PaperId};
use crate::model::person::Person;
use crate::repo::journal_repo::parse_journal_row;
use crate::repo::person_repo::parse_person_row;
use crate::repo::{parse_uuid, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction};

const PAPER_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    journal_uuid,
    corresponding_uuid,
    issue,
    year
FROM journal_papers";

/// Query options for listing papers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaperListQuery {
    /// Exact-match publication year filter.
    pub year: Option<i32>,
}

/// Repository interface for journal papers.
pub trait PaperRepository {
    fn create_paper(&self, paper: &JournalPaper) -> RepoResult<PaperId>;
    fn update_paper(&self, paper: &JournalPaper) -> RepoResult<()>;
    fn get_paper(&self, id: PaperId) -> RepoResult<Option<JournalPaper>>;
    /// Papers matching the query, ordered by title.
    fn list_papers(&self, query: &PaperListQuery) -> RepoResult<Vec<JournalPaper>>;
}

/// SQLite-backed paper repository.
pub struct SqlitePaperRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePaperRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PaperRepository for SqlitePaperRepository<'_> {
    fn create_paper(&self, paper: &JournalPaper) -> RepoResult<PaperId> {
        paper.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO journal_papers (
                uuid,
                title,
                journal_uuid,
                corresponding_uuid,
                issue,
                year
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                paper.uuid.to_string(),
                paper.title.as_str(),
                paper.journal.uuid.to_string(),
                paper.corresponding.map(|id| id.to_string()),
                paper.issue,
                paper.year,
            ],
        )?;
        replace_author_rows(&tx, paper)?;
        tx.commit()?;

        Ok(paper.uuid)
    }

    fn update_paper(&self, paper: &JournalPaper) -> RepoResult<()> {
        paper.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE journal_papers
             SET
                title = ?1,
                journal_uuid = ?2,
                corresponding_uuid = ?3,
                issue = ?4,
                year = ?5,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?6;",
            params![
                paper.title.as_str(),
                paper.journal.uuid.to_string(),
                paper.corresponding.map(|id| id.to_string()),
                paper.issue,
                paper.year,
                paper.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(paper.uuid));
        }

        tx.execute(
            "DELETE FROM paper_authors WHERE paper_uuid = ?1;",
            [paper.uuid.to_string()],
        )?;
        replace_author_rows(&tx, paper)?;
        tx.commit()?;

        Ok(())
    }

    fn get_paper(&self, id: PaperId) -> RepoResult<Option<JournalPaper>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PAPER_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_paper_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn list_papers(&self, query: &PaperListQuery) -> RepoResult<Vec<JournalPaper>> {
        let mut sql = format!("{PAPER_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(year) = query.year {
            sql.push_str(" AND year = ?");
            bind_values.push(Value::Integer(i64::from(year)));
        }

        sql.push_str(" ORDER BY title ASC, uuid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut papers = Vec::new();
        while let Some(row) = rows.next()? {
            papers.push(parse_paper_row(self.conn, row)?);
        }
        Ok(papers)
    }
}

fn replace_author_rows(tx: &Transaction<'_>, paper: &JournalPaper) -> RepoResult<()> {
    for (ord, author) in paper.authors.iter().enumerate() {
        tx.execute(
            "INSERT INTO paper_authors (paper_uuid, person_uuid, ord)
             VALUES (?1, ?2, ?3);",
            params![
                paper.uuid.to_string(),
                author.uuid.to_string(),
                ord as i64
            ],
        )?;
    }
    Ok(())
}

fn parse_paper_row(conn: &Connection, row: &Row<'_>) -> RepoResult<JournalPaper> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_uuid(&uuid_text, "journal_papers.uuid")?;

    let journal_text: String = row.get("journal_uuid")?;
    let journal_uuid = parse_uuid(&journal_text, "journal_papers.journal_uuid")?;
    let journal =
        load_journal(conn, &journal_text)?.ok_or_else(|| RepoError::NotFound(journal_uuid))?;

    let corresponding = match row.get::<_, Option<String>>("corresponding_uuid")? {
        Some(value) => Some(parse_uuid(&value, "journal_papers.corresponding_uuid")?),
        None => None,
    };

    let paper = JournalPaper {
        uuid,
        title: row.get("title")?,
        authors: load_authors(conn, &uuid_text)?,
        corresponding,
        journal,
        issue: row.get("issue")?,
        year: row.get("year")?,
    };
    paper.validate()?;
    Ok(paper)
}

fn load_journal(conn: &Connection, journal_uuid: &str) -> RepoResult<Option<Journal>> {
    let mut stmt =
        conn.prepare("SELECT uuid, title, publisher, issn FROM journals WHERE uuid = ?1;")?;
    let mut rows = stmt.query([journal_uuid])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_journal_row(row)?));
    }
    Ok(None)
}

fn load_authors(conn: &Connection, paper_uuid: &str) -> RepoResult<Vec<Person>> {
    let mut stmt = conn.prepare(
        "SELECT p.uuid, p.name, p.institution, p.orcid
         FROM paper_authors pa
         INNER JOIN people p ON p.uuid = pa.person_uuid
         WHERE pa.paper_uuid = ?1
         ORDER BY pa.ord ASC;",
    )?;
    let mut rows = stmt.query([paper_uuid])?;
    let mut authors = Vec::new();
    while let Some(row) = rows.next()? {
        authors.push(parse_person_row(row)?);
    }
    Ok(authors)
}
