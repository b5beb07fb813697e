//! Journal paper list/create/edit flow.
//!
//! # Responsibility
//! - Render year-filtered bibliographic citations.
//! - Model the entry form: new/edit toggle, author-driven corresponding
//!   default, journal sentinel with inline creation, clamped numeric inputs.
//!
//! # Invariants
//! - The corresponding author always comes from the current author set; when
//!   the previous one drops out the default resets to the first author.
//! - Building a fresh form discards any in-progress edit without persisting.
//! - Unlike the project flow, saving performs no session cleanup. Kept
//!   deliberately; see DESIGN.md.

use crate::model::journal::Journal;
use crate::model::paper::{
    default_corresponding_index, JournalPaper, PaperId, MIN_ISSUE, MIN_YEAR,
};
use crate::model::person::{Person, PersonId};
use uuid::Uuid;

/// Years offered by the sidebar filter.
pub const YEAR_OPTIONS: [i32; 3] = [2020, 2021, 2022];

/// Institution whose authors render in bold.
pub const REFERENCE_INSTITUTION: &str = "Universidad de La Habana";

/// Success notice shown after a save.
pub const SAVE_SUCCESS_NOTICE: &str = "Entrada salvada con éxito.";

/// Label of the journal selector sentinel that opens inline creation.
pub const NEW_JOURNAL_SENTINEL: &str = "Nueva entrada";

/// Default filter selection: the most recent year offered.
pub fn default_year() -> i32 {
    YEAR_OPTIONS[YEAR_OPTIONS.len() - 1]
}

/// Heading of the listing section.
pub fn listing_header(year: i32, count: usize) -> String {
    format!("#### Artículos en Journal - {year} ({count})")
}

/// Entry-type toggle between a blank entry and editing an existing paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    NewEntry,
    Edit,
}

/// Journal reference carried by the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalChoice {
    /// A journal picked from the persisted list.
    Existing(Journal),
    /// A journal built inline from the sentinel fields, not yet persisted.
    New(Journal),
}

impl JournalChoice {
    pub fn journal(&self) -> &Journal {
        match self {
            Self::Existing(journal) | Self::New(journal) => journal,
        }
    }
}

/// In-memory entry form state.
///
/// One instance exists per interaction; constructing a new one (mode switch,
/// rerun) starts from stored state again, so unsaved edits vanish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperForm {
    paper_id: PaperId,
    pub title: String,
    pub authors: Vec<Person>,
    pub corresponding: Option<PersonId>,
    pub journal: JournalChoice,
    pub issue: u32,
    pub year: i32,
}

impl PaperForm {
    /// Blank entry associated with the first enumerated journal.
    ///
    /// Returns `None` when no journal exists yet; the form cannot open
    /// without a venue to preselect.
    pub fn new_entry(journals: &[Journal]) -> Option<Self> {
        let first = journals.first()?;
        Some(Self {
            paper_id: Uuid::new_v4(),
            title: String::new(),
            authors: Vec::new(),
            corresponding: None,
            journal: JournalChoice::Existing(first.clone()),
            issue: MIN_ISSUE,
            year: default_year(),
        })
    }

    /// Form preloaded from an existing paper.
    pub fn edit(paper: &JournalPaper) -> Self {
        Self {
            paper_id: paper.uuid,
            title: paper.title.clone(),
            authors: paper.authors.clone(),
            corresponding: paper.corresponding,
            journal: JournalChoice::Existing(paper.journal.clone()),
            issue: paper.issue,
            year: paper.year,
        }
    }

    /// Replaces the author set and recomputes the corresponding default.
    pub fn set_authors(&mut self, authors: Vec<Person>) {
        self.authors = authors;
        self.corresponding = default_corresponding_index(&self.authors, self.corresponding)
            .map(|index| self.authors[index].uuid);
    }

    /// Index of the corresponding author within the current author set.
    pub fn corresponding_index(&self) -> Option<usize> {
        default_corresponding_index(&self.authors, self.corresponding)
    }

    /// Picks a persisted journal from the selector.
    pub fn select_journal(&mut self, journal: Journal) {
        self.journal = JournalChoice::Existing(journal);
    }

    /// Applies the sentinel fields, replacing the reference with a new
    /// not-yet-persisted journal.
    pub fn set_new_journal(
        &mut self,
        title: impl Into<String>,
        publisher: impl Into<String>,
        issn: impl Into<String>,
    ) {
        self.journal = JournalChoice::New(Journal::new(title, publisher, issn));
    }

    /// Issue input, clamped to the widget minimum.
    pub fn set_issue(&mut self, issue: u32) {
        self.issue = issue.max(MIN_ISSUE);
    }

    /// Year input, clamped to the widget minimum.
    pub fn set_year(&mut self, year: i32) {
        self.year = year.max(MIN_YEAR);
    }

    /// The paper this form would save.
    pub fn paper(&self) -> JournalPaper {
        JournalPaper {
            uuid: self.paper_id,
            title: self.title.clone(),
            authors: self.authors.clone(),
            corresponding: self.corresponding,
            journal: self.journal.journal().clone(),
            issue: self.issue,
            year: self.year,
        }
    }
}

/// Opens the entry form for the selected mode.
///
/// `NewEntry` always starts blank; whatever form existed before the toggle is
/// abandoned, so in-progress edits are discarded without persisting.
pub fn open_form(
    mode: EntryMode,
    journals: &[Journal],
    selected: Option<&JournalPaper>,
) -> Option<PaperForm> {
    match mode {
        EntryMode::NewEntry => PaperForm::new_entry(journals),
        EntryMode::Edit => selected.map(PaperForm::edit),
    }
}

/// Label shown for a paper in the edit picker.
pub fn edit_option_label(paper: &JournalPaper) -> String {
    let first_author = paper
        .first_author()
        .map(|author| author.name.as_str())
        .unwrap_or("");
    format!("{} - {first_author}", paper.title)
}

/// Renders the listing section as one citation per paper.
pub fn list_view(papers: &[JournalPaper]) -> Vec<String> {
    papers.iter().map(format_citation).collect()
}

/// Formats one bibliographic citation as markdown.
///
/// Italic title; authors comma-joined, ORCID-linked when the identifier is
/// present and bolded for the reference institution; then venue, issue and
/// year.
pub fn format_citation(paper: &JournalPaper) -> String {
    let mut parts = vec![format!("_{}_.", paper.title)];

    for author in &paper.authors {
        let mut fmt = author.name.clone();
        if let Some(url) = author.orcid_url() {
            fmt = format!("[{fmt}]({url})");
        }
        if author.institution == REFERENCE_INSTITUTION {
            fmt = format!("**{fmt}**");
        }
        parts.push(format!("{fmt}, "));
    }

    parts.push(format!(
        "En _{}_, {}. ISSN: {}.",
        paper.journal.title, paper.journal.publisher, paper.journal.issn
    ));
    parts.push(format!("Número {}, {}.", paper.issue, paper.year));

    parts.join(" ")
}
