//! Read-only filtered and sorted view over archive records

use arsip_core::{ArchiveError, ArchiveRecord, FileCategory};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FileCategory),
}

impl CategoryFilter {
    fn admits(&self, category: FileCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Order by upload date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first
    #[default]
    Descending,
    /// Oldest first
    Ascending,
}

impl FromStr for SortOrder {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desc" | "newest" => Ok(SortOrder::Descending),
            "asc" | "oldest" => Ok(SortOrder::Ascending),
            _ => Err(ArchiveError::InvalidInput(format!(
                "Unknown sort order: {}",
                s
            ))),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SortOrder::Descending => write!(f, "desc"),
            SortOrder::Ascending => write!(f, "asc"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl ArchiveQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Records matching the search term (file name or any tag, case-insensitive)
/// and the category filter, ordered by upload date. Ties keep input order.
pub fn filter_and_sort<'a, I>(records: I, query: &ArchiveQuery) -> Vec<&'a ArchiveRecord>
where
    I: IntoIterator<Item = &'a ArchiveRecord>,
{
    let needle = query.search.trim().to_lowercase();

    let mut matched: Vec<&ArchiveRecord> = records
        .into_iter()
        .filter(|r| needle.is_empty() || r.matches_lowercase(&needle))
        .filter(|r| query.category.admits(r.category))
        .collect();

    // sort_by is stable
    match query.sort {
        SortOrder::Descending => matched.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
        SortOrder::Ascending => matched.sort_by(|a, b| a.upload_date.cmp(&b.upload_date)),
    }

    matched
}
