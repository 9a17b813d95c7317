//! # Selecting Records
//!
//! Users never type record ids. A listing numbers records from 1 in stored order,
//! and that number is how commands address them:
//!
//! ```text
//! 1. Jane Doe    A12 3456 789
//! 2. Short       12345
//! ```
//!
//! Ids are accepted too, either in full or as a prefix of at least
//! [`MIN_ID_PREFIX`] characters, as long as the prefix matches exactly one record.
//! This keeps scripts stable when positions move after a delete.
//!
//! Digits alone read as an index first. When no record sits at that position and
//! the digits are long enough, they are tried as an id prefix instead, so ids that
//! start with digits stay reachable. Digits with a leading zero are always an id.

use crate::error::{PinbookError, Result};
use crate::model::{Record, RecordId};

/// Shortest id prefix accepted as a selector.
pub const MIN_ID_PREFIX: usize = 4;

/// 1-based position of a record in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index: {}", s)),
        }
    }
}

/// User input naming a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(DisplayIndex),
    Id(String),
}

impl std::fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSelector::Index(idx) => write!(f, "{}", idx),
            RecordSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl std::str::FromStr for RecordSelector {
    type Err = PinbookError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PinbookError::Api("Empty selector".to_string()));
        }
        let leading_zero_id = s.starts_with('0') && s.len() >= MIN_ID_PREFIX;
        if s.chars().all(|c| c.is_ascii_digit()) && !leading_zero_id {
            return s
                .parse::<DisplayIndex>()
                .map(RecordSelector::Index)
                .map_err(PinbookError::Api);
        }
        if s.chars().count() < MIN_ID_PREFIX {
            return Err(PinbookError::Api(format!(
                "'{}' is too short, give an index or at least {} characters of an id",
                s, MIN_ID_PREFIX
            )));
        }
        Ok(RecordSelector::Id(s.to_string()))
    }
}

/// A record together with its position, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: DisplayIndex,
    pub record: Record,
}

/// Numbers records in stored order.
pub fn index_records(records: &[Record]) -> Vec<DisplayRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: DisplayIndex(i + 1),
            record: record.clone(),
        })
        .collect()
}

/// Parses raw CLI arguments into selectors.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Finds the record a selector points at.
pub fn resolve(records: &[Record], selector: &RecordSelector) -> Result<DisplayRecord> {
    let position = match selector {
        RecordSelector::Index(DisplayIndex(n)) if (1..=records.len()).contains(n) => n - 1,
        RecordSelector::Index(DisplayIndex(n)) => match digits_as_id(records, *n) {
            Some(found) => found?,
            None => {
                return Err(PinbookError::RecordNotFound(format!(
                    "No record at index {}",
                    n
                )))
            }
        },
        RecordSelector::Id(input) => position_by_id(records, input)?,
    };

    Ok(DisplayRecord {
        index: DisplayIndex(position + 1),
        record: records[position].clone(),
    })
}

/// Resolves every selector, failing on the first that matches nothing.
/// The same record selected twice is returned once.
pub fn resolve_all(records: &[Record], selectors: &[RecordSelector]) -> Result<Vec<DisplayRecord>> {
    let mut out: Vec<DisplayRecord> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let found = resolve(records, selector)?;
        if !out.iter().any(|dr| dr.record.id == found.record.id) {
            out.push(found);
        }
    }
    Ok(out)
}

/// An out-of-range index long enough to be an id prefix. `None` if nothing matches.
fn digits_as_id(records: &[Record], n: usize) -> Option<Result<usize>> {
    let digits = n.to_string();
    if digits.len() < MIN_ID_PREFIX {
        return None;
    }
    match position_by_id(records, &digits) {
        Err(PinbookError::RecordNotFound(_)) => None,
        other => Some(other),
    }
}

fn position_by_id(records: &[Record], input: &str) -> Result<usize> {
    let exact = RecordId::from(input);
    if let Some(pos) = records.iter().position(|r| r.id == exact) {
        return Ok(pos);
    }

    let matches: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id.as_str().starts_with(input))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [pos] => Ok(*pos),
        [] => Err(PinbookError::RecordNotFound(format!(
            "No record with id {}",
            input
        ))),
        _ => Err(PinbookError::Api(format!(
            "Id prefix '{}' matches {} records, type more of it",
            input,
            matches.len()
        ))),
    }
}
