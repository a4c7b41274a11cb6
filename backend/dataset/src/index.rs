//! # Lookup Index
//!
//! Immutable, in-memory view over the loaded dataset.
//!
//! ## Ordering
//!
//! Every listing walks dishes in **insertion order**, the order in which each dish name
//! first appears in the source file. Exact lookups that could match more than one key
//! (keys differing only in case) resolve to the earliest one in that order.
//!
//! ## Duplicates
//!
//! A dish name repeated verbatim in the file keeps its first position but takes the values
//! of its last row.
//!
//! ## Headers
//!
//! A repeated column heading is renamed the way pandas does it, `Calories`, `Calories.1`,
//! `Calories.2`, so every record field keeps a distinct name.
//!
//! ## Cost
//!
//! - Exact lookup: O(1), lowercased key table built at load
//! - Suggestions and listing: O(n) over a few thousand dishes at most
use std::{
    collections::{HashMap, HashSet},
    io::Read,
};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::{
    MIN_SUGGESTION_LEN,
    error::{LoadError, LookupError},
    foods::{Entry, FoodRecord, Nutrient},
};

#[derive(Debug, Default)]
pub struct Dataset {
    names: Vec<String>,
    folded: Vec<String>,
    records: Vec<FoodRecord>,
    positions: HashMap<String, usize>,
    folded_positions: HashMap<String, usize>,
}

impl Dataset {
    /// Builds the index from CSV text with a header row. `key_column` names the dish column.
    pub fn from_reader<R: Read>(reader: R, key_column: &str) -> Result<Self, LoadError> {
        let mut csv = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

        let headers = unique_headers(csv.headers()?);
        let key_index = headers
            .iter()
            .position(|header| header == key_column)
            .ok_or_else(|| LoadError::MissingKeyColumn(key_column.to_string()))?;

        let mut dataset = Self::default();

        for row in csv.records() {
            let row = row?;

            let Some(name) = row.get(key_index).filter(|name| !name.trim().is_empty()) else {
                warn!(
                    line = row.position().map(|p| p.line()),
                    "Skipping row without a dish name"
                );
                continue;
            };

            let record = to_record(&headers, &row, key_index);
            dataset.insert(name, record);
        }

        Ok(dataset)
    }

    fn insert(&mut self, name: &str, record: FoodRecord) {
        if let Some(&position) = self.positions.get(name) {
            warn!("Duplicate dish {name}, last row wins");
            self.records[position] = record;
            return;
        }

        let position = self.names.len();
        let folded = name.to_lowercase();

        self.names.push(name.to_string());
        self.records.push(record);
        self.positions.insert(name.to_string(), position);

        if self.folded_positions.contains_key(&folded) {
            debug!("{name} only differs in case from an earlier dish");
        } else {
            self.folded_positions.insert(folded.clone(), position);
        }
        self.folded.push(folded);
    }

    /// Case-insensitive whole-name lookup.
    pub fn get_exact(&self, name: &str) -> Result<Entry<'_>, LookupError> {
        self.folded_positions
            .get(&name.to_lowercase())
            .map(|&position| self.entry(position))
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }

    /// All dish names in insertion order. Materialised once at load.
    pub fn list_all(&self) -> &[String] {
        &self.names
    }

    /// Names containing `query` case-insensitively, capped at `limit`.
    ///
    /// Queries shorter than [`MIN_SUGGESTION_LEN`] characters produce nothing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.chars().count() < MIN_SUGGESTION_LEN {
            return Vec::new();
        }

        let needle = query.to_lowercase();

        self.folded
            .iter()
            .zip(&self.names)
            .filter(|(folded, _)| folded.contains(&needle))
            .map(|(_, name)| name.as_str())
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn entry(&self, position: usize) -> Entry<'_> {
        Entry {
            name: &self.names[position],
            record: &self.records[position],
        }
    }
}

fn unique_headers(headers: &StringRecord) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut repeats: HashMap<&str, usize> = HashMap::new();

    headers
        .iter()
        .map(|header| {
            let mut name = header.to_string();

            while !seen.insert(name.clone()) {
                let count = repeats.entry(header).or_default();
                *count += 1;
                name = format!("{header}.{count}");
            }

            if name != header {
                warn!("Repeated column {header}, renamed to {name}");
            }

            name
        })
        .collect()
}

fn to_record(headers: &[String], row: &StringRecord, key_index: usize) -> FoodRecord {
    headers
        .iter()
        .zip(row.iter())
        .enumerate()
        .filter(|(index, _)| *index != key_index)
        .map(|(_, (header, cell))| (header.as_str(), Nutrient::parse(cell)))
        .collect()
}
