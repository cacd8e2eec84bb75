//! Genre frequency tallies.

use std::collections::HashMap;

use crate::error::CatalogError;
use crate::types::TitleRecord;

/// Separator between genres in the `listed_in` attribute.
pub const GENRE_SEPARATOR: &str = ", ";

/// Genre occurrence counts, kept in order of first encounter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTally {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl GenreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, genre: &str) {
        match self.index.get(genre) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.index.insert(genre.to_string(), self.counts.len());
                self.counts.push((genre.to_string(), 1));
            }
        }
    }

    /// Count every genre in a `listed_in` value.
    ///
    /// An empty list yields a single empty-string genre.
    pub fn add_list(&mut self, listed_in: &str) {
        for genre in listed_in.split(GENRE_SEPARATOR) {
            self.add(genre);
        }
    }

    pub fn count(&self, genre: &str) -> u64 {
        self.index.get(genre).map_or(0, |&pos| self.counts[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(g, n)| (g.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every genre sharing the highest count, in first-encounter order.
    pub fn most_common(&self) -> Vec<String> {
        let Some(max) = self.counts.iter().map(|(_, n)| *n).max() else {
            return Vec::new();
        };
        self.counts
            .iter()
            .filter(|(_, n)| *n == max)
            .map(|(g, _)| g.clone())
            .collect()
    }
}

/// Tally genres of the records released within `start..=end`.
///
/// Every record's release year must be an integer, including records outside
/// the range; the first one that is not fails the whole tally.
pub fn tally_genres<'a, I>(records: I, start: i32, end: i32) -> Result<GenreTally, CatalogError>
where
    I: IntoIterator<Item = &'a TitleRecord>,
{
    let mut tally = GenreTally::new();
    for record in records {
        let year = record
            .release_year()
            .ok_or_else(|| CatalogError::InvalidReleaseYear {
                title: record.title.clone(),
                value: record.release_year.clone(),
            })?;
        if (start..=end).contains(&year) {
            tally.add_list(&record.listed_in);
        }
    }
    Ok(tally)
}
