//! Data model types for the title catalog.
//!
//! A [`TitleRecord`] is one row of the source file and of the `titles` table.
//! A [`Catalog`] is the in-memory projection of the whole table, paired with
//! the column schema it was read under.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ── Columns ─────────────────────────────────────────────────────────────────

/// Canonical column names, in source-file order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

/// Number of attributes in every title record.
pub const COLUMN_COUNT: usize = 12;

/// Position of the title column, the catalog key.
pub const TITLE_COLUMN: usize = 2;

/// Canonical schema as owned strings.
pub fn canonical_schema() -> Vec<String> {
    COLUMNS.iter().map(|c| c.to_string()).collect()
}

// ── Title Record ────────────────────────────────────────────────────────────

/// A single title with its twelve text attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub show_id: String,
    /// "Movie" or "TV Show".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: String,
    pub release_year: String,
    pub rating: String,
    pub duration: String,
    /// Genre list, separated by `", "`.
    pub listed_in: String,
    pub description: String,
}

impl TitleRecord {
    /// Build a record from exactly [`COLUMN_COUNT`] values in column order.
    pub fn from_fields<I, S>(fields: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = fields.into_iter().map(Into::into).collect();
        let values: [String; COLUMN_COUNT] =
            values
                .try_into()
                .map_err(|v: Vec<String>| CatalogError::FieldCount {
                    expected: COLUMN_COUNT,
                    found: v.len(),
                })?;
        let [
            show_id,
            kind,
            title,
            director,
            cast,
            country,
            date_added,
            release_year,
            rating,
            duration,
            listed_in,
            description,
        ] = values;

        Ok(Self {
            show_id,
            kind,
            title,
            director,
            cast,
            country,
            date_added,
            release_year,
            rating,
            duration,
            listed_in,
            description,
        })
    }

    /// Borrow all values in column order.
    pub fn fields(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.show_id,
            &self.kind,
            &self.title,
            &self.director,
            &self.cast,
            &self.country,
            &self.date_added,
            &self.release_year,
            &self.rating,
            &self.duration,
            &self.listed_in,
            &self.description,
        ]
    }

    /// Consume the record into its values in column order.
    pub fn into_fields(self) -> Vec<String> {
        vec![
            self.show_id,
            self.kind,
            self.title,
            self.director,
            self.cast,
            self.country,
            self.date_added,
            self.release_year,
            self.rating,
            self.duration,
            self.listed_in,
            self.description,
        ]
    }

    /// Release year as an integer, if the stored text parses as one.
    pub fn release_year(&self) -> Option<i32> {
        self.release_year.trim().parse().ok()
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// One catalog entry: a title and its attribute values in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub title: String,
    pub values: Vec<String>,
}

/// In-memory projection of the store, keyed by title.
///
/// Rows iterate in insertion order. Every row holds exactly one value per
/// schema column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    schema: Vec<String>,
    rows: Vec<CatalogRow>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(schema: Vec<String>) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a catalog from stored records, keyed by each record's title.
    pub fn from_records<I>(schema: Vec<String>, records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = TitleRecord>,
    {
        let mut catalog = Self::new(schema);
        for record in records {
            let title = record.title.clone();
            catalog.insert(title, record.into_fields())?;
        }
        Ok(catalog)
    }

    /// Insert a row, replacing the values of an existing title in place.
    pub fn insert(&mut self, title: String, values: Vec<String>) -> Result<(), CatalogError> {
        if values.len() != self.schema.len() {
            return Err(CatalogError::RowWidth {
                title,
                expected: self.schema.len(),
                found: values.len(),
            });
        }

        match self.index.get(&title) {
            Some(&pos) => self.rows[pos].values = values,
            None => {
                self.index.insert(title.clone(), self.rows.len());
                self.rows.push(CatalogRow { title, values });
            }
        }
        Ok(())
    }

    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    /// Position of `attribute` in the schema, if present.
    pub fn column_index(&self, attribute: &str) -> Option<usize> {
        self.schema.iter().position(|c| c == attribute)
    }

    pub fn get(&self, title: &str) -> Option<&[String]> {
        self.index
            .get(title)
            .map(|&pos| self.rows[pos].values.as_slice())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    pub fn rows(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
