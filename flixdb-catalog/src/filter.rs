//! Attribute filtering over a projected [`Catalog`].
//!
//! A title matches when every constraint on a known attribute accepts its
//! value. Constraints on attributes missing from the schema are skipped, and
//! an empty stored value never satisfies a constraint.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::Catalog;

/// Separator between alternatives in a textual constraint (`"PG|PG-13"`).
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// The accepted value(s) for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constraint {
    Equals(String),
    AnyOf(Vec<String>),
}

impl Constraint {
    pub fn equals(value: impl Into<String>) -> Self {
        Self::Equals(value.into())
    }

    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(values.into_iter().map(Into::into).collect())
    }

    /// Parse `"value"` as [`Constraint::Equals`] and `"a|b"` as [`Constraint::AnyOf`].
    pub fn parse(s: &str) -> Self {
        if s.contains(ALTERNATIVE_SEPARATOR) {
            Self::any_of(s.split(ALTERNATIVE_SEPARATOR))
        } else {
            Self::equals(s)
        }
    }

    /// Whether a stored value satisfies this constraint.
    pub fn matches(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match self {
            Self::Equals(expected) => value == expected,
            Self::AnyOf(accepted) => accepted.iter().any(|a| a == value),
        }
    }
}

/// Parse a `key=value` command-line argument into an attribute constraint.
pub fn parse_constraint_arg(arg: &str) -> Result<(String, Constraint), CatalogError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), Constraint::parse(value)))
        }
        _ => Err(CatalogError::InvalidConstraint(arg.to_string())),
    }
}

/// Return the titles that satisfy every applicable constraint, in catalog order.
pub fn filter_titles(catalog: &Catalog, constraints: &[(String, Constraint)]) -> Vec<String> {
    // Resolve columns once; unknown attributes drop out here.
    let applicable: Vec<(usize, &Constraint)> = constraints
        .iter()
        .filter_map(|(attr, c)| catalog.column_index(attr).map(|pos| (pos, c)))
        .collect();

    catalog
        .rows()
        .filter(|row| {
            applicable
                .iter()
                .all(|(pos, c)| c.matches(&row.values[*pos]))
        })
        .map(|row| row.title.clone())
        .collect()
}
