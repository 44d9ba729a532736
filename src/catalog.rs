//! Scheme content catalog
//!
//! An ordered, immutable table of government scheme descriptions. Position in
//! the table defines the number a sender types to pick a scheme, so entries
//! are held in a `Vec` and never reordered.

mod schemes;

use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Scheme not found: {0}")]
    NotFound(String),
    #[error("Duplicate scheme id: {0}")]
    DuplicateId(String),
    #[error("Scheme {id} has an empty {field} field")]
    EmptyField { id: String, field: &'static str },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Informational content for one government scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeEntry {
    pub id: String,
    pub name: String,
    pub overview: String,
    pub eligibility: String,
    pub documents: String,
    pub benefits: String,
    pub apply: String,
}

impl SchemeEntry {
    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("overview", self.overview.as_str()),
            ("eligibility", self.eligibility.as_str()),
            ("documents", self.documents.as_str()),
            ("benefits", self.benefits.as_str()),
            ("apply", self.apply.as_str()),
        ]
    }
}

/// Ordered collection of schemes keyed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<SchemeEntry>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and no field is blank
    pub fn new(entries: Vec<SchemeEntry>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if let Some((field, _)) = entry
                .fields()
                .into_iter()
                .find(|(_, value)| value.trim().is_empty())
            {
                return Err(CatalogError::EmptyField {
                    id: entry.id.clone(),
                    field,
                });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The eleven-scheme table served in production
    pub fn builtin() -> CatalogResult<Self> {
        Self::new(schemes::builtin_entries())
    }

    pub fn get(&self, id: &str) -> CatalogResult<&SchemeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Entry at a 1-based menu position
    pub fn by_index(&self, index: usize) -> Option<&SchemeEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Entries paired with their 1-based menu position
    pub fn list_ordered(&self) -> impl Iterator<Item = (usize, &SchemeEntry)> {
        self.entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_entry(id: &str) -> SchemeEntry {
    SchemeEntry {
        id: id.to_string(),
        name: format!("{id} name"),
        overview: format!("{id} overview"),
        eligibility: format!("{id} eligibility"),
        documents: format!("{id} documents"),
        benefits: format!("{id} benefits"),
        apply: format!("{id} apply"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<&str> = catalog.list_ordered().map(|(_, e)| e.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "PMFBY",
                "PMKSY",
                "SHC",
                "ENAM",
                "KCC",
                "PGS",
                "PM_DHAN_DHANAY",
                "PULSES_MISSION",
                "COTTON_MISSION",
                "SEEDS_MISSION",
                "MAKHANA_BOARD",
            ]
        );
    }

    #[test]
    fn test_display_index_is_one_based() {
        let catalog = Catalog::new(vec![test_entry("A"), test_entry("B")]).unwrap();
        let indexed: Vec<(usize, &str)> = catalog
            .list_ordered()
            .map(|(i, e)| (i, e.id.as_str()))
            .collect();

        assert_eq!(indexed, vec![(1, "A"), (2, "B")]);
        assert_eq!(catalog.by_index(1).unwrap().id, "A");
        assert_eq!(catalog.by_index(2).unwrap().id, "B");
        assert!(catalog.by_index(0).is_none());
        assert!(catalog.by_index(3).is_none());
    }

    #[test]
    fn test_get_missing_id() {
        let catalog = Catalog::new(vec![test_entry("A")]).unwrap();

        assert_eq!(catalog.get("A").unwrap().name, "A name");
        assert_eq!(
            catalog.get("ZZZ"),
            Err(CatalogError::NotFound("ZZZ".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![test_entry("A"), test_entry("A")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "A"));
    }

    #[test]
    fn test_rejects_blank_field() {
        let mut entry = test_entry("A");
        entry.benefits = "   ".to_string();

        let result = Catalog::new(vec![entry]);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyField { field: "benefits", .. })
        ));
    }
}
