use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

/// One displayable item: a testimonial, a project, ...
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<G, T> {
    pub id: String,
    pub group: G,
    pub item: T,
}

impl<G, T> Entry<G, T> {
    pub fn new(id: impl Into<String>, group: G, item: T) -> Self {
        Self {
            id: id.into(),
            group,
            item,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog id `{0}`")]
    DuplicateId(String),
}

/// Fixed, ordered list of entries. Cloning shares the backing slice.
#[derive(Debug)]
pub struct Catalog<G, T> {
    entries: Rc<[Entry<G, T>]>,
}

impl<G, T> Catalog<G, T> {
    pub fn new(entries: Vec<Entry<G, T>>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new().into(),
        }
    }

    pub fn entries(&self) -> &[Entry<G, T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Catalog positions of the entries tagged `group`, in declaration order.
    pub fn positions_in(&self, group: &G) -> Vec<usize>
    where
        G: PartialEq,
    {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.group == *group)
            .map(|(position, _)| position)
            .collect()
    }

    /// New catalog with `entry` placed first. `self` is left untouched.
    pub fn prepend(&self, entry: Entry<G, T>) -> Result<Self, CatalogError>
    where
        G: Clone,
        T: Clone,
    {
        let mut entries = Vec::with_capacity(self.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        Self::new(entries)
    }
}

impl<G, T> Clone for Catalog<G, T> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<G, T> Default for Catalog<G, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<G: PartialEq, T: PartialEq> PartialEq for Catalog<G, T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Kind {
        Client,
        Demo,
    }

    fn entry(id: &str, kind: Kind) -> Entry<Kind, &'static str> {
        Entry::new(id, kind, "payload")
    }

    #[test]
    fn rejects_duplicate_ids_across_groups() {
        let result = Catalog::new(vec![entry("a", Kind::Client), entry("a", Kind::Demo)]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId("a".to_string()));
    }

    #[test]
    fn positions_keep_declaration_order() {
        let catalog = Catalog::new(vec![
            entry("a", Kind::Client),
            entry("b", Kind::Demo),
            entry("c", Kind::Client),
            entry("d", Kind::Demo),
        ])
        .unwrap();
        assert_eq!(catalog.positions_in(&Kind::Client), vec![0, 2]);
        assert_eq!(catalog.positions_in(&Kind::Demo), vec![1, 3]);
    }

    #[test]
    fn prepend_puts_entry_first_and_keeps_original() {
        let catalog = Catalog::new(vec![entry("a", Kind::Client)]).unwrap();
        let grown = catalog.prepend(entry("new", Kind::Client)).unwrap();
        assert_eq!(grown.entries()[0].id, "new");
        assert_eq!(grown.len(), 2);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn prepend_checks_uniqueness() {
        let catalog = Catalog::new(vec![entry("a", Kind::Client)]).unwrap();
        assert!(catalog.prepend(entry("a", Kind::Demo)).is_err());
    }

    #[test]
    fn clones_share_storage_and_compare_equal() {
        let catalog = Catalog::new(vec![entry("a", Kind::Client)]).unwrap();
        let copy = catalog.clone();
        assert_eq!(catalog, copy);
        assert_eq!(Catalog::<Kind, &str>::empty().len(), 0);
    }
}
