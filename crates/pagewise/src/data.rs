use std::ops::RangeInclusive;

use serde::Serialize;

use crate::marker::Marker;

/// Single slot of a pagination: a real page or an omitted chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Page(u64),
    Omitted(Marker),
}

impl Entry {
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Omitted(_) => None,
        }
    }

    pub fn is_omitted(&self) -> bool { matches!(self, Self::Omitted(_)) }
}

/// Ordered entries of a computed pagination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaginationData(Vec<Entry>);

impl PaginationData {
    /// Every page of `pages`, nothing omitted.
    pub(crate) fn full(pages: RangeInclusive<u64>) -> Self {
        Self(pages.map(Entry::Page).collect())
    }

    /// Runs of pages joined by one marker per gap. Empty runs add nothing.
    pub(crate) fn chunked<const N: usize>(
        runs: [RangeInclusive<u64>; N],
        marker: &Marker,
        capacity: usize,
    ) -> Self {
        let mut entries = Vec::with_capacity(capacity);
        for (idx, run) in runs.into_iter().enumerate() {
            if idx > 0 {
                entries.push(Entry::Omitted(marker.clone()));
            }
            entries.extend(run.map(Entry::Page));
        }
        Self(entries)
    }

    pub fn entries(&self) -> &[Entry] { &self.0 }

    /// Page numbers only, markers skipped.
    pub fn pages(&self) -> impl Iterator<Item = u64> + '_ { self.0.iter().filter_map(Entry::page) }

    pub fn omitted_chunks(&self) -> usize { self.0.iter().filter(|e| e.is_omitted()).count() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> { self.0.iter() }

    pub fn into_vec(self) -> Vec<Entry> { self.0 }
}

impl IntoIterator for PaginationData {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a PaginationData {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
