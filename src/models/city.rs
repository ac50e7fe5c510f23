//! City label ↔ index mapping.

use std::collections::{BTreeSet, HashMap};

use crate::data::DistanceRecord;

/// Bidirectional mapping between city labels and dense indices `0..n`.
///
/// Labels are sorted lexicographically before indices are assigned, so the
/// mapping depends only on the set of labels, not on row order.
///
/// # Examples
///
/// ```
/// use route_optimizer::data::DistanceRecord;
/// use route_optimizer::models::CityIndex;
///
/// let rows = vec![
///     DistanceRecord::new("Pune", "Delhi", 1400.0),
///     DistanceRecord::new("Agra", "Pune", 1200.0),
/// ];
/// let cities = CityIndex::from_records(&rows);
/// assert_eq!(cities.labels(), ["Agra", "Delhi", "Pune"]);
/// assert_eq!(cities.index_of("Delhi"), Some(1));
/// assert_eq!(cities.label(2), Some("Pune"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityIndex {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl CityIndex {
    /// Builds the index from the union of all source and destination labels.
    pub fn from_records(records: &[DistanceRecord]) -> Self {
        Self::from_labels(
            records
                .iter()
                .flat_map(|r| [r.source.as_str(), r.destination.as_str()]),
        )
    }

    /// Builds the index from arbitrary labels. Duplicates collapse.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sorted: BTreeSet<&str> = labels.into_iter().collect();
        let labels: Vec<String> = sorted.into_iter().map(str::to_string).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        Self { labels, index }
    }

    /// Index of `label`, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Label at `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no cities.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_of_sources_and_destinations() {
        let rows = vec![
            DistanceRecord::new("B", "C", 1.0),
            DistanceRecord::new("D", "A", 1.0),
        ];
        let cities = CityIndex::from_records(&rows);
        assert_eq!(cities.labels(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let a = CityIndex::from_records(&[
            DistanceRecord::new("X", "Y", 1.0),
            DistanceRecord::new("Y", "Z", 1.0),
        ]);
        let b = CityIndex::from_records(&[
            DistanceRecord::new("Z", "Y", 1.0),
            DistanceRecord::new("Y", "X", 1.0),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip() {
        let cities = CityIndex::from_labels(["b", "a", "c", "a"]);
        assert_eq!(cities.len(), 3);
        for i in 0..cities.len() {
            let label = cities.label(i).expect("in range");
            assert_eq!(cities.index_of(label), Some(i));
        }
        assert_eq!(cities.label(3), None);
        assert_eq!(cities.index_of("z"), None);
    }

    #[test]
    fn test_empty() {
        let cities = CityIndex::from_records(&[]);
        assert!(cities.is_empty());
    }
}
