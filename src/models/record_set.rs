use super::record::Record;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

/// Ordered, immutable sequence of records.
///
/// Cloning is cheap: the rows live behind an `Arc` and every filter builds a
/// new set instead of touching the source one.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    rows: Arc<[Record]>,
}

impl RecordSet {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.rows
    }

    pub fn first(&self) -> Option<&Record> {
        self.rows.first()
    }

    /// New set with the rows matching `pred`, in the original order.
    pub fn filter<P>(&self, pred: P) -> RecordSet
    where
        P: Fn(&Record) -> bool,
    {
        RecordSet::new(self.rows.iter().filter(|r| pred(r)).cloned().collect())
    }

    /// Distinct values of a column, in first-seen order.
    pub fn distinct<T, F>(&self, column: F) -> Vec<T>
    where
        T: Eq + Hash + Clone,
        F: Fn(&Record) -> T,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for r in self.rows.iter() {
            let v = column(r);
            if seen.insert(v.clone()) {
                out.push(v);
            }
        }
        out
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(rows: Vec<Record>) -> Self {
        RecordSet::new(rows)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
