use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// The decoded values of one record, in layout order.
///
/// Serializes as a map from field names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record(IndexMap<String, u64>);

impl Record {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub(crate) fn insert(&mut self, name: String, value: u64) {
        self.0.insert(name, value);
    }

    /// Gets the value of the field called `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    /// Gets the number of fields in the record.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over field names and values in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
