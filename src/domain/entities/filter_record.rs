use super::TriState;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRecord<K: Ord> {
    values: BTreeMap<K, bool>,
}

impl<K: Ord> FilterRecord<K> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> TriState
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.values.get(key).copied().into()
    }

    pub fn set(&mut self, key: K, value: TriState) {
        match value.as_bool() {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
    }

    pub fn with(mut self, key: K, value: impl Into<TriState>) -> Self {
        self.set(key, value.into());
        self
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, bool)> {
        self.values.iter().map(|(key, value)| (key, *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K: Ord> Default for FilterRecord<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<(K, bool)> for FilterRecord<K> {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord + Serialize> Serialize for FilterRecord<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

// Stores may carry explicit nulls for cleared keys.
impl<'de, K> Deserialize<'de> for FilterRecord<K>
where
    K: Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<K, Option<bool>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect())
    }
}
