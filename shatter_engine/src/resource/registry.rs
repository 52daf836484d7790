/// Name-keyed resource storage
///
/// Items live in a `SlotMap`, so keys stay valid while other items come and
/// go. Names are case-insensitive: they are stored lowercase. An item may
/// also be stored without a name (temporary meshes, for instance).

use rustc_hash::FxHashMap;
use slotmap::{Key, SlotMap};

struct Entry<T> {
    name: Option<String>,
    value: T,
}

pub struct NamedRegistry<K: Key, T> {
    entries: SlotMap<K, Entry<T>>,
    names: FxHashMap<String, K>,
}

impl<K: Key, T> Default for NamedRegistry<K, T> {
    fn default() -> Self {
        Self {
            entries: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }
}

impl<K: Key, T> NamedRegistry<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase form under which `name` is stored
    pub fn normalize(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn find(&self, name: &str) -> Option<K> {
        self.names.get(&Self::normalize(name)).copied()
    }

    pub fn get(&self, key: K) -> Option<&T> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.entries.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Stored (lowercase) name of `key`
    pub fn name(&self, key: K) -> Option<&str> {
        self.entries.get(key).and_then(|entry| entry.name.as_deref())
    }

    /// Store `value` under `name`
    ///
    /// An item already registered under that name is replaced in place and
    /// keeps its key.
    pub fn insert(&mut self, name: &str, value: T) -> K {
        let name = Self::normalize(name);
        if let Some(&key) = self.names.get(&name) {
            if let Some(entry) = self.entries.get_mut(key) {
                entry.value = value;
                return key;
            }
        }
        let key = self.entries.insert(Entry { name: Some(name.clone()), value });
        self.names.insert(name, key);
        key
    }

    pub fn insert_anonymous(&mut self, value: T) -> K {
        self.entries.insert(Entry { name: None, value })
    }

    /// Swap the item behind `key`, returning the previous one
    pub fn replace(&mut self, key: K, value: T) -> Option<T> {
        self.entries
            .get_mut(key)
            .map(|entry| std::mem::replace(&mut entry.value, value))
    }

    pub fn remove(&mut self, key: K) -> Option<T> {
        let entry = self.entries.remove(key)?;
        if let Some(name) = &entry.name {
            self.names.remove(name);
        }
        Some(entry.value)
    }

    pub fn remove_named(&mut self, name: &str) -> Option<T> {
        let key = self.find(name)?;
        self.remove(key)
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, Option<&str>, &T)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key, entry.name.as_deref(), &entry.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (K, Option<&str>, &mut T)> {
        self.entries
            .iter_mut()
            .map(|(key, entry)| (key, entry.name.as_deref(), &mut entry.value))
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
