//! Filtering of maps keyed by optional strings
//!
//! Retains only the entries whose key is present and non-empty, narrowing the
//! key type from `Option<K>` to `K`. Values are carried over unchanged.
//!
//! Two forms are provided:
//! - [`FilterValidKeys`] borrows the input and clones retained entries
//! - [`IntoValidKeys`] consumes the input and moves retained entries

use crate::key::{is_valid_key, KeyClass};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Build a filtered copy of a map, keeping only entries with valid keys
pub trait FilterValidKeys {
    /// Map type with the narrowed key
    type Output;

    /// Returns a new map holding the entries whose key is present and non-empty
    fn filter_valid_keys(&self) -> Self::Output;
}

/// Consume a map, keeping only entries with valid keys
pub trait IntoValidKeys {
    /// Map type with the narrowed key
    type Output;

    fn into_valid_keys(self) -> Self::Output;
}

impl<K, V, S> FilterValidKeys for HashMap<Option<K>, V, S>
where
    K: AsRef<str> + Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    type Output = HashMap<K, V>;

    fn filter_valid_keys(&self) -> Self::Output {
        cloned_valid_entries(self.iter()).collect()
    }
}

impl<K, V> FilterValidKeys for BTreeMap<Option<K>, V>
where
    K: AsRef<str> + Ord + Clone,
    V: Clone,
{
    type Output = BTreeMap<K, V>;

    fn filter_valid_keys(&self) -> Self::Output {
        cloned_valid_entries(self.iter()).collect()
    }
}

impl<K, V, S> IntoValidKeys for HashMap<Option<K>, V, S>
where
    K: AsRef<str> + Eq + Hash,
    S: BuildHasher,
{
    type Output = HashMap<K, V>;

    fn into_valid_keys(self) -> Self::Output {
        valid_entries(self).collect()
    }
}

impl<K, V> IntoValidKeys for BTreeMap<Option<K>, V>
where
    K: AsRef<str> + Ord,
{
    type Output = BTreeMap<K, V>;

    fn into_valid_keys(self) -> Self::Output {
        valid_entries(self).collect()
    }
}

/// Filter a `HashMap` keyed by optional strings
///
/// Free-function form of [`FilterValidKeys::filter_valid_keys`].
pub fn filter_valid_keys<K, V, S>(map: &HashMap<Option<K>, V, S>) -> HashMap<K, V>
where
    K: AsRef<str> + Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    map.filter_valid_keys()
}

/// Adapt any sequence of `(Option<K>, V)` pairs into `(K, V)` pairs with valid keys
///
/// Use this for inputs that are not maps, such as a list of pairs. Later
/// duplicates win once the result is collected into a map.
pub fn valid_entries<K, V, I>(entries: I) -> impl Iterator<Item = (K, V)>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (Option<K>, V)>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| match key {
            Some(k) if !k.as_ref().is_empty() => Some((k, value)),
            _ => None,
        })
}

fn cloned_valid_entries<'a, K, V, I>(entries: I) -> impl Iterator<Item = (K, V)> + 'a
where
    K: AsRef<str> + Clone + 'a,
    V: Clone + 'a,
    I: Iterator<Item = (&'a Option<K>, &'a V)> + 'a,
{
    entries.filter_map(|(key, value)| {
        KeyClass::of(key.as_ref())
            .valid()
            .map(|k| (k.clone(), value.clone()))
    })
}

/// Per-class counts of one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    /// Entries with a valid key
    pub retained: usize,
    /// Entries dropped because the key was absent
    pub absent: usize,
    /// Entries dropped because the key was empty
    pub empty: usize,
}

impl FilterReport {
    /// Count the classes of a sequence of key slots
    pub fn from_keys<'a, K, I>(keys: I) -> Self
    where
        K: AsRef<str> + ?Sized + 'a,
        I: IntoIterator<Item = Option<&'a K>>,
    {
        let mut report = Self::default();
        for key in keys {
            report.record(KeyClass::of(key));
        }
        report
    }

    fn record<K: ?Sized>(&mut self, class: KeyClass<'_, K>) {
        match class {
            KeyClass::Absent => self.absent += 1,
            KeyClass::Empty => self.empty += 1,
            KeyClass::Valid(_) => self.retained += 1,
        }
    }

    /// Number of entries dropped
    pub fn dropped(&self) -> usize {
        self.absent + self.empty
    }

    /// Number of entries inspected
    pub fn total(&self) -> usize {
        self.retained + self.dropped()
    }
}

/// Consume a map, returning the filtered map together with its [`FilterReport`]
pub fn into_valid_keys_with_report<M>(map: M) -> (M::Output, FilterReport)
where
    M: IntoValidKeys + KeyedMap,
{
    let report = FilterReport::from_keys(map.key_slots());
    let output = map.into_valid_keys();

    tracing::debug!(
        retained = report.retained,
        absent = report.absent,
        empty = report.empty,
        "filtered map keys"
    );

    (output, report)
}

/// Maps whose key slots can be inspected before filtering
pub trait KeyedMap {
    type Key: AsRef<str>;
    type Value;

    /// Iterate over the optional keys of the map
    fn key_slots(&self) -> impl Iterator<Item = Option<&Self::Key>>;
}

impl<K, V, S> KeyedMap for HashMap<Option<K>, V, S>
where
    K: AsRef<str>,
{
    type Key = K;
    type Value = V;

    fn key_slots(&self) -> impl Iterator<Item = Option<&K>> {
        self.keys().map(Option::as_ref)
    }
}

impl<K, V> KeyedMap for BTreeMap<Option<K>, V>
where
    K: AsRef<str>,
{
    type Key = K;
    type Value = V;

    fn key_slots(&self) -> impl Iterator<Item = Option<&K>> {
        self.keys().map(Option::as_ref)
    }
}

/// Returns true if every key in the map would survive filtering
pub fn all_keys_valid<M: KeyedMap>(map: &M) -> bool {
    map.key_slots().all(is_valid_key)
}
