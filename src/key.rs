//! Classification of optional string keys
//!
//! A key slot is either absent (`None`), present but empty (`Some("")`), or
//! valid. Only valid keys survive filtering. Length is the only criterion, so
//! a whitespace-only key is still valid.

/// Three-way classification of an optional key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass<'a, K: ?Sized> {
    /// No key at all (`None`)
    Absent,
    /// Key present with zero length
    Empty,
    /// Key present and non-empty
    Valid(&'a K),
}

impl<'a, K> KeyClass<'a, K>
where
    K: AsRef<str> + ?Sized,
{
    /// Classify a key slot
    pub fn of(key: Option<&'a K>) -> Self {
        match key {
            None => KeyClass::Absent,
            Some(k) if k.as_ref().is_empty() => KeyClass::Empty,
            Some(k) => KeyClass::Valid(k),
        }
    }

    /// The key, if it is valid
    pub fn valid(self) -> Option<&'a K> {
        match self {
            KeyClass::Valid(k) => Some(k),
            KeyClass::Absent | KeyClass::Empty => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, KeyClass::Valid(_))
    }
}

/// Returns true if the key is present and non-empty
pub fn is_valid_key<K: AsRef<str> + ?Sized>(key: Option<&K>) -> bool {
    key.is_some_and(|k| !k.as_ref().is_empty())
}
