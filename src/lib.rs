//! keyfilter - filter maps keyed by optional strings
//!
//! Drops entries whose key is absent (`None`) or empty, producing a map with a
//! non-optional key type. Values are carried over unchanged.
//!
//! ```
//! use keyfilter::FilterValidKeys;
//! use std::collections::HashMap;
//!
//! let map = HashMap::from([(None, 1), (Some(String::new()), 2), (Some("key".to_string()), 3)]);
//! assert_eq!(map.filter_valid_keys(), HashMap::from([("key".to_string(), 3)]));
//! ```

pub mod cli;
pub mod filter;
pub mod input;
pub mod key;

pub use filter::{
    filter_valid_keys, into_valid_keys_with_report, valid_entries, FilterReport, FilterValidKeys,
    IntoValidKeys, KeyedMap,
};
pub use key::{is_valid_key, KeyClass};
