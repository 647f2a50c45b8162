//! Command-line flag association.
//!
//! Arguments are scanned left to right. A token starting with `-` names a
//! flag; any other token becomes the value of the most recent flag.
//!
//! Flag names of one character, or names listed as word flags, are kept
//! whole. Any other multi-character name is split into one boolean flag per
//! character, and the last character stays current: `-xv file` yields
//! `{x: "x", v: "file"}`.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument, trace};

/// Flag names mapped to their values.
///
/// A flag given without a value maps to its own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMap {
    flags: HashMap<String, String>,
}

impl FlagMap {
    /// Returns the value recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// Returns true when `name` was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Parses the value of `name`, or `None` if absent or unparseable.
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|value| value.parse().ok())
    }

    /// Number of distinct flags.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true when no flag was supplied.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Associates flags with values, keeping `word_flags` whole.
#[instrument(skip_all, fields(arguments = arguments.len()))]
pub fn associate<S: AsRef<str>>(arguments: &[S], word_flags: &HashSet<&str>) -> FlagMap {
    let mut flags = HashMap::new();
    // Empty name means no current flag.
    let mut current = String::new();

    for argument in arguments {
        let argument = argument.as_ref();

        if let Some(name) = argument.strip_prefix('-') {
            if name.chars().count() > 1 && !word_flags.contains(name) {
                for c in name.chars() {
                    current = c.to_string();
                    flags.insert(current.clone(), current.clone());
                }
                trace!(name, "Expanded letter flags");
                continue;
            }
            current = name.to_string();
            flags.insert(current.clone(), current.clone());
            continue;
        }

        if !current.is_empty() {
            flags.insert(current.clone(), argument.to_string());
        }
    }

    debug!(flag_count = flags.len(), "Flags associated");
    FlagMap { flags }
}

/// Associates flags with no word flags: every multi-character name is split.
pub fn associate_all<S: AsRef<str>>(arguments: &[S]) -> FlagMap {
    associate(arguments, &HashSet::new())
}
