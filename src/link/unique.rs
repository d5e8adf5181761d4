//! Filter for values that occur exactly once.
//!
//! Used to tell apart link targets that share a name: only names with a single owner can be
//! linked without further qualification.

use std::collections::HashMap;

/// Values that occur exactly once, in the order they first appear.
pub fn filter_unique_strings<S: AsRef<str>>(values: &[S]) -> Vec<&str> {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *frequency.entry(value.as_ref()).or_insert(0) += 1;
    }

    values
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|value| frequency.get(value) == Some(&1))
        .collect()
}
