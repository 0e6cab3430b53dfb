//! Process-wide registry of the bibliographic entries behind the
//! algorithms that have been executed.
//!
//! Every algorithm entry point registers the publications it implements.
//! The registry is append-only and lives for the whole process.

use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock};

static ENTRIES: OnceLock<Mutex<BTreeSet<&'static str>>> = OnceLock::new();

fn entries() -> &'static Mutex<BTreeSet<&'static str>> {
    ENTRIES.get_or_init(|| Mutex::new(BTreeSet::new()))
}

/// Record that the algorithm described by `id` has been used.
pub fn register_entry(id: &'static str) {
    if let Ok(mut set) = entries().lock() {
        set.insert(id);
    }
}

/// The identifiers registered so far, sorted.
pub fn registered_entries() -> Vec<&'static str> {
    entries().lock().map(|s| s.iter().copied().collect()).unwrap_or_default()
}
