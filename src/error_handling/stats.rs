//! Processing statistics tracking.
//!
//! Thread-safe counters for errors, warnings and informational events, shared by
//! every request handler.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType, WarningType};

/// One atomic counter per variant of `K`, all created up front.
struct Counters<K> {
    counts: HashMap<K, AtomicUsize>,
}

impl<K> Counters<K>
where
    K: IntoEnumIterator + Copy + Eq + Hash + Debug,
{
    fn new() -> Self {
        Self {
            counts: K::iter().map(|key| (key, AtomicUsize::new(0))).collect(),
        }
    }

    fn increment(&self, key: K) {
        match self.counts.get(&key) {
            Some(counter) => {
                counter.fetch_add(1, Ordering::Relaxed);
            }
            None => log::error!("No counter registered for {:?}", key),
        }
    }

    fn get(&self, key: K) -> usize {
        self.counts
            .get(&key)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }

    fn total(&self) -> usize {
        K::iter().map(|key| self.get(key)).sum()
    }

    fn keyed(&self, name: impl Fn(&K) -> &'static str) -> BTreeMap<&'static str, usize> {
        K::iter().map(|key| (name(&key), self.get(key))).collect()
    }
}

/// Thread-safe processing statistics tracker.
///
/// The only process-wide state that changes after startup. It never influences the
/// content of a response.
pub struct ProcessingStats {
    errors: Counters<ErrorType>,
    warnings: Counters<WarningType>,
    info: Counters<InfoType>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        ProcessingStats {
            errors: Counters::new(),
            warnings: Counters::new(),
            info: Counters::new(),
        }
    }

    pub fn increment_error(&self, error: ErrorType) {
        self.errors.increment(error);
    }

    pub fn increment_warning(&self, warning: WarningType) {
        self.warnings.increment(warning);
    }

    pub fn increment_info(&self, info_type: InfoType) {
        self.info.increment(info_type);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(error)
    }

    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings.get(warning)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info.get(info_type)
    }

    pub fn total_errors(&self) -> usize {
        self.errors.total()
    }

    pub fn total_warnings(&self) -> usize {
        self.warnings.total()
    }

    pub fn total_info(&self) -> usize {
        self.info.total()
    }

    /// Error counters keyed by their snake-case name, in stable order.
    pub fn error_counts(&self) -> BTreeMap<&'static str, usize> {
        self.errors.keyed(ErrorType::key)
    }

    /// Warning counters keyed by their snake-case name, in stable order.
    pub fn warning_counts(&self) -> BTreeMap<&'static str, usize> {
        self.warnings.keyed(WarningType::key)
    }

    /// Info counters keyed by their snake-case name, in stable order.
    pub fn info_counts(&self) -> BTreeMap<&'static str, usize> {
        self.info.keyed(InfoType::key)
    }
}
