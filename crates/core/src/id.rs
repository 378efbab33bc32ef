//! Prefixed identifier generation.
//!
//! Commands and synthesized events get identifiers like `CMD-8fK2xQ0aZb`.
//! Generation sits behind [`IdGenerator`] so tests can substitute a
//! deterministic source.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, distributions::Alphanumeric};

/// Length of the random suffix appended after the prefix separator.
pub const ID_SUFFIX_LEN: usize = 10;

/// Source of unique, prefixed identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier of the form `{prefix}-{suffix}`.
    fn generate(&self, prefix: &str) -> String;
}

impl<G> IdGenerator for std::sync::Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn generate(&self, prefix: &str) -> String {
        (**self).generate(prefix)
    }
}

/// Random alphanumeric suffixes (production default).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(char::from)
            .collect();
        format!("{prefix}-{suffix}")
    }
}

/// Deterministic, zero-padded counter suffixes: `CMD-0000000001`, `EVT-0000000002`, ...
///
/// The counter is shared across prefixes, so every generated id is unique.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{n:0width$}", width = ID_SUFFIX_LEN)
    }
}
