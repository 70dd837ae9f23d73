//! Process id interning.
//!
//! Maps `pid` strings to dense indices so that per-run state can live in
//! plain vectors indexed by process.

use rustc_hash::FxHashMap;

/// Dense process index (position in the caller's input order).
pub type ProcessIdx = usize;

/// Bidirectional `pid` <-> index map for one run.
#[derive(Debug, Clone, Default)]
pub struct PidInterner {
    to_idx: FxHashMap<String, ProcessIdx>,
    from_idx: Vec<String>,
}

impl PidInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_idx: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_idx: Vec::with_capacity(capacity),
        }
    }

    /// Intern a new pid and return its index.
    ///
    /// Returns `None` if the pid was already interned; indices are never
    /// shared between two processes.
    pub fn insert(&mut self, pid: &str) -> Option<ProcessIdx> {
        if self.to_idx.contains_key(pid) {
            return None;
        }
        let idx = self.from_idx.len();
        self.from_idx.push(pid.to_string());
        self.to_idx.insert(pid.to_string(), idx);
        Some(idx)
    }

    #[inline]
    pub fn get(&self, pid: &str) -> Option<ProcessIdx> {
        self.to_idx.get(pid).copied()
    }

    #[inline]
    pub fn resolve(&self, idx: ProcessIdx) -> Option<&str> {
        self.from_idx.get(idx).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.from_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_idx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion_order() {
        let mut interner = PidInterner::with_capacity(3);

        assert_eq!(interner.insert("P1"), Some(0));
        assert_eq!(interner.insert("P2"), Some(1));
        assert_eq!(interner.insert("P3"), Some(2));

        assert_eq!(interner.resolve(1), Some("P2"));
        assert_eq!(interner.get("P3"), Some(2));
        assert_eq!(interner.get("P9"), None);
        assert_eq!(interner.len(), 3);
    }

    #[test]
    fn test_duplicate_pid_is_rejected() {
        let mut interner = PidInterner::default();
        assert_eq!(interner.insert("A"), Some(0));
        assert_eq!(interner.insert("A"), None);
        assert_eq!(interner.len(), 1);
        assert!(!interner.is_empty());
    }
}
