/// A deduplicated, ordered group of fragment strings — one slot in a
/// combination.
///
/// Every chunk carries the empty fragment at position 0, created when the
/// chunk begins. It models "this slot may contribute nothing to the
/// candidate", which is what makes prefixes and suffixes of the full
/// combination reachable without listing them separately in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    fragments: Vec<String>,
}

impl Chunk {
    /// Start a new chunk, seeded with the implicit empty fragment.
    pub fn new() -> Self {
        Chunk {
            fragments: vec![String::new()],
        }
    }

    /// Append a fragment unless an identical one is already present.
    ///
    /// First occurrence wins; comparison is exact string equality
    /// (case-sensitive, no trimming).
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !self.fragments.contains(&fragment) {
            self.fragments.push(fragment);
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Fragment count, including the implicit empty fragment. Never zero.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Chunk::new()
    }
}
