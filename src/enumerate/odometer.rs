/// Mixed-radix counter over chunk sizes.
///
/// Produces every index tuple exactly once, starting at all-zero, with the
/// last position varying fastest and carries propagating toward the first.
/// The sequence ends the instant a carry propagates past the first position,
/// after exactly the product of the sizes tuples. Enumeration order is
/// deterministic and must never change: downstream consumers resume cracking
/// runs from known offsets into it.
///
/// The index tuple is owned by the counter and mutated in place; restart by
/// constructing a new `Odometer`.
#[derive(Debug, Clone)]
pub struct Odometer {
    sizes: Vec<usize>,
    indexes: Vec<usize>,
    done: bool,
}

impl Odometer {
    pub fn new(sizes: Vec<usize>) -> Self {
        // A zero radix anywhere, or no positions at all, is an empty product:
        // the counter starts exhausted. Unreachable through the loader, which
        // never yields an empty chunk, but callers can hand us anything.
        let done = sizes.is_empty() || sizes.iter().any(|&s| s == 0);
        let indexes = vec![0; sizes.len()];
        Odometer {
            sizes,
            indexes,
            done,
        }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indexes.clone();

        // Increment the least significant position; a position reaching its
        // radix resets to zero and carries into the one before it.
        let mut pos = self.sizes.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.indexes[pos] += 1;
            if self.indexes[pos] < self.sizes[pos] {
                break;
            }
            self.indexes[pos] = 0;
        }

        Some(current)
    }
}
