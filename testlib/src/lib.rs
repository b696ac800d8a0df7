//! Shared fixtures for the ordmap integration tests.

use ordmap::OrderedMap;

/// Builds a map with `keys` mapped to their position, inserted in the given order.
pub fn map_of(keys: &[&str]) -> OrderedMap<String, usize> {
    keys.iter()
        .enumerate()
        .map(|(position, key)| (key.to_string(), position))
        .collect()
}

/// A single mutation applied to a map by [`apply`].
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Set(&'static str, i32),
    Delete(&'static str),
    Clear,
}

/// Applies `ops` to `map`, in order.
pub fn apply(map: &mut OrderedMap<String, i32>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Set(key, value) => {
                map.set(key.to_string(), value);
            }
            Op::Delete(key) => {
                map.delete(key);
            }
            Op::Clear => map.clear(),
        }
    }
}

/// Computes the entries a map must hold after `ops`, using a plain association list.
///
/// This is the reference the container is checked against: fresh keys go to the end,
/// updates stay in place, deletions splice the key out.
pub fn expected_entries(ops: &[Op]) -> Vec<(String, i32)> {
    let mut entries: Vec<(String, i32)> = Vec::new();
    for op in ops {
        match *op {
            Op::Set(key, value) => match entries.iter().position(|(k, _)| k == key) {
                Some(index) => entries[index].1 = value,
                None => entries.push((key.to_string(), value)),
            },
            Op::Delete(key) => entries.retain(|(k, _)| k != key),
            Op::Clear => entries.clear(),
        }
    }
    entries
}

/// Operation scripts exercising updates, deletions, re-insertions and clears.
pub fn scripts() -> Vec<Vec<Op>> {
    use Op::*;

    vec![
        vec![],
        vec![Set("a", 1), Set("b", 2), Set("a", 3)],
        vec![Set("x", 1), Set("y", 2), Delete("x"), Delete("x")],
        vec![Set("a", 1), Delete("a"), Set("a", 2)],
        vec![Set("a", 1), Set("b", 2), Set("c", 3), Delete("b"), Set("b", 4)],
        vec![Set("a", 1), Set("b", 2), Clear, Set("c", 3), Set("a", 4)],
        vec![Delete("ghost"), Set("k", 0), Set("k", 1), Set("k", 2)],
        vec![
            Set("one", 1),
            Set("two", 2),
            Set("three", 3),
            Set("four", 4),
            Delete("one"),
            Delete("four"),
            Set("two", 22),
            Set("five", 5),
            Set("one", 11),
        ],
    ]
}

/// Records the `(key, value)` pairs observed by a traversal callback.
#[derive(Debug, Default)]
pub struct Recorder {
    pub seen: Vec<(String, i32)>,
}

impl Recorder {
    /// Records one observed entry.
    pub fn record(&mut self, key: &str, value: i32) {
        self.seen.push((key.to_string(), value));
    }
}
