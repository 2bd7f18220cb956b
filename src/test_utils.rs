use crate::source::ValueSource;
use std::path::Path;

/// Replays a fixed sequence of values, panicking if drained past the end.
pub struct ScriptedSource {
    values: std::vec::IntoIter<u32>,
}

impl ScriptedSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }
}

impl ValueSource for ScriptedSource {
    fn next_value(&mut self) -> u32 {
        self.values.next().expect("scripted source exhausted")
    }
}

pub fn read_shard_lines(path: &Path) -> Vec<u32> {
    let raw = std::fs::read_to_string(path).unwrap();
    assert!(raw.ends_with('\n'), "shard {} missing trailing newline", path.display());
    raw.lines().map(|line| line.parse().unwrap()).collect()
}
