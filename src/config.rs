use anyhow::bail;
use std::ops::RangeInclusive;

/// Fixed parameters for one generation run: how many values to draw, how they
/// are split across shard files, and the inclusive sampling range.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub total_values: usize,
    pub file_count: usize,
    pub values_per_file: usize,
    pub value_range: RangeInclusive<u32>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            total_values: 1000,
            file_count: 10,
            values_per_file: 100,
            value_range: 0..=10_000,
        }
    }
}

impl BatchConfig {
    /// Every value must land in exactly one shard: the shard grid has to
    /// cover the sequence with no leftover and no shortfall.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.file_count * self.values_per_file != self.total_values {
            bail!(
                "{} shards of {} values cannot hold exactly {} values",
                self.file_count,
                self.values_per_file,
                self.total_values
            );
        }
        if self.value_range.is_empty() {
            bail!("Empty value range: {:?}", self.value_range);
        }
        Ok(())
    }
}
