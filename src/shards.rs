use crate::config::BatchConfig;
use crate::progress::{display_bytes, progress_iter};
use anyhow::Context;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Shard `index` (1-based) lives at `<dir>/arquivo_<index>.dat`.
pub fn shard_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("arquivo_{index}.dat"))
}

#[derive(Debug)]
pub struct WrittenShard {
    pub index: usize,
    pub path: PathBuf,
    pub entries: u64,
    pub size: u64,
}

impl Display for WrittenShard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shard {:<2} size={:#<8.1} entries={:<5} path={}",
            self.index,
            display_bytes(self.size),
            self.entries,
            self.path.display()
        )
    }
}

/// Write one shard: truncate-create, one decimal value per line, trailing
/// newline after the last value. The handle is released before returning.
fn write_shard(path: &Path, values: &[u32]) -> anyhow::Result<u64> {
    let file = File::create(path).with_context(|| format!("Error creating shard file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{value}")?;
    }
    let file = writer.into_inner()?;
    Ok(file.metadata()?.len())
}

/// Split `values` into contiguous chunks of `values_per_file` and write each
/// chunk to its own shard file, in sequence order, one file open at a time.
pub fn write_shards(
    output_dir: &Path,
    values: &[u32],
    config: &BatchConfig,
) -> anyhow::Result<Vec<WrittenShard>> {
    let chunks = values.chunks(config.values_per_file).enumerate();
    progress_iter("Writing shards", chunks)
        .map(|(idx, chunk)| {
            let index = idx + 1;
            let path = shard_path(output_dir, index);
            let size = write_shard(&path, chunk)?;
            Ok(WrittenShard {
                index,
                path,
                entries: chunk.len() as u64,
                size,
            })
        })
        .collect()
}
