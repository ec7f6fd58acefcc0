//! Keep/discard record files.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use scopr_core::classifier::ClassificationRecord;

/// Appends one line per record, creating the file if needed.
pub fn append(path: &Path, records: &[ClassificationRecord]) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening record file {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{record}")
            .with_context(|| format!("writing record file {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("writing record file {}", path.display()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
