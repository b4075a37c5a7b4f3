use std::path::Path;

use anyhow::Result;
use kanji_core::{Bucket, FrequencyTable};

use crate::io::read_dir_text;
use crate::report::FrequencyReport;

/// Count kanji across a script directory and write the frequency reports
pub fn handle_count(
    script_dir: &Path,
    output_dir: &Path,
) -> Result<(FrequencyTable, FrequencyReport)> {
    tracing::info!("Kanji count directory: {}", script_dir.display());

    let text = read_dir_text(script_dir)?;
    let table = kanji_core::count(&text);
    tracing::info!(
        "Counted {} kanji, {} distinct",
        table.total(),
        table.len()
    );

    let report = FrequencyReport::from_table(&table);
    for bucket in [Bucket::Uncommon, Bucket::Common, Bucket::Final] {
        tracing::info!(
            "{}: {} kanji",
            bucket.as_str(),
            report.bucket(bucket).chars().count()
        );
    }
    for path in report.write_to(output_dir)? {
        tracing::debug!("Wrote {}", path.display());
    }

    tracing::info!("Kanji count finished");
    Ok((table, report))
}
