use anyhow::{Context, Result};
use tracing::info;

use mojifix::patch::PatchSpec;

// The one patch this tool exists to perform. The anchor is the garbled form
// of the comment as it currently appears in the file; the replacement is the
// intended text. Both are opaque literals and must not be re-encoded.
const TARGET_PATH: &str = "src/pages/positions/WhalesPage.tsx";
const ANCHOR_TEXT: &str =
    "const [thresholdKrw, setThresholdKrw] = React.useState<number>(100_000_000) // 1??기본";
const REPLACEMENT_TEXT: &str =
    "const [thresholdKrw, setThresholdKrw] = React.useState<number>(100_000_000) // 1억 기준";

fn main() -> Result<()> {
    mojifix::init_logging();

    let spec = PatchSpec::new(TARGET_PATH, ANCHOR_TEXT, REPLACEMENT_TEXT);

    let report = spec
        .apply()
        .with_context(|| format!("failed to patch {}", spec.target_path().display()))?;

    info!(
        "patched {} at byte offset {} ({} bytes in, {} bytes out)",
        spec.target_path().display(),
        report.anchor_offset,
        report.bytes_read,
        report.bytes_written
    );

    Ok(())
}
