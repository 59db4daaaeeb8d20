//! Print hand-off: render the sheet and give it to the system browser.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;

use etq_model::Record;
use etq_sheet::write_sheet;

/// Where the next sheet will be written.
pub fn sheet_path() -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    std::env::temp_dir().join(format!("etiquetas-{stamp}.html"))
}

/// Write the expanded queue to a temporary sheet and open it in the default
/// browser; the actual printing happens from the browser's dialog.
pub fn open_sheet(queue: &[&Record]) -> anyhow::Result<PathBuf> {
    let path = sheet_path();
    write_sheet(&path, queue)?;
    open::that(&path).with_context(|| format!("open sheet: {}", path.display()))?;
    Ok(path)
}
