use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use etq_ingest::load_records;
use etq_sheet::write_sheet;
use etq_state::AppState;

use crate::cli::{CheckArgs, PrintArgs};
use crate::types::{CheckReport, PrintReport};

/// Validate a CSV file and summarize its contents.
pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let records = load_records(&args.csv_file)?;
    Ok(CheckReport::new(args.csv_file.clone(), records))
}

/// Load, select, replicate and render the label sheet.
pub fn run_print(args: &PrintArgs) -> Result<PrintReport> {
    let records = load_records(&args.csv_file)?;
    let mut state = AppState::new();
    state.commit_records(records);

    if let Some(query) = &args.search {
        state.set_search(query);
        debug!(
            query = %state.search(),
            visible = state.visible_records().len(),
            "filter applied"
        );
    }

    if args.all {
        state.toggle_all_visible();
    } else if args.ids.is_empty() {
        bail!("nothing selected: pass --id <ID> (repeatable) or --all");
    } else {
        for id in &args.ids {
            state.toggle(id);
        }
    }

    let selected = state.selected_records().len();
    let queue = state.print_queue();
    if queue.is_empty() {
        bail!("selection matches no printable rows");
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.csv_file.with_extension("html"));
    write_sheet(&out, &queue)?;
    info!(blocks = queue.len(), selected, out = %out.display(), "sheet rendered");

    if args.open {
        open::that(&out).with_context(|| format!("open sheet: {}", out.display()))?;
    }

    Ok(PrintReport {
        out,
        selected,
        blocks: queue.len(),
    })
}
