//! Integration tests for the CLI command flows.

use std::io::Write;
use std::path::PathBuf;

use etq_cli::cli::{CheckArgs, PrintArgs};
use etq_cli::commands::{run_check, run_print};

const SCENARIO: &str = "id,draw,equipament,sku,description,qte,supplier\n\
                        1,D1,E1,S1,desc,2,Sup1\n\
                        2,D2,E2,S2,desc2,1,Sup2";

fn write_csv(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("inventory.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{contents}").unwrap();
    path
}

fn print_args(csv_file: PathBuf) -> PrintArgs {
    PrintArgs {
        csv_file,
        out: None,
        ids: Vec::new(),
        all: false,
        search: None,
        open: false,
    }
}

#[test]
fn check_reports_counts_for_a_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);

    let report = run_check(&CheckArgs { csv_file: csv }).unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.total_labels, 3);
    assert_eq!(report.suppliers, 2);
}

#[test]
fn check_rejects_a_file_with_a_missing_header() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, "id,draw,equipament,description,qte,supplier\n1,D1,E1,d,1,S");

    let err = run_check(&CheckArgs { csv_file: csv }).unwrap_err();
    assert!(format!("{err:#}").contains("sku"));
}

#[test]
fn print_all_writes_one_block_per_unit() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);
    let out = dir.path().join("sheet.html");

    let mut args = print_args(csv);
    args.all = true;
    args.out = Some(out.clone());
    let report = run_print(&args).unwrap();

    assert_eq!(report.selected, 2);
    assert_eq!(report.blocks, 3);
    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<div class=\"label\">").count(), 3);
}

#[test]
fn print_by_id_replicates_only_that_record() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);
    let out = dir.path().join("sheet.html");

    let mut args = print_args(csv);
    args.ids = vec!["1".to_string()];
    args.out = Some(out.clone());
    let report = run_print(&args).unwrap();

    assert_eq!(report.selected, 1);
    assert_eq!(report.blocks, 2);
    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("Fornecedor: Sup1").count(), 2);
    assert!(!html.contains("Sup2"));
}

#[test]
fn print_search_narrows_the_all_selection() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);
    let out = dir.path().join("sheet.html");

    let mut args = print_args(csv);
    args.all = true;
    args.search = Some("desc2".to_string());
    args.out = Some(out.clone());
    let report = run_print(&args).unwrap();

    assert_eq!(report.selected, 1);
    assert_eq!(report.blocks, 1);
}

#[test]
fn print_without_a_selection_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);

    let err = run_print(&print_args(csv)).unwrap_err();
    assert!(err.to_string().contains("nothing selected"));
}

#[test]
fn print_with_an_unknown_id_fails_instead_of_writing_an_empty_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);

    let mut args = print_args(csv);
    args.ids = vec!["99".to_string()];
    let err = run_print(&args).unwrap_err();
    assert!(err.to_string().contains("no printable rows"));
}

#[test]
fn print_defaults_the_output_next_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, SCENARIO);

    let mut args = print_args(csv.clone());
    args.all = true;
    let report = run_print(&args).unwrap();

    assert_eq!(report.out, csv.with_extension("html"));
    assert!(report.out.exists());
}
