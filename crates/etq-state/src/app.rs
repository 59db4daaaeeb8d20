use etq_model::{LoadError, Record, Severity};

use crate::filter::filter_records;
use crate::notify::NotificationCenter;
use crate::replicate::expand;
use crate::selection::SelectionSet;

/// Notice shown after the sheet was handed to the system for printing.
pub const PRINT_SUCCESS_MESSAGE: &str = "Etiquetas impressas com sucesso!";
/// Notice shown when the print hand-off failed.
pub const PRINT_FAILURE_MESSAGE: &str = "Erro ao imprimir etiquetas.";

/// Single owner of all UI-facing state: the canonical record set, the
/// selection, the search term and the transient notification.
///
/// Every operation runs to completion on the calling (UI) thread; there is
/// no shared mutability and nothing to lock.
#[derive(Debug, Default)]
pub struct AppState {
    records: Vec<Record>,
    selection: SelectionSet,
    search: String,
    pub notifications: NotificationCenter,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and commit a CSV upload.
    ///
    /// On success the canonical set is replaced wholesale; the selection is
    /// left untouched (ids that no longer match any record are inert). On
    /// failure nothing changes and the rejection reason becomes a danger
    /// notice. Returns whether the load was committed.
    pub fn load_csv(&mut self, raw: &str) -> bool {
        match etq_ingest::parse_records(raw) {
            Ok(records) => {
                tracing::info!(count = records.len(), "csv accepted");
                self.records = records;
                true
            }
            Err(err) => {
                tracing::warn!(%err, "csv rejected");
                self.notifications
                    .notify(load_error_message(&err), Severity::Danger);
                false
            }
        }
    }

    /// Replace the canonical set directly (already-validated records).
    pub fn commit_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Update the filter query; stored lowercased, matching is substring.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_lowercase();
    }

    /// Records matching the current search, in canonical order.
    pub fn visible_records(&self) -> Vec<&Record> {
        filter_records(&self.records, &self.search)
    }

    pub fn toggle(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Header-checkbox action: select every visible row, or clear.
    pub fn toggle_all_visible(&mut self) {
        let ids: Vec<String> = self
            .visible_records()
            .iter()
            .map(|record| record.id.clone())
            .collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        self.selection.toggle_all(&refs);
    }

    pub fn is_all_visible_selected(&self) -> bool {
        let visible = self.visible_records();
        let ids: Vec<&str> = visible.iter().map(|record| record.id.as_str()).collect();
        self.selection.is_all_selected(&ids)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected records in canonical order (not selection order).
    pub fn selected_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| self.selection.is_selected(&record.id))
            .collect()
    }

    /// The printable sequence: selected records replicated by quantity.
    pub fn print_queue(&self) -> Vec<&Record> {
        expand(&self.selected_records())
    }

    pub fn notify_print_success(&mut self) {
        self.notifications
            .notify(PRINT_SUCCESS_MESSAGE, Severity::Success);
    }

    pub fn notify_print_failure(&mut self) {
        self.notifications
            .notify(PRINT_FAILURE_MESSAGE, Severity::Danger);
    }
}

/// Map a load rejection to the banner copy shown to the user.
fn load_error_message(err: &LoadError) -> String {
    match err {
        LoadError::MissingHeader(header) => format!("Cabeçalho faltando: {header}"),
        LoadError::InvalidQuantity { id } => {
            format!("Quantidade inválida para o item com ID: {id}")
        }
        LoadError::Malformed(detail) => format!("CSV inválido: {detail}"),
    }
}
