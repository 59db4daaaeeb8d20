//! Main application struct and eframe::App implementation

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use egui::{Align, Layout, RichText, Ui};

use etq_model::Severity;
use etq_state::AppState;

use crate::services::printing;
use crate::settings::{Settings, load_settings, save_settings};
use crate::theme;
use crate::views;

/// Main application struct
pub struct StudioApp {
    state: AppState,
    settings: Settings,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings();
        apply_visuals(&cc.egui_ctx, settings.dark_mode);
        Self {
            state: AppState::new(),
            settings,
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.notifications.tick(Instant::now());

        let mut pick_file = false;
        let mut recent_pick: Option<PathBuf> = None;
        let mut print_requested = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header_ui(ui, &mut pick_file, &mut recent_pick);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            print_requested = self.central_ui(ui);
        });

        if pick_file {
            self.load_from_dialog();
        }
        if let Some(path) = recent_pick {
            self.load_path(&path);
        }
        if print_requested {
            self.print_selected();
        }

        // A live notice must disappear on its own; keep painting until it
        // expires instead of waiting for the next input event.
        if self.state.notifications.active().is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl StudioApp {
    fn header_ui(&mut self, ui: &mut Ui, pick_file: &mut bool, recent_pick: &mut Option<PathBuf>) {
        ui.add_space(theme::spacing::SM);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Gestão Quantum");
                ui.label(RichText::new("Automação para impressão de etiquetas").weak());
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let mut dark = self.settings.dark_mode;
                if ui.checkbox(&mut dark, "Tema escuro").changed() {
                    self.settings.dark_mode = dark;
                    apply_visuals(ui.ctx(), dark);
                    persist_settings(&self.settings);
                }
            });
        });
        ui.add_space(theme::spacing::XS);
        ui.horizontal(|ui| {
            if ui.button("Carregar CSV").clicked() {
                *pick_file = true;
            }
            if !self.settings.recent_files.is_empty() {
                ui.menu_button("Recentes", |ui| {
                    for path in &self.settings.recent_files {
                        if ui.button(path.display().to_string()).clicked() {
                            *recent_pick = Some(path.clone());
                        }
                    }
                });
            }
        });
        ui.add_space(theme::spacing::SM);
    }

    /// Returns true when the print button was clicked this frame.
    fn central_ui(&mut self, ui: &mut Ui) -> bool {
        views::banner::show(ui, &self.state.notifications);

        let mut query = self.state.search().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Pesquise aqui")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.state.set_search(&query);
        }
        ui.add_space(theme::spacing::SM);

        views::records_table::show(ui, &mut self.state);

        ui.add_space(theme::spacing::LG);
        let mut print_requested = false;
        ui.horizontal(|ui| {
            ui.heading("Linhas Selecionadas");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Imprimir").clicked() {
                    print_requested = true;
                }
            });
        });
        ui.add_space(theme::spacing::XS);
        views::selected_table::show(ui, &self.state);
        print_requested
    }

    fn load_from_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("CSV", &["csv"]);
        if let Some(dir) = self.settings.last_dir() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.load_path(&path);
        }
    }

    fn load_path(&mut self, path: &Path) {
        tracing::info!(path = %path.display(), "loading csv");
        match fs::read_to_string(path) {
            Ok(raw) => {
                if self.state.load_csv(&raw) {
                    self.settings.remember_recent(path);
                    persist_settings(&self.settings);
                }
            }
            Err(err) => {
                tracing::error!(%err, "failed to read csv");
                self.state
                    .notifications
                    .notify(format!("Falha ao ler o arquivo: {err}"), Severity::Danger);
            }
        }
    }

    fn print_selected(&mut self) {
        let outcome = {
            let queue = self.state.print_queue();
            if queue.is_empty() {
                None
            } else {
                Some(printing::open_sheet(&queue))
            }
        };
        match outcome {
            None => self
                .state
                .notifications
                .notify("Nenhuma linha selecionada.", Severity::Info),
            Some(Ok(path)) => {
                tracing::info!(path = %path.display(), "sheet handed to browser");
                self.state.notify_print_success();
            }
            Some(Err(err)) => {
                tracing::error!(%err, "print hand-off failed");
                self.state.notify_print_failure();
            }
        }
    }
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

fn persist_settings(settings: &Settings) {
    if let Err(err) = save_settings(settings) {
        tracing::warn!(%err, "failed to save settings");
    }
}
