//! Main egui application: composes all panels and dispatches backend calls.

use std::rc::Rc;

use egui::{self, Align, CentralPanel, Layout, RichText, ScrollArea, TopBottomPanel};

use notekeeper_core::event_bus::EventBus;
use notekeeper_core::ports::{DownloadPort, NotesApi};
use notekeeper_core::service::NotesService;
use notekeeper_platform::location::resolve_backend;
use notekeeper_platform::{BrowserDownloads, HttpNotesApi};
use notekeeper_types::auth::Credentials;
use notekeeper_types::config::ClientConfig;
use notekeeper_ui::panels::{dialogs, login, npcs, sessions};
use notekeeper_ui::state::{Action, UiState, View};
use notekeeper_ui::theme;

/// The main application state
pub struct NoteKeeperApp {
    ui_state: UiState,
    event_bus: EventBus,
    service: NotesService,
    first_frame: bool,
}

impl NoteKeeperApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = resolve_backend(ClientConfig::from_env());
        log::info!("Backend API at {}", config.api_base());

        let event_bus = EventBus::new();
        let api: Rc<dyn NotesApi> = Rc::new(HttpNotesApi::new(config));
        let downloads: Rc<dyn DownloadPort> = Rc::new(BrowserDownloads::new());
        let service = NotesService::new(api, downloads, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            service,
            first_frame: true,
        }
    }
}

impl eframe::App for NoteKeeperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain completions from the notes service
        let events = self.event_bus.drain();
        if !events.is_empty() {
            for action in self.ui_state.process_envelopes(events) {
                self.dispatch(action, ctx);
            }
            ctx.request_repaint();
        }

        if !self.ui_state.auth.is_signed_in() {
            CentralPanel::default().show(ctx, |ui| {
                if let Some(action) = login::login_panel(ui, &mut self.ui_state.auth.form) {
                    self.dispatch(action, ctx);
                }
            });
            return;
        }

        // ── Top bar ──────────────────────────────────────────
        let mut requested: Vec<Action> = Vec::new();
        let mut logout = false;
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("D&D Note Keeper")
                        .strong()
                        .color(theme::TEXT_PRIMARY)
                        .size(18.0),
                );
                ui.separator();
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.add(theme::action_button("Logout", theme::ERROR)).clicked() {
                        logout = true;
                    }
                    if let Some(welcome) = self.ui_state.welcome_text() {
                        ui.label(RichText::new(welcome).color(theme::TEXT_SECONDARY));
                    }
                    for (view, label) in [(View::Npcs, "NPCs"), (View::Sessions, "Sessions")] {
                        if ui.selectable_label(self.ui_state.view == view, label).clicked() {
                            requested.extend(self.ui_state.show_view(view));
                        }
                    }
                    if !self.ui_state.status_text.is_empty() {
                        ui.label(
                            RichText::new(&self.ui_state.status_text)
                                .color(theme::TEXT_SECONDARY)
                                .small(),
                        );
                    }
                });
            });
        });

        if logout {
            self.ui_state.logout();
            return;
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let action = match self.ui_state.view {
                        View::Sessions => sessions::sessions_panel(ui, &mut self.ui_state),
                        View::Npcs => npcs::npcs_panel(ui, &mut self.ui_state),
                    };
                    requested.extend(action);
                });
        });

        // ── Dialogs ──────────────────────────────────────────
        requested.extend(dialogs::confirm_dialog(ctx, &mut self.ui_state));
        dialogs::alert_dialog(ctx, &mut self.ui_state);

        for action in requested {
            self.dispatch(action, ctx);
        }
    }
}

impl NoteKeeperApp {
    /// Run a backend operation (async). Everything but login carries the
    /// signed-in credentials.
    fn dispatch(&self, action: Action, ctx: &egui::Context) {
        let service = self.service.clone();
        let ctx = ctx.clone();

        if let Action::Login(candidate) = action {
            wasm_bindgen_futures::spawn_local(async move {
                service.login(candidate).await;
                ctx.request_repaint();
            });
            return;
        }

        let gate = &self.ui_state.auth;
        let (Some(auth), Some(login)) = (gate.credentials().cloned(), gate.login_id()) else {
            log::warn!("Dropping request while signed out");
            return;
        };
        let service = service.for_login(login);

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = run(&service, &auth, action).await {
                log::error!("Request failed: {}", e);
            }
            ctx.request_repaint();
        });
    }
}

async fn run(service: &NotesService, auth: &Credentials, action: Action) -> notekeeper_types::Result<()> {
    match action {
        Action::Login(candidate) => {
            service.login(candidate).await;
            Ok(())
        }
        Action::RefreshAll => service.refresh_all(auth).await,
        Action::RefreshNpcs => service.refresh_npcs(auth).await,
        Action::SaveSession { session_id, draft } => service
            .save_session(auth, session_id.as_deref(), &draft)
            .await
            .map(|_| ()),
        Action::DeleteSession { session_id } => service.delete_session(auth, &session_id).await,
        Action::ExportSession { session_id, title } => service
            .export_session(auth, &session_id, &title)
            .await
            .map(|_| ()),
        Action::SaveNpc(npc) => service.save_npc(auth, &npc).await,
        Action::CreateNpc(npc) => service.create_npc(auth, &npc).await.map(|_| ()),
        Action::DeleteNpc { npc_id } => service.delete_npc(auth, &npc_id).await,
        Action::ExtractNpc(req) => service.extract_npc(auth, &req).await.map(|_| ()),
        Action::SuggestNpcs { text } => service.suggest_npcs(auth, &text).await.map(|_| ()),
    }
}
