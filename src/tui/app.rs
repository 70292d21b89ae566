//! Application State
//!
//! Wires the upload and search flows to terminal input and background requests.

use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tui_textarea::TextArea;

use crate::client::{
    ApiClient, AppStatus, ClientError, Notifications, SearchFlow, SearchTicket, UploadFlow,
};
use crate::config::ClientConfig;
use crate::models::{Dataset, Record, UploadResponse};
use crate::tui::event::AppAction;
use crate::tui::widgets;

/// Current view/screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Main,
    Help,
}

/// Results of background requests
#[derive(Debug)]
pub enum AppEvent {
    UploadFinished(Result<UploadResponse, ClientError>),
    SearchFinished {
        seq: u64,
        result: Result<Dataset, ClientError>,
    },
}

/// Main application state
pub struct App {
    pub config: ClientConfig,

    // UI State
    pub view: View,
    pub should_quit: bool,
    pub scroll_offset: u16,
    pub max_scroll: u16,

    // Flow State
    pub upload: UploadFlow,
    pub search: Option<SearchFlow>,
    pub notifications: Notifications,

    // Inputs
    pub path_input: TextArea<'static>,
    pub search_input: TextArea<'static>,

    api: ApiClient,
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(config: ClientConfig) -> Self {
        let mut path_input = TextArea::default();
        path_input.set_cursor_line_style(ratatui::style::Style::default());
        path_input.set_placeholder_text("Path to a .csv file, then Enter");

        let mut search_input = TextArea::default();
        search_input.set_cursor_line_style(ratatui::style::Style::default());
        search_input.set_placeholder_text("Search...");

        let (tx, rx) = mpsc::channel(100);
        let api = ApiClient::from_config(&config);

        Self {
            config,
            view: View::Main,
            should_quit: false,
            scroll_offset: 0,
            max_scroll: 0,
            upload: UploadFlow::new(),
            search: None,
            notifications: Notifications::default(),
            path_input,
            search_input,
            api,
            event_rx: rx,
            event_tx: tx,
        }
    }

    pub fn status(&self) -> AppStatus {
        self.upload.status()
    }

    /// Records currently on screen
    pub fn records(&self) -> &[Record] {
        match &self.search {
            Some(flow) => flow.displayed().as_slice(),
            None => &[],
        }
    }

    /// Drain results sent back by background requests
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::UploadFinished(result) => {
                self.upload.finish(result, &mut self.notifications);
                if self.upload.status() == AppStatus::ReadyUsage {
                    self.search = Some(SearchFlow::new(self.upload.data().clone()));
                    self.scroll_offset = 0;
                }
            }
            AppEvent::SearchFinished { seq, result } => {
                if let Some(flow) = self.search.as_mut() {
                    if flow.apply(seq, result, &mut self.notifications) {
                        self.scroll_offset = 0;
                    }
                }
            }
        }
    }

    pub fn handle_action(&mut self, action: AppAction) {
        if self.view == View::Help {
            if !matches!(action, AppAction::Tick) {
                self.view = View::Main;
            }
            return;
        }

        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::Select => self.select_file(),
            AppAction::Upload => self.start_upload(),
            AppAction::ToggleHelp => {
                self.view = View::Help;
            }
            AppAction::Escape => {}
            AppAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppAction::ScrollDown => {
                if self.scroll_offset < self.max_scroll {
                    self.scroll_offset += 1;
                }
            }
            AppAction::ScrollPageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            AppAction::ScrollPageDown => {
                self.scroll_offset = (self.scroll_offset + 10).min(self.max_scroll);
            }
            AppAction::Input(key) => self.handle_input(key),
            AppAction::Tick => {
                self.notifications.prune(Utc::now());
            }
        }
    }

    fn handle_input(&mut self, key: crossterm::event::KeyEvent) {
        let status = self.status();
        if status == AppStatus::ReadyUsage {
            if self.search_input.input(key) {
                self.query_changed();
            }
        } else if !status.input_disabled() {
            self.path_input.input(key);
        }
    }

    fn select_file(&mut self) {
        if !self.status().shows_input() {
            return;
        }
        let path = self.path_input.lines().join("");
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        if self.upload.select_file(PathBuf::from(path)) {
            info!(file = %path, "File selected");
        }
    }

    fn start_upload(&mut self) {
        let Some(file) = self.upload.begin_upload() else {
            return;
        };

        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.upload_file(&file).await;
            tx.send(AppEvent::UploadFinished(result)).await.ok();
        });
    }

    fn query_changed(&mut self) {
        let query = self.search_input.lines().join("");
        let Some(flow) = self.search.as_mut() else {
            return;
        };

        match flow.query_changed(&query) {
            Some(ticket) => self.spawn_search(ticket),
            None => {
                debug!("Query cleared, showing uploaded data");
                self.scroll_offset = 0;
            }
        }
    }

    fn spawn_search(&self, ticket: SearchTicket) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.search(&ticket.query).await;
            tx.send(AppEvent::SearchFinished {
                seq: ticket.seq,
                result,
            })
            .await
            .ok();
        });
    }

    /// Recompute the scroll limit for the records pane
    pub fn calculate_scroll_bounds(&mut self, viewport_height: u16) {
        let content_height =
            u16::try_from(widgets::record_line_count(self.records())).unwrap_or(u16::MAX);
        self.max_scroll = content_height.saturating_sub(viewport_height);
        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
        }
    }
}
