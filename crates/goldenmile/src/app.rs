//! Top-level application shared by the terminal and browser front-ends.

use goldenmile_core::{Alerter, Applied, SubmitOutcome, FailureReason};
use jiff::Zoned;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::status_bar::StatusBar;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::platform::{ReportWorker, WorkerNavigator, WorkerRequest, WorkerResponse};
use crate::screens::report::ReportScreen;
use crate::state::{AppState, MessageModal, ModalState};
use crate::util::styles::HEADER_COLOR;

pub struct App<W: ReportWorker> {
    state: AppState,
    worker: W,
    screen: ReportScreen,
    status_bar: StatusBar,
}

impl<W: ReportWorker> App<W> {
    pub fn new(state: AppState, worker: W) -> Self {
        Self {
            state,
            worker,
            screen: ReportScreen::new(),
            status_bar: StatusBar,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn handle_key(&mut self, key: AppKeyEvent) {
        // Modal first: it blocks everything else until dismissed
        if self.state.view.modal.is_open() {
            if handle_modal_key(&key, &self.state.view.modal) == ModalResult::Dismissed {
                self.state.view.modal = ModalState::None;
            }
            return;
        }

        let global = &self.state.keybindings.global;
        if KeybindingsConfig::matches(&key, &global.quit) {
            self.request_exit();
            return;
        }
        if KeybindingsConfig::matches(&key, &global.generate) {
            self.submit();
            return;
        }
        if KeybindingsConfig::matches(&key, &global.download) {
            self.download();
            return;
        }
        if KeybindingsConfig::matches(&key, &global.cancel) {
            self.state.view.clear_error();
            return;
        }

        if matches!(key.code, KeyCode::Char('q')) && key.no_modifiers() && !self.state.is_editing()
        {
            self.request_exit();
            return;
        }

        match self.screen.handle_key(&key, &mut self.state) {
            EventResult::Submit => self.submit(),
            EventResult::Download => self.download(),
            EventResult::Exit => self.request_exit(),
            EventResult::Handled | EventResult::NotHandled => {}
        }
    }

    fn request_exit(&mut self) {
        tracing::info!("Exit requested");
        self.state.exit = true;
    }

    /// Validate and hand the request to the worker.
    fn submit(&mut self) {
        let Ok(submission) = self.state.controller.begin_submit(&mut self.state.view) else {
            return;
        };
        // A new attempt supersedes the previous failure
        self.state.view.clear_error();

        let path = self.state.controller.config().endpoints.generate.clone();
        let ticket = submission.ticket;
        let sent = self.worker.send(WorkerRequest::Generate {
            ticket,
            path,
            request: submission.request,
        });

        if !sent {
            let outcome =
                SubmitOutcome::Failure(FailureReason::Network("background worker stopped".into()));
            self.state
                .controller
                .finish_submit(&mut self.state.view, ticket, &outcome);
        }
    }

    fn download(&mut self) {
        if !self.state.view.download_enabled {
            tracing::debug!("Download requested before a report is ready");
            return;
        }

        let mut navigator = WorkerNavigator::new(&self.worker);
        self.state.controller.download_report(&mut navigator);
        if !navigator.sent {
            self.state
                .view
                .show_error("Download failed: background worker stopped");
        }
    }

    /// Apply everything the worker has finished since the last frame.
    pub fn process_worker_responses(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            match response {
                WorkerResponse::Generated { ticket, outcome } => {
                    let applied =
                        self.state
                            .controller
                            .finish_submit(&mut self.state.view, ticket, &outcome);
                    if applied == Applied::Applied && outcome.is_success() {
                        self.state.last_generated = Some(Zoned::now());
                    }
                }
                WorkerResponse::Downloaded { location } => {
                    self.state.view.modal = ModalState::Message(MessageModal::info(
                        "Report downloaded",
                        &location,
                    ));
                }
                WorkerResponse::DownloadFailed(reason) => {
                    self.state
                        .view
                        .show_error(&format!("Download failed: {}", reason));
                }
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(0),    // Form and analysis
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        self.render_title(frame, chunks[0]);
        self.screen.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state.view.modal);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                " Golden Mile ",
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Real-estate advisory report"),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }
}

#[cfg(feature = "native")]
impl<W: ReportWorker> App<W> {
    /// Runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        use crossterm::event::{self, Event, KeyEventKind};
        use std::time::Duration;

        const POLL_INTERVAL: Duration = Duration::from_millis(100);

        while !self.state.exit {
            self.process_worker_responses();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key(key_event.into());
            }
        }

        self.worker.shutdown();
        Ok(())
    }
}
