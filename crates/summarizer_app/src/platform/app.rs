use std::env;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use client_logging::{client_debug, client_error, client_info};
use ratatui::crossterm::event;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use summarizer_core::{update, AppState, Msg};

use super::effects::EffectRunner;
use super::settings::{AppSettings, Args, BASE_URL_ENV};
use super::ui::constants::PICKER_PAGE;
use super::ui::input::{map_event, UiAction};
use super::ui::picker::{self, map_picker_event, FilePicker, PickerOutcome};
use super::ui::{render, Focus, UiState};

const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let settings = AppSettings::resolve(args, env::var(BASE_URL_ENV).ok())?;

    client_logging::initialize(&settings.log_file, settings.log_level);
    client_info!("Starting pdf-summarizer against {}", settings.client.base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(&settings.client, msg_tx.clone())
        .inspect_err(|err| client_error!("Network engine did not start: {}", err))
        .context("failed to start the network engine")?;
    for msg in settings.startup_messages() {
        let _ = msg_tx.send(msg);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = App::new(runner, msg_rx);
    let outcome = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();
    client_info!("Stopped");
    outcome
}

struct App {
    state: AppState,
    ui: UiState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    should_quit: bool,
}

impl App {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            ui: UiState::default(),
            runner,
            msg_rx,
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut needs_draw = true;
        while !self.should_quit {
            self.runner.poll();
            needs_draw |= self.process_pending_messages();

            if needs_draw || self.state.is_loading() {
                let view = self.state.view();
                terminal.draw(|frame| render::draw(frame, &view, &self.ui))?;
                needs_draw = false;
            }

            if event::poll(TICK)? {
                let evt = event::read()?;
                if self.ui.picker.is_some() {
                    self.browse(&evt);
                } else {
                    let action = map_event(&evt, self.ui.focus, &self.state.view());
                    self.apply(action);
                }
                needs_draw = true;
            } else {
                self.ui.tick = self.ui.tick.wrapping_add(1);
                self.dispatch_msg(Msg::Tick);
            }
        }
        Ok(())
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Dispatch(msg) => {
                if matches!(msg, Msg::SummarizeClicked) {
                    self.ui.summary_scroll = 0;
                }
                self.dispatch_msg(msg);
            }
            UiAction::FocusNext => self.ui.focus = self.ui.focus.next(),
            UiAction::FocusPrev => self.ui.focus = self.ui.focus.prev(),
            UiAction::Scroll(delta) => {
                let scrolled = i32::from(self.ui.summary_scroll) + delta;
                self.ui.summary_scroll = u16::try_from(scrolled.max(0)).unwrap_or(u16::MAX);
            }
            UiAction::OpenPicker => {
                let dir = picker::start_dir(self.state.path_input());
                self.ui.picker = Some(FilePicker::open(&dir));
            }
            UiAction::Quit => self.should_quit = true,
            UiAction::None => {}
        }
    }

    /// Keys go to the file browser while it is open.
    fn browse(&mut self, evt: &event::Event) {
        let Some(picker) = self.ui.picker.as_mut() else {
            return;
        };
        match picker.apply(map_picker_event(evt), PICKER_PAGE) {
            PickerOutcome::Browsing => {}
            PickerOutcome::Closed => self.ui.picker = None,
            PickerOutcome::Chosen(path) => {
                self.ui.picker = None;
                self.ui.focus = Focus::File;
                self.dispatch_msg(Msg::FileChosen(path));
            }
        }
    }

    /// Returns true when any processed message left the state dirty.
    fn process_pending_messages(&mut self) -> bool {
        let mut dirty = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            dirty |= self.dispatch_msg(msg);
        }
        dirty
    }

    fn dispatch_msg(&mut self, msg: Msg) -> bool {
        if let Msg::SummaryFinished { request_id, .. } = &msg {
            if self.state.in_flight() != Some(*request_id) {
                client_debug!("Ignoring stale completion for request {}", request_id);
            }
        }

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            client_debug!("Dispatching {} effect(s)", effects.len());
            self.runner.enqueue(effects);
        }
        self.state.consume_dirty()
    }

    fn shutdown(&mut self) {
        self.dispatch_msg(Msg::Shutdown);
        self.process_pending_messages();
        client_debug!("Releasing {} preview(s)", self.runner.live_previews());
        self.runner.shutdown();
    }
}
