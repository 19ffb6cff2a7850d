mod app;
mod config;
mod logging;
mod tui;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::thread::JoinHandle;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use tracing::{info, warn};
use woord_core::{
    CancellationToken, Credentials, FetchMessage, FetchReport, Fetcher, WordList, WrtsClient,
    load_word_files,
};

use app::{Action, AppMode, AppState};
use config::{DataSource, RunConfig};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{AppLayout, Footer, Header, ListView, ProgressView, Theme, WordView};

/// WOORD - Browse official WRTS word lists in the terminal
#[derive(Parser, Debug)]
#[command(name = "woord")]
#[command(about = "Browse official WRTS word lists in the terminal")]
#[command(version)]
struct Args {
    /// Local word file(s) to browse instead of downloading lists
    #[arg(short, long)]
    file: Vec<PathBuf>,

    /// Language to search official lists for
    #[arg(short, long)]
    language: Option<String>,

    /// Account email
    #[arg(long, env = "WOORD_EMAIL")]
    email: Option<String>,

    /// Account password
    #[arg(long, env = "WOORD_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Term separator in word files
    #[arg(long)]
    separator: Option<char>,

    /// Left column language for word files
    #[arg(long)]
    left_language: Option<String>,

    /// Right column language for word files
    #[arg(long)]
    right_language: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Settings file (defaults to <config dir>/woord/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to <cache dir>/woord/woord.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What the session starts with
enum Startup {
    /// Lists already loaded from disk
    Ready(Vec<WordList>),
    /// Lists still to be downloaded
    Fetch {
        credentials: Credentials,
        language: String,
    },
}

/// Background retrieval in flight
struct PendingFetch {
    rx: Receiver<FetchMessage>,
    handle: Option<JoinHandle<woord_core::Result<FetchReport>>>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init_logging(args.verbose, &log_path) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let settings = config::load_settings(args.config.as_deref());
    let config = RunConfig::resolve(&args, settings);

    // Word files are read before the terminal is taken over so that an
    // unreadable file ends the process with a plain diagnostic
    let startup = match &config.source {
        DataSource::Files(paths) => {
            info!(files = paths.len(), "loading local word files");
            Startup::Ready(load_word_files(paths, &config.local)?)
        }
        DataSource::Remote {
            credentials,
            language,
        } => Startup::Fetch {
            credentials: credentials.clone(),
            language: language.clone(),
        },
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, &config, startup);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &RunConfig,
    startup: Startup,
) -> Result<()> {
    let theme = Theme::default();
    let event_handler = EventHandler::new(50); // 50ms tick rate
    let cancel_token = CancellationToken::new();

    let (mut state, mut pending) = match startup {
        Startup::Ready(lists) => (AppState::with_lists("local files", lists), None),
        Startup::Fetch {
            credentials,
            language,
        } => {
            let client = WrtsClient::new(config.api.clone())?;
            let (rx, handle) = Fetcher::new(client, credentials, language.clone())
                .with_cancellation(cancel_token.clone())
                .fetch();
            let pending = PendingFetch {
                rx,
                handle: Some(handle),
            };
            (AppState::new(format!("WRTS \"{language}\"")), Some(pending))
        }
    };

    loop {
        if let Some(fetch) = pending.as_mut()
            && poll_fetch(&mut state, fetch)
        {
            pending = None;
        }

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            if state.visible_height != layout.body_rows() {
                state.resize(layout.body_rows());
            }

            Header::new(&state, &theme).render(layout.header, frame.buffer_mut());

            let text = state.frame();
            match state.mode() {
                AppMode::Loading => {
                    ProgressView::new(&state.progress, &state.status, state.spinner_frame, &theme)
                        .render(layout.body, frame.buffer_mut());
                }
                AppMode::Selecting => {
                    ListView::new(
                        state.browser.lists(),
                        &text.title,
                        state.browser.cursor(),
                        state.list_scroll,
                        &theme,
                    )
                    .render(layout.body, frame.buffer_mut());
                }
                AppMode::Viewing => {
                    let name = state.browser.selected().map(WordList::name).unwrap_or("");
                    WordView::new(name, &text.body, state.word_scroll, &theme)
                        .render(layout.body, frame.buffer_mut());
                }
            }

            Footer::new(state.mode(), text.hint, &theme).render(layout.footer, frame.buffer_mut());
        })?;

        // Handle events
        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = handle_key(key, state.mode());
                handle_action(&mut state, action);
            }
            AppEvent::Resize(width, height) => {
                let layout = AppLayout::new(Rect::new(0, 0, width, height));
                state.resize(layout.body_rows());
            }
            AppEvent::Tick => {
                if state.loading {
                    state.tick_spinner();
                }
            }
        }

        if state.should_quit {
            cancel_token.cancel();
            break;
        }
    }

    match state.fatal_error {
        Some(message) => Err(eyre!(message)),
        None => Ok(()),
    }
}

/// Drain retrieval messages. Returns true once the worker has finished.
fn poll_fetch(state: &mut AppState, fetch: &mut PendingFetch) -> bool {
    loop {
        match fetch.rx.try_recv() {
            Ok(msg) => {
                state.handle_fetch_message(&msg);
                if matches!(
                    msg,
                    FetchMessage::Completed | FetchMessage::Cancelled | FetchMessage::Fatal(_)
                ) {
                    finish_fetch(state, fetch);
                    return true;
                }
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                finish_fetch(state, fetch);
                return true;
            }
        }
    }
}

fn finish_fetch(state: &mut AppState, fetch: &mut PendingFetch) {
    let Some(handle) = fetch.handle.take() else {
        return;
    };

    match handle.join() {
        Ok(Ok(report)) => {
            info!(
                lists = report.lists.len(),
                failures = report.failures.len(),
                complete = report.is_complete(),
                "lists ready"
            );
            state.set_lists(report.lists);
        }
        Ok(Err(e)) if e.is_fatal() => state.fail(e.to_string()),
        Ok(Err(e)) => {
            warn!(error = %e, "retrieval stopped");
            state.quit();
        }
        Err(_) => state.fail("list retrieval thread panicked".to_string()),
    }
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::Confirm => state.confirm(),
        Action::ToggleSwap => state.toggle_swap(),
        Action::Back => state.back(),
        Action::ScrollUp => state.scroll_up(),
        Action::ScrollDown => state.scroll_down(),
        Action::PageUp => state.page_up(),
        Action::PageDown => state.page_down(),
        Action::Quit => state.quit(),
        Action::Tick => {}
    }
}
