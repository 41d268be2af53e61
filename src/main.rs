use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Movie Recommendation TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to reeltui-debug.log in the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Recommendation server base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::MovieClient;
use config::Config;
use reeltui::FocusPane;
use services::poster::{poster_channel, PosterLoader, PosterUpdate};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "{} {}", timestamp, msg);
    }
}

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<services::api::ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<services::api::ApiResponse>,
    poster_loader: PosterLoader,
    poster_rx: tokio::sync::mpsc::UnboundedReceiver<PosterUpdate>,

    clipboard_command: Option<String>,
    base_url: String,

    /// Poster art keyed by card index (StatefulProtocol is not Clone, so kept outside the Model)
    poster_art: HashMap<usize, ratatui_image::protocol::StatefulProtocol>,
}

impl App {
    fn new(config: Config) -> Self {
        let client = MovieClient::new(config.base_url.clone());
        let base_url = client.base_url().to_string();

        // Spawn API service worker
        let (api_tx, api_rx) = services::api::spawn_api_service(client);

        // Initialize poster protocol picker
        let picker = if config.poster_preview {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Posters: Failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
                }
            };

            // Apply protocol from config
            match config.poster_protocol.to_lowercase().as_str() {
                "auto" => {
                    // Protocol already auto-detected by from_query_stdio()
                    log_debug("Posters: Auto-detected protocol");
                }
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
                    log_debug("Posters: Using iTerm2 protocol");
                }
                "kitty" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
                    log_debug("Posters: Using Kitty protocol");
                }
                "sixel" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
                    log_debug("Posters: Using Sixel protocol");
                }
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
                    log_debug("Posters: Using Halfblocks protocol");
                }
                unknown => {
                    // Protocol already auto-detected, just log the warning
                    log_debug(&format!(
                        "Posters: Unknown protocol '{}', using auto-detect",
                        unknown
                    ));
                }
            }

            Some(picker)
        } else {
            log_debug("Poster previews disabled in config");
            None
        };

        let (poster_tx, poster_rx) = poster_channel();
        let poster_loader = PosterLoader::new(picker, poster_tx);

        App {
            model: model::Model::new(),
            api_tx,
            api_rx,
            poster_loader,
            poster_rx,
            clipboard_command: config.clipboard_command,
            base_url,
            poster_art: HashMap::new(),
        }
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: services::api::ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// Handle poster updates from background loading tasks
    /// Delegated to handlers::poster module
    fn handle_poster_update(&mut self, update: PosterUpdate) {
        handlers::handle_poster_update(self, update);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }

    /// Pipe text into the configured clipboard command
    pub(crate) fn copy_to_clipboard(&mut self, text: &str) {
        use crate::logic::notify::Severity;

        let Some(clipboard_cmd) = self.clipboard_command.clone() else {
            log_debug("No clipboard_command configured - set clipboard_command in config.yaml");
            self.model
                .show_notification(Severity::Error, "clipboard_command not configured");
            return;
        };

        // First word is the program, the rest are its arguments
        let mut parts = clipboard_cmd.split_whitespace();
        let Some(program) = parts.next() else {
            self.model
                .show_notification(Severity::Error, "clipboard_command not configured");
            return;
        };

        use std::io::Write;
        let result = std::process::Command::new(program)
            .args(parts)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
            .and_then(|mut child| {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes())?;
                    // Close stdin to signal EOF
                    drop(stdin);
                }
                Ok(())
            });

        match result {
            Ok(_) => {
                log_debug(&format!("Copied to clipboard via {}: {}", clipboard_cmd, text));
                self.model.show_notification(
                    Severity::Success,
                    format!("Copied to clipboard: {}", text),
                );
            }
            Err(e) => {
                log_debug(&format!(
                    "Failed to execute clipboard command '{}': {}",
                    clipboard_cmd, e
                ));
                self.model.show_notification(
                    Severity::Error,
                    format!("Failed to copy with '{}'", clipboard_cmd),
                );
            }
        }
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/reeltui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("reeltui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config file anywhere, defaults work out of the box
    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(config_path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", config_path));
            }
            let config_str = fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => {
            if args.debug {
                log_debug("No config file found, using defaults");
            }
            Config::default()
        }
    };

    // Override config with CLI flags
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss the notification once its display and fade windows pass
        if app.model.should_remove_notification() {
            app.model.dismiss_notification();
        }

        if app.model.ui.should_quit {
            break;
        }

        let now = Instant::now();

        // Fire the debounced suggestion search once typing has been quiet
        if let Some(ticket) = app.model.suggest.take_due_search(now) {
            log_debug(&format!(
                "Searching suggestions for '{}' (seq {})",
                ticket.query, ticket.seq
            ));
            let _ = app.api_tx.send(services::api::ApiRequest::Search {
                seq: ticket.seq,
                query: ticket.query,
            });
        }

        // Give up on posters that produced nothing within the watchdog window
        for index in app.model.results.force_overdue_posters(now) {
            log_debug(&format!("Poster watchdog fired for card {}", index));
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Process poster updates from background loading tasks (non-blocking)
        while let Ok(update) = app.poster_rx.try_recv() {
            app.handle_poster_update(update);
        }

        // Short poll timeout keeps the debounce and fade timers responsive
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }
    }

    Ok(())
}
