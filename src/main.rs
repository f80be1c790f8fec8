use recipe_browser::adapters::ReqwestHttpClient;
use recipe_browser::api::RecipeApi;
use recipe_browser::app::{App, AppMessage};
use recipe_browser::cli::{self, parse_args, CliCommand};
use recipe_browser::config::AppConfig;
use recipe_browser::logging::init_logging;
use recipe_browser::terminal::{setup_panic_hook, TerminalManager};
use recipe_browser::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Handle flags before any initialization
    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", cli::version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        CliCommand::RunTui => {}
    }

    color_eyre::install()?;

    // Configuration errors print on the normal screen, before the TUI starts
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("recipe-browser: {}", e);
            eprintln!("Run with --help for the list of environment variables.");
            std::process::exit(1);
        }
    };

    if let Some(path) = init_logging(&config) {
        info!(log_file = %path.display(), version = cli::VERSION, "Starting recipe browser");
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let api = RecipeApi::new(
            Arc::new(ReqwestHttpClient::new()),
            &config.base_url,
            &config.api_key,
        );
        let mut app = App::new(api, config.response_order);

        let mut term_manager = TerminalManager::new()?;
        app.start();

        let result = run_app(term_manager.terminal(), &mut app).await;

        term_manager.restore()?;
        info!("Recipe browser exited");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!(error = %e, "Terminal event error");
                    }
                    None => app.quit(),
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
