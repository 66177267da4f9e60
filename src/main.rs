use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use storefront::adapters::ReqwestHttpClient;
use storefront::app::{App, AppMessage};
use storefront::cli::{parse_args, run_cli_command};
use storefront::config::StorefrontConfig;
use storefront::logging;
use storefront::telemetry::EventLogger;
use storefront::traits::HttpClient;

/// UI tick. Hover timers are checked at this granularity.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if !matches!(command, storefront::cli::CliCommand::RunTui) {
        logging::init_stderr_logging();
        if let Some(result) = run_cli_command(command) {
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
    }

    color_eyre::install()?;
    setup_panic_hook();

    let config = Arc::new(StorefrontConfig::from_env());
    if let Err(e) = logging::init_file_logging(&config) {
        eprintln!("Warning: diagnostics disabled: {}", e);
    }
    tracing::info!("Starting storefront {}", storefront::cli::VERSION);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));
    if let Err(ref e) = result {
        tracing::error!("Storefront exited with error: {}", e);
    }
    result
}

async fn run(config: Arc<StorefrontConfig>) -> Result<()> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(&config.user_agent));
    let (logger, _delivery) =
        EventLogger::spawn(&config.user_agent, http.clone(), config.log_endpoint.clone());
    let mut app = App::new(config, http, logger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);
    app.start();

    let result = run_app(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;
    result
}

/// Restore the terminal if we panic mid-frame.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + Write>(terminal: &mut Terminal<B>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse, Instant::now());
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => {
                        app.should_quit = true;
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quitting");
            return Ok(());
        }
    }
}
