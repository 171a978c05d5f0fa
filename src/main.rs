use job_organizer::app::App;
use job_organizer::cli::{parse_args, run_cli_command};
use job_organizer::config::Config;
use job_organizer::logging::init_logging;
use job_organizer::terminal::{setup_panic_hook, TerminalManager};
use job_organizer::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Redraw tick; drives the loading spinner.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::from_env();

    // CLI flags run without the TUI or file logging
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command, &config) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let _log_guard = init_logging(&config)?;
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let mut term_manager = TerminalManager::new()?;
        let mut app = App::new(&config);
        app.start();

        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore()?;
        result
    });

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {:?}", e);
    } else {
        tracing::info!("Exited cleanly");
    }
    result
}

/// Single-consumer event loop: terminal input, task results and the tick.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &*app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    // Input stream closed
                    None => app.quit(),
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
            return Ok(());
        }
    }
}
