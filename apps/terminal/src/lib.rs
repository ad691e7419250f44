//! # Registro Terminal Library
//!
//! Interactive front-end: reads commands from stdin, draws screens on
//! stdout, logs to stderr.
//!
//! ## Module Organization
//! ```text
//! registro_terminal/
//! ├── lib.rs          ◄─── Input loop & tracing setup
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── app.rs      ◄─── Root controller (gate, lists, cart, snapshots)
//! │   └── cart.rs     ◄─── Cart model
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   ├── form.rs     ◄─── email / age / code / submit
//! │   ├── cart.rs     ◄─── add / remove / clear / cart
//! │   └── session.rs  ◄─── logout / help
//! ├── render.rs       ◄─── Snapshot → text
//! └── error.rs        ◄─── App error type for commands
//! ```
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          run()                                          │
//! │                                                                         │
//! │   ┌──────────────┐   line    ┌──────────────┐  mutate  ┌─────────────┐ │
//! │   │ stdin lines  │ ────────► │  Command     │ ───────► │  AppState   │ │
//! │   └──────────────┘           └──────────────┘          └──────┬──────┘ │
//! │                                                               │        │
//! │   ┌──────────────┐  render   ┌──────────────┐  changed()      │        │
//! │   │   stdout     │ ◄──────── │ AppSnapshot  │ ◄───────────────┘        │
//! │   └──────────────┘           └──────────────┘   (also fetch tasks)     │
//! │                                                                         │
//! │   Both arms live in one select! loop on the current-thread runtime.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use registro_catalog::{CatalogSource, DisplaySettings};

use commands::{execute, Command, Reply};
use render::render;
use state::AppState;

const PROMPT: &str = "> ";

/// Runs the command loop until `quit` or end of input.
///
/// Every published snapshot redraws the screen, whether it came from a
/// command or from a fetch finishing in the background.
pub async fn run<R, W>(
    source: Arc<dyn CatalogSource>,
    display: DisplaySettings,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let state = AppState::new(source);
    let mut snapshots = state.subscribe();
    let mut lines = input.lines();

    info!("Registro started");

    let screen = render(&snapshots.borrow_and_update(), &display);
    write_block(output, &screen).await?;

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let screen = render(&snapshots.borrow_and_update(), &display);
                write_block(output, &screen).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    output.write_all(PROMPT.as_bytes()).await?;
                    output.flush().await?;
                    continue;
                }

                match line.parse::<Command>().and_then(|command| execute(&state, command)) {
                    Ok(Reply::Quit) => break,
                    Ok(Reply::Continue(Some(text))) => write_block(output, &text).await?,
                    Ok(Reply::Continue(None)) => {}
                    Err(err) => {
                        debug!(code = ?err.code, "Command failed");
                        write_block(output, &format!("! {}", err.message)).await?;
                    }
                }
            }
        }
    }

    info!("Registro stopped");
    output.flush().await
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout only carries the screens.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=registro_catalog=trace` - Trace the HTTP client only
/// - Default: INFO, DEBUG for the registro crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,registro=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use registro_catalog::CatalogResult;
    use registro_core::{Employee, Product};

    struct EmptySource;

    #[async_trait]
    impl CatalogSource for EmptySource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn fetch_employees(&self) -> CatalogResult<Vec<Employee>> {
            Ok(Vec::new())
        }
    }

    async fn session(script: &str) -> String {
        let mut output = Vec::new();
        run(
            Arc::new(EmptySource),
            DisplaySettings::default(),
            script.as_bytes(),
            &mut output,
        )
        .await
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_initial_screen_and_quit() {
        let output = session("quit\n").await;
        assert!(output.starts_with("== Registro de Usuario =="));
    }

    #[tokio::test]
    async fn test_end_of_input_stops_loop() {
        let output = session("email a@b.co\n").await;
        assert!(output.contains("Registro de Usuario"));
    }

    #[tokio::test]
    async fn test_errors_are_printed_not_fatal() {
        let output = session("dance\nlogout\nhelp\nquit\n").await;
        assert!(output.contains("! Unknown command 'dance'"));
        assert!(output.contains("! Register first to access the catalog"));
        assert!(output.contains("Comandos:"));
    }

    #[tokio::test]
    async fn test_registration_reaches_catalog() {
        let output = session("email x@gmail.com\nage 30\nsubmit\nquit\n").await;
        assert!(output.contains("Bienvenido."));
    }

    #[tokio::test]
    async fn test_rejected_submit_is_not_an_error() {
        let output = session("email x@gmail.com\nage 10\nsubmit\nquit\n").await;
        assert!(!output.contains("Bienvenido"));
        assert!(!output.contains("! Unknown"));
    }
}
