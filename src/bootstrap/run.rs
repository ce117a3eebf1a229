use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use clip_app::AppSession;
use clip_core::ports::EditorSurfacePort;
use clip_platform::DirsAppDirsAdapter;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::config::{load_config_or_empty, resolve_config_path};
use super::tracing::init_tracing_subscriber;
use super::wiring::{wire_dependencies, RuntimeSettings};
use crate::input::{Confirmation, InputCommand, InvalidInput, HELP};

/// Whether the input loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Load configuration, install logging, wire adapters and run until Ctrl-C.
pub async fn launch() -> anyhow::Result<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let config_path = resolve_config_path();
    let config = load_config_or_empty(&config_path)?;
    let settings = RuntimeSettings::resolve(&config, &DirsAppDirsAdapter::new())?;

    init_tracing_subscriber(&settings.app_dirs.logs_dir())
        .context("Failed to initialize tracing")?;
    info!(
        config = %config_path.display(),
        backend = %settings.base_url,
        feed = %settings.feed_output.display(),
        poll_secs = settings.poll_interval.as_secs(),
        policy = ?settings.policy,
        "starting clipify"
    );

    let deps = wire_dependencies(&settings)?;
    let session = Arc::new(AppSession::new(deps, settings.policy));
    run_app(session, &settings).await
}

/// Startup sequence, background polling and the stdin loop.
pub async fn run_app(session: Arc<AppSession>, settings: &RuntimeSettings) -> anyhow::Result<()> {
    session.start().await;

    let shutdown = CancellationToken::new();
    let poller = session.spawn_poller(settings.poll_interval, shutdown.child_token());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut confirmation = Confirmation::new();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("received Ctrl+C, stopping");
                break;
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    let command = confirmation.resolve(InputCommand::parse(&line));
                    match dispatch_until(&session, command, tokio::signal::ctrl_c()).await {
                        Some(Flow::Continue) => {}
                        Some(Flow::Quit) => break,
                        None => {
                            info!("received Ctrl+C, stopping");
                            break;
                        }
                    }
                }
                Ok(None) => {
                    debug!("stdin closed, polling until Ctrl+C");
                    stdin_open = false;
                }
                Err(err) => {
                    warn!(error = %err, "failed to read stdin, polling until Ctrl+C");
                    stdin_open = false;
                }
            },
        }
    }

    shutdown.cancel();
    if let Err(err) = poller.await {
        warn!(error = %err, "poller task ended abnormally");
    }
    info!("clipify stopped");
    Ok(())
}

/// Run one command unless `stop` completes first.
///
/// Returns `None` when stopped; the abandoned backend call is dropped.
pub async fn dispatch_until<F: Future>(
    session: &AppSession,
    command: InputCommand,
    stop: F,
) -> Option<Flow> {
    tokio::select! {
        _ = stop => None,
        flow = dispatch(session, command) => Some(flow),
    }
}

/// Route one input command to the session.
///
/// Expects commands already passed through [`Confirmation::resolve`], so
/// a bare [`InputCommand::Flush`] only asks. Failures have already been
/// surfaced as toasts by the use cases.
pub async fn dispatch(session: &AppSession, command: InputCommand) -> Flow {
    match command {
        InputCommand::Type(line) => {
            let current = session.editor().text();
            let next = if current.is_empty() {
                line
            } else {
                format!("{current}\n{line}")
            };
            session.edit(&next);
        }
        InputCommand::Send => {
            if let Err(err) = session.send().await {
                debug!(error = %err, "send failed");
            }
        }
        InputCommand::Clear => session.clear_editor(),
        InputCommand::Language(tag) => {
            let language = session.change_language(&tag);
            info!(%language, "authoring language");
        }
        InputCommand::Copy(index) => {
            if let Err(err) = session.copy(index) {
                warn!(error = %err, "copy failed");
            }
        }
        InputCommand::Flush => println!("Delete every clip? Answer :yes or :no"),
        InputCommand::FlushConfirmed => {
            if let Err(err) = session.flush_all().await {
                debug!(error = %err, "flush failed");
            }
        }
        InputCommand::No => info!("flush cancelled"),
        InputCommand::Yes => warn!("{}", InvalidInput::NothingToConfirm),
        InputCommand::Refresh => match session.refresh().await {
            Ok(count) => info!(count, "feed refreshed"),
            Err(err) => debug!(error = %err, "refresh failed"),
        },
        InputCommand::Scroll(offset) => {
            let layout = session.layout().on_feed_scrolled(offset);
            debug!(?layout, "panel layout");
        }
        InputCommand::Focus => {
            let layout = session.layout().on_panel_clicked();
            debug!(?layout, "panel layout");
        }
        InputCommand::WhoAmI => info!(username = %session.username(), privileged = session.is_privileged(), "identity"),
        InputCommand::Help => println!("{HELP}"),
        InputCommand::Quit => return Flow::Quit,
        InputCommand::Invalid(reason) => warn!("{reason}"),
    }
    Flow::Continue
}
