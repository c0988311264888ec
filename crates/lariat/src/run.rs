//! Main entrypoint for running Lariat

use std::sync::Arc;

use clap::Parser as _;
use color_eyre::eyre::{ContextCompat as _, Result};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

use crate::cli_args::CliArgs;
use crate::input_actions::InputActions;
use crate::raw_input::RawInput;
use crate::renderer::Renderer;
use crate::shared_state::SharedState;

/// A frame of an effect's surface, on its way to the renderer.
pub(crate) enum FrameUpdate {
    /// A frame of an effect
    EffectSurface(crate::surface::Surface),
}

/// Commands to control the various tasks/threads
#[non_exhaustive]
#[derive(Clone, Debug)]
pub(crate) enum Protocol {
    /// The entire application is exiting.
    End,
    /// User's TTY is resized.
    Resize {
        /// Width of new terminal.
        width: u16,
        /// Height of new terminal.
        height: u16,
    },
    /// Parsed input from STDIN.
    Input(crate::raw_input::ParsedInput),
    /// The visibility of the end user's cursor.
    CursorVisibility(bool),
    /// Lariat's configuration.
    Config(crate::config::main::Config),
    /// The ambient night mode was toggled.
    NightMode(bool),
}

/// Main entrypoint
pub(crate) async fn run(state_arc: &Arc<SharedState>) -> Result<()> {
    let protocol_tx = state_arc.protocol_tx.clone();
    let cli_args = setup(state_arc).await?;

    let users_tty_size = Renderer::get_users_tty_size()?;
    state_arc
        .set_tty_size(
            users_tty_size.cols.try_into()?,
            users_tty_size.rows.try_into()?,
        )
        .await;

    let (renderer, surfaces_tx) = Renderer::start(Arc::clone(state_arc), protocol_tx.clone());
    let config_handle = crate::config::main::Config::watch(Arc::clone(state_arc));
    let input_thread_handle = RawInput::start(protocol_tx.clone());
    let actions_handle = InputActions::start(Arc::clone(state_arc));

    protocol_tx.send(Protocol::CursorVisibility(false))?;

    let effects_handle = crate::loader::start_effects(
        cli_args.enabled_effects.clone(),
        surfaces_tx,
        Arc::clone(state_arc),
    );

    effects_handle
        .join()
        .map_err(|err| color_eyre::eyre::eyre!("Effects handle: {err:?}"))??;
    if input_thread_handle.is_finished() {
        // The STDIN loop can't be interrupted from the outside, so it can't exit its loop on the
        // protocol `End` message. Therefore we should only join it if it finished due to its own
        // error.
        input_thread_handle
            .join()
            .map_err(|err| color_eyre::eyre::eyre!("STDIN handle: {err:?}"))??;
    }
    renderer.await??;
    config_handle.await??;
    actions_handle.await??;

    tracing::trace!("Leaving Lariat's main `run()` function");
    Ok(())
}

/// Signal all task/thread loops to exit.
///
/// We keep it in its own function because we need to handle the error separately. If the error
/// were to be bubbled with `?` as usual, there's a chance it would never be logged, because the
/// protocol end signal is itself what allows the central error handler to even be reached.
pub(crate) fn broadcast_protocol_end(protocol_tx: &tokio::sync::broadcast::Sender<Protocol>) {
    tracing::debug!("Broadcasting the protocol `End` message to all listeners");
    let result = protocol_tx.send(Protocol::End);
    if let Err(error) = result {
        tracing::error!("{error:?}");
    }
}

/// Prepare the application to start.
async fn setup(state: &Arc<SharedState>) -> Result<CliArgs> {
    let cli_args = CliArgs::parse();

    let mut main_config_file = state.main_config_file.write().await;
    (*main_config_file).clone_from(&cli_args.main_config);
    drop(main_config_file);

    let directory_result =
        crate::config::main::Config::setup_directory(cli_args.config_dir.clone(), state).await;
    if let Err(directory_error) = directory_result {
        color_eyre::eyre::bail!("Error setting up config directory: {directory_error:?}");
    }

    let config_result = crate::config::main::Config::load_config_into_shared_state(state).await;
    if let Err(config_error) = config_result {
        let path = crate::config::main::Config::main_config_path(state).await;
        color_eyre::eyre::bail!(
            "Bad config file: {config_error:?}\n\nConfig path: {}",
            path.display()
        );
    }

    setup_logging(cli_args.clone(), state).await?;

    if cli_args.night {
        state.set_is_night(true).await;
    }

    // Assuming true colour makes Lariat simpler.
    // * I think it's safe to assume that the vast majority of people wanting particle effects in
    //   their terminal will have a true color terminal anyway.
    std::env::set_var("COLORTERM", "truecolor");

    tracing::info!("Starting Lariat");
    tracing::debug!("Loaded config: {:?}", state.config.read().await);

    Ok(cli_args)
}

/// Setup logging
async fn setup_logging(cli_args: CliArgs, state: &Arc<SharedState>) -> Result<()> {
    let are_log_filters_manually_set = std::env::var("LARIAT_LOG").is_ok();
    let mut path = state.config.read().await.log_path.clone();

    if let Some(cli_override_path) = cli_args.log_path {
        path = cli_override_path;
    }

    let mut level = state.config.read().await.log_level.clone();
    if let Some(cli_override_level) = cli_args.log_level {
        level = cli_override_level;
    }
    let level_as_string = format!("{level:?}").to_lowercase();

    let is_loggable =
        !matches!(level, crate::config::main::LogLevel::Off) || are_log_filters_manually_set;

    if !is_loggable {
        return Ok(());
    }

    let directory = path.parent().context("Couldn't get log path's parent")?;
    std::fs::create_dir_all(directory)?;
    let file = std::fs::File::create(path)?;

    let filters = if are_log_filters_manually_set {
        if let Ok(user_filters) = std::env::var("LARIAT_LOG") {
            std::env::set_var("RUST_LOG", user_filters);
        }

        tracing_subscriber::EnvFilter::builder()
            .with_default_directive("error".parse()?)
            .from_env_lossy()
    } else {
        tracing_subscriber::EnvFilter::builder()
            .with_default_directive("off".parse()?)
            .from_env_lossy()
            .add_directive(format!("lariat={level_as_string}").parse()?)
    };

    let logfile_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_filter(filters);

    tracing_subscriber::registry().with(logfile_layer).init();

    let mut is_logging = state.is_logging.write().await;
    *is_logging = true;
    drop(is_logging);

    Ok(())
}
