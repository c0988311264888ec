//! Just `main()`. Keep as small as possible.

pub mod cli_args;
/// All the user-configurable settings.
pub mod config {
    pub mod input;
    pub mod main;
}
pub mod input_actions;
pub mod loader;
pub mod raw_input;
pub mod renderer;
pub mod run;
pub mod shared_state;
pub mod surface;
pub mod utils;

/// This is where all the eye-candy effects are kept
pub mod effects {
    pub mod effecter;

    /// The lasso rope that trails the cursor and kicks up dust
    pub mod lasso {
        pub mod config;
        pub mod main;
        pub mod particle;
        pub mod pointer;
        pub mod rope;
        pub mod simulation;
    }
}

use color_eyre::eyre::Result;

#[expect(clippy::non_ascii_literal, reason = "It's just for debugging")]
#[expect(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "It's our central place for communicating with the user on CLI"
)]
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let state_arc = shared_state::SharedState::init()?;
    let result = run::run(&std::sync::Arc::clone(&state_arc)).await;
    println!("{}", utils::RESET_SCREEN);

    let logpath = state_arc.config.read().await.log_path.clone();
    let is_logging = *state_arc.is_logging.read().await;
    tracing::debug!("Lariat is exiting 🤠");

    match result {
        Ok(()) => {
            if is_logging {
                println!("Logs saved to {}", logpath.display());
            }
        }
        Err(error) => {
            tracing::error!("{error:?}");
            eprintln!("Error: {error}");
            if is_logging {
                eprintln!("See {} for more details", logpath.display());
            }
        }
    }

    Ok(())
}
