//! The manager of all the fancy eye-candy code

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::run::FrameUpdate;
use crate::shared_state::SharedState;

/// Start all the enabled effects on their own thread, each as its own task with its own frame
/// tick. Returns a handle that resolves once every effect has exited.
pub(crate) fn start_effects(
    mut enabled_effects: Vec<String>,
    output: tokio::sync::mpsc::Sender<FrameUpdate>,
    state: Arc<SharedState>,
) -> std::thread::JoinHandle<Result<()>> {
    let tokio_runtime = tokio::runtime::Handle::current();
    std::thread::spawn(move || -> Result<()> {
        tokio_runtime.block_on(async {
            let protocol_tx = state.protocol_tx.clone();
            if let Err(error) = run_all(&mut enabled_effects, output, &state).await {
                crate::run::broadcast_protocol_end(&protocol_tx);
                return Err(error);
            }

            Ok(())
        })
    })
}

/// Just a convenience wrapper to catch all the magic `?` errors in one place.
async fn run_all(
    enabled_effects: &mut Vec<String>,
    output: tokio::sync::mpsc::Sender<FrameUpdate>,
    state: &Arc<SharedState>,
) -> Result<()> {
    if enabled_effects.is_empty() {
        enabled_effects.push("lasso".to_owned());
    }

    let mut tasks = Vec::new();
    for effect in enabled_effects.iter() {
        tracing::debug!("Starting the '{effect}' effect...");
        match effect.as_str() {
            "lasso" => tasks.push(tokio::spawn(crate::effects::lasso::main::Lasso::start(
                Arc::clone(state),
                output.clone(),
            ))),
            unknown => color_eyre::eyre::bail!("Unknown effect: '{unknown}'"),
        }
    }

    for task in tasks {
        task.await??;
    }

    tracing::debug!("All effects have finished");
    Ok(())
}
