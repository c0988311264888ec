//! Act on the user's configured keybindings

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::shared_state::SharedState;

/// Watches parsed input for known keybindings and performs the bound actions.
pub(crate) struct InputActions {
    /// Shared app state
    state: Arc<SharedState>,
}

impl InputActions {
    /// Start the keybinding watcher task.
    pub fn start(state: Arc<SharedState>) -> tokio::task::JoinHandle<Result<()>> {
        tokio::spawn(async move {
            let mut protocol = state.protocol_tx.subscribe();
            let actions = Self { state };

            loop {
                let Ok(message) = protocol.recv().await else {
                    continue;
                };

                #[expect(
                    clippy::wildcard_enum_match_arm,
                    reason = "We only react to input and shutdown"
                )]
                match message {
                    crate::run::Protocol::End => break,
                    crate::run::Protocol::Input(input) => actions.handle_input(&input).await?,
                    _ => (),
                }
            }

            tracing::debug!("Leaving input actions loop");
            Ok(())
        })
    }

    /// Handle input from the end user.
    async fn handle_input(&self, input: &crate::raw_input::ParsedInput) -> Result<()> {
        if let termwiz::input::InputEvent::Key(key_event) = &input.event {
            self.handle_key_event(key_event).await?;
        }

        Ok(())
    }

    /// Handle a key event that we have a keybinding for. Anything else is ignored: there's no
    /// underlying terminal to forward input to.
    async fn handle_key_event(&self, key_event: &termwiz::input::KeyEvent) -> Result<()> {
        let keybindings = self.state.keybindings.read().await;
        let maybe_match = keybindings
            .iter()
            .find_map(|(action, binding)| (binding == key_event).then_some(action.clone()));
        drop(keybindings);
        let Some(trigger) = maybe_match else {
            return Ok(());
        };

        match trigger {
            crate::config::input::KeybindingAction::Quit => {
                tracing::debug!("Quit keybinding pressed");
                crate::run::broadcast_protocol_end(&self.state.protocol_tx);
            }
            crate::config::input::KeybindingAction::ToggleNightMode => {
                let is_night = !self.state.get_is_night().await;
                tracing::debug!("Toggling night mode to: {is_night}");
                self.state.set_is_night(is_night).await;
                self.state
                    .protocol_tx
                    .send(crate::run::Protocol::NightMode(is_night))?;
            }
        }

        Ok(())
    }
}
