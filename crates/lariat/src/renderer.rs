//! Render the effect surfaces to the user's terminal

use std::io::Write as _;
use std::sync::Arc;

use color_eyre::eyre::{ContextCompat as _, Result};
use termwiz::cell::Cell;
use tokio::sync::mpsc;

use termwiz::surface::Surface as TermwizSurface;
use termwiz::surface::{Change as TermwizChange, Position as TermwizPosition};
use termwiz::terminal::buffered::BufferedTerminal;
use termwiz::terminal::{ScreenSize, Terminal as TermwizTerminal};

use crate::run::FrameUpdate;
use crate::shared_state::SharedState;

/// The number of microseconds in a second.
pub const ONE_MICROSECOND: u64 = 1_000_000;

/// `Renderer`
pub(crate) struct Renderer {
    /// Shared app state
    pub state: Arc<SharedState>,
    /// The terminal's width
    pub width: u16,
    /// The terminal's height
    pub height: u16,
    /// The most recent frame from every effect, keyed by the effect's ID.
    pub effect_frames: std::collections::HashMap<String, crate::surface::Surface>,
}

impl Renderer {
    /// Create a renderer to render to a user's terminal
    pub fn new(state: Arc<SharedState>) -> Result<Self> {
        let mut renderer = Self {
            state,
            width: Default::default(),
            height: Default::default(),
            effect_frames: std::collections::HashMap::new(),
        };

        let size = Self::get_users_tty_size()?;
        renderer.width = size.cols.try_into()?;
        renderer.height = size.rows.try_into()?;

        Ok(renderer)
    }

    /// Instantiate and run
    pub fn start(
        state: Arc<SharedState>,
        protocol_tx: tokio::sync::broadcast::Sender<crate::run::Protocol>,
    ) -> (
        tokio::task::JoinHandle<Result<()>>,
        mpsc::Sender<FrameUpdate>,
    ) {
        let (surfaces_tx, surfaces_rx) = mpsc::channel(256);
        let protocol_rx = protocol_tx.subscribe();
        let handle = tokio::spawn(async move {
            // This would be much simpler if async closures were stable, because then we could use
            // the `?` syntax.
            match Self::new(Arc::clone(&state)) {
                Ok(mut renderer) => {
                    let result = renderer
                        .run(surfaces_rx, protocol_rx, protocol_tx.clone())
                        .await;

                    if let Err(error) = result {
                        crate::run::broadcast_protocol_end(&protocol_tx);
                        return Err(error);
                    };
                }
                Err(error) => {
                    crate::run::broadcast_protocol_end(&protocol_tx);
                    return Err(error);
                }
            };

            Ok(())
        });

        (handle, surfaces_tx)
    }

    /// We need this just because I can't figure out how to pass `Box<dyn Terminal>` to
    /// `BufferedTerminal::new()`
    fn get_termwiz_terminal() -> Result<impl TermwizTerminal> {
        let capabilities = termwiz::caps::Capabilities::new_from_env()?;
        Ok(termwiz::terminal::new_terminal(capabilities)?)
    }

    /// Just for initialisation
    pub fn get_users_tty_size() -> Result<ScreenSize> {
        let mut terminal = Self::get_termwiz_terminal()?;
        Ok(terminal.get_screen_size()?)
    }

    /// Get the user's current terminal size and propagate it
    pub async fn handle_resize<T: TermwizTerminal + Send>(
        &mut self,
        composited_terminal: &mut BufferedTerminal<T>,
        protocol_tx: &tokio::sync::broadcast::Sender<crate::run::Protocol>,
    ) -> Result<()> {
        let is_resized = composited_terminal.check_for_resize()?;
        if !is_resized {
            return Ok(());
        }

        composited_terminal.repaint()?;

        let (width, height) = composited_terminal.dimensions();
        self.width = width.try_into()?;
        self.height = height.try_into()?;
        self.state.set_tty_size(self.width, self.height).await;
        protocol_tx.send(crate::run::Protocol::Resize {
            width: self.width,
            height: self.height,
        })?;

        Ok(())

        // Note: there's no reason to resize the kept effect frames because they're just old
        // copies. We just wait for new updates from each effect, which should be of the right
        // size.
    }

    /// Listen for surface updates from the effects and composite them to the user's terminal.
    /// It lives in its own method so that we can catch any errors and ensure that the user's
    /// terminal is always returned to cooked mode.
    #[expect(
        clippy::print_stdout,
        reason = "Mouse tracking is raw control codes, not cell changes"
    )]
    async fn run(
        &mut self,
        mut surfaces: mpsc::Receiver<FrameUpdate>,
        mut protocol_rx: tokio::sync::broadcast::Receiver<crate::run::Protocol>,
        protocol_tx: tokio::sync::broadcast::Sender<crate::run::Protocol>,
    ) -> Result<()> {
        tracing::debug!("Putting user's terminal into raw mode");
        let mut copy_of_users_terminal = Self::get_termwiz_terminal()?;
        copy_of_users_terminal.set_raw_mode()?;
        let mut composited_terminal = BufferedTerminal::new(copy_of_users_terminal)?;

        // Without this the terminal never reports any mouse movement, and the whole show is
        // about the cursor.
        print!("{}", crate::utils::MOUSE_TRACKING_ON);
        std::io::stdout().flush()?;

        tracing::debug!("Starting render loop");
        #[expect(
            clippy::integer_division_remainder_used,
            reason = "`tokio::select! generates this.`"
        )]
        loop {
            tokio::select! {
                Some(update) = surfaces.recv() => {
                    self.handle_resize(&mut composited_terminal, &protocol_tx).await?;
                    self.render(update, &mut composited_terminal)?;
                }
                Ok(message) = protocol_rx.recv() => {
                    Self::handle_protocol_message(&mut composited_terminal, &message);
                    if matches!(message, crate::run::Protocol::End) {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Exited render loop");

        print!("{}", crate::utils::MOUSE_TRACKING_OFF);
        std::io::stdout().flush()?;

        tracing::debug!("Setting user's terminal to cooked mode");
        composited_terminal.terminal().set_cooked_mode()?;

        Ok(())
    }

    /// Handle messages from the global Lariat protocol.
    fn handle_protocol_message(
        composited_terminal: &mut BufferedTerminal<impl TermwizTerminal>,
        message: &crate::run::Protocol,
    ) {
        #[expect(clippy::wildcard_enum_match_arm, reason = "It's our internal protocol")]
        let result = match message {
            crate::run::Protocol::CursorVisibility(is_visible) => {
                Self::cursor_visibility(composited_terminal, *is_visible)
            }
            _ => Ok(()),
        };

        if let Err(error) = result {
            tracing::error!("Handling protocol message in renderer: {error:?}");
        }
    }

    /// Hide/show the cursor in the end user's terminal.
    fn cursor_visibility(
        composited_terminal: &mut BufferedTerminal<impl TermwizTerminal>,
        is_visible: bool,
    ) -> Result<()> {
        let cursor_visibility = if is_visible {
            termwiz::surface::CursorVisibility::Visible
        } else {
            termwiz::surface::CursorVisibility::Hidden
        };
        composited_terminal.add_change(TermwizChange::CursorVisibility(cursor_visibility));
        composited_terminal.flush()?;

        Ok(())
    }

    /// Do a single render to the user's actual terminal. It uses a diffing algorithm to make
    /// the minimum number of changes.
    fn render(
        &mut self,
        update: FrameUpdate,
        composited_terminal: &mut BufferedTerminal<impl TermwizTerminal + Send>,
    ) -> Result<()> {
        let FrameUpdate::EffectSurface(surface) = update;
        self.effect_frames.insert(surface.id.clone(), surface);

        let mut layers: Vec<&crate::surface::Surface> = self.effect_frames.values().collect();
        layers.sort_by_key(|frame| frame.layer);

        let mut new_frame = TermwizSurface::new(self.width.into(), self.height.into());
        for frame in layers {
            let frame_size = frame.surface.dimensions();
            let mut frame_surface = frame.surface.clone();
            let cells = frame_surface.screen_cells();
            for y in 0..self.height {
                for x in 0..self.width {
                    if usize::from(x) < frame_size.0 && usize::from(y) < frame_size.1 {
                        Self::add_cell(&mut new_frame, &cells, x.into(), y.into())?;
                    }
                }
            }
        }
        composited_terminal.draw_from_screen(&new_frame, 0, 0);

        // This is where we actually render to the user's real terminal.
        composited_terminal.flush()?;

        Ok(())
    }

    /// Add a single cell to the frame
    fn add_cell(
        frame: &mut TermwizSurface,
        cells: &[&mut [Cell]],
        x: usize,
        y: usize,
    ) -> Result<()> {
        let cell = &cells
            .get(y)
            .context(format!("No y coord ({y}) for cell"))?
            .get(x)
            .context(format!("No x coord ({x}) for cell"))?;
        let character = cell.str();
        let is_cell_bg_default = matches!(
            cell.attrs().background(),
            termwiz::color::ColorAttribute::Default
        );
        if character == " " && is_cell_bg_default {
            return Ok(());
        }

        frame.add_changes(vec![
            TermwizChange::CursorPosition {
                x: TermwizPosition::Absolute(x),
                y: TermwizPosition::Absolute(y),
            },
            TermwizChange::Attribute(termwiz::cell::AttributeChange::Foreground(
                cell.attrs().foreground(),
            )),
            TermwizChange::Attribute(termwiz::cell::AttributeChange::Background(
                cell.attrs().background(),
            )),
        ]);
        frame.add_change(character);
        Ok(())
    }
}
