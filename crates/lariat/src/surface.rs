//! Add pixels, lines and text to an effect surface

use color_eyre::eyre::bail;
use color_eyre::eyre::ContextCompat as _;
use color_eyre::eyre::Result;
use termwiz::surface::Change as TermwizChange;
use termwiz::surface::Position as TermwizPosition;

/// An RGBA colour
pub(crate) type Colour = (f32, f32, f32, f32);

/// `Surface`
#[derive(Clone)]
pub(crate) struct Surface {
    /// The unique ID of the effect to which this surface belongs.
    pub id: String,
    /// The terminal's width
    pub width: usize,
    /// The terminal's height
    pub height: usize,
    /// The order in which the effect should be rendered. Lower layers are drawn first, so higher
    /// layers appear on top of them.
    pub layer: i16,
    /// A surface of terminal cells
    pub surface: termwiz::surface::Surface,
}

impl Surface {
    /// Create a new surface for building an effect's frame
    #[must_use]
    pub fn new(id: String, width: usize, height: usize, layer: i16) -> Self {
        Self {
            id,
            width,
            height,
            layer,
            surface: termwiz::surface::Surface::new(width, height),
        }
    }

    /// The height of the surface in pixels, which is double the number of TTY rows because 2
    /// "pixels" fit in a single cell with the half block trick: ▀▄
    #[must_use]
    pub const fn pixel_height(&self) -> usize {
        self.height * 2
    }

    /// Is the given pixel coordinate on the surface at all?
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let is_x_on = x >= 0 && x < self.width.try_into().unwrap_or(i64::MAX);
        let is_y_on = y >= 0 && y < self.pixel_height().try_into().unwrap_or(i64::MAX);
        is_x_on && is_y_on
    }

    /// Add a pixel ("▀", "▄") to an effect surface.
    ///
    /// The rule is that we default to rendering any pair of colours using the upper half block.
    /// Therefore the upper "pixel" is rendered with the cell's foreground and the lower "pixel"
    /// is rendered with the cell's background colour.
    ///
    /// However, there is one edge case that requires this to be inverted: when an empty cell
    /// needs a pixel in the lower half. It is impossible to do this with an upper half block
    /// *whilst retaining the ANSI-coded default background colour*.
    pub fn add_pixel(&mut self, x: usize, y: usize, colour: Colour) -> Result<()> {
        let (col, row) = self.coords_to_tty(x, y)?;
        self.surface.add_change(TermwizChange::CursorPosition {
            x: TermwizPosition::Absolute(col),
            y: TermwizPosition::Absolute(row),
        });

        let cell = self.get_cell_at(col, row)?;
        let is_empty_upper = cell.str() != "▀";
        let is_upper_half = y.rem_euclid(2) == 0;
        let is_lower_half = !is_upper_half;
        let is_adding_to_bottom_of_empty_upper = is_empty_upper && is_lower_half;

        let mut fg_colour = if is_upper_half {
            Self::make_fg_colour(colour)
        } else {
            TermwizChange::Attribute(termwiz::cell::AttributeChange::Foreground(
                cell.attrs().foreground(),
            ))
        };

        #[expect(
            clippy::useless_let_if_seq,
            reason = "I think the verbosity is useful here"
        )]
        let mut bg_colour = if is_upper_half {
            TermwizChange::Attribute(termwiz::cell::AttributeChange::Background(
                cell.attrs().background(),
            ))
        } else {
            Self::make_bg_colour(colour)
        };

        if is_adding_to_bottom_of_empty_upper {
            fg_colour = Self::make_fg_colour(colour);
            bg_colour = TermwizChange::Attribute(termwiz::cell::AttributeChange::Background(
                cell.attrs().background(),
            ));
        }

        // This is when we add a pixel to a cell that only has a lower-half colour.
        let is_converting_lower_to_full = is_upper_half && cell.str() == "▄";
        if is_converting_lower_to_full {
            fg_colour = Self::make_fg_colour(colour);
            bg_colour = TermwizChange::Attribute(termwiz::cell::AttributeChange::Background(
                cell.attrs().foreground(),
            ));
        }

        self.surface.add_changes(vec![fg_colour, bg_colour]);
        if is_adding_to_bottom_of_empty_upper {
            self.surface.add_change("▄");
        } else {
            self.surface.add_change("▀");
        }

        Ok(())
    }

    /// Plot a straight line of pixels between 2 points.
    ///
    /// Unlike [`Self::add_pixel`] this clips rather than errors, because callers like the lasso
    /// rope legitimately have points that wander off the edges of the terminal.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::as_conversions,
        reason = "The coordinates are bounds-checked before casting"
    )]
    pub fn add_line(&mut self, start: (i64, i64), end: (i64, i64), colour: Colour) -> Result<()> {
        let (mut x, mut y) = start;
        let delta_x = (end.0 - x).abs();
        let step_x: i64 = if x < end.0 { 1 } else { -1 };
        let delta_y = -(end.1 - y).abs();
        let step_y: i64 = if y < end.1 { 1 } else { -1 };
        let mut error = delta_x + delta_y;

        loop {
            if self.contains(x, y) {
                self.add_pixel(x as usize, y as usize, colour)?;
            }
            if x == end.0 && y == end.1 {
                break;
            }
            let doubled = 2 * error;
            if doubled >= delta_y {
                error += delta_y;
                x += step_x;
            }
            if doubled <= delta_x {
                error += delta_x;
                y += step_y;
            }
        }

        Ok(())
    }

    /// Make a Termwiz colour attribute
    #[must_use]
    pub const fn make_colour_attribute(colour: Colour) -> termwiz::color::ColorAttribute {
        termwiz::color::ColorAttribute::TrueColorWithDefaultFallback(termwiz::color::SrgbaTuple(
            colour.0, colour.1, colour.2, colour.3,
        ))
    }

    /// Make a Termwiz background colour
    #[must_use]
    pub const fn make_bg_colour(colour: Colour) -> TermwizChange {
        let colour_attribute = Self::make_colour_attribute(colour);
        TermwizChange::Attribute(termwiz::cell::AttributeChange::Background(colour_attribute))
    }

    /// Make a Termwiz foreground colour
    #[must_use]
    pub const fn make_fg_colour(colour: Colour) -> TermwizChange {
        let colour_attribute = Self::make_colour_attribute(colour);
        TermwizChange::Attribute(termwiz::cell::AttributeChange::Foreground(colour_attribute))
    }

    /// Safely convert pixel coordinates to TTY col/row
    fn coords_to_tty(&self, x: usize, y: usize) -> Result<(usize, usize)> {
        let col = x;
        let row = y.div_euclid(2);
        if col >= self.width {
            bail!("Tried to add pixel to column: {col}")
        }
        if row >= self.height {
            bail!("Tried to add pixel to row: {row}")
        }
        Ok((col, row))
    }

    /// Get the cell at the given column and row.
    fn get_cell_at(&mut self, col: usize, row: usize) -> Result<termwiz::cell::Cell> {
        let cells = self.surface.screen_cells();
        let cell = cells
            .get(row)
            .context("No cell row")?
            .get(col)
            .context("No cell column")?;
        // TODO: avoid this clone!
        Ok(cell.clone())
    }
}

#[cfg(test)]
#[expect(
    clippy::indexing_slicing,
    clippy::shadow_unrelated,
    reason = "Tests aren't so strict"
)]
mod test {
    use super::*;

    const WHITE: Colour = (1.0, 1.0, 1.0, 1.0);
    const RED: Colour = (1.0, 0.0, 0.0, 1.0);

    #[test]
    fn add_new_pixels() {
        let mut surface = Surface::new("test".into(), 2, 2, 1);

        let cell = &surface.surface.screen_cells()[0][0];
        assert_eq!(cell.str(), " ");
        assert_eq!(
            cell.attrs().foreground(),
            termwiz::color::ColorAttribute::Default
        );

        surface.add_pixel(0, 0, WHITE).unwrap();
        let cell = &surface.surface.screen_cells()[0][0];

        assert_eq!(cell.str(), "▀");
        assert_eq!(
            cell.attrs().foreground(),
            Surface::make_colour_attribute(WHITE)
        );
        assert_eq!(
            cell.attrs().background(),
            termwiz::color::ColorAttribute::Default
        );

        surface.add_pixel(1, 3, WHITE).unwrap();
        let cell = &surface.surface.screen_cells()[1][1];
        assert_eq!(cell.str(), "▄");

        let result = surface.add_pixel(1, 4, WHITE).unwrap_err();
        assert_eq!(
            format!("{}", result.root_cause()),
            "Tried to add pixel to row: 2"
        );
    }

    #[test]
    fn add_pixel_at_bottom_of_empty_cell() {
        let mut surface = Surface::new("test".into(), 1, 1, 1);

        surface.add_pixel(0, 1, WHITE).unwrap();
        let cell = &surface.surface.screen_cells()[0][0];
        assert_eq!(cell.str(), "▄");
        assert_eq!(
            cell.attrs().foreground(),
            Surface::make_colour_attribute(WHITE)
        );
        assert_eq!(
            cell.attrs().background(),
            termwiz::color::ColorAttribute::Default
        );
    }

    #[test]
    fn convert_cell_from_bottom_to_full() {
        let mut surface = Surface::new("test".into(), 1, 1, 1);

        surface.add_pixel(0, 1, WHITE).unwrap();
        surface.add_pixel(0, 0, RED).unwrap();
        let cell = &surface.surface.screen_cells()[0][0];
        assert_eq!(cell.str(), "▀");
        assert_eq!(
            cell.attrs().foreground(),
            Surface::make_colour_attribute(RED)
        );
        assert_eq!(
            cell.attrs().background(),
            Surface::make_colour_attribute(WHITE)
        );
    }

    #[test]
    fn horizontal_line() {
        let mut surface = Surface::new("test".into(), 4, 1, 1);

        surface.add_line((0, 0), (3, 0), WHITE).unwrap();
        for col in 0..4 {
            let cell = &surface.surface.screen_cells()[0][col];
            assert_eq!(cell.str(), "▀");
        }
    }

    #[test]
    fn diagonal_line() {
        let mut surface = Surface::new("test".into(), 2, 1, 1);

        surface.add_line((0, 0), (1, 1), WHITE).unwrap();
        let cells = surface.surface.screen_cells();
        assert_eq!(cells[0][0].str(), "▀");
        assert_eq!(cells[0][1].str(), "▄");
    }

    #[test]
    fn line_clips_at_the_edges() {
        let mut surface = Surface::new("test".into(), 2, 1, 1);

        surface.add_line((-2, 0), (4, 0), WHITE).unwrap();
        let cells = surface.surface.screen_cells();
        assert_eq!(cells[0][0].str(), "▀");
        assert_eq!(cells[0][1].str(), "▀");
    }
}
