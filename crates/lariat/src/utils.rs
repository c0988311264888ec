//! Generally useful shared code.

/// Reset the user's terminal to a fresh state.
pub const RESET_SCREEN: &str = "\x1bc";

/// Ask the terminal to report all mouse movement, SGR-encoded. 1002 covers drags, 1003 covers
/// plain motion, 1006 is the modern encoding that survives large coordinates.
pub const MOUSE_TRACKING_ON: &str = "\x1b[?1002h\x1b[?1003h\x1b[?1006h";

/// Stop the terminal reporting mouse movement.
pub const MOUSE_TRACKING_OFF: &str = "\x1b[?1006l\x1b[?1003l\x1b[?1002l";
