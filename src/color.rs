use smart_leds::RGB8;

/// Single LED color
pub type Rgb = RGB8;

/// Color written to LEDs that have nothing to show
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
