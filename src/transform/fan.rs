//! Fan ring layout
//!
//! Fans chained on a channel are wired in the opposite direction to a plain
//! strip. Reversing each ring lets effects treat the channel as one strip.

use crate::color::Rgb;

/// Number of LEDs in a single fan ring
pub const FAN_LED_COUNT: usize = 16;

/// Reverse every full fan ring within the first `count` LEDs
///
/// LEDs past the last full ring are left untouched.
pub fn reverse_fans(leds: &mut [Rgb], count: usize) {
    for ring in leds[..count].chunks_exact_mut(FAN_LED_COUNT) {
        ring.reverse();
    }
}
