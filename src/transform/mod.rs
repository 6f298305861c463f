//! Slice-level pixel transforms
//!
//! Every transform works in place on a full-capacity LED buffer and a
//! logical LED count. Transforms that grow the run (scaling up, repeating)
//! write past `count`, so the buffer must have room for the result.

mod fan;
mod gamma;
mod scale;

use crate::color::Rgb;

pub use fan::{FAN_LED_COUNT, reverse_fans};
pub use gamma::gamma_correction;
pub use scale::{SegmentScaling, scale, scale_segments, scaled_len, source_len};

/// Reverse the order of the first `count` LEDs
///
/// The center LED of an odd-length run keeps its place.
pub fn reverse(leds: &mut [Rgb], count: usize) {
    leds[..count].reverse();
}

/// Duplicate the first `count` LEDs so the pattern appears `times` times
///
/// The first copy is already in place, so `times <= 1` leaves the buffer
/// untouched.
pub fn repeat(leds: &mut [Rgb], count: usize, times: u8) {
    let times = usize::from(times);
    if times <= 1 {
        return;
    }

    let total = count * times;
    assert!(
        total <= leds.len(),
        "repeat needs {} LEDs, buffer holds {}",
        total,
        leds.len()
    );
    for block in 1..times {
        leds.copy_within(0..count, block * count);
    }
}
