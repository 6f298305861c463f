//! Channel-level transforms
//!
//! Each function borrows one channel's buffer from the controller and runs
//! the matching [`crate::transform`] routine over the channel's LED count.
//! Nothing is returned; the controller's buffer is changed in place.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::controller::{ChannelMode, LedController};
use crate::transform::{self, SegmentScaling};

/// Turn chained fan rings into one continuous strip
///
/// Only channels in [`ChannelMode::SoftwarePlayback`] are touched.
pub fn transform_fan_to_strip<C: LedController + ?Sized>(controller: &mut C, channel: u8) {
    let mode = controller.channel(channel).mode;
    if mode != ChannelMode::SoftwarePlayback {
        #[cfg(feature = "esp32-log")]
        println!(
            "[strip.transform_fan_to_strip] channel {} is in {:?}, skipping",
            channel, mode
        );
        return;
    }

    let count = controller.led_count(channel);
    transform::reverse_fans(controller.leds_mut(channel), count);
}

/// Resample a channel's LEDs to `scale_to_size` LEDs
pub fn scale<C: LedController + ?Sized>(controller: &mut C, channel: u8, scale_to_size: usize) {
    let count = controller.led_count(channel);
    transform::scale(controller.leds_mut(channel), count, scale_to_size);
}

/// Repeat a channel's LEDs `times` times back to back
pub fn repeat<C: LedController + ?Sized>(controller: &mut C, channel: u8, times: u8) {
    let count = controller.led_count(channel);
    transform::repeat(controller.leds_mut(channel), count, times);
}

/// Resample consecutive segments of a channel, each with its own scale
pub fn scale_segments<C: LedController + ?Sized>(
    controller: &mut C,
    channel: u8,
    segments: &[SegmentScaling],
) {
    let count = controller.led_count(channel);
    let source_len = transform::source_len(segments);
    assert!(
        source_len <= count,
        "segments cover {} LEDs, channel {} has {}",
        source_len,
        channel,
        count
    );

    #[cfg(feature = "esp32-log")]
    println!(
        "[strip.scale_segments] channel {}: {} segments, {} -> {} LEDs",
        channel,
        segments.len(),
        source_len,
        transform::scaled_len(segments)
    );

    transform::scale_segments(controller.leds_mut(channel), segments);
}

/// Reverse the LED order of a channel
pub fn reverse<C: LedController + ?Sized>(controller: &mut C, channel: u8) {
    let count = controller.led_count(channel);
    transform::reverse(controller.leds_mut(channel), count);
}

/// Apply the video dimming curve to every LED of a channel
pub fn gamma_correction<C: LedController + ?Sized>(controller: &mut C, channel: u8) {
    let count = controller.led_count(channel);
    transform::gamma_correction(controller.leds_mut(channel), count);
}
