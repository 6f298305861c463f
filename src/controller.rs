//! Controller contract
//!
//! The strip transforms never own LED memory. They borrow a channel's buffer
//! from a [`LedController`], which also reports how many LEDs are in use and
//! how the channel is configured.

use crate::color::{BLACK, Rgb};

const CHANNEL_MODE_DISABLED: u8 = 0x00;
const CHANNEL_MODE_HARDWARE_PLAYBACK: u8 = 0x01;
const CHANNEL_MODE_SOFTWARE_PLAYBACK: u8 = 0x02;

/// How a channel produces its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ChannelMode {
    /// Channel is not driven
    #[default]
    Disabled = CHANNEL_MODE_DISABLED,
    /// Colors come from effects running on the controller
    HardwarePlayback = CHANNEL_MODE_HARDWARE_PLAYBACK,
    /// Colors are streamed in by the host
    SoftwarePlayback = CHANNEL_MODE_SOFTWARE_PLAYBACK,
}

impl ChannelMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            CHANNEL_MODE_DISABLED => Self::Disabled,
            CHANNEL_MODE_HARDWARE_PLAYBACK => Self::HardwarePlayback,
            CHANNEL_MODE_SOFTWARE_PLAYBACK => Self::SoftwarePlayback,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}

/// Per-channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelConfig {
    pub mode: ChannelMode,
}

/// Owner of the LED buffers the strip transforms work on
///
/// Passing an invalid channel index is a caller bug; implementations are
/// free to panic.
pub trait LedController {
    /// Full-capacity LED buffer of a channel
    fn leds_mut(&mut self, channel: u8) -> &mut [Rgb];

    /// Number of LEDs currently in use on a channel
    fn led_count(&self, channel: u8) -> usize;

    /// Configuration of a channel
    fn channel(&self, channel: u8) -> ChannelConfig;
}

#[derive(Debug, Clone, Copy)]
struct ChannelState<const MAX_LEDS: usize> {
    config: ChannelConfig,
    count: usize,
    leds: [Rgb; MAX_LEDS],
}

impl<const MAX_LEDS: usize> ChannelState<MAX_LEDS> {
    const EMPTY: Self = Self {
        config: ChannelConfig {
            mode: ChannelMode::Disabled,
        },
        count: 0,
        leds: [BLACK; MAX_LEDS],
    };
}

/// In-memory controller with a fixed-size buffer per channel
///
/// `CHANNELS` is the number of channels, `MAX_LEDS` the capacity of each
/// channel's buffer.
#[derive(Debug, Clone)]
pub struct StripController<const CHANNELS: usize, const MAX_LEDS: usize> {
    channels: [ChannelState<MAX_LEDS>; CHANNELS],
}

impl<const CHANNELS: usize, const MAX_LEDS: usize> StripController<CHANNELS, MAX_LEDS> {
    /// Create a controller with every channel disabled and empty
    pub const fn new() -> Self {
        Self {
            channels: [ChannelState::EMPTY; CHANNELS],
        }
    }

    /// Capacity of each channel's buffer
    pub const fn capacity(&self) -> usize {
        MAX_LEDS
    }

    /// Set the playback mode of a channel
    pub fn set_mode(&mut self, channel: u8, mode: ChannelMode) {
        self.state_mut(channel).config.mode = mode;
    }

    /// Set the number of LEDs in use on a channel
    pub fn set_led_count(&mut self, channel: u8, count: usize) {
        assert!(
            count <= MAX_LEDS,
            "channel {} holds at most {} LEDs, got {}",
            channel,
            MAX_LEDS,
            count
        );
        self.state_mut(channel).count = count;
    }

    /// LEDs of a channel, up to its current count
    pub fn leds(&self, channel: u8) -> &[Rgb] {
        let state = self.state(channel);
        &state.leds[..state.count]
    }

    /// Whole buffer of a channel, including LEDs past its current count
    pub fn buffer(&self, channel: u8) -> &[Rgb] {
        &self.state(channel).leds
    }

    fn state(&self, channel: u8) -> &ChannelState<MAX_LEDS> {
        &self.channels[usize::from(channel)]
    }

    fn state_mut(&mut self, channel: u8) -> &mut ChannelState<MAX_LEDS> {
        &mut self.channels[usize::from(channel)]
    }
}

impl<const CHANNELS: usize, const MAX_LEDS: usize> Default for StripController<CHANNELS, MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CHANNELS: usize, const MAX_LEDS: usize> LedController
    for StripController<CHANNELS, MAX_LEDS>
{
    fn leds_mut(&mut self, channel: u8) -> &mut [Rgb] {
        &mut self.state_mut(channel).leds
    }

    fn led_count(&self, channel: u8) -> usize {
        self.state(channel).count
    }

    fn channel(&self, channel: u8) -> ChannelConfig {
        self.state(channel).config
    }
}
