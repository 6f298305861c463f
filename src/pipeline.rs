//! Per-channel transform chains
//!
//! Firmware usually runs the same post-processing on a channel every frame
//! (unwrap fans, stretch to the physical strip, gamma). A [`TransformStack`]
//! holds that chain without allocating.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::controller::LedController;
use crate::strip;
use crate::transform::SegmentScaling;

/// A single channel transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform<'a> {
    /// Reverse every fan ring of a software playback channel
    FanToStrip,
    /// Resample to the given number of LEDs
    Scale(usize),
    /// Repeat the LEDs the given number of times
    Repeat(u8),
    /// Resample each segment to its own size
    ScaleSegments(&'a [SegmentScaling]),
    /// Reverse the LED order
    Reverse,
    /// Apply the video dimming curve
    GammaCorrection,
}

impl Transform<'_> {
    /// Run the transform on a channel
    pub fn apply<C: LedController + ?Sized>(self, controller: &mut C, channel: u8) {
        match self {
            Self::FanToStrip => strip::transform_fan_to_strip(controller, channel),
            Self::Scale(size) => strip::scale(controller, channel, size),
            Self::Repeat(times) => strip::repeat(controller, channel, times),
            Self::ScaleSegments(segments) => strip::scale_segments(controller, channel, segments),
            Self::Reverse => strip::reverse(controller, channel),
            Self::GammaCorrection => strip::gamma_correction(controller, channel),
        }
    }
}

/// Ordered chain of transforms
///
/// N is the number of transforms the chain can hold
#[derive(Debug, Clone, Default)]
pub struct TransformStack<'a, const N: usize> {
    inner: Vec<Transform<'a>, N>,
}

impl<'a, const N: usize> TransformStack<'a, N> {
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Append a transform to the end of the chain
    ///
    /// Returns the transform if the chain is full
    pub fn push(&mut self, transform: Transform<'a>) -> Result<(), Transform<'a>> {
        if let Err(rejected) = self.inner.push(transform) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[TransformStack.push] chain is full ({} transforms), dropping {:?}",
                N, rejected
            );
            return Err(rejected);
        }
        Ok(())
    }

    /// Build a chain from transforms
    ///
    /// Returns the first transform that did not fit
    pub fn from_transforms(transforms: &[Transform<'a>]) -> Result<Self, Transform<'a>> {
        let mut stack = Self::new();
        for transform in transforms {
            stack.push(*transform)?;
        }
        Ok(stack)
    }

    /// Run every transform on a channel, in order
    pub fn apply<C: LedController + ?Sized>(&self, controller: &mut C, channel: u8) {
        for transform in &self.inner {
            transform.apply(controller, channel);
        }
    }

    pub fn transforms(&self) -> &[Transform<'a>] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
