//! Nearest-neighbor rescaling of LED runs
//!
//! A target LED copies the source LED nearest to its proportional position,
//! with no blending between neighbors. Everything happens in place, in two
//! passes:
//! - forward, for LEDs sampled from ahead of their target (shrinking runs);
//! - backward, segments last-to-first and LEDs high-to-low, for LEDs
//!   sampled from behind their target (growing runs).
//!
//! The sample map never decreases along the buffer, so neither pass reads
//! a slot the other one has already changed.

use crate::color::{BLACK, Rgb};

/// Scaling of one contiguous run of LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentScaling {
    /// Number of LEDs in the segment before scaling
    pub segment_length: u16,
    /// Number of LEDs the segment occupies after scaling
    pub scale_to_size: u16,
}

impl SegmentScaling {
    pub const fn new(segment_length: u16, scale_to_size: u16) -> Self {
        Self {
            segment_length,
            scale_to_size,
        }
    }

    fn run(self) -> (usize, usize) {
        (
            usize::from(self.segment_length),
            usize::from(self.scale_to_size),
        )
    }
}

/// Number of LEDs the segments cover before scaling
pub fn source_len(segments: &[SegmentScaling]) -> usize {
    segments.iter().map(|s| usize::from(s.segment_length)).sum()
}

/// Number of LEDs the segments cover after scaling
pub fn scaled_len(segments: &[SegmentScaling]) -> usize {
    segments.iter().map(|s| usize::from(s.scale_to_size)).sum()
}

/// Resample the first `count` LEDs to `scale_to_size` LEDs
pub fn scale(leds: &mut [Rgb], count: usize, scale_to_size: usize) {
    resample(leds, core::iter::once((count, scale_to_size)));
}

/// Resample consecutive segments, each with its own scale
///
/// Segment `n` starts right after segment `n - 1`, both before and after
/// scaling.
pub fn scale_segments(leds: &mut [Rgb], segments: &[SegmentScaling]) {
    resample(leds, segments.iter().map(|segment| segment.run()));
}

/// Maps target offsets to source offsets within one run
#[derive(Debug, Clone, Copy)]
struct Sampler {
    factor: f32,
    last: usize,
}

impl Sampler {
    /// Returns `None` when the run has no source LEDs
    #[allow(clippy::cast_precision_loss)]
    fn new(source_len: usize, target_len: usize) -> Option<Self> {
        if source_len == 0 || target_len == 0 {
            return None;
        }
        Some(Self {
            factor: source_len as f32 / target_len as f32,
            last: source_len - 1,
        })
    }

    /// Source offset sampled by the target at `index`
    ///
    /// Rounds half away from zero. The last target of a growing run can
    /// round one past the end, so the result is clamped to the run.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn offset(self, index: usize) -> usize {
        let nearest = libm::roundf(index as f32 * self.factor) as usize;
        nearest.min(self.last)
    }
}

/// Resample `(source_len, target_len)` runs laid out back to back
fn resample<I>(leds: &mut [Rgb], runs: I)
where
    I: DoubleEndedIterator<Item = (usize, usize)> + Clone,
{
    let (source_total, target_total) = runs
        .clone()
        .fold((0, 0), |(source, target), (len, size)| {
            (source + len, target + size)
        });
    assert!(
        source_total <= leds.len(),
        "scaling reads {} LEDs, buffer holds {}",
        source_total,
        leds.len()
    );
    assert!(
        target_total <= leds.len(),
        "scaling writes {} LEDs, buffer holds {}",
        target_total,
        leds.len()
    );

    let mut source_base = 0;
    let mut target_base = 0;
    for (len, size) in runs.clone() {
        if let Some(sampler) = Sampler::new(len, size) {
            for index in 0..size {
                let source = source_base + sampler.offset(index);
                let target = target_base + index;
                if source > target {
                    leds[target] = leds[source];
                }
            }
        }
        source_base += len;
        target_base += size;
    }

    for (len, size) in runs.clone().rev() {
        source_base -= len;
        target_base -= size;
        if let Some(sampler) = Sampler::new(len, size) {
            for index in (0..size).rev() {
                let source = source_base + sampler.offset(index);
                let target = target_base + index;
                if source < target {
                    leds[target] = leds[source];
                }
            }
        }
    }

    // Runs without source LEDs go dark once every sample has been read
    for (len, size) in runs {
        if len == 0 {
            leds[target_base..target_base + size].fill(BLACK);
        }
        target_base += size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_rounds_half_away_from_zero() {
        let sampler = Sampler::new(6, 12).unwrap();
        let offsets: [usize; 6] = core::array::from_fn(|i| sampler.offset(i));
        assert_eq!(offsets, [0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_sampler_clamps_last_target() {
        let sampler = Sampler::new(4, 8).unwrap();
        assert_eq!(sampler.offset(7), 3);
    }

    #[test]
    fn test_sampler_rejects_empty_runs() {
        assert!(Sampler::new(0, 4).is_none());
        assert!(Sampler::new(4, 0).is_none());
    }
}
