#![no_std]

pub mod color;
pub mod controller;
pub mod math8;
pub mod pipeline;
pub mod strip;
pub mod transform;

pub use controller::{ChannelConfig, ChannelMode, LedController, StripController};
pub use pipeline::{Transform, TransformStack};
pub use strip::{
    gamma_correction, repeat, reverse, scale, scale_segments, transform_fan_to_strip,
};
pub use transform::SegmentScaling;

pub use color::Rgb;
pub use math8::{DIM8_VIDEO, dim8_video};
