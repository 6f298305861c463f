use crate::color::Rgb;
use crate::math8::DIM8_VIDEO;

/// Apply the video dimming curve to every channel of the first `count` LEDs
pub fn gamma_correction(leds: &mut [Rgb], count: usize) {
    for led in &mut leds[..count] {
        led.r = DIM8_VIDEO[usize::from(led.r)];
        led.g = DIM8_VIDEO[usize::from(led.g)];
        led.b = DIM8_VIDEO[usize::from(led.b)];
    }
}
