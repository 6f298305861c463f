/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Unlike a plain `scale8`, a non-zero value scaled by a non-zero factor
/// never drops to zero, so dim pixels stay lit.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Perceptual dimming curve, the value scaled by itself
#[inline]
pub const fn dim8_video(value: u8) -> u8 {
    scale8_video(value, value)
}

/// Lookup table for [`dim8_video`]
#[allow(clippy::cast_possible_truncation)]
pub const DIM8_VIDEO: [u8; 256] = {
    let mut lut = [0u8; 256];
    let mut i = 0;
    while i < lut.len() {
        lut[i] = dim8_video(i as u8);
        i += 1;
    }
    lut
};
