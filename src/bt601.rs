/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::built_coefficients::FORWARD_BT601_LIMITED_8_8PREC;
use crate::numerics::{clamp8, rshr_round};
use crate::yuv_support::{get_limited_range, CbCrForwardTransform, YuvChromaRange, PRECISION};

const RANGE: YuvChromaRange = get_limited_range(8);
const BIAS_Y: i32 = RANGE.bias_y as i32;
const BIAS_UV: i32 = RANGE.bias_uv as i32;

#[inline(always)]
pub(crate) fn luma(transform: &CbCrForwardTransform<i32>, r: i32, g: i32, b: i32) -> u8 {
    let y = rshr_round::<PRECISION>(r * transform.yr + g * transform.yg + b * transform.yb);
    clamp8(y + BIAS_Y)
}

#[inline(always)]
pub(crate) fn chroma(transform: &CbCrForwardTransform<i32>, r: i32, g: i32, b: i32) -> (u8, u8) {
    let cb = rshr_round::<PRECISION>(r * transform.cb_r + g * transform.cb_g + b * transform.cb_b);
    let cr = rshr_round::<PRECISION>(r * transform.cr_r + g * transform.cr_g + b * transform.cr_b);
    (clamp8(cb + BIAS_UV), clamp8(cr + BIAS_UV))
}

/// Converts a single RGB triple into its BT.601 limited range (Y, U, V) bytes.
///
/// This is the exact arithmetic the NV12 converters apply per pixel, exposed for
/// callers that need to predict output values.
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let transform = &FORWARD_BT601_LIMITED_8_8PREC;
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let y = luma(transform, r, g, b);
    let (u, v) = chroma(transform, r, g, b);
    (y, u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_black_and_white() {
        assert_eq!(rgb_to_yuv(0, 0, 0), (16, 128, 128));
        assert_eq!(rgb_to_yuv(255, 255, 255), (235, 128, 128));
    }

    #[test]
    fn test_primaries() {
        // (66 * 255 + 128) >> 8 = 66, (-38 * 255 + 128) >> 8 = -38, (112 * 255 + 128) >> 8 = 112
        assert_eq!(rgb_to_yuv(255, 0, 0), (82, 90, 240));
        assert_eq!(rgb_to_yuv(0, 255, 0), (144, 54, 34));
        assert_eq!(rgb_to_yuv(0, 0, 255), (41, 240, 110));
    }

    #[test]
    fn test_grey_has_neutral_chroma() {
        for level in 0..=255u8 {
            let (_, u, v) = rgb_to_yuv(level, level, level);
            assert_eq!((u, v), (128, 128), "grey level {}", level);
        }
    }

    #[test]
    fn test_outputs_stay_in_studio_range() {
        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let r: u8 = rng.random();
            let g: u8 = rng.random();
            let b: u8 = rng.random();
            let (y, u, v) = rgb_to_yuv(r, g, b);
            assert!((16..=235).contains(&y), "Y {} for {:?}", y, [r, g, b]);
            assert!((16..=240).contains(&u), "U {} for {:?}", u, [r, g, b]);
            assert!((16..=240).contains(&v), "V {} for {:?}", v, [r, g, b]);
        }
    }
}
