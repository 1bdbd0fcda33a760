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
use num_traits::AsPrimitive;

/// Describes how one pixel is laid out inside a source row.
pub(crate) trait PixelLayout {
    type Element: Copy + AsPrimitive<i32>;
    /// Number of `Element`s making up one pixel.
    const ELEMENTS_PER_PIXEL: usize;

    /// Extracts `[r, g, b]` from exactly `ELEMENTS_PER_PIXEL` elements.
    fn rgb(pixel: &[Self::Element]) -> [Self::Element; 3];
}

/// `0xAARRGGBB` words, one per pixel.
pub(crate) struct PackedArgb;

impl PixelLayout for PackedArgb {
    type Element = u32;
    const ELEMENTS_PER_PIXEL: usize = 1;

    #[inline(always)]
    fn rgb(pixel: &[u32]) -> [u32; 3] {
        let argb = pixel[0];
        [(argb >> 16) & 0xff, (argb >> 8) & 0xff, argb & 0xff]
    }
}

/// `R, G, B, A` bytes, one quadruple per pixel.
pub(crate) struct StridedRgba;

impl PixelLayout for StridedRgba {
    type Element = u8;
    const ELEMENTS_PER_PIXEL: usize = 4;

    #[inline(always)]
    fn rgb(pixel: &[u8]) -> [u8; 3] {
        [pixel[0], pixel[1], pixel[2]]
    }
}

/// Source pixels for [`convert`](crate::convert), tagged by memory layout.
#[derive(Debug, Copy, Clone)]
pub enum PixelSource<'a> {
    /// Row-major `0xAARRGGBB` words, row stride equals the frame width.
    Packed(&'a [u32]),
    /// `R, G, B, A` bytes with `stride` bytes between row starts.
    Strided { data: &'a [u8], stride: u32 },
}
