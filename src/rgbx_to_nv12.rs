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
use crate::bt601::{chroma, luma};
use crate::built_coefficients::FORWARD_BT601_LIMITED_8_8PREC;
use crate::layout::{PackedArgb, PixelLayout, PixelSource, StridedRgba};
use crate::nv12_error::{check_nv12_destination, check_packed_source, check_strided_source};
use crate::Nv12Error;
use num_traits::AsPrimitive;
use tracing::{debug, trace};

#[inline(always)]
fn read_rgb<L: PixelLayout>(pixel: &[L::Element]) -> (i32, i32, i32) {
    let [r, g, b] = L::rgb(pixel);
    (r.as_(), g.as_(), b.as_())
}

/// Walks the frame in 2x2 blocks, writes four luma samples per block and one
/// chroma pair taken from the block's top-left pixel.
///
/// Buffers must already be validated: `nv12` holds at least `width * height * 3 / 2`
/// bytes and `src` holds `height` rows of `src_stride` elements.
fn rgbx_to_nv12<L: PixelLayout>(
    nv12: &mut [u8],
    src: &[L::Element],
    src_stride: usize,
    width: usize,
    height: usize,
) {
    let transform = &FORWARD_BT601_LIMITED_8_8PREC;
    let channels = L::ELEMENTS_PER_PIXEL;
    let row_len = width * channels;
    let frame_size = width * height;

    let (y_plane, uv_plane) = nv12.split_at_mut(frame_size);
    let uv_plane = &mut uv_plane[..frame_size / 2];

    for (block_row, (y_dst, uv_dst)) in y_plane
        .chunks_exact_mut(width * 2)
        .zip(uv_plane.chunks_exact_mut(width))
        .enumerate()
    {
        let (y_dst0, y_dst1) = y_dst.split_at_mut(width);
        let src0 = &src[block_row * 2 * src_stride..][..row_len];
        let src1 = &src[(block_row * 2 + 1) * src_stride..][..row_len];

        for ((((y_dst0, y_dst1), uv_dst), src0), src1) in y_dst0
            .chunks_exact_mut(2)
            .zip(y_dst1.chunks_exact_mut(2))
            .zip(uv_dst.chunks_exact_mut(2))
            .zip(src0.chunks_exact(channels * 2))
            .zip(src1.chunks_exact(channels * 2))
        {
            let (r00, g00, b00) = read_rgb::<L>(&src0[0..channels]);
            y_dst0[0] = luma(transform, r00, g00, b00);

            let (r01, g01, b01) = read_rgb::<L>(&src0[channels..channels * 2]);
            y_dst0[1] = luma(transform, r01, g01, b01);

            let (r10, g10, b10) = read_rgb::<L>(&src1[0..channels]);
            y_dst1[0] = luma(transform, r10, g10, b10);

            let (r11, g11, b11) = read_rgb::<L>(&src1[channels..channels * 2]);
            y_dst1[1] = luma(transform, r11, g11, b11);

            let (u, v) = chroma(transform, r00, g00, b00);
            uv_dst[0] = u;
            uv_dst[1] = v;
        }
    }
}

/// Convert packed ARGB pixels into an NV12 frame.
///
/// Each source word is `0xAARRGGBB`; alpha is ignored. The Y plane is written to
/// `nv12[..width * height]`, the interleaved UV plane (U first) to the following
/// `width * height / 2` bytes. Bytes beyond that are left untouched.
///
/// Chroma is sampled from the top-left pixel of every 2x2 block, no averaging.
///
/// # Arguments
///
/// * `nv12` - Destination, at least `width * height * 3 / 2` bytes.
/// * `argb` - Source pixels, at least `width * height` words, row stride equals `width`.
/// * `width` - Frame width, must be even and non-zero.
/// * `height` - Frame height, must be even and non-zero.
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) error
/// and leaves `nv12` untouched when the dimensions or either buffer length is invalid.
pub fn argb_to_nv12(
    nv12: &mut [u8],
    argb: &[u32],
    width: u32,
    height: u32,
) -> Result<(), Nv12Error> {
    if let Err(err) = check_nv12_destination(nv12.len(), width, height)
        .and_then(|_| check_packed_source(argb.len(), width, height))
    {
        debug!(%err, width, height, "rejected ARGB to NV12 conversion");
        return Err(err);
    }
    trace!(width, height, "converting packed ARGB frame to NV12");
    rgbx_to_nv12::<PackedArgb>(
        nv12,
        argb,
        width as usize,
        width as usize,
        height as usize,
    );
    Ok(())
}

/// Convert an RGBA8888 surface into an NV12 frame.
///
/// Each pixel occupies four bytes `R, G, B, A`; alpha is ignored. Rows start
/// `rgba_stride` bytes apart, padding after `width * 4` bytes is never read.
///
/// # Arguments
///
/// * `nv12` - Destination, at least `width * height * 3 / 2` bytes.
/// * `rgba` - Source surface, at least `rgba_stride * height` bytes.
/// * `rgba_stride` - Bytes per source row, at least `width * 4`.
/// * `width` - Frame width, must be even and non-zero.
/// * `height` - Frame height, must be even and non-zero.
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) error
/// and leaves `nv12` untouched when the dimensions, stride or either buffer length is invalid.
pub fn rgba_to_nv12(
    nv12: &mut [u8],
    rgba: &[u8],
    rgba_stride: u32,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error> {
    if let Err(err) = check_nv12_destination(nv12.len(), width, height)
        .and_then(|_| check_strided_source(rgba.len(), rgba_stride, width, height))
    {
        debug!(%err, width, height, rgba_stride, "rejected RGBA to NV12 conversion");
        return Err(err);
    }
    trace!(width, height, rgba_stride, "converting RGBA surface to NV12");
    rgbx_to_nv12::<StridedRgba>(
        nv12,
        rgba,
        rgba_stride as usize,
        width as usize,
        height as usize,
    );
    Ok(())
}

/// Convert any supported [`PixelSource`] into an NV12 frame.
///
/// Dispatches to [`argb_to_nv12`] or [`rgba_to_nv12`] according to the source layout.
pub fn convert(
    nv12: &mut [u8],
    source: PixelSource<'_>,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error> {
    match source {
        PixelSource::Packed(argb) => argb_to_nv12(nv12, argb, width, height),
        PixelSource::Strided { data, stride } => rgba_to_nv12(nv12, data, stride, width, height),
    }
}
