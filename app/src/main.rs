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
mod support;

use argb_nv12::{
    argb_to_nv12, rgba_to_nv12_locked, Nv12Frame, PixelSource, SliceSurface, SurfaceFormat,
    SurfaceInfo,
};
use image::{GenericImageView, ImageReader};
use std::time::Instant;
use support::{rgba_to_argb_words, save_nv12};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "app=info,argb_nv12=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "./assets/bench.jpg".to_string());
    let output = args.next().unwrap_or_else(|| "./out.nv12".to_string());

    let img = ImageReader::open(&input).unwrap().decode().unwrap();
    let (src_width, src_height) = img.dimensions();
    let rgba = img.to_rgba8();
    let rgba_stride = src_width * 4;

    // NV12 needs even dimensions, the odd tail row/column is dropped.
    let width = src_width & !1;
    let height = src_height & !1;
    info!(%input, src_width, src_height, width, height, "decoded source image");

    let argb = rgba_to_argb_words(rgba.as_raw())
        .chunks_exact(src_width as usize)
        .take(height as usize)
        .flat_map(|row| row[..width as usize].iter().copied())
        .collect::<Vec<u32>>();

    let mut packed_frame = Nv12Frame::alloc(width, height).unwrap();
    let start_time = Instant::now();
    argb_to_nv12(packed_frame.as_bytes_mut(), &argb, width, height).unwrap();
    info!(elapsed = ?start_time.elapsed(), "ARGB -> NV12");

    let mut rgba_bytes = rgba.into_raw();
    let mut bitmap = SliceSurface::with_info(
        &mut rgba_bytes,
        SurfaceInfo {
            width,
            height,
            stride: rgba_stride,
            format: SurfaceFormat::Rgba8888,
        },
    );
    let mut locked_frame = Nv12Frame::alloc(width, height).unwrap();
    let mut nv12_surface = SliceSurface::new(locked_frame.as_bytes_mut());
    let start_time = Instant::now();
    rgba_to_nv12_locked(&mut nv12_surface, &mut bitmap, width, height).unwrap();
    info!(elapsed = ?start_time.elapsed(), "locked RGBA -> NV12");
    drop(nv12_surface);

    assert_eq!(
        packed_frame.as_bytes(),
        locked_frame.as_bytes(),
        "packed and strided sources disagree"
    );

    let mut reused = Nv12Frame::alloc_aligned(width, height).unwrap();
    info!(
        aligned_width = reused.width,
        aligned_height = reused.height,
        "encoder aligned frame"
    );
    if reused.width == width && reused.height == height {
        reused.fill_from(PixelSource::Packed(&argb)).unwrap();
        assert_eq!(reused.as_bytes(), packed_frame.as_bytes());
    }

    save_nv12(&output, packed_frame.as_bytes()).unwrap();
    info!(%output, bytes = packed_frame.as_bytes().len(), "wrote NV12 frame");
}
