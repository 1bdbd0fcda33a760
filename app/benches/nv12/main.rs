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
use argb_nv12::{argb_to_nv12, rgba_to_nv12, Nv12Frame};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuv_sys::rs_ARGBToNV12;

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

fn noise_argb(width: u32, height: u32) -> Vec<u32> {
    let mut rng = rand::rng();
    (0..width as usize * height as usize)
        .map(|_| 0xFF00_0000 | (rng.random::<u32>() & 0x00FF_FFFF))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let argb = noise_argb(WIDTH, HEIGHT);
    let rgba = argb
        .iter()
        .flat_map(|&px| {
            let [a, r, g, b] = px.to_be_bytes();
            [r, g, b, a]
        })
        .collect::<Vec<u8>>();
    let padded_stride = WIDTH * 4 + 64;
    let mut padded_rgba = vec![0u8; padded_stride as usize * HEIGHT as usize];
    for (dst, src) in padded_rgba
        .chunks_exact_mut(padded_stride as usize)
        .zip(rgba.chunks_exact(WIDTH as usize * 4))
    {
        dst[..src.len()].copy_from_slice(src);
    }

    c.bench_function("argb-nv12 ARGB -> NV12", |b| {
        let mut frame = Nv12Frame::alloc(WIDTH, HEIGHT).unwrap();
        b.iter(|| {
            argb_to_nv12(frame.as_bytes_mut(), &argb, WIDTH, HEIGHT).unwrap();
        })
    });

    c.bench_function("argb-nv12 RGBA -> NV12", |b| {
        let mut frame = Nv12Frame::alloc(WIDTH, HEIGHT).unwrap();
        b.iter(|| {
            rgba_to_nv12(frame.as_bytes_mut(), &rgba, WIDTH * 4, WIDTH, HEIGHT).unwrap();
        })
    });

    c.bench_function("argb-nv12 RGBA padded stride -> NV12", |b| {
        let mut frame = Nv12Frame::alloc(WIDTH, HEIGHT).unwrap();
        b.iter(|| {
            rgba_to_nv12(
                frame.as_bytes_mut(),
                &padded_rgba,
                padded_stride,
                WIDTH,
                HEIGHT,
            )
            .unwrap();
        })
    });

    c.bench_function("libyuv ARGB -> NV12", |b| unsafe {
        let argb_bytes: &[u8] = bytemuck::cast_slice(&argb);
        let mut frame = Nv12Frame::alloc(WIDTH, HEIGHT).unwrap();
        let frame_size = frame.frame_size();
        b.iter(|| {
            let (y_plane, uv_plane) = frame.as_bytes_mut().split_at_mut(frame_size);
            rs_ARGBToNV12(
                argb_bytes.as_ptr(),
                WIDTH as i32 * 4i32,
                y_plane.as_mut_ptr(),
                WIDTH as i32,
                uv_plane.as_mut_ptr(),
                WIDTH as i32,
                WIDTH as i32,
                HEIGHT as i32,
            );
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
