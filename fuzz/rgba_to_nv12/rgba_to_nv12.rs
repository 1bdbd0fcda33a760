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

#![no_main]

use argb_nv12::{argb_to_nv12, rgba_to_nv12};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8)| {
    fuzz_rgba(data.0, data.1, data.2, [data.3, data.4, data.5, data.6]);
});

fn fuzz_rgba(i_width: u8, i_height: u8, padding: u8, pixel: [u8; 4]) {
    let width = i_width as u32;
    let height = i_height as u32;
    let stride = width * 4 + padding as u32;
    let mut rgba = vec![0u8; stride as usize * height as usize];
    for row in rgba.chunks_exact_mut(stride.max(1) as usize) {
        for dst in row[..width as usize * 4].chunks_exact_mut(4) {
            dst.copy_from_slice(&pixel);
        }
    }
    let frame_size = width as usize * height as usize;
    let mut nv12 = vec![0u8; frame_size * 3 / 2];

    let result = rgba_to_nv12(&mut nv12, &rgba, stride, width, height);
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        assert!(result.is_err());
        return;
    }
    result.unwrap();

    let [r, g, b, a] = pixel;
    let argb = vec![u32::from_be_bytes([a, r, g, b]); frame_size];
    let mut reference = vec![0u8; frame_size * 3 / 2];
    argb_to_nv12(&mut reference, &argb, width, height).unwrap();
    assert_eq!(nv12, reference);

    assert!(rgba_to_nv12(&mut nv12, &rgba, width * 4 - 1, width, height).is_err());
}
