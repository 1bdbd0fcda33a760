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

use argb_nv12::argb_to_nv12;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u32, u8)| {
    fuzz_argb(data.0, data.1, data.2, data.3);
});

fn fuzz_argb(i_width: u8, i_height: u8, argb_value: u32, slack: u8) {
    let width = i_width as u32;
    let height = i_height as u32;
    let frame_size = width as usize * height as usize;
    let argb = vec![argb_value; frame_size];
    let mut nv12 = vec![0u8; frame_size * 3 / 2 + slack as usize];

    let result = argb_to_nv12(&mut nv12, &argb, width, height);
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        assert!(result.is_err());
        assert!(nv12.iter().all(|&v| v == 0));
        return;
    }
    result.unwrap();

    let (y_plane, uv_plane) = nv12.split_at(frame_size);
    assert!(y_plane.iter().all(|&y| (16..=235).contains(&y)));
    assert!(uv_plane[..frame_size / 2]
        .iter()
        .all(|&c| (16..=240).contains(&c)));
    assert!(uv_plane[frame_size / 2..].iter().all(|&v| v == 0));

    let mut short = vec![0u8; frame_size * 3 / 2 - 1];
    assert!(argb_to_nv12(&mut short, &argb, width, height).is_err());
    assert!(argb_to_nv12(&mut nv12, &argb[1..], width, height).is_err());
}
