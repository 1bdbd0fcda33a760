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

use argb_nv12::{
    rgba_to_nv12_locked, Nv12Error, ReleaseMode, SurfaceFormat, SurfaceInfo, SurfaceLock,
};
use libfuzzer_sys::fuzz_target;

struct FlakySurface {
    data: Vec<u8>,
    info: Option<SurfaceInfo>,
    fail_lock: bool,
    locks: usize,
    unlocks: usize,
}

impl SurfaceLock for FlakySurface {
    type Element = u8;

    fn declared_len(&self) -> usize {
        self.data.len()
    }

    fn surface_info(&self) -> Option<SurfaceInfo> {
        self.info
    }

    fn lock(&mut self) -> Result<(), Nv12Error> {
        if self.fail_lock {
            return Err(Nv12Error::ResourceAcquisition("busy".to_string()));
        }
        self.locks += 1;
        Ok(())
    }

    fn unlock(&mut self, _: ReleaseMode) {
        self.unlocks += 1;
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fuzz_target!(|data: (u8, u8, u8, bool, bool)| {
    let width = data.0 as u32 & !1;
    let height = data.1 as u32 & !1;
    let stride = width * 4 + data.2 as u32;
    let mut nv12 = FlakySurface {
        data: vec![0u8; width as usize * height as usize * 3 / 2],
        info: None,
        fail_lock: data.3,
        locks: 0,
        unlocks: 0,
    };
    let mut rgba = FlakySurface {
        data: vec![128u8; stride as usize * height as usize],
        info: Some(SurfaceInfo {
            width,
            height,
            stride,
            format: SurfaceFormat::Rgba8888,
        }),
        fail_lock: data.4,
        locks: 0,
        unlocks: 0,
    };

    let result = rgba_to_nv12_locked(&mut nv12, &mut rgba, width, height);
    assert_eq!(nv12.locks, nv12.unlocks);
    assert_eq!(rgba.locks, rgba.unlocks);
    if width == 0 || height == 0 {
        assert!(result.is_err());
        assert_eq!(nv12.locks + rgba.locks, 0);
        return;
    }
    match (data.3, data.4) {
        (false, false) => result.unwrap(),
        (true, _) => {
            assert!(result.is_err());
            assert_eq!(rgba.locks, 0);
        }
        (false, true) => {
            assert!(result.is_err());
            assert_eq!(nv12.unlocks, 1);
        }
    }
});
