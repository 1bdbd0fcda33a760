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
//! Fixed-point BT.601 conversion of 32-bit colour buffers into NV12.
//!
//! Two source layouts are supported, packed `0xAARRGGBB` words and RGBA8888
//! surfaces with an arbitrary row stride. Both go through the same 2x2 block
//! loop: four luma samples per block, one `U, V` pair taken from the block's
//! top-left pixel.
//!
//! ```
//! use argb_nv12::{argb_to_nv12, Nv12Frame, PixelSource};
//!
//! let argb = vec![0xFFFF_0000u32; 4 * 2];
//! let mut nv12 = vec![0u8; 4 * 2 * 3 / 2];
//! argb_to_nv12(&mut nv12, &argb, 4, 2).unwrap();
//! assert_eq!(&nv12[..8], &[82; 8]);
//! assert_eq!(&nv12[8..], &[90, 240, 90, 240]);
//!
//! let mut frame = Nv12Frame::alloc(4, 2).unwrap();
//! frame.fill_from(PixelSource::Packed(&argb)).unwrap();
//! assert_eq!(frame.as_bytes(), nv12.as_slice());
//! ```
#![forbid(unsafe_code)]

mod batch;
mod bt601;
mod built_coefficients;
mod images;
mod layout;
mod numerics;
mod nv12_error;
mod rgbx_to_nv12;
mod surface;
mod yuv_support;

pub use nv12_error::{ErrorKind, MismatchedSize, Nv12Error};

pub use built_coefficients::FORWARD_BT601_LIMITED_8_8PREC;
pub use yuv_support::{get_limited_range, CbCrForwardTransform, YuvChromaRange, PRECISION};

pub use bt601::rgb_to_yuv;

pub use layout::PixelSource;

pub use rgbx_to_nv12::argb_to_nv12;
pub use rgbx_to_nv12::convert;
pub use rgbx_to_nv12::rgba_to_nv12;

pub use images::{align_to_16, BufferStoreMut, Nv12Frame};

pub use surface::{
    argb_to_nv12_locked, rgba_to_nv12_locked, LockedSurface, ReleaseMode, SliceSurface,
    SurfaceFormat, SurfaceInfo, SurfaceLock,
};

pub use batch::{convert_frames, FrameJob};
