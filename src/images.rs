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
use crate::layout::PixelSource;
use crate::nv12_error::{check_frame_dimensions, check_nv12_destination};
use crate::rgbx_to_nv12::convert;
use crate::Nv12Error;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Rounds a frame dimension up to the next multiple of 16.
///
/// Hardware encoders commonly require macroblock aligned input; feeding them an
/// unaligned width shears the picture diagonally. Returns `None` on overflow.
pub fn align_to_16(value: u32) -> Option<u32> {
    value.checked_next_multiple_of(16)
}

#[derive(Debug)]
/// NV12 frame: full resolution Y plane followed by the interleaved UV plane
pub struct Nv12Frame<'a> {
    pub buffer: BufferStoreMut<'a, u8>,
    pub width: u32,
    pub height: u32,
}

impl Nv12Frame<'static> {
    /// Allocates a zeroed frame of exactly `width * height * 3 / 2` bytes.
    ///
    /// The frame is meant to be reused across conversions of equally sized pictures.
    pub fn alloc(width: u32, height: u32) -> Result<Self, Nv12Error> {
        let frame_size = check_frame_dimensions(width, height)?;
        Ok(Nv12Frame {
            buffer: BufferStoreMut::Owned(vec![0u8; frame_size * 3 / 2]),
            width,
            height,
        })
    }

    /// Allocates a frame whose dimensions are first rounded up with [`align_to_16`].
    pub fn alloc_aligned(width: u32, height: u32) -> Result<Self, Nv12Error> {
        let aligned_width = align_to_16(width).ok_or(Nv12Error::PointerOverflow)?;
        let aligned_height = align_to_16(height).ok_or(Nv12Error::PointerOverflow)?;
        Self::alloc(aligned_width, aligned_height)
    }
}

impl<'a> Nv12Frame<'a> {
    /// Wraps a caller owned buffer, which must hold at least `width * height * 3 / 2` bytes.
    pub fn from_slice(buffer: &'a mut [u8], width: u32, height: u32) -> Result<Self, Nv12Error> {
        check_nv12_destination(buffer.len(), width, height)?;
        Ok(Nv12Frame {
            buffer: BufferStoreMut::Borrowed(buffer),
            width,
            height,
        })
    }

    #[inline]
    pub fn frame_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.borrow()[..self.frame_size() * 3 / 2]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.frame_size() * 3 / 2;
        &mut self.buffer.borrow_mut()[..len]
    }

    pub fn y_plane(&self) -> &[u8] {
        &self.as_bytes()[..self.frame_size()]
    }

    /// Interleaved `U, V` pairs, one per 2x2 luma block.
    pub fn uv_plane(&self) -> &[u8] {
        &self.as_bytes()[self.frame_size()..]
    }

    /// Converts `source` into this frame, overwriting both planes.
    pub fn fill_from(&mut self, source: PixelSource<'_>) -> Result<(), Nv12Error> {
        let (width, height) = (self.width, self.height);
        convert(self.buffer.borrow_mut(), source, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_to_16() {
        assert_eq!(align_to_16(0), Some(0));
        assert_eq!(align_to_16(1), Some(16));
        assert_eq!(align_to_16(16), Some(16));
        assert_eq!(align_to_16(1080), Some(1088));
        assert_eq!(align_to_16(1920), Some(1920));
        assert_eq!(align_to_16(u32::MAX), None);
    }

    #[test]
    fn test_alloc_sizes() {
        let frame = Nv12Frame::alloc(6, 4).unwrap();
        assert_eq!(frame.as_bytes().len(), 36);
        assert_eq!(frame.y_plane().len(), 24);
        assert_eq!(frame.uv_plane().len(), 12);

        assert!(Nv12Frame::alloc(5, 4).is_err());
        assert!(Nv12Frame::alloc(0, 4).is_err());
    }

    #[test]
    fn test_alloc_aligned() {
        let frame = Nv12Frame::alloc_aligned(1080, 1917).unwrap();
        assert_eq!((frame.width, frame.height), (1088, 1920));
        assert_eq!(frame.as_bytes().len(), 1088 * 1920 * 3 / 2);
    }

    #[test]
    fn test_from_slice_checks_size() {
        let mut storage = vec![0u8; 23];
        assert!(Nv12Frame::from_slice(&mut storage, 4, 4).is_err());
        let mut storage = vec![0u8; 30];
        let frame = Nv12Frame::from_slice(&mut storage, 4, 4).unwrap();
        assert_eq!(frame.as_bytes().len(), 24);
    }

    #[test]
    fn test_fill_from_reuses_buffer() {
        let mut frame = Nv12Frame::alloc(2, 2).unwrap();
        frame.fill_from(PixelSource::Packed(&[0xFF00_0000; 4])).unwrap();
        assert_eq!(frame.as_bytes(), &[16, 16, 16, 16, 128, 128]);

        frame.fill_from(PixelSource::Packed(&[0xFFFF_FFFF; 4])).unwrap();
        assert_eq!(frame.y_plane(), &[235, 235, 235, 235]);
        assert_eq!(frame.uv_plane(), &[128, 128]);
    }
}
