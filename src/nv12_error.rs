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
use crate::surface::SurfaceFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Coarse classification of [`Nv12Error`], mirroring what a host binding
/// needs to decide which exception to raise.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Buffers or dimensions cannot describe a valid conversion.
    /// Nothing was written, the call may be retried once fixed.
    InvalidArgument,
    /// A buffer could not be locked for access.
    ResourceAcquisitionFailure,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Nv12Error {
    DestinationSizeMismatch(MismatchedSize),
    SourceSizeMismatch(MismatchedSize),
    StrideTooSmall(MismatchedSize),
    OddDimensions { width: u32, height: u32 },
    ZeroBaseSize,
    PointerOverflow,
    MissingSurfaceInfo,
    SurfaceFormatMismatch(SurfaceFormat),
    SurfaceDimensionsMismatch {
        expected: (u32, u32),
        received: (u32, u32),
    },
    ResourceAcquisition(String),
}

impl Nv12Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Nv12Error::ResourceAcquisition(_) => ErrorKind::ResourceAcquisitionFailure,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl Display for Nv12Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Nv12Error::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "NV12 destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            Nv12Error::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source pixels must have size at least {} but it is {}",
                size.expected, size.received
            )),
            Nv12Error::StrideTooSmall(size) => f.write_fmt(format_args!(
                "Source stride must be at least {} bytes, but it was {}",
                size.expected, size.received
            )),
            Nv12Error::OddDimensions { width, height } => f.write_fmt(format_args!(
                "NV12 requires even dimensions, got {}x{}",
                width, height
            )),
            Nv12Error::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            Nv12Error::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            Nv12Error::MissingSurfaceInfo => {
                f.write_str("Surface does not describe its format and dimensions")
            }
            Nv12Error::SurfaceFormatMismatch(format) => f.write_fmt(format_args!(
                "Surface format must be RGBA_8888, but it was {:?}",
                format
            )),
            Nv12Error::SurfaceDimensionsMismatch { expected, received } => {
                f.write_fmt(format_args!(
                    "Surface dimensions must be {}x{}, but it was {}x{}",
                    expected.0, expected.1, received.0, received.1
                ))
            }
            Nv12Error::ResourceAcquisition(reason) => f.write_fmt(format_args!(
                "Failed to acquire buffer access: {}",
                reason
            )),
        }
    }
}

impl Error for Nv12Error {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<(), Nv12Error> {
    let (_, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(Nv12Error::PointerOverflow);
    }
    Ok(())
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), Nv12Error> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(Nv12Error::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(Nv12Error::PointerOverflow);
    }
    Ok(())
}

/// Checks that `width x height` can be split into whole 2x2 blocks and
/// returns the luma plane size.
#[inline]
pub(crate) fn check_frame_dimensions(width: u32, height: u32) -> Result<usize, Nv12Error> {
    if width == 0 || height == 0 {
        return Err(Nv12Error::ZeroBaseSize);
    }
    if width & 1 != 0 || height & 1 != 0 {
        return Err(Nv12Error::OddDimensions { width, height });
    }
    // Source surfaces hold 4 bytes per pixel, the widest thing indexed.
    check_overflow_v3(width as usize, height as usize, 4)?;
    Ok(width as usize * height as usize)
}

#[inline]
pub(crate) fn check_nv12_destination(
    dst_len: usize,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error> {
    let frame_size = check_frame_dimensions(width, height)?;
    let required = frame_size * 3 / 2;
    if dst_len < required {
        return Err(Nv12Error::DestinationSizeMismatch(MismatchedSize {
            expected: required,
            received: dst_len,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_packed_source(
    src_len: usize,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error> {
    let frame_size = check_frame_dimensions(width, height)?;
    if src_len < frame_size {
        return Err(Nv12Error::SourceSizeMismatch(MismatchedSize {
            expected: frame_size,
            received: src_len,
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_strided_source(
    src_len: usize,
    stride: u32,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error> {
    check_frame_dimensions(width, height)?;
    let row_bytes = width as usize * 4;
    if (stride as usize) < row_bytes {
        return Err(Nv12Error::StrideTooSmall(MismatchedSize {
            expected: row_bytes,
            received: stride as usize,
        }));
    }
    check_overflow_v2(stride as usize, height as usize)?;
    let required = stride as usize * height as usize;
    if src_len < required {
        return Err(Nv12Error::SourceSizeMismatch(MismatchedSize {
            expected: required,
            received: src_len,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_odd_dimensions_rejected() {
        assert_eq!(check_frame_dimensions(0, 2), Err(Nv12Error::ZeroBaseSize));
        assert_eq!(check_frame_dimensions(2, 0), Err(Nv12Error::ZeroBaseSize));
        assert_eq!(
            check_frame_dimensions(3, 2),
            Err(Nv12Error::OddDimensions {
                width: 3,
                height: 2
            })
        );
        assert_eq!(
            check_frame_dimensions(2, 5),
            Err(Nv12Error::OddDimensions {
                width: 2,
                height: 5
            })
        );
        assert_eq!(check_frame_dimensions(4, 6), Ok(24));
    }

    #[test]
    fn test_destination_must_hold_both_planes() {
        assert!(check_nv12_destination(24, 4, 4).is_ok());
        assert!(check_nv12_destination(100, 4, 4).is_ok());
        assert_eq!(
            check_nv12_destination(23, 4, 4),
            Err(Nv12Error::DestinationSizeMismatch(MismatchedSize {
                expected: 24,
                received: 23
            }))
        );
    }

    #[test]
    fn test_strided_source_checks() {
        assert!(check_strided_source(64, 16, 4, 4).is_ok());
        assert!(check_strided_source(80, 20, 4, 4).is_ok());
        assert_eq!(
            check_strided_source(64, 12, 4, 4),
            Err(Nv12Error::StrideTooSmall(MismatchedSize {
                expected: 16,
                received: 12
            }))
        );
        assert_eq!(
            check_strided_source(79, 20, 4, 4),
            Err(Nv12Error::SourceSizeMismatch(MismatchedSize {
                expected: 80,
                received: 79
            }))
        );
    }

    #[test]
    fn test_packed_source_checks() {
        assert!(check_packed_source(16, 4, 4).is_ok());
        assert_eq!(
            check_packed_source(15, 4, 4),
            Err(Nv12Error::SourceSizeMismatch(MismatchedSize {
                expected: 16,
                received: 15
            }))
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Nv12Error::ZeroBaseSize.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            Nv12Error::SurfaceFormatMismatch(SurfaceFormat::Rgb565).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Nv12Error::ResourceAcquisition("out of memory".to_string()).kind(),
            ErrorKind::ResourceAcquisitionFailure
        );
    }

    #[test]
    fn test_messages_are_readable() {
        let message = Nv12Error::OddDimensions {
            width: 3,
            height: 4,
        }
        .to_string();
        assert_eq!(message, "NV12 requires even dimensions, got 3x4");
    }
}
