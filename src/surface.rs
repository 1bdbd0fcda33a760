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
//! Scoped access to externally owned pixel buffers.
//!
//! Some hosts only hand out raw pixel memory between an explicit lock and
//! unlock call (pinned arrays, locked bitmaps). While such a lock is held the
//! host may be unable to run its own bookkeeping, so the locked section must be
//! short, must never block or allocate, and every lock must be undone exactly
//! once. [`LockedSurface`] ties the unlock to `Drop`, which makes the release
//! unconditional and, for guards living in the same scope, reverse ordered.
use crate::nv12_error::{check_nv12_destination, check_packed_source, check_strided_source};
use crate::rgbx_to_nv12::{argb_to_nv12, rgba_to_nv12};
use crate::Nv12Error;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Pixel format tag a surface reports about itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SurfaceFormat {
    Rgba8888,
    Rgb565,
    Rgba4444,
    Alpha8,
    RgbaF16,
    Rgba1010102,
}

/// Self-description of a locked bitmap, read before locking it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes between the starts of consecutive rows.
    pub stride: u32,
    pub format: SurfaceFormat,
}

/// How a lock is given back to its owner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Changes are published to the owner.
    Commit,
    /// Changes, if any, are discarded. Used for read-only access.
    Abort,
}

/// A buffer that has to be locked before its memory may be touched.
///
/// `data`/`data_mut` are only called between a successful `lock` and the
/// matching `unlock`, and only through a [`LockedSurface`].
pub trait SurfaceLock {
    type Element: Copy;

    /// Element count the owner promises once locked, known without locking.
    fn declared_len(&self) -> usize;

    /// Format and geometry, for surfaces that carry them.
    fn surface_info(&self) -> Option<SurfaceInfo> {
        None
    }

    /// Grants access. Failures should be reported as [`Nv12Error::ResourceAcquisition`].
    fn lock(&mut self) -> Result<(), Nv12Error>;

    /// Gives access back. Called exactly once for every successful `lock`.
    fn unlock(&mut self, mode: ReleaseMode);

    fn data(&self) -> &[Self::Element];

    fn data_mut(&mut self) -> &mut [Self::Element];
}

/// RAII guard over a locked [`SurfaceLock`], unlocking on drop.
pub struct LockedSurface<'a, L: SurfaceLock + ?Sized> {
    surface: &'a mut L,
    mode: ReleaseMode,
}

impl<'a, L: SurfaceLock + ?Sized> LockedSurface<'a, L> {
    pub fn acquire(surface: &'a mut L, mode: ReleaseMode) -> Result<Self, Nv12Error> {
        if let Err(err) = surface.lock() {
            warn!(%err, "buffer lock failed");
            return Err(err);
        }
        Ok(LockedSurface { surface, mode })
    }

    pub fn as_slice(&self) -> &[L::Element] {
        self.surface.data()
    }

    pub fn as_mut_slice(&mut self) -> &mut [L::Element] {
        self.surface.data_mut()
    }
}

impl<L: SurfaceLock + ?Sized> Drop for LockedSurface<'_, L> {
    fn drop(&mut self) {
        self.surface.unlock(self.mode);
    }
}

/// [`SurfaceLock`] over memory the caller already owns; locking always succeeds.
#[derive(Debug)]
pub struct SliceSurface<'a, T: Copy + Debug> {
    data: &'a mut [T],
    info: Option<SurfaceInfo>,
    locked: bool,
}

impl<'a, T: Copy + Debug> SliceSurface<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        SliceSurface {
            data,
            info: None,
            locked: false,
        }
    }

    pub fn with_info(data: &'a mut [T], info: SurfaceInfo) -> Self {
        SliceSurface {
            data,
            info: Some(info),
            locked: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl<T: Copy + Debug> SurfaceLock for SliceSurface<'_, T> {
    type Element = T;

    fn declared_len(&self) -> usize {
        self.data.len()
    }

    fn surface_info(&self) -> Option<SurfaceInfo> {
        self.info
    }

    fn lock(&mut self) -> Result<(), Nv12Error> {
        self.locked = true;
        Ok(())
    }

    fn unlock(&mut self, _mode: ReleaseMode) {
        self.locked = false;
    }

    fn data(&self) -> &[T] {
        &*self.data
    }

    fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

/// Convert a lockable ARGB buffer into a lockable NV12 buffer.
///
/// Sizes are validated from `declared_len` before anything is locked. The
/// destination is locked first and the source second; they are released in
/// reverse order, the source without committing. If the source lock fails the
/// destination is released before the error is returned.
pub fn argb_to_nv12_locked<D, S>(
    nv12: &mut D,
    argb: &mut S,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error>
where
    D: SurfaceLock<Element = u8> + ?Sized,
    S: SurfaceLock<Element = u32> + ?Sized,
{
    if let Err(err) = check_nv12_destination(nv12.declared_len(), width, height)
        .and_then(|_| check_packed_source(argb.declared_len(), width, height))
    {
        debug!(%err, width, height, "rejected locked ARGB to NV12 conversion");
        return Err(err);
    }

    let mut nv12 = LockedSurface::acquire(nv12, ReleaseMode::Commit)?;
    let argb = LockedSurface::acquire(argb, ReleaseMode::Abort)?;

    argb_to_nv12(nv12.as_mut_slice(), argb.as_slice(), width, height)
}

/// Checks a bitmap's self-description against the requested frame.
fn check_surface_info(
    info: Option<SurfaceInfo>,
    width: u32,
    height: u32,
) -> Result<SurfaceInfo, Nv12Error> {
    let info = info.ok_or(Nv12Error::MissingSurfaceInfo)?;
    if info.format != SurfaceFormat::Rgba8888 {
        return Err(Nv12Error::SurfaceFormatMismatch(info.format));
    }
    if info.width != width || info.height != height {
        return Err(Nv12Error::SurfaceDimensionsMismatch {
            expected: (width, height),
            received: (info.width, info.height),
        });
    }
    Ok(info)
}

/// Convert a lockable RGBA8888 bitmap into a lockable NV12 buffer.
///
/// The bitmap must describe itself through [`SurfaceLock::surface_info`] as
/// [`SurfaceFormat::Rgba8888`] with exactly `width x height` pixels; its
/// reported stride is used for row addressing. Lock ordering follows
/// [`argb_to_nv12_locked`].
pub fn rgba_to_nv12_locked<D, S>(
    nv12: &mut D,
    rgba: &mut S,
    width: u32,
    height: u32,
) -> Result<(), Nv12Error>
where
    D: SurfaceLock<Element = u8> + ?Sized,
    S: SurfaceLock<Element = u8> + ?Sized,
{
    let stride = match check_surface_info(rgba.surface_info(), width, height).and_then(|info| {
        check_nv12_destination(nv12.declared_len(), width, height)?;
        check_strided_source(rgba.declared_len(), info.stride, width, height)?;
        Ok(info.stride)
    }) {
        Ok(stride) => stride,
        Err(err) => {
            debug!(%err, width, height, "rejected locked RGBA to NV12 conversion");
            return Err(err);
        }
    };

    let mut nv12 = LockedSurface::acquire(nv12, ReleaseMode::Commit)?;
    let rgba = LockedSurface::acquire(rgba, ReleaseMode::Abort)?;

    rgba_to_nv12(nv12.as_mut_slice(), rgba.as_slice(), stride, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct RecordingSurface<T: Copy> {
        name: &'static str,
        data: Vec<T>,
        info: Option<SurfaceInfo>,
        fail_lock: bool,
        log: EventLog,
    }

    impl<T: Copy> RecordingSurface<T> {
        fn new(name: &'static str, data: Vec<T>, log: &EventLog) -> Self {
            RecordingSurface {
                name,
                data,
                info: None,
                fail_lock: false,
                log: log.clone(),
            }
        }
    }

    impl<T: Copy> SurfaceLock for RecordingSurface<T> {
        type Element = T;

        fn declared_len(&self) -> usize {
            self.data.len()
        }

        fn surface_info(&self) -> Option<SurfaceInfo> {
            self.info
        }

        fn lock(&mut self) -> Result<(), Nv12Error> {
            if self.fail_lock {
                self.log.borrow_mut().push(format!("lock-failed {}", self.name));
                return Err(Nv12Error::ResourceAcquisition("out of memory".to_string()));
            }
            self.log.borrow_mut().push(format!("lock {}", self.name));
            Ok(())
        }

        fn unlock(&mut self, mode: ReleaseMode) {
            self.log
                .borrow_mut()
                .push(format!("unlock {} {:?}", self.name, mode));
        }

        fn data(&self) -> &[T] {
            &self.data
        }

        fn data_mut(&mut self) -> &mut [T] {
            &mut self.data
        }
    }

    fn events(log: &EventLog) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_locks_released_in_reverse_order() {
        let log = EventLog::default();
        let mut nv12 = RecordingSurface::new("nv12", vec![0u8; 6], &log);
        let mut argb = RecordingSurface::new("argb", vec![0xFF00_0000u32; 4], &log);

        argb_to_nv12_locked(&mut nv12, &mut argb, 2, 2).unwrap();

        assert_eq!(
            events(&log),
            vec![
                "lock nv12",
                "lock argb",
                "unlock argb Abort",
                "unlock nv12 Commit"
            ]
        );
        assert_eq!(nv12.data, vec![16, 16, 16, 16, 128, 128]);
    }

    #[test]
    fn test_failed_source_lock_releases_destination() {
        let log = EventLog::default();
        let mut nv12 = RecordingSurface::new("nv12", vec![0xCDu8; 6], &log);
        let mut argb = RecordingSurface::new("argb", vec![0u32; 4], &log);
        argb.fail_lock = true;

        let err = argb_to_nv12_locked(&mut nv12, &mut argb, 2, 2).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ResourceAcquisitionFailure);
        assert_eq!(
            events(&log),
            vec!["lock nv12", "lock-failed argb", "unlock nv12 Commit"]
        );
        assert!(nv12.data.iter().all(|&b| b == 0xCD));
    }

    #[test]
    fn test_failed_destination_lock_touches_nothing_else() {
        let log = EventLog::default();
        let mut nv12 = RecordingSurface::new("nv12", vec![0u8; 6], &log);
        nv12.fail_lock = true;
        let mut argb = RecordingSurface::new("argb", vec![0u32; 4], &log);

        assert!(argb_to_nv12_locked(&mut nv12, &mut argb, 2, 2).is_err());
        assert_eq!(events(&log), vec!["lock-failed nv12"]);
    }

    #[test]
    fn test_validation_happens_before_locking() {
        let log = EventLog::default();
        let mut nv12 = RecordingSurface::new("nv12", vec![0xCDu8; 5], &log);
        let mut argb = RecordingSurface::new("argb", vec![0u32; 4], &log);

        let err = argb_to_nv12_locked(&mut nv12, &mut argb, 2, 2).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(events(&log).is_empty());
        assert!(nv12.data.iter().all(|&b| b == 0xCD));
    }

    #[test]
    fn test_rgba_surface_uses_reported_stride() {
        let log = EventLog::default();
        let stride = 12u32;
        let mut pixels = vec![0u8; stride as usize * 2];
        for row in pixels.chunks_exact_mut(stride as usize) {
            for px in row[..8].chunks_exact_mut(4) {
                px.copy_from_slice(&[255, 255, 255, 255]);
            }
        }
        let mut nv12 = RecordingSurface::new("nv12", vec![0u8; 6], &log);
        let mut rgba = RecordingSurface::new("bitmap", pixels, &log);
        rgba.info = Some(SurfaceInfo {
            width: 2,
            height: 2,
            stride,
            format: SurfaceFormat::Rgba8888,
        });

        rgba_to_nv12_locked(&mut nv12, &mut rgba, 2, 2).unwrap();

        assert_eq!(nv12.data, vec![235, 235, 235, 235, 128, 128]);
        assert_eq!(
            events(&log),
            vec![
                "lock nv12",
                "lock bitmap",
                "unlock bitmap Abort",
                "unlock nv12 Commit"
            ]
        );
    }

    #[test]
    fn test_rgba_surface_metadata_checked_before_locking() {
        let log = EventLog::default();
        let mut nv12 = RecordingSurface::new("nv12", vec![0u8; 6], &log);
        let mut rgba = RecordingSurface::new("bitmap", vec![0u8; 16], &log);

        assert_eq!(
            rgba_to_nv12_locked(&mut nv12, &mut rgba, 2, 2),
            Err(Nv12Error::MissingSurfaceInfo)
        );

        rgba.info = Some(SurfaceInfo {
            width: 2,
            height: 2,
            stride: 8,
            format: SurfaceFormat::Rgb565,
        });
        assert_eq!(
            rgba_to_nv12_locked(&mut nv12, &mut rgba, 2, 2),
            Err(Nv12Error::SurfaceFormatMismatch(SurfaceFormat::Rgb565))
        );

        rgba.info = Some(SurfaceInfo {
            width: 4,
            height: 2,
            stride: 16,
            format: SurfaceFormat::Rgba8888,
        });
        assert_eq!(
            rgba_to_nv12_locked(&mut nv12, &mut rgba, 2, 2),
            Err(Nv12Error::SurfaceDimensionsMismatch {
                expected: (2, 2),
                received: (4, 2)
            })
        );

        assert!(events(&log).is_empty());
    }

    #[test]
    fn test_slice_surface_unlocks_on_drop() {
        let mut storage = vec![0u8; 6];
        let mut surface = SliceSurface::new(&mut storage);
        {
            let mut guard = LockedSurface::acquire(&mut surface, ReleaseMode::Commit).unwrap();
            guard.as_mut_slice()[0] = 42;
        }
        assert!(!surface.is_locked());
        assert_eq!(surface.data()[0], 42);
    }

    #[test]
    fn test_slice_surfaces_convert() {
        let mut storage = vec![0u8; 6];
        let mut argb = vec![0xFFFF_FFFFu32; 4];
        let mut nv12 = SliceSurface::new(&mut storage);
        let mut source = SliceSurface::new(&mut argb);
        argb_to_nv12_locked(&mut nv12, &mut source, 2, 2).unwrap();
        assert!(!nv12.is_locked());
        assert!(!source.is_locked());
        assert_eq!(storage, vec![235, 235, 235, 235, 128, 128]);
    }
}
