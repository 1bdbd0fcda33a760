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
use crate::rgbx_to_nv12::convert;
use crate::Nv12Error;
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefMutIterator, ParallelIterator};

/// One independent frame conversion.
#[derive(Debug)]
pub struct FrameJob<'a> {
    pub nv12: &'a mut [u8],
    pub source: PixelSource<'a>,
    pub width: u32,
    pub height: u32,
}

/// Converts every job, returning one result per job in input order.
///
/// With the `rayon` feature jobs are spread across the rayon pool, each frame
/// itself is still converted by a single thread. A failing job does not stop
/// the others.
pub fn convert_frames(jobs: &mut [FrameJob<'_>]) -> Vec<Result<(), Nv12Error>> {
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = jobs.par_iter_mut();
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = jobs.iter_mut();
    }
    iter.map(|job| convert(job.nv12, job.source, job.width, job.height))
        .collect()
}
