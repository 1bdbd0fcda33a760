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
#![forbid(unsafe_code)]

#[inline(always)]
/// Rounding shift right, floors on negative values exactly as `>>` does
pub(crate) fn rshr_round<const PRECISION: i32>(val: i32) -> i32 {
    let rounding: i32 = 1 << (PRECISION - 1);
    (val + rounding) >> PRECISION
}

#[inline(always)]
/// Saturates into byte range
pub(crate) fn clamp8(val: i32) -> u8 {
    val.min(255).max(0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rshr_round_floors_negative() {
        assert_eq!(rshr_round::<8>(0), 0);
        assert_eq!(rshr_round::<8>(127), 0);
        assert_eq!(rshr_round::<8>(128), 1);
        assert_eq!(rshr_round::<8>(-129), -1);
        // -9690 + 128 = -9562, -9562 / 256 = -37.35 floors to -38
        assert_eq!(rshr_round::<8>(-9690), -38);
    }

    #[test]
    fn test_clamp8() {
        assert_eq!(clamp8(-1), 0);
        assert_eq!(clamp8(0), 0);
        assert_eq!(clamp8(128), 128);
        assert_eq!(clamp8(255), 255);
        assert_eq!(clamp8(1024), 255);
    }
}
