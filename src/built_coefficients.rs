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
use crate::yuv_support::CbCrForwardTransform;

/// BT.601 limited range, 8 bit, coefficients scaled by 256.
///
/// `coeffs` derives the same numbers from kr = 0.299, kb = 0.114.
pub static FORWARD_BT601_LIMITED_8_8PREC: CbCrForwardTransform<i32> = CbCrForwardTransform {
    yr: 66,
    yg: 129,
    yb: 25,
    cb_r: -38,
    cb_g: -74,
    cb_b: 112,
    cr_r: 112,
    cr_g: -94,
    cr_b: -18,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_sum_to_expected_gain() {
        let t = &FORWARD_BT601_LIMITED_8_8PREC;
        // 219/255 * 256 rounded per coefficient
        assert_eq!(t.yr + t.yg + t.yb, 220);
        // Chroma rows must cancel on grey input
        assert_eq!(t.cb_r + t.cb_g + t.cb_b, 0);
        assert_eq!(t.cr_r + t.cr_g + t.cr_b, 0);
    }
}
