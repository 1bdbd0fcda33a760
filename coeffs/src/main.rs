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
use rug::float::Round;
use rug::Float;

const BITS: u32 = 150;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
struct YuvChromaRange {
    range_y: u32,
    range_uv: u32,
}

const fn get_limited_range(depth: u32) -> YuvChromaRange {
    YuvChromaRange {
        range_y: 219 << (depth - 8),
        range_uv: 224 << (depth - 8),
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
struct CbCrForwardTransform<T> {
    yr: T,
    yg: T,
    yb: T,
    cb_r: T,
    cb_g: T,
    cb_b: T,
    cr_r: T,
    cr_g: T,
    cr_b: T,
}

/// BT.601 luma weights.
const KR: f32 = 0.299;
const KB: f32 = 0.114;

fn get_forward_coeffs(kr: f32, kb: f32, bit_depth: u32) -> CbCrForwardTransform<Float> {
    let one = || Float::with_val(BITS, 1f32);
    let kr = Float::with_val(BITS, kr);
    let kb = Float::with_val(BITS, kb);
    let kg = one() - &kr - &kb;

    let range = get_limited_range(bit_depth);
    let max_colors = Float::with_val(BITS, ((1 << bit_depth) - 1) as f32);
    let scale_y = Float::with_val(BITS, range.range_y as f32) / &max_colors;
    let scale_uv = Float::with_val(BITS, range.range_uv as f32) / &max_colors;
    let half = Float::with_val(BITS, 0.5f32);

    CbCrForwardTransform {
        yr: Float::with_val(BITS, &kr * &scale_y),
        yg: Float::with_val(BITS, &kg * &scale_y),
        yb: Float::with_val(BITS, &kb * &scale_y),
        cb_r: -half.clone() * &kr / (one() - &kb) * &scale_uv,
        cb_g: -half.clone() * &kg / (one() - &kb) * &scale_uv,
        cb_b: half.clone() * &scale_uv,
        cr_r: half.clone() * &scale_uv,
        cr_g: -half.clone() * &kg / (one() - &kr) * &scale_uv,
        cr_b: -half * &kb / (one() - &kr) * &scale_uv,
    }
}

fn get_forward_coeffs_integral(
    kr: f32,
    kb: f32,
    bit_depth: u32,
    precision: u32,
) -> CbCrForwardTransform<i32> {
    let prec = Float::with_val(BITS, (1u32 << precision) as f32);
    get_forward_coeffs(kr, kb, bit_depth).map_ref(|v| {
        Float::with_val(BITS, v * &prec)
            .to_i32_saturating_round(Round::Nearest)
            .unwrap()
    })
}

impl CbCrForwardTransform<Float> {
    fn map_ref<V>(&self, f: impl Fn(&Float) -> V) -> CbCrForwardTransform<V> {
        CbCrForwardTransform {
            yr: f(&self.yr),
            yg: f(&self.yg),
            yb: f(&self.yb),
            cb_r: f(&self.cb_r),
            cb_g: f(&self.cb_g),
            cb_b: f(&self.cb_b),
            cr_r: f(&self.cr_r),
            cr_g: f(&self.cr_g),
            cr_b: f(&self.cr_b),
        }
    }
}

fn main() {
    let bit_depth = 8;
    let transform = get_forward_coeffs(KR, KB, bit_depth).map_ref(|v| v.to_f32());
    println!("Precise {:?};", transform);
    let integral = get_forward_coeffs_integral(KR, KB, bit_depth, 8);
    println!("Integral {:?};", integral);
    let y_sum = integral.yr + integral.yg + integral.yb;
    let cb_sum = integral.cb_r + integral.cb_g + integral.cb_b;
    let cr_sum = integral.cr_r + integral.cr_g + integral.cr_b;
    println!("Row sums Y {y_sum}, Cb {cb_sum}, Cr {cr_sum}");
}
