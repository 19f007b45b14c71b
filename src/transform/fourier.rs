//! Radix-2 fast Fourier transform over arbitrary precision complex
//! values.
//!
//! The caller requests precision in significant decimal digits; the
//! transform converts that to a binary working precision with guard bits
//! proportional to the number of butterfly stages, so that the round trip
//! `ifft(fft(seq))` holds to the requested digits.

use std::f64::consts::LOG2_10;

use rug::{Complex, Float, float::Constant};

use crate::utils::bit_reverse_permute;

/// Decimal digits carried when the caller does not request a precision.
pub const DEFAULT_DPS: u32 = 15;

/// Binary precision equivalent to `dps` significant decimal digits.
pub(crate) fn dps_to_prec(dps: u32) -> u32 {
    (f64::from(dps + 1) * LOG2_10).round() as u32
}

/// Working precision for a transform of length `n` delivering `prec`
/// bits: the extra bits absorb the rounding of `log2(n)` butterfly
/// stages.
fn guarded_prec(prec: u32, n: usize) -> u32 {
    prec + 2 * n.max(2).ilog2() + 8
}

/// Forward discrete Fourier transform of `seq`, using the root of unity
/// `exp(2*pi*I/n)`.
///
/// The input length must be a power of two or at most 1 (checked in
/// debug builds). `dps` is the number of significant decimal digits
/// carried by the result, [`DEFAULT_DPS`] when `None`.
#[must_use]
pub fn fft(seq: &[Complex], dps: Option<u32>) -> Vec<Complex> {
    fourier_transform(seq, dps, false)
}

/// Inverse discrete Fourier transform of `seq`, including the `1/n`
/// scaling.
#[must_use]
pub fn ifft(seq: &[Complex], dps: Option<u32>) -> Vec<Complex> {
    fourier_transform(seq, dps, true)
}

fn fourier_transform(seq: &[Complex], dps: Option<u32>, inverse: bool) -> Vec<Complex> {
    let n = seq.len();
    debug_assert!(n <= 1 || n.is_power_of_two());

    let target = dps_to_prec(dps.unwrap_or(DEFAULT_DPS));
    if n <= 1 {
        return seq.iter().map(|x| Complex::with_val(target, x)).collect();
    }

    let prec = guarded_prec(target, n);
    let mut a: Vec<Complex> = seq.iter().map(|x| Complex::with_val(prec, x)).collect();
    bit_reverse_permute(&mut a);

    // Half table of roots of unity. Each angle is computed directly
    // rather than by repeated multiplication so the table does not drift
    // across its length.
    let tau = Float::with_val(prec, Constant::Pi) * 2u32;
    let roots: Vec<Complex> = (0..n / 2)
        .map(|i| {
            let mut angle = Float::with_val(prec, &tau * (i as u32)) / (n as u32);
            if inverse {
                angle = -angle;
            }
            let (sin, cos) = angle.sin_cos(Float::new(prec));
            Complex::with_val(prec, (cos, sin))
        })
        .collect();

    let mut h = 2;
    while h <= n {
        let hf = h / 2;
        let stride = n / h;
        for start in (0..n).step_by(h) {
            for j in 0..hf {
                let v = Complex::with_val(prec, &a[start + j + hf] * &roots[stride * j]);
                let u = a[start + j].clone();
                a[start + j] = Complex::with_val(prec, &u + &v);
                a[start + j + hf] = u - v;
            }
        }
        h *= 2;
    }

    if inverse {
        for x in &mut a {
            *x /= n as u32;
        }
    }

    a.into_iter().map(|x| Complex::with_val(target, &x)).collect()
}
