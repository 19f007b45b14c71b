//! Walsh-Hadamard transform over exact integers.
//!
//! The butterflies are twiddle-free (`u + v`, `u - v`), so no root of
//! unity and no bit-reversal permutation are needed, and the transform is
//! exact for any integer input.

use rug::Integer;

/// Forward Walsh-Hadamard transform of `seq` in natural (Hadamard)
/// ordering.
///
/// The input length must be a power of two or at most 1 (checked in
/// debug builds).
#[must_use]
pub fn fwht(seq: &[Integer]) -> Vec<Integer> {
    walsh_hadamard_transform(seq, false)
}

/// Inverse Walsh-Hadamard transform of `seq`, including the `1/n`
/// scaling (exact, since every coefficient of a forward transform is
/// divisible by `n` after the inverse butterflies).
#[must_use]
pub fn ifwht(seq: &[Integer]) -> Vec<Integer> {
    walsh_hadamard_transform(seq, true)
}

fn walsh_hadamard_transform(seq: &[Integer], inverse: bool) -> Vec<Integer> {
    let mut a = seq.to_vec();
    let n = a.len();
    if n <= 1 {
        return a;
    }
    debug_assert!(n.is_power_of_two());

    let mut h = 2;
    while h <= n {
        let hf = h / 2;
        for start in (0..n).step_by(h) {
            for j in 0..hf {
                let u = a[start + j].clone();
                let v = a[start + j + hf].clone();
                a[start + j] = Integer::from(&u + &v);
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
    a
}
