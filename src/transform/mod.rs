//! Forward and inverse transform primitives.
//!
//! Each pair satisfies the round-trip law `inverse(forward(seq)) == seq`
//! for any power-of-two input length (exactly in the modular and integer
//! domains, up to the requested precision in the complex domain). The
//! primitives own radix handling, root-of-unity derivation and the
//! bit-reversal permutation; the convolution engines only pad, multiply
//! and truncate around them.

pub mod errors;
pub mod fourier;
pub mod ntt;
pub mod walsh;

pub use fourier::{fft, ifft};
pub use ntt::{intt, ntt};
pub use walsh::{fwht, ifwht};
