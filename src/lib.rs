//! Discrete convolution of finite numeric sequences.
//!
//! Three interchangeable transform strategies are provided, selected by
//! caller intent:
//!
//! - linear convolution in the complex domain via an FFT at a requested
//!   decimal precision ([`convolution_fft`]),
//! - linear convolution over a prime field via a number theoretic
//!   transform ([`convolution_ntt`]),
//! - a cyclic folding step layered atop either, available through the
//!   dispatching entry point [`convolution`].
//!
//! Dyadic (bitwise-XOR) and subset convolution over exact integers are
//! exposed as standalone engines ([`convolution_fwht`],
//! [`convolution_subset`]).

pub mod convolution;
pub mod errors;
pub mod transform;
pub mod utils;

pub use convolution::{
    ConvolutionMode, ConvolutionOptions, convolution, convolution_fft, convolution_fwht,
    convolution_ntt, convolution_subset,
};
pub use errors::ConvolutionError;
