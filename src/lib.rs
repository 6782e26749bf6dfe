//! Multidimensional linear recurrences over Galois fields.
//!
//! The crate computes, for a finite multidimensional array of field
//! elements, a minimal set of multivariate polynomials whose convolution
//! with the array vanishes everywhere on its support (the
//! Berlekamp-Massey-Sakata algorithm) and applies it to locate errors in
//! received words of one-point Hermitian algebraic-geometry codes.

pub mod bms;
pub mod error;
pub mod galois;
pub mod hermitian;
pub mod point;
pub mod poly;
