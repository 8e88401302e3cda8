//! Multiplication of limb buffers through an exact number-theoretic
//! transform.
//!
//! Limbs are treated as coefficients of a polynomial in `BASE`. The product
//! polynomial is computed by a cyclic convolution over the prime field
//! `Z/PZ` with `P = 7 * 2^50 + 1`, which has roots of unity of every power of
//! two order up to `2^50`. Every exact coefficient of the product stays below
//! `P` as long as the shorter operand has at most `MAX_TERMS` limbs, so the
//! residues are the true coefficients and a final carry pass yields the
//! canonical limbs.

use super::limb::{self, Limb, Wide, MAX_LIMB};
use alloc::vec;
use alloc::vec::Vec;
use core::ptr;

/// Prime modulus of the transform, `7 * 2^50 + 1`.
const MODULUS: u64 = 7 * (1 << 50) + 1;

/// Primitive root modulo `MODULUS`.
const ROOT: u64 = 6;

/// Log2 of the longest supported transform.
const MAX_LOG_LEN: u32 = 50;

/// Longest shorter operand, in limbs, whose product coefficients are all
/// below `MODULUS`: `(MODULUS - 1) / MAX_LIMB^2`.
pub(crate) const MAX_TERMS: usize = ((MODULUS - 1) / (MAX_LIMB as u64 * MAX_LIMB as u64)) as usize;

/// Below this many limbs in the shorter operand the schoolbook product wins.
pub(crate) const SCHOOLBOOK_CUTOFF: usize = 32;

// MODULAR
// -------

#[inline]
fn add_mod(x: u64, y: u64) -> u64 {
    let z = x + y;
    if z >= MODULUS {
        z - MODULUS
    } else {
        z
    }
}

#[inline]
fn sub_mod(x: u64, y: u64) -> u64 {
    if x >= y {
        x - y
    } else {
        x + MODULUS - y
    }
}

#[inline]
fn mul_mod(x: u64, y: u64) -> u64 {
    (x as u128 * y as u128 % MODULUS as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut acc = 1;
    base %= MODULUS;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    acc
}

/// Multiplicative inverse modulo `MODULUS` by the extended Euclidean
/// algorithm. `x` must not be a multiple of `MODULUS`.
fn inverse(x: u64) -> u64 {
    let (mut old_r, mut r) = (x as i128 % MODULUS as i128, MODULUS as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    debug_assert_eq!(old_r, 1);
    old_s.rem_euclid(MODULUS as i128) as u64
}

// TRANSFORM
// ---------

/// Reverses the low `bits` bits of `x`.
#[inline]
fn reverse_bits(x: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        x.reverse_bits() >> (usize::BITS - bits)
    }
}

/// Applies the bit-reversal permutation to a power-of-two length buffer.
fn bit_reverse(buf: &mut [u64]) {
    let bits = buf.len().trailing_zeros();
    for i in 0..buf.len() {
        let j = reverse_bits(i, bits);
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// In-place iterative transform of a power-of-two length buffer.
///
/// The inverse transform uses the inverse roots and scales every entry by
/// `len^-1`, so `transform(transform(a, false), true) == a`.
fn transform(buf: &mut [u64], invert: bool) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    bit_reverse(buf);

    let mut len = 2;
    while len <= n {
        let mut step = pow_mod(ROOT, (MODULUS - 1) / len as u64);
        if invert {
            step = inverse(step);
        }
        let half = len / 2;
        for block in buf.chunks_exact_mut(len) {
            let (lo, hi) = block.split_at_mut(half);
            let mut w = 1;
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let t = mul_mod(*v, w);
                *v = sub_mod(*u, t);
                *u = add_mod(*u, t);
                w = mul_mod(w, step);
            }
        }
        len <<= 1;
    }

    if invert {
        let scale = inverse(n as u64);
        for value in buf.iter_mut() {
            *value = mul_mod(*value, scale);
        }
    }
}

/// Exact coefficients of the product polynomial of `x` and `y`.
///
/// Requires `min(x.len(), y.len()) <= MAX_TERMS`. Passing the same slice
/// twice computes a square with a single forward transform.
fn convolve(x: &[Limb], y: &[Limb]) -> Vec<Wide> {
    debug_assert!(x.len().min(y.len()) <= MAX_TERMS);
    let len = (2 * x.len().max(y.len())).next_power_of_two();
    assert!(
        len.trailing_zeros() <= MAX_LOG_LEN,
        "operands too long for the transform",
    );

    let _scope = tracing::trace_span!(
        "ntt convolve",
        x_len = x.len(),
        y_len = y.len(),
        len = len,
    )
    .entered();

    let square = ptr::eq(x, y);
    let mut fx = vec![0u64; len];
    for (dst, &src) in fx.iter_mut().zip(x) {
        *dst = src as u64;
    }
    transform(&mut fx, false);

    if square {
        for value in fx.iter_mut() {
            *value = mul_mod(*value, *value);
        }
    } else {
        let mut fy = vec![0u64; len];
        for (dst, &src) in fy.iter_mut().zip(y) {
            *dst = src as u64;
        }
        transform(&mut fy, false);
        for (a, &b) in fx.iter_mut().zip(fy.iter()) {
            *a = mul_mod(*a, b);
        }
    }

    transform(&mut fx, true);
    fx.truncate(x.len() + y.len() - 1);
    fx
}

// MULTIPLICATION
// --------------

/// Schoolbook product of two limb buffers.
pub fn long_mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    if limb::is_zero(x) || limb::is_zero(y) {
        return vec![0];
    }
    let mut coefficients: Vec<Wide> = vec![0; x.len() + y.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        if xi == 0 {
            continue;
        }
        for (c, &yj) in coefficients[i..].iter_mut().zip(y) {
            *c += xi as Wide * yj as Wide;
        }
    }
    limb::from_coefficients(coefficients)
}

/// Multiply two canonical limb buffers.
pub fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    if limb::is_zero(x) || limb::is_zero(y) {
        return vec![0];
    }
    let (short, long) = if x.len() <= y.len() { (x, y) } else { (y, x) };
    if short.len() < SCHOOLBOOK_CUTOFF {
        long_mul(short, long)
    } else if short.len() <= MAX_TERMS {
        limb::from_coefficients(convolve(x, y))
    } else {
        mul_chunked(short, long, MAX_TERMS)
    }
}

/// Multiply by splitting `short` into pieces of at most `chunk` limbs and
/// accumulating the partial products at their limb offsets.
fn mul_chunked(short: &[Limb], long: &[Limb], chunk: usize) -> Vec<Limb> {
    let mut z = vec![0];
    for (index, piece) in short.chunks(chunk).enumerate() {
        let mut piece = piece.to_vec();
        limb::normalize(&mut piece);
        let partial = mul(&piece, long);
        if !limb::is_zero(&partial) {
            limb::iadd_impl(&mut z, &partial, index * chunk);
        }
    }
    limb::normalize(&mut z);
    z
}

// TESTS
// -----
