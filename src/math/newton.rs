//! Division of limb buffers by Newton-Raphson reciprocal refinement.
//!
//! To divide `N` (n limbs) by `D` (m limbs) we compute the reciprocal
//! `R = floor(B^n / D)` and take `q = floor(N * R / B^n)`, which is the true
//! quotient or one less. The reciprocal is grown from a few limbs of
//! precision, doubling the precision each pass.
//!
//! Rather than carrying the textbook update `x' = x * (2 - D * x)` on
//! fixed-point values, each pass keeps the exact residual
//! `r = B^(m+j) - D * x` of the current approximation `x = floor(B^(m+j) / D)`
//! and extends it with
//!
//! ```text
//! x' = x * B^h + floor(x * r / B^(m+j-h)),    h = j' - j <= j
//! ```
//!
//! The error of the Newton step before flooring is `r^2 * B^h / (D * B^(m+j))`,
//! which is below one whenever `h <= j`, so `x'` is never too large and at
//! most one too small. A bounded correction restores the exact floor.
//!
//! A reciprocal at precision `j` is pinned down to within one by the top
//! `j + 2` limbs of the divisor: with `D'` those limbs, `floor(B^(2j+2) / D')`
//! is never below the exact value and overshoots it by at most one. Each pass
//! therefore works on a divisor at most two limbs longer than its own
//! precision. Pass costs shrink geometrically, so a division costs a
//! constant number of numerator-sized multiplications.

use super::limb::{self, Limb, Wide, BASE, MAX_LIMB};
use super::ntt;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Most single-step adjustments applied to a quotient estimate before
/// falling back to schoolbook division.
pub(crate) const MAX_CORRECTIONS: usize = 4;

/// An exact reciprocal approximation `approx = floor(B^(m+precision) / D)`
/// together with its residual `B^(m+precision) - D * approx`, which always
/// lies in `[0, D)`.
struct ReciprocalState<'a> {
    divisor: &'a [Limb],
    approx: Vec<Limb>,
    residual: Vec<Limb>,
    precision: usize,
}

impl<'a> ReciprocalState<'a> {
    /// Exact approximation at `precision` limbs.
    ///
    /// Divisors longer than `precision + 2` limbs are truncated to their top
    /// limbs first, and the result is corrected against the full divisor.
    /// Otherwise the approximation at half the precision is refined once.
    fn new(divisor: &'a [Limb], precision: usize) -> Self {
        let m = divisor.len();
        if m > precision + 2 {
            let top = &divisor[m - precision - 2..];
            let estimate = ReciprocalState::new(top, precision).approx;
            let (approx, residual) = settle(&limb::pow_base(m + precision), divisor, estimate);
            return ReciprocalState {
                divisor,
                approx,
                residual,
                precision,
            };
        }
        if precision <= 1 {
            return ReciprocalState::seed(divisor, precision);
        }
        let mut state = ReciprocalState::new(divisor, precision - precision / 2);
        state.refine(precision);
        state
    }

    /// Starting approximation at `precision` limbs, which is 0 or 1.
    fn seed(divisor: &'a [Limb], precision: usize) -> Self {
        debug_assert!(precision <= 1);
        let m = divisor.len();
        let (approx, residual) = if m < 3 {
            // B^(m+precision) <= B^3 fits in a Wide, so the seed is exact.
            let numerator = (BASE as Wide).pow((m + precision) as u32);
            let value = divisor
                .iter()
                .rev()
                .fold(0, |acc, &d| acc * BASE as Wide + d as Wide);
            (
                limb::from_coefficients([numerator / value]),
                limb::from_coefficients([numerator % value]),
            )
        } else {
            // Rounding the top three limbs up gives an estimate that is never
            // too large and at most two too small.
            let top = divisor[m - 3..]
                .iter()
                .rev()
                .fold(0, |acc, &d| acc * BASE as Wide + d as Wide);
            let numerator = (BASE as Wide).pow(3 + precision as u32);
            let estimate = limb::from_coefficients([numerator / (top + 1)]);
            settle(&limb::pow_base(m + precision), divisor, estimate)
        };
        ReciprocalState {
            divisor,
            approx,
            residual,
            precision,
        }
    }

    /// Extend the approximation to `target` limbs of precision, where
    /// `precision < target <= 2 * precision`.
    fn refine(&mut self, target: usize) {
        debug_assert!(self.precision < target && target <= 2 * self.precision);
        let m = self.divisor.len();
        let h = target - self.precision;

        let _scope = tracing::trace_span!(
            "newton refine",
            divisor_len = m,
            precision = self.precision,
            target = target,
        )
        .entered();

        let mut correction = ntt::mul(&self.approx, &self.residual);
        limb::ishr_limbs(&mut correction, m + self.precision - h);
        let mut estimate = self.approx.clone();
        limb::ishl_limbs(&mut estimate, h);
        limb::iadd(&mut estimate, &correction);

        let (approx, residual) = settle(&limb::pow_base(m + target), self.divisor, estimate);
        self.approx = approx;
        self.residual = residual;
        self.precision = target;
    }
}

/// `floor(B^(m + extra) / divisor)` for an `m` limb divisor.
fn reciprocal(divisor: &[Limb], extra: usize) -> Vec<Limb> {
    ReciprocalState::new(divisor, extra).approx
}

/// Turn a quotient estimate into the exact quotient and remainder of
/// `numerator / divisor`.
///
/// The estimate is adjusted one unit at a time; estimates more than
/// `MAX_CORRECTIONS` away from the truth are recomputed by schoolbook
/// division.
fn settle(numerator: &[Limb], divisor: &[Limb], mut quotient: Vec<Limb>) -> (Vec<Limb>, Vec<Limb>) {
    let mut product = ntt::mul(divisor, &quotient);
    let mut steps = 0;

    while limb::compare(&product, numerator) == Ordering::Greater {
        if steps == MAX_CORRECTIONS {
            tracing::debug!(steps, "quotient estimate too large, dividing directly");
            return long_div_rem(numerator, divisor);
        }
        limb::isub(&mut quotient, &[1]);
        limb::isub(&mut product, divisor);
        steps += 1;
    }

    let mut remainder = limb::sub(numerator, &product);
    while limb::greater_equal(&remainder, divisor) {
        if steps == MAX_CORRECTIONS {
            tracing::debug!(steps, "quotient estimate too small, dividing directly");
            return long_div_rem(numerator, divisor);
        }
        limb::iadd(&mut quotient, &[1]);
        limb::isub(&mut remainder, divisor);
        steps += 1;
    }

    if steps > 1 {
        tracing::debug!(steps, "quotient estimate corrected");
    }
    (quotient, remainder)
}

/// Schoolbook division, one quotient limb at a time.
///
/// Each quotient limb is found by binary search over `0..BASE`. This is the
/// slow reference the Newton path is checked against. Requires a nonzero
/// divisor.
pub fn long_div_rem(numerator: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!limb::is_zero(divisor));
    let mut quotient = vec![0; numerator.len()];
    let mut remainder = vec![0];
    for (index, &digit) in numerator.iter().enumerate().rev() {
        limb::ishl_limbs(&mut remainder, 1);
        remainder[0] = digit;

        let (mut lo, mut hi) = (0, MAX_LIMB);
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            let mut trial = divisor.to_vec();
            limb::imul_small(&mut trial, mid);
            if limb::greater_equal(&remainder, &trial) {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        if lo != 0 {
            let mut trial = divisor.to_vec();
            limb::imul_small(&mut trial, lo);
            limb::isub(&mut remainder, &trial);
        }
        quotient[index] = lo;
    }
    limb::normalize(&mut quotient);
    (quotient, remainder)
}

/// Quotient and remainder of two canonical limb buffers.
///
/// Requires a nonzero divisor.
pub fn div_rem(numerator: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!limb::is_zero(divisor));
    if limb::compare(numerator, divisor) == Ordering::Less {
        return (vec![0], numerator.to_vec());
    }
    if divisor.len() == 1 {
        let mut quotient = numerator.to_vec();
        let remainder = limb::idiv_small(&mut quotient, divisor[0]);
        return (quotient, vec![remainder]);
    }

    let _scope = tracing::trace_span!(
        "newton div_rem",
        numerator_len = numerator.len(),
        divisor_len = divisor.len(),
    )
    .entered();

    let k = numerator.len();
    let inverse = reciprocal(divisor, k - divisor.len());
    let mut quotient = ntt::mul(numerator, &inverse);
    limb::ishr_limbs(&mut quotient, k);
    settle(numerator, divisor, quotient)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_limbs(rng: &mut StdRng, len: usize) -> Vec<Limb> {
        let mut x: Vec<Limb> = (0..len).map(|_| rng.gen_range(0..BASE)).collect();
        if let Some(top) = x.last_mut() {
            if *top == 0 {
                *top = 1 + rng.gen_range(0..MAX_LIMB);
            }
        }
        x
    }

    fn check(numerator: &[Limb], divisor: &[Limb]) {
        let (q, r) = div_rem(numerator, divisor);
        assert!(limb::compare(&r, divisor) == Ordering::Less);
        let mut back = ntt::mul(&q, divisor);
        limb::iadd(&mut back, &r);
        limb::normalize(&mut back);
        assert_eq!(back, numerator);
        assert_eq!((q, r), long_div_rem(numerator, divisor));
    }

    #[test]
    fn long_div_rem_test() {
        // 123456789 / 1234 = 100046, rem 25
        assert_eq!(long_div_rem(&[6789, 2345, 1], &[1234]), (vec![46, 10], vec![25]));
        assert_eq!(long_div_rem(&[5], &[0, 1]), (vec![0], vec![5]));
        assert_eq!(long_div_rem(&[0, 0, 1], &[0, 1]), (vec![0, 1], vec![0]));
    }

    #[test]
    fn reciprocal_test() {
        let mut rng = StdRng::seed_from_u64(3);
        for m in [2, 3, 4, 9, 40] {
            for extra in [0, 1, 2, 3, 5, 8, 33, 70] {
                let divisor = random_limbs(&mut rng, m);
                let expected = long_div_rem(&limb::pow_base(m + extra), &divisor).0;
                assert_eq!(reciprocal(&divisor, extra), expected, "m {} extra {}", m, extra);
            }
        }
    }

    #[test]
    fn truncated_divisor_test() {
        let mut rng = StdRng::seed_from_u64(21);
        // Divisors much longer than the requested precision, and the reverse.
        for (m, precision) in [(300, 0), (300, 1), (300, 5), (120, 37), (5, 300), (64, 64)] {
            let divisor = random_limbs(&mut rng, m);
            let state = ReciprocalState::new(&divisor, precision);
            let (expected, remainder) = long_div_rem(&limb::pow_base(m + precision), &divisor);
            assert_eq!(state.precision, precision);
            assert_eq!(state.approx, expected, "m {} precision {}", m, precision);
            assert_eq!(state.residual, remainder, "m {} precision {}", m, precision);
        }
    }

    #[test]
    fn long_quotient_test() {
        // Short divisor against a long numerator, so most passes see a
        // truncated divisor.
        let mut rng = StdRng::seed_from_u64(22);
        let numerator = random_limbs(&mut rng, 2000);
        let divisor = random_limbs(&mut rng, 900);
        check(&numerator, &divisor);
    }

    #[test]
    fn reciprocal_extreme_divisor_test() {
        // Smallest and largest divisors of a given length stress the seed.
        for m in [3, 6, 50] {
            let smallest = limb::pow_base(m - 1);
            let largest = vec![MAX_LIMB; m];
            let mut just_above = smallest.clone();
            just_above[0] = 1;
            for divisor in [&smallest, &largest, &just_above] {
                for extra in [0, 1, 4, 17] {
                    let expected = long_div_rem(&limb::pow_base(m + extra), divisor).0;
                    assert_eq!(reciprocal(divisor, extra), expected);
                }
            }
        }
    }

    #[test]
    fn small_cases_test() {
        // Numerator below divisor.
        assert_eq!(div_rem(&[5], &[7]), (vec![0], vec![5]));
        assert_eq!(div_rem(&[9999, 1], &[0, 2]), (vec![0], vec![9999, 1]));

        // Single limb divisor.
        assert_eq!(div_rem(&[0, 0, 0, 0, 0, 1], &[7]).1, vec![2]);

        // Equal operands.
        assert_eq!(div_rem(&[1, 2, 3], &[1, 2, 3]), (vec![1], vec![0]));
    }

    #[test]
    fn random_test() {
        let mut rng = StdRng::seed_from_u64(0xd1d);
        for _ in 0..200 {
            let m = rng.gen_range(1..60);
            let n = m + rng.gen_range(0..90);
            let numerator = random_limbs(&mut rng, n);
            let divisor = random_limbs(&mut rng, m);
            check(&numerator, &divisor);
        }
    }

    #[test]
    fn large_test() {
        let mut rng = StdRng::seed_from_u64(99);
        let numerator = random_limbs(&mut rng, 1500);
        let divisor = random_limbs(&mut rng, 400);
        check(&numerator, &divisor);

        // Exact division of a product.
        let a = random_limbs(&mut rng, 700);
        let b = random_limbs(&mut rng, 300);
        let product = ntt::mul(&a, &b);
        assert_eq!(div_rem(&product, &b), (a, vec![0]));
    }

    #[test]
    fn settle_test() {
        let numerator = [1234, 5678, 9012];
        let divisor = [17, 3];
        let expected = long_div_rem(&numerator, &divisor);

        // Within reach of the single-step corrections.
        let mut low = expected.0.clone();
        limb::isub(&mut low, &[2]);
        assert_eq!(settle(&numerator, &divisor, low), expected);
        let mut high = expected.0.clone();
        limb::iadd(&mut high, &[3]);
        assert_eq!(settle(&numerator, &divisor, high), expected);

        // Far away estimates fall back to schoolbook division.
        assert_eq!(settle(&numerator, &divisor, vec![0]), expected);
        assert_eq!(settle(&numerator, &divisor, vec![0, 0, 1]), expected);
    }
}
