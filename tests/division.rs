use longint::error::{Category, ErrorCode};
use longint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_digits(rng: &mut StdRng, len: usize) -> BigInt {
    let mut s = String::with_capacity(len);
    s.push(char::from(b'1' + rng.gen_range(0..9u8)));
    for _ in 1..len {
        s.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    s.parse().unwrap()
}

fn check_division(n: &BigInt, d: &BigInt) {
    let (q, r) = n.div_rem(d).unwrap();
    assert_eq!(&q * d + &r, *n, "{} / {}", n, d);
    assert!(r.abs() < d.abs(), "{} % {} = {}", n, d, r);
    assert!(r.is_zero() || r.sign() == n.sign(), "{} % {} = {}", n, d, r);
    assert_eq!(n / d, q);
    assert_eq!(n % d, r);
}

#[test]
fn test_division_identity() {
    let mut rng = StdRng::seed_from_u64(0xd1d);
    for _ in 0..300 {
        let n_len = rng.gen_range(1..300);
        let d_len = rng.gen_range(1..200);
        let mut n = random_digits(&mut rng, n_len);
        let mut d = random_digits(&mut rng, d_len);
        if rng.gen_bool(0.5) {
            n = -n;
        }
        if rng.gen_bool(0.5) {
            d = -d;
        }
        check_division(&n, &d);
    }
}

#[test]
fn test_large_division() {
    let mut rng = StdRng::seed_from_u64(77);
    let a = random_digits(&mut rng, 6000);
    let b = random_digits(&mut rng, 2500);
    let r = random_digits(&mut rng, 2000);
    let n = &a * &b + &r;
    let (q, rem) = n.div_rem(&b).unwrap();
    assert_eq!(q, a);
    assert_eq!(rem, r);
}

#[test]
fn test_truncation_toward_zero() {
    let cases = [
        (1000, 3, 333, 1),
        (-1000, 3, -333, -1),
        (1000, -3, -333, 1),
        (-1000, -3, 333, -1),
        (2, 5, 0, 2),
        (-2, 5, 0, -2),
        (0, -5, 0, 0),
    ];
    for &(n, d, q, r) in &cases {
        let (quotient, remainder) = BigInt::from(n).div_rem(&BigInt::from(d)).unwrap();
        assert_eq!(quotient, BigInt::from(q));
        assert_eq!(remainder, BigInt::from(r));
    }
}

#[test]
fn test_division_by_zero() {
    let err = BigInt::from(5).div_rem(&BigInt::zero()).unwrap_err();
    assert_eq!(err.classify(), Category::Domain);
    assert_eq!(err.code(), &ErrorCode::DivisionByZero);
    assert_eq!(err.to_string(), "attempt to divide by zero");
    assert_eq!((err.line(), err.column()), (0, 0));

    assert!(BigInt::zero().checked_div(&BigInt::zero()).is_none());
    assert!(BigInt::from(-1).checked_rem(&BigInt::zero()).is_none());
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_panics() {
    let mut x = BigInt::from(10);
    x /= BigInt::zero();
}

#[test]
fn test_power_of_base_divisors() {
    let n: BigInt = "123456789012345678901234567890".parse().unwrap();
    for k in 1..8 {
        let d = BigInt::one().shl_limbs(k);
        assert_eq!(&n / &d, n.shr_limbs(k));
    }
}
