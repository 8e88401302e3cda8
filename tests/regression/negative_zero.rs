use longint::{BigInt, Sign};

#[test]
fn test() {
    let parsed: BigInt = "-0000".parse().unwrap();
    assert_eq!(parsed.sign(), Sign::Positive);
    assert_eq!(parsed.to_string(), "0");

    let product = BigInt::from(-17) * BigInt::zero();
    assert_eq!(product.sign(), Sign::Positive);

    let remainder = BigInt::from(-20) % BigInt::from(5);
    assert_eq!(remainder.sign(), Sign::Positive);

    let quotient = BigInt::from(-3) / BigInt::from(5);
    assert_eq!(quotient.sign(), Sign::Positive);
    assert_eq!(quotient.to_string(), "0");

    let shifted = BigInt::from(-9999).shr_limbs(1);
    assert_eq!(shifted.sign(), Sign::Positive);
}
