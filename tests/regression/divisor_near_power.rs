use longint::BigInt;

#[test]
fn test() {
    // Divisors of the form 10^4k and 10^4k +- 1 sit at the edge of the
    // reciprocal seed estimate.
    for k in 2..12 {
        let power = BigInt::one().shl_limbs(k);
        let divisors = [
            power.clone(),
            &power + &BigInt::one(),
            &power - &BigInt::one(),
        ];
        for divisor in &divisors {
            let numerator = (divisor * divisor) * 7i64 + BigInt::from(12_345);
            let (q, r) = numerator.div_rem(divisor).unwrap();
            assert_eq!(&q * divisor + &r, numerator);
            assert!(r < *divisor && !r.is_negative());
        }
    }
}
