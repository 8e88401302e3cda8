use longint::BigInt;

#[test]
fn test() {
    // 10^40 - 1 borrows through every limb of the minuend.
    let one = BigInt::one();
    let big: BigInt = "10000000000000000000000000000000000000000".parse().unwrap();
    let nines = &big - &one;
    assert_eq!(nines.to_string(), "9".repeat(40));
    assert_eq!(nines.num_limbs(), 10);

    // And carries all the way back.
    assert_eq!(nines + one, big);
}
