#![feature(test)]

extern crate test;

use longint::BigInt;
use test::Bencher;

fn input(digits: usize, seed: u8) -> BigInt {
    let s: String = (0..digits)
        .map(|i| char::from(b'1' + ((i * 7 + usize::from(seed)) % 9) as u8))
        .collect();
    s.parse().unwrap()
}

#[bench]
fn bench_parse_10k(b: &mut Bencher) {
    let s = input(10_000, 1).to_string();
    b.bytes = s.len() as u64;
    b.iter(|| s.parse::<BigInt>().unwrap());
}

#[bench]
fn bench_to_string_10k(b: &mut Bencher) {
    let x = input(10_000, 1);
    b.iter(|| x.to_string());
}

#[bench]
fn bench_add_10k(b: &mut Bencher) {
    let x = input(10_000, 1);
    let y = input(10_000, 2);
    b.iter(|| &x + &y);
}

#[bench]
fn bench_mul_small(b: &mut Bencher) {
    let x = input(100, 1);
    let y = input(100, 2);
    b.iter(|| &x * &y);
}

#[bench]
fn bench_mul_10k(b: &mut Bencher) {
    let x = input(10_000, 1);
    let y = input(10_000, 2);
    b.iter(|| &x * &y);
}

#[bench]
fn bench_square_100k(b: &mut Bencher) {
    let x = input(100_000, 3);
    b.iter(|| &x * &x);
}

#[bench]
fn bench_div_20k_by_10k(b: &mut Bencher) {
    let n = input(20_000, 1);
    let d = input(10_000, 2);
    b.iter(|| &n / &d);
}

#[bench]
fn bench_div_by_small(b: &mut Bencher) {
    let n = input(10_000, 1);
    let d = BigInt::from(9_973);
    b.iter(|| &n % &d);
}
