#![no_main]

use libfuzzer_sys::fuzz_target;
use longint::Deserializer;

fuzz_target!(|data: &[u8]| {
    let mut stream = Deserializer::from_slice(data).into_iter();
    let (Some(Ok(n)), Some(Ok(d))) = (stream.next(), stream.next()) else {
        return;
    };
    match n.div_rem(&d) {
        Ok((q, r)) => {
            assert_eq!(&q * &d + &r, n);
            assert!(r.abs() < d.abs());
            assert!(r.is_zero() || r.sign() == n.sign());
        }
        Err(_) => assert!(d.is_zero()),
    }
});
