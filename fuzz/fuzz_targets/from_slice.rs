#![no_main]

use libfuzzer_sys::fuzz_target;
use longint::{BigInt, Deserializer};

fuzz_target!(|data: &[u8]| {
    for value in Deserializer::from_slice(data).into_iter() {
        let Ok(value) = value else { break };
        let text = value.to_string();
        assert_eq!(text.parse::<BigInt>().unwrap(), value);
    }
});
