#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpgm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode_with_maxval(
        decoded.as_imgref(),
        u32::from(decoded.maxval()),
        enough::Unstoppable,
    )
    .expect("a decoded image must re-encode");

    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
});
