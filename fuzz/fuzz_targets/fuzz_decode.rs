#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and a successful decode must honor maxval
    if let Ok(image) = zenpgm::decode(data, enough::Unstoppable) {
        assert!(image.pixels().iter().all(|&p| p <= image.maxval()));
        assert_eq!(image.pixels().len(), image.width() * image.height());
    }
});
