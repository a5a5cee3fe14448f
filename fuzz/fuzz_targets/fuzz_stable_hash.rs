#![no_main]

use libfuzzer_sys::fuzz_target;

use skillmeter::{compute_level, JitterRange, Level};

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let base = data.first().copied().map(i32::from).unwrap_or(50);
        let level = compute_level(name, base, JitterRange::DEFAULT).get();
        assert!((Level::MIN..=Level::MAX).contains(&level));
    }
});
