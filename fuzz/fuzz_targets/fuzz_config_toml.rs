#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and catalog validation must never panic
        if let Ok(config) = toml::from_str::<skillmeter::Config>(content) {
            let _ = config.validate_catalog();
            let _ = config.jitter_range();
        }
    }
});
