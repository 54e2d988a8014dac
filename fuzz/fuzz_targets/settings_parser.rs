//! Fuzz target for the `dburl.toml` settings parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_settings_parser
//! ```

#![no_main]

use dburl_config::{DatabaseSettings, MapEnvSource};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(settings) = input.parse::<DatabaseSettings>() {
            let _ = settings.load_from(&MapEnvSource::new());
        }
    }
});
