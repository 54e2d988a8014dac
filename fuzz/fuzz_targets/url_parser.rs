//! Fuzz target for the database URL parser.
//!
//! Feeds arbitrary strings to the parser and the env-var expander to find
//! crashes and panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_parser
//! ```

#![no_main]

use dburl_config::{EnvExpander, MapEnvSource, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(config) = parse(input) {
            assert!(!config.engine.is_empty());
            assert_ne!(config.port, Some(0));
        }

        let expander = EnvExpander::with_source(MapEnvSource::new().set("HOST", "localhost"));
        let _ = expander.expand(input);
    }
});
