//! Fuzz target: `telegram::api::parse_updates`
//!
//! Feeds arbitrary bytes as a getUpdates response body. The parser must
//! never panic — a hostile or truncated server response becomes a typed
//! error, nothing worse.
//!
//! cargo fuzz run fuzz_update_parser

#![no_main]

use growbox::telegram::api;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = core::str::from_utf8(data) else {
        return;
    };
    let _ = api::parse_updates(raw);
});
