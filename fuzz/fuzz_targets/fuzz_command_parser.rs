//! Fuzz target: `commands::parse`
//!
//! Drives arbitrary UTF-8 into the chat command parser and asserts that
//! it never panics, that parsed thresholds always land inside 1..=100,
//! and that unmatched input is echoed back untouched.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use growbox::app::commands::{self, BotCommand};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    match commands::parse(text) {
        BotCommand::SetThreshold(v) => {
            assert!((1..=100).contains(&v), "threshold escaped the clamp: {}", v);
        }
        BotCommand::Unknown(raw) => {
            assert_eq!(raw, text, "unknown input must be echoed verbatim");
        }
        _ => {}
    }
});
