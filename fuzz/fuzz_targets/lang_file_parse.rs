//! Fuzz target for language file parsing
//!
//! Operators edit language files by hand, so the parser sees whatever a text
//! editor can produce.
//!
//! # Invariants
//!
//! - Parsing NEVER panics; malformed escapes return a line error
//! - Anything that parses survives a render/parse cycle unchanged

#![no_main]

use libfuzzer_sys::fuzz_target;
use waypoint_lang::{defaults::BASE_FILE_HEADER, lang_file};

fuzz_target!(|source: &str| {
    let Ok(entries) = lang_file::parse(source) else {
        return;
    };

    let rendered = lang_file::render(BASE_FILE_HEADER, entries.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let reparsed = lang_file::parse(&rendered).expect("rendered file must parse");
    assert_eq!(entries, reparsed);
});
