//! Fuzz target for placeholder substitution
//!
//! # Invariants
//!
//! - Parsing any template NEVER panics
//! - Rendering succeeds exactly when the argument count matches
//! - A template without placeholders renders to a fixed string

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waypoint_lang::{FormatError, Template};

#[derive(Debug, Arbitrary)]
struct Input {
    template: String,
    args: Vec<String>,
}

fuzz_target!(|input: Input| {
    let template = Template::parse(&input.template);
    let args: Vec<&dyn std::fmt::Display> = input.args.iter().map(|a| a as &dyn std::fmt::Display).collect();

    match template.render(&args) {
        Ok(rendered) => {
            assert_eq!(template.placeholder_count(), args.len());
            if args.is_empty() {
                assert_eq!(Template::parse(&input.template).render(&[]).ok(), Some(rendered));
            }
        },
        Err(FormatError::ArgumentCount { expected, got }) => {
            assert_eq!(expected, template.placeholder_count());
            assert_eq!(got, args.len());
            assert_ne!(expected, got);
        },
    }
});
