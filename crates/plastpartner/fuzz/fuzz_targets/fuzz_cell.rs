//! Fuzz target for single-cell checks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plastpartner::{validate_cell, SalesSchema};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let schema = SalesSchema::sales();
    for column in schema.columns() {
        let check = validate_cell(Some(input), column);
        assert_eq!(check.valid, check.message.is_none());
    }
});
