//! Fuzz target for the upload path.
//!
//! Tokenizes arbitrary bytes and validates whatever comes out against the
//! sales schema. Neither step may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plastpartner::{Parser, SalesSchema, TableValidator};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let schema = SalesSchema::sales();
    if let Ok((table, _metadata)) = Parser::new().parse_upload(data) {
        let _ = TableValidator::new(&schema).accept(&table);
    }
});
