//! Fuzz target for the create path.
//!
//! This fuzzer tests that creation from a raw body:
//! 1. Never panics on malformed or hostile JSON
//! 2. Only touches the store when the payload is accepted

#![no_main]

use libfuzzer_sys::fuzz_target;
use medifind::{Directory, MemoryStore};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let directory = Directory::new(MemoryStore::new());
    let accepted = directory.create_from_slice(data).is_ok();

    assert_eq!(directory.store().save_count(), usize::from(accepted));
});
