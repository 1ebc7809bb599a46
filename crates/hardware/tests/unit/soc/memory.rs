//! Backing memory and grant policy tests.

use mips_core::soc::memory::{GrantPolicy, Memory};
use mips_core::soc::traits::MemoryPort;

#[test]
fn ideal_memory_always_grants() {
    let mut mem = Memory::new(4096);
    assert_eq!(mem.access(0x10, 0xABCD, false, true), Some(0));
    assert_eq!(mem.access(0x10, 0, true, false), Some(0xABCD));
}

#[test]
fn fixed_wait_denies_then_grants() {
    let mut mem = Memory::with_policy(4096, GrantPolicy::FixedWait { wait_states: 2 });
    mem.write_word(0x20, 7);

    assert_eq!(mem.access(0x20, 0, true, false), None);
    assert_eq!(mem.access(0x20, 0, true, false), None);
    assert_eq!(
        mem.access(0x20, 0, true, false),
        Some(7),
        "third attempt of the same request must be granted"
    );
    assert_eq!(
        mem.access(0x20, 0, true, false),
        Some(7),
        "a granted request stays warm"
    );
}

#[test]
fn fixed_wait_tracks_requests_independently() {
    // Interleaved requests must each make progress; no request can starve
    // another.
    let mut mem = Memory::with_policy(4096, GrantPolicy::FixedWait { wait_states: 1 });
    mem.write_word(0x0, 11);
    mem.write_word(0x4, 22);

    assert_eq!(mem.access(0x0, 0, true, false), None);
    assert_eq!(mem.access(0x4, 0, true, false), None);
    assert_eq!(mem.access(0x0, 0, true, false), Some(11));
    assert_eq!(mem.access(0x4, 0, true, false), Some(22));
}

#[test]
fn reads_and_writes_of_the_same_address_are_distinct_requests() {
    let mut mem = Memory::with_policy(4096, GrantPolicy::FixedWait { wait_states: 1 });

    assert_eq!(mem.access(0x8, 0, true, false), None);
    assert_eq!(mem.access(0x8, 0, true, false), Some(0));
    assert_eq!(
        mem.access(0x8, 5, false, true),
        None,
        "the write direction warms up separately"
    );
    assert_eq!(mem.access(0x8, 5, false, true), Some(0));
    assert_eq!(mem.read_word(0x8), 5);
}

#[test]
fn denied_write_has_no_effect() {
    let mut mem = Memory::with_policy(4096, GrantPolicy::FixedWait { wait_states: 1 });
    mem.write_word(0xC, 0x1234);

    assert_eq!(mem.access(0xC, 0xFFFF, false, true), None);
    assert_eq!(mem.read_word(0xC), 0x1234);
}

#[test]
fn out_of_range_reads_zero_and_writes_drop() {
    let mut mem = Memory::new(64);
    assert_eq!(mem.access(0x1000, 0, true, false), Some(0));
    assert_eq!(mem.access(0x1000, 9, false, true), Some(0));
    assert_eq!(mem.read_word(0x1000), 0);
}

#[test]
fn load_bytes_packs_little_endian() {
    let mut mem = Memory::new(64);
    mem.load_bytes(0, &[0x78, 0x56, 0x34, 0x12, 0xAA]);
    assert_eq!(mem.read_word(0), 0x1234_5678);
    assert_eq!(mem.read_word(4), 0xAA, "trailing partial word zero-pads");
}
