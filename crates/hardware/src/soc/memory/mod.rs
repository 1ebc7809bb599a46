//! The standard backing memory: a word buffer behind a grant policy.

/// Flat word storage.
pub mod buffer;
/// Grant policies for wait-state modeling.
pub mod controller;

use crate::soc::traits::MemoryPort;
pub use buffer::WordBuffer;
pub use controller::{GrantPolicy, GrantState};

/// Word-addressable memory with request-grant semantics.
///
/// The buffer methods (`read_word`, `write_word`, loaders) are a debug port
/// for the loader, harness, and tests; they bypass the grant policy. The
/// cycle-accurate path is [`MemoryPort::access`].
pub struct Memory {
    buffer: WordBuffer,
    grants: GrantState,
}

impl Memory {
    /// Creates an always-ready memory of `size_bytes`.
    pub fn new(size_bytes: usize) -> Self {
        Self::with_policy(size_bytes, GrantPolicy::Ideal)
    }

    /// Creates a memory of `size_bytes` with the given grant policy.
    pub fn with_policy(size_bytes: usize, policy: GrantPolicy) -> Self {
        Self {
            buffer: WordBuffer::new(size_bytes),
            grants: GrantState::new(policy),
        }
    }

    /// Capacity in bytes.
    pub fn size_bytes(&self) -> usize {
        self.buffer.size_bytes()
    }

    /// Debug read of one word, bypassing the grant policy.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.buffer.read_word(addr)
    }

    /// Debug write of one word, bypassing the grant policy.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        self.buffer.write_word(addr, value)
    }

    /// Loads raw little-endian bytes at `base`, bypassing the grant policy.
    pub fn load_bytes(&mut self, base: u32, bytes: &[u8]) {
        self.buffer.load_bytes(base, bytes)
    }

    /// Loads a word slice at `base`, bypassing the grant policy.
    pub fn load_words(&mut self, base: u32, words: &[u32]) {
        self.buffer.load_words(base, words)
    }
}

impl MemoryPort for Memory {
    fn access(
        &mut self,
        addr: u32,
        write_value: u32,
        do_read: bool,
        do_write: bool,
    ) -> Option<u32> {
        if !self.grants.grant(addr, do_read, do_write) {
            return None;
        }
        let mut out = 0;
        if do_read {
            out = self.buffer.read_word(addr);
        }
        if do_write {
            self.buffer.write_word(addr, write_value);
        }
        Some(out)
    }
}
