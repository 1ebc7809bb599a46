//! The memory port the core drives.

/// Single-operation, word-granular memory port with per-cycle grant.
///
/// One call is one request in one cycle. `None` means the memory could not
/// service the request this cycle; the caller retries on a later cycle with
/// no state to unwind. `Some(word)` carries the data at `addr` when
/// `do_read` is set, and is `Some(0)` for a granted pure write.
///
/// Addresses are assumed word-aligned; behavior on misaligned addresses is
/// the implementation's business.
pub trait MemoryPort {
    /// Issues one request. Returns `None` when the request is denied.
    fn access(&mut self, addr: u32, write_value: u32, do_read: bool, do_write: bool)
        -> Option<u32>;
}
