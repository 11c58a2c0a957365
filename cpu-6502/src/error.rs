//! Typed errors for the one place this crate can genuinely fail at
//! runtime: loading a save state. Everything else (unmapped reads, illegal
//! opcodes) is handled without raising an error -- open bus and
//! best-effort undocumented-opcode dispatch, never a panic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadStateError {
    #[error("save state has bad magic bytes {found:?}, expected {expected:?}")]
    BadMagic { found: [u8; 4], expected: [u8; 4] },

    #[error("save state version {found} is incompatible with this crate's version {expected}")]
    IncompatibleVersion { found: u16, expected: u16 },

    #[error("save state buffer is truncated: needed at least {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
}
