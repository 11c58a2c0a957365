//! The packed processor status register.
//!
//! Real 6502 hardware has only six physical flip-flops in `P` (C Z I D V N);
//! the "B" and "unused" bits at positions 4 and 5 are not stored at all,
//! they're synthesized whenever `P` is pushed to the stack (by `PHP`, `BRK`,
//! or an interrupt) and discarded whenever `P` is pulled back (`PLP`,
//! `RTI`). Modeling it that way, rather than storing all 8 bits, makes the
//! push/pull asymmetry automatic instead of something every call site has
//! to remember to apply.

use bitflags::bitflags;

bitflags! {
    #[derive(Default)]
    pub struct StatusFlags: u8 {
        const CARRY              = 0b0000_0001;
        const ZERO                = 0b0000_0010;
        const INTERRUPT_DISABLE   = 0b0000_0100;
        const DECIMAL             = 0b0000_1000;
        const OVERFLOW            = 0b0100_0000;
        const NEGATIVE            = 0b1000_0000;
    }
}

/// Bit 4 of a pushed status byte: set by `PHP` and `BRK`, clear when the
/// push is made on behalf of `NMI`/`IRQ`.
pub const BREAK_BIT: u8 = 0b0001_0000;
/// Bit 5 of a pushed status byte: always read back as 1.
pub const UNUSED_BIT: u8 = 0b0010_0000;

impl StatusFlags {
    /// The flags set by the hardware reset sequence: interrupts disabled,
    /// everything else clear. (The historical `0b0011_0100` reset value
    /// seen in some references includes the B/unused bits, which this type
    /// doesn't store; the six real bits it leaves is just `I`.)
    pub const RESET: StatusFlags = StatusFlags::INTERRUPT_DISABLE;

    /// Value to push to the stack for `PHP` or software `BRK`: the six real
    /// flags, with bits 4 and 5 both forced to 1.
    pub fn to_push_byte(self, break_flag: bool) -> u8 {
        self.bits() | UNUSED_BIT | if break_flag { BREAK_BIT } else { 0 }
    }

    /// Load from a byte pulled off the stack (`PLP`/`RTI`). Bits 4 and 5
    /// aren't part of this type, so `from_bits_truncate` silently drops
    /// them -- matching the hardware, which has nowhere to store them.
    pub fn from_pulled_byte(byte: u8) -> StatusFlags {
        StatusFlags::from_bits_truncate(byte)
    }

    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.set(flag, value);
    }

    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.set(StatusFlags::ZERO, value == 0);
        self.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    pub fn carry(self) -> u8 {
        if self.contains(StatusFlags::CARRY) { 1 } else { 0 }
    }
}
