//! Static, per-opcode dispatch data: addressing mode, base cycle count,
//! whether a page-crossing addressing computation adds a cycle, and the
//! function that implements the opcode.
//!
//! Indexed directly by the raw opcode byte, collapsed into one descriptor
//! struct per entry and filled in completely -- including the page-cross
//! column and the illegal opcodes.

use crate::cpu::Cpu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndirectX,
    IndirectY,
    Indirect,
    Relative,
}

/// Named purely for disassembly/logging; dispatch never matches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc, Cld,
    Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp, Jsr,
    Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti, Rts,
    Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    // Undocumented.
    Slo, Rla, Sre, Rra, Sax, Lax, Dcp, Isc, Anc, Alr, Arr, Xaa, Axs, Ahx,
    Shy, Shx, Tas, Las, Kil,
}

pub type OperationFn = fn(&mut Cpu, Mode);

#[derive(Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: Mode,
    pub cycles: u8,
    /// Whether resolving this opcode's operand address should add a cycle
    /// when the effective address crosses a page boundary. `false` for
    /// stores and read-modify-write instructions, which always pay the
    /// worst-case cost; `true` for read-only instructions in indexed
    /// addressing modes.
    pub page_cross_extra: bool,
    pub op: OperationFn,
}

macro_rules! entry {
    ($mnemonic:ident, $mode:ident, $cycles:literal, $page_cross:literal, $op:path) => {
        OpcodeInfo {
            mnemonic: Mnemonic::$mnemonic,
            mode: Mode::$mode,
            cycles: $cycles,
            page_cross_extra: $page_cross,
            op: $op,
        }
    };
}

use crate::instructions::arithmetic::{adc, sbc};
use crate::instructions::branches_jumps::{
    bcc, bcs, beq, bit, bmi, bne, bpl, brk, bvc, bvs, jmp, jmp_indirect, jsr, rti, rts,
};
use crate::instructions::flags::{clc, cld, cli, clv, sec, sed, sei};
use crate::instructions::illegal::{
    ahx, alr, anc, arr, axs, dcp, isc, jam, las, lax, rla, rra, sax, shx, shy, slo, sre, tas, xaa,
};
use crate::instructions::logical::{and, cmp, cpx, cpy, dec, dex, dey, eor, inc, inx, iny, ora};
use crate::instructions::loads_stores::{lda, ldx, ldy, sta, stx, sty};
use crate::instructions::shifts::{asl, lsr, rol, ror};
use crate::instructions::transfers_stack::{
    pha, php, pla, plp, tax, tay, tsx, txa, txs, tya,
};

/// `NOP`-family undocumented opcodes which only burn operand bytes and
/// cycles, consulted below for the several addressing-mode variants the
/// NMOS 6502 happens to expose for what is otherwise always a plain `NOP`.
fn dop(cpu: &mut Cpu, mode: Mode) {
    crate::instructions::flags::nop(cpu, mode);
}

#[rustfmt::skip]
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    /* 0x00 */ entry!(Brk, Implied,    7, false, brk),
    /* 0x01 */ entry!(Ora, IndirectX,  6, false, ora),
    /* 0x02 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x03 */ entry!(Slo, IndirectX,  8, false, slo),
    /* 0x04 */ entry!(Nop, ZeroPage,   3, false, dop),
    /* 0x05 */ entry!(Ora, ZeroPage,   3, false, ora),
    /* 0x06 */ entry!(Asl, ZeroPage,   5, false, asl),
    /* 0x07 */ entry!(Slo, ZeroPage,   5, false, slo),
    /* 0x08 */ entry!(Php, Implied,    3, false, php),
    /* 0x09 */ entry!(Ora, Immediate,  2, false, ora),
    /* 0x0A */ entry!(Asl, Accumulator,2, false, asl),
    /* 0x0B */ entry!(Anc, Immediate,  2, false, anc),
    /* 0x0C */ entry!(Nop, Absolute,   4, false, dop),
    /* 0x0D */ entry!(Ora, Absolute,   4, false, ora),
    /* 0x0E */ entry!(Asl, Absolute,   6, false, asl),
    /* 0x0F */ entry!(Slo, Absolute,   6, false, slo),

    /* 0x10 */ entry!(Bpl, Relative,   2, false, bpl),
    /* 0x11 */ entry!(Ora, IndirectY,  5, true,  ora),
    /* 0x12 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x13 */ entry!(Slo, IndirectY,  8, false, slo),
    /* 0x14 */ entry!(Nop, ZeroPageX,  4, false, dop),
    /* 0x15 */ entry!(Ora, ZeroPageX,  4, false, ora),
    /* 0x16 */ entry!(Asl, ZeroPageX,  6, false, asl),
    /* 0x17 */ entry!(Slo, ZeroPageX,  6, false, slo),
    /* 0x18 */ entry!(Clc, Implied,    2, false, clc),
    /* 0x19 */ entry!(Ora, AbsoluteY,  4, true,  ora),
    /* 0x1A */ entry!(Nop, Implied,    2, false, dop),
    /* 0x1B */ entry!(Slo, AbsoluteY,  7, false, slo),
    /* 0x1C */ entry!(Nop, AbsoluteX,  4, true,  dop),
    /* 0x1D */ entry!(Ora, AbsoluteX,  4, true,  ora),
    /* 0x1E */ entry!(Asl, AbsoluteX,  7, false, asl),
    /* 0x1F */ entry!(Slo, AbsoluteX,  7, false, slo),

    /* 0x20 */ entry!(Jsr, Absolute,   6, false, jsr),
    /* 0x21 */ entry!(And, IndirectX,  6, false, and),
    /* 0x22 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x23 */ entry!(Rla, IndirectX,  8, false, rla),
    /* 0x24 */ entry!(Bit, ZeroPage,   3, false, bit),
    /* 0x25 */ entry!(And, ZeroPage,   3, false, and),
    /* 0x26 */ entry!(Rol, ZeroPage,   5, false, rol),
    /* 0x27 */ entry!(Rla, ZeroPage,   5, false, rla),
    /* 0x28 */ entry!(Plp, Implied,    4, false, plp),
    /* 0x29 */ entry!(And, Immediate,  2, false, and),
    /* 0x2A */ entry!(Rol, Accumulator,2, false, rol),
    /* 0x2B */ entry!(Anc, Immediate,  2, false, anc),
    /* 0x2C */ entry!(Bit, Absolute,   4, false, bit),
    /* 0x2D */ entry!(And, Absolute,   4, false, and),
    /* 0x2E */ entry!(Rol, Absolute,   6, false, rol),
    /* 0x2F */ entry!(Rla, Absolute,   6, false, rla),

    /* 0x30 */ entry!(Bmi, Relative,   2, false, bmi),
    /* 0x31 */ entry!(And, IndirectY,  5, true,  and),
    /* 0x32 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x33 */ entry!(Rla, IndirectY,  8, false, rla),
    /* 0x34 */ entry!(Nop, ZeroPageX,  4, false, dop),
    /* 0x35 */ entry!(And, ZeroPageX,  4, false, and),
    /* 0x36 */ entry!(Rol, ZeroPageX,  6, false, rol),
    /* 0x37 */ entry!(Rla, ZeroPageX,  6, false, rla),
    /* 0x38 */ entry!(Sec, Implied,    2, false, sec),
    /* 0x39 */ entry!(And, AbsoluteY,  4, true,  and),
    /* 0x3A */ entry!(Nop, Implied,    2, false, dop),
    /* 0x3B */ entry!(Rla, AbsoluteY,  7, false, rla),
    /* 0x3C */ entry!(Nop, AbsoluteX,  4, true,  dop),
    /* 0x3D */ entry!(And, AbsoluteX,  4, true,  and),
    /* 0x3E */ entry!(Rol, AbsoluteX,  7, false, rol),
    /* 0x3F */ entry!(Rla, AbsoluteX,  7, false, rla),

    /* 0x40 */ entry!(Rti, Implied,    6, false, rti),
    /* 0x41 */ entry!(Eor, IndirectX,  6, false, eor),
    /* 0x42 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x43 */ entry!(Sre, IndirectX,  8, false, sre),
    /* 0x44 */ entry!(Nop, ZeroPage,   3, false, dop),
    /* 0x45 */ entry!(Eor, ZeroPage,   3, false, eor),
    /* 0x46 */ entry!(Lsr, ZeroPage,   5, false, lsr),
    /* 0x47 */ entry!(Sre, ZeroPage,   5, false, sre),
    /* 0x48 */ entry!(Pha, Implied,    3, false, pha),
    /* 0x49 */ entry!(Eor, Immediate,  2, false, eor),
    /* 0x4A */ entry!(Lsr, Accumulator,2, false, lsr),
    /* 0x4B */ entry!(Alr, Immediate,  2, false, alr),
    /* 0x4C */ entry!(Jmp, Absolute,   3, false, jmp),
    /* 0x4D */ entry!(Eor, Absolute,   4, false, eor),
    /* 0x4E */ entry!(Lsr, Absolute,   6, false, lsr),
    /* 0x4F */ entry!(Sre, Absolute,   6, false, sre),

    /* 0x50 */ entry!(Bvc, Relative,   2, false, bvc),
    /* 0x51 */ entry!(Eor, IndirectY,  5, true,  eor),
    /* 0x52 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x53 */ entry!(Sre, IndirectY,  8, false, sre),
    /* 0x54 */ entry!(Nop, ZeroPageX,  4, false, dop),
    /* 0x55 */ entry!(Eor, ZeroPageX,  4, false, eor),
    /* 0x56 */ entry!(Lsr, ZeroPageX,  6, false, lsr),
    /* 0x57 */ entry!(Sre, ZeroPageX,  6, false, sre),
    /* 0x58 */ entry!(Cli, Implied,    2, false, cli),
    /* 0x59 */ entry!(Eor, AbsoluteY,  4, true,  eor),
    /* 0x5A */ entry!(Nop, Implied,    2, false, dop),
    /* 0x5B */ entry!(Sre, AbsoluteY,  7, false, sre),
    /* 0x5C */ entry!(Nop, AbsoluteX,  4, true,  dop),
    /* 0x5D */ entry!(Eor, AbsoluteX,  4, true,  eor),
    /* 0x5E */ entry!(Lsr, AbsoluteX,  7, false, lsr),
    /* 0x5F */ entry!(Sre, AbsoluteX,  7, false, sre),

    /* 0x60 */ entry!(Rts, Implied,    6, false, rts),
    /* 0x61 */ entry!(Adc, IndirectX,  6, false, adc),
    /* 0x62 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x63 */ entry!(Rra, IndirectX,  8, false, rra),
    /* 0x64 */ entry!(Nop, ZeroPage,   3, false, dop),
    /* 0x65 */ entry!(Adc, ZeroPage,   3, false, adc),
    /* 0x66 */ entry!(Ror, ZeroPage,   5, false, ror),
    /* 0x67 */ entry!(Rra, ZeroPage,   5, false, rra),
    /* 0x68 */ entry!(Pla, Implied,    4, false, pla),
    /* 0x69 */ entry!(Adc, Immediate,  2, false, adc),
    /* 0x6A */ entry!(Ror, Accumulator,2, false, ror),
    /* 0x6B */ entry!(Arr, Immediate,  2, false, arr),
    /* 0x6C */ entry!(Jmp, Indirect,   5, false, jmp_indirect),
    /* 0x6D */ entry!(Adc, Absolute,   4, false, adc),
    /* 0x6E */ entry!(Ror, Absolute,   6, false, ror),
    /* 0x6F */ entry!(Rra, Absolute,   6, false, rra),

    /* 0x70 */ entry!(Bvs, Relative,   2, false, bvs),
    /* 0x71 */ entry!(Adc, IndirectY,  5, true,  adc),
    /* 0x72 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x73 */ entry!(Rra, IndirectY,  8, false, rra),
    /* 0x74 */ entry!(Nop, ZeroPageX,  4, false, dop),
    /* 0x75 */ entry!(Adc, ZeroPageX,  4, false, adc),
    /* 0x76 */ entry!(Ror, ZeroPageX,  6, false, ror),
    /* 0x77 */ entry!(Rra, ZeroPageX,  6, false, rra),
    /* 0x78 */ entry!(Sei, Implied,    2, false, sei),
    /* 0x79 */ entry!(Adc, AbsoluteY,  4, true,  adc),
    /* 0x7A */ entry!(Nop, Implied,    2, false, dop),
    /* 0x7B */ entry!(Rra, AbsoluteY,  7, false, rra),
    /* 0x7C */ entry!(Nop, AbsoluteX,  4, true,  dop),
    /* 0x7D */ entry!(Adc, AbsoluteX,  4, true,  adc),
    /* 0x7E */ entry!(Ror, AbsoluteX,  7, false, ror),
    /* 0x7F */ entry!(Rra, AbsoluteX,  7, false, rra),

    /* 0x80 */ entry!(Nop, Immediate,  2, false, dop),
    /* 0x81 */ entry!(Sta, IndirectX,  6, false, sta),
    /* 0x82 */ entry!(Nop, Immediate,  2, false, dop),
    /* 0x83 */ entry!(Sax, IndirectX,  6, false, sax),
    /* 0x84 */ entry!(Sty, ZeroPage,   3, false, sty),
    /* 0x85 */ entry!(Sta, ZeroPage,   3, false, sta),
    /* 0x86 */ entry!(Stx, ZeroPage,   3, false, stx),
    /* 0x87 */ entry!(Sax, ZeroPage,   3, false, sax),
    /* 0x88 */ entry!(Dey, Implied,    2, false, dey),
    /* 0x89 */ entry!(Nop, Immediate,  2, false, dop),
    /* 0x8A */ entry!(Txa, Implied,    2, false, txa),
    /* 0x8B */ entry!(Xaa, Immediate,  2, false, xaa),
    /* 0x8C */ entry!(Sty, Absolute,   4, false, sty),
    /* 0x8D */ entry!(Sta, Absolute,   4, false, sta),
    /* 0x8E */ entry!(Stx, Absolute,   4, false, stx),
    /* 0x8F */ entry!(Sax, Absolute,   4, false, sax),

    /* 0x90 */ entry!(Bcc, Relative,   2, false, bcc),
    /* 0x91 */ entry!(Sta, IndirectY,  6, false, sta),
    /* 0x92 */ entry!(Kil, Implied,    2, false, jam),
    /* 0x93 */ entry!(Ahx, IndirectY,  6, false, ahx),
    /* 0x94 */ entry!(Sty, ZeroPageX,  4, false, sty),
    /* 0x95 */ entry!(Sta, ZeroPageX,  4, false, sta),
    /* 0x96 */ entry!(Stx, ZeroPageY,  4, false, stx),
    /* 0x97 */ entry!(Sax, ZeroPageY,  4, false, sax),
    /* 0x98 */ entry!(Tya, Implied,    2, false, tya),
    /* 0x99 */ entry!(Sta, AbsoluteY,  5, false, sta),
    /* 0x9A */ entry!(Txs, Implied,    2, false, txs),
    /* 0x9B */ entry!(Tas, AbsoluteY,  5, false, tas),
    /* 0x9C */ entry!(Shy, AbsoluteX,  5, false, shy),
    /* 0x9D */ entry!(Sta, AbsoluteX,  5, false, sta),
    /* 0x9E */ entry!(Shx, AbsoluteY,  5, false, shx),
    /* 0x9F */ entry!(Ahx, AbsoluteY,  5, false, ahx),

    /* 0xA0 */ entry!(Ldy, Immediate,  2, false, ldy),
    /* 0xA1 */ entry!(Lda, IndirectX,  6, false, lda),
    /* 0xA2 */ entry!(Ldx, Immediate,  2, false, ldx),
    /* 0xA3 */ entry!(Lax, IndirectX,  6, false, lax),
    /* 0xA4 */ entry!(Ldy, ZeroPage,   3, false, ldy),
    /* 0xA5 */ entry!(Lda, ZeroPage,   3, false, lda),
    /* 0xA6 */ entry!(Ldx, ZeroPage,   3, false, ldx),
    /* 0xA7 */ entry!(Lax, ZeroPage,   3, false, lax),
    /* 0xA8 */ entry!(Tay, Implied,    2, false, tay),
    /* 0xA9 */ entry!(Lda, Immediate,  2, false, lda),
    /* 0xAA */ entry!(Tax, Implied,    2, false, tax),
    /* 0xAB */ entry!(Lax, Immediate,  2, false, lax),
    /* 0xAC */ entry!(Ldy, Absolute,   4, false, ldy),
    /* 0xAD */ entry!(Lda, Absolute,   4, false, lda),
    /* 0xAE */ entry!(Ldx, Absolute,   4, false, ldx),
    /* 0xAF */ entry!(Lax, Absolute,   4, false, lax),

    /* 0xB0 */ entry!(Bcs, Relative,   2, false, bcs),
    /* 0xB1 */ entry!(Lda, IndirectY,  5, true,  lda),
    /* 0xB2 */ entry!(Kil, Implied,    2, false, jam),
    /* 0xB3 */ entry!(Lax, IndirectY,  5, true,  lax),
    /* 0xB4 */ entry!(Ldy, ZeroPageX,  4, false, ldy),
    /* 0xB5 */ entry!(Lda, ZeroPageX,  4, false, lda),
    /* 0xB6 */ entry!(Ldx, ZeroPageY,  4, false, ldx),
    /* 0xB7 */ entry!(Lax, ZeroPageY,  4, false, lax),
    /* 0xB8 */ entry!(Clv, Implied,    2, false, clv),
    /* 0xB9 */ entry!(Lda, AbsoluteY,  4, true,  lda),
    /* 0xBA */ entry!(Tsx, Implied,    2, false, tsx),
    /* 0xBB */ entry!(Las, AbsoluteY,  4, true,  las),
    /* 0xBC */ entry!(Ldy, AbsoluteX,  4, true,  ldy),
    /* 0xBD */ entry!(Lda, AbsoluteX,  4, true,  lda),
    /* 0xBE */ entry!(Ldx, AbsoluteY,  4, true,  ldx),
    /* 0xBF */ entry!(Lax, AbsoluteY,  4, true,  lax),

    /* 0xC0 */ entry!(Cpy, Immediate,  2, false, cpy),
    /* 0xC1 */ entry!(Cmp, IndirectX,  6, false, cmp),
    /* 0xC2 */ entry!(Nop, Immediate,  2, false, dop),
    /* 0xC3 */ entry!(Dcp, IndirectX,  8, false, dcp),
    /* 0xC4 */ entry!(Cpy, ZeroPage,   3, false, cpy),
    /* 0xC5 */ entry!(Cmp, ZeroPage,   3, false, cmp),
    /* 0xC6 */ entry!(Dec, ZeroPage,   5, false, dec),
    /* 0xC7 */ entry!(Dcp, ZeroPage,   5, false, dcp),
    /* 0xC8 */ entry!(Iny, Implied,    2, false, iny),
    /* 0xC9 */ entry!(Cmp, Immediate,  2, false, cmp),
    /* 0xCA */ entry!(Dex, Implied,    2, false, dex),
    /* 0xCB */ entry!(Axs, Immediate,  2, false, axs),
    /* 0xCC */ entry!(Cpy, Absolute,   4, false, cpy),
    /* 0xCD */ entry!(Cmp, Absolute,   4, false, cmp),
    /* 0xCE */ entry!(Dec, Absolute,   6, false, dec),
    /* 0xCF */ entry!(Dcp, Absolute,   6, false, dcp),

    /* 0xD0 */ entry!(Bne, Relative,   2, false, bne),
    /* 0xD1 */ entry!(Cmp, IndirectY,  5, true,  cmp),
    /* 0xD2 */ entry!(Kil, Implied,    2, false, jam),
    /* 0xD3 */ entry!(Dcp, IndirectY,  8, false, dcp),
    /* 0xD4 */ entry!(Nop, ZeroPageX,  4, false, dop),
    /* 0xD5 */ entry!(Cmp, ZeroPageX,  4, false, cmp),
    /* 0xD6 */ entry!(Dec, ZeroPageX,  6, false, dec),
    /* 0xD7 */ entry!(Dcp, ZeroPageX,  6, false, dcp),
    /* 0xD8 */ entry!(Cld, Implied,    2, false, cld),
    /* 0xD9 */ entry!(Cmp, AbsoluteY,  4, true,  cmp),
    /* 0xDA */ entry!(Nop, Implied,    2, false, dop),
    /* 0xDB */ entry!(Dcp, AbsoluteY,  7, false, dcp),
    /* 0xDC */ entry!(Nop, AbsoluteX,  4, true,  dop),
    /* 0xDD */ entry!(Cmp, AbsoluteX,  4, true,  cmp),
    /* 0xDE */ entry!(Dec, AbsoluteX,  7, false, dec),
    /* 0xDF */ entry!(Dcp, AbsoluteX,  7, false, dcp),

    /* 0xE0 */ entry!(Cpx, Immediate,  2, false, cpx),
    /* 0xE1 */ entry!(Sbc, IndirectX,  6, false, sbc),
    /* 0xE2 */ entry!(Nop, Immediate,  2, false, dop),
    /* 0xE3 */ entry!(Isc, IndirectX,  8, false, isc),
    /* 0xE4 */ entry!(Cpx, ZeroPage,   3, false, cpx),
    /* 0xE5 */ entry!(Sbc, ZeroPage,   3, false, sbc),
    /* 0xE6 */ entry!(Inc, ZeroPage,   5, false, inc),
    /* 0xE7 */ entry!(Isc, ZeroPage,   5, false, isc),
    /* 0xE8 */ entry!(Inx, Implied,    2, false, inx),
    /* 0xE9 */ entry!(Sbc, Immediate,  2, false, sbc),
    /* 0xEA */ entry!(Nop, Implied,    2, false, dop),
    /* 0xEB */ entry!(Sbc, Immediate,  2, false, sbc),
    /* 0xEC */ entry!(Cpx, Absolute,   4, false, cpx),
    /* 0xED */ entry!(Sbc, Absolute,   4, false, sbc),
    /* 0xEE */ entry!(Inc, Absolute,   6, false, inc),
    /* 0xEF */ entry!(Isc, Absolute,   6, false, isc),

    /* 0xF0 */ entry!(Beq, Relative,   2, false, beq),
    /* 0xF1 */ entry!(Sbc, IndirectY,  5, true,  sbc),
    /* 0xF2 */ entry!(Kil, Implied,    2, false, jam),
    /* 0xF3 */ entry!(Isc, IndirectY,  8, false, isc),
    /* 0xF4 */ entry!(Nop, ZeroPageX,  4, false, dop),
    /* 0xF5 */ entry!(Sbc, ZeroPageX,  4, false, sbc),
    /* 0xF6 */ entry!(Inc, ZeroPageX,  6, false, inc),
    /* 0xF7 */ entry!(Isc, ZeroPageX,  6, false, isc),
    /* 0xF8 */ entry!(Sed, Implied,    2, false, sed),
    /* 0xF9 */ entry!(Sbc, AbsoluteY,  4, true,  sbc),
    /* 0xFA */ entry!(Nop, Implied,    2, false, dop),
    /* 0xFB */ entry!(Isc, AbsoluteY,  7, false, isc),
    /* 0xFC */ entry!(Nop, AbsoluteX,  4, true,  dop),
    /* 0xFD */ entry!(Sbc, AbsoluteX,  4, true,  sbc),
    /* 0xFE */ entry!(Inc, AbsoluteX,  7, false, inc),
    /* 0xFF */ entry!(Isc, AbsoluteX,  7, false, isc),
];
