//! Single-flag set/clear instructions, and NOP (which also backs every
//! undocumented SKB/SKW opcode -- see `dop` in `opcodes.rs`).

use crate::cpu::Cpu;
use crate::opcodes::Mode;
use crate::registers::StatusFlags;

/// Function: C:=0
pub fn clc(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::CARRY, false);
}

/// Function: C:=1
pub fn sec(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::CARRY, true);
}

/// Function: D:=0
pub fn cld(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::DECIMAL, false);
}

/// Function: D:=1. Stored and otherwise inert: the 2A03 omits decimal mode,
/// so ADC/SBC never consult this flag.
pub fn sed(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::DECIMAL, true);
}

/// Function: I:=0
pub fn cli(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
}

/// Function: I:=1
pub fn sei(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
}

/// Function: V:=0
pub fn clv(cpu: &mut Cpu, _mode: Mode) {
    cpu.p.set_flag(StatusFlags::OVERFLOW, false);
}

/// No operation. Also backs every undocumented SKB ("skip byte") and SKW
/// ("skip word") opcode, which only need to consume their declared operand
/// bytes -- including paying the page-cross cycle where the table says
/// to -- and otherwise have no effect.
pub fn nop(cpu: &mut Cpu, mode: Mode) {
    if mode != Mode::Implied {
        cpu.read_operand(mode);
    }
}
