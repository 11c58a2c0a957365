//! Binary-only ALU add/subtract. The 2A03 omits decimal mode, so ADC and
//! SBC share the same add-with-carry core; SBC just complements its operand
//! first, which is the standard two's-complement trick (letting the carry
//! flag supply the "+1").

use crate::cpu::Cpu;
use crate::opcodes::Mode;
use crate::registers::StatusFlags;

/// Add with Carry
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu, mode: Mode) {
    let operand = cpu.read_operand(mode);
    apply_add(cpu, operand);
}

/// Subtract with Carry
/// Function: A:=A-{adr}-(1-C)
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu, mode: Mode) {
    let operand = cpu.read_operand(mode);
    apply_add(cpu, !operand);
}

/// Shared by ADC, SBC (via `!operand`), and the undocumented RRA/ISC combo
/// opcodes, which fold a rotate/increment into an ADC/SBC on the same
/// cycle.
pub(crate) fn apply_add(cpu: &mut Cpu, operand: u8) {
    let carry_in = cpu.p.carry() as u16;
    let sum = cpu.a as u16 + operand as u16 + carry_in;
    let result = sum as u8;
    let overflow = (cpu.a ^ result) & (operand ^ result) & 0x80 != 0;
    cpu.p.set_flag(StatusFlags::CARRY, sum > 0xFF);
    cpu.p.set_flag(StatusFlags::OVERFLOW, overflow);
    cpu.a = result;
    cpu.update_zero_and_negative(cpu.a);
}
