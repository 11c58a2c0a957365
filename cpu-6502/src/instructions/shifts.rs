//! Shifts and rotates. Accumulator and memory variants share one body via
//! `Cpu::rmw_operand`/`write_rmw_result`, which resolve to the accumulator
//! itself rather than a bus address when the instruction uses `Accumulator`
//! addressing.

use crate::cpu::Cpu;
use crate::opcodes::Mode;
use crate::registers::StatusFlags;

/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu, mode: Mode) {
    let (target, value) = cpu.rmw_operand(mode);
    let carry_out = value & 0x80 != 0;
    let result = value << 1;
    cpu.p.set_flag(StatusFlags::CARRY, carry_out);
    cpu.update_zero_and_negative(result);
    cpu.write_rmw_result(target, result);
}

/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu, mode: Mode) {
    let (target, value) = cpu.rmw_operand(mode);
    let carry_out = value & 0x01 != 0;
    let result = value >> 1;
    cpu.p.set_flag(StatusFlags::CARRY, carry_out);
    cpu.update_zero_and_negative(result);
    cpu.write_rmw_result(target, result);
}

/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu, mode: Mode) {
    let (target, value) = cpu.rmw_operand(mode);
    let carry_in = cpu.p.carry();
    let carry_out = value & 0x80 != 0;
    let result = (value << 1) | carry_in;
    cpu.p.set_flag(StatusFlags::CARRY, carry_out);
    cpu.update_zero_and_negative(result);
    cpu.write_rmw_result(target, result);
}

/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu, mode: Mode) {
    let (target, value) = cpu.rmw_operand(mode);
    let carry_in = cpu.p.carry();
    let carry_out = value & 0x01 != 0;
    let result = (value >> 1) | (carry_in << 7);
    cpu.p.set_flag(StatusFlags::CARRY, carry_out);
    cpu.update_zero_and_negative(result);
    cpu.write_rmw_result(target, result);
}
