//! Bitwise accumulator ops, compares, and increment/decrement.

use crate::cpu::Cpu;
use crate::opcodes::Mode;
use crate::registers::StatusFlags;

/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.read_operand(mode);
    cpu.a &= value;
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.read_operand(mode);
    cpu.a |= value;
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.read_operand(mode);
    cpu.a ^= value;
    cpu.update_zero_and_negative(cpu.a);
}

/// Shared by CMP/CPX/CPY: compute `register - operand` in 16 bits so the
/// borrow out becomes the carry flag directly, with N/Z read from the low
/// byte of the result.
fn compare(cpu: &mut Cpu, register: u8, mode: Mode) {
    let value = cpu.read_operand(mode);
    let result = (register as u16).wrapping_sub(value as u16);
    cpu.p.set_flag(StatusFlags::CARRY, register >= value);
    cpu.update_zero_and_negative(result as u8);
}

/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu, mode: Mode) {
    compare(cpu, cpu.a, mode);
}

/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu, mode: Mode) {
    compare(cpu, cpu.x, mode);
}

/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu, mode: Mode) {
    compare(cpu, cpu.y, mode);
}

/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, mode: Mode) {
    let (address, value) = cpu.address_and_operand(mode);
    let result = value.wrapping_sub(1);
    cpu.write_u8(address, result);
    cpu.update_zero_and_negative(result);
}

/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, mode: Mode) {
    let (address, value) = cpu.address_and_operand(mode);
    let result = value.wrapping_add(1);
    cpu.write_u8(address, result);
    cpu.update_zero_and_negative(result);
}

/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
}

/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu, _mode: Mode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
}

/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
}

/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu, _mode: Mode) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
}
