use crate::cpu::Cpu;
use crate::opcodes::Mode;

/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, mode: Mode) {
    cpu.a = cpu.read_operand(mode);
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: {adr}:=A
/// Flags:
pub fn sta(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.resolve_store_address(mode);
    cpu.write_u8(address, cpu.a);
}

/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, mode: Mode) {
    cpu.x = cpu.read_operand(mode);
    cpu.update_zero_and_negative(cpu.x);
}

/// Function: {adr}:=X
/// Flags:
pub fn stx(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.resolve_store_address(mode);
    cpu.write_u8(address, cpu.x);
}

/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, mode: Mode) {
    cpu.y = cpu.read_operand(mode);
    cpu.update_zero_and_negative(cpu.y);
}

/// Function: {adr}:=Y
/// Flags:
pub fn sty(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.resolve_store_address(mode);
    cpu.write_u8(address, cpu.y);
}
