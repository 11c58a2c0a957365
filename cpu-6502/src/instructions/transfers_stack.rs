use crate::cpu::Cpu;
use crate::opcodes::Mode;

/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
}

/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _mode: Mode) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _mode: Mode) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
}

/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _mode: Mode) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: X:=S
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.s;
    cpu.update_zero_and_negative(cpu.x);
}

/// Function: S:=X
/// Flags: (none -- unlike every other transfer, TXS does not touch N/Z)
pub fn txs(cpu: &mut Cpu, _mode: Mode) {
    cpu.s = cpu.x;
}

/// Function: A:=+(S)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu, _mode: Mode) {
    cpu.a = cpu.pull_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// Function: (S)-:=A
/// Flags:
pub fn pha(cpu: &mut Cpu, _mode: Mode) {
    cpu.push_u8(cpu.a);
}

/// Function: P:=+(S)
/// Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu, _mode: Mode) {
    let byte = cpu.pull_u8();
    cpu.p = crate::registers::StatusFlags::from_pulled_byte(byte);
}

/// Function: (S)-:=P
/// Flags:
pub fn php(cpu: &mut Cpu, _mode: Mode) {
    cpu.push_u8(cpu.p.to_push_byte(true));
}
