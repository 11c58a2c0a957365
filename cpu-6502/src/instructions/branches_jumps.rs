//! Conditional branches, unconditional jumps, subroutine call/return, BIT,
//! and the two interrupt-flavored instructions (BRK/RTI) that live at the
//! CPU's control-flow seam.

use crate::cpu::Cpu;
use crate::opcodes::Mode;
use crate::registers::StatusFlags;

/// Shared by all eight conditional branches: the operand byte (and its
/// page-cross status) is always fetched, since the hardware always reads
/// it, but the extra taken/page-cross cycles and the `pc` update only
/// happen when `taken` is true.
fn branch(cpu: &mut Cpu, taken: bool) {
    let (target, page_crossed) = cpu.resolve_relative();
    if !taken {
        return;
    }
    cpu.pc = target;
    cpu.add_extra_cycle(1);
    if page_crossed {
        cpu.add_extra_cycle(1);
    }
}

/// Function: branch on N=0
pub fn bpl(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, !cpu.p.contains(StatusFlags::NEGATIVE));
}

/// Function: branch on N=1
pub fn bmi(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, cpu.p.contains(StatusFlags::NEGATIVE));
}

/// Function: branch on V=0
pub fn bvc(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, !cpu.p.contains(StatusFlags::OVERFLOW));
}

/// Function: branch on V=1
pub fn bvs(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, cpu.p.contains(StatusFlags::OVERFLOW));
}

/// Function: branch on C=0
pub fn bcc(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, !cpu.p.contains(StatusFlags::CARRY));
}

/// Function: branch on C=1
pub fn bcs(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, cpu.p.contains(StatusFlags::CARRY));
}

/// Function: branch on Z=0
pub fn bne(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, !cpu.p.contains(StatusFlags::ZERO));
}

/// Function: branch on Z=1
pub fn beq(cpu: &mut Cpu, _mode: Mode) {
    branch(cpu, cpu.p.contains(StatusFlags::ZERO));
}

/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu, mode: Mode) {
    let value = cpu.read_operand(mode);
    let result = cpu.a & value;
    cpu.p.set_flag(StatusFlags::ZERO, result == 0);
    cpu.p.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    cpu.p.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
}

/// Function: PC:={adr}
pub fn jmp(cpu: &mut Cpu, mode: Mode) {
    cpu.pc = cpu.resolve_store_address(mode);
}

/// Indirect jump, reproducing the hardware page-wrap bug: if the pointer's
/// low byte is `$FF`, the high byte is fetched from the start of the same
/// page instead of spilling into the next one.
pub fn jmp_indirect(cpu: &mut Cpu, _mode: Mode) {
    cpu.pc = cpu.resolve_indirect_jmp_target();
}

/// Function: (S)-:=PC-1 PC:={adr}
pub fn jsr(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.resolve_store_address(mode);
    cpu.push_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = address;
}

/// Function: PC:=+(S)+1
pub fn rts(cpu: &mut Cpu, _mode: Mode) {
    let address = cpu.pull_u16();
    cpu.pc = address.wrapping_add(1);
}

/// Function: P,PC:=+(S). Unlike RTS, the pulled PC is used as-is: it
/// already points at the instruction the interrupt was taken on top of.
pub fn rti(cpu: &mut Cpu, _mode: Mode) {
    let status_byte = cpu.pull_u8();
    cpu.p = StatusFlags::from_pulled_byte(status_byte);
    cpu.pc = cpu.pull_u16();
}

/// Function: (S)-:=PC+1,P|0x30 PC:=($FFFE)
pub fn brk(cpu: &mut Cpu, _mode: Mode) {
    // BRK's operand byte is never read, but the hardware still advances
    // past it: the return address pushed to the stack points beyond it.
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.service_brk();
}
