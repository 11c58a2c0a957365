//! The interpreter: registers, addressing-mode resolution, the
//! fetch/decode/execute loop, interrupt polling, and OAM DMA.

use crate::bus::SharedBus;
use crate::constants::{
    memory_range, InterruptVector, NTSC_CPU_CLOCK_DIVISOR, OAM_DMA_STALL_CYCLES_EVEN,
    OAM_DMA_STALL_CYCLES_ODD,
};
use crate::opcodes::{Mnemonic, Mode, OPCODE_TABLE};
use crate::registers::StatusFlags;

/// Whether `mnemonic` names one of the undocumented opcodes, for the
/// one-time execution warning in `Cpu::step`.
fn is_undocumented(mnemonic: Mnemonic) -> bool {
    matches!(
        mnemonic,
        Mnemonic::Slo
            | Mnemonic::Rla
            | Mnemonic::Sre
            | Mnemonic::Rra
            | Mnemonic::Sax
            | Mnemonic::Lax
            | Mnemonic::Dcp
            | Mnemonic::Isc
            | Mnemonic::Anc
            | Mnemonic::Alr
            | Mnemonic::Arr
            | Mnemonic::Xaa
            | Mnemonic::Axs
            | Mnemonic::Ahx
            | Mnemonic::Shy
            | Mnemonic::Shx
            | Mnemonic::Tas
            | Mnemonic::Las
            | Mnemonic::Kil
    )
}

/// Where a read-modify-write instruction's result is written back to: the
/// accumulator for the `Accumulator` addressing mode, or a bus address for
/// every other mode.
#[derive(Debug, Clone, Copy)]
pub enum RmwTarget {
    Accumulator,
    Memory(u16),
}

/// This struct implements the Ricoh 2A03's MOS 6502-derived CPU core.
///
/// http://www.6502.org/
/// https://wiki.nesdev.com/w/index.php/CPU
pub struct Cpu {
    pub bus: SharedBus,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub s: u8,
    pub p: StatusFlags,

    /// Total elapsed CPU cycles since construction. Used to decide OAM DMA
    /// stall parity and exposed for save-state round-tripping.
    pub cycles: u64,

    /// Scratch space written by addressing-mode resolution during the
    /// current instruction: whether the effective address crossed a page
    /// boundary, consulted by `step()` only for opcodes whose table entry
    /// says a page cross should add a cycle.
    page_crossed: bool,

    /// Scratch space written by branch instructions to report taken/taken
    /// cross-page cycles, since those don't fit the uniform
    /// addressing-mode page-cross rule every other instruction uses.
    extra_cycles: u8,

    /// One bit per opcode byte, set the first time an undocumented opcode
    /// is executed so its `log::warn!` only fires once per ROM run instead
    /// of flooding the log on a hot loop that uses one deliberately.
    warned_illegal: [bool; 256],
}

impl Cpu {
    /// Construct a CPU and immediately run the power-on reset sequence.
    pub fn new(bus: SharedBus) -> Cpu {
        let mut cpu = Cpu {
            bus,
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            s: 0xFF,
            p: StatusFlags::RESET,
            cycles: 0,
            page_crossed: false,
            extra_cycles: 0,
            warned_illegal: [false; 256],
        };
        cpu.reset();
        cpu
    }

    /// Mimic the hardware RESET line: three stack "pushes" that only
    /// decrement `S` without writing, interrupts disabled, PC loaded from
    /// the reset vector.
    pub fn reset(&mut self) {
        self.s = self.s.wrapping_sub(3);
        self.p.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
        self.pc = self.read_u16(InterruptVector::Reset.address());
        self.cycles += 7;
    }

    pub fn add_extra_cycle(&mut self, count: u8) {
        self.extra_cycles += count;
    }

    pub fn mark_page_crossed(&mut self) {
        self.page_crossed = true;
    }

    // -- Bus convenience wrappers -------------------------------------

    pub fn read_u8(&mut self, addr: u16) -> u8 {
        self.bus.borrow_mut().read_u8(addr)
    }

    pub fn read_u16(&mut self, addr: u16) -> u16 {
        self.bus.borrow_mut().read_u16(addr)
    }

    pub fn write_u8(&mut self, addr: u16, value: u8) {
        self.bus.borrow_mut().write_u8(addr, value);
    }

    fn peek_u8(&self) -> u8 {
        self.bus.borrow_mut().read_u8(self.pc)
    }

    fn next_u8(&mut self) -> u8 {
        let value = self.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn next_u16(&mut self) -> u16 {
        let value = self.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// Reads a little-endian pointer out of the zero page, wrapping the
    /// high-byte fetch back to the start of the zero page instead of
    /// spilling into page 1. This is the behavior `(zp,X)`/`(zp),Y`
    /// addressing actually has on hardware.
    fn read_u16_zero_page_wrapped(&mut self, zp: u8) -> u16 {
        let lo = self.read_u8(zp as u16);
        let hi = self.read_u8(zp.wrapping_add(1) as u16);
        u16::from_le_bytes([lo, hi])
    }

    // -- Stack ----------------------------------------------------------

    fn stack_address(&self) -> u16 {
        u16::from_le_bytes([self.s, memory_range::STACK_PAGE])
    }

    pub fn push_u8(&mut self, value: u8) {
        let address = self.stack_address();
        self.write_u8(address, value);
        self.s = self.s.wrapping_sub(1);
    }

    pub fn pull_u8(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        let address = self.stack_address();
        self.read_u8(address)
    }

    pub fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    pub fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    // -- Addressing modes -------------------------------------------------

    /// Resolve `mode` to an effective address, advancing `pc` past the
    /// operand bytes as it goes. Not valid for `Accumulator`, `Implied`,
    /// or `Indirect` (the latter is only used by `JMP` and resolved
    /// specially to reproduce its page-wrap bug).
    fn operand_address(&mut self, mode: Mode) -> u16 {
        match mode {
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            Mode::ZeroPage => self.next_u8() as u16,
            Mode::ZeroPageX => self.next_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.next_u8().wrapping_add(self.y) as u16,
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteX => {
                let base = self.next_u16();
                let address = base.wrapping_add(self.x as u16);
                if base & 0xFF00 != address & 0xFF00 {
                    self.page_crossed = true;
                }
                address
            }
            Mode::AbsoluteY => {
                let base = self.next_u16();
                let address = base.wrapping_add(self.y as u16);
                if base & 0xFF00 != address & 0xFF00 {
                    self.page_crossed = true;
                }
                address
            }
            Mode::IndirectX => {
                let zp = self.next_u8().wrapping_add(self.x);
                self.read_u16_zero_page_wrapped(zp)
            }
            Mode::IndirectY => {
                let zp = self.next_u8();
                let base = self.read_u16_zero_page_wrapped(zp);
                let address = base.wrapping_add(self.y as u16);
                if base & 0xFF00 != address & 0xFF00 {
                    self.page_crossed = true;
                }
                address
            }
            Mode::Accumulator | Mode::Implied | Mode::Indirect | Mode::Relative => {
                unreachable!("{:?} is resolved by its own instruction body", mode)
            }
        }
    }

    /// Read-only operand fetch, used by instructions that only need a
    /// value (loads, ALU ops, compares). For `Accumulator` mode this reads
    /// `A` directly without touching the bus.
    pub fn read_operand(&mut self, mode: Mode) -> u8 {
        if mode == Mode::Accumulator {
            return self.a;
        }
        let address = self.operand_address(mode);
        self.read_u8(address)
    }

    /// Address-and-value fetch for read-modify-write instructions that
    /// need both the effective address and the current value there.
    pub fn address_and_operand(&mut self, mode: Mode) -> (u16, u8) {
        let address = self.operand_address(mode);
        let value = self.read_u8(address);
        (address, value)
    }

    /// Address-only resolution for stores, which never read the
    /// destination (reading a PPU register as a side effect of a store
    /// would be wrong -- e.g. $2007 has a read side effect of its own).
    pub fn resolve_store_address(&mut self, mode: Mode) -> u16 {
        self.operand_address(mode)
    }

    /// Like `address_and_operand`, but accepts `Accumulator` mode as well,
    /// returning the write-back target alongside the current value.
    pub fn rmw_operand(&mut self, mode: Mode) -> (RmwTarget, u8) {
        if mode == Mode::Accumulator {
            (RmwTarget::Accumulator, self.a)
        } else {
            let (address, value) = self.address_and_operand(mode);
            (RmwTarget::Memory(address), value)
        }
    }

    pub fn write_rmw_result(&mut self, target: RmwTarget, value: u8) {
        match target {
            RmwTarget::Accumulator => self.a = value,
            RmwTarget::Memory(address) => self.write_u8(address, value),
        }
    }

    /// Resolves `Relative` addressing for branch instructions: the signed
    /// 8-bit offset applied to the program counter as it stands right
    /// after the operand byte. Reports whether the jump crosses a page
    /// (used for the "+1 extra if the branch crosses a page" rule, on top
    /// of the "+1 if taken" rule the branch instruction itself applies).
    pub fn resolve_relative(&mut self) -> (u16, bool) {
        let offset = self.next_u8() as i8;
        let base = self.pc;
        let target = base.wrapping_add(offset as u16);
        let page_crossed = base & 0xFF00 != target & 0xFF00;
        (target, page_crossed)
    }

    /// Used only by `JMP (ind)`: reproduces the hardware bug where, if the
    /// pointer's low byte is `0xFF`, the high byte is fetched from the
    /// start of the same page instead of the next one.
    pub fn resolve_indirect_jmp_target(&mut self) -> u16 {
        let pointer = self.next_u16();
        let lo = self.read_u8(pointer);
        let hi_address = if pointer & 0x00FF == 0x00FF {
            pointer & 0xFF00
        } else {
            pointer.wrapping_add(1)
        };
        let hi = self.read_u8(hi_address);
        u16::from_le_bytes([lo, hi])
    }

    // -- Flag helpers used throughout the instruction set ------------------

    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.p.update_zero_and_negative(value);
    }

    // -- Interrupts and DMA ------------------------------------------------

    fn poll_and_service_interrupts(&mut self) -> Option<u32> {
        if self.bus.borrow_mut().take_nmi_edge() {
            log::debug!("servicing NMI");
            self.service_interrupt(InterruptVector::NonMaskableInterrupt, false);
            return Some(7);
        }
        let irq_asserted = self.bus.borrow().mapper_irq_line();
        if irq_asserted && !self.p.contains(StatusFlags::INTERRUPT_DISABLE) {
            log::debug!("servicing IRQ");
            self.service_interrupt(InterruptVector::IrqOrBrk, false);
            return Some(7);
        }
        None
    }

    fn service_interrupt(&mut self, vector: InterruptVector, break_flag: bool) {
        self.push_u16(self.pc);
        let status_byte = self.p.to_push_byte(break_flag);
        self.push_u8(status_byte);
        self.p.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
        self.pc = self.read_u16(vector.address());
    }

    /// Software interrupt entry point used by the `BRK` instruction body,
    /// which needs the extra padding-byte PC advance `BRK` applies before
    /// pushing, but otherwise shares this dispatch.
    pub fn service_brk(&mut self) {
        self.service_interrupt(InterruptVector::IrqOrBrk, true);
    }

    fn service_oam_dma(&mut self, page: u8) -> u32 {
        let base = (page as u16) << 8;
        let mut buffer = [0u8; 256];
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = self.bus.borrow_mut().read_u8(base.wrapping_add(i as u16));
        }
        self.bus.borrow_mut().write_oam_dma(&buffer);
        let stall = if self.cycles % 2 == 0 {
            OAM_DMA_STALL_CYCLES_EVEN
        } else {
            OAM_DMA_STALL_CYCLES_ODD
        };
        log::debug!("OAM DMA from page {:#04x}, stalling {} cycles", page, stall);
        self.cycles += stall as u64;
        stall
    }

    /// Execute exactly one instruction (or service one pending interrupt,
    /// or one OAM DMA stall) and return the number of CPU cycles it took.
    pub fn step(&mut self) -> u32 {
        if let Some(page) = self.bus.borrow_mut().take_pending_oam_dma() {
            return self.service_oam_dma(page);
        }

        if let Some(cycles) = self.poll_and_service_interrupts() {
            self.cycles += cycles as u64;
            return cycles;
        }

        let opcode = self.next_u8();
        let info = &OPCODE_TABLE[opcode as usize];
        self.page_crossed = false;
        self.extra_cycles = 0;

        if is_undocumented(info.mnemonic) && !self.warned_illegal[opcode as usize] {
            self.warned_illegal[opcode as usize] = true;
            log::warn!(
                "executing undocumented opcode {:#04x} ({:?}) at {:#06x}",
                opcode,
                info.mnemonic,
                self.pc.wrapping_sub(1)
            );
        }

        log::trace!(
            "{:#06x}: {:#04x} {:?} {:?}",
            self.pc.wrapping_sub(1),
            opcode,
            info.mnemonic,
            info.mode
        );

        (info.op)(self, info.mode);

        let mut cycles = info.cycles as u32 + self.extra_cycles as u32;
        if info.page_cross_extra && self.page_crossed {
            cycles += 1;
        }
        self.cycles += cycles as u64;
        cycles
    }

    /// Run until `predicate` returns true, checked before each step. Handy
    /// for tests that want to stop at a known terminal instruction.
    pub fn run_until<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Cpu) -> bool,
    {
        while !predicate(self) {
            self.step();
        }
    }

    /// Run whole instructions until `self.cycles`, converted to master
    /// cycles via `NTSC_CPU_CLOCK_DIVISOR`, reaches `target_master_cycles`.
    /// This is the half of the scheduler's `cpu.step_until`/`ppu.step_until`
    /// interleaving that belongs to the CPU: the outer scheduler advances a
    /// shared master-cycle counter and asks each device to catch up to it,
    /// never partway through an instruction. Returns the number of CPU
    /// cycles actually elapsed during this call.
    pub fn step_until(&mut self, target_master_cycles: u64) -> u32 {
        let mut elapsed = 0u32;
        while self.cycles * NTSC_CPU_CLOCK_DIVISOR < target_master_cycles {
            elapsed += self.step();
        }
        elapsed
    }

    /// Peek at the next opcode byte without consuming it, for callers that
    /// want to stop before executing a sentinel instruction (`run_until`
    /// predicates use this to halt on a trailing `JAM`/`KIL` opcode without
    /// ever stepping into it).
    pub fn peek_next_opcode(&self) -> u8 {
        self.peek_u8()
    }
}
