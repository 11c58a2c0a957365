//! The byte-exact save-state layout from the design doc: `A, X, Y, S, P,
//! PC_lo, PC_hi, cycles (u64 LE), work_ram[2048], pending_interrupts_byte,
//! oam_dma_pending_byte`, behind a 4-byte magic and a u16 version so an
//! incompatible future layout fails loudly instead of corrupting a CPU.
//!
//! This is a wire format, not an internal struct whose shape is free to
//! drift, so it's hand-encoded with `byteorder` against the documented
//! field order rather than left to a generic derive.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::cpu::Cpu;
use crate::error::LoadStateError;
use crate::registers::StatusFlags;

const MAGIC: [u8; 4] = *b"6502";
const VERSION: u16 = 1;
const WORK_RAM_LEN: usize = 2048;

/// `NMI`/`IRQ` latches live in the external PPU/mapper trait objects this
/// crate doesn't own, so there is nothing of this crate's own to persist
/// for them beyond whether an OAM DMA is queued. Bit 0 carries that flag
/// (the companion `oam_dma_pending_byte` carries the source page
/// verbatim, since a page value can legitimately be any of 0-255 and
/// doesn't leave a spare bit to double as a presence flag); the remaining
/// bits are reserved for a future version's own interrupt-latch state.
const OAM_DMA_PENDING_FLAG: u8 = 0x01;

pub fn encode(cpu: &Cpu) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + 2 + 6 + 8 + WORK_RAM_LEN + 2);
    out.extend_from_slice(&MAGIC);
    out.write_u16::<LittleEndian>(VERSION).unwrap();
    out.write_u8(cpu.a).unwrap();
    out.write_u8(cpu.x).unwrap();
    out.write_u8(cpu.y).unwrap();
    out.write_u8(cpu.s).unwrap();
    out.write_u8(cpu.p.bits()).unwrap();
    let [pc_lo, pc_hi] = cpu.pc.to_le_bytes();
    out.write_u8(pc_lo).unwrap();
    out.write_u8(pc_hi).unwrap();
    out.write_u64::<LittleEndian>(cpu.cycles).unwrap();
    out.extend_from_slice(cpu.bus.borrow().work_ram());
    let pending_oam_page = cpu.bus.borrow().pending_oam_dma_page();
    let pending_interrupts_byte = if pending_oam_page.is_some() {
        OAM_DMA_PENDING_FLAG
    } else {
        0
    };
    out.write_u8(pending_interrupts_byte).unwrap();
    out.write_u8(pending_oam_page.unwrap_or(0)).unwrap();
    out
}

pub fn decode(bytes: &[u8], cpu: &mut Cpu) -> Result<(), LoadStateError> {
    let minimum_len = 4 + 2 + 6 + 8 + WORK_RAM_LEN + 2;
    if bytes.len() < minimum_len {
        return Err(LoadStateError::Truncated {
            needed: minimum_len,
            got: bytes.len(),
        });
    }

    let mut cursor = Cursor::new(bytes);
    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic).unwrap();
    if magic != MAGIC {
        return Err(LoadStateError::BadMagic {
            found: magic,
            expected: MAGIC,
        });
    }

    let version = cursor.read_u16::<LittleEndian>().unwrap();
    if version != VERSION {
        return Err(LoadStateError::IncompatibleVersion {
            found: version,
            expected: VERSION,
        });
    }

    cpu.a = cursor.read_u8().unwrap();
    cpu.x = cursor.read_u8().unwrap();
    cpu.y = cursor.read_u8().unwrap();
    cpu.s = cursor.read_u8().unwrap();
    cpu.p = StatusFlags::from_bits_truncate(cursor.read_u8().unwrap());
    let pc_lo = cursor.read_u8().unwrap();
    let pc_hi = cursor.read_u8().unwrap();
    cpu.pc = u16::from_le_bytes([pc_lo, pc_hi]);
    cpu.cycles = cursor.read_u64::<LittleEndian>().unwrap();

    let mut work_ram = [0u8; WORK_RAM_LEN];
    cursor.read_exact(&mut work_ram).unwrap();
    cpu.bus.borrow_mut().work_ram_mut().copy_from_slice(&work_ram);

    let pending_interrupts_byte = cursor.read_u8().unwrap();
    let oam_page_byte = cursor.read_u8().unwrap();
    let pending_oam_page = if pending_interrupts_byte & OAM_DMA_PENDING_FLAG != 0 {
        Some(oam_page_byte)
    } else {
        None
    };
    cpu.bus.borrow_mut().set_pending_oam_dma_page(pending_oam_page);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::controller::Controller;
    use crate::traits::{ControllerPort, Mapper, PpuRegisters};

    struct StubPpu;
    impl PpuRegisters for StubPpu {
        fn read_register(&mut self, _index: u8) -> u8 {
            0
        }
        fn write_register(&mut self, _index: u8, _value: u8) {}
        fn write_oam_dma(&mut self, _page: &[u8; 256]) {}
        fn take_nmi_edge(&mut self) -> bool {
            false
        }
    }

    struct FlatRom {
        data: [u8; 0x8000],
    }
    impl Mapper for FlatRom {
        fn cpu_read(&self, addr: u16) -> Option<u8> {
            if addr >= 0x8000 {
                Some(self.data[(addr - 0x8000) as usize])
            } else {
                None
            }
        }
        fn cpu_write(&mut self, _addr: u16, _value: u8) -> bool {
            false
        }
    }

    fn make_cpu() -> Cpu {
        let bus = Bus::new_shared(
            Box::new(StubPpu),
            Box::new(FlatRom { data: [0; 0x8000] }),
            [Box::new(Controller::new()) as Box<dyn ControllerPort>, Box::new(Controller::new())],
        );
        Cpu::new(bus)
    }

    #[test]
    fn round_trips_register_and_memory_state() {
        let mut cpu = make_cpu();
        cpu.a = 0x11;
        cpu.x = 0x22;
        cpu.y = 0x33;
        cpu.s = 0xF0;
        cpu.pc = 0xBEEF;
        cpu.cycles = 123_456;
        cpu.bus.borrow_mut().write_u8(0x0001, 0xAB);

        let encoded = encode(&cpu);

        let mut restored = make_cpu();
        decode(&encoded, &mut restored).unwrap();

        assert_eq!(restored.a, 0x11);
        assert_eq!(restored.x, 0x22);
        assert_eq!(restored.y, 0x33);
        assert_eq!(restored.s, 0xF0);
        assert_eq!(restored.pc, 0xBEEF);
        assert_eq!(restored.cycles, 123_456);
        assert_eq!(restored.bus.borrow_mut().read_u8(0x0001), 0xAB);
    }

    #[test]
    fn round_trips_pending_oam_dma() {
        let mut cpu = make_cpu();
        cpu.bus.borrow_mut().write_u8(0x4014, 0x02);

        let encoded = encode(&cpu);

        let mut restored = make_cpu();
        decode(&encoded, &mut restored).unwrap();
        assert_eq!(restored.bus.borrow().pending_oam_dma_page(), Some(0x02));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut cpu = make_cpu();
        let mut encoded = encode(&cpu);
        encoded[0] = b'X';
        assert!(matches!(
            decode(&encoded, &mut cpu),
            Err(LoadStateError::BadMagic { .. })
        ));
    }

    #[test]
    fn rejects_truncated_buffer() {
        let mut cpu = make_cpu();
        let encoded = encode(&cpu);
        assert!(matches!(
            decode(&encoded[..8], &mut cpu),
            Err(LoadStateError::Truncated { .. })
        ));
    }
}
