//! Address-space routing between the CPU and its collaborators: work RAM,
//! the PPU register window, the OAM DMA port, the two controller ports,
//! and the cartridge mapper.

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::memory_range;
use crate::traits::{ControllerPort, Mapper, PpuRegisters};

/// A bus is shared between the CPU and anything else that needs to read its
/// work RAM (e.g. a debugger). `Rc<RefCell<..>>` matches the rest of this
/// crate's single-threaded, cooperatively-scheduled ownership model.
pub type SharedBus = Rc<RefCell<Bus>>;

pub struct Bus {
    work_ram: [u8; 2048],
    ppu: Box<dyn PpuRegisters>,
    mapper: Box<dyn Mapper>,
    controllers: [Box<dyn ControllerPort>; 2],
    /// Last byte placed on the bus by any read or write, returned for
    /// unmapped reads instead of a fabricated zero.
    open_bus: u8,
    /// Set by a write to $4014; consumed by the CPU at its next instruction
    /// boundary to perform the actual 256-byte transfer.
    pending_oam_dma_page: Option<u8>,
}

impl Bus {
    pub fn new(
        ppu: Box<dyn PpuRegisters>,
        mapper: Box<dyn Mapper>,
        controllers: [Box<dyn ControllerPort>; 2],
    ) -> Bus {
        Bus {
            work_ram: [0; 2048],
            ppu,
            mapper,
            controllers,
            open_bus: 0,
            pending_oam_dma_page: None,
        }
    }

    pub fn new_shared(
        ppu: Box<dyn PpuRegisters>,
        mapper: Box<dyn Mapper>,
        controllers: [Box<dyn ControllerPort>; 2],
    ) -> SharedBus {
        Rc::new(RefCell::new(Bus::new(ppu, mapper, controllers)))
    }

    pub fn read_u8(&mut self, addr: u16) -> u8 {
        let value = match addr {
            a if memory_range::RAM_MIRRORED.contains(a) => self.work_ram[(a & 0x07FF) as usize],
            a if memory_range::PPU_REGISTERS_MIRRORED.contains(a) => {
                self.ppu.read_register((a & 0x0007) as u8)
            }
            memory_range::OAM_DMA => self.open_bus,
            memory_range::CONTROLLER_1 => self.controllers[0].read_bit(),
            memory_range::CONTROLLER_2 => self.controllers[1].read_bit(),
            a if memory_range::APU_AND_IO_REGISTERS.contains(a) => self.open_bus,
            a if memory_range::DISABLED_APU_IO_FEATURES.contains(a) => self.open_bus,
            a => self.mapper.cpu_read(a).unwrap_or(self.open_bus),
        };
        self.open_bus = value;
        value
    }

    pub fn read_u16(&mut self, addr: u16) -> u16 {
        let lo = self.read_u8(addr);
        let hi = self.read_u8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub fn write_u8(&mut self, addr: u16, value: u8) {
        self.open_bus = value;
        match addr {
            a if memory_range::RAM_MIRRORED.contains(a) => {
                self.work_ram[(a & 0x07FF) as usize] = value;
            }
            a if memory_range::PPU_REGISTERS_MIRRORED.contains(a) => {
                self.ppu.write_register((a & 0x0007) as u8, value);
            }
            memory_range::OAM_DMA => {
                self.pending_oam_dma_page = Some(value);
            }
            memory_range::CONTROLLER_1 => {
                self.controllers[0].write_strobe(value & 0x01 != 0);
                self.controllers[1].write_strobe(value & 0x01 != 0);
            }
            memory_range::CONTROLLER_2 => {
                // APU frame-counter writes land here too; out of scope for
                // this crate, so nothing to forward.
            }
            a if memory_range::APU_AND_IO_REGISTERS.contains(a) => {}
            a if memory_range::DISABLED_APU_IO_FEATURES.contains(a) => {}
            a => {
                if !self.mapper.cpu_write(a, value) {
                    log::warn!("write to unmapped cartridge address {:#06x} ignored", a);
                }
            }
        }
    }

    /// Consume a pending OAM DMA request, if any. The caller (the CPU) is
    /// responsible for performing the actual 256-byte transfer through
    /// `read_u8` so mirroring and mapper-mapped pages are honored.
    pub fn take_pending_oam_dma(&mut self) -> Option<u8> {
        self.pending_oam_dma_page.take()
    }

    /// Non-consuming peek at a pending OAM DMA request, for save-state
    /// encoding.
    pub fn pending_oam_dma_page(&self) -> Option<u8> {
        self.pending_oam_dma_page
    }

    /// Restore a pending OAM DMA request, for save-state decoding.
    pub fn set_pending_oam_dma_page(&mut self, page: Option<u8>) {
        self.pending_oam_dma_page = page;
    }

    pub fn write_oam_dma(&mut self, bytes: &[u8; 256]) {
        self.ppu.write_oam_dma(bytes);
    }

    pub fn take_nmi_edge(&mut self) -> bool {
        self.ppu.take_nmi_edge()
    }

    pub fn mapper_irq_line(&self) -> bool {
        self.mapper.irq_line()
    }

    pub fn work_ram(&self) -> &[u8; 2048] {
        &self.work_ram
    }

    pub fn work_ram_mut(&mut self) -> &mut [u8; 2048] {
        &mut self.work_ram
    }
}
