//! Trait boundaries to the components this crate treats as external
//! collaborators: the PPU's register file, the cartridge mapper, and the
//! two controller ports.

/// The eight PPU-visible registers living at $2000-$2007 (mirrored through
/// $3FFF by the bus). Implemented by the PPU, not by this crate.
pub trait PpuRegisters {
    /// Read register `index` (0-7), with any side effects the real
    /// hardware has (e.g. reading $2002 clears the vblank flag and the
    /// write-toggle latch).
    fn read_register(&mut self, index: u8) -> u8;

    /// Write register `index` (0-7).
    fn write_register(&mut self, index: u8, value: u8);

    /// Receive the 256 bytes collected by an OAM DMA transfer.
    fn write_oam_dma(&mut self, page: &[u8; 256]);

    /// Edge-triggered NMI line. Implementations should clear their internal
    /// latch when this returns `true`, since the CPU only calls this once
    /// per poll and treats a `true` result as "the edge fired and hasn't
    /// been serviced yet."
    fn take_nmi_edge(&mut self) -> bool;
}

/// The cartridge-side mapper, visible to the CPU only through reads/writes
/// in $4020-$FFFF (plus, conceptually, PRG RAM below that on some boards --
/// left to the mapper to decide what it accepts).
pub trait Mapper {
    /// `None` means open bus: the bus falls back to the last value it saw.
    fn cpu_read(&self, addr: u16) -> Option<u8>;

    /// Returns whether the write was accepted. A mapper that ignores writes
    /// to unmapped regions should return `false` rather than panic.
    fn cpu_write(&mut self, addr: u16, value: u8) -> bool;

    /// Level-triggered mapper IRQ (e.g. an MMC3 scanline counter).
    fn irq_line(&self) -> bool {
        false
    }
}

/// One of the two controller ports at $4016/$4017.
pub trait ControllerPort {
    /// Latch or release the strobe bit written to $4016 bit 0. While the
    /// strobe is held high, every read returns the state of button A.
    fn write_strobe(&mut self, latch: bool);

    /// Shift out the next button bit, MSB-first relative to read order
    /// (A, B, Select, Start, Up, Down, Left, Right).
    fn read_bit(&mut self) -> u8;
}
