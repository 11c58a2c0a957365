//! A minimal CLI host for the `cpu-6502` core: loads a flat PRG image,
//! wires it to stub PPU/controller implementations, and drives the CPU
//! through a master-cycle scheduler while logging each instruction at
//! trace level.
//!
//! There's no PPU, APU, or real mapper here -- this binary exists to drive
//! the interpreter end to end, not to play games. The scheduler still
//! advances a master-cycle counter and hands the CPU a target to catch up
//! to, the same shape a real front end would use to interleave the CPU
//! with a PPU that ticks on its own divisor.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cpu_6502::constants::{NTSC_CPU_CLOCK_DIVISOR, NTSC_PPU_CLOCK_DIVISOR};
use cpu_6502::controller::Controller;
use cpu_6502::traits::{ControllerPort, Mapper, PpuRegisters};
use cpu_6502::{Bus, Cpu};

/// One PPU scanline (341 PPU cycles), expressed in master cycles. The
/// scheduler advances in quanta of this size, the same granularity a real
/// PPU stepping alongside the CPU would be polled at.
const MASTER_CYCLES_PER_SCANLINE: u64 = 341 * NTSC_PPU_CLOCK_DIVISOR;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a flat PRG-ROM image, loaded starting at $8000 and mirrored
    /// into $C000 if it's 16KB or smaller.
    rom: PathBuf,

    /// Stop after this many scheduler ticks (one tick advances the master
    /// clock by one scanline's worth of cycles).
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,

    /// Address to break on, in hex (e.g. `ffd2`). Checked once per
    /// scheduler tick, so execution may run a little past the instruction
    /// that first lands on it. Execution also stops if the CPU jams on an
    /// illegal opcode.
    #[arg(long, value_parser = parse_hex_u16)]
    break_at: Option<u16>,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| e.to_string())
}

/// A PPU stub: accepts register reads/writes and OAM DMA transfers without
/// modeling any rendering side effects, and never raises NMI.
struct NullPpu;

impl PpuRegisters for NullPpu {
    fn read_register(&mut self, _index: u8) -> u8 {
        0
    }

    fn write_register(&mut self, _index: u8, _value: u8) {}

    fn write_oam_dma(&mut self, _page: &[u8; 256]) {}

    fn take_nmi_edge(&mut self) -> bool {
        false
    }
}

/// A flat-image mapper: PRG-ROM starting at $8000, mirrored if the image is
/// 16KB or smaller. No PRG-RAM, no bank switching, no mapper IRQ.
struct FlatRom {
    prg: Vec<u8>,
}

impl FlatRom {
    fn load(bytes: &[u8]) -> FlatRom {
        FlatRom { prg: bytes.to_vec() }
    }
}

impl Mapper for FlatRom {
    fn cpu_read(&self, addr: u16) -> Option<u8> {
        if addr < 0x8000 || self.prg.is_empty() {
            return None;
        }
        let offset = (addr - 0x8000) as usize % self.prg.len();
        Some(self.prg[offset])
    }

    fn cpu_write(&mut self, _addr: u16, _value: u8) -> bool {
        false
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let prg = match fs::read(&cli.rom) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("failed to read {}: {error}", cli.rom.display());
            return ExitCode::FAILURE;
        }
    };

    let bus = Bus::new_shared(
        Box::new(NullPpu),
        Box::new(FlatRom::load(&prg)),
        [
            Box::new(Controller::new()) as Box<dyn ControllerPort>,
            Box::new(Controller::new()) as Box<dyn ControllerPort>,
        ],
    );
    let mut cpu = Cpu::new(bus);

    log::info!("reset vector: {:#06x}", cpu.pc);
    log::info!(
        "master clock divisors: cpu={NTSC_CPU_CLOCK_DIVISOR} ppu={NTSC_PPU_CLOCK_DIVISOR}"
    );

    let mut master_cycles = 0u64;
    let mut ticks = 0u64;
    loop {
        if ticks >= cli.max_ticks {
            log::info!("stopped after {ticks} ticks (max-ticks reached)");
            break;
        }
        if let Some(break_at) = cli.break_at {
            if cpu.pc == break_at {
                log::info!("hit breakpoint at {:#06x} after {ticks} ticks", break_at);
                break;
            }
        }

        let pc_before = cpu.pc;
        master_cycles += MASTER_CYCLES_PER_SCANLINE;
        let cpu_cycles_elapsed = cpu.step_until(master_cycles);
        ticks += 1;

        if cpu_cycles_elapsed > 0 && cpu.pc == pc_before {
            log::warn!("CPU jammed at {:#06x}, stopping", pc_before);
            break;
        }
    }

    log::info!(
        "final state: A={:#04x} X={:#04x} Y={:#04x} S={:#04x} PC={:#06x} cycles={}",
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.s,
        cpu.pc,
        cpu.cycles
    );

    ExitCode::SUCCESS
}
