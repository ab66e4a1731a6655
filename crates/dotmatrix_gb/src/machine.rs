mod bus;
mod cartridge;
mod gameboy;
mod ppu;
mod serial;
mod timer;

#[cfg(test)]
mod tests;

pub(crate) use bus::GameBoyBus;
pub use cartridge::CartridgeError;
pub use gameboy::GameBoy;

/// Total addressable memory (64 KiB).
pub(crate) const MEMORY_SIZE: usize = 0x10000;

/// T-cycles per DMG frame: 154 scanlines of 456 cycles (59.73 Hz).
pub(crate) const CYCLES_PER_FRAME: u32 = 70_224;
