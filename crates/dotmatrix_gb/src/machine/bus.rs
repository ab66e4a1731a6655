use super::cartridge::{Cartridge, CartridgeError};
use super::ppu::Ppu;
use super::serial::Serial;
use super::timer::Timer;
use super::MEMORY_SIZE;

mod dma;
mod init;
mod joypad;
mod mmio;
mod traits;

/// The memory bus: a flat 64 KiB backing store plus the units whose
/// registers are decoded out of it.
///
/// RAM-like regions (VRAM, WRAM, OAM, HRAM and the unclaimed IO bytes)
/// live directly in `memory`; cartridge ROM, the timer, the PPU register
/// file, serial and the joypad are routed to their owners by the address
/// decoder in `mmio`.
pub(crate) struct GameBoyBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    pub(crate) ppu: Ppu,
    pub(crate) serial: Serial,
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
    timer: Timer,
    cartridge: Option<Cartridge>,
    /// P1 group-select bits (bit 5 action, bit 4 direction; 0 selects).
    joyp_select: u8,
    /// Pressed-state masks with bit=1 meaning pressed:
    /// buttons bit0=A bit1=B bit2=Select bit3=Start,
    /// dpad bit0=Right bit1=Left bit2=Up bit3=Down.
    joyp_buttons: u8,
    joyp_dpad: u8,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            ppu: Ppu::new(),
            serial: Serial::default(),
            if_reg: 0,
            ie_reg: 0,
            timer: Timer::new(),
            cartridge: None,
            joyp_select: 0x00,
            joyp_buttons: 0x00,
            joyp_dpad: 0x00,
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl GameBoyBus {
    pub(super) fn load_rom(&mut self, rom: &[u8]) -> Result<(), CartridgeError> {
        let cart = Cartridge::from_bytes(rom)?;
        log::info!(
            "loaded cartridge: title={:?} type={:#04x} rom_size_code={:#04x} ram_size_code={:#04x} ({} bytes)",
            cart.title(),
            cart.cart_type(),
            cart.rom_size_code(),
            cart.ram_size_code(),
            rom.len(),
        );
        self.cartridge = Some(cart);
        Ok(())
    }

    /// Advance the bus-side units by a CPU step's cycle count: timer first,
    /// then PPU, so both have raised their interrupts before the CPU's next
    /// step samples IF.
    pub(crate) fn tick(&mut self, cycles: u32) {
        self.timer.tick(cycles, &mut self.if_reg);
        self.ppu.tick(cycles, &self.memory, &mut self.if_reg);
    }
}
