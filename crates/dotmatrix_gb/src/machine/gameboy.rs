use dotmatrix_common::key::Key;
use dotmatrix_common::Color;

use crate::cpu::{Cpu, CpuError};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::cartridge::CartridgeError;
use super::{GameBoyBus, CYCLES_PER_FRAME};

/// High-level Game Boy machine.
///
/// Single owner of the CPU core and the bus; every unit the bus holds
/// (PPU, timer, serial, joypad, cartridge) is reached through it, which is
/// what keeps the CPU<->bus reference cycle out of the type system: the
/// CPU borrows the bus only for the duration of each `step`.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus = GameBoyBus::default();
    }

    /// Insert a cartridge. PC already points at 0x0100, the post-boot-ROM
    /// entry point.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), CartridgeError> {
        self.bus.load_rom(rom)
    }

    /// Run one CPU step and advance the timer and PPU by exactly the
    /// cycles it consumed. Interrupts they raise are visible to the next
    /// step.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let cycles = self.cpu.step(&mut self.bus)?;
        self.bus.tick(cycles);
        Ok(cycles)
    }

    /// Step the machine for one frame worth of time (70224 T-cycles).
    pub fn step_frame(&mut self) -> Result<(), CpuError> {
        let mut cycles = 0;
        while cycles < CYCLES_PER_FRAME {
            cycles += self.step()?;
        }
        Ok(())
    }

    /// The 160x144 framebuffer as 0xAARRGGBB pixels, row-major. Stable
    /// between VBlanks; frontends normally sample it once per frame.
    pub fn framebuffer(&self) -> &[u32] {
        self.bus.ppu.framebuffer()
    }

    /// Copy the framebuffer into an RGB24 byte buffer (the `App` screen
    /// format).
    pub fn video_frame(&self, buffer: &mut [u8]) {
        let framebuffer = self.bus.ppu.framebuffer();
        let pixels = (buffer.len() / 3).min(SCREEN_WIDTH * SCREEN_HEIGHT);
        for (i, &argb) in framebuffer[..pixels].iter().enumerate() {
            let (r, g, b) = Color::from_argb(argb).rgb();
            buffer[i * 3] = r;
            buffer[i * 3 + 1] = g;
            buffer[i * 3 + 2] = b;
        }
    }

    /// Bytes the program pushed out of the serial port (how blargg-style
    /// test ROMs report their verdict).
    pub fn serial_output(&self) -> &[u8] {
        &self.bus.serial.output
    }

    /// Map a frontend key event onto the joypad matrix:
    /// Z/X are A/B, A/S are Select/Start, arrows are the d-pad.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Right => self.bus.joypad_set_dpad_bit(0, pressed),
            Key::Left => self.bus.joypad_set_dpad_bit(1, pressed),
            Key::Up => self.bus.joypad_set_dpad_bit(2, pressed),
            Key::Down => self.bus.joypad_set_dpad_bit(3, pressed),
            Key::Z => self.bus.joypad_set_button_bit(0, pressed),
            Key::X => self.bus.joypad_set_button_bit(1, pressed),
            Key::A => self.bus.joypad_set_button_bit(2, pressed),
            Key::S => self.bus.joypad_set_button_bit(3, pressed),
            _ => {}
        }
    }
}
