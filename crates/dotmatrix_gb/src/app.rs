use dotmatrix_common::app::App;
use dotmatrix_common::key::Key;

use crate::{GameBoy, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend-facing wrapper around the Game Boy machine.
///
/// Implements the shared `App` trait so any frontend can drive the
/// emulator one frame per `update`, plus some periodic state logging that
/// has proven useful when a ROM sits on a blank screen.
#[derive(Default)]
pub struct GameBoyApp {
    should_exit: bool,
    pub gb: GameBoy,
    frame_counter: u64,
    last_lcdc: u8,
}

impl App for GameBoyApp {
    fn init(&mut self) {
        log::info!("Game Boy init");
        self.last_lcdc = self.gb.bus.ppu.lcdc();
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if self.should_exit {
            return;
        }

        if let Err(err) = self.gb.step_frame() {
            // Fatal decode error; the frame rendered so far stays visible.
            log::error!("emulation stopped: {err}");
            self.should_exit = true;
        }

        self.gb.video_frame(screen_state);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let lcdc = self.gb.bus.ppu.lcdc();
        if lcdc != self.last_lcdc {
            log::debug!("LCDC changed: {:#04x} -> {:#04x}", self.last_lcdc, lcdc);
            self.last_lcdc = lcdc;
        }

        if self.frame_counter == 1 || self.frame_counter % 60 == 0 {
            let regs = &self.gb.cpu.regs;
            let ppu = &self.gb.bus.ppu;
            log::info!(
                "frame={} pc={:#06x} sp={:#06x} af={:#06x} bc={:#06x} de={:#06x} hl={:#06x} \
                 ime={} halted={} IF={:#04x} IE={:#04x} LCDC={:#04x} STAT={:#04x} LY={} SCX={} SCY={}",
                self.frame_counter,
                regs.pc,
                regs.sp,
                regs.af(),
                regs.bc(),
                regs.de(),
                regs.hl(),
                self.gb.cpu.ime,
                self.gb.cpu.halted,
                self.gb.bus.if_reg,
                self.gb.bus.ie_reg,
                lcdc,
                ppu.stat(),
                ppu.ly(),
                ppu.scx(),
                ppu.scy(),
            );
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        log::debug!("key event: {key:?} pressed={is_down}");
        self.gb.handle_key(key, is_down);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Game Boy exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "dotmatrix".to_string()
    }
}
