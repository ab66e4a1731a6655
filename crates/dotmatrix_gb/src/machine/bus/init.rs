use super::GameBoyBus;

impl GameBoyBus {
    /// Seed the IO space with the DMG post-boot-ROM register values.
    ///
    /// The PPU and timer initialise their own registers; this covers the
    /// bytes that live directly in `memory` (sound defaults included, since
    /// software reads them even though the APU itself is not emulated).
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        // Serial.
        self.serial.sb = 0x00;
        self.serial.sc = 0x7E;

        self.if_reg = 0x00;
        self.ie_reg = 0x00;

        // Sound register defaults.
        self.memory[0xFF10] = 0x80;
        self.memory[0xFF11] = 0xBF;
        self.memory[0xFF12] = 0xF3;
        self.memory[0xFF13] = 0xFF;
        self.memory[0xFF14] = 0xBF;
        self.memory[0xFF16] = 0x3F;
        self.memory[0xFF17] = 0x00;
        self.memory[0xFF18] = 0xFF;
        self.memory[0xFF19] = 0xBF;
        self.memory[0xFF1A] = 0x7F;
        self.memory[0xFF1B] = 0xFF;
        self.memory[0xFF1C] = 0x9F;
        self.memory[0xFF1D] = 0xFF;
        self.memory[0xFF1E] = 0xBF;
        self.memory[0xFF20] = 0xFF;
        self.memory[0xFF21] = 0x00;
        self.memory[0xFF22] = 0x00;
        self.memory[0xFF23] = 0xBF;
        self.memory[0xFF24] = 0x77;
        self.memory[0xFF25] = 0xF3;
        self.memory[0xFF26] = 0xF1;

        // DMA reads back the last source page; 0xFF before any transfer.
        self.memory[0xFF46] = 0xFF;
    }
}
