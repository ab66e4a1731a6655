use super::{Bus, Cpu};

impl Cpu {
    /// Service a pending unmasked interrupt, if any.
    ///
    /// A nonzero `IF & IE` always clears HALT, even with IME disabled.
    /// When IME is set as well, the lowest-numbered pending source wins:
    /// VBlank, LCD STAT, Timer, Serial, Joypad. Dispatch clears IME and the
    /// source's IF bit, pushes PC, and jumps to the fixed vector.
    ///
    /// Returns `Some(20)` when an interrupt was dispatched.
    pub(super) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let pending = bus.read8(0xFFFF) & bus.read8(0xFF0F) & 0x1F;
        if pending == 0 {
            return None;
        }

        self.halted = false;

        if !self.ime {
            return None;
        }

        let index = pending.trailing_zeros() as u8;
        let vector = 0x0040 + u16::from(index) * 8;

        self.ime = false;
        let iflags = bus.read8(0xFF0F);
        bus.write8(0xFF0F, iflags & !(1 << index));

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector;

        log::debug!(
            "interrupt dispatch: idx={index} vector={vector:#06x} from pc={pc:#06x} sp={sp:#06x}",
            sp = self.regs.sp,
        );

        Some(20)
    }

    /// Walk the EI countdown after an executed instruction. EI arms the
    /// counter at 2, so IME goes high after the instruction that follows
    /// EI, never during it.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay > 0 {
            self.ime_enable_delay -= 1;
            if self.ime_enable_delay == 0 {
                self.ime = true;
            }
        }
    }
}
