use super::{Bus, Cpu, CpuError};

impl Cpu {
    /// Run one CPU step and return the T-cycles it consumed.
    ///
    /// In order: dispatch a pending unmasked interrupt (20 cycles), idle if
    /// halted (4 cycles), or fetch and execute one instruction. The caller
    /// must advance the rest of the machine by exactly the returned count
    /// before stepping again.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if let Some(cycles) = self.handle_interrupts(bus) {
            return Ok(cycles);
        }

        if self.halted {
            // One machine cycle per step until IF & IE becomes nonzero.
            return Ok(4);
        }

        let opcode_pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let cycles = self.exec_opcode(bus, opcode, opcode_pc)?;
        self.apply_ime_delay();
        Ok(cycles)
    }
}
