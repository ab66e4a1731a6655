use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// Condition-code decode shared by JR/JP/CALL/RET cc:
    /// 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    fn cc_condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            3 => self.get_flag(Flag::C),
            _ => false,
        }
    }

    pub(super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cc = (opcode >> 3) & 0x03;
        self.jr(bus, self.cc_condition(cc))
    }

    pub(super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cc = (opcode >> 3) & 0x03;
        self.jp_cond(bus, self.cc_condition(cc))
    }

    pub(super) fn exec_jp_a16<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.fetch16(bus);
        16
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cc = (opcode >> 3) & 0x03;
        self.call_cond(bus, self.cc_condition(cc))
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cc = (opcode >> 3) & 0x03;
        self.ret_cond(bus, self.cc_condition(cc))
    }
}
