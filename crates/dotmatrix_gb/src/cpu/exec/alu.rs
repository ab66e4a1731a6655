use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// The 0x80-0xBF block: ADD/ADC/SUB/SBC/AND/XOR/OR/CP against a
    /// register or (HL).
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.alu_dispatch(operation, value);

        if src == 6 {
            8
        } else {
            4
        }
    }

    /// The d8 forms of the same eight operations.
    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let operation = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        self.alu_dispatch(operation, value);
        8
    }

    #[inline]
    fn alu_dispatch(&mut self, operation: u8, value: u8) {
        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    /// RLCA / RRCA / RLA / RRA. Unlike their CB twins these always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        let a = self.regs.a;
        let (result, carry_out) = match opcode {
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            0x17 => ((a << 1) | u8::from(self.get_flag(Flag::C)), a & 0x80 != 0),
            0x1F => {
                let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, a & 0x01 != 0)
            }
            _ => unreachable!(),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        let value = match opcode {
            0x09 => self.regs.bc(),
            0x19 => self.regs.de(),
            0x29 => self.regs.hl(),
            0x39 => self.regs.sp,
            _ => unreachable!(),
        };
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        4
    }
}
