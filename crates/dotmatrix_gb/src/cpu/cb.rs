use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Decode and execute a 0xCB-prefixed instruction.
    ///
    /// The second byte is fully regular: bits 7-6 pick the category
    /// (rotate/shift, BIT, RES, SET), bits 5-3 the sub-op or bit index,
    /// bits 2-0 the target register with 6 = (HL).
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let category = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let target = cb & 0x07;

        match category {
            0 => {
                let mut value = self.read_reg8(bus, target);
                let cycles = if target == 6 { 16 } else { 8 };

                match y {
                    // RLC
                    0 => {
                        let carry = value & 0x80 != 0;
                        value = value.rotate_left(1);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // RRC
                    1 => {
                        let carry = value & 0x01 != 0;
                        value = value.rotate_right(1);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // RL
                    2 => {
                        let carry_out = value & 0x80 != 0;
                        value = (value << 1) | u8::from(self.get_flag(Flag::C));
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry_out);
                    }
                    // RR
                    3 => {
                        let carry_out = value & 0x01 != 0;
                        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
                        value = (value >> 1) | carry_in;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry_out);
                    }
                    // SLA
                    4 => {
                        let carry = value & 0x80 != 0;
                        value <<= 1;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // SRA: arithmetic shift, bit 7 sticks.
                    5 => {
                        let carry = value & 0x01 != 0;
                        value = (value >> 1) | (value & 0x80);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    // SWAP
                    6 => {
                        value = value.rotate_left(4);
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                    }
                    // SRL
                    7 => {
                        let carry = value & 0x01 != 0;
                        value >>= 1;
                        self.clear_flags();
                        self.set_flag(Flag::Z, value == 0);
                        self.set_flag(Flag::C, carry);
                    }
                    _ => unreachable!(),
                }

                self.write_reg8(bus, target, value);
                cycles
            }
            // BIT b,r: no write-back, C preserved.
            1 => {
                let value = self.read_reg8(bus, target);
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);

                if target == 6 {
                    12
                } else {
                    8
                }
            }
            // RES b,r
            2 => {
                let value = self.read_reg8(bus, target) & !(1 << y);
                self.write_reg8(bus, target, value);
                if target == 6 {
                    16
                } else {
                    8
                }
            }
            // SET b,r
            3 => {
                let value = self.read_reg8(bus, target) | (1 << y);
                self.write_reg8(bus, target, value);
                if target == 6 {
                    16
                } else {
                    8
                }
            }
            _ => unreachable!(),
        }
    }
}
