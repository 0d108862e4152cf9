use crate::cpu::decode::{HighAddr, Indirect, Operand, Pair};
use crate::cpu::Cpu;
use crate::error::ExecutionFault;

/// Base of the high page used by the LDH forms.
const HIGH_PAGE: u16 = 0xFF00;

impl Cpu {
    /// Register/memory/immediate transfers. Flags are never touched.
    pub(in crate::cpu) fn exec_ld(
        &mut self,
        dst: Operand,
        src: Operand,
    ) -> Result<(), ExecutionFault> {
        debug_assert!(
            !(dst == Operand::HlInd && src == Operand::HlInd),
            "LD (HL),(HL) is HALT"
        );
        let value = self.read_operand(src)?;
        self.write_operand(dst, value)
    }

    pub(in crate::cpu) fn exec_ld_pair_imm(&mut self, pair: Pair) -> Result<(), ExecutionFault> {
        let value = self.fetch16()?;
        self.set_pair(pair, value);
        Ok(())
    }

    /// Resolve the address of an indirect load, applying the HL+/HL- side
    /// effect.
    fn indirect_addr(&mut self, ind: Indirect) -> u16 {
        match ind {
            Indirect::Bc => self.regs.bc(),
            Indirect::De => self.regs.de(),
            Indirect::HlInc => self.regs.hl_inc(),
            Indirect::HlDec => self.regs.hl_dec(),
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a(
        &mut self,
        ind: Indirect,
    ) -> Result<(), ExecutionFault> {
        let addr = self.indirect_addr(ind);
        self.write8(addr, self.regs.a)
    }

    pub(in crate::cpu) fn exec_ld_a_indirect(
        &mut self,
        ind: Indirect,
    ) -> Result<(), ExecutionFault> {
        let addr = self.indirect_addr(ind);
        self.regs.a = self.read8(addr)?;
        Ok(())
    }

    pub(in crate::cpu) fn exec_ld_abs_sp(&mut self) -> Result<(), ExecutionFault> {
        let addr = self.fetch16()?;
        let [lo, hi] = self.regs.sp.to_le_bytes();
        self.write8(addr, lo)?;
        self.write8(addr.wrapping_add(1), hi)
    }

    pub(in crate::cpu) fn exec_ld_abs_a(&mut self) -> Result<(), ExecutionFault> {
        let addr = self.fetch16()?;
        self.write8(addr, self.regs.a)
    }

    pub(in crate::cpu) fn exec_ld_a_abs(&mut self) -> Result<(), ExecutionFault> {
        let addr = self.fetch16()?;
        self.regs.a = self.read8(addr)?;
        Ok(())
    }

    fn high_addr(&mut self, high: HighAddr) -> Result<u16, ExecutionFault> {
        let offset = match high {
            HighAddr::Imm => self.fetch8()?,
            HighAddr::C => self.regs.c,
        };
        Ok(HIGH_PAGE | u16::from(offset))
    }

    pub(in crate::cpu) fn exec_ld_high_a(&mut self, high: HighAddr) -> Result<(), ExecutionFault> {
        let addr = self.high_addr(high)?;
        self.write8(addr, self.regs.a)
    }

    pub(in crate::cpu) fn exec_ld_a_high(&mut self, high: HighAddr) -> Result<(), ExecutionFault> {
        let addr = self.high_addr(high)?;
        self.regs.a = self.read8(addr)?;
        Ok(())
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self) {
        self.idle();
        self.regs.sp = self.regs.hl();
    }
}
