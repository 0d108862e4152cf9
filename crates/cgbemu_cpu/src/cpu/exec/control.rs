use crate::cpu::decode::Cond;
use crate::cpu::Cpu;
use crate::error::ExecutionFault;

impl Cpu {
    /// `None` is the unconditional form.
    #[inline]
    pub(in crate::cpu) fn condition(&self, cond: Option<Cond>) -> bool {
        cond.map_or(true, |c| c.holds(self.regs.f))
    }

    pub(in crate::cpu) fn exec_jp(&mut self, cond: Option<Cond>) -> Result<(), ExecutionFault> {
        let addr = self.fetch16()?;
        if self.condition(cond) {
            self.idle();
            self.regs.pc = addr;
        }
        Ok(())
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    /// The displacement is relative to the address following the operand.
    pub(in crate::cpu) fn exec_jr(&mut self, cond: Option<Cond>) -> Result<(), ExecutionFault> {
        let offset = self.fetch8()? as i8;
        if self.condition(cond) {
            self.idle();
            self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(offset));
        }
        Ok(())
    }
}
