use crate::cpu::alu;
use crate::cpu::decode::{Operand, Pair};
use crate::cpu::Cpu;
use crate::error::ExecutionFault;

impl Cpu {
    /// INC r / INC (HL). Updates Z, N and H; C is left alone.
    pub(in crate::cpu) fn exec_inc8(&mut self, operand: Operand) -> Result<(), ExecutionFault> {
        let value = self.read_operand(operand)?;
        let (result, half) = alu::inc8(value);
        self.write_operand(operand, result)?;

        self.regs.f.set_zero(result == 0);
        self.regs.f.set_subtract(false);
        self.regs.f.set_half_carry(half);
        Ok(())
    }

    /// DEC r / DEC (HL). Updates Z, N and H; C is left alone.
    pub(in crate::cpu) fn exec_dec8(&mut self, operand: Operand) -> Result<(), ExecutionFault> {
        let value = self.read_operand(operand)?;
        let (result, half) = alu::dec8(value);
        self.write_operand(operand, result)?;

        self.regs.f.set_zero(result == 0);
        self.regs.f.set_subtract(true);
        self.regs.f.set_half_carry(half);
        Ok(())
    }

    pub(in crate::cpu) fn exec_inc16(&mut self, pair: Pair) {
        let value = self.pair(pair).wrapping_add(1);
        self.idle();
        self.set_pair(pair, value);
    }

    pub(in crate::cpu) fn exec_dec16(&mut self, pair: Pair) {
        let value = self.pair(pair).wrapping_sub(1);
        self.idle();
        self.set_pair(pair, value);
    }
}
