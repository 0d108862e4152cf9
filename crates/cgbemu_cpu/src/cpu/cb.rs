use crate::error::ExecutionFault;

use super::alu;
use super::decode::{self, CbInstr};
use super::{Cpu, Flags};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    pub(super) fn step_cb(&mut self) -> Result<(), ExecutionFault> {
        let opcode = self.fetch8()?;

        match decode::lookup_cb(opcode) {
            CbInstr::Shift { op, target } => {
                let value = self.read_operand(target)?;
                let (result, carries) = alu::shift(op, value, self.regs.f.carry());
                self.write_operand(target, result)?;
                self.set_alu_flags(result, false, carries);
            }
            CbInstr::Bit { bit, target } => {
                let value = self.read_operand(target)?;
                let carry = self.regs.f.carry();
                let mut f = Flags::HALF_CARRY;
                f.set_zero(value & (1 << bit) == 0);
                f.set_carry(carry);
                self.regs.f = f;
            }
            CbInstr::Res { bit, target } => {
                let value = self.read_operand(target)?;
                self.write_operand(target, value & !(1 << bit))?;
            }
            CbInstr::Set { bit, target } => {
                let value = self.read_operand(target)?;
                self.write_operand(target, value | (1 << bit))?;
            }
        }
        Ok(())
    }
}
