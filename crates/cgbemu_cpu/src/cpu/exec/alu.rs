use crate::cpu::alu::{self, AluOp, ShiftOp};
use crate::cpu::decode::{Operand, Pair};
use crate::cpu::{Cpu, Flags};
use crate::error::ExecutionFault;

impl Cpu {
    pub(in crate::cpu) fn exec_alu(
        &mut self,
        op: AluOp,
        src: Operand,
    ) -> Result<(), ExecutionFault> {
        let value = self.read_operand(src)?;
        let (result, carries) = alu::alu8(op, self.regs.a, value, self.regs.f.carry());
        if op.stores_result() {
            self.regs.a = result;
        }
        self.set_alu_flags(result, op.is_subtract(), carries);
        Ok(())
    }

    /// RLCA, RRCA, RLA, RRA. Unlike their CB counterparts these always clear
    /// Z.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, op: ShiftOp) {
        debug_assert!(matches!(
            op,
            ShiftOp::Rlc | ShiftOp::Rrc | ShiftOp::Rl | ShiftOp::Rr
        ));
        let (result, carries) = alu::shift(op, self.regs.a, self.regs.f.carry());
        self.regs.a = result;
        self.regs.f = carries;
    }

    pub(in crate::cpu) fn exec_add_hl(&mut self, pair: Pair) {
        let value = self.pair(pair);
        self.idle();
        let (result, carries) = alu::add16(self.regs.hl(), value);
        self.regs.set_hl(result);

        // Z is preserved.
        self.regs.f.set_subtract(false);
        self.regs.f.set_half_carry(carries.half_carry());
        self.regs.f.set_carry(carries.carry());
    }

    pub(in crate::cpu) fn exec_add_sp_offset(&mut self) -> Result<(), ExecutionFault> {
        let offset = self.fetch8()? as i8;
        self.idle();
        self.idle();
        let (result, carries) = alu::add16_signed(self.regs.sp, offset);
        self.regs.sp = result;
        self.regs.f = carries;
        Ok(())
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_offset(&mut self) -> Result<(), ExecutionFault> {
        let offset = self.fetch8()? as i8;
        self.idle();
        let (result, carries) = alu::add16_signed(self.regs.sp, offset);
        self.regs.set_hl(result);
        self.regs.f = carries;
        Ok(())
    }

    pub(in crate::cpu) fn exec_daa(&mut self) {
        let (result, flags) = alu::daa(self.regs.a, self.regs.f);
        self.regs.a = result;
        self.regs.f = flags;
    }

    pub(in crate::cpu) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.f.insert(Flags::SUBTRACT | Flags::HALF_CARRY);
    }

    pub(in crate::cpu) fn exec_scf(&mut self) {
        self.regs.f.set_subtract(false);
        self.regs.f.set_half_carry(false);
        self.regs.f.set_carry(true);
    }

    pub(in crate::cpu) fn exec_ccf(&mut self) {
        let carry = self.regs.f.carry();
        self.regs.f.set_subtract(false);
        self.regs.f.set_half_carry(false);
        self.regs.f.set_carry(!carry);
    }
}
