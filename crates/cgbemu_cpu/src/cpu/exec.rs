mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::error::ExecutionFault;

use super::decode::Instr;
use super::{Cpu, Flags};

impl Cpu {
    /// Execute a decoded instruction whose opcode byte has already been
    /// fetched.
    pub(super) fn exec_instr(&mut self, instr: Instr) -> Result<(), ExecutionFault> {
        match instr {
            Instr::Nop => {}
            Instr::Stop => self.exec_stop()?,
            Instr::Halt => self.exec_halt(),
            Instr::Di => self.exec_di(),
            Instr::Ei => self.exec_ei(),

            Instr::Ld { dst, src } => self.exec_ld(dst, src)?,
            Instr::LdPairImm(pair) => self.exec_ld_pair_imm(pair)?,
            Instr::LdIndirectA(ind) => self.exec_ld_indirect_a(ind)?,
            Instr::LdAIndirect(ind) => self.exec_ld_a_indirect(ind)?,
            Instr::LdAbsSp => self.exec_ld_abs_sp()?,
            Instr::LdAbsA => self.exec_ld_abs_a()?,
            Instr::LdAAbs => self.exec_ld_a_abs()?,
            Instr::LdHighA(high) => self.exec_ld_high_a(high)?,
            Instr::LdAHigh(high) => self.exec_ld_a_high(high)?,
            Instr::LdSpHl => self.exec_ld_sp_hl(),
            Instr::LdHlSpOffset => self.exec_ld_hl_sp_offset()?,
            Instr::AddSpOffset => self.exec_add_sp_offset()?,

            Instr::Alu { op, src } => self.exec_alu(op, src)?,
            Instr::Inc(operand) => self.exec_inc8(operand)?,
            Instr::Dec(operand) => self.exec_dec8(operand)?,
            Instr::IncPair(pair) => self.exec_inc16(pair),
            Instr::DecPair(pair) => self.exec_dec16(pair),
            Instr::AddHl(pair) => self.exec_add_hl(pair),
            Instr::RotateA(op) => self.exec_rotate_a(op),
            Instr::Daa => self.exec_daa(),
            Instr::Cpl => self.exec_cpl(),
            Instr::Scf => self.exec_scf(),
            Instr::Ccf => self.exec_ccf(),

            Instr::Jp(cond) => self.exec_jp(cond)?,
            Instr::JpHl => self.exec_jp_hl(),
            Instr::Jr(cond) => self.exec_jr(cond)?,
            Instr::Call(cond) => self.exec_call(cond)?,
            Instr::Ret(cond) => self.exec_ret(cond)?,
            Instr::Reti => self.exec_reti()?,
            Instr::Rst(vector) => self.exec_rst(vector)?,
            Instr::Push(pair) => self.exec_push(pair)?,
            Instr::Pop(pair) => self.exec_pop(pair)?,

            Instr::Prefix => self.step_cb()?,
        }
        Ok(())
    }

    /// Overwrite the whole flag byte after an 8-bit arithmetic or logic
    /// operation: Z from `result`, N from `subtract`, H and C from the
    /// helper's carries.
    #[inline]
    pub(super) fn set_alu_flags(&mut self, result: u8, subtract: bool, carries: Flags) {
        let mut f = Flags::empty();
        f.set_zero(result == 0);
        f.set_subtract(subtract);
        f.set_half_carry(carries.half_carry());
        f.set_carry(carries.carry());
        self.regs.f = f;
    }
}
