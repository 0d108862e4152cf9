use crate::error::ExecutionFault;

use super::decode::{Operand, Pair};
use super::Cpu;

impl Cpu {
    /// Debit one cycle from the running budget.
    ///
    /// `execute` only starts an action whose full cost fits in the budget, so
    /// this never runs dry while an instruction is in flight.
    #[inline]
    fn tick(&mut self) {
        debug_assert!(self.remaining > 0, "cycle budget overrun");
        self.remaining = self.remaining.saturating_sub(1);
        self.cycles += 1;
    }

    /// One internal cycle with no memory access (ALU work on 16-bit values,
    /// stack pointer adjustment, branch target load).
    #[inline]
    pub(super) fn idle(&mut self) {
        self.tick();
    }

    /// Read the byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8(&mut self) -> Result<u8, ExecutionFault> {
        let value = self.memory.read(self.regs.pc)?;
        if self.halt_bug {
            // The first fetch after the HALT bug does not increment PC.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        self.tick();
        Ok(value)
    }

    /// Little-endian 16-bit immediate.
    #[inline]
    pub(super) fn fetch16(&mut self) -> Result<u16, ExecutionFault> {
        let lo = self.fetch8()?;
        let hi = self.fetch8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    #[inline]
    pub(super) fn read8(&mut self, addr: u16) -> Result<u8, ExecutionFault> {
        let value = self.memory.read(addr)?;
        self.tick();
        Ok(value)
    }

    #[inline]
    pub(super) fn write8(&mut self, addr: u16, value: u8) -> Result<(), ExecutionFault> {
        self.memory.write(addr, value)?;
        self.tick();
        Ok(())
    }

    /// Pre-decrement SP and store one byte there.
    #[inline]
    pub(super) fn push8(&mut self, value: u8) -> Result<(), ExecutionFault> {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(self.regs.sp, value)
    }

    /// Load the byte at SP and post-increment SP.
    #[inline]
    pub(super) fn pop8(&mut self) -> Result<u8, ExecutionFault> {
        let value = self.read8(self.regs.sp)?;
        self.regs.sp = self.regs.sp.wrapping_add(1);
        Ok(value)
    }

    /// Push a word, high byte first, so that memory[SP] holds the low byte
    /// afterwards. Costs one cycle for the pointer adjustment plus one per
    /// byte.
    #[inline]
    pub(super) fn push16(&mut self, value: u16) -> Result<(), ExecutionFault> {
        let [hi, lo] = value.to_be_bytes();
        self.idle();
        self.push8(hi)?;
        self.push8(lo)
    }

    #[inline]
    pub(super) fn pop16(&mut self) -> Result<u16, ExecutionFault> {
        let lo = self.pop8()?;
        let hi = self.pop8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Read an 8-bit operand. Memory and immediate operands cost a cycle.
    #[inline]
    pub(super) fn read_operand(&mut self, operand: Operand) -> Result<u8, ExecutionFault> {
        Ok(match operand {
            Operand::B => self.regs.b,
            Operand::C => self.regs.c,
            Operand::D => self.regs.d,
            Operand::E => self.regs.e,
            Operand::H => self.regs.h,
            Operand::L => self.regs.l,
            Operand::HlInd => self.read8(self.regs.hl())?,
            Operand::A => self.regs.a,
            Operand::Imm => self.fetch8()?,
        })
    }

    /// Write an 8-bit operand. (HL) costs a cycle.
    #[inline]
    pub(super) fn write_operand(
        &mut self,
        operand: Operand,
        value: u8,
    ) -> Result<(), ExecutionFault> {
        match operand {
            Operand::B => self.regs.b = value,
            Operand::C => self.regs.c = value,
            Operand::D => self.regs.d = value,
            Operand::E => self.regs.e = value,
            Operand::H => self.regs.h = value,
            Operand::L => self.regs.l = value,
            Operand::HlInd => self.write8(self.regs.hl(), value)?,
            Operand::A => self.regs.a = value,
            Operand::Imm => unreachable!("immediate operand used as a destination"),
        }
        Ok(())
    }

    #[inline]
    pub(super) fn pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::Bc => self.regs.bc(),
            Pair::De => self.regs.de(),
            Pair::Hl => self.regs.hl(),
            Pair::Sp => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_pair(&mut self, pair: Pair, value: u16) {
        match pair {
            Pair::Bc => self.regs.set_bc(value),
            Pair::De => self.regs.set_de(value),
            Pair::Hl => self.regs.set_hl(value),
            Pair::Sp => self.regs.sp = value,
        }
    }
}
