use crate::cpu::decode::{Cond, StackPair};
use crate::cpu::Cpu;
use crate::error::ExecutionFault;

impl Cpu {
    pub(in crate::cpu) fn exec_push(&mut self, pair: StackPair) -> Result<(), ExecutionFault> {
        let value = match pair {
            StackPair::Bc => self.regs.bc(),
            StackPair::De => self.regs.de(),
            StackPair::Hl => self.regs.hl(),
            StackPair::Af => self.regs.af(),
        };
        self.push16(value)
    }

    pub(in crate::cpu) fn exec_pop(&mut self, pair: StackPair) -> Result<(), ExecutionFault> {
        let value = self.pop16()?;
        match pair {
            StackPair::Bc => self.regs.set_bc(value),
            StackPair::De => self.regs.set_de(value),
            StackPair::Hl => self.regs.set_hl(value),
            // The low nibble of F is dropped here.
            StackPair::Af => self.regs.set_af(value),
        }
        Ok(())
    }

    pub(in crate::cpu) fn exec_call(&mut self, cond: Option<Cond>) -> Result<(), ExecutionFault> {
        let addr = self.fetch16()?;
        if self.condition(cond) {
            self.push16(self.regs.pc)?;
            self.regs.pc = addr;
        }
        Ok(())
    }

    pub(in crate::cpu) fn exec_ret(&mut self, cond: Option<Cond>) -> Result<(), ExecutionFault> {
        if cond.is_some() {
            // Conditional returns spend a cycle evaluating the condition.
            self.idle();
        }
        if self.condition(cond) {
            self.regs.pc = self.pop16()?;
            self.idle();
        }
        Ok(())
    }

    pub(in crate::cpu) fn exec_reti(&mut self) -> Result<(), ExecutionFault> {
        self.exec_ret(None)?;
        self.ime = true;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        Ok(())
    }

    pub(in crate::cpu) fn exec_rst(&mut self, vector: u8) -> Result<(), ExecutionFault> {
        self.push16(self.regs.pc)?;
        self.regs.pc = u16::from(vector);
        Ok(())
    }
}
