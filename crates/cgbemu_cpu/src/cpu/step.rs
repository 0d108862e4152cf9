use crate::error::ExecutionFault;

use super::decode::{self, Instr};
use super::interrupts::INTERRUPT_CYCLES;
use super::Cpu;

/// The next thing the CPU will do, decided without consuming cycles.
#[derive(Clone, Copy, Debug)]
enum Action {
    /// HALT/STOP: burn one cycle.
    Idle,
    Interrupt(u8),
    Instruction { pc: u16, opcode: u8, instr: Instr },
}

impl Cpu {
    /// Run instructions until `budget` cycles are spent and return the
    /// number of cycles actually used.
    ///
    /// An instruction is only started when its whole cost fits in what is
    /// left of the budget, so the result never exceeds `budget` and equals it
    /// whenever the budget covers a whole number of instructions.
    ///
    /// On a fault the CPU is left exactly as after the last completed
    /// instruction; [`Cpu::cycles`] still counts everything executed.
    pub fn execute(&mut self, budget: u32) -> Result<u32, ExecutionFault> {
        self.remaining = budget;

        while self.remaining > 0 {
            let (action, cost) = self.next_action()?;
            if cost > self.remaining {
                break;
            }
            self.run_action(action, cost)?;
        }

        let used = budget - self.remaining;
        self.remaining = 0;
        Ok(used)
    }

    /// Execute exactly one instruction (or interrupt entry, or idle cycle)
    /// and return its cost.
    pub fn step(&mut self) -> Result<u32, ExecutionFault> {
        let (action, cost) = self.next_action()?;
        self.remaining = cost;
        self.run_action(action, cost)?;
        Ok(cost)
    }

    fn next_action(&mut self) -> Result<(Action, u32), ExecutionFault> {
        if self.stopped {
            return Ok((Action::Idle, 1));
        }
        if let Some(index) = self.poll_interrupt() {
            return Ok((Action::Interrupt(index), INTERRUPT_CYCLES));
        }
        if self.halted {
            return Ok((Action::Idle, 1));
        }

        let pc = self.regs.pc;
        let opcode = self.memory.read(pc)?;
        let Some(instr) = decode::lookup(opcode) else {
            log::error!(
                "unknown opcode 0x{opcode:02X} at PC=0x{pc:04X} after {cycles} cycles (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                cycles = self.cycles,
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
            return Err(ExecutionFault::UnknownOpcode { pc, opcode });
        };

        let mut cost = instr.cycles(self.regs.f);
        if instr == Instr::Prefix {
            // After the HALT bug the prefix fetch leaves PC in place, so the
            // second byte is read from the same address.
            let cb_addr = if self.halt_bug { pc } else { pc.wrapping_add(1) };
            cost += decode::lookup_cb(self.memory.read(cb_addr)?).cycles();
        }
        Ok((Action::Instruction { pc, opcode, instr }, cost))
    }

    fn run_action(&mut self, action: Action, cost: u32) -> Result<(), ExecutionFault> {
        let start = self.remaining;

        match action {
            Action::Idle => self.idle(),
            Action::Interrupt(index) => self.service_interrupt(index)?,
            Action::Instruction { pc, opcode, instr } => {
                if self.config.trace {
                    log::trace!(
                        "PC=0x{pc:04X} op=0x{opcode:02X} {instr:?} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X}",
                        af = self.regs.af(),
                        bc = self.regs.bc(),
                        de = self.regs.de(),
                        hl = self.regs.hl(),
                        sp = self.regs.sp,
                    );
                }
                let fetched = self.fetch8()?;
                debug_assert_eq!(fetched, opcode);
                self.exec_instr(instr)?;
                self.apply_ime_delay();
            }
        }

        debug_assert_eq!(
            start - self.remaining,
            cost,
            "cycle cost mismatch for {action:?}"
        );
        Ok(())
    }
}
