use crate::cpu::Cpu;
use crate::error::ExecutionFault;

impl Cpu {
    pub(in crate::cpu) fn exec_stop(&mut self) -> Result<(), ExecutionFault> {
        // STOP is a two-byte instruction; the second byte is ignored.
        let _padding = self.fetch8()?;
        self.stopped = true;
        self.halted = false;
        Ok(())
    }

    pub(in crate::cpu) fn exec_halt(&mut self) {
        if !self.ime && self.pending_interrupts() != 0 {
            // HALT bug: the CPU does not halt and the next opcode byte is
            // read twice.
            self.halt_bug = true;
            return;
        }
        self.halted = true;
    }

    pub(in crate::cpu) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }

    pub(in crate::cpu) fn exec_ei(&mut self) {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
    }
}
