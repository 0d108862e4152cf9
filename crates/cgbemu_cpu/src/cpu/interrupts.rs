use crate::error::ExecutionFault;

use super::Cpu;

/// Interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Cycles spent entering an interrupt handler.
pub(super) const INTERRUPT_CYCLES: u32 = 5;
/// VBlank, LCD STAT, Timer, Serial, Joypad.
pub const INTERRUPT_LINES: u8 = 5;

impl Cpu {
    /// Interrupt lines that are both requested and enabled.
    ///
    /// IE and IF are plain memory in this core; peeking them costs no
    /// cycles.
    #[inline]
    pub(super) fn pending_interrupts(&self) -> u8 {
        self.memory[IE_ADDR] & self.memory[IF_ADDR] & 0x1F
    }

    /// Raise interrupt line `index` (0 = VBlank … 4 = Joypad) in IF.
    /// Indices past the joypad line are ignored.
    pub fn request_interrupt(&mut self, index: u8) {
        if index >= INTERRUPT_LINES {
            log::warn!("ignoring request for interrupt line {index}");
            return;
        }
        self.memory[IF_ADDR] |= 1 << index;
    }

    /// Leave HALT or STOP.
    pub fn wake(&mut self) {
        self.halted = false;
        self.stopped = false;
    }

    /// Lowest pending interrupt line if it should be serviced now. Also
    /// leaves HALT whenever any line is pending, even with IME clear.
    pub(super) fn poll_interrupt(&mut self) -> Option<u8> {
        let pending = self.pending_interrupts();
        if pending == 0 {
            return None;
        }
        self.halted = false;
        if !self.ime {
            return None;
        }
        Some(pending.trailing_zeros() as u8)
    }

    /// Push PC and jump to the handler for line `index`.
    pub(super) fn service_interrupt(&mut self, index: u8) -> Result<(), ExecutionFault> {
        self.ime = false;
        self.halted = false;

        // EI; HALT with a line already pending: HALT set the bug flag, but
        // the interrupt wins before the next fetch. Return to the HALT
        // opcode so it runs again after the handler.
        let pc = if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        let vector = 0x0040 + u16::from(index) * 8;
        log::debug!(
            "interrupt: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            index,
            vector,
            pc,
            self.regs.sp,
        );

        self.idle();
        self.push16(pc)?;
        self.memory[IF_ADDR] &= !(1 << index);
        self.idle();
        self.regs.pc = vector;
        Ok(())
    }

    /// Apply delayed IME change requested by EI.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
