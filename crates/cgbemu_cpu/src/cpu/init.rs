use crate::memory::Memory;

use super::{Cpu, CpuConfig, Flags, Model, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            memory: Memory::new(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            remaining: 0,
            cycles: 0,
            config,
        };
        cpu.apply_boot_state();
        cpu
    }

    /// Reset the CPU to its power-on state and clear memory.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.halt_bug = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.remaining = 0;
        self.cycles = 0;
        self.apply_boot_state();
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Cycles consumed since construction or the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Initialize registers to the state the boot ROM leaves behind when it
    /// hands control to the program at 0x0100.
    fn apply_boot_state(&mut self) {
        self.regs = match self.config.model {
            Model::Cgb => Registers {
                a: 0x11,
                f: Flags::ZERO,
                b: 0x00,
                c: 0x00,
                d: 0xFF,
                e: 0x56,
                h: 0x00,
                l: 0x0D,
                sp: 0xFFFE,
                pc: crate::ENTRY_POINT,
            },
            Model::Dmg => Registers {
                a: 0x01,
                f: Flags::from_byte(0xB0),
                b: 0x00,
                c: 0x13,
                d: 0x00,
                e: 0xD8,
                h: 0x01,
                l: 0x4D,
                sp: 0xFFFE,
                pc: crate::ENTRY_POINT,
            },
        };
    }
}
