pub mod alu;
mod cb;
pub mod decode;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;


use typed_builder::TypedBuilder;

use crate::memory::Memory;

pub use regs::{Flags, Registers};

/// Which boot ROM hand-off state the CPU starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Model {
    /// Color model: AF=0x1180 BC=0x0000 DE=0xFF56 HL=0x000D.
    #[default]
    Cgb,
    /// Monochrome model: AF=0x01B0 BC=0x0013 DE=0x00D8 HL=0x014D.
    Dmg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub model: Model,
    /// Log every executed instruction at `trace` level.
    #[builder(default = false)]
    pub trace: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// SM83 CPU core together with the memory it exclusively owns.
///
/// All state is public for inspection between `execute` calls. The CPU is
/// driven by one caller at a time; there is no internal locking.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub memory: Memory,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Unlike HALT it is not left on interrupts; the
    /// host calls [`Cpu::wake`].
    pub stopped: bool,
    /// Set when HALT is executed with IME clear and an interrupt already
    /// pending: the next opcode fetch does not advance PC.
    halt_bug: bool,
    /// EI takes effect after the following instruction. EI itself moves
    /// `ime_enable_pending` to `ime_enable_delay`; the next instruction
    /// sets IME.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Cycles left in the current `execute` budget.
    remaining: u32,
    /// Cycles consumed since reset.
    cycles: u64,
    config: CpuConfig,
}
