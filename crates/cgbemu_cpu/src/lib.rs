pub mod cpu;
pub mod error;
pub mod memory;

pub use cpu::{Cpu, CpuConfig, Flags, Model, Registers};
pub use error::ExecutionFault;
pub use memory::Memory;

/// Address the boot ROM hands control to; programs start here.
pub const ENTRY_POINT: u16 = 0x0100;
