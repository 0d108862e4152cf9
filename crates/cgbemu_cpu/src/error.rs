use thiserror::Error;

/// Faults that stop `Cpu::execute` before the offending instruction commits
/// any state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionFault {
    /// The byte at `pc` does not decode to any instruction (one of the
    /// SM83 opcode holes).
    #[error("unknown opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UnknownOpcode { pc: u16, opcode: u8 },
    /// An access fell outside the backing memory.
    #[error("address 0x{addr:X} is outside the 16-bit address space")]
    AddressOutOfRange { addr: usize },
}
