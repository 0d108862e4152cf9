//! Opcode dispatch tables.
//!
//! Each opcode value maps to a small descriptor naming the instruction shape
//! and its operands. The executor interprets descriptors; the eleven opcode
//! holes of the SM83 map to `None`.

use super::alu::{AluOp, ShiftOp};
use super::Flags;

/// An 8-bit operand in the standard register order used by opcode fields:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A. `Imm` is the byte following
/// the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    B,
    C,
    D,
    E,
    H,
    L,
    HlInd,
    A,
    Imm,
}

impl Operand {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Self::B,
            1 => Self::C,
            2 => Self::D,
            3 => Self::E,
            4 => Self::H,
            5 => Self::L,
            6 => Self::HlInd,
            _ => Self::A,
        }
    }

    /// Cycles spent moving the operand in or out (one bus access for memory
    /// and immediate operands, none for registers).
    #[inline]
    pub const fn access_cycles(self) -> u32 {
        match self {
            Self::HlInd | Self::Imm => 1,
            _ => 0,
        }
    }
}

/// Register pairs addressed by the `rp` opcode field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pair {
    Bc,
    De,
    Hl,
    Sp,
}

impl Pair {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::Hl,
            _ => Self::Sp,
        }
    }
}

/// Register pairs addressed by PUSH/POP, where AF replaces SP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackPair {
    Bc,
    De,
    Hl,
    Af,
}

impl StackPair {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::Hl,
            _ => Self::Af,
        }
    }
}

/// Address sources for `LD (rr),A` and `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    Bc,
    De,
    HlInc,
    HlDec,
}

impl Indirect {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Self::Bc,
            1 => Self::De,
            2 => Self::HlInc,
            _ => Self::HlDec,
        }
    }
}

/// Branch conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Cond {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => Self::Nz,
            1 => Self::Z,
            2 => Self::Nc,
            _ => Self::C,
        }
    }

    #[inline]
    pub fn holds(self, flags: Flags) -> bool {
        match self {
            Self::Nz => !flags.zero(),
            Self::Z => flags.zero(),
            Self::Nc => !flags.carry(),
            Self::C => flags.carry(),
        }
    }
}

/// High-page addressing forms (`0xFF00 | operand`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighAddr {
    /// The byte following the opcode.
    Imm,
    /// Register C.
    C,
}

/// One unprefixed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instr {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// `LD dst,src` for registers, (HL) and immediates.
    Ld { dst: Operand, src: Operand },
    LdPairImm(Pair),
    LdIndirectA(Indirect),
    LdAIndirect(Indirect),
    LdAbsSp,
    LdAbsA,
    LdAAbs,
    LdHighA(HighAddr),
    LdAHigh(HighAddr),
    LdSpHl,
    LdHlSpOffset,
    AddSpOffset,
    Alu { op: AluOp, src: Operand },
    Inc(Operand),
    Dec(Operand),
    IncPair(Pair),
    DecPair(Pair),
    AddHl(Pair),
    /// RLCA, RRCA, RLA, RRA.
    RotateA(ShiftOp),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Jp(Option<Cond>),
    JpHl,
    Jr(Option<Cond>),
    Call(Option<Cond>),
    Ret(Option<Cond>),
    Reti,
    Rst(u8),
    Push(StackPair),
    Pop(StackPair),
    /// `0xCB`: the next byte selects a [`CbInstr`].
    Prefix,
}

impl Instr {
    /// Cycle cost including the opcode fetch, given the flags the
    /// instruction will see. For `Prefix` this is the prefix fetch alone; add
    /// [`CbInstr::cycles`] for the full cost.
    pub fn cycles(self, flags: Flags) -> u32 {
        let taken = |cond: Option<Cond>| cond.map_or(true, |c| c.holds(flags));
        1 + match self {
            Self::Nop | Self::Halt | Self::Di | Self::Ei => 0,
            Self::Stop => 1,
            Self::Ld { dst, src } => dst.access_cycles() + src.access_cycles(),
            Self::LdPairImm(_) => 2,
            Self::LdIndirectA(_) | Self::LdAIndirect(_) => 1,
            Self::LdAbsSp => 4,
            Self::LdAbsA | Self::LdAAbs => 3,
            Self::LdHighA(HighAddr::Imm) | Self::LdAHigh(HighAddr::Imm) => 2,
            Self::LdHighA(HighAddr::C) | Self::LdAHigh(HighAddr::C) => 1,
            Self::LdSpHl => 1,
            Self::LdHlSpOffset => 2,
            Self::AddSpOffset => 3,
            Self::Alu { src, .. } => src.access_cycles(),
            Self::Inc(Operand::HlInd) | Self::Dec(Operand::HlInd) => 2,
            Self::Inc(_) | Self::Dec(_) => 0,
            Self::IncPair(_) | Self::DecPair(_) | Self::AddHl(_) => 1,
            Self::RotateA(_) | Self::Daa | Self::Cpl | Self::Scf | Self::Ccf => 0,
            Self::Jp(cond) => {
                if taken(cond) {
                    3
                } else {
                    2
                }
            }
            Self::JpHl => 0,
            Self::Jr(cond) => {
                if taken(cond) {
                    2
                } else {
                    1
                }
            }
            Self::Call(cond) => {
                if taken(cond) {
                    5
                } else {
                    2
                }
            }
            Self::Ret(None) | Self::Reti => 3,
            Self::Ret(cond) => {
                if taken(cond) {
                    4
                } else {
                    1
                }
            }
            Self::Rst(_) | Self::Push(_) => 3,
            Self::Pop(_) => 2,
            Self::Prefix => 0,
        }
    }
}

/// One `0xCB`-prefixed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbInstr {
    Shift { op: ShiftOp, target: Operand },
    Bit { bit: u8, target: Operand },
    Res { bit: u8, target: Operand },
    Set { bit: u8, target: Operand },
}

impl CbInstr {
    /// Cycles after the prefix: the second opcode fetch plus any (HL)
    /// accesses.
    pub const fn cycles(self) -> u32 {
        match self {
            Self::Bit { target, .. } => 1 + target.access_cycles(),
            Self::Shift { target, .. } | Self::Res { target, .. } | Self::Set { target, .. } => {
                1 + 2 * target.access_cycles()
            }
        }
    }
}

const fn decode(opcode: u8) -> Option<Instr> {
    let x = opcode >> 6;
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;

    let instr = match x {
        0 => match z {
            0 => match y {
                0 => Instr::Nop,
                1 => Instr::LdAbsSp,
                2 => Instr::Stop,
                3 => Instr::Jr(None),
                _ => Instr::Jr(Some(Cond::from_index(y - 4))),
            },
            1 => {
                if y & 1 == 0 {
                    Instr::LdPairImm(Pair::from_index(y >> 1))
                } else {
                    Instr::AddHl(Pair::from_index(y >> 1))
                }
            }
            2 => {
                if y & 1 == 0 {
                    Instr::LdIndirectA(Indirect::from_index(y >> 1))
                } else {
                    Instr::LdAIndirect(Indirect::from_index(y >> 1))
                }
            }
            3 => {
                if y & 1 == 0 {
                    Instr::IncPair(Pair::from_index(y >> 1))
                } else {
                    Instr::DecPair(Pair::from_index(y >> 1))
                }
            }
            4 => Instr::Inc(Operand::from_index(y)),
            5 => Instr::Dec(Operand::from_index(y)),
            6 => Instr::Ld {
                dst: Operand::from_index(y),
                src: Operand::Imm,
            },
            _ => match y {
                0..=3 => Instr::RotateA(ShiftOp::from_index(y)),
                4 => Instr::Daa,
                5 => Instr::Cpl,
                6 => Instr::Scf,
                _ => Instr::Ccf,
            },
        },
        1 => {
            if opcode == 0x76 {
                Instr::Halt
            } else {
                Instr::Ld {
                    dst: Operand::from_index(y),
                    src: Operand::from_index(z),
                }
            }
        }
        2 => Instr::Alu {
            op: AluOp::from_index(y),
            src: Operand::from_index(z),
        },
        _ => match opcode {
            0xC0 | 0xC8 | 0xD0 | 0xD8 => Instr::Ret(Some(Cond::from_index(y))),
            0xC2 | 0xCA | 0xD2 | 0xDA => Instr::Jp(Some(Cond::from_index(y))),
            0xC4 | 0xCC | 0xD4 | 0xDC => Instr::Call(Some(Cond::from_index(y))),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => Instr::Pop(StackPair::from_index(y >> 1)),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => Instr::Push(StackPair::from_index(y >> 1)),
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => Instr::Alu {
                op: AluOp::from_index(y),
                src: Operand::Imm,
            },
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Instr::Rst(y * 8),
            0xC3 => Instr::Jp(None),
            0xC9 => Instr::Ret(None),
            0xCB => Instr::Prefix,
            0xCD => Instr::Call(None),
            0xD9 => Instr::Reti,
            0xE0 => Instr::LdHighA(HighAddr::Imm),
            0xE2 => Instr::LdHighA(HighAddr::C),
            0xE8 => Instr::AddSpOffset,
            0xE9 => Instr::JpHl,
            0xEA => Instr::LdAbsA,
            0xF0 => Instr::LdAHigh(HighAddr::Imm),
            0xF2 => Instr::LdAHigh(HighAddr::C),
            0xF3 => Instr::Di,
            0xF8 => Instr::LdHlSpOffset,
            0xF9 => Instr::LdSpHl,
            0xFA => Instr::LdAAbs,
            0xFB => Instr::Ei,
            // D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD
            _ => return None,
        },
    };
    Some(instr)
}

const fn decode_cb(opcode: u8) -> CbInstr {
    let y = (opcode >> 3) & 0x07;
    let target = Operand::from_index(opcode);
    match opcode >> 6 {
        0 => CbInstr::Shift {
            op: ShiftOp::from_index(y),
            target,
        },
        1 => CbInstr::Bit { bit: y, target },
        2 => CbInstr::Res { bit: y, target },
        _ => CbInstr::Set { bit: y, target },
    }
}

const fn build_table() -> [Option<Instr>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode(i as u8);
        i += 1;
    }
    table
}

const fn build_cb_table() -> [CbInstr; 256] {
    let mut table = [CbInstr::Bit {
        bit: 0,
        target: Operand::B,
    }; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode_cb(i as u8);
        i += 1;
    }
    table
}

/// Unprefixed page, indexed by opcode.
pub static OPCODES: [Option<Instr>; 256] = build_table();

/// `0xCB` page, indexed by the byte after the prefix.
pub static CB_OPCODES: [CbInstr; 256] = build_cb_table();

#[inline]
pub fn lookup(opcode: u8) -> Option<Instr> {
    OPCODES[usize::from(opcode)]
}

#[inline]
pub fn lookup_cb(opcode: u8) -> CbInstr {
    CB_OPCODES[usize::from(opcode)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holes_are_unknown() {
        let holes = [
            0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
        ];
        for op in 0..=0xFFu8 {
            assert_eq!(
                lookup(op).is_none(),
                holes.contains(&op),
                "opcode {op:#04x}"
            );
        }
    }

    #[test]
    fn decodes_representative_opcodes() {
        assert_eq!(lookup(0x00), Some(Instr::Nop));
        assert_eq!(lookup(0x3C), Some(Instr::Inc(Operand::A)));
        assert_eq!(lookup(0x34), Some(Instr::Inc(Operand::HlInd)));
        assert_eq!(lookup(0x27), Some(Instr::Daa));
        assert_eq!(
            lookup(0x8D),
            Some(Instr::Alu {
                op: AluOp::Adc,
                src: Operand::L
            })
        );
        assert_eq!(
            lookup(0x46),
            Some(Instr::Ld {
                dst: Operand::B,
                src: Operand::HlInd
            })
        );
        assert_eq!(lookup(0x76), Some(Instr::Halt));
        assert_eq!(lookup(0xC5), Some(Instr::Push(StackPair::Bc)));
        assert_eq!(lookup(0xF1), Some(Instr::Pop(StackPair::Af)));
        assert_eq!(lookup(0xF8), Some(Instr::LdHlSpOffset));
        assert_eq!(lookup(0x38), Some(Instr::Jr(Some(Cond::C))));
        assert_eq!(lookup(0xEF), Some(Instr::Rst(0x28)));
        assert_eq!(lookup(0x3A), Some(Instr::LdAIndirect(Indirect::HlDec)));
    }

    #[test]
    fn decodes_cb_page() {
        assert_eq!(
            lookup_cb(0x37),
            CbInstr::Shift {
                op: ShiftOp::Swap,
                target: Operand::A
            }
        );
        assert_eq!(
            lookup_cb(0x7E),
            CbInstr::Bit {
                bit: 7,
                target: Operand::HlInd
            }
        );
        assert_eq!(
            lookup_cb(0xC0),
            CbInstr::Set {
                bit: 0,
                target: Operand::B
            }
        );
    }

    #[test]
    fn costs_match_reference_timings() {
        let f = Flags::empty();
        let cost = |op: u8| lookup(op).map(|i| i.cycles(f));
        assert_eq!(cost(0x00), Some(1));
        assert_eq!(cost(0x34), Some(3));
        assert_eq!(cost(0x36), Some(3));
        assert_eq!(cost(0x08), Some(5));
        assert_eq!(cost(0xC5), Some(4));
        assert_eq!(cost(0xC1), Some(3));
        assert_eq!(cost(0xCD), Some(6));
        assert_eq!(cost(0xE8), Some(4));
        assert_eq!(cost(0xF8), Some(3));
        assert_eq!(cost(0xEA), Some(4));
        assert_eq!(cost(0xE0), Some(3));
        assert_eq!(cost(0xE2), Some(2));

        assert_eq!(lookup_cb(0x06).cycles(), 3);
        assert_eq!(lookup_cb(0x46).cycles(), 2);
        assert_eq!(lookup_cb(0x00).cycles(), 1);
    }

    #[test]
    fn conditional_cost_depends_on_flags() {
        let jr_nz = Instr::Jr(Some(Cond::Nz));
        assert_eq!(jr_nz.cycles(Flags::empty()), 3);
        assert_eq!(jr_nz.cycles(Flags::ZERO), 2);

        let ret_c = Instr::Ret(Some(Cond::C));
        assert_eq!(ret_c.cycles(Flags::CARRY), 5);
        assert_eq!(ret_c.cycles(Flags::empty()), 2);

        let call_nc = Instr::Call(Some(Cond::Nc));
        assert_eq!(call_nc.cycles(Flags::empty()), 6);
        assert_eq!(call_nc.cycles(Flags::CARRY), 3);
    }
}
