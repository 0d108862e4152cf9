//! Pure arithmetic helpers.
//!
//! Every helper returns the numeric result together with the carry bits it
//! produced. The returned [`Flags`] only ever contain `HALF_CARRY` and
//! `CARRY`; zero and subtract are decided by the instruction that uses the
//! result. [`daa`] is the exception, since it has to see and rewrite the
//! whole flag byte.

use super::Flags;

/// Eight-bit accumulator operations, in opcode order (bits 3..5 of
/// `0x80..=0xBF` and of the `d8` immediate forms).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Self::Add,
            1 => Self::Adc,
            2 => Self::Sub,
            3 => Self::Sbc,
            4 => Self::And,
            5 => Self::Xor,
            6 => Self::Or,
            _ => Self::Cp,
        }
    }

    /// Whether the N flag is set after this operation.
    #[inline]
    pub fn is_subtract(self) -> bool {
        matches!(self, Self::Sub | Self::Sbc | Self::Cp)
    }

    /// CP computes a subtraction only for its flags.
    #[inline]
    pub fn stores_result(self) -> bool {
        self != Self::Cp
    }
}

/// Rotate/shift operations of the CB page, in opcode order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Self::Rlc,
            1 => Self::Rrc,
            2 => Self::Rl,
            3 => Self::Rr,
            4 => Self::Sla,
            5 => Self::Sra,
            6 => Self::Swap,
            _ => Self::Srl,
        }
    }
}

#[inline]
fn carries(half: bool, carry: bool) -> Flags {
    let mut flags = Flags::empty();
    flags.set_half_carry(half);
    flags.set_carry(carry);
    flags
}

/// `a + b (+ carry_in)`.
pub fn add8(a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    let c = u8::from(carry_in);
    let half = (a & 0x0F) + (b & 0x0F) + c;
    let full = u16::from(a) + u16::from(b) + u16::from(c);
    (full as u8, carries(half > 0x0F, full > 0xFF))
}

/// `a - b (- borrow_in)`.
pub fn sub8(a: u8, b: u8, borrow_in: bool) -> (u8, Flags) {
    let c = u8::from(borrow_in);
    let result = a.wrapping_sub(b).wrapping_sub(c);
    let half = (a & 0x0F) < (b & 0x0F) + c;
    let carry = u16::from(a) < u16::from(b) + u16::from(c);
    (result, carries(half, carry))
}

/// Sixteen-bit add used by `ADD HL,rr`. Half carry comes out of bit 11.
pub fn add16(a: u16, b: u16) -> (u16, Flags) {
    let half = (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF;
    let carry = u32::from(a) + u32::from(b) > 0xFFFF;
    (a.wrapping_add(b), carries(half, carry))
}

/// Add a signed displacement to a 16-bit value (`ADD SP,e` and
/// `LD HL,SP+e`).
///
/// The carries are those of an unsigned add of the displacement byte to the
/// low byte of `value`, regardless of the displacement's sign.
pub fn add16_signed(value: u16, offset: i8) -> (u16, Flags) {
    let offset = offset as i16 as u16;
    let half = (value & 0x000F) + (offset & 0x000F) > 0x000F;
    let carry = (value & 0x00FF) + (offset & 0x00FF) > 0x00FF;
    (value.wrapping_add(offset), carries(half, carry))
}

/// Returns the incremented value and whether bit 3 carried into bit 4.
#[inline]
pub fn inc8(value: u8) -> (u8, bool) {
    (value.wrapping_add(1), value & 0x0F == 0x0F)
}

/// Returns the decremented value and whether bit 4 borrowed into bit 3.
#[inline]
pub fn dec8(value: u8) -> (u8, bool) {
    (value.wrapping_sub(1), value & 0x0F == 0x00)
}

pub fn and8(a: u8, b: u8) -> (u8, Flags) {
    (a & b, Flags::HALF_CARRY)
}

pub fn or8(a: u8, b: u8) -> (u8, Flags) {
    (a | b, Flags::empty())
}

pub fn xor8(a: u8, b: u8) -> (u8, Flags) {
    (a ^ b, Flags::empty())
}

/// Dispatch an accumulator operation. `carry_in` only matters for ADC/SBC.
pub fn alu8(op: AluOp, a: u8, b: u8, carry_in: bool) -> (u8, Flags) {
    match op {
        AluOp::Add => add8(a, b, false),
        AluOp::Adc => add8(a, b, carry_in),
        AluOp::Sub | AluOp::Cp => sub8(a, b, false),
        AluOp::Sbc => sub8(a, b, carry_in),
        AluOp::And => and8(a, b),
        AluOp::Xor => xor8(a, b),
        AluOp::Or => or8(a, b),
    }
}

/// Rotates and shifts. Only `CARRY` can be set in the returned flags.
pub fn shift(op: ShiftOp, value: u8, carry_in: bool) -> (u8, Flags) {
    let (result, carry) = match op {
        ShiftOp::Rlc => (value.rotate_left(1), value & 0x80 != 0),
        ShiftOp::Rrc => (value.rotate_right(1), value & 0x01 != 0),
        ShiftOp::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
        ShiftOp::Rr => (
            (value >> 1) | (u8::from(carry_in) << 7),
            value & 0x01 != 0,
        ),
        ShiftOp::Sla => (value << 1, value & 0x80 != 0),
        ShiftOp::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
        ShiftOp::Swap => (value.rotate_left(4), false),
        ShiftOp::Srl => (value >> 1, value & 0x01 != 0),
    };
    (result, carries(false, carry))
}

/// Decimal adjust of the accumulator after a BCD add or subtract.
///
/// Reads N, H and C from `flags` and returns the corrected accumulator with
/// the complete new flag byte: Z from the result, N unchanged, H cleared.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let mut result = a;
    let mut carry = false;

    if !flags.subtract() {
        if flags.half_carry() || a & 0x0F > 0x09 {
            result = result.wrapping_add(0x06);
        }
        if flags.carry() || a > 0x99 {
            result = result.wrapping_add(0x60);
            carry = true;
        }
    } else {
        if flags.half_carry() {
            result = result.wrapping_sub(0x06);
        }
        if flags.carry() {
            result = result.wrapping_sub(0x60);
            carry = true;
        }
    }

    let mut out = Flags::empty();
    out.set_zero(result == 0);
    out.set_subtract(flags.subtract());
    out.set_carry(carry);
    (result, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HC: Flags = Flags::HALF_CARRY.union(Flags::CARRY);

    #[test]
    fn add8_carries() {
        assert_eq!(add8(0x3A, 0xC6, false), (0x00, HC));
        assert_eq!(add8(0x3C, 0xFF, false), (0x3B, HC));
        assert_eq!(add8(0x3C, 0x12, false), (0x4E, Flags::empty()));
        assert_eq!(add8(0x0F, 0x01, false), (0x10, Flags::HALF_CARRY));
    }

    #[test]
    fn add8_carry_in_counts_towards_both_carries() {
        assert_eq!(add8(0x35, 0xCA, true), (0x00, HC));
        assert_eq!(add8(0x0E, 0x01, true), (0x10, Flags::HALF_CARRY));
        assert_eq!(add8(0xE1, 0x0F, true), (0xF1, Flags::HALF_CARRY));
        assert_eq!(add8(0xE1, 0x1E, true), (0x00, HC));
    }

    #[test]
    fn sub8_borrows() {
        assert_eq!(sub8(0x3E, 0x3E, false), (0x00, Flags::empty()));
        assert_eq!(sub8(0x3E, 0x0F, false), (0x2F, Flags::HALF_CARRY));
        assert_eq!(sub8(0x3E, 0x40, false), (0xFE, Flags::CARRY));
        assert_eq!(sub8(0x3B, 0x2A, true), (0x10, Flags::empty()));
        assert_eq!(sub8(0x3B, 0x4F, true), (0xEB, HC));
        assert_eq!(sub8(0x00, 0xFF, true), (0x00, HC));
    }

    #[test]
    fn add16_half_carry_from_bit_11() {
        assert_eq!(add16(0x1320, 0x252F), (0x384F, Flags::empty()));
        assert_eq!(add16(0x2320, 0xEF2F), (0x124F, HC));
        assert_eq!(add16(0x0FFF, 0x0001), (0x1000, Flags::HALF_CARRY));
    }

    #[test]
    fn add16_signed_uses_low_byte_carries() {
        assert_eq!(add16_signed(0x00FF, 0x11), (0x0110, HC));
        assert_eq!(add16_signed(0xFFF8, 0x02), (0xFFFA, Flags::empty()));
        // -1 is 0xFF: adding it to any non-zero low byte carries.
        assert_eq!(add16_signed(0x0001, -1), (0x0000, HC));
        assert_eq!(add16_signed(0x0000, -1), (0xFFFF, Flags::empty()));
    }

    #[test]
    fn inc_dec_report_nibble_crossings() {
        assert_eq!(inc8(0x0F), (0x10, true));
        assert_eq!(inc8(0xFF), (0x00, true));
        assert_eq!(inc8(0x34), (0x35, false));
        assert_eq!(dec8(0x10), (0x0F, true));
        assert_eq!(dec8(0x00), (0xFF, true));
        assert_eq!(dec8(0x01), (0x00, false));
    }

    #[test]
    fn daa_after_add() {
        let (a, f) = daa(0x0A, Flags::empty());
        assert_eq!(a, 0x10);
        assert_eq!(f, Flags::empty());

        // 0x45 + 0x38 = 0x7D
        let (a, f) = daa(0x7D, Flags::empty());
        assert_eq!(a, 0x83);
        assert!(!f.carry());

        // 0x99 + 0x01 = 0x9A -> 0x00 with decimal carry.
        let (a, f) = daa(0x9A, Flags::empty());
        assert_eq!(a, 0x00);
        assert_eq!(f, Flags::ZERO | Flags::CARRY);

        // 0x09 + 0x09 = 0x12 with half carry -> 0x18.
        let (a, _) = daa(0x12, Flags::HALF_CARRY);
        assert_eq!(a, 0x18);
    }

    #[test]
    fn daa_after_sub_keeps_n() {
        // 0x83 - 0x38 = 0x4B, H set.
        let (a, f) = daa(0x4B, Flags::SUBTRACT | Flags::HALF_CARRY);
        assert_eq!(a, 0x45);
        assert_eq!(f, Flags::SUBTRACT);

        // 0x10 - 0x20 = 0xF0, C set.
        let (a, f) = daa(0xF0, Flags::SUBTRACT | Flags::CARRY);
        assert_eq!(a, 0x90);
        assert_eq!(f, Flags::SUBTRACT | Flags::CARRY);
    }

    #[test]
    fn shifts() {
        assert_eq!(shift(ShiftOp::Rlc, 0x85, false), (0x0B, Flags::CARRY));
        assert_eq!(shift(ShiftOp::Rl, 0x80, false), (0x00, Flags::CARRY));
        assert_eq!(shift(ShiftOp::Rr, 0x01, true), (0x80, Flags::CARRY));
        assert_eq!(shift(ShiftOp::Sra, 0x8A, false), (0xC5, Flags::empty()));
        assert_eq!(shift(ShiftOp::Srl, 0x01, false), (0x00, Flags::CARRY));
        assert_eq!(shift(ShiftOp::Swap, 0xF1, true), (0x1F, Flags::empty()));
    }

    #[test]
    fn cp_is_sub_without_store() {
        assert!(AluOp::Cp.is_subtract());
        assert!(!AluOp::Cp.stores_result());
        assert_eq!(alu8(AluOp::Cp, 0x3C, 0x40, true), sub8(0x3C, 0x40, false));
    }
}
