use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract / BCD direction)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 do not exist and always read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 0x80;
        const SUBTRACT = 0x40;
        const HALF_CARRY = 0x20;
        const CARRY = 0x10;
    }
}

impl Flags {
    /// Rebuild flags from a raw F byte, dropping the low nibble.
    #[inline]
    pub const fn from_byte(value: u8) -> Self {
        Self::from_bits_truncate(value)
    }

    #[inline]
    pub const fn to_byte(self) -> u8 {
        self.bits()
    }

    #[inline]
    pub fn zero(self) -> bool {
        self.contains(Self::ZERO)
    }

    #[inline]
    pub fn subtract(self) -> bool {
        self.contains(Self::SUBTRACT)
    }

    #[inline]
    pub fn half_carry(self) -> bool {
        self.contains(Self::HALF_CARRY)
    }

    #[inline]
    pub fn carry(self) -> bool {
        self.contains(Self::CARRY)
    }

    #[inline]
    pub fn set_zero(&mut self, value: bool) {
        self.set(Self::ZERO, value);
    }

    #[inline]
    pub fn set_subtract(&mut self, value: bool) {
        self.set(Self::SUBTRACT, value);
    }

    #[inline]
    pub fn set_half_carry(&mut self, value: bool) {
        self.set(Self::HALF_CARRY, value);
    }

    #[inline]
    pub fn set_carry(&mut self, value: bool) {
        self.set(Self::CARRY, value);
    }
}

/// Register file of the SM83 core.
///
/// The 16-bit pairs BC, DE, HL and AF are not stored; the accessors below
/// combine and split the 8-bit fields (high byte first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    /// Stack pointer; the stack grows downward.
    pub sp: u16,
    /// Address of the next instruction byte.
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.to_byte()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_byte(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Post-increment HL, wrapping at 0xFFFF. Returns the old value.
    #[inline]
    pub fn hl_inc(&mut self) -> u16 {
        let hl = self.hl();
        self.set_hl(hl.wrapping_add(1));
        hl
    }

    /// Post-decrement HL, wrapping at 0x0000. Returns the old value.
    #[inline]
    pub fn hl_dec(&mut self) -> u16 {
        let hl = self.hl();
        self.set_hl(hl.wrapping_sub(1));
        hl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_views_over_bytes() {
        let mut regs = Registers::default();
        regs.set_bc(0xA212);
        assert_eq!((regs.b, regs.c), (0xA2, 0x12));

        regs.d = 0xFF;
        regs.e = 0x56;
        assert_eq!(regs.de(), 0xFF56);

        regs.l = 0x0D;
        assert_eq!(regs.hl(), 0x000D);
    }

    #[test]
    fn set_af_drops_low_flag_bits() {
        let mut regs = Registers::default();
        regs.set_af(0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f.to_byte(), 0xF0);
        assert_eq!(regs.af(), 0x12F0);
    }

    #[test]
    fn hl_inc_and_dec_wrap() {
        let mut regs = Registers::default();
        regs.set_hl(0xFFFF);
        assert_eq!(regs.hl_inc(), 0xFFFF);
        assert_eq!(regs.hl(), 0x0000);
        assert_eq!(regs.hl_dec(), 0x0000);
        assert_eq!(regs.hl(), 0xFFFF);
    }

    #[test]
    fn flag_accessors() {
        let mut f = Flags::from_byte(0x80);
        assert!(f.zero());
        assert!(!f.subtract());
        assert!(!f.half_carry());
        assert!(!f.carry());

        f.set_carry(true);
        f.set_half_carry(true);
        f.set_zero(false);
        assert_eq!(f.to_byte(), 0x30);
    }
}
