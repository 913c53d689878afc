mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// An unsigned integer element that can be split into radix digits.
///
/// Sealed: the scatter step relies on `to_radix` being a pure function of the value.
pub trait RadixKey: private::Sealed + Copy + Ord + Default + 'static {
    /// Width of the element in bits.
    const BITS: u32;

    /// The bit pattern of the element, zero extended to 64 bits.
    fn to_radix(&self) -> u64;
}

impl RadixKey for u8 {
    const BITS: u32 = u8::BITS;

    #[inline(always)]
    fn to_radix(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u16 {
    const BITS: u32 = u16::BITS;

    #[inline(always)]
    fn to_radix(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn to_radix(&self) -> u64 {
        *self as u64
    }
}

impl RadixKey for u64 {
    const BITS: u32 = u64::BITS;

    #[inline(always)]
    fn to_radix(&self) -> u64 {
        *self
    }
}

impl RadixKey for usize {
    const BITS: u32 = usize::BITS;

    #[inline(always)]
    fn to_radix(&self) -> u64 {
        *self as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_preserves_order() {
        let values = vec![0_u32, 1, 2, 255, 256, 65535, 65536, u32::MAX - 1, u32::MAX];
        for pair in values.windows(2) {
            assert!(pair[0].to_radix() < pair[1].to_radix());
        }
    }

    #[test]
    fn test_radix_zero_extends() {
        assert_eq!(u8::MAX.to_radix(), 0xFF);
        assert_eq!(u16::MAX.to_radix(), 0xFFFF);
        assert_eq!(u32::MAX.to_radix(), 0xFFFF_FFFF);
        assert_eq!(u64::MAX.to_radix(), u64::MAX);
    }

    #[test]
    fn test_bits() {
        assert_eq!(<u8 as RadixKey>::BITS, 8);
        assert_eq!(<u16 as RadixKey>::BITS, 16);
        assert_eq!(<u32 as RadixKey>::BITS, 32);
        assert_eq!(<u64 as RadixKey>::BITS, 64);
        assert_eq!(<usize as RadixKey>::BITS, usize::BITS);
    }
}
