/// The convention for assembling and disassembling the bytes of a multi-byte
/// scalar.
///
/// A [`ByteOrder`] is owned by each reader or writer and may be changed at
/// any time; the new order takes effect on the next operation. The default is
/// [`BigEndian`](ByteOrder::BigEndian) (network order).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Assembles a `u16` from its wire bytes.
    pub fn u16_from(self, raw: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(raw),
            ByteOrder::LittleEndian => u16::from_le_bytes(raw),
        }
    }

    /// Assembles a `u32` from its wire bytes.
    pub fn u32_from(self, raw: [u8; 4]) -> u32 {
        match self {
            ByteOrder::BigEndian => u32::from_be_bytes(raw),
            ByteOrder::LittleEndian => u32::from_le_bytes(raw),
        }
    }

    /// Assembles a `u64` from its wire bytes.
    pub fn u64_from(self, raw: [u8; 8]) -> u64 {
        match self {
            ByteOrder::BigEndian => u64::from_be_bytes(raw),
            ByteOrder::LittleEndian => u64::from_le_bytes(raw),
        }
    }

    /// Disassembles a `u16` into its wire bytes.
    pub fn u16_to(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Disassembles a `u32` into its wire bytes.
    pub fn u32_to(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Disassembles a `u64` into its wire bytes.
    pub fn u64_to(self, value: u64) -> [u8; 8] {
        match self {
            ByteOrder::BigEndian => value.to_be_bytes(),
            ByteOrder::LittleEndian => value.to_le_bytes(),
        }
    }
}
