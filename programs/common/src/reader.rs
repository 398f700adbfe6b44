//! Bounds-checked little-endian instruction data cursor

use crate::error::AmmError;

/// Sequential reader over raw instruction data
///
/// Every read advances the cursor and fails with `InvalidInstruction` if the
/// remaining data is too short, so handlers never index out of bounds.
pub struct InstructionReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> InstructionReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    pub fn read_u8(&mut self) -> Result<u8, AmmError> {
        let bytes = self.read_bytes::<1>()?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, AmmError> {
        Ok(u16::from_le_bytes(self.read_bytes::<2>()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, AmmError> {
        Ok(u32::from_le_bytes(self.read_bytes::<4>()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, AmmError> {
        Ok(u64::from_le_bytes(self.read_bytes::<8>()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, AmmError> {
        Ok(i64::from_le_bytes(self.read_bytes::<8>()?))
    }

    pub fn read_u128(&mut self) -> Result<u128, AmmError> {
        Ok(u128::from_le_bytes(self.read_bytes::<16>()?))
    }

    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], AmmError> {
        let end = self
            .offset
            .checked_add(N)
            .ok_or(AmmError::InvalidInstruction)?;
        if end > self.data.len() {
            return Err(AmmError::InvalidInstruction);
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.offset..end]);
        self.offset = end;
        Ok(out)
    }
}
