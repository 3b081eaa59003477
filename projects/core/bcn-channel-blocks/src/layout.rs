//! Bit layout of the single-channel sub-block.
//!
//! A sub-block is one little-endian 64-bit word:
//!
//! ```text
//! bits  0-7:  E0 (raw octet)
//! bits  8-15: E1 (raw octet)
//! bits 16-63: sixteen 3-bit texel indices, row-major
//! ```
//!
//! Index `i` lives at bits `16 + 3*i ..= 16 + 3*i + 2`. The same field is addressed by the
//! texel coordinate `(x, y)` through `i = y * 4 + x`.
//!
//! [`ChannelBlockBits`] owns the raw word and provides checked access to the index fields.
//! It knows nothing about how the endpoint octets are interpreted, that is left to
//! [`crate::UnsignedChannelBlock`] and [`crate::SignedChannelBlock`].

use crate::error::ChannelBlockError;
use bitfield::bitfield;
use likely_stable::unlikely;

/// Size of one packed sub-block in bytes.
pub const BLOCK_SIZE_BYTES: usize = 8;

/// Width and height of the texel tile covered by one sub-block.
pub const BLOCK_DIMENSION: usize = 4;

/// Number of texels (and index fields) in one sub-block.
pub const TEXEL_COUNT: usize = BLOCK_DIMENSION * BLOCK_DIMENSION;

/// Number of entries in an expanded palette.
pub const PALETTE_SIZE: usize = 8;

/// Width of a single texel index field.
pub const INDEX_BITS: u32 = 3;

/// Mask of a single texel index field.
pub const INDEX_MASK: u64 = 0b111;

/// Bit position of the first texel index field.
pub const INDEX_BASE_BIT: u32 = 16;

bitfield! {
    /// Raw 64-bit sub-block with field accessors.
    ///
    /// Bit layout:
    /// - Bits 0-7: Endpoint 0 (raw octet)
    /// - Bits 8-15: Endpoint 1 (raw octet)
    /// - Bits 16-63: 16 texel indices (3 bits each)
    ///
    /// The endpoint octets accept any value. The index fields are only reachable through
    /// the checked accessors ([`ChannelBlockBits::index`], [`ChannelBlockBits::set_index`],
    /// [`ChannelBlockBits::index_at`], [`ChannelBlockBits::set_index_at`]):
    ///
    /// ```compile_fail
    /// let mut bits = bcn_channel_blocks::ChannelBlockBits::from_packed(0);
    /// bits.set_index_raw(3, 8);
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChannelBlockBits(u64);
    impl Debug;
    u8;

    /// Endpoint 0 octet.
    pub endpoint0_raw, set_endpoint0_raw: 7, 0;
    /// Endpoint 1 octet.
    pub endpoint1_raw, set_endpoint1_raw: 15, 8;
    // Unchecked; the shift wraps for `index >= 16` in release builds.
    index_raw, set_index_raw: 18, 16, 16;
}

impl ChannelBlockBits {
    /// Wraps a raw packed value.
    #[inline(always)]
    pub const fn from_packed(packed: u64) -> Self {
        Self(packed)
    }

    /// Returns the raw packed value.
    #[inline(always)]
    pub const fn packed(self) -> u64 {
        self.0
    }

    /// Reads the index of texel `index` (row-major, `0..16`).
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::IndexOutOfRange`] if `index >= 16`
    #[inline]
    pub fn index(&self, index: usize) -> Result<u8, ChannelBlockError> {
        check_texel_index(index)?;
        Ok(self.index_raw(index))
    }

    /// Writes the index of texel `index` (row-major, `0..16`).
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::IndexOutOfRange`] if `index >= 16`
    /// - [`ChannelBlockError::IndexValueOutOfRange`] if `value > 7`
    #[inline]
    pub fn set_index(&mut self, index: usize, value: u8) -> Result<(), ChannelBlockError> {
        check_texel_index(index)?;
        check_index_value(value)?;
        self.set_index_raw(index, value);
        Ok(())
    }

    /// Reads the index of the texel at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::CoordinateOutOfRange`] if `x >= 4` or `y >= 4`
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> Result<u8, ChannelBlockError> {
        let index = texel_index(x, y)?;
        Ok(self.index_raw(index))
    }

    /// Writes the index of the texel at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::CoordinateOutOfRange`] if `x >= 4` or `y >= 4`
    /// - [`ChannelBlockError::IndexValueOutOfRange`] if `value > 7`
    #[inline]
    pub fn set_index_at(&mut self, x: usize, y: usize, value: u8) -> Result<(), ChannelBlockError> {
        let index = texel_index(x, y)?;
        check_index_value(value)?;
        self.set_index_raw(index, value);
        Ok(())
    }

    /// Reads all 16 texel indices in row-major order.
    #[inline]
    pub fn indices(&self) -> [u8; TEXEL_COUNT] {
        let mut indices = [0u8; TEXEL_COUNT];
        let mut bits = self.0 >> INDEX_BASE_BIT;
        for index in indices.iter_mut() {
            *index = (bits & INDEX_MASK) as u8;
            bits >>= INDEX_BITS;
        }
        indices
    }
}

/// Converts a texel coordinate into a row-major texel index.
///
/// # Errors
///
/// - [`ChannelBlockError::CoordinateOutOfRange`] if `x >= 4` or `y >= 4`
#[inline(always)]
pub fn texel_index(x: usize, y: usize) -> Result<usize, ChannelBlockError> {
    if unlikely(x >= BLOCK_DIMENSION || y >= BLOCK_DIMENSION) {
        return Err(ChannelBlockError::CoordinateOutOfRange { x, y });
    }
    Ok(y * BLOCK_DIMENSION + x)
}

/// Returns the bit position of the least significant bit of texel `index`'s field.
#[inline(always)]
pub const fn index_shift(index: usize) -> u32 {
    INDEX_BASE_BIT + INDEX_BITS * index as u32
}

#[inline(always)]
fn check_texel_index(index: usize) -> Result<(), ChannelBlockError> {
    if unlikely(index >= TEXEL_COUNT) {
        return Err(ChannelBlockError::IndexOutOfRange { index });
    }
    Ok(())
}

#[inline(always)]
fn check_index_value(value: u8) -> Result<(), ChannelBlockError> {
    if unlikely(u64::from(value) > INDEX_MASK) {
        return Err(ChannelBlockError::IndexValueOutOfRange { value });
    }
    Ok(())
}
