//! Single-channel sub-block, generic over the endpoint domain.
//!
//! [`crate::UnsignedChannelBlock`] and [`crate::SignedChannelBlock`] are the two
//! instantiations. They share the layout and every accessor; the [`ChannelDomain`] decides
//! how the endpoint octets are read and written and which extremes the palette uses.

use crate::error::ChannelBlockError;
use crate::layout::{ChannelBlockBits, BLOCK_SIZE_BYTES, PALETTE_SIZE, TEXEL_COUNT};
use crate::palette::{self, ChannelDomain, PaletteRegime};
use core::marker::PhantomData;
use likely_stable::unlikely;

/// A 64-bit single-channel sub-block whose endpoints live in domain `D`.
///
/// This is a plain value; copy it, mutate it through the accessors and write
/// [`ChannelBlock::packed`] back to the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelBlock<D: ChannelDomain> {
    bits: ChannelBlockBits,
    _domain: PhantomData<D>,
}

impl<D: ChannelDomain> ChannelBlock<D> {
    /// Creates a block with both endpoints and all indices set to zero.
    #[inline(always)]
    pub const fn new() -> Self {
        Self::from_packed(0)
    }

    /// Wraps a raw packed value, as read from a texture.
    ///
    /// The endpoint octets are kept as-is; a raw signed `-128` is only folded onto `-127`
    /// when read.
    #[inline(always)]
    pub const fn from_packed(packed: u64) -> Self {
        Self {
            bits: ChannelBlockBits::from_packed(packed),
            _domain: PhantomData,
        }
    }

    /// Creates a block with the given endpoints and all indices set to zero.
    #[inline]
    pub fn with_endpoints(e0: D::Value, e1: D::Value) -> Self {
        let mut block = Self::new();
        block.set_endpoint0(e0);
        block.set_endpoint1(e1);
        block
    }

    /// Reads a block from its 8-byte little-endian representation.
    #[inline(always)]
    pub const fn from_le_bytes(bytes: [u8; BLOCK_SIZE_BYTES]) -> Self {
        Self::from_packed(u64::from_le_bytes(bytes))
    }

    /// Reads a block from the start of a slice.
    ///
    /// # Returns
    ///
    /// The block, else [`None`] if the slice is shorter than 8 bytes.
    #[inline]
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        let bytes = src.get(..BLOCK_SIZE_BYTES)?.try_into().ok()?;
        Some(Self::from_le_bytes(bytes))
    }

    /// Returns the raw packed value.
    #[inline(always)]
    pub const fn packed(self) -> u64 {
        self.bits.packed()
    }

    /// Returns the 8-byte little-endian representation of the block.
    #[inline(always)]
    pub const fn to_le_bytes(self) -> [u8; BLOCK_SIZE_BYTES] {
        self.packed().to_le_bytes()
    }

    /// Returns the packed layout for raw field access.
    #[inline(always)]
    pub const fn bits(&self) -> &ChannelBlockBits {
        &self.bits
    }

    /// Endpoint 0 (`E0`). Never `-128` in the signed domain.
    #[inline(always)]
    pub fn endpoint0(&self) -> D::Value {
        D::decode_endpoint(self.bits.endpoint0_raw())
    }

    /// Sets endpoint 0 (`E0`), leaving every other field untouched.
    ///
    /// In the signed domain `-128` is stored as `-127`.
    #[inline(always)]
    pub fn set_endpoint0(&mut self, value: D::Value) {
        self.bits.set_endpoint0_raw(D::encode_endpoint(value));
    }

    /// Endpoint 1 (`E1`). Never `-128` in the signed domain.
    #[inline(always)]
    pub fn endpoint1(&self) -> D::Value {
        D::decode_endpoint(self.bits.endpoint1_raw())
    }

    /// Sets endpoint 1 (`E1`), leaving every other field untouched.
    ///
    /// In the signed domain `-128` is stored as `-127`.
    #[inline(always)]
    pub fn set_endpoint1(&mut self, value: D::Value) {
        self.bits.set_endpoint1_raw(D::encode_endpoint(value));
    }

    /// Reads the palette index of texel `index` (row-major, `0..16`).
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::IndexOutOfRange`] if `index >= 16`
    #[inline]
    pub fn index(&self, index: usize) -> Result<u8, ChannelBlockError> {
        self.bits.index(index)
    }

    /// Writes the palette index of texel `index` (row-major, `0..16`).
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::IndexOutOfRange`] if `index >= 16`
    /// - [`ChannelBlockError::IndexValueOutOfRange`] if `value > 7`
    #[inline]
    pub fn set_index(&mut self, index: usize, value: u8) -> Result<(), ChannelBlockError> {
        self.bits.set_index(index, value)
    }

    /// Reads the palette index of the texel at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::CoordinateOutOfRange`] if `x >= 4` or `y >= 4`
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> Result<u8, ChannelBlockError> {
        self.bits.index_at(x, y)
    }

    /// Writes the palette index of the texel at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::CoordinateOutOfRange`] if `x >= 4` or `y >= 4`
    /// - [`ChannelBlockError::IndexValueOutOfRange`] if `value > 7`
    #[inline]
    pub fn set_index_at(&mut self, x: usize, y: usize, value: u8) -> Result<(), ChannelBlockError> {
        self.bits.set_index_at(x, y, value)
    }

    /// The interpolation mode selected by the current (decoded) endpoints.
    #[inline]
    pub fn regime(&self) -> PaletteRegime {
        PaletteRegime::select::<D>(self.endpoint0(), self.endpoint1())
    }

    /// Computes a single palette entry.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::PaletteEntryOutOfRange`] if `entry >= 8`
    #[inline]
    pub fn palette_entry(&self, entry: usize) -> Result<D::Value, ChannelBlockError> {
        if unlikely(entry >= PALETTE_SIZE) {
            return Err(ChannelBlockError::PaletteEntryOutOfRange { entry });
        }
        Ok(palette::palette_entry::<D>(
            self.endpoint0(),
            self.endpoint1(),
            entry,
        ))
    }

    /// Computes all 8 palette entries.
    #[inline]
    pub fn palette(&self) -> [D::Value; PALETTE_SIZE] {
        palette::palette::<D>(self.endpoint0(), self.endpoint1())
    }

    /// Computes all 8 palette entries as normalized floats, `[0, 1]` unsigned or
    /// `[-1, 1]` signed.
    #[inline]
    pub fn palette_normalized(&self) -> [f32; PALETTE_SIZE] {
        palette::palette_normalized::<D>(self.endpoint0(), self.endpoint1())
    }

    /// Writes all 8 palette entries into `dest`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::PaletteBufferTooSmall`] if `dest` has fewer than
    ///   `offset + 8` elements; `dest` is left untouched
    #[inline]
    pub fn write_palette(
        &self,
        dest: &mut [D::Value],
        offset: usize,
    ) -> Result<(), ChannelBlockError> {
        palette::copy_palette(&self.palette(), dest, offset)
    }

    /// Writes all 8 normalized palette entries into `dest`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// - [`ChannelBlockError::PaletteBufferTooSmall`] if `dest` has fewer than
    ///   `offset + 8` elements; `dest` is left untouched
    #[inline]
    pub fn write_palette_normalized(
        &self,
        dest: &mut [f32],
        offset: usize,
    ) -> Result<(), ChannelBlockError> {
        palette::copy_palette(&self.palette_normalized(), dest, offset)
    }

    /// Resolves every texel through the palette, in row-major order.
    #[inline]
    pub fn decode_texels(&self) -> [D::Value; TEXEL_COUNT] {
        let palette = self.palette();
        self.bits.indices().map(|index| palette[index as usize])
    }

    /// Resolves every texel through the normalized palette, in row-major order.
    #[inline]
    pub fn decode_texels_normalized(&self) -> [f32; TEXEL_COUNT] {
        let palette = self.palette_normalized();
        self.bits.indices().map(|index| palette[index as usize])
    }
}

impl<D: ChannelDomain> From<u64> for ChannelBlock<D> {
    #[inline(always)]
    fn from(packed: u64) -> Self {
        Self::from_packed(packed)
    }
}

impl<D: ChannelDomain> From<ChannelBlock<D>> for u64 {
    #[inline(always)]
    fn from(block: ChannelBlock<D>) -> Self {
        block.packed()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    fn with_index_written<D: ChannelDomain>(packed: u64) -> ChannelBlock<D> {
        let mut block = ChannelBlock::<D>::from_packed(packed);
        block.set_index_at(1, 2, 5).unwrap();
        block
    }

    #[rstest]
    #[case(0)]
    #[case(0x0123_4567_89AB_CDEF)]
    #[case(u64::MAX)]
    fn both_domains_share_the_index_layout(#[case] packed: u64) {
        let unsigned = with_index_written::<UnsignedDomain>(packed);
        let signed = with_index_written::<SignedDomain>(packed);
        assert_eq!(unsigned.packed(), signed.packed());
        assert_eq!(unsigned.bits(), signed.bits());
        assert_eq!(unsigned.index(9).unwrap(), 5);
        assert_eq!(signed.bits().indices(), unsigned.bits().indices());
    }

    #[rstest]
    #[case(0x00, 0x00)]
    #[case(0x7F, 0x7F)]
    #[case(0x80, 0x81)]
    #[case(0xFF, 0xFF)]
    fn endpoint_octets_pass_through_the_domain(#[case] raw: u8, #[case] signed_raw: u8) {
        let mut unsigned = UnsignedChannelBlock::new();
        unsigned.set_endpoint0(raw);
        assert_eq!(unsigned.packed(), u64::from(raw));

        // Only the signed domain rewrites the reserved -128 octet.
        let mut signed = SignedChannelBlock::new();
        signed.set_endpoint0(raw as i8);
        assert_eq!(signed.packed(), u64::from(signed_raw));
    }

    #[test]
    fn packed_conversions_round_trip() {
        let block: ChannelBlock<SignedDomain> = 0x0123_4567_89AB_CDEFu64.into();
        assert_eq!(u64::from(block), 0x0123_4567_89AB_CDEF);
        assert_eq!(
            ChannelBlock::<UnsignedDomain>::default(),
            ChannelBlock::<UnsignedDomain>::new()
        );
    }
}
