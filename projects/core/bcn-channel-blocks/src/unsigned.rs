//! Unsigned (UNORM) single-channel sub-block.
//!
//! Used by BC3 alpha, BC4 UNORM red, and BC5 UNORM red/green.

use crate::block::ChannelBlock;
use crate::palette::UnsignedDomain;

/// A 64-bit unsigned single-channel sub-block with endpoints in `0..=255`.
///
/// Slots 6 and 7 of a [`crate::PaletteRegime::SixValue`] palette are `0x00` and `0xFF`.
pub type UnsignedChannelBlock = ChannelBlock<UnsignedDomain>;
