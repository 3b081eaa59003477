//! Error types for sub-block field access and palette output.

use thiserror::Error;

/// Errors returned by checked sub-block operations.
///
/// Every operation validates its arguments before touching the packed value,
/// so a returned error always means that nothing was modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelBlockError {
    /// Texel index is not within `0..16`.
    #[error("Texel index out of range: {index} (must be less than 16)")]
    IndexOutOfRange {
        /// The rejected texel index.
        index: usize,
    },

    /// Texel coordinate is outside of the 4x4 block.
    #[error("Texel coordinate out of range: ({x}, {y}) (both must be less than 4)")]
    CoordinateOutOfRange {
        /// The rejected column.
        x: usize,
        /// The rejected row.
        y: usize,
    },

    /// Index field value does not fit in 3 bits.
    #[error("Index value out of range: {value} (must be at most 7)")]
    IndexValueOutOfRange {
        /// The rejected index value.
        value: u8,
    },

    /// Palette slot is not within `0..8`.
    #[error("Palette entry out of range: {entry} (must be less than 8)")]
    PaletteEntryOutOfRange {
        /// The rejected palette slot.
        entry: usize,
    },

    /// Output buffer cannot hold a full palette at the requested offset.
    #[error("Palette buffer too small: needed {needed} elements from offset {offset}, got {actual}")]
    PaletteBufferTooSmall {
        /// Offset the palette was to be written at.
        offset: usize,
        /// The number of elements required, including the offset.
        needed: usize,
        /// The actual buffer length provided.
        actual: usize,
    },
}
