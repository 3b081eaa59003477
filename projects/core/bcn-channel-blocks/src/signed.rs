//! Signed (SNORM) single-channel sub-block.
//!
//! Used by BC4 SNORM red and BC5 SNORM red/green. The layout is identical to
//! [`crate::UnsignedChannelBlock`]; only the endpoint octets are read as two's complement,
//! with the reserved `-128` folded onto `-127` (see [`crate::sentinel`]).

use crate::block::ChannelBlock;
use crate::palette::SignedDomain;

/// A 64-bit signed single-channel sub-block with endpoints in `-127..=127`.
pub type SignedChannelBlock = ChannelBlock<SignedDomain>;
