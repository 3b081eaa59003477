#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod block;
pub mod error;
pub mod layout;
pub mod palette;
pub mod sentinel;
pub mod signed;
pub mod unsigned;

pub use block::ChannelBlock;
pub use error::ChannelBlockError;
pub use layout::ChannelBlockBits;
pub use palette::{ChannelDomain, PaletteRegime, SignedDomain, UnsignedDomain};
pub use signed::SignedChannelBlock;
pub use unsigned::UnsignedChannelBlock;

#[cfg(test)]
pub mod test_prelude;
