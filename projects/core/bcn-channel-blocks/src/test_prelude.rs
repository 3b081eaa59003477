//! Common test imports for sub-block tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::block::ChannelBlock;
pub use crate::error::ChannelBlockError;
pub use crate::layout::*;
pub use crate::palette::{ChannelDomain, PaletteRegime, SignedDomain, UnsignedDomain};
pub use crate::sentinel::*;
pub use crate::{SignedChannelBlock, UnsignedChannelBlock};
