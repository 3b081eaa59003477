//! Palette expansion shared by the unsigned and signed sub-blocks.
//!
//! The 8-entry palette is derived from the two endpoints; it is never stored.
//! Slot 0 is `E0`, slot 1 is `E1`, and slots 2 to 7 depend on the endpoint order:
//!
//! | Slot | `E0 <= E1` ([`PaletteRegime::SixValue`]) | `E0 > E1` ([`PaletteRegime::EightValue`]) |
//! |------|------------------------------------------|-------------------------------------------|
//! | 2    | `(4*E0 + 1*E1) / 5`                      | `(6*E0 + 1*E1) / 7`                       |
//! | 3    | `(3*E0 + 2*E1) / 5`                      | `(5*E0 + 2*E1) / 7`                       |
//! | 4    | `(2*E0 + 3*E1) / 5`                      | `(4*E0 + 3*E1) / 7`                       |
//! | 5    | `(1*E0 + 4*E1) / 5`                      | `(3*E0 + 4*E1) / 7`                       |
//! | 6    | low extreme                              | `(2*E0 + 5*E1) / 7`                       |
//! | 7    | high extreme                             | `(1*E0 + 6*E1) / 7`                       |
//!
//! Integer division truncates toward zero, which for negative (signed) values is not the same
//! as flooring. Rust's `/` on [`i32`] has exactly these semantics.
//!
//! The normalized float palette is interpolated directly on the scaled endpoints rather than
//! derived from the integer palette, so it may differ from `integer palette / scale` in the
//! last bit. That matches the behaviour of reference decoders.

use crate::error::ChannelBlockError;
use crate::layout::PALETTE_SIZE;
use crate::sentinel::{decode_signed_endpoint, encode_signed_endpoint};
use derive_enum_all_values::AllValues;

/// Numeric domain of a sub-block's endpoints and palette.
///
/// Implemented by [`UnsignedDomain`] (BC3 alpha, BC4/BC5 UNORM) and [`SignedDomain`]
/// (BC4/BC5 SNORM).
pub trait ChannelDomain {
    /// Type of a single endpoint or palette value.
    type Value: Copy;

    /// Value placed in slot 6 when `E0 <= E1`.
    const LOW_EXTREME: Self::Value;

    /// Value placed in slot 7 when `E0 <= E1`.
    const HIGH_EXTREME: Self::Value;

    /// Divisor mapping values to the normalized float range.
    const SCALE: f32;

    /// Normalized value placed in slot 6 when `E0 <= E1`.
    const LOW_EXTREME_NORMALIZED: f32;

    /// Normalized value placed in slot 7 when `E0 <= E1`.
    const HIGH_EXTREME_NORMALIZED: f32;

    /// Reads an endpoint from its raw storage octet.
    fn decode_endpoint(raw: u8) -> Self::Value;

    /// Converts an endpoint into the octet that is stored.
    fn encode_endpoint(value: Self::Value) -> u8;

    /// Widens a value for interpolation arithmetic.
    fn widen(value: Self::Value) -> i32;

    /// Narrows an interpolation result back into the domain.
    ///
    /// Callers only pass values between the two endpoints, so this never truncates.
    fn narrow(value: i32) -> Self::Value;
}

/// Unsigned `0..=255` domain; extremes are `0x00` and `0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnsignedDomain;

/// Signed `-127..=127` domain; extremes are `-127` and `127`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SignedDomain;

impl ChannelDomain for UnsignedDomain {
    type Value = u8;

    const LOW_EXTREME: u8 = 0x00;
    const HIGH_EXTREME: u8 = 0xFF;
    const SCALE: f32 = 255.0;
    const LOW_EXTREME_NORMALIZED: f32 = 0.0;
    const HIGH_EXTREME_NORMALIZED: f32 = 1.0;

    #[inline(always)]
    fn decode_endpoint(raw: u8) -> u8 {
        raw
    }

    #[inline(always)]
    fn encode_endpoint(value: u8) -> u8 {
        value
    }

    #[inline(always)]
    fn widen(value: u8) -> i32 {
        i32::from(value)
    }

    #[inline(always)]
    fn narrow(value: i32) -> u8 {
        value as u8
    }
}

impl ChannelDomain for SignedDomain {
    type Value = i8;

    const LOW_EXTREME: i8 = -127;
    const HIGH_EXTREME: i8 = 127;
    const SCALE: f32 = 127.0;
    const LOW_EXTREME_NORMALIZED: f32 = -1.0;
    const HIGH_EXTREME_NORMALIZED: f32 = 1.0;

    /// Raw `-128` reads as `-127`.
    #[inline(always)]
    fn decode_endpoint(raw: u8) -> i8 {
        decode_signed_endpoint(raw)
    }

    /// `-128` is stored as `-127`.
    #[inline(always)]
    fn encode_endpoint(value: i8) -> u8 {
        encode_signed_endpoint(value)
    }

    #[inline(always)]
    fn widen(value: i8) -> i32 {
        i32::from(value)
    }

    #[inline(always)]
    fn narrow(value: i32) -> i8 {
        value as i8
    }
}

/// Interpolation mode selected by the order of the two endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum PaletteRegime {
    /// `E0 <= E1`: 4 interpolated values plus the two fixed extremes in slots 6 and 7.
    SixValue,

    /// `E0 > E1`: 6 interpolated values, no fixed extremes.
    EightValue,
}

impl PaletteRegime {
    /// Selects the regime for a pair of endpoints.
    #[inline(always)]
    pub fn select<D: ChannelDomain>(e0: D::Value, e1: D::Value) -> Self {
        if D::widen(e0) <= D::widen(e1) {
            PaletteRegime::SixValue
        } else {
            PaletteRegime::EightValue
        }
    }

    /// Number of steps between the two endpoints (5 or 7).
    #[inline(always)]
    pub const fn divisor(self) -> i32 {
        match self {
            PaletteRegime::SixValue => 5,
            PaletteRegime::EightValue => 7,
        }
    }
}

/// Computes a single palette slot.
///
/// # Parameters
///
/// - `e0`, `e1`: The decoded endpoints
/// - `entry`: Palette slot; must be less than 8
#[inline]
pub(crate) fn palette_entry<D: ChannelDomain>(e0: D::Value, e1: D::Value, entry: usize) -> D::Value {
    debug_assert!(entry < PALETTE_SIZE);
    match entry {
        0 => return e0,
        1 => return e1,
        _ => {}
    }

    // Position along the ramp from E0 (0) to E1 (divisor).
    let step = entry as i32 - 1;
    let regime = PaletteRegime::select::<D>(e0, e1);
    if regime == PaletteRegime::SixValue {
        match step {
            5 => return D::LOW_EXTREME,
            6 => return D::HIGH_EXTREME,
            _ => {}
        }
    }

    interpolate::<D>(D::widen(e0), D::widen(e1), step, regime.divisor())
}

/// Computes all 8 palette slots in one pass.
#[inline]
pub(crate) fn palette<D: ChannelDomain>(e0: D::Value, e1: D::Value) -> [D::Value; PALETTE_SIZE] {
    let mut palette = [e0; PALETTE_SIZE];
    palette[1] = e1;

    let w0 = D::widen(e0);
    let w1 = D::widen(e1);
    match PaletteRegime::select::<D>(e0, e1) {
        PaletteRegime::SixValue => {
            for step in 1..5 {
                palette[step as usize + 1] = interpolate::<D>(w0, w1, step, 5);
            }
            palette[6] = D::LOW_EXTREME;
            palette[7] = D::HIGH_EXTREME;
        }
        PaletteRegime::EightValue => {
            for step in 1..7 {
                palette[step as usize + 1] = interpolate::<D>(w0, w1, step, 7);
            }
        }
    }

    palette
}

/// Computes all 8 palette slots in the normalized float domain.
///
/// The endpoints are scaled first, then interpolated as floats.
#[inline]
pub(crate) fn palette_normalized<D: ChannelDomain>(
    e0: D::Value,
    e1: D::Value,
) -> [f32; PALETTE_SIZE] {
    let r0 = D::widen(e0) as f32 / D::SCALE;
    let r1 = D::widen(e1) as f32 / D::SCALE;

    let mut palette = [r0; PALETTE_SIZE];
    palette[1] = r1;

    if r0 <= r1 {
        for step in 1..5 {
            palette[step + 1] = interpolate_f32(r0, r1, step as f32, 5.0);
        }
        palette[6] = D::LOW_EXTREME_NORMALIZED;
        palette[7] = D::HIGH_EXTREME_NORMALIZED;
    } else {
        for step in 1..7 {
            palette[step + 1] = interpolate_f32(r0, r1, step as f32, 7.0);
        }
    }

    palette
}

/// Copies a full palette into `dest[offset..offset + 8]`.
///
/// The bounds are checked before anything is written, so `dest` is either fully updated
/// or left untouched.
#[inline]
pub(crate) fn copy_palette<T: Copy>(
    palette: &[T; PALETTE_SIZE],
    dest: &mut [T],
    offset: usize,
) -> Result<(), ChannelBlockError> {
    let actual = dest.len();
    let slot = offset
        .checked_add(PALETTE_SIZE)
        .and_then(|end| dest.get_mut(offset..end));

    match slot {
        Some(slot) => {
            slot.copy_from_slice(palette);
            Ok(())
        }
        None => Err(ChannelBlockError::PaletteBufferTooSmall {
            offset,
            needed: offset.saturating_add(PALETTE_SIZE),
            actual,
        }),
    }
}

#[inline(always)]
fn interpolate<D: ChannelDomain>(w0: i32, w1: i32, step: i32, divisor: i32) -> D::Value {
    D::narrow((w0 * (divisor - step) + w1 * step) / divisor)
}

#[inline(always)]
fn interpolate_f32(r0: f32, r1: f32, step: f32, divisor: f32) -> f32 {
    (r0 * (divisor - step) + r1 * step) / divisor
}
