//! IR types and integer constants
//!
//! Integers are signless and fixed-width (1..=128 bits). The libc
//! procedures this crate instruments interpret them as two's-complement
//! signed values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum supported integer width
pub const MAX_INT_BITS: u32 = 128;

/// Fixed-width integer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IntegerType {
    bit_width: u32,
}

impl IntegerType {
    /// Create an integer type of the given width.
    ///
    /// # Panics
    /// If `bit_width` is outside `1..=128`.
    pub fn new(bit_width: u32) -> Self {
        assert!(
            (1..=MAX_INT_BITS).contains(&bit_width),
            "integer width {} out of range 1..={}",
            bit_width,
            MAX_INT_BITS
        );
        Self { bit_width }
    }

    pub fn try_new(bit_width: u32) -> Option<Self> {
        (1..=MAX_INT_BITS)
            .contains(&bit_width)
            .then_some(Self { bit_width })
    }

    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Mask covering every bit of the type
    pub fn mask(&self) -> u128 {
        if self.bit_width == MAX_INT_BITS {
            u128::MAX
        } else {
            (1u128 << self.bit_width) - 1
        }
    }
}

impl TryFrom<u32> for IntegerType {
    type Error = String;

    fn try_from(bit_width: u32) -> Result<Self, Self::Error> {
        Self::try_new(bit_width).ok_or_else(|| {
            format!("integer width {} out of range 1..={}", bit_width, MAX_INT_BITS)
        })
    }
}

impl From<IntegerType> for u32 {
    fn from(ty: IntegerType) -> u32 {
        ty.bit_width
    }
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.bit_width)
    }
}

/// Value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Integer(IntegerType),
    Pointer,
    Float { bits: u32 },
    Void,
}

impl Type {
    /// Shorthand for `Type::Integer(IntegerType::new(bits))`
    pub fn int(bits: u32) -> Self {
        Type::Integer(IntegerType::new(bits))
    }

    pub fn as_integer(&self) -> Option<IntegerType> {
        match self {
            Type::Integer(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Integer(t) => write!(f, "{}", t),
            Type::Pointer => write!(f, "ptr"),
            Type::Float { bits } => write!(f, "f{}", bits),
            Type::Void => write!(f, "void"),
        }
    }
}

/// Integer constant in two's-complement form, masked to its type's width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConstantInt")]
pub struct ConstantInt {
    ty: IntegerType,
    bits: u128,
}

/// Unchecked on-disk form of `ConstantInt`
#[derive(Deserialize)]
struct RawConstantInt {
    ty: IntegerType,
    bits: u128,
}

impl TryFrom<RawConstantInt> for ConstantInt {
    type Error = String;

    fn try_from(raw: RawConstantInt) -> Result<Self, Self::Error> {
        if raw.bits & !raw.ty.mask() != 0 {
            return Err(format!("constant bits {:#x} exceed width of {}", raw.bits, raw.ty));
        }
        Ok(Self {
            ty: raw.ty,
            bits: raw.bits,
        })
    }
}

impl ConstantInt {
    /// Constant from a signed value, truncated to the type's width
    pub fn from_i128(ty: IntegerType, value: i128) -> Self {
        Self {
            ty,
            bits: (value as u128) & ty.mask(),
        }
    }

    pub fn zero(ty: IntegerType) -> Self {
        Self { ty, bits: 0 }
    }

    /// `-2^(bit_width - 1)`
    pub fn signed_min(ty: IntegerType) -> Self {
        Self {
            ty,
            bits: 1u128 << (ty.bit_width() - 1),
        }
    }

    /// All bits set, i.e. `-1` when read as signed
    pub fn all_ones(ty: IntegerType) -> Self {
        Self {
            ty,
            bits: ty.mask(),
        }
    }

    pub fn ty(&self) -> IntegerType {
        self.ty
    }

    pub fn raw_bits(&self) -> u128 {
        self.bits
    }

    /// Sign-extended value
    pub fn as_signed(&self) -> i128 {
        let shift = MAX_INT_BITS - self.ty.bit_width();
        ((self.bits << shift) as i128) >> shift
    }

    pub fn is_zero(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for ConstantInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_signed())
    }
}
