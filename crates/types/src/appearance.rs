//! Weight and scale enumerations that identify a drawable variant.
//!
//! Both enumerations are ordered: the declaration order is the order used to
//! measure how far apart two variants are.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a weight, scale or trait name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTraitError {
    #[error("Unknown weight: '{0}'")]
    UnknownWeight(String),

    #[error("Unknown scale: '{0}'")]
    UnknownScale(String),

    #[error("Malformed trait identifier: '{0}'")]
    Malformed(String),
}

/// Stroke weight of a symbol variant, from thinnest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weight {
    Ultralight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl Weight {
    /// All weights in their semantic order.
    pub const ALL: [Weight; 9] = [
        Weight::Ultralight,
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Medium,
        Weight::Semibold,
        Weight::Bold,
        Weight::Heavy,
        Weight::Black,
    ];

    /// Position of this weight within [`Weight::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The name used by templates and the catalog (e.g. `"Semibold"`).
    pub fn name(self) -> &'static str {
        match self {
            Weight::Ultralight => "Ultralight",
            Weight::Thin => "Thin",
            Weight::Light => "Light",
            Weight::Regular => "Regular",
            Weight::Medium => "Medium",
            Weight::Semibold => "Semibold",
            Weight::Bold => "Bold",
            Weight::Heavy => "Heavy",
            Weight::Black => "Black",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weight {
    type Err = ParseTraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weight::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| ParseTraitError::UnknownWeight(s.to_string()))
    }
}

/// Symbol scale relative to surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
    S,
    M,
    L,
}

impl Scale {
    /// All scales in their semantic order.
    pub const ALL: [Scale; 3] = [Scale::S, Scale::M, Scale::L];

    /// Position of this scale within [`Scale::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> &'static str {
        match self {
            Scale::S => "S",
            Scale::M => "M",
            Scale::L => "L",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Scale {
    type Err = ParseTraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .into_iter()
            .find(|x| x.letter() == s)
            .ok_or_else(|| ParseTraitError::UnknownScale(s.to_string()))
    }
}

/// A `(weight, scale)` pair. Unique per variant within a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolTrait {
    pub weight: Weight,
    pub scale: Scale,
}

impl SymbolTrait {
    pub fn new(weight: Weight, scale: Scale) -> Self {
        Self { weight, scale }
    }
}

impl fmt::Display for SymbolTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.weight, self.scale)
    }
}

/// Parses the canonical `{weight}-{scale}` identifier, e.g. `"Bold-L"`.
impl FromStr for SymbolTrait {
    type Err = ParseTraitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, scale) = s
            .split_once('-')
            .ok_or_else(|| ParseTraitError::Malformed(s.to_string()))?;
        Ok(SymbolTrait {
            weight: weight.parse()?,
            scale: scale.parse()?,
        })
    }
}
