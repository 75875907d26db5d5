//! Vehicle categories and fee exemptions

use std::collections::HashMap;
use std::str::FromStr;

use crate::shared::errors::DomainError;

/// Vehicle category as known to the toll configuration.
///
/// The discriminants are the identifiers used in the tariff document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum VehicleCategory {
    Car = 1,
    Motorbike = 2,
    Tractor = 3,
    Emergency = 4,
    Diplomat = 5,
    Foreign = 6,
    Military = 7,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 7] = [
        Self::Car,
        Self::Motorbike,
        Self::Tractor,
        Self::Emergency,
        Self::Diplomat,
        Self::Foreign,
        Self::Military,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorbike => "motorbike",
            Self::Tractor => "tractor",
            Self::Emergency => "emergency",
            Self::Diplomat => "diplomat",
            Self::Foreign => "foreign",
            Self::Military => "military",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for VehicleCategory {
    type Error = DomainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| DomainError::UnknownVehicleCategory(id.to_string()))
    }
}

/// Accepts either the numeric identifier or the lowercase name.
impl FromStr for VehicleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Self::try_from(id);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownVehicleCategory(s.to_string()))
    }
}

/// Per-category "fully exempt" flags.
///
/// Categories without an entry are charged normally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptionSet {
    flags: HashMap<VehicleCategory, bool>,
}

impl ExemptionSet {
    pub fn new(flags: HashMap<VehicleCategory, bool>) -> Self {
        Self { flags }
    }

    pub fn is_exempt(&self, category: VehicleCategory) -> bool {
        self.flags.get(&category).copied().unwrap_or(false)
    }

    /// Number of configured entries, exempt or not.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromIterator<(VehicleCategory, bool)> for ExemptionSet {
    fn from_iter<I: IntoIterator<Item = (VehicleCategory, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
