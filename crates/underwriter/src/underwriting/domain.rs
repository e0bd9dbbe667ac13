use serde::{Deserialize, Serialize};

/// Vehicle categories recognized by the rate and term tables.
///
/// Parsing is case-insensitive and total: anything the tables do not know
/// resolves to [`VehicleType::Standard`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    NewCar,
    UsedCar,
    LuxuryVehicle,
    CommercialVehicle,
    ElectricVehicle,
    ClassicVehicle,
    Standard,
}

impl VehicleType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "new_car" => Self::NewCar,
            "used_car" => Self::UsedCar,
            "luxury_vehicle" => Self::LuxuryVehicle,
            "commercial_vehicle" => Self::CommercialVehicle,
            "electric_vehicle" => Self::ElectricVehicle,
            "classic_vehicle" => Self::ClassicVehicle,
            _ => Self::Standard,
        }
    }

    pub fn parse_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or(Self::Standard)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewCar => "new_car",
            Self::UsedCar => "used_car",
            Self::LuxuryVehicle => "luxury_vehicle",
            Self::CommercialVehicle => "commercial_vehicle",
            Self::ElectricVehicle => "electric_vehicle",
            Self::ClassicVehicle => "classic_vehicle",
            Self::Standard => "standard",
        }
    }
}

/// Three-way risk label shared by the scorer's tier and its informational
/// sub-labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Final categorical underwriting outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionCategory {
    Approved,
    ApprovedWithConditions,
    PendingReview,
    Rejected,
}

impl DecisionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::ApprovedWithConditions => "approved_with_conditions",
            Self::PendingReview => "pending_review",
            Self::Rejected => "rejected",
        }
    }

    /// Terms are attached only when financing was actually offered.
    pub const fn offers_financing(self) -> bool {
        matches!(self, Self::Approved | Self::ApprovedWithConditions)
    }
}

/// Round to cents.
pub(crate) fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a percentage to three decimal places.
pub(crate) fn round_rate(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
