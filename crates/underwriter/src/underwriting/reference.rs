//! Read-only reference tables shared by the pipeline components.
//!
//! The comprehensive evaluator and the decision generator each carry their
//! own vehicle weighting. The two tables look similar but are not the same
//! rubric; keep them separate.

use super::domain::VehicleType;
use serde::Serialize;

/// Base annual interest rate (fraction) by credit tier.
pub fn base_rate(credit_score: i64) -> f64 {
    if credit_score >= 750 {
        0.035
    } else if credit_score >= 700 {
        0.045
    } else if credit_score >= 650 {
        0.065
    } else {
        0.085
    }
}

/// Signed rate delta (fraction) applied on top of the credit-tier base.
pub fn rate_adjustment(vehicle: VehicleType) -> f64 {
    match vehicle {
        VehicleType::NewCar => 0.0,
        VehicleType::UsedCar => 0.005,
        VehicleType::LuxuryVehicle => 0.01,
        VehicleType::CommercialVehicle => 0.015,
        VehicleType::ElectricVehicle => -0.0025,
        VehicleType::ClassicVehicle => 0.0125,
        VehicleType::Standard => 0.0,
    }
}

/// Default loan term in months for the standalone term calculator.
pub fn default_term_months(vehicle: VehicleType) -> u32 {
    match vehicle {
        VehicleType::NewCar | VehicleType::ElectricVehicle => 72,
        VehicleType::UsedCar | VehicleType::LuxuryVehicle | VehicleType::Standard => 60,
        VehicleType::CommercialVehicle => 48,
        VehicleType::ClassicVehicle => 36,
    }
}

/// Vehicle factor for the comprehensive evaluator (max 25, default 18).
pub fn assessment_vehicle_factor(vehicle: VehicleType) -> u32 {
    match vehicle {
        VehicleType::NewCar => 25,
        VehicleType::ElectricVehicle => 22,
        VehicleType::UsedCar => 20,
        VehicleType::LuxuryVehicle => 15,
        VehicleType::CommercialVehicle => 14,
        VehicleType::ClassicVehicle => 12,
        VehicleType::Standard => 18,
    }
}

/// Vehicle bonus for the decision generator (default 5).
pub fn decision_vehicle_bonus(vehicle: VehicleType) -> u32 {
    match vehicle {
        VehicleType::NewCar | VehicleType::ElectricVehicle => 10,
        VehicleType::UsedCar => 8,
        VehicleType::CommercialVehicle => 6,
        VehicleType::ClassicVehicle => 4,
        VehicleType::LuxuryVehicle | VehicleType::Standard => 5,
    }
}

/// Financing constraints and category data for the special-vehicle lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub vehicle_type: VehicleType,
    pub category: &'static str,
    /// Empty means any make qualifies.
    pub eligible_makes: &'static [&'static str],
    pub max_term_months: u32,
    pub max_loan_to_value: f64,
    pub min_down_payment: f64,
    pub rate_adjustment: f64,
    pub default_term_months: u32,
}

/// Lookup is total: unknown vehicle strings fall back to the standard
/// profile rather than erroring.
pub fn vehicle_profile(vehicle: VehicleType) -> VehicleProfile {
    let (category, eligible_makes, max_term_months, max_loan_to_value, min_down_payment): (
        &'static str,
        &'static [&'static str],
        u32,
        f64,
        f64,
    ) = match vehicle {
            VehicleType::NewCar => ("standard", &[][..], 84, 1.0, 0.0),
            VehicleType::UsedCar => ("standard", &[][..], 72, 0.9, 0.1),
            VehicleType::LuxuryVehicle => (
                "luxury",
                &["BMW", "Mercedes-Benz", "Porsche", "Audi", "Lexus"][..],
                60,
                0.8,
                0.2,
            ),
            VehicleType::CommercialVehicle => (
                "commercial",
                &["Ford", "RAM", "Freightliner", "Isuzu"][..],
                48,
                0.85,
                0.15,
            ),
            VehicleType::ElectricVehicle => (
                "electric",
                &["Tesla", "Rivian", "Polestar", "Nissan", "Hyundai"][..],
                84,
                0.9,
                0.1,
            ),
            VehicleType::ClassicVehicle => (
                "collector",
                &["Chevrolet", "Ford", "Jaguar", "Porsche"][..],
                36,
                0.7,
                0.25,
            ),
            VehicleType::Standard => ("standard", &[][..], 72, 0.9, 0.1),
        };

    VehicleProfile {
        vehicle_type: vehicle,
        category,
        eligible_makes,
        max_term_months,
        max_loan_to_value,
        min_down_payment,
        rate_adjustment: rate_adjustment(vehicle),
        default_term_months: default_term_months(vehicle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rate_tiers_cover_all_scores() {
        assert_eq!(base_rate(850), 0.035);
        assert_eq!(base_rate(750), 0.035);
        assert_eq!(base_rate(749), 0.045);
        assert_eq!(base_rate(700), 0.045);
        assert_eq!(base_rate(650), 0.065);
        assert_eq!(base_rate(649), 0.085);
        assert_eq!(base_rate(300), 0.085);
    }

    #[test]
    fn unknown_vehicle_gets_documented_defaults() {
        let fallback = VehicleType::parse("submarine");
        assert_eq!(rate_adjustment(fallback), 0.0);
        assert_eq!(default_term_months(fallback), 60);
        assert_eq!(assessment_vehicle_factor(fallback), 18);
        assert_eq!(decision_vehicle_bonus(fallback), 5);
        assert_eq!(vehicle_profile(fallback).category, "standard");
    }

    #[test]
    fn adjustments_stay_within_documented_range() {
        for vehicle in [
            VehicleType::NewCar,
            VehicleType::UsedCar,
            VehicleType::LuxuryVehicle,
            VehicleType::CommercialVehicle,
            VehicleType::ElectricVehicle,
            VehicleType::ClassicVehicle,
        ] {
            let delta = rate_adjustment(vehicle);
            assert!((-0.0025..=0.015).contains(&delta), "{vehicle:?} out of range");
        }
    }

    #[test]
    fn luxury_profile_constrains_financing() {
        let profile = vehicle_profile(VehicleType::LuxuryVehicle);
        assert_eq!(profile.category, "luxury");
        assert!(profile.eligible_makes.contains(&"Porsche"));
        assert_eq!(profile.max_term_months, 60);
        assert_eq!(profile.max_loan_to_value, 0.8);
        assert_eq!(profile.min_down_payment, 0.2);
    }
}
