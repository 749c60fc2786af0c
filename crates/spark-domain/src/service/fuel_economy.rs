//! Fuel economy estimate for a vehicle configuration

use crate::model::{BodyClass, EngineClass, FuelClass, VehicleConfiguration};

/// MPGe assumed for anything burning no gasoline
pub const ELECTRIC_MPG: f64 = 120.0;
pub const HYBRID_MPG: f64 = 50.0;
pub const V4_FALLBACK_MPG: f64 = 28.0;
pub const V6_FALLBACK_MPG: f64 = 22.0;
pub const V8_FALLBACK_MPG: f64 = 18.0;
pub const DEFAULT_MPG: f64 = 25.0;

/// Real-world MPG for the configurations drivers actually run
pub fn tabulated_mpg(body: BodyClass, engine: EngineClass, fuel: FuelClass) -> Option<f64> {
    use BodyClass as B;
    use EngineClass as E;
    use FuelClass as F;

    let mpg = match (body, engine, fuel) {
        (B::Coupe, E::V4, F::Gas) => 32.0,
        (B::Coupe, E::V6, F::Gas) => 28.0,
        (B::Sedan, E::V4, F::Gas) => 30.0,
        (B::Sedan, E::V6, F::Gas) => 26.0,
        (B::LargeCar, E::V6, F::Gas) => 24.0,
        (B::LargeCar, E::V8, F::Gas) => 20.0,
        (B::PickupTruck, E::V6, F::Gas) => 22.0,
        (B::PickupTruck, E::V8, F::Gas) => 18.0,
        (B::FourDoorTruck, E::V6, F::Gas) => 20.0,
        (B::FourDoorTruck, E::V8, F::Gas) => 16.0,
        (B::Minivan, E::V6, F::Gas) => 24.0,
        (B::SuvCrossover, E::V4, F::Gas) => 28.0,
        (B::SuvCrossover, E::V6, F::Gas) => 24.0,
        (B::LargeSuv, E::V6, F::Gas) => 20.0,
        (B::LargeSuv, E::V8, F::Gas) => 16.0,
        (B::Electric, E::Electric, F::Electric) => ELECTRIC_MPG,
        (B::Hybrid, E::Hybrid, F::Hybrid) => HYBRID_MPG,
        _ => return None,
    };
    Some(mpg)
}

/// Estimate MPG for any (body, engine, fuel) triple
///
/// Untabulated triples fall back by fuel first, then by engine size, then to
/// a flat default. Always positive.
pub fn estimate_fuel_economy(body: BodyClass, engine: EngineClass, fuel: FuelClass) -> f64 {
    if let Some(mpg) = tabulated_mpg(body, engine, fuel) {
        return mpg;
    }

    match (fuel, engine) {
        (FuelClass::Electric, _) => ELECTRIC_MPG,
        (FuelClass::Hybrid, _) => HYBRID_MPG,
        (_, EngineClass::V4) => V4_FALLBACK_MPG,
        (_, EngineClass::V6) => V6_FALLBACK_MPG,
        (_, EngineClass::V8) => V8_FALLBACK_MPG,
        _ => DEFAULT_MPG,
    }
}

/// [`estimate_fuel_economy`] for a validated configuration
pub fn vehicle_mpg(vehicle: &VehicleConfiguration) -> f64 {
    estimate_fuel_economy(vehicle.body(), vehicle.engine(), vehicle.fuel())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINES: [EngineClass; 5] = [
        EngineClass::V4,
        EngineClass::V6,
        EngineClass::V8,
        EngineClass::Electric,
        EngineClass::Hybrid,
    ];
    const FUELS: [FuelClass; 3] = [FuelClass::Gas, FuelClass::Electric, FuelClass::Hybrid];

    /// Every tabulated configuration with its published MPG
    const MPG_TABLE: [(BodyClass, EngineClass, FuelClass, f64); 17] = [
        (BodyClass::Coupe, EngineClass::V4, FuelClass::Gas, 32.0),
        (BodyClass::Coupe, EngineClass::V6, FuelClass::Gas, 28.0),
        (BodyClass::Sedan, EngineClass::V4, FuelClass::Gas, 30.0),
        (BodyClass::Sedan, EngineClass::V6, FuelClass::Gas, 26.0),
        (BodyClass::LargeCar, EngineClass::V6, FuelClass::Gas, 24.0),
        (BodyClass::LargeCar, EngineClass::V8, FuelClass::Gas, 20.0),
        (BodyClass::PickupTruck, EngineClass::V6, FuelClass::Gas, 22.0),
        (BodyClass::PickupTruck, EngineClass::V8, FuelClass::Gas, 18.0),
        (BodyClass::FourDoorTruck, EngineClass::V6, FuelClass::Gas, 20.0),
        (BodyClass::FourDoorTruck, EngineClass::V8, FuelClass::Gas, 16.0),
        (BodyClass::Minivan, EngineClass::V6, FuelClass::Gas, 24.0),
        (BodyClass::SuvCrossover, EngineClass::V4, FuelClass::Gas, 28.0),
        (BodyClass::SuvCrossover, EngineClass::V6, FuelClass::Gas, 24.0),
        (BodyClass::LargeSuv, EngineClass::V6, FuelClass::Gas, 20.0),
        (BodyClass::LargeSuv, EngineClass::V8, FuelClass::Gas, 16.0),
        (BodyClass::Electric, EngineClass::Electric, FuelClass::Electric, 120.0),
        (BodyClass::Hybrid, EngineClass::Hybrid, FuelClass::Hybrid, 50.0),
    ];

    #[test]
    fn test_table_values() {
        for (body, engine, fuel, expected) in MPG_TABLE {
            assert_eq!(
                tabulated_mpg(body, engine, fuel),
                Some(expected),
                "{body} / {engine} / {fuel}"
            );
            assert_eq!(
                estimate_fuel_economy(body, engine, fuel),
                expected,
                "{body} / {engine} / {fuel}"
            );
        }
    }

    #[test]
    fn test_table_has_no_extra_entries() {
        let mut tabulated = 0;
        for body in BodyClass::ALL {
            for engine in ENGINES {
                for fuel in FUELS {
                    if tabulated_mpg(body, engine, fuel).is_some() {
                        tabulated += 1;
                        assert!(
                            MPG_TABLE
                                .iter()
                                .any(|&(b, e, f, _)| (b, e, f) == (body, engine, fuel)),
                            "unexpected entry {body} / {engine} / {fuel}"
                        );
                    }
                }
            }
        }
        assert_eq!(tabulated, MPG_TABLE.len());
    }

    #[test]
    fn test_fallback_priority() {
        // Fuel wins over engine
        assert_eq!(
            estimate_fuel_economy(BodyClass::Sedan, EngineClass::V8, FuelClass::Electric),
            120.0
        );
        assert_eq!(
            estimate_fuel_economy(BodyClass::LargeSuv, EngineClass::V4, FuelClass::Hybrid),
            50.0
        );
        // Untabulated gas combinations go by engine
        assert_eq!(
            estimate_fuel_economy(BodyClass::Minivan, EngineClass::V4, FuelClass::Gas),
            28.0
        );
        assert_eq!(
            estimate_fuel_economy(BodyClass::Hybrid, EngineClass::V6, FuelClass::Gas),
            22.0
        );
        assert_eq!(
            estimate_fuel_economy(BodyClass::Coupe, EngineClass::V8, FuelClass::Gas),
            18.0
        );
        // Nothing matches
        assert_eq!(
            estimate_fuel_economy(BodyClass::Sedan, EngineClass::Electric, FuelClass::Gas),
            25.0
        );
    }

    #[test]
    fn test_always_positive() {
        for body in BodyClass::ALL {
            for engine in ENGINES {
                for fuel in FUELS {
                    assert!(estimate_fuel_economy(body, engine, fuel) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_electric_vehicle_ignores_overrides() {
        let vehicle =
            VehicleConfiguration::new(BodyClass::Electric, EngineClass::V6, FuelClass::Gas)
                .unwrap();
        assert_eq!(vehicle_mpg(&vehicle), 120.0);
    }
}
