//! Vehicle configuration used to estimate fuel economy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spark_types::{Error, Result};

/// Body class of the delivery vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyClass {
    Coupe,
    Sedan,
    #[serde(rename = "Large Car")]
    LargeCar,
    #[serde(rename = "Pickup Truck")]
    PickupTruck,
    #[serde(rename = "4-Door Truck")]
    FourDoorTruck,
    Minivan,
    #[serde(rename = "SUV (Crossover)")]
    SuvCrossover,
    #[serde(rename = "Large SUV")]
    LargeSuv,
    Electric,
    Hybrid,
}

impl BodyClass {
    pub const ALL: [BodyClass; 10] = [
        BodyClass::Coupe,
        BodyClass::Sedan,
        BodyClass::LargeCar,
        BodyClass::PickupTruck,
        BodyClass::FourDoorTruck,
        BodyClass::Minivan,
        BodyClass::SuvCrossover,
        BodyClass::LargeSuv,
        BodyClass::Electric,
        BodyClass::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BodyClass::Coupe => "Coupe",
            BodyClass::Sedan => "Sedan",
            BodyClass::LargeCar => "Large Car",
            BodyClass::PickupTruck => "Pickup Truck",
            BodyClass::FourDoorTruck => "4-Door Truck",
            BodyClass::Minivan => "Minivan",
            BodyClass::SuvCrossover => "SUV (Crossover)",
            BodyClass::LargeSuv => "Large SUV",
            BodyClass::Electric => "Electric",
            BodyClass::Hybrid => "Hybrid",
        }
    }

    /// Engine and fuel a body class is locked to, if any
    fn forced_drivetrain(&self) -> Option<(EngineClass, FuelClass)> {
        match self {
            BodyClass::Electric => Some((EngineClass::Electric, FuelClass::Electric)),
            BodyClass::Hybrid => Some((EngineClass::Hybrid, FuelClass::Hybrid)),
            _ => None,
        }
    }
}

/// Engine class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineClass {
    V4,
    V6,
    V8,
    Electric,
    Hybrid,
}

impl EngineClass {
    pub fn label(&self) -> &'static str {
        match self {
            EngineClass::V4 => "V4",
            EngineClass::V6 => "V6",
            EngineClass::V8 => "V8",
            EngineClass::Electric => "Electric",
            EngineClass::Hybrid => "Hybrid",
        }
    }

    pub fn is_gas(&self) -> bool {
        matches!(self, EngineClass::V4 | EngineClass::V6 | EngineClass::V8)
    }
}

/// Fuel class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelClass {
    Gas,
    Electric,
    Hybrid,
}

impl FuelClass {
    pub fn label(&self) -> &'static str {
        match self {
            FuelClass::Gas => "Gas",
            FuelClass::Electric => "Electric",
            FuelClass::Hybrid => "Hybrid",
        }
    }
}

/// A validated (body, engine, fuel) combination
///
/// Electric and Hybrid bodies always carry their own drivetrain; any engine or
/// fuel passed alongside them is ignored. Every other body needs a gas engine
/// burning Gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VehicleFields")]
pub struct VehicleConfiguration {
    body: BodyClass,
    engine: EngineClass,
    fuel: FuelClass,
}

impl VehicleConfiguration {
    pub fn new(body: BodyClass, engine: EngineClass, fuel: FuelClass) -> Result<Self> {
        if let Some((engine, fuel)) = body.forced_drivetrain() {
            return Ok(Self { body, engine, fuel });
        }

        if !engine.is_gas() {
            return Err(Error::InvalidVehicle(format!(
                "{} cannot use a {} engine",
                body.label(),
                engine.label()
            )));
        }
        if fuel != FuelClass::Gas {
            return Err(Error::InvalidVehicle(format!(
                "{} with a {} engine must run on Gas, not {}",
                body.label(),
                engine.label(),
                fuel.label()
            )));
        }

        Ok(Self { body, engine, fuel })
    }

    /// Electric or Hybrid body with its forced drivetrain
    pub fn alternative(body: BodyClass) -> Option<Self> {
        body.forced_drivetrain()
            .map(|(engine, fuel)| Self { body, engine, fuel })
    }

    /// Gas vehicle with the given engine
    pub fn gas(body: BodyClass, engine: EngineClass) -> Result<Self> {
        Self::new(body, engine, FuelClass::Gas)
    }

    pub fn body(&self) -> BodyClass {
        self.body
    }

    pub fn engine(&self) -> EngineClass {
        self.engine
    }

    pub fn fuel(&self) -> FuelClass {
        self.fuel
    }
}

/// Unvalidated shape used when reading a configuration back from disk
#[derive(Deserialize)]
struct VehicleFields {
    body: BodyClass,
    engine: EngineClass,
    fuel: FuelClass,
}

impl TryFrom<VehicleFields> for VehicleConfiguration {
    type Error = Error;

    fn try_from(fields: VehicleFields) -> Result<Self> {
        Self::new(fields.body, fields.engine, fields.fuel)
    }
}

impl Default for VehicleConfiguration {
    fn default() -> Self {
        Self {
            body: BodyClass::Sedan,
            engine: EngineClass::V6,
            fuel: FuelClass::Gas,
        }
    }
}

impl fmt::Display for VehicleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.forced_drivetrain().is_some() {
            write!(f, "{}", self.body.label())
        } else {
            write!(
                f,
                "{} / {} / {}",
                self.body.label(),
                self.engine.label(),
                self.fuel.label()
            )
        }
    }
}

impl fmt::Display for BodyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for EngineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for FuelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercase and drop separators so "Large SUV", "large-suv" and "largesuv" match
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '(' | ')'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for BodyClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "coupe" => Ok(BodyClass::Coupe),
            "sedan" => Ok(BodyClass::Sedan),
            "largecar" => Ok(BodyClass::LargeCar),
            "pickup" | "pickuptruck" => Ok(BodyClass::PickupTruck),
            "4doortruck" | "fourdoortruck" => Ok(BodyClass::FourDoorTruck),
            "minivan" => Ok(BodyClass::Minivan),
            "suv" | "crossover" | "suvcrossover" => Ok(BodyClass::SuvCrossover),
            "largesuv" => Ok(BodyClass::LargeSuv),
            "electric" | "ev" => Ok(BodyClass::Electric),
            "hybrid" => Ok(BodyClass::Hybrid),
            _ => Err(format!("unknown body class: {s}")),
        }
    }
}

impl FromStr for EngineClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "v4" | "4cylinder" | "i4" => Ok(EngineClass::V4),
            "v6" | "6cylinder" => Ok(EngineClass::V6),
            "v8" | "8cylinder" => Ok(EngineClass::V8),
            "electric" | "electricmotor" => Ok(EngineClass::Electric),
            "hybrid" | "hybridsystem" => Ok(EngineClass::Hybrid),
            _ => Err(format!("unknown engine class: {s}")),
        }
    }
}

impl FromStr for FuelClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "gas" | "gasoline" | "petrol" => Ok(FuelClass::Gas),
            "electric" => Ok(FuelClass::Electric),
            "hybrid" => Ok(FuelClass::Hybrid),
            _ => Err(format!("unknown fuel class: {s}")),
        }
    }
}
