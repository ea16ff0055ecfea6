use serde::Serialize;

use super::selector::VehicleKind;

/// Currency every rental quote is priced in
pub const CURRENCY: &str = "KES";

/// Attributes shared by every vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleInfo {
    fn new(make: &str, model: &str, year: i32) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
        }
    }
}

/// Passenger car. Priced per door.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub info: VehicleInfo,
    pub num_doors: u32,
}

impl Car {
    pub const COST_PER_DAY: f64 = 20.0;

    pub fn rental_cost(&self, days: i64) -> f64 {
        Self::COST_PER_DAY * days as f64 * f64::from(self.num_doors)
    }
}

impl Default for Car {
    fn default() -> Self {
        Self {
            info: VehicleInfo::new("Toyota", "Corolla", 2020),
            num_doors: 4,
        }
    }
}

/// Sport utility vehicle. Priced per seat.
#[derive(Debug, Clone, PartialEq)]
pub struct Suv {
    pub info: VehicleInfo,
    pub people_capacity: u32,
}

impl Suv {
    pub const COST_PER_DAY: f64 = 30.0;

    pub fn rental_cost(&self, days: i64) -> f64 {
        Self::COST_PER_DAY * days as f64 * f64::from(self.people_capacity)
    }
}

impl Default for Suv {
    fn default() -> Self {
        Self {
            info: VehicleInfo::new("Honda", "Pilot", 2022),
            people_capacity: 7,
        }
    }
}

/// Cargo truck. Priced per tonne of cargo capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub info: VehicleInfo,
    pub cargo_capacity_kg: f64,
}

impl Truck {
    pub const COST_PER_DAY: f64 = 50.0;

    pub fn rental_cost(&self, days: i64) -> f64 {
        Self::COST_PER_DAY * days as f64 * self.cargo_capacity_kg / 1000.0
    }
}

impl Default for Truck {
    fn default() -> Self {
        Self {
            info: VehicleInfo::new("Ford", "F-150", 2021),
            cargo_capacity_kg: 5000.0,
        }
    }
}

/// A vehicle from the rental fleet.
///
/// Day counts are not validated: zero days costs nothing and a negative
/// count produces a negative total.
#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
    Car(Car),
    Suv(Suv),
    Truck(Truck),
}

impl Vehicle {
    /// Build the fleet's vehicle for a menu choice, with its fixed defaults
    pub fn for_kind(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Car => Vehicle::Car(Car::default()),
            VehicleKind::Suv => Vehicle::Suv(Suv::default()),
            VehicleKind::Truck => Vehicle::Truck(Truck::default()),
        }
    }

    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Car(_) => VehicleKind::Car,
            Vehicle::Suv(_) => VehicleKind::Suv,
            Vehicle::Truck(_) => VehicleKind::Truck,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    pub fn info(&self) -> &VehicleInfo {
        match self {
            Vehicle::Car(car) => &car.info,
            Vehicle::Suv(suv) => &suv.info,
            Vehicle::Truck(truck) => &truck.info,
        }
    }

    pub fn rental_cost(&self, days: i64) -> f64 {
        match self {
            Vehicle::Car(car) => car.rental_cost(days),
            Vehicle::Suv(suv) => suv.rental_cost(days),
            Vehicle::Truck(truck) => truck.rental_cost(days),
        }
    }

    pub fn quote(&self, days: i64) -> RentalQuote {
        let total_cost = self.rental_cost(days);
        tracing::debug!(vehicle = self.label(), days, total_cost, "rental cost calculated");

        let info = self.info();
        RentalQuote {
            vehicle: self.label(),
            make: info.make.clone(),
            model: info.model.clone(),
            year: info.year,
            days,
            total_cost,
            currency: CURRENCY,
        }
    }
}

/// Priced rental for one vehicle over a number of days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalQuote {
    pub vehicle: &'static str,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub days: i64,
    pub total_cost: f64,
    pub currency: &'static str,
}

/// The agency's fleet: one vehicle of each kind, built once at startup.
#[derive(Debug, Clone)]
pub struct Fleet {
    car: Vehicle,
    suv: Vehicle,
    truck: Vehicle,
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            car: Vehicle::for_kind(VehicleKind::Car),
            suv: Vehicle::for_kind(VehicleKind::Suv),
            truck: Vehicle::for_kind(VehicleKind::Truck),
        }
    }

    pub fn get(&self, kind: VehicleKind) -> &Vehicle {
        match kind {
            VehicleKind::Car => &self.car,
            VehicleKind::Suv => &self.suv,
            VehicleKind::Truck => &self.truck,
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
