use std::fmt;
use std::str::FromStr;

/// Which vehicle the customer picked from the rental menu.
///
/// The menu numbers are fixed: 1 = Car, 2 = SUV, 3 = Truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Suv,
    Truck,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Carries the raw input so it can be echoed back to the user
    #[error("{0} not recognized. Please follow the instructions above.")]
    Unrecognized(String),
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Suv, VehicleKind::Truck];

    /// Menu number shown to the user
    pub fn selector(self) -> u8 {
        match self {
            VehicleKind::Car => 1,
            VehicleKind::Suv => 2,
            VehicleKind::Truck => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Suv => "SUV",
            VehicleKind::Truck => "Truck",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(1) => Ok(VehicleKind::Car),
            Ok(2) => Ok(VehicleKind::Suv),
            Ok(3) => Ok(VehicleKind::Truck),
            _ => Err(SelectorError::Unrecognized(s.to_string())),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
