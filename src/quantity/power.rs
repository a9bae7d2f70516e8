use std::ops::Mul;

use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(Kilowatts, "kW", 2);

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        KilowattHours(self.0 * rhs.0)
    }
}
