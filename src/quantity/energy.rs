use std::ops::Mul;

use crate::quantity::fuel::{Liters, LitersPerKilowattHour};

quantity!(KilowattHours, "kWh", 1);

impl Mul<LitersPerKilowattHour> for KilowattHours {
    type Output = Liters;

    fn mul(self, rhs: LitersPerKilowattHour) -> Self::Output {
        Liters(self.0 * rhs.0)
    }
}
