use std::ops::Mul;

use crate::quantity::fuel::Liters;

quantity!(Kilograms, "kg", 1);
quantity!(Tonnes, "t", 4);

// Kilograms of CO₂ emitted per liter of diesel burned.
quantity!(KilogramsPerLiter, "kg/L", 2);

impl Kilograms {
    pub fn to_tonnes(self) -> Tonnes {
        Tonnes(self.0 / 1000.0)
    }
}

impl Mul<KilogramsPerLiter> for Liters {
    type Output = Kilograms;

    fn mul(self, rhs: KilogramsPerLiter) -> Self::Output {
        Kilograms(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn liters_to_emission_mass() {
        let mass = Liters(100.0) * KilogramsPerLiter(2.68);
        assert_abs_diff_eq!(mass.0, 268.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mass.to_tonnes().0, 0.268, epsilon = 1e-9);
    }
}
