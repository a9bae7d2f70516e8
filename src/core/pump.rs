use crate::quantity::{
    length::{Meters, MetersPerSecondSquared},
    percent::Percent,
    power::Kilowatts,
    water::CubicMetersPerHour,
};

/// Hydraulic pump output for the given electrical input.
///
/// A non-positive head is a degenerate site configuration: there is nothing
/// to lift against, so the flow is reported as zero instead of dividing by it.
#[must_use]
pub fn flow_rate(
    power: Kilowatts,
    efficiency: Percent,
    gravity: MetersPerSecondSquared,
    head: Meters,
) -> CubicMetersPerHour {
    if head <= Meters::zero() {
        return CubicMetersPerHour::zero();
    }
    CubicMetersPerHour(power.0 * 1000.0 * efficiency.to_proportion() / (gravity.0 * head.0))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;

    const GRAVITY: MetersPerSecondSquared = MetersPerSecondSquared(9.81);

    #[test]
    fn example_site() {
        let flow = flow_rate(Kilowatts(15.0), Percent::from(70), GRAVITY, Meters(50.0));
        assert_abs_diff_eq!(flow.0, 21.41, epsilon = 0.01);
    }

    #[test]
    fn non_positive_head_yields_zero_flow() {
        for head in [Meters(0.0), Meters(-3.0)] {
            let flow = flow_rate(Kilowatts(15.0), Percent::from(70), GRAVITY, head);
            assert_eq!(flow, CubicMetersPerHour::zero());
        }
    }

    #[test]
    fn monotone_in_power() {
        let flows = (0..=20)
            .map(|step| flow_rate(Kilowatts(2.5 * f64::from(step)), Percent::from(70), GRAVITY, Meters(50.0)))
            .collect_vec();
        assert!(flows.iter().tuple_windows().all(|(lower, upper)| lower <= upper));
    }

    #[test]
    fn monotone_in_efficiency() {
        let flows = [40_u16, 50, 60, 70, 80, 90]
            .map(|percent| flow_rate(Kilowatts(15.0), Percent::from(percent), GRAVITY, Meters(50.0)));
        assert!(flows.iter().tuple_windows().all(|(lower, upper)| lower <= upper));
    }

    #[test]
    fn anti_monotone_in_head() {
        let flows = (1..=10)
            .map(|step| flow_rate(Kilowatts(15.0), Percent::from(70), GRAVITY, Meters(10.0 * f64::from(step))))
            .collect_vec();
        assert!(flows.iter().tuple_windows().all(|(shallow, deep)| shallow >= deep));
    }
}
