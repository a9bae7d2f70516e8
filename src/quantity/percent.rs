use std::fmt::{Debug, Display, Formatter};

use derive_more::{From, FromStr};
use serde::{Deserialize, Serialize};

/// Whole-percent pump efficiency as read from the site panel.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, From, FromStr, Serialize, Deserialize)]
pub struct Percent(u16);

impl Percent {
    pub const fn to_proportion(self) -> f64 {
        0.01 * self.0 as f64
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn to_proportion() {
        assert_abs_diff_eq!(Percent::from(70).to_proportion(), 0.7, epsilon = 1e-12);
    }
}
