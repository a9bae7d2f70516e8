use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::carbon::Tonnes;

// Carbon price per metric ton of avoided emissions.
quantity!(DollarsPerTonne, "$/t", 2);

#[repr(transparent)]
#[derive(
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
    Clone,
    Copy,
)]
pub struct Dollars(pub f64);

impl Dollars {
    pub const fn zero() -> Self {
        Self(0.0)
    }
}

impl Display for Dollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Dollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

ordered_float!(Dollars);

impl Mul<DollarsPerTonne> for Tonnes {
    type Output = Dollars;

    fn mul(self, rhs: DollarsPerTonne) -> Self::Output {
        Dollars(self.0 * rhs.0)
    }
}
