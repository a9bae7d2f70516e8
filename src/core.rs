pub mod curve;
pub mod forecast;
pub mod metrics;
pub mod observation;
pub mod pump;
pub mod savings;
pub mod series;
pub mod status;
