pub mod analysis;
pub mod assessment;
pub mod plan;
pub mod record;
pub mod risk;
