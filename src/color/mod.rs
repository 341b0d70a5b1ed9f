pub mod cycle;
pub mod hsb;
