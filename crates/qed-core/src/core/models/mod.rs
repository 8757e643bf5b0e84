pub mod properties;
pub mod report;
pub mod weights;
