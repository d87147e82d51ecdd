pub mod asset;
pub mod job;
pub mod transform;
