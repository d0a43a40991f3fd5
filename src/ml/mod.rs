pub mod features;
pub mod models;
