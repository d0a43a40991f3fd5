pub mod export;

pub use export::ResultExporter;
