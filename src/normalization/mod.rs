//! Bulk-import normalization: raw sheet rows into canonical figurines.

pub mod coerce;
pub mod mapper;
pub mod vocabulary;

pub use mapper::FigurineMapper;
