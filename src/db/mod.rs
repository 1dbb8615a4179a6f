//! Storage layer: pool, schema, repositories

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::connect;
