//! Data types flowing through the engine.

pub mod record;
pub mod row;
pub mod segment;
pub mod spec_map;
