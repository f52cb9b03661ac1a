/// Geometric primitives
pub mod primitives;
