//! Grid plans for L-, mirrored L- and U-shaped building footprints, and the
//! proportional filling of those plans with unit types.

/// Plans, occupancy grids, unit types, mixes and packed layouts
pub mod entities;

/// Failures reported at the boundary of the host-facing nodes
pub mod error;

/// Geometric primitives used to position grid cells and units in the world
pub mod geometry;

/// Importing requests into and exporting layouts out of this library
pub mod io;

/// Host-facing entry points which never fail past their boundary
pub mod nodes;

/// Turning a mix into placed units
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;
