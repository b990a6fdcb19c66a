pub mod engine;
pub mod geometry;
pub mod surface;
pub mod text;
