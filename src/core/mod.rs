pub mod generator;
pub mod svg;
