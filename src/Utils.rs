/// Uniform grid construction for the spectrum generators
pub mod grid;
/// Console logger setup built on simplelog
pub mod logger;
