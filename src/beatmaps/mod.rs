pub mod calculator;
pub mod loader;
