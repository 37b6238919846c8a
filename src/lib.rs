pub mod api;
pub mod args;
pub mod beatmaps;
pub mod database;
pub mod model;
pub mod reporter;
pub mod utils;
