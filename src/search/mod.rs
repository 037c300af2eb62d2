pub mod engine;
pub mod excerpt;
pub mod results;
