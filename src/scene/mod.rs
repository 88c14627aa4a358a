pub mod config;
pub mod def;
pub mod layer;
pub mod system;
