pub mod composite;
pub mod context;
pub mod frame;
pub mod object;
pub mod raster;
