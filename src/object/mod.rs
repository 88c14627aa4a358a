pub mod data;
pub mod graphics_object;
pub mod handle;
pub mod text;
