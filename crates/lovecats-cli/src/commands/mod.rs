pub mod api_loader;
pub mod debug;
pub mod generate;
