pub mod api;
pub mod items;
pub mod system;
