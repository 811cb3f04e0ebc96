pub mod color;
pub mod menu_item;
pub mod model;
