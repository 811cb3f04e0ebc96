use wasm_bindgen::prelude::*;

/// Menu config baked into the module; `menu_init("")` uses it.
pub const MENU_CONFIG: &str = include_str!("menu.json");

cinemint_web::export_menu!(MENU_CONFIG, "streaming-box");
