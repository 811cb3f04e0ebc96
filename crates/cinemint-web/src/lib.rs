pub mod runner;

pub use runner::MenuRunner;

use cinemint::MenuAction;

/// Action codes accepted by the generated `menu_action` export.
pub const ACTION_LEFT: u32 = 0;
pub const ACTION_RIGHT: u32 = 1;
pub const ACTION_CONFIRM: u32 = 2;

/// Map a host action code to a [`MenuAction`]. Unknown codes map to `None`.
pub fn action_from_code(code: u32) -> Option<MenuAction> {
    match code {
        ACTION_LEFT => Some(MenuAction::Left),
        ACTION_RIGHT => Some(MenuAction::Right),
        ACTION_CONFIRM => Some(MenuAction::Confirm),
        _ => None,
    }
}

/// Generate all `#[wasm_bindgen]` exports for a menu.
///
/// Generates:
/// - `thread_local!` storage for the MenuRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (menu_init, menu_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// cinemint_web::export_menu!(include_str!("menu.json"), "my-menu");
/// ```
///
/// # Arguments
///
/// - `$default_config`: JSON config used when `menu_init` is called with an empty string
/// - `$menu_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_menu {
    ($default_config:expr, $menu_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::MenuRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::MenuRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Menu not initialized. Call menu_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn menu_init(config_json: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let json = if config_json.trim().is_empty() { $default_config } else { config_json };
            let runner = $crate::MenuRunner::from_json(json);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $menu_name);
        }

        #[wasm_bindgen]
        pub fn menu_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn menu_key_down(key_code: u32) {
            with_runner(|r| r.push_key_down(key_code));
        }

        #[wasm_bindgen]
        pub fn menu_action(code: u32) {
            match $crate::action_from_code(code) {
                Some(action) => with_runner(|r| r.push_action(action)),
                None => log::warn!("{}: unknown action code {}", $menu_name, code),
            }
        }

        #[wasm_bindgen]
        pub fn menu_should_exit() -> bool {
            with_runner(|r| r.should_exit())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter())
        }

        #[wasm_bindgen]
        pub fn get_manifest_json() -> String {
            with_runner(|r| r.manifest_json().to_owned())
        }

        #[wasm_bindgen]
        pub fn get_labels_json() -> String {
            with_runner(|r| r.labels_json())
        }

        #[wasm_bindgen]
        pub fn get_sounds_json() -> String {
            with_runner(|r| r.sounds_json())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_models() -> u32 {
            with_runner(|r| r.max_models())
        }

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_labels() -> u32 {
            with_runner(|r| r.max_labels())
        }

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
