pub mod platform;
pub mod simulator;
pub mod web_schema;

pub use platform::WebPlatform;
pub use simulator::Simulator;

/// Generate all `#[wasm_bindgen]` exports for a sculpture.
///
/// wasm-bindgen cannot export a generic `Simulator<D>` directly, so each
/// concrete sculpture crate (one [`pixeltheater::ModelDefinition`] plus its
/// scene list) instantiates this macro once to get `thread_local!` storage
/// and the full Web/C ABI wired to that sculpture.
///
/// # Arguments
///
/// - `$model_type`: a concrete `ModelDefinition`
/// - `$build_scenes`: a `fn() -> Vec<Box<dyn Scene<$model_type>>>`
/// - `$sculpture_name`: a string literal used in the init log line
#[macro_export]
macro_rules! export_simulator {
    ($model_type:ty, $build_scenes:path, $sculpture_name:literal) => {
        use std::cell::RefCell;
        use wasm_bindgen::prelude::*;

        thread_local! {
            static SIMULATOR: RefCell<Option<$crate::Simulator<$model_type>>> = RefCell::new(None);
        }

        fn with_simulator<R>(f: impl FnOnce(&mut $crate::Simulator<$model_type>) -> R) -> R {
            SIMULATOR.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let sim = borrow.as_mut().expect("Simulator not initialized. Call init_simulator() first.");
                f(sim)
            })
        }

        #[wasm_bindgen]
        pub fn init_simulator() -> bool {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let simulator = $crate::Simulator::<$model_type>::new($build_scenes());
            SIMULATOR.with(|cell| {
                *cell.borrow_mut() = Some(simulator);
            });
            log::info!("{}: simulator initialized", $sculpture_name);
            true
        }

        #[wasm_bindgen]
        pub fn tick(dt: f32) {
            with_simulator(|s| s.tick(dt));
        }

        #[wasm_bindgen]
        pub fn change_scene(index: usize) {
            with_simulator(|s| s.change_scene(index));
        }

        #[wasm_bindgen]
        pub fn get_num_scenes() -> usize {
            with_simulator(|s| s.num_scenes())
        }

        #[wasm_bindgen]
        pub fn get_current_scene_metadata_json() -> String {
            with_simulator(|s| s.current_scene_metadata_json())
        }

        #[wasm_bindgen]
        pub fn get_scene_parameters_json() -> String {
            with_simulator(|s| s.scene_parameters_json())
        }

        #[wasm_bindgen]
        pub fn update_scene_parameter_string(name: &str, value: &str) {
            with_simulator(|s| s.update_scene_parameter_string(name, value));
        }

        #[wasm_bindgen]
        pub fn set_brightness(value: f32) {
            with_simulator(|s| s.set_brightness(value));
        }

        #[wasm_bindgen]
        pub fn get_brightness() -> f32 {
            with_simulator(|s| s.get_brightness())
        }

        #[wasm_bindgen]
        pub fn update_rotation(dyaw: f32, dpitch: f32) {
            with_simulator(|s| s.update_rotation(dyaw, dpitch));
        }

        #[wasm_bindgen]
        pub fn reset_rotation() {
            with_simulator(|s| s.reset_rotation());
        }

        #[wasm_bindgen]
        pub fn set_auto_rotation(enabled: bool, speed: f32) {
            with_simulator(|s| s.set_auto_rotation(enabled, speed));
        }

        #[wasm_bindgen]
        pub fn set_zoom_level(zoom: i32) {
            with_simulator(|s| s.set_zoom_level(zoom));
        }

        #[wasm_bindgen(js_name = resizeCanvas)]
        pub fn resize_canvas(width: u32, height: u32) {
            with_simulator(|s| s.resize_canvas(width, height));
        }

        /// String returns above are owned `String`s that wasm-bindgen copies
        /// into JS and frees on the Rust side automatically; this export
        /// exists for the ABI's documented manual-free escape hatch and is a
        /// no-op under the current (copying) string marshalling strategy.
        #[wasm_bindgen]
        pub fn free_string_memory(_ptr: *mut u8, _len: usize) {}

        #[wasm_bindgen]
        pub fn get_led_count() -> usize {
            with_simulator(|s| s.led_count())
        }

        #[wasm_bindgen]
        pub fn get_fps() -> f32 {
            with_simulator(|s| s.fps())
        }

        #[wasm_bindgen]
        pub fn toggle_debug_mode() -> bool {
            with_simulator(|s| s.toggle_debug_mode())
        }
    };
}
