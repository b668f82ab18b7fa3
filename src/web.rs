//! Browser glue: `localStorage` preferences, `requestAnimationFrame`
//! scheduling and console logging.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::error::ViewError;
use crate::prefs::PreferenceStore;
use crate::util::frame_timing::FrameScheduler;

const FOOTER_OPEN_KEY: &str = "footerOpen";
const FOOTER_HEIGHT_KEY: &str = "footerHeight";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;
}

/// Route `log` output to the browser console and install the panic hook.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Footer preferences in `localStorage`.
///
/// Private browsing or disabled storage makes every read return `None` and
/// every write fail; the app view ignores both.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    fn get(key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(key: &str, value: &str) -> Result<(), ViewError> {
        let storage = local_storage().ok_or_else(|| {
            ViewError::Preferences("localStorage unavailable".to_owned())
        })?;
        storage
            .set_item(key, value)
            .map_err(|e| ViewError::Preferences(format!("{key}: {e:?}")))
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn footer_open(&self) -> Option<bool> {
        // Anything but an explicit "false" counts as open.
        Self::get(FOOTER_OPEN_KEY).map(|v| v != "false")
    }

    fn footer_height(&self) -> Option<f64> {
        Self::get(FOOTER_HEIGHT_KEY)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|h| h.is_finite())
    }

    fn save_footer_open(&mut self, open: bool) -> Result<(), ViewError> {
        Self::set(FOOTER_OPEN_KEY, if open { "true" } else { "false" })
    }

    fn save_footer_height(&mut self, height: f64) -> Result<(), ViewError> {
        Self::set(FOOTER_HEIGHT_KEY, &height.to_string())
    }
}

/// Frame scheduler backed by `requestAnimationFrame`.
///
/// The callback usually ticks the app view. One closure is registered per
/// requested frame; the animator never asks twice for the same frame.
pub struct RafScheduler {
    closure: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    /// Scheduler invoking `on_frame` with the frame timestamp in ms.
    pub fn new(on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            closure: Closure::new(on_frame),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let _ = request_animation_frame(self.closure.as_ref());
    }
}

impl std::fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RafScheduler").finish_non_exhaustive()
    }
}
