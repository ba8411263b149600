use log::Level;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

/// Route `log` records and panics to the browser console
pub fn init() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        gloo::console::warn!("Logger already initialized:", e.to_string());
    }
}
