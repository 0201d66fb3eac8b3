/// Log a warning message to the browser console.
///
/// Used for non-fatal problems the page recovers from on its own
/// (a timer that could not be scheduled, a missing media query API).
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&format!("Puntang: {}", msg).into());
}
