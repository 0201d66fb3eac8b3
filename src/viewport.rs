use crate::console::log_warning;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Width at which the chart switches to its desktop layout.
pub const WIDE_VIEWPORT_QUERY: &str = "(min-width: 768px)";

/// Reactive `matchMedia` result.
///
/// Updates whenever the query starts or stops matching, so layout choices
/// follow window resizes instead of being fixed at mount. The listener is
/// removed when the calling component is torn down.
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let (matches, set_matches) = create_signal(false);

    let Some(mql) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) else {
        log_warning(&format!("matchMedia unavailable, assuming '{}' does not match", query));
        return matches.into();
    };
    set_matches.set(mql.matches());

    let on_change = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
        set_matches.set(ev.matches());
    }) as Box<dyn Fn(web_sys::MediaQueryListEvent)>);

    if mql
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .is_err()
    {
        log_warning(&format!("could not observe media query '{}'", query));
    }

    on_cleanup(move || {
        let _ = mql
            .remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    });

    matches.into()
}

/// Whether the viewport is at least tablet width
pub fn use_wide_viewport() -> Signal<bool> {
    use_media_query(WIDE_VIEWPORT_QUERY)
}
