pub mod analytics;
pub mod components;
pub mod console;
pub mod course;
pub mod interaction;
pub mod pages;
pub mod viewport;

use components::App;
use leptos::*;
use leptos_router::*;
use pages::NotFoundPage;
use wasm_bindgen::prelude::*;

/// Shown in place of the course section when it fails to render.
#[component]
fn LoadFailure(errors: RwSignal<Errors>) -> impl IntoView {
    let reload = move |_: ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };
    let details = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
            .collect_view()
    };

    view! {
        <main class="container">
            <section class="error-container" role="alert">
                <h2>"The course map is unavailable"</h2>
                <p>"Route data could not be loaded. Reloading usually helps."</p>
                <details>
                    <summary>"Details"</summary>
                    <ul>{details}</ul>
                </details>
                <button on:click=reload>"Reload"</button>
            </section>
        </main>
    }
}

#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! { <LoadFailure errors=errors/> }>
            <Router>
                <Routes>
                    <Route path="/" view=App/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
