use leptos::*;

/// Full-screen image viewer. Closes on backdrop click, the close button or Escape.
#[component]
pub fn Lightbox(image: String, on_close: Callback<()>) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label="Landmark image details"
            on:click=move |_| on_close.call(())
        >
            <button
                class="lightbox-close"
                aria-label="Close image"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_close.call(());
                }
            >
                "\u{00D7}"
            </button>
            <div class="lightbox-frame" on:click=|ev| ev.stop_propagation()>
                <img src=image alt="Landmark Zoom"/>
            </div>
        </div>
    }
}
