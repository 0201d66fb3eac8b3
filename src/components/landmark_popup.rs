use crate::course::{Landmark, LandmarkPosition};
use leptos::*;

/// Detail card above the active landmark marker. Anchored the same way as
/// the marker so edge landmarks stay inside the chart.
#[component]
pub fn LandmarkPopup(
    landmark: Landmark,
    total_distance_km: f64,
    /// Course elevation at the landmark
    elevation_m: f64,
    on_enter: Callback<()>,
    on_leave: Callback<()>,
    /// Fired with the landmark's own image only
    on_open_image: Callback<String>,
) -> impl IntoView {
    let position = LandmarkPosition::of(&landmark, total_distance_km);
    let image = landmark.image.clone();
    let image_src = landmark.popup_image().to_string();
    let description = landmark.popup_description().to_string();

    view! {
        <div
            id="landmark-tooltip"
            role="tooltip"
            class="landmark-popup"
            style=position.style()
            on:mouseenter=move |_| on_enter.call(())
            on:mouseleave=move |_| on_leave.call(())
        >
            <button
                class="popup-image"
                aria-label=format!("View image for {}", landmark.label)
                on:click=move |_| {
                    if let Some(src) = image.clone() {
                        on_open_image.call(src);
                    }
                }
            >
                <img src=image_src alt=""/>
                <div class="popup-badge">{format!("KM {}", landmark.distance_km)}</div>
            </button>
            <div class="popup-body" role="status" aria-live="polite">
                <div class="popup-heading">
                    <h4>{landmark.label.clone()}</h4>
                    <div class="popup-elevation">
                        <span class="popup-caption" aria-hidden="true">"Elev"</span>
                        <span>{format!("{:.0}m", elevation_m.round())}</span>
                    </div>
                </div>
                <p>{description}</p>
                <div class="popup-hint" aria-hidden="true">"Click photo to enlarge"</div>
            </div>
            <div class=format!("popup-arrow {}", position.anchor.css_class()) aria-hidden="true"></div>
        </div>
    }
}
