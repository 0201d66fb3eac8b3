use crate::course::TerrainKind;
use leptos::*;

/// Terrain colour key. A titled vertical card on wide screens, a compact
/// horizontal pill otherwise.
#[component]
pub fn TerrainLegend(#[prop(into)] wide: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="terrain-legend"
            class:vertical=move || wide.get()
            class:pill=move || !wide.get()
        >
            <Show when=move || wide.get()>
                <div class="legend-title">"Terrain Guide"</div>
            </Show>
            {TerrainKind::ALL
                .iter()
                .map(|kind| view! {
                    <div class="legend-row">
                        <span class="legend-swatch" style=format!("background-color: {}", kind.color())></span>
                        <span class="legend-label">{kind.label()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
