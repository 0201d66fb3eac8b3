use crate::course::CourseCategory;
use leptos::*;

#[component]
fn Stat(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
        </div>
    }
}

/// Route briefing, key stats and highlights for the active category.
#[component]
pub fn CourseInfo(#[prop(into)] category: Signal<CourseCategory>) -> impl IntoView {
    let gain = Signal::derive(move || category.with(|c| c.gain.clone()));
    let cut_off = Signal::derive(move || category.with(|c| c.cut_off_time.clone()));
    let water = Signal::derive(move || category.with(|c| format!("{} Points", c.water_stations)));
    let surface = Signal::derive(move || category.with(|c| c.surface.clone()));
    let high_point = Signal::derive(move || {
        category.with(|c| format!("{:.0}m", c.dataset.profile().bounds().1.round()))
    });

    view! {
        <div class="info-card">
            <div class="info-briefing">
                <h4>"Route Briefing"</h4>
                <p>{move || category.with(|c| c.description.clone())}</p>
            </div>
            <div class="info-stats">
                <Stat label="Elevation Gain" value=gain/>
                <Stat label="COT" value=cut_off/>
                <Stat label="Water Stations" value=water/>
                <Stat label="Surface" value=surface/>
                <Stat label="Highest Point" value=high_point/>
            </div>
            <div class="info-highlights">
                <h4>"Highlights"</h4>
                <ul>
                    {move || category.with(|c| {
                        let color = c.dataset.accent_color().to_string();
                        c.highlights
                            .iter()
                            .map(|h| view! {
                                <li>
                                    <span class="highlight-dot" style=format!("background-color: {}", color)></span>
                                    {h.clone()}
                                </li>
                            })
                            .collect_view()
                    })}
                </ul>
            </div>
        </div>
    }
}
