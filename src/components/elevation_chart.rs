use crate::components::{LandmarkPopup, Lightbox, TerrainLegend};
use crate::console::log_warning;
use crate::course::{
    ChartGeometry, CourseDataset, Landmark, LandmarkPosition, PADDING_TOP, PLOT_BOTTOM,
    VIEW_WIDTH,
};
use crate::interaction::{ChartInteraction, HoverPoint, TimerCommand};
use crate::viewport::use_wide_viewport;
use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;

/// Interactive course elevation profile.
///
/// Path geometry is memoized on the dataset, so pointer events only do an
/// interpolation lookup. Hover, landmark popup and lightbox state belong to
/// this chart alone and are reset whenever `dataset` changes.
#[component]
pub fn ElevationChart(
    /// Course to draw
    #[prop(into)]
    dataset: Signal<CourseDataset>,
    /// Called when a landmark's detail popup opens
    #[prop(optional)]
    on_landmark_viewed: Option<Callback<Landmark>>,
) -> impl IntoView {
    let geometry = create_memo(move |_| dataset.with(ChartGeometry::new));
    let interaction = create_rw_signal(ChartInteraction::new());
    let close_timer = store_value(None::<TimeoutHandle>);
    let wide = use_wide_viewport();
    let chart_ref = create_node_ref::<html::Div>();

    // Memos so that pointer moves while a popup is open don't re-render it
    let hover_point = create_memo(move |_| interaction.with(|i| i.hover_point()));
    let active_landmark = create_memo(move |_| interaction.with(|i| i.active_landmark()));
    let lightbox_image =
        create_memo(move |_| interaction.with(|i| i.lightbox().map(str::to_string)));

    let cancel_timer = move || {
        if let Some(Some(handle)) = close_timer.try_update_value(Option::take) {
            handle.clear();
        }
    };

    let run_timer = move |cmd: TimerCommand| match cmd {
        TimerCommand::Keep => {}
        TimerCommand::Cancel => cancel_timer(),
        TimerCommand::Start { ticket, delay } => {
            cancel_timer();
            let fire = move || {
                let _ = close_timer.try_update_value(|h| *h = None);
                interaction.try_update(|i| i.close_elapsed(ticket));
            };
            match set_timeout_with_handle(fire, delay) {
                Ok(handle) => close_timer.set_value(Some(handle)),
                Err(_) => {
                    log_warning("could not schedule the landmark popup close, closing now");
                    interaction.update(|i| {
                        i.close_elapsed(ticket);
                    });
                }
            }
        }
    };

    // New course: drop hover/popup state that points into the old one
    create_effect(move |_| {
        dataset.with(|_| ());
        if let Some(cmd) = interaction.try_update(|i| i.reset()) {
            run_timer(cmd);
        }
    });
    on_cleanup(cancel_timer);

    let focus_landmark = move |index: usize| {
        let Some(entry) = interaction.try_update(|i| i.landmark_entered(index)) else {
            return;
        };
        run_timer(entry.timer);
        if !entry.newly_shown {
            return;
        }
        if let Some(cb) = on_landmark_viewed {
            if let Some(lm) = dataset.with_untracked(|d| d.landmarks().get(index).cloned()) {
                cb.call(lm);
            }
        }
    };
    let leave_landmark = move || {
        if let Some(cmd) = interaction.try_update(|i| i.landmark_left()) {
            run_timer(cmd);
        }
    };
    let enter_popup = move || {
        if let Some(cmd) = interaction.try_update(|i| i.popup_entered()) {
            run_timer(cmd);
        }
    };
    let leave_popup = move || {
        if let Some(cmd) = interaction.try_update(|i| i.popup_left()) {
            run_timer(cmd);
        }
    };

    let scrub = move |client_x: f64| {
        let Some(el) = chart_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let point = dataset
            .with_untracked(|d| HoverPoint::from_pointer(client_x - rect.left(), rect.width(), d));
        if let Some(p) = point {
            interaction.update(|i| i.pointer_moved(p));
        }
    };
    let end_scrub = move || interaction.update(|i| i.pointer_left());

    let accent = move || dataset.with(|d| d.accent_color().to_string());
    let gradient_id = move || format!("fill-gradient-{}", accent().trim_start_matches('#'));
    let aria_label = move || {
        let total = dataset.with(|d| d.total_distance_km());
        geometry.with(|g| {
            format!(
                "Elevation chart for {}km course. Elevation ranges from {:.0}m to {:.0}m.",
                total,
                g.min_elevation_m.round(),
                g.max_elevation_m.round()
            )
        })
    };
    let mid_grid_y = move || geometry.with(|g| g.mid_grid_y());

    let close_lightbox = Callback::new(move |_: ()| interaction.update(|i| i.close_lightbox()));
    let open_image = Callback::new(move |src: String| interaction.update(|i| i.open_lightbox(src)));
    let popup_enter = Callback::new(move |_: ()| enter_popup());
    let popup_leave = Callback::new(move |_: ()| leave_popup());

    view! {
        <div
            class="elevation-chart-frame"
            node_ref=chart_ref
            on:mousemove=move |ev| scrub(ev.client_x() as f64)
            on:mouseleave=move |_| end_scrub()
            on:touchmove=move |ev| {
                if let Some(touch) = ev.touches().get(0) {
                    scrub(touch.client_x() as f64);
                }
            }
            on:touchend=move |_| end_scrub()
        >
            <div class="topographic" aria-hidden="true"></div>

            <svg
                viewBox="0 0 1000 500"
                class="elevation-chart"
                preserveAspectRatio="none"
                role="img"
                aria-label=aria_label
            >
                <title>"Course Elevation Profile"</title>
                <desc>"A chart showing the elevation profile of the race course, including terrain types and landmarks."</desc>
                <defs>
                    <linearGradient id=gradient_id x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color=accent stop-opacity="0.3"/>
                        <stop offset="100%" stop-color=accent stop-opacity="0.05"/>
                    </linearGradient>
                </defs>

                // Grid
                <line x1="0" y1=PLOT_BOTTOM x2=VIEW_WIDTH y2=PLOT_BOTTOM class="grid-line"/>
                <line x1="0" y1=mid_grid_y x2=VIEW_WIDTH y2=mid_grid_y class="grid-line dashed"/>

                // Area under the profile
                <path
                    d=move || geometry.with(|g| g.area_path.clone())
                    fill=move || format!("url(#{})", gradient_id())
                    pointer-events="none"
                />

                // Terrain-coloured profile line
                {move || geometry.with(|g| {
                    g.terrain_paths
                        .iter()
                        .map(|p| view! {
                            <path
                                d=p.d.clone()
                                class="terrain-stroke"
                                fill="none"
                                stroke=p.color()
                                stroke-width="4"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            />
                        })
                        .collect_view()
                })}

                // Crosshair
                {move || hover_point.get().map(|p| {
                    let (x, y) = geometry.with(|g| (g.mapper.x(p.distance_km), g.mapper.y(p.elevation_m)));
                    view! {
                        <g class="hover-crosshair">
                            <line x1=x y1=PADDING_TOP x2=x y2=PLOT_BOTTOM stroke=accent stroke-width="2"/>
                            <circle cx=x cy=y r="6" fill="white" stroke=accent stroke-width="3"/>
                        </g>
                    }
                })}
            </svg>

            <TerrainLegend wide=wide/>

            // Landmark markers, positioned in percent of the chart width
            <div class="landmark-layer">
                {move || dataset.with(|d| {
                    let total = d.total_distance_km();
                    let color = d.accent_color().to_string();
                    d.landmarks()
                        .iter()
                        .enumerate()
                        .map(|(index, lm)| {
                            let is_active = move || active_landmark.get() == Some(index);
                            view! {
                                <button
                                    class="landmark-marker"
                                    class:active=is_active
                                    style=LandmarkPosition::of(lm, total).style()
                                    on:mouseenter=move |_| focus_landmark(index)
                                    on:mouseleave=move |_| leave_landmark()
                                    on:focus=move |_| focus_landmark(index)
                                    on:blur=move |_| leave_landmark()
                                    aria-label=format!("Landmark: {} at {} km", lm.label, lm.distance_km)
                                    aria-haspopup="true"
                                    aria-expanded=move || is_active().to_string()
                                    aria-controls=move || is_active().then_some("landmark-tooltip")
                                >
                                    <div class="landmark-stem" style=format!("border-color: {}", color)></div>
                                    <div class="landmark-dot" style=format!("border-color: {}", color)></div>
                                    <div
                                        class="landmark-label"
                                        class:hidden=move || !(wide.get() || is_active())
                                    >
                                        {lm.label.clone()}
                                    </div>
                                    <div class="landmark-hit-area"></div>
                                </button>
                            }
                        })
                        .collect_view()
                })}
            </div>

            // Scrubbing tooltip
            {move || hover_point.get().map(|p| {
                let left = dataset.with(|d| p.distance_km / d.total_distance_km() * 100.0);
                view! {
                    <div class="hover-tooltip" style=format!("left: {}%", left) aria-hidden="true">
                        <div class="tooltip-cell">
                            <span class="tooltip-caption">"Dist"</span>
                            <span class="tooltip-value">{format!("{:.1}", p.distance_km)}<small>"km"</small></span>
                        </div>
                        <div class="tooltip-divider"></div>
                        <div class="tooltip-cell">
                            <span class="tooltip-caption">"Elev"</span>
                            <span class="tooltip-value" style=format!("color: {}", accent())>
                                {format!("{:.0}", p.elevation_m.round())}<small>"m"</small>
                            </span>
                        </div>
                    </div>
                }
            })}

            // Landmark detail popup
            {move || active_landmark.get().and_then(|index| {
                dataset.with(|d| {
                    let lm = d.landmarks().get(index)?.clone();
                    let elevation_m = d.elevation_at(lm.distance_km);
                    Some(view! {
                        <LandmarkPopup
                            landmark=lm
                            total_distance_km=d.total_distance_km()
                            elevation_m=elevation_m
                            on_enter=popup_enter
                            on_leave=popup_leave
                            on_open_image=open_image
                        />
                    })
                })
            })}
        </div>

        {move || lightbox_image.get().map(|src| view! {
            <Lightbox image=src on_close=close_lightbox/>
        })}
    }
}
