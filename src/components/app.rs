use crate::analytics::{track, AnalyticsEvent};
use crate::components::{CourseInfo, CourseTabs, ElevationChart};
use crate::console::log_warning;
use crate::course::{CatalogError, CourseCatalog, CourseId, Landmark};
use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};

/// Active category from `?course=`. Missing or unknown values fall back to 21K.
fn use_active_course() -> Memo<CourseId> {
    let query = use_query_map();
    create_memo(move |_| {
        query
            .with(|q| q.get("course").and_then(|v| v.parse().ok()))
            .unwrap_or_default()
    })
}

/// Course section host. A broken bundled catalog surfaces through the root
/// error boundary.
#[component]
pub fn App() -> impl IntoView {
    CourseCatalog::bundled()
        .map(|catalog| view! { <CourseSection catalog=catalog/> })
        .map_err(|e: CatalogError| {
            log_warning(&e.to_string());
            e
        })
}

#[component]
fn CourseSection(catalog: CourseCatalog) -> impl IntoView {
    let tabs: Vec<(CourseId, String)> = catalog
        .categories()
        .iter()
        .map(|c| (c.id, c.dataset.accent_color().to_string()))
        .collect();
    let catalog = store_value(catalog);
    let active = use_active_course();
    let category = create_memo(move |_| catalog.with_value(|c| c.get(active.get()).clone()));
    let dataset = create_memo(move |_| category.with(|c| c.dataset.clone()));

    let navigate = use_navigate();
    let select = Callback::new(move |id: CourseId| {
        if id == active.get_untracked() {
            return;
        }
        track(AnalyticsEvent::CourseSelected(id));
        navigate(
            &format!("/?course={}", id),
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });
    let viewed = Callback::new(move |lm: Landmark| {
        track(AnalyticsEvent::LandmarkViewed {
            course: active.get_untracked(),
            landmark: &lm.label,
        });
    });

    view! {
        <main class="container">
            <section id="course" class="course-section" aria-labelledby="course-title">
                <header class="section-header">
                    <h2 id="course-title">"The Course"</h2>
                    <p class="tagline">"Three distances, one mountain. Scrub the profile to explore every climb."</p>
                </header>

                <CourseTabs tabs=tabs active=active on_select=select/>

                <div
                    class="course-grid"
                    role="tabpanel"
                    id=move || format!("panel-{}", active.get())
                    aria-labelledby=move || format!("tab-{}", active.get())
                >
                    <div class="chart-card">
                        <div class="chart-card-header">
                            <h3>{move || category.with(|c| c.title.clone())}</h3>
                            <div class="chart-badge">
                                <span
                                    class="chart-badge-dot"
                                    style=move || dataset.with(|d| format!("background-color: {}", d.accent_color()))
                                ></span>
                                "Interactive Profile"
                            </div>
                        </div>
                        <ElevationChart dataset=dataset on_landmark_viewed=viewed/>
                    </div>
                    <CourseInfo category=category/>
                </div>
            </section>

            <footer>
                <p class="analytics-note">
                    "Analytics by "
                    <a href="https://umami.is" target="_blank" rel="noopener">"Umami"</a>
                    " · No cookies · No personal data"
                </p>
                <p>"Puntang Height Trail 2026 · Gunung Puntang, Bandung"</p>
            </footer>
        </main>
    }
}
