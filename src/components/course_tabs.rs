use crate::course::CourseId;
use leptos::*;

/// Category switcher. The active tab is filled with its course's accent colour.
#[component]
pub fn CourseTabs(
    /// Tab order with each course's accent colour
    tabs: Vec<(CourseId, String)>,
    #[prop(into)] active: Signal<CourseId>,
    on_select: Callback<CourseId>,
) -> impl IntoView {
    view! {
        <div class="course-tabs" role="tablist" aria-label="Course distances">
            {tabs
                .into_iter()
                .map(|(id, color)| {
                    let is_active = move || active.get() == id;
                    view! {
                        <button
                            role="tab"
                            id=format!("tab-{}", id)
                            aria-controls=format!("panel-{}", id)
                            aria-selected=move || is_active().to_string()
                            class="course-tab"
                            class:active=is_active
                            style=move || {
                                if is_active() {
                                    format!("background-color: {}", color)
                                } else {
                                    String::new()
                                }
                            }
                            on:click=move |_| on_select.call(id)
                        >
                            {id.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
