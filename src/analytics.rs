use crate::course::CourseId;
use std::fmt;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Custom events reported to Umami.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEvent<'a> {
    /// A course tab was picked
    CourseSelected(CourseId),
    /// A landmark's detail popup opened
    LandmarkViewed { course: CourseId, landmark: &'a str },
}

impl fmt::Display for AnalyticsEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsEvent::CourseSelected(course) => write!(f, "course-selected:{}", course),
            AnalyticsEvent::LandmarkViewed { course, landmark } => {
                write!(f, "landmark-viewed:{}:{}", course, landmark)
            }
        }
    }
}

fn umami_loaded() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("umami"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// Report `event`. Does nothing when the Umami script is blocked or missing.
pub fn track(event: AnalyticsEvent<'_>) {
    if umami_loaded() {
        umami_track(&event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(
            AnalyticsEvent::CourseSelected(CourseId::TenK).to_string(),
            "course-selected:10K"
        );
        let viewed = AnalyticsEvent::LandmarkViewed {
            course: CourseId::TwentyOneK,
            landmark: "Puncak Mega",
        };
        assert_eq!(viewed.to_string(), "landmark-viewed:21K:Puncak Mega");
    }
}
