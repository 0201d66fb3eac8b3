use super::{Alignment, Landmark};

/// Photo shown for a landmark without its own: the start village.
pub const FALLBACK_LANDMARK_IMAGE: &str =
    "https://images.unsplash.com/photo-1533561052669-d61518fc98a8?q=80&w=800&auto=format&fit=crop";
pub const FALLBACK_LANDMARK_DESCRIPTION: &str = "A key checkpoint on your journey to the summit.";

impl Landmark {
    /// Image for the detail popup, falling back to the start photo
    pub fn popup_image(&self) -> &str {
        self.image.as_deref().unwrap_or(FALLBACK_LANDMARK_IMAGE)
    }

    pub fn popup_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(FALLBACK_LANDMARK_DESCRIPTION)
    }
}

/// Where a landmark marker sits over the chart.
///
/// Percent-based so markers stay on their distance however the chart box is
/// resized; only the SVG geometry uses the fixed virtual canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPosition {
    pub left_percent: f64,
    pub anchor: Alignment,
}

impl LandmarkPosition {
    pub fn of(landmark: &Landmark, total_distance_km: f64) -> Self {
        Self::at(landmark.distance_km, landmark.alignment, total_distance_km)
    }

    pub fn at(distance_km: f64, anchor: Alignment, total_distance_km: f64) -> Self {
        Self {
            left_percent: distance_km / total_distance_km * 100.0,
            anchor,
        }
    }

    /// Inline style for an absolutely positioned element
    pub fn style(&self) -> String {
        format!(
            "left: {}%; transform: translateX({}%)",
            self.left_percent,
            self.anchor.translate_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark(distance_km: f64, alignment: Alignment) -> Landmark {
        Landmark {
            distance_km,
            label: "Marker".to_string(),
            description: None,
            alignment,
            image: None,
        }
    }

    #[test]
    fn test_start_landmark_at_left_edge() {
        let pos = LandmarkPosition::of(&landmark(0.0, Alignment::Start), 21.0);
        assert_eq!(pos.left_percent, 0.0);
        assert_eq!(pos.style(), "left: 0%; transform: translateX(0%)");
    }

    #[test]
    fn test_end_landmark_at_right_edge() {
        let pos = LandmarkPosition::of(&landmark(21.0, Alignment::End), 21.0);
        assert!((pos.left_percent - 100.0).abs() < 1e-10);
        assert_eq!(pos.style(), "left: 100%; transform: translateX(-100%)");
    }

    #[test]
    fn test_middle_landmark_is_centered() {
        let pos = LandmarkPosition::of(&landmark(2.5, Alignment::Middle), 5.0);
        assert!((pos.left_percent - 50.0).abs() < 1e-10);
        assert_eq!(pos.anchor.translate_percent(), -50.0);
        assert_eq!(pos.style(), "left: 50%; transform: translateX(-50%)");
    }

    #[test]
    fn test_popup_falls_back_to_start_photo_and_generic_text() {
        let lm = landmark(4.0, Alignment::Middle);
        assert_eq!(lm.popup_image(), FALLBACK_LANDMARK_IMAGE);
        assert_eq!(lm.popup_description(), FALLBACK_LANDMARK_DESCRIPTION);

        let own = Landmark {
            image: Some("https://example.com/ridge.jpg".to_string()),
            description: Some("Ridge".to_string()),
            ..lm
        };
        assert_eq!(own.popup_image(), "https://example.com/ridge.jpg");
        assert_eq!(own.popup_description(), "Ridge");
    }

    #[test]
    fn test_position_is_proportional_to_distance() {
        let pos = LandmarkPosition::of(&landmark(13.0, Alignment::Middle), 21.0);
        assert!((pos.left_percent - 13.0 / 21.0 * 100.0).abs() < 1e-10);
    }
}
