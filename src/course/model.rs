use super::ElevationProfile;
use serde::Deserialize;
use thiserror::Error;

/// One measured point of a course's elevation profile.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElevationSample {
    pub distance_km: f64,
    pub elevation_m: f64,
}

impl ElevationSample {
    pub fn new(distance_km: f64, elevation_m: f64) -> Self {
        Self {
            distance_km,
            elevation_m,
        }
    }
}

/// Running difficulty of a stretch of trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    Runnable,
    Technical,
    Steep,
}

impl TerrainKind {
    /// Legend order
    pub const ALL: [TerrainKind; 3] = [
        TerrainKind::Runnable,
        TerrainKind::Technical,
        TerrainKind::Steep,
    ];

    /// Stroke colour used for this kind of terrain
    pub fn color(&self) -> &'static str {
        match self {
            TerrainKind::Runnable => "#059669",
            TerrainKind::Technical => "#D97706",
            TerrainKind::Steep => "#DC2626",
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            TerrainKind::Runnable => "Runnable",
            TerrainKind::Technical => "Technical",
            TerrainKind::Steep => "Steep/Scree",
        }
    }
}

/// A labelled sub-range `[start_km, end_km]` of the course.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TerrainSegment {
    pub start_km: f64,
    pub end_km: f64,
    pub kind: TerrainKind,
}

/// Which edge of a landmark marker sits on its distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    #[default]
    Middle,
    End,
}

impl Alignment {
    /// Horizontal shift of the marker body, as a percentage of its own width.
    pub fn translate_percent(&self) -> f64 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Middle => -50.0,
            Alignment::End => -100.0,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Middle => "middle",
            Alignment::End => "end",
        }
    }
}

/// A point of interest along the route
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Landmark {
    pub distance_km: f64,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub image: Option<String>,
}

/// Reasons a course cannot be charted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    #[error("course has no elevation samples")]
    EmptySamples,
    #[error("total distance must be a positive number of km, got {0}")]
    InvalidTotalDistance(f64),
    #[error("sample {index} has a non-finite distance or elevation")]
    NonFiniteSample { index: usize },
    #[error("sample {index} at {distance_km} km lies outside 0..={total_km} km")]
    SampleOutOfRange {
        index: usize,
        distance_km: f64,
        total_km: f64,
    },
    #[error("terrain segment {index} is empty or reversed ({start_km}..{end_km} km)")]
    EmptySegment {
        index: usize,
        start_km: f64,
        end_km: f64,
    },
    #[error("terrain segment {index} ({start_km}..{end_km} km) lies outside 0..={total_km} km")]
    SegmentOutOfRange {
        index: usize,
        start_km: f64,
        end_km: f64,
        total_km: f64,
    },
    #[error("terrain segments {first} and {second} overlap")]
    OverlappingSegments { first: usize, second: usize },
    #[error("landmark '{label}' at {distance_km} km lies outside 0..={total_km} km")]
    LandmarkOutOfRange {
        label: String,
        distance_km: f64,
        total_km: f64,
    },
}

/// Everything the elevation chart needs to draw one course.
///
/// Only constructed through [`CourseDataset::new`] (or deserialization,
/// which goes through the same checks), so a dataset in hand always has at
/// least one sample and in-range, non-overlapping segments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "CourseDatasetSpec")]
pub struct CourseDataset {
    total_distance_km: f64,
    profile: ElevationProfile,
    terrain_segments: Vec<TerrainSegment>,
    landmarks: Vec<Landmark>,
    accent_color: String,
}

/// Unvalidated wire form of a [`CourseDataset`].
#[derive(Deserialize)]
struct CourseDatasetSpec {
    total_distance_km: f64,
    samples: Vec<ElevationSample>,
    #[serde(default)]
    terrain_segments: Vec<TerrainSegment>,
    #[serde(default)]
    landmarks: Vec<Landmark>,
    accent_color: String,
}

impl TryFrom<CourseDatasetSpec> for CourseDataset {
    type Error = CourseError;

    fn try_from(spec: CourseDatasetSpec) -> Result<Self, Self::Error> {
        CourseDataset::new(
            spec.total_distance_km,
            spec.samples,
            spec.terrain_segments,
            spec.landmarks,
            spec.accent_color,
        )
    }
}

impl CourseDataset {
    pub fn new(
        total_distance_km: f64,
        samples: Vec<ElevationSample>,
        terrain_segments: Vec<TerrainSegment>,
        landmarks: Vec<Landmark>,
        accent_color: impl Into<String>,
    ) -> Result<Self, CourseError> {
        if !(total_distance_km.is_finite() && total_distance_km > 0.0) {
            return Err(CourseError::InvalidTotalDistance(total_distance_km));
        }
        let in_range = |km: f64| (0.0..=total_distance_km).contains(&km);

        for (index, sample) in samples.iter().enumerate() {
            if !(sample.distance_km.is_finite() && sample.elevation_m.is_finite()) {
                return Err(CourseError::NonFiniteSample { index });
            }
            if !in_range(sample.distance_km) {
                return Err(CourseError::SampleOutOfRange {
                    index,
                    distance_km: sample.distance_km,
                    total_km: total_distance_km,
                });
            }
        }
        let profile = ElevationProfile::new(samples)?;

        for (index, seg) in terrain_segments.iter().enumerate() {
            // Written as a negation so NaN bounds are rejected too
            if !(seg.start_km < seg.end_km) {
                return Err(CourseError::EmptySegment {
                    index,
                    start_km: seg.start_km,
                    end_km: seg.end_km,
                });
            }
            if !(in_range(seg.start_km) && in_range(seg.end_km)) {
                return Err(CourseError::SegmentOutOfRange {
                    index,
                    start_km: seg.start_km,
                    end_km: seg.end_km,
                    total_km: total_distance_km,
                });
            }
        }
        check_overlaps(&terrain_segments)?;

        for lm in &landmarks {
            if !in_range(lm.distance_km) {
                return Err(CourseError::LandmarkOutOfRange {
                    label: lm.label.clone(),
                    distance_km: lm.distance_km,
                    total_km: total_distance_km,
                });
            }
        }

        Ok(Self {
            total_distance_km,
            profile,
            terrain_segments,
            landmarks,
            accent_color: accent_color.into(),
        })
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Samples, sorted by distance
    pub fn profile(&self) -> &ElevationProfile {
        &self.profile
    }

    /// Terrain segments in authored order
    pub fn terrain_segments(&self) -> &[TerrainSegment] {
        &self.terrain_segments
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn accent_color(&self) -> &str {
        &self.accent_color
    }

    /// Interpolated elevation at `distance_km` (clamped to the sampled range).
    pub fn elevation_at(&self, distance_km: f64) -> f64 {
        self.profile.elevation_at(distance_km)
    }
}

/// Segments may touch end-to-start but must not share any interior distance.
fn check_overlaps(segments: &[TerrainSegment]) -> Result<(), CourseError> {
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by(|&a, &b| segments[a].start_km.total_cmp(&segments[b].start_km));
    for pair in order.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if segments[next].start_km < segments[prev].end_km {
            return Err(CourseError::OverlappingSegments {
                first: prev.min(next),
                second: prev.max(next),
            });
        }
    }
    Ok(())
}
