use super::{CourseDataset, ElevationProfile, ElevationSample, TerrainKind, TerrainSegment};

// Virtual canvas (SVG viewBox "0 0 1000 500"), scaled to whatever box the chart gets
pub const VIEW_WIDTH: f64 = 1000.0;
pub const VIEW_HEIGHT: f64 = 500.0;
pub const PADDING_TOP: f64 = 80.0;
pub const PADDING_BOTTOM: f64 = 60.0;
pub const PLOT_HEIGHT: f64 = VIEW_HEIGHT - PADDING_TOP - PADDING_BOTTOM;
pub const PLOT_BOTTOM: f64 = VIEW_HEIGHT - PADDING_BOTTOM;

/// Extra vertical room so the curve never touches the plot edges.
const ELEVATION_HEADROOM: f64 = 1.2;
/// Fraction of the padded range kept below the lowest sample.
const BASELINE_MARGIN: f64 = 0.1;
/// Smallest raw elevation span the chart will scale to. A flat course
/// would otherwise produce a zero range.
pub const MIN_ELEVATION_SPAN_M: f64 = 10.0;

/// Samples closer than this to a segment boundary count as sitting on it.
const BOUNDARY_TOLERANCE_KM: f64 = 0.01;

/// Maps (distance, elevation) onto the virtual canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    total_distance_km: f64,
    baseline_m: f64,
    range_m: f64,
}

impl CoordinateMapper {
    pub fn new(total_distance_km: f64, min_elevation_m: f64, max_elevation_m: f64) -> Self {
        let span = (max_elevation_m - min_elevation_m).max(MIN_ELEVATION_SPAN_M);
        let range_m = span * ELEVATION_HEADROOM;
        Self {
            total_distance_km,
            baseline_m: min_elevation_m - range_m * BASELINE_MARGIN,
            range_m,
        }
    }

    pub fn for_dataset(dataset: &CourseDataset) -> Self {
        let (lo, hi) = dataset.profile().bounds();
        Self::new(dataset.total_distance_km(), lo, hi)
    }

    /// Elevation drawn on the plot's bottom edge
    pub fn baseline_m(&self) -> f64 {
        self.baseline_m
    }

    pub fn range_m(&self) -> f64 {
        self.range_m
    }

    pub fn x(&self, distance_km: f64) -> f64 {
        distance_km / self.total_distance_km * VIEW_WIDTH
    }

    /// Higher elevation maps to a smaller y (further up the screen).
    pub fn y(&self, elevation_m: f64) -> f64 {
        PLOT_BOTTOM - (elevation_m - self.baseline_m) / self.range_m * PLOT_HEIGHT
    }

    fn point(&self, s: &ElevationSample) -> String {
        format!("{:.1},{:.1}", self.x(s.distance_km), self.y(s.elevation_m))
    }
}

/// SVG path data: `M x,y L x,y ...`
fn polyline_path(mapper: &CoordinateMapper, points: &[ElevationSample]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let coords: Vec<String> = points.iter().map(|p| mapper.point(p)).collect();
    format!("M {}", coords.join(" L "))
}

/// Closed polygon under the whole profile, for the gradient fill.
///
/// Runs along the samples, drops to the bottom of the canvas at the last
/// sample, returns along the bottom to the first and closes.
pub fn area_path(profile: &ElevationProfile, mapper: &CoordinateMapper) -> String {
    let top = polyline_path(mapper, profile.samples());
    let last_x = mapper.x(profile.last().distance_km);
    let first_x = mapper.x(profile.first().distance_km);
    format!(
        "{} L {:.1},{:.1} L {:.1},{:.1} Z",
        top, last_x, VIEW_HEIGHT, first_x, VIEW_HEIGHT
    )
}

/// Domain-space points spanning exactly `[segment.start_km, segment.end_km]`.
///
/// Takes every sample inside the segment and, when no sample sits on a
/// boundary, adds one there with an interpolated elevation. The result is
/// sorted by distance.
pub fn segment_points(
    profile: &ElevationProfile,
    segment: &TerrainSegment,
) -> Vec<ElevationSample> {
    let mut points: Vec<ElevationSample> = profile
        .samples()
        .iter()
        .filter(|s| s.distance_km >= segment.start_km && s.distance_km <= segment.end_km)
        .copied()
        .collect();

    let near = |points: &[ElevationSample], km: f64| {
        points
            .iter()
            .any(|p| (p.distance_km - km).abs() < BOUNDARY_TOLERANCE_KM)
    };
    if !near(&points, segment.start_km) {
        points.insert(
            0,
            ElevationSample::new(segment.start_km, profile.elevation_at(segment.start_km)),
        );
    }
    if !near(&points, segment.end_km) {
        points.push(ElevationSample::new(
            segment.end_km,
            profile.elevation_at(segment.end_km),
        ));
    }

    points.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    points
}

/// One terrain-coloured stroke of the profile line.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainPath {
    pub kind: TerrainKind,
    pub points: Vec<ElevationSample>,
    pub d: String,
}

impl TerrainPath {
    pub fn build(
        profile: &ElevationProfile,
        mapper: &CoordinateMapper,
        segment: &TerrainSegment,
    ) -> Self {
        let points = segment_points(profile, segment);
        let d = polyline_path(mapper, &points);
        Self {
            kind: segment.kind,
            points,
            d,
        }
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

/// Everything the chart draws that depends only on the dataset.
///
/// Built once per dataset (the chart memoizes it) so pointer events never
/// redo the O(samples) path work.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub mapper: CoordinateMapper,
    pub area_path: String,
    pub terrain_paths: Vec<TerrainPath>,
    pub min_elevation_m: f64,
    pub max_elevation_m: f64,
}

impl ChartGeometry {
    pub fn new(dataset: &CourseDataset) -> Self {
        let profile = dataset.profile();
        let (min_elevation_m, max_elevation_m) = profile.bounds();
        let mapper = CoordinateMapper::for_dataset(dataset);
        let terrain_paths = dataset
            .terrain_segments()
            .iter()
            .map(|seg| TerrainPath::build(profile, &mapper, seg))
            .collect();
        Self {
            mapper,
            area_path: area_path(profile, &mapper),
            terrain_paths,
            min_elevation_m,
            max_elevation_m,
        }
    }

    /// y of the dashed grid line halfway up the plot
    pub fn mid_grid_y(&self) -> f64 {
        PLOT_BOTTOM - PLOT_HEIGHT / 2.0
    }
}
