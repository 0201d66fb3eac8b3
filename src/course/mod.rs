mod catalog;
mod geometry;
mod landmarks;
mod model;
mod profile;

pub use catalog::{CatalogError, CourseCatalog, CourseCategory, CourseId, UnknownCourse};
pub use geometry::{
    area_path, segment_points, ChartGeometry, CoordinateMapper, TerrainPath, MIN_ELEVATION_SPAN_M,
    PADDING_BOTTOM, PADDING_TOP, PLOT_BOTTOM, PLOT_HEIGHT, VIEW_HEIGHT, VIEW_WIDTH,
};
pub use landmarks::{LandmarkPosition, FALLBACK_LANDMARK_DESCRIPTION, FALLBACK_LANDMARK_IMAGE};
pub use model::{
    Alignment, CourseDataset, CourseError, ElevationSample, Landmark, TerrainKind, TerrainSegment,
};
pub use profile::{elevation_at, ElevationProfile};
