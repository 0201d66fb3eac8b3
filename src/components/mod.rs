mod app;
mod course_info;
mod course_tabs;
mod elevation_chart;
mod landmark_popup;
mod lightbox;
mod terrain_legend;

pub use app::App;
pub use course_info::CourseInfo;
pub use course_tabs::CourseTabs;
pub use elevation_chart::ElevationChart;
pub use landmark_popup::LandmarkPopup;
pub use lightbox::Lightbox;
pub use terrain_legend::TerrainLegend;
