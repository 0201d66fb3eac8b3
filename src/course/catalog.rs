use super::CourseDataset;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const BUNDLED_COURSES: &str = include_str!("courses.json");

/// Race category, as shown on the course tabs and in `?course=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum CourseId {
    #[serde(rename = "5K")]
    FiveK,
    #[serde(rename = "10K")]
    TenK,
    #[default]
    #[serde(rename = "21K")]
    TwentyOneK,
}

impl CourseId {
    /// Tab order
    pub const ALL: [CourseId; 3] = [CourseId::FiveK, CourseId::TenK, CourseId::TwentyOneK];

    pub fn label(&self) -> &'static str {
        match self {
            CourseId::FiveK => "5K",
            CourseId::TenK => "10K",
            CourseId::TwentyOneK => "21K",
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown course '{0}'")]
pub struct UnknownCourse(String);

impl FromStr for CourseId {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseId::ALL
            .into_iter()
            .find(|id| id.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

/// One race category: the briefing shown next to the chart plus its dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseCategory {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub gain: String,
    /// COT, the maximum allowed race duration
    pub cut_off_time: String,
    pub water_stations: u32,
    pub surface: String,
    pub highlights: Vec<String>,
    pub dataset: CourseDataset,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course catalog is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("course catalog has no {0} category")]
    Missing(CourseId),
    #[error("course catalog lists {0} more than once")]
    Duplicate(CourseId),
}

/// All race categories, one per [`CourseId`].
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCatalog {
    categories: Vec<CourseCategory>,
}

impl CourseCatalog {
    /// The categories shipped with the site
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_COURSES)
    }

    /// Parse and validate a catalog. Every [`CourseId`] must appear exactly once.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<CourseCategory> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn new(mut categories: Vec<CourseCategory>) -> Result<Self, CatalogError> {
        for (i, cat) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.id == cat.id) {
                return Err(CatalogError::Duplicate(cat.id));
            }
        }
        for id in CourseId::ALL {
            if !categories.iter().any(|c| c.id == id) {
                return Err(CatalogError::Missing(id));
            }
        }
        categories.sort_by_key(|c| CourseId::ALL.iter().position(|id| *id == c.id));
        Ok(Self { categories })
    }

    pub fn get(&self, id: CourseId) -> &CourseCategory {
        // `new` guarantees exactly one category per id
        self.categories
            .iter()
            .find(|c| c.id == id)
            .unwrap_or(&self.categories[0])
    }

    /// Categories in tab order
    pub fn categories(&self) -> &[CourseCategory] {
        &self.categories
    }
}
