use super::{CourseError, ElevationSample};

/// A course's elevation samples, sorted ascending by distance.
///
/// Sorting happens once on construction so every lookup can bracket the
/// query distance with a binary search instead of re-sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationProfile {
    samples: Vec<ElevationSample>,
}

impl ElevationProfile {
    /// Sort `samples` by distance. Samples sharing a distance keep their
    /// authored order. Fails if there are no samples at all.
    pub fn new(mut samples: Vec<ElevationSample>) -> Result<Self, CourseError> {
        if samples.is_empty() {
            return Err(CourseError::EmptySamples);
        }
        samples.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[ElevationSample] {
        &self.samples
    }

    pub fn first(&self) -> ElevationSample {
        self.samples[0]
    }

    pub fn last(&self) -> ElevationSample {
        self.samples[self.samples.len() - 1]
    }

    /// Lowest and highest sampled elevation, in metres.
    pub fn bounds(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.elevation_m), hi.max(s.elevation_m))
            })
    }

    /// Elevation at an arbitrary distance.
    ///
    /// Distances at or before the first sample return the first sample's
    /// elevation, distances at or past the last return the last's. Anything
    /// in between is linearly interpolated between the bracketing pair.
    pub fn elevation_at(&self, distance_km: f64) -> f64 {
        let first = self.first();
        let last = self.last();
        // Negated so a NaN query pins to the start instead of slipping through
        if !(distance_km > first.distance_km) {
            return first.elevation_m;
        }
        if distance_km >= last.distance_km {
            return last.elevation_m;
        }

        // first.distance_km < distance_km < last.distance_km, so 1 <= idx < len
        let idx = self
            .samples
            .partition_point(|s| s.distance_km < distance_km);
        let p1 = self.samples[idx - 1];
        let p2 = self.samples[idx];

        let span = p2.distance_km - p1.distance_km;
        let ratio = if span == 0.0 {
            0.0
        } else {
            (distance_km - p1.distance_km) / span
        };
        p1.elevation_m + (p2.elevation_m - p1.elevation_m) * ratio
    }
}

/// Interpolated elevation over an arbitrary, possibly unsorted, sample set.
///
/// Convenience wrapper for one-off lookups; hot paths should build an
/// [`ElevationProfile`] once and query it.
pub fn elevation_at(samples: &[ElevationSample], distance_km: f64) -> Result<f64, CourseError> {
    Ok(ElevationProfile::new(samples.to_vec())?.elevation_at(distance_km))
}
