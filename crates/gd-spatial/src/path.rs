//! Local-frame paths and the path builder.

use glam::DVec3;

use gd_core::{GdError, GdResult, GeoPoint, Projection};

use crate::{AnchorTransform, heading, world_to_local};

/// Segments shorter than this (metres) are treated as zero-length.
pub const MIN_SEGMENT_LENGTH: f64 = 1e-9;

// ── Pose ──────────────────────────────────────────────────────────────────────

/// Where the agent is and which way it faces, in the local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub position: DVec3,
    /// Yaw about local +Y, radians (see [`heading`]).
    pub heading: f64,
}

impl Pose {
    #[inline]
    pub fn new(position: DVec3, heading: f64) -> Self {
        Self { position, heading }
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered sequence of local-frame points on the ground plane.
///
/// Insertion order is traversal order.  A path with fewer than two points is
/// *inactive*: the agent cannot move along it.  Paths are replaced wholesale
/// or reversed in place; nothing else mutates them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    points: Vec<DVec3>,
}

impl Path {
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// An inactive path with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when the path has at least one segment.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.points.len() >= 2
    }

    /// Number of segments (`len − 1`, or 0 for inactive paths).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Endpoints of segment `i`, or `None` past the last segment.
    #[inline]
    pub fn segment(&self, i: usize) -> Option<(DVec3, DVec3)> {
        Some((*self.points.get(i)?, *self.points.get(i + 1)?))
    }

    /// Euclidean length of segment `i` (0 past the last segment).
    #[inline]
    pub fn segment_length(&self, i: usize) -> f64 {
        self.segment(i).map_or(0.0, |(a, b)| a.distance(b))
    }

    /// Sum of all segment lengths.
    pub fn total_length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Direction of the first non-degenerate segment at or after `i`.
    ///
    /// Segments shorter than [`MIN_SEGMENT_LENGTH`] (duplicate consecutive
    /// points) have no usable direction and are skipped.
    pub fn direction_from(&self, i: usize) -> Option<DVec3> {
        self.points
            .get(i..)?
            .windows(2)
            .map(|w| w[1] - w[0])
            .find(|d| d.length() >= MIN_SEGMENT_LENGTH)
    }

    /// Invert traversal order in place.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Pose at the start of the path: point 0 lifted to `height_offset`,
    /// facing along the first segment.
    ///
    /// Leading duplicate points are looked past.  With no usable direction at
    /// all the heading is `heading_offset` alone.  An empty path starts at the
    /// local origin.
    pub fn start_pose(&self, heading_offset: f64, height_offset: f64) -> Pose {
        let start = self.points.first().copied().unwrap_or(DVec3::ZERO);
        let direction = self.direction_from(0).unwrap_or(DVec3::ZERO);
        Pose::new(
            DVec3::new(start.x, height_offset, start.z),
            heading(direction, heading_offset),
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Convert geographic route geometry into a local-frame [`Path`].
///
/// Each coordinate is projected at `altitude_m` with the same projection as
/// the anchor, then expressed relative to `anchor` on the ground plane.  The
/// agent's height offset is applied by the traversal engine, not here.
///
/// Zero or one coordinate yields an inactive path without error.
///
/// # Errors
///
/// [`GdError::NonFiniteCoordinate`] for the first coordinate that is not a
/// finite number.  Nothing is built in that case.
pub fn build_path<P: Projection>(
    coords:     &[GeoPoint],
    anchor:     &AnchorTransform,
    projection: &P,
    altitude_m: f64,
) -> GdResult<Path> {
    if let Some((index, &point)) = coords.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(GdError::NonFiniteCoordinate { index, point });
    }

    let points = coords
        .iter()
        .map(|&geo| world_to_local(anchor, projection.project(geo, altitude_m).world))
        .collect::<Vec<_>>();

    log::debug!("built path with {} points relative to anchor {}", points.len(), anchor.origin());
    Ok(Path::new(points))
}
