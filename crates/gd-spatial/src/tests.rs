//! Unit tests for gd-spatial.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec3;

use gd_core::{GeoPoint, Projection, WebMercator};

use crate::{AnchorTransform, Path, build_path, heading, local_to_world, world_to_local};

// ── Helpers ───────────────────────────────────────────────────────────────────

const BERLIN: GeoPoint = GeoPoint { lon: 13.405, lat: 52.52 };

fn berlin_anchor() -> AnchorTransform {
    AnchorTransform::at(&WebMercator, BERLIN, 0.0, DVec3::new(FRAC_PI_2, 0.0, 0.0))
}

fn close(a: DVec3, b: DVec3, tol: f64) -> bool {
    (a - b).length() < tol
}

// ── AnchorTransform ───────────────────────────────────────────────────────────

#[cfg(test)]
mod anchor {
    use super::*;

    #[test]
    fn translation_is_projected_origin() {
        let anchor = berlin_anchor();
        let projected = WebMercator.project(BERLIN, 0.0);
        assert_eq!(anchor.translation, projected.world);
        assert_eq!(anchor.scale, projected.units_per_meter);
        assert!(anchor.scale > 0.0);
        assert_eq!(anchor.origin(), BERLIN);
    }

    #[test]
    fn relocate_keeps_rotation_and_rescales() {
        let mut anchor = berlin_anchor();
        let before = anchor.scale;
        let canberra = GeoPoint::new(148.9819, -35.39847);
        anchor.relocate(&WebMercator, canberra, 0.0);

        assert_eq!(anchor.rotation(), DVec3::new(FRAC_PI_2, 0.0, 0.0));
        assert_eq!(anchor.translation, WebMercator.project(canberra, 0.0).world);
        // Canberra is closer to the equator than Berlin: fewer units per metre.
        assert!(anchor.scale < before);
        assert_eq!(anchor.origin(), canberra);
    }
}

// ── Frame convention ──────────────────────────────────────────────────────────

#[cfg(test)]
mod frame {
    use super::*;

    #[test]
    fn anchor_origin_is_local_zero() {
        let anchor = berlin_anchor();
        assert!(close(world_to_local(&anchor, anchor.translation), DVec3::ZERO, 1e-9));
    }

    #[test]
    fn world_local_round_trip() {
        let anchor = berlin_anchor();
        let local = DVec3::new(120.0, 0.0, -45.5);
        let back = world_to_local(&anchor, local_to_world(&anchor, local));
        assert!(close(back, local, 1e-6), "{back:?}");
    }

    #[test]
    fn local_height_is_not_mapped() {
        let anchor = berlin_anchor();
        let a = local_to_world(&anchor, DVec3::new(3.0, 0.0, 4.0));
        let b = local_to_world(&anchor, DVec3::new(3.0, 0.3, 4.0));
        assert_eq!(a, b);
    }

    #[test]
    fn east_is_plus_x_south_is_plus_z() {
        let anchor = berlin_anchor();
        let east = world_to_local(&anchor, WebMercator.project(GeoPoint::new(13.406, 52.52), 0.0).world);
        let south = world_to_local(&anchor, WebMercator.project(GeoPoint::new(13.405, 52.519), 0.0).world);
        assert!(east.x > 0.0 && east.z.abs() < 1e-6);
        assert!(south.z > 0.0 && south.x.abs() < 1e-6);
    }

    #[test]
    fn local_units_are_metres() {
        let anchor = berlin_anchor();
        let north = GeoPoint::new(13.405, 52.521);
        let local = world_to_local(&anchor, WebMercator.project(north, 0.0).world);
        let metres = BERLIN.distance_m(north);
        assert!((local.length() - metres).abs() / metres < 1e-3, "{} vs {metres}", local.length());
    }

    #[test]
    fn heading_sign_convention() {
        // East: 0, north (−Z): +π/2, south (+Z): −π/2, west: π.
        assert!((heading(DVec3::X, 0.0) - 0.0).abs() < 1e-12);
        assert!((heading(DVec3::NEG_Z, 0.0) - FRAC_PI_2).abs() < 1e-12);
        assert!((heading(DVec3::Z, 0.0) + FRAC_PI_2).abs() < 1e-12);
        assert!((heading(DVec3::NEG_X, 0.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn heading_adds_offset_and_ignores_length() {
        let offset = -FRAC_PI_2;
        let a = heading(DVec3::new(1.0, 0.0, -1.0), offset);
        let b = heading(DVec3::new(10.0, 5.0, -10.0), offset);
        assert!((a - b).abs() < 1e-12);
        assert!((a - (PI / 4.0 + offset)).abs() < 1e-12);
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use super::*;

    fn l_path() -> Path {
        Path::new(vec![DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0), DVec3::new(10.0, 0.0, 10.0)])
    }

    #[test]
    fn activity_by_length() {
        assert!(!Path::empty().is_active());
        assert!(!Path::new(vec![DVec3::ZERO]).is_active());
        assert!(l_path().is_active());
        assert_eq!(Path::empty().segment_count(), 0);
        assert_eq!(l_path().segment_count(), 2);
    }

    #[test]
    fn segment_lengths() {
        let p = l_path();
        assert_eq!(p.segment_length(0), 10.0);
        assert_eq!(p.segment_length(1), 10.0);
        assert_eq!(p.segment_length(2), 0.0);
        assert!(p.segment(2).is_none());
        assert_eq!(p.total_length(), 20.0);
    }

    #[test]
    fn reverse_swaps_endpoints() {
        let mut p = l_path();
        p.reverse();
        assert_eq!(p.points()[0], DVec3::new(10.0, 0.0, 10.0));
        assert_eq!(p.points()[2], DVec3::ZERO);
        p.reverse();
        assert_eq!(p, l_path());
    }

    #[test]
    fn start_pose_faces_first_segment() {
        let pose = l_path().start_pose(-FRAC_PI_2, 0.3);
        assert_eq!(pose.position, DVec3::new(0.0, 0.3, 0.0));
        assert!((pose.heading - (0.0 - FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn start_pose_skips_duplicate_points() {
        let p = Path::new(vec![DVec3::ZERO, DVec3::ZERO, DVec3::new(0.0, 0.0, -5.0)]);
        assert_eq!(p.direction_from(0), Some(DVec3::new(0.0, 0.0, -5.0)));
        let pose = p.start_pose(0.0, 0.0);
        assert!((pose.heading - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn direction_past_the_end() {
        assert_eq!(l_path().direction_from(2), None);
        assert_eq!(l_path().direction_from(9), None);
        assert_eq!(l_path().direction_from(1), Some(DVec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn start_pose_of_short_paths() {
        let single = Path::new(vec![DVec3::new(2.0, 0.0, 3.0)]).start_pose(0.5, 0.3);
        assert_eq!(single.position, DVec3::new(2.0, 0.3, 3.0));
        assert!((single.heading - 0.5).abs() < 1e-12);

        let empty = Path::empty().start_pose(0.5, 0.3);
        assert_eq!(empty.position, DVec3::new(0.0, 0.3, 0.0));
    }
}

// ── build_path ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use gd_core::GdError;

    #[test]
    fn preserves_order_on_ground_plane() {
        let anchor = berlin_anchor();
        let coords = [BERLIN, GeoPoint::new(13.406, 52.52), GeoPoint::new(13.406, 52.519)];
        let path = build_path(&coords, &anchor, &WebMercator, 0.0).unwrap();

        assert_eq!(path.len(), 3);
        assert!(close(path.points()[0], DVec3::ZERO, 1e-9));
        assert!(path.points()[1].x > 0.0);
        assert!(path.points()[2].z > 0.0);
        assert!(path.points().iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn degenerate_inputs_are_inactive_not_errors() {
        let anchor = berlin_anchor();
        assert!(!build_path(&[], &anchor, &WebMercator, 0.0).unwrap().is_active());
        assert!(!build_path(&[BERLIN], &anchor, &WebMercator, 0.0).unwrap().is_active());
    }

    #[test]
    fn non_finite_fails_fast() {
        let anchor = berlin_anchor();
        let coords = [BERLIN, GeoPoint::new(f64::NAN, 52.0), GeoPoint::new(13.0, f64::INFINITY)];
        let err = build_path(&coords, &anchor, &WebMercator, 0.0).unwrap_err();
        assert!(matches!(err, GdError::NonFiniteCoordinate { index: 1, .. }));
    }

    #[test]
    fn inverse_mapping_recovers_coordinates() {
        let anchor = berlin_anchor();
        let coords = [GeoPoint::new(13.38886, 52.517037), GeoPoint::new(13.385983, 52.496891)];
        let path = build_path(&coords, &anchor, &WebMercator, 0.0).unwrap();
        for (local, geo) in path.points().iter().zip(coords) {
            let back = WebMercator.unproject(local_to_world(&anchor, *local));
            assert!((back.lon - geo.lon).abs() < 1e-9);
            assert!((back.lat - geo.lat).abs() < 1e-9);
        }
    }
}
