use bevy_math::Vec3;

/// Slab-method ray and axis-aligned box intersection.
///
/// Returns the distance along `ray_direction` to the entry point, or to the
/// exit point when the origin is inside the box. `None` when the box is missed
/// or lies entirely behind the origin.
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let direction = ray_direction[axis];
        let (lo, hi) = (min[axis], max[axis]);

        if direction == 0.0 {
            // Parallel to this slab: inside it or never.
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let (mut t0, mut t1) = ((lo - origin) * inv, (hi - origin) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Box given by its centre and full size.
pub fn ray_hits_box(origin: Vec3, direction: Vec3, center: Vec3, size: Vec3) -> Option<f32> {
    let half = size * 0.5;
    ray_aabb_hit_t(origin, direction, center - half, center + half)
}

/// Closest candidate hit by the ray, with its distance.
pub fn pick_nearest<T, I>(origin: Vec3, direction: Vec3, candidates: I) -> Option<(T, f32)>
where
    I: IntoIterator<Item = (T, Vec3, Vec3)>,
{
    candidates
        .into_iter()
        .filter_map(|(item, center, size)| {
            ray_hits_box(origin, direction, center, size).map(|t| (item, t))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_box_in_front() {
        let origin = Vec3::new(0.0, 0.0, 10.0);
        let t = ray_hits_box(origin, Vec3::NEG_Z, Vec3::ZERO, Vec3::ONE);
        assert_eq!(t, Some(9.5));
    }

    #[test]
    fn misses_box_to_the_side() {
        let origin = Vec3::new(3.0, 0.0, 10.0);
        let t = ray_hits_box(origin, Vec3::NEG_Z, Vec3::ZERO, Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn ignores_box_behind_origin() {
        let t = ray_hits_box(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, Vec3::ONE);
        assert_eq!(t, None);
    }

    #[test]
    fn origin_inside_box_reports_exit() {
        let t = ray_hits_box(Vec3::ZERO, Vec3::X, Vec3::ZERO, Vec3::splat(2.0));
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn oblique_ray_enters_at_corner_edge() {
        let origin = Vec3::new(-5.0, 0.0, 5.0);
        let direction = Vec3::new(1.0, 0.0, -1.0).normalize();
        let t = ray_hits_box(origin, direction, Vec3::ZERO, Vec3::splat(2.0)).unwrap();
        let hit = origin + direction * t;
        assert!(hit.distance(Vec3::new(-1.0, 0.0, 1.0)) < 1e-4);
    }

    #[test]
    fn nearest_candidate_wins() {
        let candidates = [
            ("far", Vec3::new(0.0, 0.0, -10.0), Vec3::ONE),
            ("near", Vec3::new(0.0, 0.0, -2.0), Vec3::ONE),
            ("off-axis", Vec3::new(5.0, 0.0, -1.0), Vec3::ONE),
        ];
        let hit = pick_nearest(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, candidates);
        assert_eq!(hit.map(|(name, _)| name), Some("near"));
    }

    #[test]
    fn empty_candidates_pick_nothing() {
        let hit = pick_nearest::<u8, _>(Vec3::ZERO, Vec3::X, Vec::new());
        assert!(hit.is_none());
    }
}
