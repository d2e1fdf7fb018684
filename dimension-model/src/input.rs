use constants::camera as defaults;

/// What a mouse wheel tick over the scene does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelRoute {
    /// Left part of the window: scroll through groups.
    VerticalPan,
    /// Everywhere else: change the user zoom factor.
    Zoom,
}

/// Route a wheel event by cursor position. `zone` is the fraction of the
/// window width, from the left edge, that pans instead of zooming.
pub fn route_wheel(cursor_x: f32, window_width: f32, zone: f32) -> WheelRoute {
    if window_width > 0.0 && cursor_x < window_width * zone {
        WheelRoute::VerticalPan
    } else {
        WheelRoute::Zoom
    }
}

/// Apply wheel ticks to the user zoom factor. Scrolling up zooms in.
pub fn apply_wheel_zoom(user_zoom: f32, ticks: f32) -> f32 {
    (user_zoom * (1.0 + ticks * defaults::WHEEL_ZOOM_STEP))
        .clamp(defaults::MIN_USER_ZOOM, defaults::MAX_USER_ZOOM)
}

/// Vertical field of view for a rig zoom combined with the user factor.
/// Larger zoom narrows the view.
pub fn field_of_view(base_fov: f32, rig_zoom: f32, user_zoom: f32) -> f32 {
    let zoom = (rig_zoom * user_zoom).max(f32::EPSILON);
    (base_fov / zoom).clamp(0.05, 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_third_pans_vertically() {
        let zone = defaults::VERTICAL_PAN_ZONE;
        assert_eq!(route_wheel(100.0, 900.0, zone), WheelRoute::VerticalPan);
        assert_eq!(route_wheel(299.0, 900.0, zone), WheelRoute::VerticalPan);
        assert_eq!(route_wheel(300.0, 900.0, zone), WheelRoute::Zoom);
        assert_eq!(route_wheel(800.0, 900.0, zone), WheelRoute::Zoom);
    }

    #[test]
    fn zero_width_window_zooms() {
        assert_eq!(route_wheel(0.0, 0.0, 0.5), WheelRoute::Zoom);
    }

    #[test]
    fn wheel_zoom_is_clamped() {
        assert!(apply_wheel_zoom(1.0, 1.0) > 1.0);
        assert!(apply_wheel_zoom(1.0, -1.0) < 1.0);
        assert_eq!(apply_wheel_zoom(4.0, 50.0), defaults::MAX_USER_ZOOM);
        assert_eq!(apply_wheel_zoom(0.3, -50.0), defaults::MIN_USER_ZOOM);
    }

    #[test]
    fn zoom_narrows_field_of_view() {
        let base = defaults::BASE_FOV;
        assert_eq!(field_of_view(base, 1.0, 1.0), base);
        assert!(field_of_view(base, 2.0, 1.0) < base);
        assert!(field_of_view(base, 0.8, 1.0) > base);
    }
}
