//! Camera presets and the per-frame rig that moves between them.
//!
//! The rig keeps two kinds of motion apart:
//!
//! - scroll input is followed instantly, by translating the current pose and
//!   both transition anchors by the scroll delta, then pinning the look-at
//!   target's X and Y to `scroll + preset target offset`;
//! - view mode changes ease from the pose currently on screen to the new
//!   preset over `transition_secs` with `1 - (1 - t)^2`.
//!
//! Scroll is applied before interpolation within a frame, so a stale
//! transition target can never pull the camera away from the scroll position.

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::{ScrollOffsets, ViewMode};
use constants::camera as defaults;

/// Where the camera sits and looks, relative to the scroll origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPreset {
    pub position_offset: [f32; 3],
    pub target_offset: [f32; 3],
    pub zoom: f32,
}

impl ViewPreset {
    const fn from_tuple(preset: ([f32; 3], [f32; 3], f32)) -> Self {
        Self {
            position_offset: preset.0,
            target_offset: preset.1,
            zoom: preset.2,
        }
    }

    pub fn target(&self, scroll: ScrollOffsets) -> Vec3 {
        scroll.origin() + Vec3::from_array(self.target_offset)
    }

    pub fn pose(&self, scroll: ScrollOffsets) -> CameraPose {
        CameraPose {
            position: scroll.origin() + Vec3::from_array(self.position_offset),
            target: self.target(scroll),
            zoom: self.zoom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub transition_secs: f32,
    pub front: ViewPreset,
    pub top: ViewPreset,
    pub side: ViewPreset,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            transition_secs: defaults::TRANSITION_SECS,
            front: ViewPreset::from_tuple(defaults::FRONT_PRESET),
            top: ViewPreset::from_tuple(defaults::TOP_PRESET),
            side: ViewPreset::from_tuple(defaults::SIDE_PRESET),
        }
    }
}

impl RigConfig {
    pub fn preset(&self, mode: ViewMode) -> &ViewPreset {
        match mode {
            ViewMode::Front => &self.front,
            ViewMode::Top => &self.top,
            ViewMode::Side => &self.side,
        }
    }
}

/// Camera output for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub zoom: f32,
}

impl CameraPose {
    pub fn lerp(&self, other: &CameraPose, s: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, s),
            target: self.target.lerp(other.target, s),
            zoom: self.zoom + (other.zoom - self.zoom) * s,
        }
    }

    fn translated(&self, delta: Vec3) -> CameraPose {
        CameraPose {
            position: self.position + delta,
            target: self.target + delta,
            zoom: self.zoom,
        }
    }
}

/// Ease-out blend `1 - (1 - t)^2`, with `t` clamped to [0, 1].
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: CameraPose,
    to: CameraPose,
    elapsed: f32,
}

/// Stateful driver producing one [`CameraPose`] per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    config: RigConfig,
    mode: ViewMode,
    scroll: ScrollOffsets,
    pose: CameraPose,
    transition: Option<Transition>,
}

impl CameraRig {
    /// Rig resting on the preset of `mode`.
    pub fn new(config: RigConfig, mode: ViewMode, scroll: ScrollOffsets) -> Self {
        let pose = config.preset(mode).pose(scroll);
        Self {
            config,
            mode,
            scroll,
            pose,
            transition: None,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Linear progress of the running transition in [0, 1].
    pub fn progress(&self) -> Option<f32> {
        self.transition
            .map(|transition| self.fraction(transition.elapsed))
    }

    /// Advance one frame of `dt` seconds towards `mode` while following `scroll`.
    pub fn advance(&mut self, mode: ViewMode, scroll: ScrollOffsets, dt: f32) -> CameraPose {
        if mode != self.mode {
            self.begin_transition(mode);
        }
        self.follow_scroll(scroll);
        self.step(dt);
        self.pose
    }

    /// Starts from the pose on screen, which may be halfway through an earlier
    /// transition. The end anchor uses the last synced scroll; `follow_scroll`
    /// moves both anchors onto the current one.
    fn begin_transition(&mut self, mode: ViewMode) {
        debug!(from = %self.mode, to = %mode, "camera transition started");
        self.mode = mode;
        self.transition = Some(Transition {
            from: self.pose,
            to: self.config.preset(mode).pose(self.scroll),
            elapsed: 0.0,
        });
    }

    fn follow_scroll(&mut self, scroll: ScrollOffsets) {
        let delta = scroll.origin() - self.scroll.origin();
        self.scroll = scroll;
        self.pose = self.pose.translated(delta);
        if let Some(transition) = self.transition.as_mut() {
            transition.from = transition.from.translated(delta);
            transition.to = transition.to.translated(delta);
        }
        self.pin_target();
    }

    fn step(&mut self, dt: f32) {
        let Some(mut transition) = self.transition else {
            self.pose = self.config.preset(self.mode).pose(self.scroll);
            return;
        };

        transition.elapsed += dt.max(0.0);
        let t = self.fraction(transition.elapsed);
        if t >= 1.0 {
            self.pose = transition.to;
            self.transition = None;
            debug!(mode = %self.mode, "camera transition finished");
        } else {
            self.pose = transition.from.lerp(&transition.to, ease_out(t));
            self.transition = Some(transition);
        }
        self.pin_target();
    }

    fn pin_target(&mut self) {
        let target = self.config.preset(self.mode).target(self.scroll);
        self.pose.target.x = target.x;
        self.pose.target.y = target.y;
    }

    fn fraction(&self, elapsed: f32) -> f32 {
        if self.config.transition_secs <= 0.0 {
            1.0
        } else {
            (elapsed / self.config.transition_secs).min(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < EPS
    }

    fn rig() -> CameraRig {
        CameraRig::new(
            RigConfig::default(),
            ViewMode::Front,
            ScrollOffsets::default(),
        )
    }

    #[test]
    fn ease_out_curve_endpoints_and_midpoint() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(0.5), 0.75);
        assert_eq!(ease_out(2.0), 1.0);
        assert_eq!(ease_out(-1.0), 0.0);
    }

    #[test]
    fn starts_on_preset() {
        let rig = rig();
        let expected = RigConfig::default().front.pose(ScrollOffsets::default());
        assert_eq!(rig.pose(), expected);
        assert!(!rig.is_transitioning());
    }

    #[test]
    fn idle_rig_tracks_scroll_directly() {
        let mut rig = rig();
        let scroll = ScrollOffsets::new(12.0, -3.0);
        let pose = rig.advance(ViewMode::Front, scroll, 0.016);
        assert_eq!(pose, RigConfig::default().front.pose(scroll));
    }

    #[test]
    fn transition_eases_and_terminates() {
        let config = RigConfig::default();
        let mut rig = rig();
        let scroll = ScrollOffsets::default();
        let start = config.front.pose(scroll);
        let end = config.top.pose(scroll);

        let half = rig.advance(ViewMode::Top, scroll, 0.5);
        let expected = start.lerp(&end, 0.75);
        assert!(close(half.position, expected.position));
        assert!((half.zoom - expected.zoom).abs() < EPS);
        assert_eq!(rig.progress(), Some(0.5));

        let done = rig.advance(ViewMode::Top, scroll, 0.5);
        assert_eq!(done, end);
        assert!(!rig.is_transitioning());
    }

    #[test]
    fn zero_duration_snaps_immediately() {
        let config = RigConfig {
            transition_secs: 0.0,
            ..RigConfig::default()
        };
        let mut rig = CameraRig::new(config, ViewMode::Front, ScrollOffsets::default());
        let pose = rig.advance(ViewMode::Side, ScrollOffsets::default(), 0.0);
        assert_eq!(pose, config.side.pose(ScrollOffsets::default()));
        assert!(!rig.is_transitioning());
    }

    #[test]
    fn look_at_follows_scroll_every_frame_during_transition() {
        let config = RigConfig::default();
        let mut rig = rig();
        let mut scroll = ScrollOffsets::default();
        let mut mode = ViewMode::Front;
        for frame in 0..90 {
            if frame == 10 {
                mode = ViewMode::Top;
            }
            scroll.x += 0.25;
            let pose = rig.advance(mode, scroll, 1.0 / 60.0);
            let offset = config.preset(mode).target_offset;
            assert!(
                (pose.target.x - (scroll.x + offset[0])).abs() < EPS,
                "frame {frame}"
            );
            assert!(
                (pose.target.y - (scroll.y + offset[1])).abs() < EPS,
                "frame {frame}"
            );
        }
    }

    #[test]
    fn scroll_mid_transition_shifts_without_jump() {
        let mut still = rig();
        let mut scrolled = rig();
        let origin = ScrollOffsets::default();
        still.advance(ViewMode::Side, origin, 0.3);
        scrolled.advance(ViewMode::Side, origin, 0.3);

        let moved = ScrollOffsets::new(5.0, -1.5);
        let a = still.advance(ViewMode::Side, origin, 0.1);
        let b = scrolled.advance(ViewMode::Side, moved, 0.1);
        assert!(close(b.position - a.position, moved.origin()));
        assert!((a.zoom - b.zoom).abs() < EPS);
    }

    #[test]
    fn retarget_mid_transition_starts_from_current_pose() {
        let mut rig = rig();
        let scroll = ScrollOffsets::default();
        let mid = rig.advance(ViewMode::Top, scroll, 0.4);
        let restarted = rig.advance(ViewMode::Side, scroll, 0.0);
        assert!(close(mid.position, restarted.position));
        assert!((mid.zoom - restarted.zoom).abs() < EPS);
        assert_eq!(rig.mode(), ViewMode::Side);
        assert_eq!(rig.progress(), Some(0.0));
    }

    #[test]
    fn identical_inputs_give_identical_sequences() {
        let samples = [0.016, 0.033, 0.2, 0.05, 0.4, 0.5];
        let run = || {
            let mut rig = rig();
            samples
                .iter()
                .enumerate()
                .map(|(i, dt)| {
                    let scroll = ScrollOffsets::new(i as f32, -(i as f32) * 0.5);
                    rig.advance(ViewMode::Top, scroll, *dt)
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut rig = rig();
        rig.advance(ViewMode::Top, ScrollOffsets::default(), 0.3);
        rig.advance(ViewMode::Top, ScrollOffsets::default(), -1.0);
        assert_eq!(rig.progress(), Some(0.3));
    }
}
