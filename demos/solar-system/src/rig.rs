use glam::Vec3;
use orrery_engine::{ease_vec3, Easing};

/// Camera transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ZoomingIn,
    ZoomingOut,
}

/// Time-based camera controller.
///
/// A zoom-in flies toward the selected body; a zoom-out returns to the home
/// position captured at startup (or re-frames a body that is still
/// selected). Starting a new transition overwrites the one in flight —
/// progress is discarded, never queued.
pub struct CameraRig {
    phase: Phase,
    /// Camera position captured when the transition started.
    start_pos: Vec3,
    elapsed: f32,
    home: Vec3,
    duration: f32,
    zoom_distance: f32,
    easing: Easing,
}

impl CameraRig {
    pub fn new(home: Vec3, duration: f32, zoom_distance: f32, easing: Easing) -> Self {
        Self {
            phase: Phase::Idle,
            start_pos: home,
            elapsed: 0.0,
            home,
            duration: duration.max(f32::EPSILON),
            zoom_distance,
            easing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn home(&self) -> Vec3 {
        self.home
    }

    /// Re-tune an existing rig after a config reload. The home position and
    /// any in-flight transition are left alone.
    pub fn set_tuning(&mut self, duration: f32, zoom_distance: f32, easing: Easing) {
        self.duration = duration.max(f32::EPSILON);
        self.zoom_distance = zoom_distance;
        self.easing = easing;
    }

    /// Begin flying toward the selected body from the current camera position.
    pub fn begin_zoom_in(&mut self, camera_pos: Vec3) {
        self.phase = Phase::ZoomingIn;
        self.start_pos = camera_pos;
        self.elapsed = 0.0;
    }

    /// Begin flying back out from the current camera position.
    pub fn begin_zoom_out(&mut self, camera_pos: Vec3) {
        self.phase = Phase::ZoomingOut;
        self.start_pos = camera_pos;
        self.elapsed = 0.0;
    }

    /// Compute the camera position for the next frame.
    /// `selected` is the world position of the selected body, if any.
    /// Holds `camera_pos` whenever the target would degenerate, so a NaN
    /// can never reach the camera.
    pub fn advance(&mut self, dt: f32, selected: Option<Vec3>, camera_pos: Vec3) -> Vec3 {
        let target = match self.phase {
            Phase::Idle => return camera_pos,
            Phase::ZoomingIn => {
                // Selection cleared without a zoom-out is a caller bug; hold.
                let Some(body) = selected else {
                    return camera_pos;
                };
                match approach_target(body, self.start_pos, self.zoom_distance) {
                    Some(target) => target,
                    None => return camera_pos,
                }
            }
            Phase::ZoomingOut => match selected {
                // A body is still selected: re-frame it relative to home.
                Some(body) => match approach_target(body, self.home, self.zoom_distance) {
                    Some(target) => target,
                    None => return camera_pos,
                },
                None => self.home,
            },
        };

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.phase = Phase::Idle;
            return target;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let next = ease_vec3(self.start_pos, target, t, self.easing);
        if next.is_finite() {
            next
        } else {
            camera_pos
        }
    }
}

/// Point short of `body` along the line of sight from `from`.
/// `offset` is negative, so the result sits between `from` and the body.
/// `None` when the direction degenerates (viewpoint exactly at the body).
fn approach_target(body: Vec3, from: Vec3, offset: f32) -> Option<Vec3> {
    let dir = (body - from).try_normalize()?;
    Some(body + dir * offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.25;

    fn rig(duration: f32) -> CameraRig {
        CameraRig::new(Vec3::new(0.0, 150.0, 200.0), duration, -80.0, Easing::Linear)
    }

    #[test]
    fn zoom_in_lerps_from_start_position() {
        let mut rig = rig(1.0);
        let start = Vec3::new(0.0, 0.0, 100.0);
        let body = Vec3::ZERO;
        rig.begin_zoom_in(start);

        // Line of sight is -Z; the target sits 80 units short of the body.
        let expected_target = Vec3::new(0.0, 0.0, 80.0);
        let quarter = rig.advance(DT, Some(body), start);
        assert!((quarter - start.lerp(expected_target, 0.25)).length() < 1e-4);
    }

    #[test]
    fn zoom_in_snaps_exactly_at_duration() {
        let mut rig = rig(1.0);
        let start = Vec3::new(0.0, 0.0, 100.0);
        let body = Vec3::ZERO;
        rig.begin_zoom_in(start);

        let mut pos = start;
        for _ in 0..4 {
            pos = rig.advance(DT, Some(body), pos);
        }
        assert_eq!(pos, Vec3::new(0.0, 0.0, 80.0));
        assert_eq!(rig.phase(), Phase::Idle);
    }

    #[test]
    fn zoom_out_returns_home_when_nothing_selected() {
        let mut rig = rig(1.0);
        let start = Vec3::new(0.0, 0.0, 80.0);
        rig.begin_zoom_out(start);

        let mut pos = start;
        for _ in 0..4 {
            pos = rig.advance(DT, None, pos);
        }
        assert_eq!(pos, rig.home());
    }

    #[test]
    fn zoom_out_reframes_a_still_selected_body() {
        let mut rig = rig(1.0);
        let body = Vec3::new(62.0, 20.0, 0.0);
        rig.begin_zoom_out(Vec3::new(0.0, 0.0, 80.0));

        let mut pos = Vec3::new(0.0, 0.0, 80.0);
        for _ in 0..4 {
            pos = rig.advance(DT, Some(body), pos);
        }
        // Final position sits 80 units from the body, on the home side.
        assert!((pos.distance(body) - 80.0).abs() < 1e-3);
        assert!(pos.distance(rig.home()) < body.distance(rig.home()));
    }

    #[test]
    fn degenerate_direction_holds_position() {
        let mut rig = rig(1.0);
        let body = Vec3::new(5.0, 5.0, 5.0);
        rig.begin_zoom_in(body); // camera exactly on the body

        let held = rig.advance(DT, Some(body), body);
        assert_eq!(held, body);
        assert!(held.is_finite());
    }

    #[test]
    fn new_transition_discards_progress() {
        let mut rig = rig(1.0);
        let start = Vec3::new(0.0, 0.0, 100.0);
        rig.begin_zoom_in(start);
        let mid = rig.advance(0.5, Some(Vec3::ZERO), start);

        // Re-targeting starts a fresh transition from the current position.
        rig.begin_zoom_in(mid);
        let after = rig.advance(0.25, Some(Vec3::new(50.0, 0.0, 0.0)), mid);
        assert_eq!(rig.phase(), Phase::ZoomingIn);
        assert!(after.is_finite());
        // Progress restarted: one quarter along the new segment, not three.
        let new_target = Vec3::new(50.0, 0.0, 0.0)
            + (Vec3::new(50.0, 0.0, 0.0) - mid).normalize() * -80.0;
        assert!((after - mid.lerp(new_target, 0.25)).length() < 1e-3);
    }
}
