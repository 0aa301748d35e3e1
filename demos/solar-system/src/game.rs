use glam::{Vec2, Vec3};
use orrery_engine::{
    pick_nearest, viewport_to_ndc, EngineContext, Game, GameConfig, GameEvent, InputEvent,
    InputQueue, NodeId, PointerButton, Scene, SceneNode, SphereColor, SphereComponent,
};

use crate::bodies;
use crate::config::OrreryConfig;
use crate::rig::{CameraRig, Phase};
use crate::select::{SelectionChange, SelectionState};

// ── Game event kinds to the shell ────────────────────────────────────

/// Selection changed / heartbeat: a = planet index (-1 none), b = phase.
const EVENT_SELECTION: f32 = 1.0;

/// One selectable body: the spinning mesh plus the pivot it revolves around.
struct Body {
    name: &'static str,
    mesh: NodeId,
    anchor: NodeId,
    /// Rest offset along the pivot's +X axis (the orbit radius).
    base_position: f32,
}

/// Pointer gesture state. Pan and pick are mutually exclusive per gesture,
/// decided by modifier keys at press time.
#[derive(Debug, Clone, Copy, Default)]
enum Gesture {
    #[default]
    Idle,
    Panning {
        start_pointer: Vec2,
        start_camera: Vec3,
    },
}

/// The interactive solar system.
///
/// All interaction state lives here: pointer handlers and the per-frame
/// pass both run inside `update`, so a frame always reads fully settled
/// selection state.
pub struct Orrery {
    config: OrreryConfig,
    bodies: Vec<Body>,
    sun: Option<NodeId>,
    selection: SelectionState,
    rig: CameraRig,
    gesture: Gesture,
    /// Viewport size tracked from resize events, for NDC conversion.
    viewport: Vec2,
}

impl Orrery {
    pub fn new() -> Self {
        let config = OrreryConfig::default();
        let engine_defaults = GameConfig::default();
        let rig = CameraRig::new(
            config.home_position(),
            config.zoom_duration,
            config.zoom_distance,
            config.easing,
        );
        Self {
            config,
            bodies: Vec::with_capacity(bodies::PLANET_COUNT),
            sun: None,
            selection: SelectionState::default(),
            rig,
            gesture: Gesture::Idle,
            viewport: Vec2::new(engine_defaults.viewport_width, engine_defaults.viewport_height),
        }
    }

    // ── Input dispatch ─────────────────────────────────────────────

    fn dispatch(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y, button, mods } => {
                if button == PointerButton::Secondary {
                    // Context-menu press; the shell already suppressed the menu.
                    return;
                }
                if mods.any() {
                    self.gesture = Gesture::Panning {
                        start_pointer: Vec2::new(x, y),
                        start_camera: ctx.camera.pos,
                    };
                } else {
                    self.pick(ctx, Vec2::new(x, y));
                }
            }
            InputEvent::PointerMove { x, y } => {
                if let Gesture::Panning {
                    start_pointer,
                    start_camera,
                } = self.gesture
                {
                    let delta = Vec2::new(x, y) - start_pointer;
                    let s = self.config.pan_sensitivity;
                    ctx.camera.pos = start_camera + Vec3::new(-delta.x * s, delta.y * s, 0.0);
                    ctx.camera.look_at(Vec3::ZERO);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.gesture = Gesture::Idle;
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Vec2::new(width, height);
                ctx.camera.resize(width, height);
            }
            _ => {}
        }
    }

    /// Ray-pick at a pointer position; a hit on a planet mesh toggles its
    /// selection. Empty space and non-planet meshes are no-ops.
    fn pick(&mut self, ctx: &mut EngineContext, pointer: Vec2) {
        let ndc = viewport_to_ndc(pointer, self.viewport.x, self.viewport.y);
        let ray = ctx.camera.ray_through(ndc);
        let Some(hit) = pick_nearest(&ctx.scene, ray) else {
            return;
        };
        let Some(idx) = self.bodies.iter().position(|b| b.mesh == hit.id) else {
            return;
        };
        self.toggle_select(ctx, idx);
    }

    // ── Selection side effects ─────────────────────────────────────

    /// Apply a selection toggle: raise offsets move immediately and the rig
    /// starts the matching camera transition.
    fn toggle_select(&mut self, ctx: &mut EngineContext, idx: usize) {
        match self.selection.toggle(idx) {
            SelectionChange::Selected(new) => {
                self.set_raise(&mut ctx.scene, new, self.config.raise_amount);
                self.rig.begin_zoom_in(ctx.camera.pos);
                log::debug!("selected {}", self.bodies[new].name);
            }
            SelectionChange::Deselected(old) => {
                self.set_raise(&mut ctx.scene, old, 0.0);
                self.rig.begin_zoom_out(ctx.camera.pos);
                log::debug!("deselected {}", self.bodies[old].name);
            }
            SelectionChange::Replaced { old, new } => {
                // The old body settles instantly; its zoom-out never plays.
                self.set_raise(&mut ctx.scene, old, 0.0);
                self.set_raise(&mut ctx.scene, new, self.config.raise_amount);
                self.rig.begin_zoom_in(ctx.camera.pos);
                log::debug!(
                    "selection moved from {} to {}",
                    self.bodies[old].name,
                    self.bodies[new].name
                );
            }
        }
    }

    fn set_raise(&self, scene: &mut Scene, idx: usize, amount: f32) {
        let Some(body) = self.bodies.get(idx) else {
            return;
        };
        if let Some(node) = scene.get_mut(body.mesh) {
            node.pos = Vec3::new(body.base_position, amount, 0.0);
        }
    }

    // ── Per-frame passes ───────────────────────────────────────────

    /// Spin every mesh and revolve every anchor by its fixed per-frame
    /// step. Freezes entirely while anything is selected.
    fn advance_idle_motion(&self, scene: &mut Scene) {
        if let Some(sun) = self.sun {
            if let Some(node) = scene.get_mut(sun) {
                node.spin += bodies::SUN_SPIN_STEP;
            }
        }
        for (body, desc) in self.bodies.iter().zip(bodies::PLANETS.iter()) {
            if let Some(node) = scene.get_mut(body.mesh) {
                node.spin += desc.spin_step;
            }
            if let Some(node) = scene.get_mut(body.anchor) {
                node.spin += desc.orbit_step;
            }
        }
    }

    fn advance_camera(&mut self, ctx: &mut EngineContext, dt: f32) {
        let selected_pos = self
            .selection
            .selected()
            .and_then(|idx| self.bodies.get(idx))
            .and_then(|b| ctx.scene.world_position(b.mesh));
        ctx.camera.pos = self.rig.advance(dt, selected_pos, ctx.camera.pos);
    }

    /// Force the selected planet fully opaque and every other planet to the
    /// dimmed value. Recomputed every frame rather than diffed, so a
    /// selection change is never visible through a stale frame.
    fn apply_emphasis(&self, scene: &mut Scene) {
        let selected = self.selection.selected();
        for (idx, body) in self.bodies.iter().enumerate() {
            let opacity = if selected == Some(idx) {
                1.0
            } else {
                self.config.dim_opacity
            };
            if let Some(sphere) = scene.get_mut(body.mesh).and_then(|n| n.sphere.as_mut()) {
                sphere.opacity = opacity;
            }
        }
    }

    fn emit_selection(&self, ctx: &mut EngineContext) {
        let idx = self.selection.selected().map(|i| i as f32).unwrap_or(-1.0);
        let phase = match self.rig.phase() {
            Phase::Idle => 0.0,
            Phase::ZoomingIn => 1.0,
            Phase::ZoomingOut => 2.0,
        };
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: idx,
            b: phase,
            c: 0.0,
        });
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            fov_y_degrees: 45.0,
            max_instances: 16,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // Sun at the origin; not selectable, never dimmed.
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            SceneNode::new(sun_id).with_tag("sun").with_sphere(
                SphereComponent::new(bodies::SUN_RADIUS, SphereColor::from(bodies::SUN_COLOR))
                    .with_emissive(bodies::SUN_EMISSIVE),
            ),
        );
        self.sun = Some(sun_id);

        // One meshless pivot per planet; the mesh sits orbit_radius out on
        // the pivot's +X axis, so spinning the pivot revolves the planet.
        for desc in bodies::PLANETS.iter() {
            let anchor = ctx.next_id();
            ctx.scene
                .spawn(SceneNode::new(anchor).with_tag(format!("{}-anchor", desc.name)));

            let mesh = ctx.next_id();
            ctx.scene.spawn(
                SceneNode::new(mesh)
                    .with_tag(desc.name)
                    .with_parent(anchor)
                    .with_pos(Vec3::new(desc.orbit_radius, 0.0, 0.0))
                    .with_sphere(SphereComponent::new(
                        desc.radius,
                        SphereColor::from(desc.color),
                    )),
            );

            self.bodies.push(Body {
                name: desc.name,
                mesh,
                anchor,
                base_position: desc.orbit_radius,
            });
        }

        ctx.camera.pos = self.config.home_position();
        ctx.camera.look_at(Vec3::ZERO);
        self.rig = CameraRig::new(
            self.config.home_position(),
            self.config.zoom_duration,
            self.config.zoom_distance,
            self.config.easing,
        );
        log::info!("orrery: spawned sun and {} planets", self.bodies.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // Input settles first, in delivery order; the passes below only ever
        // see the resulting state.
        for event in input.iter() {
            self.dispatch(ctx, event);
        }

        if self.selection.selected().is_none() {
            self.advance_idle_motion(&mut ctx.scene);
        }
        self.advance_camera(ctx, dt);
        self.apply_emphasis(&mut ctx.scene);
        self.emit_selection(ctx);
    }

    fn load_config(&mut self, json: &str) {
        self.config.apply_json(json);
        self.rig.set_tuning(
            self.config.zoom_duration,
            self.config.zoom_distance,
            self.config.easing,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::Modifiers;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (Orrery, EngineContext) {
        let mut game = Orrery::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn tick(game: &mut Orrery, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for &e in events {
            input.push(e);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input, DT);
    }

    fn mesh_y(game: &Orrery, ctx: &EngineContext, idx: usize) -> f32 {
        ctx.scene.get(game.bodies[idx].mesh).unwrap().pos.y
    }

    fn opacity(game: &Orrery, ctx: &EngineContext, idx: usize) -> f32 {
        ctx.scene
            .get(game.bodies[idx].mesh)
            .unwrap()
            .sphere
            .unwrap()
            .opacity
    }

    fn plain_click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
            mods: Modifiers::default(),
        }
    }

    fn modified_click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
            mods: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    // ── Selection state ────────────────────────────────────────────

    #[test]
    fn toggle_twice_restores_offset() {
        let (mut game, mut ctx) = setup();
        game.toggle_select(&mut ctx, bodies::EARTH);
        assert_eq!(game.selection.selected(), Some(bodies::EARTH));
        assert_eq!(mesh_y(&game, &ctx, bodies::EARTH), 20.0);

        game.toggle_select(&mut ctx, bodies::EARTH);
        assert_eq!(game.selection.selected(), None);
        assert_eq!(mesh_y(&game, &ctx, bodies::EARTH), 0.0);
    }

    #[test]
    fn replacing_selection_moves_the_raise() {
        let (mut game, mut ctx) = setup();
        game.toggle_select(&mut ctx, bodies::EARTH);
        game.toggle_select(&mut ctx, bodies::MARS);

        assert_eq!(game.selection.selected(), Some(bodies::MARS));
        assert_eq!(mesh_y(&game, &ctx, bodies::EARTH), 0.0);
        assert_eq!(mesh_y(&game, &ctx, bodies::MARS), 20.0);
    }

    #[test]
    fn at_most_one_body_is_ever_raised() {
        let (mut game, mut ctx) = setup();
        for &idx in &[0, 3, 3, 5, 1, 1, 8, 0] {
            game.toggle_select(&mut ctx, idx);
            let raised: Vec<usize> = (0..bodies::PLANET_COUNT)
                .filter(|&i| mesh_y(&game, &ctx, i) != 0.0)
                .collect();
            match game.selection.selected() {
                Some(sel) => assert_eq!(raised, vec![sel]),
                None => assert!(raised.is_empty()),
            }
        }
    }

    // ── Idle motion ────────────────────────────────────────────────

    #[test]
    fn idle_motion_accumulates_fixed_steps() {
        let (mut game, mut ctx) = setup();
        for _ in 0..5 {
            tick(&mut game, &mut ctx, &[]);
        }
        let mercury = &game.bodies[bodies::MERCURY];
        let spin = ctx.scene.get(mercury.mesh).unwrap().spin;
        let orbit = ctx.scene.get(mercury.anchor).unwrap().spin;
        assert!((spin - 5.0 * 0.004).abs() < 1e-6);
        assert!((orbit - 5.0 * 0.04).abs() < 1e-6);
        let sun_spin = ctx.scene.get(game.sun.unwrap()).unwrap().spin;
        assert!((sun_spin - 5.0 * bodies::SUN_SPIN_STEP).abs() < 1e-6);
    }

    #[test]
    fn motion_freezes_while_anything_is_selected() {
        let (mut game, mut ctx) = setup();
        for _ in 0..3 {
            tick(&mut game, &mut ctx, &[]);
        }
        game.toggle_select(&mut ctx, bodies::VENUS);
        let before = ctx.scene.get(game.bodies[bodies::MARS].anchor).unwrap().spin;
        for _ in 0..10 {
            tick(&mut game, &mut ctx, &[]);
        }
        let after = ctx.scene.get(game.bodies[bodies::MARS].anchor).unwrap().spin;
        assert_eq!(before, after);
    }

    // ── Camera transitions ─────────────────────────────────────────

    #[test]
    fn camera_snaps_to_target_after_duration() {
        let (mut game, mut ctx) = setup();
        game.load_config(r#"{"zoom_duration": 0.5}"#);
        let home = game.config.home_position();

        game.toggle_select(&mut ctx, bodies::EARTH);
        let body = ctx
            .scene
            .world_position(game.bodies[bodies::EARTH].mesh)
            .unwrap();
        let expected = body + (body - home).normalize() * -80.0;

        // 0.5 s of fixed steps plus slack; the body is frozen while selected.
        for _ in 0..40 {
            tick(&mut game, &mut ctx, &[]);
        }
        assert!(
            (ctx.camera.pos - expected).length() < 1e-3,
            "camera {:?} vs target {:?}",
            ctx.camera.pos,
            expected
        );
    }

    #[test]
    fn deselecting_flies_the_camera_home() {
        let (mut game, mut ctx) = setup();
        game.load_config(r#"{"zoom_duration": 0.25}"#);
        game.toggle_select(&mut ctx, bodies::JUPITER);
        for _ in 0..20 {
            tick(&mut game, &mut ctx, &[]);
        }
        game.toggle_select(&mut ctx, bodies::JUPITER);
        for _ in 0..20 {
            tick(&mut game, &mut ctx, &[]);
        }
        assert!((ctx.camera.pos - game.config.home_position()).length() < 1e-3);
    }

    // ── Visual emphasis ────────────────────────────────────────────

    #[test]
    fn emphasis_dims_everything_but_the_selection() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &[]);
        // Nothing selected: the per-frame pass still dims every planet.
        for idx in 0..bodies::PLANET_COUNT {
            assert_eq!(opacity(&game, &ctx, idx), 0.3);
        }

        game.toggle_select(&mut ctx, bodies::SATURN);
        tick(&mut game, &mut ctx, &[]);
        for idx in 0..bodies::PLANET_COUNT {
            let expected = if idx == bodies::SATURN { 1.0 } else { 0.3 };
            assert_eq!(opacity(&game, &ctx, idx), expected, "planet {idx}");
        }
        // The sun is not a body and keeps full opacity.
        let sun = ctx.scene.get(game.sun.unwrap()).unwrap().sphere.unwrap();
        assert_eq!(sun.opacity, 1.0);
    }

    #[test]
    fn emphasis_has_no_stale_frame_after_a_change() {
        let (mut game, mut ctx) = setup();
        game.toggle_select(&mut ctx, bodies::EARTH);
        tick(&mut game, &mut ctx, &[]);
        assert_eq!(opacity(&game, &ctx, bodies::EARTH), 1.0);

        // Replace the selection and read opacities after the same tick.
        game.toggle_select(&mut ctx, bodies::MARS);
        tick(&mut game, &mut ctx, &[]);
        assert_eq!(opacity(&game, &ctx, bodies::EARTH), 0.3);
        assert_eq!(opacity(&game, &ctx, bodies::MARS), 1.0);
    }

    // ── Picking ────────────────────────────────────────────────────

    #[test]
    fn clicking_a_planet_selects_it() {
        let (mut game, mut ctx) = setup();
        // Aim straight at Pluto (alone at the system's edge) and click the
        // viewport center, so the pick ray passes through its center.
        let pluto = ctx
            .scene
            .world_position(game.bodies[bodies::PLUTO].mesh)
            .unwrap();
        ctx.camera.look_at(pluto);
        let (vx, vy) = (game.viewport.x, game.viewport.y);
        tick(
            &mut game,
            &mut ctx,
            &[plain_click(vx / 2.0, vy / 2.0)],
        );
        assert_eq!(game.selection.selected(), Some(bodies::PLUTO));
        assert_eq!(mesh_y(&game, &ctx, bodies::PLUTO), 20.0);
    }

    #[test]
    fn clicking_empty_space_changes_nothing() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &[plain_click(0.0, 0.0)]);
        assert_eq!(game.selection.selected(), None);
        for idx in 0..bodies::PLANET_COUNT {
            assert_eq!(mesh_y(&game, &ctx, idx), 0.0);
        }
    }

    #[test]
    fn secondary_button_is_ignored() {
        let (mut game, mut ctx) = setup();
        let pluto = ctx
            .scene
            .world_position(game.bodies[bodies::PLUTO].mesh)
            .unwrap();
        ctx.camera.look_at(pluto);
        let (vx, vy) = (game.viewport.x, game.viewport.y);
        tick(
            &mut game,
            &mut ctx,
            &[InputEvent::PointerDown {
                x: vx / 2.0,
                y: vy / 2.0,
                button: PointerButton::Secondary,
                mods: Modifiers::default(),
            }],
        );
        assert_eq!(game.selection.selected(), None);
    }

    // ── Camera pan ─────────────────────────────────────────────────

    #[test]
    fn modified_drag_pans_instead_of_picking() {
        let (mut game, mut ctx) = setup();
        let start = ctx.camera.pos;
        tick(
            &mut game,
            &mut ctx,
            &[
                modified_click(100.0, 100.0),
                InputEvent::PointerMove { x: 150.0, y: 80.0 },
            ],
        );
        // dx = 50, dy = -20: camera moves by (-dx*s, +dy*s, 0) with s = 0.5.
        let expected = start + Vec3::new(-25.0, -10.0, 0.0);
        assert!((ctx.camera.pos - expected).length() < 1e-4);
        // Pan re-aims at the scene origin and never selects.
        assert_eq!(ctx.camera.target, Vec3::ZERO);
        assert_eq!(game.selection.selected(), None);
    }

    #[test]
    fn releasing_the_pointer_ends_the_pan() {
        let (mut game, mut ctx) = setup();
        tick(
            &mut game,
            &mut ctx,
            &[
                modified_click(100.0, 100.0),
                InputEvent::PointerMove { x: 150.0, y: 80.0 },
                InputEvent::PointerUp { x: 150.0, y: 80.0 },
            ],
        );
        let settled = ctx.camera.pos;
        tick(
            &mut game,
            &mut ctx,
            &[InputEvent::PointerMove { x: 500.0, y: 500.0 }],
        );
        assert_eq!(ctx.camera.pos, settled);
    }

    // ── Robustness ─────────────────────────────────────────────────

    #[test]
    fn missing_scene_nodes_are_skipped() {
        let (mut game, mut ctx) = setup();
        ctx.scene.clear();
        game.toggle_select(&mut ctx, bodies::EARTH);
        tick(&mut game, &mut ctx, &[]);
        // Selection is tracked even though every lookup misses.
        assert_eq!(game.selection.selected(), Some(bodies::EARTH));
        assert!(ctx.camera.pos.is_finite());
    }

    #[test]
    fn selection_events_reach_the_shell() {
        let (mut game, mut ctx) = setup();
        game.toggle_select(&mut ctx, bodies::URANUS);
        tick(&mut game, &mut ctx, &[]);
        let event = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_SELECTION)
            .expect("selection event");
        assert_eq!(event.a, bodies::URANUS as f32);
        assert_eq!(event.b, 1.0); // zooming in
    }
}
