use orrery_engine::{
    build_render_buffer, CameraUniform, EngineContext, FixedTimestep, Game, GameConfig,
    GameEvent, InputEvent, InputQueue, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    /// Camera matrix snapshot for SharedArrayBuffer reads.
    camera_uniform: CameraUniform,
    /// Viewport size tracked from resize events.
    viewport: (f32, f32),
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let ctx = EngineContext::new(&config);
        let camera_uniform = ctx.camera.uniform();
        Self {
            game,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            viewport: (config.viewport_width, config.viewport_height),
            config,
            camera_uniform,
            ctx,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction (and after any
    /// `load_config` call, so tuning is in place before nodes spawn).
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.camera_uniform = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Forward a JSON tuning blob to the game.
    pub fn load_config(&mut self, json: &str) {
        self.game.load_config(json);
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Resize { width, height } = event {
            self.viewport = (width, height);
        }
        self.input.push(event);
    }

    /// Run one frame: fixed-timestep updates, then rebuild the shared
    /// buffers the browser renderer reads from.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input, self.timestep.dt());
        }

        // Events stay queued until at least one fixed step has observed them.
        if steps > 0 {
            self.input.drain();
        }

        build_render_buffer(&self.ctx.scene, &mut self.render_buffer);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_uniform.view_proj.as_ptr() as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.config.max_events) as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport.0
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport.1
    }

    // ---- Capacity accessors (read by TypeScript once at startup) ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    pub fn instance_floats(&self) -> u32 {
        orrery_engine::SphereInstance::FLOATS as u32
    }

    pub fn event_floats(&self) -> u32 {
        GameEvent::FLOATS as u32
    }

    pub fn camera_floats(&self) -> u32 {
        CameraUniform::FLOATS as u32
    }
}
