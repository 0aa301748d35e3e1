/// Pointer button reported by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
}

impl PointerButton {
    /// Map a `PointerEvent.button` value from the shell.
    /// Touch contacts arrive as 0 and land on Primary.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether any modifier is held.
    pub fn any(self) -> bool {
        self.ctrl || self.shift || self.meta
    }

    /// Decode the shell's bitmask: bit 0 = ctrl, bit 1 = shift, bit 2 = meta.
    pub fn from_bits(bits: u32) -> Self {
        Self {
            ctrl: bits & 1 != 0,
            shift: bits & 2 != 0,
            meta: bits & 4 != 0,
        }
    }
}

/// Input event types the engine understands.
/// Generic — no game-specific semantics. Pointer coordinates are viewport
/// pixels; games convert to NDC themselves.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
        mods: Modifiers,
    },
    /// A touch/cursor moved.
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The viewport was resized (device pixels).
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer.
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The shell writes events into the queue; the game reads them each frame
/// and the runner drains them once a fixed step has observed them.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the shell boundary).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in delivery order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
