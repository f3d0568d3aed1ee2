use crate::config::EDITOR_CONFIG;
use crate::transform::PhotoTransform;
use serde::{Deserialize, Serialize};

/// One normalized input event.
///
/// The UI layer translates pointer, mouse, and touch DOM events into this
/// single type before they reach the state machine, so the gesture logic
/// never sees which input modality produced them. Coordinates are
/// viewport-local.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    /// Pointer released or left the viewport; touch-end maps here too.
    PointerUp,
    Wheel { delta_y: f64 },
}

/// Drag state machine: Idle until a pointer goes down, then Dragging with
/// the last recorded pointer position as anchor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureState {
    Idle,
    Dragging { last_x: f64, last_y: f64 },
}

impl GestureState {
    pub fn new() -> Self {
        GestureState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed one event through the state machine, mutating the transform through
/// its clamping/normalizing operations only. Returns true if the transform
/// changed and the caller should redraw.
///
/// Each move's delta is taken against the immediately preceding recorded
/// position, never the original anchor, so rapid event streams cannot
/// compound into drift.
pub fn apply_gesture(
    state: &mut GestureState,
    transform: &mut PhotoTransform,
    event: GestureEvent,
) -> bool {
    match event {
        GestureEvent::PointerDown { x, y } => {
            *state = GestureState::Dragging {
                last_x: x,
                last_y: y,
            };
            false
        }
        GestureEvent::PointerMove { x, y } => match *state {
            GestureState::Dragging { last_x, last_y } => {
                transform.translate_by(x - last_x, y - last_y);
                *state = GestureState::Dragging {
                    last_x: x,
                    last_y: y,
                };
                true
            }
            GestureState::Idle => false,
        },
        GestureEvent::PointerUp => {
            *state = GestureState::Idle;
            false
        }
        // Wheel zooms in either state and never transitions the machine.
        // Sign is the inverse of the scroll direction.
        GestureEvent::Wheel { delta_y } => {
            let step = if delta_y > 0.0 {
                -EDITOR_CONFIG.zoom_step
            } else {
                EDITOR_CONFIG.zoom_step
            };
            let before = transform.zoom;
            transform.zoom_by(step);
            transform.zoom != before
        }
    }
}
