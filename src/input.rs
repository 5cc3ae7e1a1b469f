use egui::{Context, Key, Modifiers, Pos2, Rect};

use crate::geometry::Point;

/// Keyboard shortcuts understood by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Primary modifier (Ctrl, or Cmd on macOS) + Z undoes, + Y redoes.
    /// Shift+Z is deliberately not an undo.
    pub fn from_key(key: Key, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.command {
            return None;
        }
        match key {
            Key::Z if !modifiers.shift => Some(Shortcut::Undo),
            Key::Y => Some(Shortcut::Redo),
            _ => None,
        }
    }
}

/// Canvas input, already mapped into surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the surface
    PointerDown { pos: Point },
    /// Pointer moved inside the surface while the button is held
    PointerMove { pos: Point },
    /// Primary button released
    PointerUp { pos: Point },
    /// Pointer left the surface while the button was held
    PointerLeave { last_pos: Point },
    Shortcut(Shortcut),
}

/// The slice of one frame's pointer state the handler needs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    /// Pointer position in screen coordinates, if it is over the window
    pub hover_pos: Option<Pos2>,
    /// The canvas itself is under the pointer, not a window or popup above it
    pub canvas_hovered: bool,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

/// Converts raw egui input into canvas [`InputEvent`]s.
///
/// Positions are translated by the canvas' on-screen offset. A drag only
/// lives while the pointer stays inside the canvas; leaving ends it.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Last in-bounds surface position of the active drag
    drag_pos: Option<Point>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            drag_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_pos.is_some()
    }

    /// Screen position to surface position, or `None` outside the canvas
    fn to_surface(&self, pos: Pos2) -> Option<Point> {
        self.canvas_rect
            .contains(pos)
            .then(|| pos - self.canvas_rect.min.to_vec2())
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `canvas_hovered` comes from the canvas widget's response, so presses
    /// landing on an overlapping popup do not start a drag.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let (frame, shortcuts) = ctx.input(|input| {
            let frame = PointerFrame {
                hover_pos: input.pointer.hover_pos(),
                canvas_hovered,
                primary_pressed: input.pointer.primary_pressed(),
                primary_released: input.pointer.primary_released(),
            };
            let shortcuts: Vec<Shortcut> = input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Shortcut::from_key(*key, *modifiers),
                    _ => None,
                })
                .collect();
            (frame, shortcuts)
        });

        let mut events = self.process_pointer(frame);
        events.extend(shortcuts.into_iter().map(InputEvent::Shortcut));
        events
    }

    /// Pointer half of [`Self::process_input`], separated from egui for testing
    pub fn process_pointer(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let surface_pos = frame.hover_pos.and_then(|pos| self.to_surface(pos));

        if frame.primary_pressed && frame.canvas_hovered && self.drag_pos.is_none() {
            if let Some(pos) = surface_pos {
                events.push(InputEvent::PointerDown { pos });
                self.drag_pos = Some(pos);
            }
        }

        let Some(last_pos) = self.drag_pos else {
            return events;
        };

        match surface_pos {
            Some(pos) => {
                if pos != last_pos {
                    events.push(InputEvent::PointerMove { pos });
                    self.drag_pos = Some(pos);
                }
                if frame.primary_released {
                    events.push(InputEvent::PointerUp { pos });
                    self.drag_pos = None;
                }
            }
            None => {
                events.push(InputEvent::PointerLeave { last_pos });
                self.drag_pos = None;
            }
        }
        events
    }
}
