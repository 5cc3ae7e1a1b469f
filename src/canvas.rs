use egui::Vec2;
use log::{debug, info};

use crate::action::Action;
use crate::error::TransitionError;
use crate::geometry::Point;
use crate::input::Shortcut;
use crate::ledger::Ledger;
use crate::renderer::{self, RenderMode, render_path, render_shape};
use crate::state::EditorState;
use crate::stroke::{FreehandDraft, ShapeDraft};
use crate::surface::{PixmapSurface, Surface, SurfaceFrame};
use crate::tools::ToolSnapshot;

/// The drawing session: a surface, the ledger that defines what it shows, and
/// the pointer state machine feeding the ledger.
///
/// Every commit, undo, redo and clear is followed by exactly one full replay,
/// so the surface always matches the visible ledger prefix between events.
#[derive(Debug)]
pub struct Canvas<S: Surface = PixmapSurface> {
    surface: S,
    ledger: Ledger,
    state: EditorState,
}

impl<S: Surface> Canvas<S> {
    pub fn new(surface: S) -> Self {
        let mut canvas = Self {
            surface,
            ledger: Ledger::new(),
            state: EditorState::Idle,
        };
        canvas.render();
        canvas
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Size of the drawable area in pixels
    pub fn size(&self) -> Vec2 {
        self.surface.size()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.ledger.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.ledger.can_redo()
    }

    /// Start a freehand draft or a shape drag, depending on the snapshot's shape kind.
    ///
    /// Fails without touching anything when a draft is already in progress.
    pub fn on_pointer_down(
        &mut self,
        pos: Point,
        tools: &ToolSnapshot,
    ) -> Result<(), TransitionError> {
        let to = if tools.shape_kind.is_shape() {
            "DraggingShape"
        } else {
            "DrawingFreehand"
        };
        if !self.state.is_idle() {
            return Err(TransitionError::InvalidStateTransition {
                from: self.state.name(),
                to,
            });
        }
        debug!("{} -> {} at {:?}", self.state.name(), to, pos);

        if tools.shape_kind.is_shape() {
            self.state = EditorState::DraggingShape {
                draft: ShapeDraft::new(tools.style, tools.shape_kind, pos),
            };
        } else {
            let draft = FreehandDraft::new(tools.style, pos);
            renderer::render_with(&mut self.surface, &self.ledger, |surface| {
                render_path(surface, draft.style(), draft.points())
            });
            self.state = EditorState::DrawingFreehand {
                draft,
                moved: false,
            };
        }
        Ok(())
    }

    /// Extend the draft and redraw the live preview. Ignored while idle.
    pub fn on_pointer_move(&mut self, pos: Point) {
        match &mut self.state {
            EditorState::Idle => {}
            EditorState::DrawingFreehand { draft, moved } => {
                draft.add_point(pos);
                *moved = true;
                let draft = &*draft;
                renderer::render_with(&mut self.surface, &self.ledger, |surface| {
                    render_path(surface, draft.style(), draft.points())
                });
            }
            EditorState::DraggingShape { draft } => {
                draft.end = pos;
                let draft = &*draft;
                renderer::render_with(&mut self.surface, &self.ledger, |surface| {
                    render_shape(
                        surface,
                        &draft.style,
                        draft.kind,
                        draft.start,
                        draft.end,
                        RenderMode::Preview,
                    )
                });
            }
        }
    }

    /// Finish the current draft and commit it. Ignored while idle.
    pub fn on_pointer_up(&mut self, pos: Point) {
        match self.state.take() {
            EditorState::Idle => {
                debug!("Pointer up without a draft, ignoring");
            }
            EditorState::DrawingFreehand { mut draft, moved } => {
                // No move events arrived: keep the release point if the pointer slid
                if !moved && draft.points().last() != Some(&pos) {
                    draft.add_point(pos);
                }
                let (style, points) = draft.into_parts();
                self.commit(Action::freehand(style, points));
            }
            EditorState::DraggingShape { mut draft } => {
                draft.end = pos;
                {
                    let mut frame = SurfaceFrame::begin(&mut self.surface);
                    render_shape(
                        &mut *frame,
                        &draft.style,
                        draft.kind,
                        draft.start,
                        draft.end,
                        RenderMode::Final,
                    );
                }
                self.commit(Action::shape(draft.style, draft.kind, draft.start, draft.end));
            }
        }
    }

    /// The pointer left the surface. Drawing cannot continue off-surface, so
    /// this finishes the draft exactly like a release at `last_pos`.
    pub fn on_pointer_leave(&mut self, last_pos: Point) {
        if !self.state.is_idle() {
            debug!("Pointer left the surface while {}", self.state.name());
        }
        self.on_pointer_up(last_pos);
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.ledger.undo();
        if changed {
            self.render();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.ledger.redo();
        if changed {
            self.render();
        }
        changed
    }

    /// Wipe the ledger and the surface. Not undoable.
    pub fn clear_all(&mut self) {
        info!("Clearing canvas");
        self.ledger.clear();
        self.render();
    }

    /// Apply a keyboard shortcut. Returns true if it changed anything.
    pub fn handle_shortcut(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::Undo if self.can_undo() => self.undo(),
            Shortcut::Redo if self.can_redo() => self.redo(),
            _ => false,
        }
    }

    fn commit(&mut self, action: Action) {
        self.ledger.commit(action);
        self.render();
    }

    fn render(&mut self) {
        renderer::render(&mut self.surface, &self.ledger);
    }
}
