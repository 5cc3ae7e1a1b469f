use crate::stroke::{FreehandDraft, ShapeDraft};

/// Interaction state of the canvas. The draft lives here and nowhere else;
/// it is dropped on commit.
#[derive(Debug, Clone, Default)]
pub enum EditorState {
    #[default]
    Idle,
    DrawingFreehand {
        draft: FreehandDraft,
        /// False until the first move event, used to tell a tap from a drag
        moved: bool,
    },
    DraggingShape {
        draft: ShapeDraft,
    },
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::DrawingFreehand { .. } => "DrawingFreehand",
            Self::DraggingShape { .. } => "DraggingShape",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Take the state out, leaving `Idle` behind
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
