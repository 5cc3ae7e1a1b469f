//! Turns the ledger back into pixels.
//!
//! The visible raster is never stored. Every change to the ledger clears the
//! surface and replays the visible prefix in order, so the output depends
//! only on the committed actions and never on what was on the surface before.

use log::trace;

use crate::action::Action;
use crate::ledger::Ledger;
use crate::surface::{Surface, SurfaceFrame};

mod shape;
mod stamp;

pub use shape::{RenderMode, render_shape};
pub use stamp::render_path;

/// Clear the surface and replay every visible action of `ledger`.
pub fn render<S: Surface + ?Sized>(surface: &mut S, ledger: &Ledger) {
    render_with(surface, ledger, |_| {});
}

/// Replay `ledger`, then run `overlay` inside the same drawing pass.
///
/// Used for live feedback: the draft is drawn fresh on top of a clean replay
/// every time, so it is never accumulated twice.
pub fn render_with<S, F>(surface: &mut S, ledger: &Ledger, overlay: F)
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    let mut frame = SurfaceFrame::begin(surface);
    replay(&mut *frame, ledger.visible());
    overlay(&mut *frame);
}

/// Clear the surface and draw `actions` in order
pub fn replay<S: Surface + ?Sized>(surface: &mut S, actions: &[Action]) {
    trace!("Replaying {} action(s)", actions.len());
    surface.clear();
    for action in actions {
        render_action(surface, action);
    }
}

/// Draw one committed action
pub fn render_action<S: Surface + ?Sized>(surface: &mut S, action: &Action) {
    match action {
        Action::Freehand { style, points } => render_path(surface, style, points),
        Action::Shape {
            style,
            kind,
            start,
            end,
        } => render_shape(surface, style, *kind, *start, *end, RenderMode::Final),
    }
}
