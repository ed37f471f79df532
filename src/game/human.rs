use super::{Board, InputEvent, MoveSource, PlayerType};
use crate::ui::Geometry;

/// Turns clicks into columns.
///
/// Holds at most one pending column. Polling hands it over and re-arms the
/// player, so a click is only ever played once.
#[derive(Debug, Default)]
pub struct HumanPlayer {
    pending: Option<usize>,
}

impl HumanPlayer {
    pub fn new() -> Self {
        HumanPlayer { pending: None }
    }
}

impl MoveSource for HumanPlayer {
    fn handle_input(&mut self, event: &InputEvent, geometry: &Geometry) {
        match *event {
            InputEvent::PointerUp { x, .. } => {
                if let Some(col) = geometry.column_at(x) {
                    self.pending = Some(col);
                }
            }
            InputEvent::SelectColumn(col) => self.pending = Some(col),
            InputEvent::Begin | InputEvent::Resize(_) | InputEvent::Reset => {}
        }
    }

    fn poll_move(&mut self, _board: &Board) -> Option<usize> {
        self.pending.take()
    }

    fn kind(&self) -> PlayerType {
        PlayerType::Human
    }

    fn reset(&mut self) {
        self.pending = None;
    }
}
