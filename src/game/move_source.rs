use super::{Board, InputEvent, PlayerType};
use crate::ui::Geometry;

/// Anything that can occupy a seat and choose columns.
///
/// The controller forwards the tick's input only to the seat whose turn it
/// is, then polls that seat exactly once. Returning `None` means "no move
/// yet"; the controller will ask again next tick.
pub trait MoveSource {
    /// Observe an input event. Sources that ignore input keep the default.
    fn handle_input(&mut self, _event: &InputEvent, _geometry: &Geometry) {}

    /// The chosen column, if one is ready.
    fn poll_move(&mut self, board: &Board) -> Option<usize>;

    /// Which kind of controller this is, for display and config round-trips.
    fn kind(&self) -> PlayerType;

    /// Forget any pending choice, e.g. when a new game starts.
    fn reset(&mut self) {}
}
