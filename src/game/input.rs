use crate::ui::Geometry;

/// Input delivered to the game controller once per tick.
///
/// The front end gathers these from the terminal between frames and passes
/// them in as a slice, in the order they happened. Nothing reaches into the
/// controller from a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A mouse button was released at absolute screen coordinates.
    PointerUp { x: u16, y: u16 },
    /// A column was chosen directly, e.g. by a number key.
    SelectColumn(usize),
    /// Keyboard confirmation, equivalent to a click on the start screen.
    Begin,
    /// The board moved on screen. Later clicks are translated with this layout.
    Resize(Geometry),
    /// Abandon the current game. Earlier input in the same tick is discarded.
    Reset,
}
