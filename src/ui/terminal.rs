use std::io;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::App;

/// Runs a restore action when dropped, whichever way the scope is left.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        RestoreGuard { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Run `body` with `restore` armed. `restore` runs whether `body` succeeds,
/// fails or panics.
fn with_restore<T>(
    restore: impl FnMut(),
    body: impl FnOnce() -> io::Result<T>,
) -> io::Result<T> {
    let _guard = RestoreGuard::new(restore);
    body()
}

/// Put the terminal back the way we found it. Errors are ignored; there is
/// nothing useful left to do with them on the way out.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
}

/// Take over the terminal, run the app, and always hand the terminal back.
pub fn run(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    with_restore(restore_terminal, || {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        app.run(&mut terminal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let result: io::Result<()> = with_restore(
            || restored.set(true),
            || Err(io::Error::other("terminal unavailable")),
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_restore_runs_on_success() {
        let restored = Cell::new(0);
        let value = with_restore(|| restored.set(restored.get() + 1), || Ok(7)).unwrap();

        assert_eq!(value, 7);
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_on_panic() {
        let restored = Cell::new(false);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            with_restore(|| restored.set(true), || -> io::Result<()> { panic!("draw failed") })
        }));

        assert!(result.is_err());
        assert!(restored.get());
    }
}
