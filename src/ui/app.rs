use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use super::{game_view, Geometry};
use crate::game::{GameController, InputEvent, COLS};

pub struct App {
    controller: GameController,
    tick: Duration,
    selected_column: usize,
    should_quit: bool,
}

impl App {
    pub fn new(controller: GameController, tick: Duration) -> Self {
        App {
            controller,
            tick,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
        }
    }

    /// Main application loop: draw, gather a tick's worth of input, update.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        self.controller.set_geometry(geometry_for(size.width, size.height));

        loop {
            terminal.draw(|f| game_view::render(f, &self.controller, self.selected_column))?;

            if self.should_quit {
                break;
            }

            let events = self.collect_events()?;
            self.controller.tick(&events);
        }
        Ok(())
    }

    /// Drain terminal events until the tick period has elapsed.
    fn collect_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let deadline = Instant::now() + self.tick;
        let mut events = Vec::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            self.handle_event(event::read()?, &mut events);
        }
        Ok(events)
    }

    /// Translate one terminal event into game input, keeping arrival order.
    fn handle_event(&mut self, event: Event, events: &mut Vec<InputEvent>) {
        match event {
            Event::Mouse(mouse) => events.extend(self.handle_mouse(mouse)),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, events),
            Event::Resize(width, height) => {
                events.push(InputEvent::Resize(geometry_for(width, height)))
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<InputEvent> {
        match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp {
                x: mouse.column,
                y: mouse.row,
            }),
            MouseEventKind::Moved => {
                if let Some(col) = self.controller.geometry().column_at(mouse.column) {
                    self.selected_column = col;
                }
                None
            }
            _ => None,
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent, events: &mut Vec<InputEvent>) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.selected_column = COLS / 2;
                events.push(InputEvent::Reset);
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Begin starts a waiting game; during play only the drop counts
                events.push(InputEvent::Begin);
                events.push(InputEvent::SelectColumn(self.selected_column));
            }
            KeyCode::Char(c @ '1'..='7') => {
                let col = c as usize - '1' as usize;
                self.selected_column = col;
                events.push(InputEvent::SelectColumn(col));
            }
            _ => {}
        }
    }
}

/// Board geometry for a terminal of the given size.
fn geometry_for(width: u16, height: u16) -> Geometry {
    Geometry::new(game_view::board_area(Rect::new(0, 0, width, height)))
}
