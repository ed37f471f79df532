use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{cell_color, BoardWidget, BACKGROUND};
use super::Geometry;
use crate::game::{GameController, Outcome, Phase, Player, PlayerType, COLS};

/// Split the screen into header, board, selector and controls.
fn chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Board
            Constraint::Length(1), // Column selector
            Constraint::Length(3), // Controls
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Where the board goes for a given terminal size. The app uses this on
/// resize so clicks and drawing agree on the geometry.
pub fn board_area(area: Rect) -> Rect {
    chunks(area)[1]
}

pub fn render(frame: &mut Frame, game: &GameController, selected_column: usize) {
    let [header, board, selector, controls] = chunks(frame.area());

    render_header(frame, game, header);
    render_board(frame, game, board);
    render_selector(frame, game.geometry(), selected_column, selector);
    render_controls(frame, controls);
}

fn player_color(player: Player) -> Color {
    match player {
        // Black on the terminal's default background would vanish
        Player::Two => Color::Gray,
        _ => cell_color(player.cell()),
    }
}

fn seat_label(game: &GameController, player: Player) -> String {
    let kind = match game.seat_kind(player) {
        PlayerType::Human => "Human",
        PlayerType::Computer => "Computer",
    };
    format!("{} ({})", player.name(), kind)
}

fn render_header(frame: &mut Frame, game: &GameController, area: Rect) {
    let (status, color) = match game.phase() {
        Phase::Start => (
            format!(
                "{} vs {}  |  Click anywhere to start",
                seat_label(game, Player::One),
                seat_label(game, Player::Two)
            ),
            Color::Cyan,
        ),
        Phase::Playing => {
            let player = game.current_player();
            let mut status = format!("Current Player: {}", seat_label(game, player));
            if let Some(mv) = game.last_move() {
                status.push_str(&format!("  |  {} played column {}", mv.player.name(), mv.col + 1));
            }
            (status, player_color(player))
        }
        Phase::Finished => match game.outcome() {
            Some(Outcome::Winner(player)) => (
                format!("{} wins!  |  Press R to play again", player.name()),
                player_color(player),
            ),
            _ => (
                "It's a draw!  |  Press R to play again".to_string(),
                Color::Cyan,
            ),
        },
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &GameController, area: Rect) {
    let geometry = game.geometry();
    frame.render_widget(BoardWidget::new(game.board(), geometry), area);

    if !geometry.is_drawable() {
        let notice = Paragraph::new("Too small")
            .style(Style::default().fg(Color::White).bg(BACKGROUND))
            .alignment(Alignment::Center);
        frame.render_widget(notice, area);
    }
}

fn render_selector(frame: &mut Frame, geometry: Geometry, selected_column: usize, area: Rect) {
    if !geometry.is_drawable() || selected_column >= COLS {
        return;
    }
    let cell = geometry.cell_rect(0, selected_column);
    let pad = (cell.x.saturating_sub(area.x) + cell.width / 2) as usize;
    let line = Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled("▲", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "Click/1-7: Drop  |  ←/→ Enter: Select & drop  |  R: Restart  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::InputEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(game: &GameController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| render(f, game, 3)).unwrap();
        screen_text(&terminal)
    }

    fn game() -> GameController {
        let mut game = GameController::from_types([PlayerType::Human, PlayerType::Computer], Some(0));
        game.set_geometry(Geometry::new(board_area(Rect::new(0, 0, 90, 30))));
        game
    }

    #[test]
    fn test_board_area_is_below_header() {
        let area = board_area(Rect::new(0, 0, 90, 30));
        assert_eq!(area.y, 3);
        assert_eq!(area.height, 30 - 3 - 1 - 3);
    }

    #[test]
    fn test_start_screen_prompts_for_click() {
        let text = draw(&game());
        assert!(text.contains("Click anywhere to start"));
        assert!(text.contains("Red (Human) vs Black (Computer)"));
    }

    #[test]
    fn test_playing_screen_names_current_player() {
        let mut game = game();
        game.tick(&[InputEvent::Begin]);
        let text = draw(&game);
        assert!(text.contains("Current Player: Red (Human)"));
        assert!(!text.contains("played column"));
    }

    #[test]
    fn test_playing_screen_shows_last_move() {
        let mut game =
            GameController::from_types([PlayerType::Human, PlayerType::Human], None);
        game.tick(&[InputEvent::Begin]);
        game.tick(&[InputEvent::SelectColumn(4)]);

        let text = draw(&game);
        assert!(text.contains("Current Player: Black (Human)  |  Red played column 5"));
    }

    #[test]
    fn test_finished_screen_announces_winner() {
        let mut game =
            GameController::from_types([PlayerType::Human, PlayerType::Human], None);
        game.tick(&[InputEvent::Begin]);
        for _ in 0..3 {
            game.tick(&[InputEvent::SelectColumn(1)]);
            game.tick(&[InputEvent::SelectColumn(2)]);
        }
        game.tick(&[InputEvent::SelectColumn(1)]);

        let text = draw(&game);
        assert!(text.contains("Red wins!"));
    }

    #[test]
    fn test_tiny_terminal_shows_notice() {
        let mut game = game();
        let area = Rect::new(0, 0, 13, 16);
        game.set_geometry(Geometry::new(board_area(area)));
        assert!(!game.geometry().is_drawable());

        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal.draw(|f| render(f, &game, 0)).unwrap();
        assert!(screen_text(&terminal).contains("Too small"));
    }
}
