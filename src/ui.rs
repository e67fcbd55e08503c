//! User interface rendering functions for all application scenes.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    config::Difficulty,
    maze::{Cell, Maze},
    types::{MainMenuItem, Scene, WinMenuItem},
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function renders different scenes based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each scene type.
///
/// # Errors
///
/// This function may return errors from layout lookups or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.scene {
        Scene::MainMenu(item) => main_menu(frame, item)?,
        Scene::DifficultyMenu(cursor) => difficulty_menu(app, frame, cursor)?,
        Scene::InGame => in_game(app, frame)?,
        Scene::Won(item) => win_scene(app, frame, item)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders a centered bordered menu with the given entries.
///
/// This function carries the shared structure of every menu scene: a block centered in the
/// frame, a title on top, key hints at the bottom and one line per entry, with the highlighted
/// entry drawn in inverted colors.
fn render_menu(frame: &mut Frame, title: &str, footer: &str, entries: &[(String, bool)]) -> Result<()> {
    clear(frame);

    let space = center_area(frame.area(), u16::try_from(entries.len())? + 2)?;

    let block = Block::bordered()
        .title(title)
        .title_bottom(footer)
        .title_alignment(Alignment::Center)
        .style(Color::Magenta)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(space);

    frame.render_widget(block, space);

    let inner_layout =
        Layout::vertical(vec![Constraint::Max(1); entries.len()]).split(inner_space);

    let content_style = Style::default().fg(Color::Magenta);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Magenta);

    for (idx, (label, active)) in entries.iter().enumerate() {
        let style = if *active {
            active_content_style
        } else {
            content_style
        };
        let area = inner_layout
            .get(idx)
            .copied()
            .ok_or_eyre("failed to retrieve menu entry area from layout")?;

        frame.render_widget(Line::styled(label.clone(), style).centered(), area);
    }

    Ok(())
}

/// Computes a centered rectangle of the given height within the frame area.
fn center_area(area: Rect, height: u16) -> Result<Rect> {
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to retrieve horizontal center from layout")?;

    Layout::vertical([Constraint::Max(height)])
        .flex(Flex::Center)
        .split(space)
        .first()
        .copied()
        .ok_or_eyre("failed to retrieve vertical center from layout")
}

/// Renders the main menu scene with navigation options.
///
/// This function displays the entry menu with options for "Play", "Difficulty" and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
fn main_menu(frame: &mut Frame, item: MainMenuItem) -> Result<()> {
    let entries = [
        ("Play".to_owned(), item == MainMenuItem::Play),
        ("Difficulty".to_owned(), item == MainMenuItem::Difficulty),
        ("Quit".to_owned(), item == MainMenuItem::Quit),
    ];

    render_menu(
        frame,
        "Heartmaze",
        "(j) down / (k) up / (l) select",
        &entries,
    )
}

/// Renders the difficulty selection scene.
///
/// This function lists the three maze profiles with their grid dimensions. The profile that is
/// currently active is marked with a dot, while the cursor highlight follows the user's
/// navigation independently of it.
fn difficulty_menu(app: &App, frame: &mut Frame, cursor: Difficulty) -> Result<()> {
    let entries: Vec<(String, bool)> = Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let profile = difficulty.profile();
            let marker = if difficulty == app.difficulty { DOT } else { " " };
            (
                format!(
                    "{marker} {difficulty} ({}x{})",
                    profile.width, profile.height
                ),
                difficulty == cursor,
            )
        })
        .collect();

    render_menu(
        frame,
        "Difficulty",
        "(j) down / (k) up / (l) select / (h) return",
        &entries,
    )
}

/// Renders the in-game scene with the maze, the player and the HUD.
///
/// The maze is drawn on a canvas centered in the frame: walls in magenta, the goal in red and
/// the player in white. A bottom strip shows the live move counter, the active difficulty and
/// the key bindings.
fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze = app.game.maze();
    let maze_columns = u16::try_from(maze.width())?;
    let maze_rows = u16::try_from(maze.height())?;

    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(frame.area());

    let content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to retrieve maze content area from layout")?;
    let hud_area = *overall_layout
        .last()
        .ok_or_eyre("failed to retrieve hud area from layout")?;

    // Center the maze canvas within the content area.
    let space = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(maze_rows),
        Constraint::Min(1),
    ])
    .split(content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to retrieve maze area from vertical layout")?;
    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns),
        Constraint::Min(1),
    ])
    .split(space)
    .get(1)
    .copied()
    .ok_or_eyre("failed to retrieve maze area from horizontal layout")?;

    // Pre-compute canvas coordinates to handle errors before the paint closure.
    let mut wall_cells = Vec::new();
    let mut goal_cells = Vec::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            match maze.cell(x, y) {
                Some(Cell::Wall) => wall_cells.push((x, y)),
                Some(Cell::Goal) => goal_cells.push((x, y)),
                Some(Cell::Path) | None => {}
            }
        }
    }
    let player = app.game.player();

    let wall_coords = grid_to_canvas_coords(maze, &wall_cells)?;
    let goal_coords = grid_to_canvas_coords(maze, &goal_cells)?;
    let player_coords = grid_to_canvas_coords(maze, &[(player.x, player.y)])?;

    // Coarser display cells from the profile render as full blocks, finer ones as dots.
    let marker = if app.difficulty.profile().cell_size >= 28 {
        Marker::Block
    } else {
        Marker::Dot
    };

    let canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(marker)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: Color::Magenta,
            });
            ctx.draw(&Points {
                coords: &goal_coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &player_coords,
                color: Color::White,
            });
        });

    frame.render_widget(canvas, space);

    // HUD strip: move counter and difficulty on the border, key hints below.
    let hud_block = Block::bordered()
        .title(format!(
            " moves: {} / difficulty: {} ",
            app.game.moves(),
            app.difficulty
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Magenta))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let hud_inner = hud_block.inner(hud_area);

    frame.render_widget(hud_block, hud_area);
    frame.render_widget(
        Line::raw("(arrows/wasd) move / (n) new maze / (1-3) difficulty / (h) menu / (q) quit")
            .centered(),
        hud_inner,
    );

    Ok(())
}

/// Renders the win scene with the final move count and follow-up options.
fn win_scene(app: &App, frame: &mut Frame, item: WinMenuItem) -> Result<()> {
    let entries = [
        ("Play Again".to_owned(), item == WinMenuItem::PlayAgain),
        ("Main Menu".to_owned(), item == WinMenuItem::MainMenu),
    ];

    render_menu(
        frame,
        &format!("You reached the heart in {} moves!", app.game.moves()),
        "(j) down / (k) up / (l) select",
        &entries,
    )
}

/// Transforms maze grid coordinates to centered canvas coordinates.
///
/// This function converts grid coordinates `(col, row)` to canvas coordinates `(x, y)` centered
/// on the origin: rows map to `(n - 1) / 2 - row` so the first row ends up at the top, and
/// columns map to `col - (n - 1) / 2`.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn grid_to_canvas_coords(maze: &Maze, cells: &[(usize, usize)]) -> Result<Vec<(f64, f64)>> {
    let rows = f64::from(u16::try_from(maze.height())?);
    let columns = f64::from(u16::try_from(maze.width())?);

    cells
        .iter()
        .map(|&(col, row)| {
            let canvas_y = (rows - 1.) / 2. - f64::from(u16::try_from(row)?);
            let canvas_x = f64::from(u16::try_from(col)?) - (columns - 1.) / 2.;

            Ok((canvas_x, canvas_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    /// Creates a minimal test app for UI testing.
    fn create_test_app() -> App {
        App::new(Difficulty::Easy).expect("failed to create test app")
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.scene = Scene::MainMenu(MainMenuItem::Play);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
    }

    #[test]
    fn test_draw_difficulty_menu() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.scene = Scene::DifficultyMenu(Difficulty::Medium);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing difficulty menu should succeed");
    }

    #[test]
    fn test_draw_in_game() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.scene = Scene::InGame;

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game scene should succeed");
    }

    #[test]
    fn test_draw_in_game_every_difficulty() {
        let mut terminal = create_test_terminal();

        for difficulty in Difficulty::ALL {
            let mut app = App::new(difficulty).expect("failed to create test app");
            app.scene = Scene::InGame;

            let result = terminal.draw(|frame| {
                draw(&app, frame).expect("drawing should succeed in test");
            });

            assert!(
                result.is_ok(),
                "drawing in-game scene should succeed for {difficulty}"
            );
        }
    }

    #[test]
    fn test_draw_win_scene() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.scene = Scene::Won(WinMenuItem::PlayAgain);

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing win scene should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_grid_to_canvas_coords_centers_the_grid() {
        let maze = Maze::generate(9, 9).expect("generation should succeed");

        let coords = grid_to_canvas_coords(&maze, &[(4, 4), (0, 0), (8, 8)])
            .expect("transform should succeed");

        assert_eq!(coords.first(), Some(&(0., 0.)), "grid center maps to origin");
        assert_eq!(coords.get(1), Some(&(-4., 4.)), "top-left maps up and left");
        assert_eq!(
            coords.get(2),
            Some(&(4., -4.)),
            "bottom-right maps down and right"
        );
    }
}
