//! Rendering of the interactive view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::{CellType, GridCoord};
use crate::search::CellStatus;

use super::app::App;

/// Cell colors, matching the SVG scheme
pub mod palette {
    use ratatui::style::Color;

    /// Unvisited free cell
    pub const EMPTY: Color = Color::Rgb(255, 255, 255);
    /// Wall cell
    pub const WALL: Color = Color::Rgb(0, 0, 0);
    /// Start cell
    pub const START: Color = Color::Rgb(0, 255, 0);
    /// Target cell
    pub const TARGET: Color = Color::Rgb(255, 0, 0);
    /// Expanded cell
    pub const EXPLORED: Color = Color::Rgb(173, 216, 230);
    /// Frontier cell
    pub const FRONTIER: Color = Color::Rgb(255, 255, 0);
    /// Final path cell
    pub const PATH: Color = Color::Rgb(0, 255, 255);
    /// Coordinate labels
    pub const LABEL: Color = Color::Rgb(100, 100, 100);
}

/// Key help shown in the info panel
pub const HELP_LINE: &str = "SPACE: Start | R: Reset | ←/→: Change Algorithm | Q: Quit";

const INFO_HEIGHT: u16 = 7;

/// Draw the whole view
pub fn draw(frame: &mut Frame, app: &App) {
    let size = u16::try_from(app.grid().size()).unwrap_or(u16::MAX);
    let cell_width = cell_width(app.grid().size());
    // Oversized grids are clipped to the terminal
    let grid_height = size.saturating_add(2);
    let grid_width = size.saturating_mul(cell_width).saturating_add(2);

    let rows = [
        Constraint::Length(grid_height),
        Constraint::Length(INFO_HEIGHT),
    ];
    let [grid_area, info_area] = Layout::vertical(rows).areas(frame.area());
    let columns = [Constraint::Length(grid_width), Constraint::Fill(1)];
    let [grid_area, _] = Layout::horizontal(columns).areas(grid_area);

    draw_grid(frame, app, grid_area, cell_width);
    draw_info_panel(frame, app, info_area);
}

/// Columns per cell: the widest `r,c` label plus one space either side
fn cell_width(size: usize) -> u16 {
    let max = size.saturating_sub(1);
    let label = format!("{},{}", max, max);
    u16::try_from(label.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn cell_color(app: &App, coord: GridCoord, cell: CellType) -> Color {
    match cell {
        CellType::Wall => palette::WALL,
        CellType::Start => palette::START,
        CellType::Target => palette::TARGET,
        CellType::Empty => match app.state().cell_status(coord) {
            CellStatus::Path => palette::PATH,
            CellStatus::Explored => palette::EXPLORED,
            CellStatus::Frontier => palette::FRONTIER,
            CellStatus::Unvisited => palette::EMPTY,
        },
    }
}

fn draw_grid(frame: &mut Frame, app: &App, area: Rect, cell_width: u16) {
    let grid = app.grid();
    let width = cell_width as usize;
    let rows = grid.size().min(area.height.saturating_sub(2) as usize);
    let cols = grid
        .size()
        .min(area.width.saturating_sub(2) as usize / width.max(1));

    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let spans: Vec<Span> = (0..cols)
                .map(|col| {
                    let coord = GridCoord::new(row as i32, col as i32);
                    let cell = grid.cell_type(coord).unwrap_or_default();
                    let style = Style::default()
                        .bg(cell_color(app, coord, cell))
                        .fg(palette::LABEL);
                    let label = if cell == CellType::Wall {
                        String::new()
                    } else {
                        coord.to_string()
                    };
                    Span::styled(format!("{:^width$}", label, width = width), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.algorithm().description()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_info_panel(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let (status, status_color) = if app.is_searching() {
        ("SEARCHING...", Color::Green)
    } else {
        ("READY", Color::Red)
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Algorithm: {}", app.algorithm()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Status: {}", status),
            Style::default().fg(status_color),
        )),
        Line::from(HELP_LINE),
        Line::from(format!(
            "Explored: {} | Frontier: {}",
            state.explored.len(),
            state.frontier().len()
        )),
        Line::from(app.message().to_string()),
    ];

    let block = Block::default().borders(Borders::ALL).title(" Marga ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
