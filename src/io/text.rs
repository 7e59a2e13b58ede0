//! ASCII rendering.

use crate::core::{CellType, GridCoord};
use crate::grid::GridStorage;
use crate::search::{CellStatus, SearchState};

/// Render `grid` overlaid with `state`, one line per row.
///
/// `#` wall, `S` start, `T` target, `*` path, `o` explored, `+` frontier,
/// `.` empty.
pub fn render_ascii(grid: &GridStorage, state: &SearchState) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));

    for row in 0..size {
        for col in 0..size {
            let coord = GridCoord::new(row as i32, col as i32);
            let ch = match grid.cell_type(coord).unwrap_or_default() {
                CellType::Empty => match state.cell_status(coord) {
                    CellStatus::Path => '*',
                    CellStatus::Explored => 'o',
                    CellStatus::Frontier => '+',
                    CellStatus::Unvisited => '.',
                },
                other => other.as_char(),
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_state() {
        let grid = GridStorage::new(3, GridCoord::new(0, 0), GridCoord::new(2, 2))
            .unwrap()
            .with_walls([GridCoord::new(1, 1)]);
        let text = render_ascii(&grid, &SearchState::new());
        assert_eq!(text, "S..\n.#.\n..T\n");
    }

    #[test]
    fn test_render_overlay() {
        let grid = GridStorage::new(3, GridCoord::new(0, 0), GridCoord::new(2, 2)).unwrap();
        let mut state = SearchState::new();
        state.explored.insert(GridCoord::new(0, 0));
        state.explored.insert(GridCoord::new(0, 1));
        state.push_frontier(GridCoord::new(1, 0));
        state.path = vec![
            GridCoord::new(0, 0),
            GridCoord::new(1, 1),
            GridCoord::new(2, 2),
        ];

        let text = render_ascii(&grid, &state);
        // Start and target keep their own symbols
        assert_eq!(text, "So.\n+*.\n..T\n");
    }
}
