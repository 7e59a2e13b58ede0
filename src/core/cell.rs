//! Cell types for the search grid.

/// Static cell type.
///
/// The grid is fully known before a search starts; only walls block
/// movement. Start and target are ordinary traversable cells that are
/// marked for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Free cell
    #[default]
    Empty,
    /// Obstacle
    Wall,
    /// Search origin
    Start,
    /// Search goal
    Target,
}

impl CellType {
    /// Can a search move through this cell?
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, CellType::Wall)
    }

    /// Single character representation for text output
    pub fn as_char(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Wall => '#',
            CellType::Start => 'S',
            CellType::Target => 'T',
        }
    }
}
