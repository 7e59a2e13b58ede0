//! SVG rendering of search frames.
//!
//! Renders the grid and a [`SearchState`] snapshot to SVG. Each frame shows:
//! - Cells colored by type and search status
//! - A `row,col` label on every non-wall cell
//! - Optional title and stats line
//! - A legend of the color scheme

use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::{CellType, GridCoord};
use crate::grid::GridStorage;
use crate::search::{CellStatus, SearchState};

/// SVG color scheme, matching the terminal palette
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Unvisited free cell
    pub empty: &'static str,
    /// Wall cell
    pub wall: &'static str,
    /// Start cell
    pub start: &'static str,
    /// Target cell
    pub target: &'static str,
    /// Expanded cell
    pub explored: &'static str,
    /// Frontier cell
    pub frontier: &'static str,
    /// Final path cell
    pub path: &'static str,
    /// Cell border
    pub grid_line: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            empty: "#FFFFFF",
            wall: "#000000",
            start: "#00FF00",
            target: "#FF0000",
            explored: "#ADD8E6",
            frontier: "#FFFF00",
            path: "#00FFFF",
            grid_line: "#808080",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Cell edge length in pixels
    pub cell_size: f32,
    /// Padding around the grid in pixels
    pub padding: f32,
    /// Draw `row,col` labels on non-wall cells
    pub show_labels: bool,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            padding: 20.0,
            show_labels: true,
            colors: SvgColorScheme::default(),
        }
    }
}

impl SvgConfig {
    /// Override the cell size
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }
}

const TITLE_HEIGHT: f32 = 30.0;
const STATS_HEIGHT: f32 = 20.0;
const LEGEND_HEIGHT: f32 = 60.0;

/// SVG visualization builder
pub struct SvgVisualizer<'a> {
    config: SvgConfig,
    grid: &'a GridStorage,
    state: Option<&'a SearchState>,
    title: Option<String>,
}

impl<'a> SvgVisualizer<'a> {
    /// Create a visualizer for `grid` with no search overlay
    pub fn new(grid: &'a GridStorage, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            state: None,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overlay a search state
    pub fn with_state(mut self, state: &'a SearchState) -> Self {
        self.state = Some(state);
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing into a String cannot fail
        let _ = self.write_svg(&mut svg);
        svg
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.render())
    }

    fn write_svg(&self, svg: &mut String) -> fmt::Result {
        let grid_px = self.grid.size() as f32 * self.config.cell_size;
        let padding = self.config.padding;
        let title_height = if self.title.is_some() {
            TITLE_HEIGHT
        } else {
            0.0
        };
        let stats_height = if self.state.is_some() {
            STATS_HEIGHT
        } else {
            0.0
        };

        let width = grid_px + 2.0 * padding;
        let height = grid_px + 2.0 * padding + title_height + stats_height + LEGEND_HEIGHT;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(
            svg,
            r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##
        )?;

        if let Some(ref title) = self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )?;
        }

        let grid_y = padding + title_height;
        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding, grid_y
        )?;
        self.render_grid(svg)?;
        writeln!(svg, "  </g>")?;

        let mut y = grid_y + grid_px + 10.0;
        if let Some(state) = self.state {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="{:.0}" font-family="sans-serif" font-size="12" fill="#333">Explored: {} | Frontier: {} | Path: {}</text>"##,
                padding,
                y + 8.0,
                state.explored.len(),
                state.frontier().len(),
                state.path.len()
            )?;
            y += stats_height;
        }

        self.render_legend(svg, width, y)?;

        writeln!(svg, "</svg>")
    }

    fn cell_color(&self, coord: GridCoord, cell: CellType) -> &'static str {
        let colors = &self.config.colors;
        match cell {
            CellType::Wall => colors.wall,
            CellType::Start => colors.start,
            CellType::Target => colors.target,
            CellType::Empty => match self.state.map(|s| s.cell_status(coord)) {
                Some(CellStatus::Path) => colors.path,
                Some(CellStatus::Explored) => colors.explored,
                Some(CellStatus::Frontier) => colors.frontier,
                Some(CellStatus::Unvisited) | None => colors.empty,
            },
        }
    }

    fn render_grid(&self, svg: &mut String) -> fmt::Result {
        let cell_size = self.config.cell_size;
        let font_size = (cell_size * 0.24).max(6.0);

        writeln!(svg, r#"    <g id="grid">"#)?;

        for (coord, cell) in self.grid.iter() {
            let x = coord.col as f32 * cell_size;
            let y = coord.row as f32 * cell_size;

            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="1"/>"#,
                x,
                y,
                cell_size,
                cell_size,
                self.cell_color(coord, cell),
                self.config.colors.grid_line
            )?;

            if self.config.show_labels && cell != CellType::Wall {
                writeln!(
                    svg,
                    r##"      <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="{:.0}" text-anchor="middle" dominant-baseline="central" fill="#000">{}</text>"##,
                    x + cell_size / 2.0,
                    y + cell_size / 2.0,
                    font_size,
                    coord
                )?;
            }
        }

        writeln!(svg, "    </g>")
    }

    fn render_legend(&self, svg: &mut String, svg_width: f32, y_offset: f32) -> fmt::Result {
        let colors = &self.config.colors;
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )?;
        writeln!(
            svg,
            r##"    <rect x="10" y="0" width="{:.0}" height="{:.0}" fill="white" stroke="#CCC" stroke-width="1" rx="4"/>"##,
            svg_width - 20.0,
            LEGEND_HEIGHT - 10.0
        )?;

        let entries = [
            ("Start", colors.start),
            ("Target", colors.target),
            ("Wall", colors.wall),
            ("Explored", colors.explored),
            ("Frontier", colors.frontier),
            ("Path", colors.path),
        ];

        // Two rows of three
        let column_width = (svg_width - 40.0) / 3.0;
        for (i, (label, color)) in entries.iter().enumerate() {
            let x = 20.0 + (i % 3) as f32 * column_width;
            let y = 10.0 + (i / 3) as f32 * 20.0;
            writeln!(
                svg,
                r##"    <rect x="{:.0}" y="{:.0}" width="15" height="15" fill="{}" stroke="#CCC"/>"##,
                x, y, color
            )?;
            writeln!(
                svg,
                r##"    <text x="{:.0}" y="{:.0}" fill="#333">{}</text>"##,
                x + 20.0,
                y + 12.0,
                label
            )?;
        }

        writeln!(svg, "  </g>")
    }
}

/// Writes numbered SVG frames (`frame_0000.svg`, ...) into a directory.
///
/// Every call to [`record`](Self::record) counts as one step; a frame is
/// written on every `every`-th step. [`finish`](Self::finish) always writes
/// the final state unless it was just recorded.
pub struct FrameRecorder {
    dir: PathBuf,
    config: SvgConfig,
    title: Option<String>,
    every: usize,
    step: usize,
    frames: usize,
    last_recorded_step: Option<usize>,
}

impl FrameRecorder {
    /// Create the output directory and an empty recorder
    pub fn new(dir: impl Into<PathBuf>, config: SvgConfig) -> Result<Self, std::io::Error> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            config,
            title: None,
            every: 1,
            step: 0,
            frames: 0,
            last_recorded_step: None,
        })
    }

    /// Only write every n-th step (0 is treated as 1)
    pub fn with_every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }

    /// Title prefix; frames are titled `<title> - step <n>`
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Number of frames written so far
    pub fn frames_written(&self) -> usize {
        self.frames
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Count one step and write a frame if it is due.
    ///
    /// Returns the path of the written frame, if any.
    pub fn record(
        &mut self,
        grid: &GridStorage,
        state: &SearchState,
    ) -> Result<Option<PathBuf>, std::io::Error> {
        self.step += 1;
        if self.step % self.every != 0 {
            return Ok(None);
        }
        self.write_frame(grid, state).map(Some)
    }

    /// Write the final frame unless the last step was already recorded
    pub fn finish(
        &mut self,
        grid: &GridStorage,
        state: &SearchState,
    ) -> Result<Option<PathBuf>, std::io::Error> {
        if self.last_recorded_step == Some(self.step) {
            info!(
                "[Frames] Wrote {} frames to {}",
                self.frames,
                self.dir.display()
            );
            return Ok(None);
        }
        let path = self.write_frame(grid, state)?;
        info!(
            "[Frames] Wrote {} frames to {}",
            self.frames,
            self.dir.display()
        );
        Ok(Some(path))
    }

    fn write_frame(
        &mut self,
        grid: &GridStorage,
        state: &SearchState,
    ) -> Result<PathBuf, std::io::Error> {
        let path = self.dir.join(format!("frame_{:04}.svg", self.frames));
        let title = match self.title {
            Some(ref prefix) => format!("{} - step {}", prefix, self.step),
            None => format!("Step {}", self.step),
        };

        SvgVisualizer::new(grid, self.config.clone())
            .with_title(title)
            .with_state(state)
            .save(&path)?;

        debug!("[Frames] {}", path.display());
        self.frames += 1;
        self.last_recorded_step = Some(self.step);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_render_basic() {
        let grid = GridStorage::default_layout();
        let svg = SvgVisualizer::new(&grid, SvgConfig::default()).render();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"id="grid""#));
        assert!(svg.contains(r#"id="legend""#));
        // 100 cells, legend box and 6 legend swatches
        assert_eq!(svg.matches("<rect x=").count(), 107);
    }

    #[test]
    fn test_labels_skip_walls() {
        let grid = GridStorage::default_layout();
        let svg = SvgVisualizer::new(&grid, SvgConfig::default()).render();

        assert!(svg.contains(">0,0</text>"));
        assert!(svg.contains(">9,9</text>"));
        assert!(!svg.contains(">3,3</text>"));

        let config = SvgConfig {
            show_labels: false,
            ..SvgConfig::default()
        };
        let svg = SvgVisualizer::new(&grid, config).render();
        assert!(!svg.contains(">0,0</text>"));
    }

    #[test]
    fn test_state_overlay() {
        let grid = GridStorage::default_layout();
        let mut state = SearchState::new();
        state.explored.insert(GridCoord::new(0, 1));
        state.push_frontier(GridCoord::new(1, 1));

        let colors = SvgColorScheme::default();
        let svg = SvgVisualizer::new(&grid, SvgConfig::default())
            .with_title("BFS")
            .with_state(&state)
            .render();

        assert!(svg.contains(">BFS</text>"));
        let cell_fill = |color: &str| format!(r#"fill="{}" stroke="{}""#, color, colors.grid_line);
        assert!(svg.contains(&cell_fill(colors.explored)));
        assert!(svg.contains(&cell_fill(colors.frontier)));
        assert!(!svg.contains(&cell_fill(colors.path)));
        assert!(svg.contains("Explored: 1 | Frontier: 1 | Path: 0"));
    }

    #[test]
    fn test_frame_recorder_every_n() {
        let dir = tempfile::tempdir().unwrap();
        let grid = GridStorage::default_layout();
        let state = SearchState::new();

        let mut recorder = FrameRecorder::new(dir.path().join("frames"), SvgConfig::default())
            .unwrap()
            .with_every(3)
            .with_title("DFS");

        let written: Vec<_> = (0..7)
            .filter_map(|_| recorder.record(&grid, &state).unwrap())
            .collect();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("frame_0000.svg"));
        assert!(written[1].ends_with("frame_0001.svg"));

        // Step 7 was not recorded, so finish writes it
        let last = recorder.finish(&grid, &state).unwrap().unwrap();
        assert!(last.ends_with("frame_0002.svg"));
        assert_eq!(recorder.frames_written(), 3);

        let content = std::fs::read_to_string(last).unwrap();
        assert!(content.contains("DFS - step 7"));
    }

    #[test]
    fn test_frame_recorder_finish_after_recorded_step() {
        let dir = tempfile::tempdir().unwrap();
        let grid = GridStorage::default_layout();
        let state = SearchState::new();

        let mut recorder = FrameRecorder::new(dir.path(), SvgConfig::default()).unwrap();
        recorder.record(&grid, &state).unwrap();
        assert!(recorder.finish(&grid, &state).unwrap().is_none());
        assert_eq!(recorder.frames_written(), 1);
    }
}
