//! Interactive view state.

use std::time::Duration;

use log::info;

use crate::config::MargaConfig;
use crate::grid::{GridError, GridStorage};
use crate::search::{Algorithm, SearchState, SearchStep, Searcher};

use super::keymap::Cmd;

/// What the event loop should do after a command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed
    None,
    /// State changed; draw again
    Redraw,
    /// Leave the view
    Quit,
}

/// State of the interactive view.
///
/// Holds the grid, the selected algorithm and the searcher currently being
/// animated. The finished searcher is kept so its final state stays on
/// screen until the next search or reset.
pub struct App {
    config: MargaConfig,
    layout: GridStorage,
    grid: GridStorage,
    algorithm: Algorithm,
    searcher: Option<Box<dyn Searcher>>,
    searching: bool,
    steps: usize,
    message: String,
    empty_state: SearchState,
}

impl App {
    /// Build the view from a validated configuration
    pub fn new(config: MargaConfig) -> Result<Self, GridError> {
        let layout = config.build_grid()?;
        Ok(Self {
            grid: layout.clone(),
            layout,
            config,
            algorithm: Algorithm::Bfs,
            searcher: None,
            searching: false,
            steps: 0,
            message: "Press SPACE to start".to_string(),
            empty_state: SearchState::new(),
        })
    }

    /// Grid being searched
    pub fn grid(&self) -> &GridStorage {
        &self.grid
    }

    /// Selected algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Is a search being animated?
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Steps taken by the current search
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Last status message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Search state to draw (empty when no search has run)
    pub fn state(&self) -> &SearchState {
        self.searcher
            .as_ref()
            .map_or(&self.empty_state, |s| s.state())
    }

    /// Time between two search steps
    pub fn tick_interval(&self) -> Duration {
        self.config.display.tick_interval()
    }

    /// Handle a command
    pub fn on(&mut self, cmd: Cmd) -> Action {
        match cmd {
            Cmd::StartSearch => {
                if self.searching {
                    return Action::None;
                }
                self.start_search();
                Action::Redraw
            }
            Cmd::ResetGrid => {
                self.grid = self.layout.clone();
                self.searcher = None;
                self.searching = false;
                self.steps = 0;
                self.message = "Grid reset".to_string();
                info!("[View] Grid reset");
                Action::Redraw
            }
            Cmd::PreviousAlgorithm => {
                self.select(self.algorithm.previous());
                Action::Redraw
            }
            Cmd::NextAlgorithm => {
                self.select(self.algorithm.next());
                Action::Redraw
            }
            Cmd::Quit => Action::Quit,
            Cmd::Tick => self.tick(),
        }
    }

    /// Advance the active search by one step
    pub fn tick(&mut self) -> Action {
        if !self.searching {
            return Action::None;
        }
        let Some(searcher) = self.searcher.as_mut() else {
            self.searching = false;
            return Action::None;
        };

        match searcher.step() {
            SearchStep::Expanded(_) => self.steps += 1,
            SearchStep::Found(path) => {
                self.steps += 1;
                self.searching = false;
                self.message = found_message(&**searcher, path.len());
            }
            SearchStep::Exhausted | SearchStep::Idle => {
                self.searching = false;
                self.message = match (searcher.algorithm(), searcher.depth_limit()) {
                    (Algorithm::Dls, Some(limit)) => {
                        format!("No path found within depth limit {}", limit)
                    }
                    _ => "No path found".to_string(),
                };
            }
        }
        Action::Redraw
    }

    fn start_search(&mut self) {
        info!("[View] Starting {} search", self.algorithm);
        let searcher = self
            .algorithm
            .searcher(&self.grid, &self.config.search_config());
        self.searcher = Some(searcher);
        self.searching = true;
        self.steps = 0;
        self.message = format!("Running {}...", self.algorithm.description());
    }

    // The running search, if any, keeps going with its own algorithm
    fn select(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.message = format!("Selected: {}", algorithm.description());
        info!("[View] Selected {}", algorithm);
    }
}

fn found_message(searcher: &dyn Searcher, len: usize) -> String {
    match (searcher.algorithm(), searcher.cost(), searcher.depth_limit()) {
        (_, Some(cost), _) => format!("Path found! Length: {}, cost: {:.2}", len, cost),
        (Algorithm::Dls, None, _) => format!(
            "Path found! Depth: {}, length: {}",
            len.saturating_sub(1),
            len
        ),
        (_, None, Some(limit)) => {
            format!("Path found at depth limit {}! Length: {}", limit, len)
        }
        (_, None, None) => format!("Path found! Length: {}", len),
    }
}
