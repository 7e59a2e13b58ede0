//! Marga command line.
//!
//! # Usage
//!
//! ```bash
//! # Interactive terminal view
//! marga
//!
//! # Headless run with SVG output
//! marga run --algorithm ucs --svg ucs.svg
//!
//! # Every 5th step as an SVG frame under output/dfs/
//! marga run --algorithm dfs --frames --every 5
//!
//! # All algorithms side by side
//! marga compare --svg-dir results/
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, info};

use marga::config::MargaConfig;
use marga::io::{FrameRecorder, SvgConfig, SvgVisualizer, render_ascii};
use marga::search::{Algorithm, SearchOutcome, SearchStep, run_to_completion};
use marga::ui::{self, App};
use marga::{MargaError, Result};

#[derive(Parser)]
#[command(name = "marga")]
#[command(about = "Step-by-step visualizer for uninformed grid search")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YAML configuration file (default: configs/marga.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal view (default)
    View,

    /// Run one algorithm headless and print the result
    Run {
        /// bfs, dfs, ucs, dls, iddfs or bidirectional
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Write the final state as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Write SVG frames (default directory: <output.dir>/<algorithm>)
        #[arg(long, num_args = 0..=1)]
        frames: Option<Option<PathBuf>>,

        /// Only write every n-th frame
        #[arg(long, default_value_t = 1)]
        every: usize,

        /// Step budget (default: search.max_steps)
        #[arg(long)]
        max_steps: Option<usize>,
    },

    /// Run every algorithm and print a comparison table
    Compare {
        /// Write one SVG per algorithm (default directory: output.dir)
        #[arg(long, num_args = 0..=1)]
        svg_dir: Option<Option<PathBuf>>,
    },

    /// List the available algorithms
    List,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let interactive = matches!(args.command, None | Some(Commands::View));

    // Log lines would corrupt the terminal UI
    let default_filter = if interactive { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(Commands::List) = args.command {
        list_algorithms();
        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;

    match args.command {
        None | Some(Commands::View) => view(config),
        Some(Commands::Run {
            algorithm,
            svg,
            frames,
            every,
            max_steps,
        }) => {
            let frames_dir = frames_dir(&config, algorithm, frames);
            let max_steps = max_steps.unwrap_or(config.search.max_steps);
            run_single(
                &config,
                algorithm,
                svg.as_deref(),
                frames_dir,
                every,
                max_steps,
            )
        }
        Some(Commands::Compare { svg_dir }) => {
            let svg_dir = compare_svg_dir(&config, svg_dir);
            compare(&config, svg_dir.as_deref())
        }
        Some(Commands::List) => Ok(()),
    }
}

fn load_config(path: Option<&Path>) -> Result<MargaConfig> {
    let config = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            MargaConfig::load(path)?
        }
        None => MargaConfig::load_default()?,
    };
    debug!("Configuration: {:?}", config);
    Ok(config)
}

/// `--frames` without a value writes to `<output.dir>/<algorithm>`
fn frames_dir(
    config: &MargaConfig,
    algorithm: Algorithm,
    frames: Option<Option<PathBuf>>,
) -> Option<PathBuf> {
    let default_dir = Path::new(&config.output.dir).join(algorithm.name().to_lowercase());
    frames.map(|dir| dir.unwrap_or(default_dir))
}

/// `--svg-dir` without a value writes to `output.dir`
fn compare_svg_dir(config: &MargaConfig, svg_dir: Option<Option<PathBuf>>) -> Option<PathBuf> {
    let default_dir = PathBuf::from(&config.output.dir);
    svg_dir.map(|dir| dir.unwrap_or(default_dir))
}

fn list_algorithms() {
    for algorithm in Algorithm::ALL {
        println!(
            "{:<15} {}",
            algorithm.name().to_lowercase(),
            algorithm.description()
        );
    }
}

fn view(config: MargaConfig) -> Result<()> {
    let app = App::new(config)?;

    let terminal = ratatui::init();
    let result = ui::run(terminal, app);
    ratatui::restore();

    result.map_err(|e| MargaError::Terminal(e.to_string()))
}

fn svg_config(config: &MargaConfig) -> SvgConfig {
    SvgConfig::default().with_cell_size(config.display.cell_size)
}

fn run_single(
    config: &MargaConfig,
    algorithm: Algorithm,
    svg: Option<&Path>,
    frames_dir: Option<PathBuf>,
    every: usize,
    max_steps: usize,
) -> Result<()> {
    let grid = config.build_grid()?;
    let mut searcher = algorithm.searcher(&grid, &config.search_config());

    let mut recorder = match frames_dir {
        Some(dir) => Some(
            FrameRecorder::new(dir, svg_config(config))?
                .with_every(every)
                .with_title(algorithm.name()),
        ),
        None => None,
    };

    let mut steps = 0;
    let mut path = None;
    while searcher.is_running() && steps < max_steps {
        match searcher.step() {
            SearchStep::Expanded(_) => steps += 1,
            SearchStep::Found(p) => {
                steps += 1;
                path = Some(p);
            }
            SearchStep::Exhausted | SearchStep::Idle => {}
        }
        if let Some(ref mut recorder) = recorder {
            recorder.record(&grid, searcher.state())?;
        }
    }
    if let Some(ref mut recorder) = recorder {
        recorder.finish(&grid, searcher.state())?;
    }

    let state = searcher.state();
    println!("{}", render_ascii(&grid, state));

    let summary = match path {
        Some(ref path) => format!("{}: path of {} cells", algorithm, path.len()),
        None if searcher.is_running() => {
            format!("{}: stopped after {} steps (step budget)", algorithm, steps)
        }
        None => format!("{}: no path", algorithm),
    };
    let mut details = vec![
        format!("steps={}", steps),
        format!("explored={}", state.explored.len()),
        format!("frontier={}", state.frontier().len()),
    ];
    if let Some(cost) = searcher.cost() {
        details.push(format!("cost={:.2}", cost));
    }
    if let Some(limit) = searcher.depth_limit() {
        details.push(format!("depth_limit={}", limit));
    }
    println!("{} ({})", summary, details.join(", "));

    if let Some(svg) = svg {
        SvgVisualizer::new(&grid, svg_config(config))
            .with_title(algorithm.description())
            .with_state(state)
            .save(svg)?;
        info!("Wrote {}", svg.display());
    }

    Ok(())
}

fn compare(config: &MargaConfig, svg_dir: Option<&Path>) -> Result<()> {
    let grid = config.build_grid()?;
    if let Some(dir) = svg_dir {
        std::fs::create_dir_all(dir)?;
    }

    println!("{}", table_header());
    println!("{}", "-".repeat(56));

    for algorithm in Algorithm::ALL {
        let mut searcher = algorithm.searcher(&grid, &config.search_config());
        let outcome = run_to_completion(searcher.as_mut(), config.search.max_steps);
        println!("{}", format_row(&outcome));

        if let Some(dir) = svg_dir {
            let path = dir.join(format!("{}.svg", algorithm.name().to_lowercase()));
            SvgVisualizer::new(&grid, svg_config(config))
                .with_title(algorithm.description())
                .with_state(searcher.state())
                .save(&path)?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn table_header() -> String {
    format!(
        "{:<15} {:>6} {:>6} {:>8} {:>7} {:>9}",
        "Algorithm", "Found", "Length", "Cost", "Steps", "Explored"
    )
}

fn format_row(outcome: &SearchOutcome) -> String {
    let found = if outcome.found() {
        "yes"
    } else if outcome.truncated {
        "budget"
    } else {
        "no"
    };
    let cost = outcome
        .cost
        .map_or_else(|| "-".to_string(), |c| format!("{:.2}", c));
    format!(
        "{:<15} {:>6} {:>6} {:>8} {:>7} {:>9}",
        outcome.algorithm.name(),
        found,
        outcome.path_len(),
        cost,
        outcome.steps,
        outcome.explored
    )
}
