use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crossterm::style::{Color, Stylize};

use mazepath::{
    generators::{Generator, generate_perfect_maze},
    maze::Maze,
    solvers::Solver,
};

const USAGE: &str = "usage: mazepath [WIDTH HEIGHT [GENERATOR [SEED]]] | mazepath --load FILE
  GENERATOR: backtrack | prim | division";

#[derive(Debug, PartialEq)]
struct Config {
    width: usize,
    height: usize,
    generator: Generator,
    seed: Option<u64>,
    /// Load this maze file instead of generating one
    maze_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            generator: Generator::default(),
            seed: None,
            maze_file: None,
        }
    }
}

impl Config {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let args = args.into_iter().collect::<Vec<_>>();
        let mut config = Config::default();

        if args.first().map(String::as_str) == Some("--load") {
            let path = args.get(1).ok_or("--load needs a file path")?;
            config.maze_file = Some(PathBuf::from(path));
            return Ok(config);
        }

        let number = |s: &String, what: &str| {
            s.parse::<usize>()
                .map_err(|_| format!("{what} must be a number, got {s:?}"))
        };
        match args.as_slice() {
            [] => {}
            [width, height, rest @ ..] => {
                config.width = number(width, "width")?;
                config.height = number(height, "height")?;
                if let Some(generator) = rest.first() {
                    config.generator = generator.parse()?;
                }
                if let Some(seed) = rest.get(1) {
                    let seed = seed
                        .parse::<u64>()
                        .map_err(|_| format!("seed must be a number, got {seed:?}"))?;
                    config.seed = Some(seed);
                }
                if rest.len() > 2 {
                    return Err("too many arguments".to_string());
                }
            }
            [_] => return Err("height is missing".to_string()),
        }
        Ok(config)
    }

    fn build_maze(&self) -> std::io::Result<Result<Maze, String>> {
        let maze = match &self.maze_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Maze::from_text(&text)
            }
            None => generate_perfect_maze(self.width, self.height, self.generator, self.seed),
        };
        Ok(maze.map_err(|e| e.to_string()))
    }
}

/// Prints the maze with one coloured character per cell.
fn render(out: &mut impl Write, maze: &Maze) -> std::io::Result<()> {
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let cell = &maze[(x, y)];
            let styled_symbol = if maze.start() == Some((x, y)) {
                "S".with(Color::Green)
            } else if maze.goal() == Some((x, y)) {
                "G".with(Color::Red)
            } else if cell.is_wall() {
                "#".with(Color::DarkGrey)
            } else if cell.is_on_path() {
                "*".with(Color::Yellow)
            } else if cell.is_visited() {
                ".".with(Color::Blue)
            } else {
                " ".with(Color::Reset)
            };
            write!(out, "{}", styled_symbol)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Builds the configured maze and writes every solver's run to `out`.
///
/// The inner `Err` carries a message for bad arguments or an unusable maze.
fn run(
    args: impl IntoIterator<Item = String>,
    out: &mut impl Write,
) -> std::io::Result<Result<(), String>> {
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(msg) => return Ok(Err(format!("{msg}\n{USAGE}"))),
    };
    tracing::info!("Starting with {:?}", config);

    let mut maze = match config.build_maze()? {
        Ok(maze) => maze,
        Err(msg) => return Ok(Err(msg)),
    };

    for solver in Solver::ALL {
        maze.reset();
        let (path, stats) = match solver.solve(&mut maze) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("{solver}: {e}");
                continue;
            }
        };
        maze.mark_path(&path);

        writeln!(out, "{}", solver.to_string().bold())?;
        render(out, &maze)?;
        if path.is_empty() {
            writeln!(
                out,
                "No path found. Nodes explored: {}, time: {:?}\n",
                stats.nodes_explored, stats.execution_time
            )?;
        } else {
            writeln!(
                out,
                "Path length: {}, nodes explored: {}, time: {:?}\n",
                stats.path_length, stats.nodes_explored, stats.execution_time
            )?;
        }
    }
    out.flush()?;
    Ok(Ok(()))
}

fn main() -> std::io::Result<ExitCode> {
    let _guard = mazepath::logging::init("mazepath.log");

    let mut stdout = std::io::stdout().lock();
    match run(std::env::args().skip(1), &mut stdout)? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(msg) => {
            tracing::error!("{}", msg);
            eprintln!("{msg}");
            Ok(ExitCode::from(2))
        }
    }
}
