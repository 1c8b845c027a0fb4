use clap::{Parser, ValueEnum};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use durak_rs::command;
use durak_rs::config::{GameConfig, OpponentKind};
use durak_rs::game::Game;
use durak_rs::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, IsTerminal, Stdout, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "durak-rs")]
#[command(about = "Play Fool (Durak) against the computer", version)]
struct Args {
    /// Shuffle seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent strategy
    #[arg(long, default_value = "greedy")]
    opponent: Opponent,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Line-based prompt instead of the TUI
    #[arg(long)]
    plain: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    Greedy,
    Random,
}

impl From<Opponent> for OpponentKind {
    fn from(o: Opponent) -> Self {
        match o {
            Opponent::Greedy => OpponentKind::Greedy,
            Opponent::Random => OpponentKind::Random,
        }
    }
}

fn init_tracing(args: &Args, tui: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).try_init().ok();
    } else if !tui {
        // Raw mode would garble stderr, so the TUI only logs to a file.
        builder.with_writer(io::stderr).try_init().ok();
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(config: GameConfig) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn run_plain(mut config: GameConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut game = Game::with_config(&config);
    for line in command::welcome(&game) {
        writeln!(out, "{line}")?;
    }
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(input) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let response = command::execute(&mut game, &input);
        for line in &response.lines {
            writeln!(out, "{line}")?;
        }
        if response.quit {
            break;
        }
        if response.new_game {
            config = config.next_game();
            game = Game::with_config(&config);
            writeln!(out)?;
            for line in command::welcome(&game) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let tui = !args.plain && io::stdout().is_terminal() && io::stdin().is_terminal();
    init_tracing(&args, tui)?;

    let mut config = GameConfig::default().with_opponent(args.opponent.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!(version = durak_rs::VERSION, tui, opponent = config.opponent.label(), "starting");

    if tui {
        run_tui(config)
    } else {
        run_plain(config)
    }
}
