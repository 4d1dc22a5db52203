use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_bot::bot::{Effect, GameBot};
use connect_four_bot::config::AppConfig;
use connect_four_bot::game::BoardConfig;
use connect_four_bot::ui::App;

/// Play Connect Four the way the chat bot runs it.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four played through reactions")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Use the bot's 10x11 board instead of the configured one
    #[arg(long)]
    classic: bool,

    /// Player names, in turn order
    #[arg(long, num_args = 2.., default_values = ["red", "yellow"])]
    players: Vec<String>,

    /// Headless: play these comma-separated columns in turn and print the result
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print a config file with all defaults and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if cli.classic {
        config.board = BoardConfig::classic();
        config.validate().context("validating classic board")?;
    }

    match cli.moves {
        Some(moves) => play_headless(&config, cli.players, &moves),
        None => run_tui(&config, cli.players),
    }
}

/// Feed each column to the bot as a reaction from the player whose turn it is.
fn play_headless(config: &AppConfig, players: Vec<String>, moves: &[usize]) -> Result<()> {
    let mut bot: GameBot<String, u64> = GameBot::new(config.board, config.glyphs())?;
    bot.start_game(players)?;
    bot.attach_message(0)?;

    let mut last_board = bot.snapshot()?;
    for (i, &column) in moves.iter().enumerate() {
        let Some(state) = bot.active() else {
            bail!("move {} (column {column}) played after the game ended", i + 1);
        };
        let user = state.current_player().clone();
        let Some(selector) = bot.glyphs().selector(column).map(str::to_string) else {
            bail!("column {column} has no selector");
        };

        let effects = bot.on_reaction(&0, &selector, &user);
        if effects.is_empty() {
            eprintln!("Warning: move {} by {user} in column {column} was ignored", i + 1);
        }
        let edited = effects.into_iter().find_map(|effect| match effect {
            Effect::EditBoard(text) => Some(text),
            _ => None,
        });
        if let Some(text) = edited {
            last_board = text;
        }
    }

    print!("{last_board}");
    Ok(())
}

fn run_tui(config: &AppConfig, players: Vec<String>) -> Result<()> {
    let mut app = App::new(config, players)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
