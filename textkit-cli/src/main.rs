use clap::Parser;
use eyre::{Result, WrapErr};
use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use textkit::PromptError;
use textkit::games::{GameError, GameRules, twenty_questions, twenty_questions_reverse};
use textkit::utils::Terminal;

mod cli;

use cli::{Cli, Game};

fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    // stderr, so log lines never mix into the game on stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn print_banner() {
    println!("------------------------------------------------------------");
    println!("████████ ███████ ██   ██ ████████ ██   ██ ██ ████████");
    println!("   ██    ██       ██ ██     ██    ██  ██  ██    ██   ");
    println!("   ██    █████     ███      ██    █████   ██    ██   ");
    println!("   ██    ██       ██ ██     ██    ██  ██  ██    ██   ");
    println!("   ██    ███████ ██   ██    ██    ██   ██ ██    ██   ");
    println!("                 VERSION:     {}", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");
}

fn run_application(cli: &Cli, rules: GameRules) -> Result<(), GameError> {
    let mut terminal = Terminal::stdio().with_options(cli.terminal_options());

    match cli.game() {
        Game::Guess => twenty_questions(&mut terminal, rules),
        Game::Reverse => {
            let mut rng = match cli.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            twenty_questions_reverse(&mut terminal, rules, &mut rng)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let rules = cli.rules().wrap_err("Invalid --highest")?;

    info!("Starting {:?} with {:?}", cli.game(), cli.terminal_options());
    print_banner();

    match run_application(&cli, rules) {
        Err(GameError::Prompt(PromptError::Closed)) => {
            info!("Input closed, leaving the game");
            Ok(())
        }
        other => other.wrap_err("Game stopped unexpectedly"),
    }
}
