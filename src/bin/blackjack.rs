//! Console blackjack for one or more players.

use std::io::{self, Lines, StdinLock, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use blackjack_table::rules::PLAYER_CHIPS;
use blackjack_table::{
    Action, DecisionProvider, GameOptions, Participant, Player, Session, TextRenderer,
};
use clap::Parser;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player name; repeat for more players. Asked interactively when omitted.
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Money each player starts with.
    #[arg(short, long, default_value_t = PLAYER_CHIPS)]
    money: usize,

    /// Shuffle seed; taken from the clock when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many rounds even if someone still has money.
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Log game events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Reads decisions from standard input.
struct Console {
    lines: Lines<StdinLock<'static>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: io::stdin().lines(),
        }
    }

    /// Prints `prompt` and returns the next trimmed line.
    ///
    /// End of input ends the program.
    fn prompt(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        if let Err(error) = io::stdout().flush() {
            warn!(%error, "failed to flush prompt");
        }

        match self.lines.next() {
            Some(Ok(line)) => line.trim().to_owned(),
            _ => {
                info!("input closed");
                println!("\nGoodbye.");
                std::process::exit(0);
            }
        }
    }

    fn prompt_number(&mut self, prompt: &str) -> usize {
        loop {
            match self.prompt(prompt).parse::<usize>() {
                Ok(value) => return value,
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    fn ask_players(&mut self) -> Vec<String> {
        let count = self.prompt_number("How many players?\n");
        (0..count)
            .map(|_| self.prompt("What's the name of the new player?\n"))
            .collect()
    }
}

impl DecisionProvider for Console {
    fn request_bet(&mut self, player: &Player) -> usize {
        println!("Player {} has {} chips", player.name(), player.money());
        self.prompt_number("How much do you want to bet? \n")
    }

    fn request_action(&mut self, _player: &Player, actions: &[Action]) -> usize {
        let mut menu = TextRenderer::new(String::new());
        if let Err(error) = menu.render_options(actions) {
            warn!(%error, "failed to render options");
        }
        let menu = menu.into_inner();

        loop {
            print!("{menu}");
            let choice = self.prompt_number("");
            if choice < actions.len() {
                return choice;
            }
            println!("Pick one of the listed options.");
        }
    }
}

/// Adapts stdout to `core::fmt::Write` for the renderer.
struct Stdout;

impl core::fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let mut out = io::stdout().lock();
        out.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)?;
        out.flush().map_err(|_| core::fmt::Error)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new();
    let names = if args.players.is_empty() {
        console.ask_players()
    } else {
        args.players
    };
    if names.is_empty() {
        println!("No players, no game.");
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let options = GameOptions::default().with_starting_money(args.money);
    let mut session = Session::new(names, &options, console, TextRenderer::new(Stdout), seed);

    let rounds = session.run(args.max_rounds).context("round aborted")?;
    println!("Game over after {rounds} round(s).");
    Ok(())
}
