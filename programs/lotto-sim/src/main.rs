use std::path::PathBuf;
use std::time::Duration;

use anchor_lang::prelude::*;
use anchor_lang::Result;
use clap::Parser;
use lotto_sim::constants::DEFAULT_RATE;
use lotto_sim::display::DisplayState;
use lotto_sim::error::{error_message, LottoError};
use lotto_sim::runner::{self, Reply};
use lotto_sim::state::SimulationConfig;
use lotto_sim::{Command, Simulator};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "6/40 Lotto, Powerball and Strike draw simulator",
    long_about = None
)]
struct Args {
    /// Ticket file, one line per wager (e.g. `03 11 14 22 33 36 | PB 05`)
    #[arg(short, long)]
    tickets: Option<PathBuf>,

    /// Add this many quick pick lines
    #[arg(short, long)]
    quick_picks: Option<usize>,

    /// Add a SYSTEM wheel of this size (7-11)
    #[arg(long)]
    system: Option<usize>,

    /// Base numbers for the SYSTEM wheel, e.g. "3 8 13 21 27 33 40"
    #[arg(long)]
    base: Option<String>,

    /// Attach a Powerball to generated lines
    #[arg(long = "supplementary", visible_alias = "powerball")]
    powerball: bool,

    /// Play Strike on every line
    #[arg(long = "side-bet", visible_alias = "strike")]
    strike: bool,

    /// Autorun speed in draws per second
    #[arg(short, long, default_value_t = DEFAULT_RATE)]
    rate: u32,

    /// Run exactly this many draws back to back, then report
    #[arg(short, long)]
    draws: Option<u64>,

    /// Autorun at the configured rate for this many seconds, then report
    #[arg(long)]
    seconds: Option<u64>,

    /// Seed for a reproducible draw sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Read commands from stdin (`help` lists them)
    #[arg(short, long)]
    interactive: bool,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Log every draw
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.seed {
        Some(seed) => session(Simulator::with_rng(ChaCha20Rng::seed_from_u64(seed)), &args).await,
        None => session(Simulator::new(), &args).await,
    }
}

async fn session<R: RngCore + CryptoRng>(mut sim: Simulator<R>, args: &Args) -> Result<()> {
    setup(&mut sim, args)?;

    if let Some(draws) = args.draws {
        for _ in 0..draws {
            sim.single_draw();
        }
    }

    if args.interactive {
        sim = interactive(sim).await;
    } else if let Some(seconds) = args.seconds {
        sim = timed(sim, Duration::from_secs(seconds)).await;
    }

    report(&sim.display_state(), args.json);
    Ok(())
}

fn setup<R: RngCore + CryptoRng>(sim: &mut Simulator<R>, args: &Args) -> Result<()> {
    sim.update_config(SimulationConfig {
        rate_per_second: args.rate,
        include_powerball: args.powerball,
        strike_enabled: args.strike,
    })?;

    if let Some(path) = &args.tickets {
        let text = std::fs::read_to_string(path).map_err(|err| {
            warn!(path = %path.display(), %err, "could not read ticket file");
            error!(LottoError::TicketFileUnreadable)
        })?;
        sim.set_ticket_text(&text);
    }
    if let Some(base) = &args.base {
        sim.set_base_numbers(base)?;
    }
    if let Some(size) = args.system {
        sim.generate_system_wheel(size)?;
    }
    if let Some(count) = args.quick_picks {
        sim.add_quick_picks(count)?;
    }
    Ok(())
}

async fn timed<R: RngCore + CryptoRng>(sim: Simulator<R>, duration: Duration) -> Simulator<R> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (display_tx, _display_rx) = watch::channel(DisplayState::default());
    let (reply_tx, _reply_rx) = mpsc::unbounded_channel();

    let driver = async move {
        let _ = command_tx.send(Command::Start);
        tokio::time::sleep(duration).await;
        let _ = command_tx.send(Command::Pause);
        let _ = command_tx.send(Command::Quit);
    };

    let (sim, ()) = tokio::join!(runner::run(sim, command_rx, display_tx, reply_tx), driver);
    sim
}

const HELP: &str = "commands: qp [n] | system <7-11> | base <numbers> | add <line> | clear | \
clear-all | rate <n> | pb on|off | strike on|off | start | pause | draw | reset | show | quit";

async fn interactive<R: RngCore + CryptoRng>(sim: Simulator<R>) -> Simulator<R> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (display_tx, _display_rx) = watch::channel(sim.display_state());
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<Reply>();

    println!("{HELP}");

    let reader = async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            if line.trim().eq_ignore_ascii_case("help") {
                println!("{HELP}");
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    let quit = command == Command::Quit;
                    if command_tx.send(command).is_err() || quit {
                        break;
                    }
                }
                Err(err) => println!("Warning: {}", error_message(&err)),
            }
        }
        info!("input closed");
    };

    let printer = async move {
        while let Some(reply) = reply_rx.recv().await {
            if reply.command == Command::Show {
                println!("{}", reply.state);
            } else {
                println!("{}", reply.state.status);
            }
        }
    };

    let (sim, (), ()) = tokio::join!(
        runner::run(sim, command_rx, display_tx, reply_tx),
        reader,
        printer
    );
    sim
}

fn report(state: &DisplayState, json: bool) {
    if json {
        match serde_json::to_string_pretty(state) {
            Ok(text) => println!("{text}"),
            Err(err) => warn!(%err, "could not serialise final state"),
        }
    } else {
        println!("{state}");
    }
}
