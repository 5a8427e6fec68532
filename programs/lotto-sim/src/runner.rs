use std::future;

use rand::{CryptoRng, RngCore};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::display::DisplayState;
use crate::instructions::Command;
use crate::Simulator;

/// Sent back after every command, so a console can echo the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub command: Command,
    pub accepted: bool,
    pub state: DisplayState,
}

/// Runs until `Quit` arrives or the command channel closes, then hands the
/// simulator back.
///
/// One loop owns the simulator and waits on the next autorun tick and the
/// next user command. Whichever arrives first is handled to completion
/// before the loop waits again, so draw cycles never overlap and a pause or
/// reset can only drop a tick that has not started yet.
///
/// `display` always holds the latest state; it is updated after every tick
/// and every command. A tick's whole batch runs before it is published, so
/// slow readers only ever see the newest value.
pub async fn run<R: RngCore + CryptoRng>(
    mut sim: Simulator<R>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    display: watch::Sender<DisplayState>,
    replies: mpsc::UnboundedSender<Reply>,
) -> Simulator<R> {
    let mut next_tick: Option<Instant> = sim.state().is_running().then(Instant::now);

    loop {
        let deadline = next_tick;
        let tick = async move {
            match deadline {
                Some(at) => time::sleep_until(at).await,
                None => future::pending().await,
            }
        };

        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("command channel closed");
                    break;
                };
                if command == Command::Quit {
                    info!(draws = sim.state().draw_count, "quit");
                    break;
                }

                let was_running = sim.state().is_running();
                let accepted = sim.execute(command.clone()).is_ok();
                next_tick = match (was_running, sim.state().is_running()) {
                    (_, false) => None,
                    (false, true) => Some(Instant::now()),
                    (true, true) => next_tick,
                };

                let state = sim.display_state();
                display.send_replace(state.clone());
                let _ = replies.send(Reply { command, accepted, state });
            }

            _ = tick => {
                next_tick = sim.tick().map(|delay| Instant::now() + delay);
                display.send_replace(sim.display_state());
            }
        }
    }

    sim
}
