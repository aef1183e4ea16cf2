//! Async game session
//!
//! One tokio task owns the simulation. Ticks and input commands are
//! serialized through a single `select!` loop, so every tick or command runs
//! to completion before the next one is looked at. Renderers read the latest
//! snapshot from a watch channel and never touch the simulation itself.
//!
//! While the simulation is halted (game over / cleared) the tick timer is
//! disabled; a restart command re-arms it from the current instant.

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, trace};

use grid_games_core::Simulation;

/// Capacity of the input command queue
pub const COMMAND_QUEUE_LEN: usize = 64;

#[derive(Debug)]
enum Command<A> {
    Action(A),
    Stop,
}

/// Entry point for running a simulation on the tokio runtime
pub struct Session;

impl Session {
    /// Spawn the session task. Must be called from within a tokio runtime.
    pub fn spawn<S>(mut sim: S) -> SessionHandle<S>
    where
        S: Simulation + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_LEN);
        sim.start();
        let (snapshot_tx, snapshot_rx) = watch::channel(sim.snapshot());
        let task = tokio::spawn(run(sim, command_rx, snapshot_tx));

        SessionHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }
}

async fn run<S: Simulation>(
    mut sim: S,
    mut commands: mpsc::Receiver<Command<S::Action>>,
    snapshots: watch::Sender<S::Snapshot>,
) -> S {
    info!(interval_ms = sim.tick_interval().as_millis() as u64, "session started");
    let mut deadline = Instant::now() + sim.tick_interval();

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Action(action)) => {
                    let restart = S::is_restart(&action);
                    if sim.apply(action) {
                        if restart {
                            debug!("session restarted");
                            deadline = Instant::now() + sim.tick_interval();
                        }
                        snapshots.send_replace(sim.snapshot());
                    }
                }
                Some(Command::Stop) | None => break,
            },
            _ = sleep_until(deadline), if !sim.is_halted() => {
                sim.advance();
                deadline += sim.tick_interval();
                trace!("session tick");
                snapshots.send_replace(sim.snapshot());
                if sim.is_halted() {
                    debug!("simulation halted, ticks suspended");
                }
            }
        }
    }

    info!("session stopped");
    sim
}

/// Control side of a running session
pub struct SessionHandle<S: Simulation> {
    commands: mpsc::Sender<Command<S::Action>>,
    snapshots: watch::Receiver<S::Snapshot>,
    task: JoinHandle<S>,
}

impl<S: Simulation> SessionHandle<S> {
    /// Queue an input command
    pub async fn send(&self, action: S::Action) -> Result<()> {
        self.commands
            .send(Command::Action(action))
            .await
            .map_err(|_| anyhow!("session has stopped"))
    }

    /// Queue an input command without waiting; fails when the queue is full
    pub fn try_send(&self, action: S::Action) -> Result<()> {
        self.commands
            .try_send(Command::Action(action))
            .map_err(|e| anyhow!("cannot queue command: {}", e))
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> S::Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<S::Snapshot> {
        self.snapshots.clone()
    }

    /// Stop after the already queued commands and hand the simulation back
    pub async fn stop(self) -> Result<S> {
        // A closed channel means the task already ended; the join below reports why.
        let _ = self.commands.send(Command::Stop).await;
        self.task.await.context("session task failed")
    }
}
