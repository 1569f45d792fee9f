//=========================================================================
// Command Collector
//=========================================================================
//
// Drains player commands with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlayerCommand> → collect_frame() → GameEngine → TickControl
//
// Bounded polling prevents a flood of aim updates from starving the
// routines.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::engine::event::PlayerCommand;
use crate::engine::GameEngine;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CommandCollector ====================================================

pub(crate) struct CommandCollector {
    receiver: Receiver<PlayerCommand>,
}

impl CommandCollector {
    const MAX_COMMANDS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlayerCommand>) -> Self {
        Self { receiver }
    }

    /// Applies pending commands to the engine (bounded per frame).
    pub(crate) fn collect_frame(&mut self, engine: &mut GameEngine) -> TickControl {
        let mut drained = 0;

        while drained < Self::MAX_COMMANDS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(command) => {
                    drained += 1;
                    if Self::apply(command, engine) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_COMMANDS_PER_FRAME {
            warn!("Command queue backlog: drained {} commands this frame", drained);
        }

        TickControl::Continue
    }

    fn apply(command: PlayerCommand, engine: &mut GameEngine) -> TickControl {
        let result = match command {
            PlayerCommand::Aim { x, y } => {
                engine.aim(x, y);
                Ok(())
            }
            PlayerCommand::Fire => {
                engine.fire();
                Ok(())
            }
            PlayerCommand::Pause => engine.pause(),
            PlayerCommand::Resume => engine.resume(),
            PlayerCommand::Quit => {
                debug!("Quit requested");
                return TickControl::Exit;
            }
        };

        if let Err(e) = result {
            warn!("Ignoring {:?}: {}", command, e);
        }
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
