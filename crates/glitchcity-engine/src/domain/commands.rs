//! Commands accepted by the game session.

use glitchcity_core::command::Command;
use uuid::Uuid;

/// Command to submit one player action (free text or a combat button).
#[derive(Debug, Clone)]
pub struct SubmitAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The raw action text.
    pub action: String,
}

impl Command for SubmitAction {
    fn command_type(&self) -> &'static str {
        "game.submit_action"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to replace the session with a fresh one.
#[derive(Debug, Clone)]
pub struct ResetSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetSession {
    fn command_type(&self) -> &'static str {
        "game.reset_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to leave the critical-glitch state once the cooldown has passed.
#[derive(Debug, Clone)]
pub struct RecoverSystem {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for RecoverSystem {
    fn command_type(&self) -> &'static str {
        "game.recover_system"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to (re)start the tutorial.
#[derive(Debug, Clone)]
pub struct StartTutorial {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for StartTutorial {
    fn command_type(&self) -> &'static str {
        "game.start_tutorial"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to abandon the tutorial and enter the live game.
#[derive(Debug, Clone)]
pub struct SkipTutorial {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for SkipTutorial {
    fn command_type(&self) -> &'static str {
        "game.skip_tutorial"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
