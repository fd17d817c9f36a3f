//! UI feedback sound cues.
//!
//! Synthesis lives outside this crate; the provider only decides whether a cue
//! should play and forwards it to a [`CuePlayer`].

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::CueError;

/// Named UI sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Cue {
    GetSignal,
    NextRound,
    ChickenRun,
    ButtonClick,
    ModalOpen,
    ModalClose,
    Success,
    Error,
    Copy,
    PredictionReveal,
}

impl Cue {
    pub const ALL: [Self; 10] = [
        Self::GetSignal,
        Self::NextRound,
        Self::ChickenRun,
        Self::ButtonClick,
        Self::ModalOpen,
        Self::ModalClose,
        Self::Success,
        Self::Error,
        Self::Copy,
        Self::PredictionReveal,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetSignal => "getSignal",
            Self::NextRound => "nextRound",
            Self::ChickenRun => "chickenRun",
            Self::ButtonClick => "buttonClick",
            Self::ModalOpen => "modalOpen",
            Self::ModalClose => "modalClose",
            Self::Success => "success",
            Self::Error => "error",
            Self::Copy => "copy",
            Self::PredictionReveal => "predictionReveal",
        }
    }
}

/// Audio backend that plays cues.
pub trait CuePlayer {
    /// Start playing `cue` without waiting for it to finish.
    ///
    /// # Errors
    /// The backend could not start playback.
    fn play(&self, cue: Cue) -> Result<(), CueError>;

    /// Wake a suspended backend. Called on explicit user interaction.
    fn resume(&self) {}
}

/// Player that never makes a sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: Cue) -> Result<(), CueError> {
        Ok(())
    }
}
