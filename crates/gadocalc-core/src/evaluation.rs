use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Why an evaluation stopped before a volume was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BlockReason {
    InvalidAge,
    InvalidWeight,
    /// Significant renal impairment. Takes priority over agent checks.
    RenalContraindication,
    UnknownAgent,
    PediatricRestriction,
    /// The dose formula rejected its inputs.
    InvalidConcentration,
    /// The volume rounds to 0.0 mL at one-decimal resolution.
    VolumeBelowResolution,
}

/// Outcome of [`crate::evaluate`].
///
/// A volume exists only on the `Computed` variant. `messages` explain what
/// happened (hard-stop reasons, or the calculation trace); `warnings` carry
/// clinical cautions and may be present on either variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Evaluation {
    Computed {
        volume_ml: f64,
        messages: Vec<String>,
        warnings: Vec<String>,
    },
    Blocked {
        reason: BlockReason,
        messages: Vec<String>,
        warnings: Vec<String>,
    },
}

impl Evaluation {
    pub(crate) fn blocked_with_message(reason: BlockReason, message: impl Into<String>) -> Self {
        Evaluation::Blocked {
            reason,
            messages: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    pub(crate) fn blocked_with_warning(reason: BlockReason, warning: impl Into<String>) -> Self {
        Evaluation::Blocked {
            reason,
            messages: Vec::new(),
            warnings: vec![warning.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Evaluation::Computed { .. })
    }

    pub fn volume_ml(&self) -> Option<f64> {
        match self {
            Evaluation::Computed { volume_ml, .. } => Some(*volume_ml),
            Evaluation::Blocked { .. } => None,
        }
    }

    pub fn block_reason(&self) -> Option<BlockReason> {
        match self {
            Evaluation::Computed { .. } => None,
            Evaluation::Blocked { reason, .. } => Some(*reason),
        }
    }

    pub fn messages(&self) -> &[String] {
        match self {
            Evaluation::Computed { messages, .. } | Evaluation::Blocked { messages, .. } => messages,
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Evaluation::Computed { warnings, .. } | Evaluation::Blocked { warnings, .. } => warnings,
        }
    }
}
