use thiserror::Error;

/// Invalid arguments passed straight to the dose formula.
///
/// These indicate an integration bug upstream; patient-facing outcomes are
/// reported through [`crate::Evaluation`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DoseError {
    #[error("weight must be greater than 0 kg, got {0}")]
    NonPositiveWeight(f64),

    #[error("concentration must be greater than 0 mmol/mL, got {0}")]
    NonPositiveConcentration(f64),

    #[error("dose rate must be greater than 0 mmol/kg, got {0}")]
    NonPositiveDoseRate(f64),

    #[error("weight must be a finite number of kg, got {0}")]
    NonFiniteWeight(f64),

    #[error("computed volume {0} mL rounds to 0.0 mL")]
    VolumeBelowResolution(f64),

    #[error("computed volume is not finite")]
    NonFiniteVolume,
}
