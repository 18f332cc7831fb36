use gadocalc_formulary::{STANDARD_DOSE_MMOL_PER_KG, agent_info, is_pediatric};
use tracing::{debug, info, warn};

use crate::dose::calc_volume;
use crate::error::DoseError;
use crate::evaluation::{BlockReason, Evaluation};
use crate::patient::PatientInput;

pub const INVALID_AGE_MESSAGE: &str = "age must be greater than 0 years";
pub const INVALID_WEIGHT_MESSAGE: &str = "weight must be greater than 0 kg";
pub const UNKNOWN_AGENT_MESSAGE: &str = "gadolinium agent not recognized";
pub const VOLUME_BELOW_RESOLUTION_MESSAGE: &str =
    "computed volume rounds to 0.0 mL; weight is too low to dose at 0.1 mL resolution";

pub const RENAL_WARNING: &str = "contrast use not recommended; refer to the treating physician \
     (advanced chronic kidney disease, eGFR < 30 mL/min, or dialysis)";
pub const PEDIATRIC_RESTRICTION_WARNING: &str =
    "agent not permitted in the pediatric population (1-12 years)";
pub const PEDIATRIC_DOSE_WARNING: &str =
    "pediatric patient: the standard dose of 0.1 mmol/kg is never increased";
pub const ALLERGY_WARNING: &str =
    "prior allergic reaction to contrast; consider premedication or an alternative agent";

/// Supplied and formulary concentrations closer than this are the same.
const CONCENTRATION_TOLERANCE: f64 = 1e-9;

/// Run the ordered rule chain for one patient.
///
/// Checks, first failure wins:
/// 1. age > 0
/// 2. weight > 0 and finite
/// 3. no significant renal impairment
/// 4. agent present in the formulary
/// 5. pediatric patients only receive pediatric-eligible agents
///
/// Then the volume is computed at the standard dose and advisory warnings
/// are appended (pediatric dose ceiling, then prior allergy). A volume that
/// rounds to 0.0 mL blocks instead of being reported.
///
/// Never fails: every outcome is an [`Evaluation`].
pub fn evaluate(patient: &PatientInput) -> Evaluation {
    debug!(
        age = patient.age,
        weight_kg = patient.weight_kg,
        agent = %patient.agent,
        renal = patient.significant_renal_impairment,
        allergy = patient.prior_allergic_reaction,
        "evaluating patient"
    );

    let evaluation = run_checks(patient);
    match &evaluation {
        Evaluation::Computed { volume_ml, .. } => {
            info!(agent = %patient.agent, volume_ml, "volume computed");
        }
        Evaluation::Blocked { reason, .. } => {
            info!(agent = %patient.agent, ?reason, "evaluation blocked");
        }
    }
    evaluation
}

fn run_checks(patient: &PatientInput) -> Evaluation {
    if patient.age == 0 {
        return Evaluation::blocked_with_message(BlockReason::InvalidAge, INVALID_AGE_MESSAGE);
    }

    if !(patient.weight_kg > 0.0 && patient.weight_kg.is_finite()) {
        return Evaluation::blocked_with_message(BlockReason::InvalidWeight, INVALID_WEIGHT_MESSAGE);
    }

    if patient.significant_renal_impairment {
        return Evaluation::blocked_with_warning(BlockReason::RenalContraindication, RENAL_WARNING);
    }

    let Some(agent) = agent_info(&patient.agent) else {
        return Evaluation::blocked_with_message(BlockReason::UnknownAgent, UNKNOWN_AGENT_MESSAGE);
    };

    let pediatric = is_pediatric(patient.age);
    if pediatric && !agent.pediatric_eligible {
        return Evaluation::blocked_with_warning(
            BlockReason::PediatricRestriction,
            PEDIATRIC_RESTRICTION_WARNING,
        );
    }

    let concentration = agent.concentration_mmol_ml;
    let volume_ml = match calc_volume(patient.weight_kg, concentration) {
        Ok(v) => v,
        Err(e) => {
            return match e {
                DoseError::NonPositiveWeight(_) | DoseError::NonFiniteWeight(_) => {
                    Evaluation::blocked_with_message(BlockReason::InvalidWeight, e.to_string())
                }
                DoseError::VolumeBelowResolution(_) => Evaluation::blocked_with_message(
                    BlockReason::VolumeBelowResolution,
                    VOLUME_BELOW_RESOLUTION_MESSAGE,
                ),
                DoseError::NonPositiveConcentration(_)
                | DoseError::NonPositiveDoseRate(_)
                | DoseError::NonFiniteVolume => Evaluation::blocked_with_message(
                    BlockReason::InvalidConcentration,
                    e.to_string(),
                ),
            };
        }
    };

    let messages = vec![format!(
        "volume (mL) = ({STANDARD_DOSE_MMOL_PER_KG} mmol/kg × {:.1} kg) / {:.3} mmol/mL",
        patient.weight_kg, concentration
    )];

    let mut warnings = Vec::new();
    if pediatric {
        warnings.push(PEDIATRIC_DOSE_WARNING.to_string());
    }
    if patient.prior_allergic_reaction {
        warnings.push(ALLERGY_WARNING.to_string());
    }
    // NaN never matches.
    if !((patient.concentration_mmol_ml - concentration).abs() <= CONCENTRATION_TOLERANCE) {
        warn!(
            agent = agent.name,
            supplied = patient.concentration_mmol_ml,
            formulary = concentration,
            "supplied concentration differs from formulary"
        );
        warnings.push(format!(
            "supplied concentration {:.3} mmol/mL does not match the formulary value \
             {:.3} mmol/mL for {}; the formulary value was used",
            patient.concentration_mmol_ml, concentration, agent.name
        ));
    }

    Evaluation::Computed {
        volume_ml,
        messages,
        warnings,
    }
}
