use std::io::Read;
use std::path::Path;

use gadocalc_core::PatientInput;
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Upper bounds accepted by the form.
pub const MAX_AGE_YEARS: u32 = 120;
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Raw form fields, before any checking.
///
/// Age is signed so that a negative entry is reported as a form error
/// rather than failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub study: String,
    #[serde(default)]
    pub technique: String,
    #[serde(default)]
    pub renal_impairment: bool,
    #[serde(default)]
    pub prior_allergy: bool,
}

impl PatientForm {
    /// Check required fields and resolve the agent's concentration.
    ///
    /// Checks run in form order: name, age, weight, agent. Text fields are
    /// trimmed and blank ones become `None`.
    pub fn into_patient_input(self) -> Result<PatientInput, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }

        if self.age <= 0 {
            return Err(FormError::NonPositiveAge(self.age));
        }
        let age = u32::try_from(self.age)
            .ok()
            .filter(|a| *a <= MAX_AGE_YEARS)
            .ok_or(FormError::AgeOutOfRange {
                age: self.age,
                max: MAX_AGE_YEARS,
            })?;

        if !(self.weight_kg > 0.0) {
            return Err(FormError::NonPositiveWeight(self.weight_kg));
        }
        if self.weight_kg > MAX_WEIGHT_KG {
            return Err(FormError::WeightOutOfRange {
                weight: self.weight_kg,
                max: MAX_WEIGHT_KG,
            });
        }

        let agent_name = self.agent.trim();
        let agent = gadocalc_formulary::agent_info(agent_name)
            .ok_or_else(|| FormError::UnknownAgent(agent_name.to_string()))?;

        Ok(PatientInput {
            full_name: name.to_string(),
            age,
            weight_kg: self.weight_kg,
            agent: agent.name.to_string(),
            concentration_mmol_ml: agent.concentration_mmol_ml,
            study_type: non_blank(&self.study),
            technique: non_blank(&self.technique),
            significant_renal_impairment: self.renal_impairment,
            prior_allergic_reaction: self.prior_allergy,
        })
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Read a JSON form from `path`, or from stdin when `path` is `-`.
pub fn load_form(path: &Path) -> Result<PatientForm, FormError> {
    let form = if path == Path::new("-") {
        read_form(std::io::stdin().lock())?
    } else {
        read_form(std::fs::File::open(path)?)?
    };
    tracing::debug!(path = %path.display(), "loaded patient form");
    Ok(form)
}

/// Read a JSON form from any reader.
pub fn read_form(mut reader: impl Read) -> Result<PatientForm, FormError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(serde_json::from_str(&contents)?)
}
