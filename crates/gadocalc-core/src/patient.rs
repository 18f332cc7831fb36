use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One evaluation request, as assembled by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInput {
    pub full_name: String,
    /// Whole years.
    pub age: u32,
    pub weight_kg: f64,
    /// Agent name as listed in the formulary.
    pub agent: String,
    /// Concentration the caller resolved for `agent`. The evaluator checks it
    /// against the formulary and uses the formulary value.
    pub concentration_mmol_ml: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(default)]
    pub significant_renal_impairment: bool,
    #[serde(default)]
    pub prior_allergic_reaction: bool,
}

impl PatientInput {
    /// Build an input with the concentration taken from the formulary.
    ///
    /// Unknown agents get a concentration of 0.0; the evaluator reports them
    /// as unrecognized before the concentration is ever used.
    pub fn for_agent(
        full_name: impl Into<String>,
        age: u32,
        weight_kg: f64,
        agent: impl Into<String>,
    ) -> Self {
        let agent = agent.into();
        let concentration_mmol_ml = gadocalc_formulary::agent_info(&agent)
            .map(|a| a.concentration_mmol_ml)
            .unwrap_or(0.0);

        Self {
            full_name: full_name.into(),
            age,
            weight_kg,
            agent,
            concentration_mmol_ml,
            study_type: None,
            technique: None,
            significant_renal_impairment: false,
            prior_allergic_reaction: false,
        }
    }

    pub fn with_study(
        mut self,
        study_type: impl Into<String>,
        technique: impl Into<String>,
    ) -> Self {
        self.study_type = Some(study_type.into());
        self.technique = Some(technique.into());
        self
    }

    pub fn with_renal_impairment(mut self, impaired: bool) -> Self {
        self.significant_renal_impairment = impaired;
        self
    }

    pub fn with_prior_allergy(mut self, allergy: bool) -> Self {
        self.prior_allergic_reaction = allergy;
        self
    }
}
