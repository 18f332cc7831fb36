use gadocalc_core::{Evaluation, PatientInput};
use gadocalc_formulary::{AgentInfo, STANDARD_DOSE_MMOL_PER_KG, is_pediatric};
use serde::Serialize;

pub const DISCLAIMER: &str = "Educational prototype only. Not for real clinical decisions: \
     contrast administration depends on the responsible technologist and institutional protocols.";

/// JSON shape for `evaluate --format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub patient: &'a PatientInput,
    pub evaluation: &'a Evaluation,
    pub disclaimer: &'static str,
}

impl<'a> Report<'a> {
    pub fn new(patient: &'a PatientInput, evaluation: &'a Evaluation) -> Self {
        Self {
            patient,
            evaluation,
            disclaimer: DISCLAIMER,
        }
    }
}

pub fn render_patient_summary(patient: &PatientInput) -> String {
    let pediatric_tag = if is_pediatric(patient.age) {
        " (pediatric)"
    } else {
        ""
    };

    let mut out = String::from("Patient summary\n");
    out.push_str(&format!("  Name:      {}\n", patient.full_name));
    out.push_str(&format!("  Age:       {} years{pediatric_tag}\n", patient.age));
    out.push_str(&format!("  Weight:    {:.1} kg\n", patient.weight_kg));
    out.push_str(&format!(
        "  Study:     {}\n",
        patient.study_type.as_deref().unwrap_or("not specified")
    ));
    out.push_str(&format!(
        "  Technique: {}\n",
        patient.technique.as_deref().unwrap_or("not specified")
    ));
    out.push_str(&format!(
        "  Agent:     {} ({:.1} mmol/mL)\n",
        patient.agent, patient.concentration_mmol_ml
    ));
    out
}

/// Human-readable report: summary, outcome, and the disclaimer.
///
/// Blocked results list hard-stop messages and warnings separately.
/// Computed results show the volume, the calculation trace, and any
/// warnings.
pub fn render_text(patient: &PatientInput, evaluation: &Evaluation) -> String {
    let mut out = render_patient_summary(patient);
    out.push('\n');

    match evaluation {
        Evaluation::Blocked {
            messages, warnings, ..
        } => {
            if !messages.is_empty() {
                out.push_str("Volume could not be calculated:\n");
                push_list(&mut out, messages);
            }
            if !warnings.is_empty() {
                out.push_str("Warnings:\n");
                push_list(&mut out, warnings);
            }
        }
        Evaluation::Computed {
            volume_ml,
            messages,
            warnings,
        } => {
            out.push_str(&format!("Estimated gadolinium volume: {volume_ml:.1} mL\n"));
            out.push_str(&format!(
                "Calculated with the standard dose ({STANDARD_DOSE_MMOL_PER_KG} mmol/kg).\n"
            ));
            if !messages.is_empty() {
                out.push_str("Calculation:\n");
                push_list(&mut out, messages);
            }
            if !warnings.is_empty() {
                out.push_str("Warnings:\n");
                push_list(&mut out, warnings);
            }
        }
    }

    out.push('\n');
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}

pub fn render_agents(agents: &[&AgentInfo]) -> String {
    let mut out = String::new();
    for agent in agents {
        out.push_str(&format!(
            "{:<10} {:.1} mmol/mL  pediatric: {}\n",
            agent.name,
            agent.concentration_mmol_ml,
            if agent.pediatric_eligible { "yes" } else { "no" }
        ));
    }
    out
}

fn push_list(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}
