use gadocalc_core::{Evaluation, evaluate};
use gadocalc_formulary::{AgentInfo, agent_info, all_agents, eligible_agents_for_age};

use crate::args::OutputFormat;
use crate::error::FormError;
use crate::form::PatientForm;
use crate::render::{Report, render_agents, render_text};

/// Agents to offer, all of them or only those allowed at `age`.
pub fn list_agents(age: Option<u32>) -> Vec<&'static AgentInfo> {
    match age {
        Some(age) => eligible_agents_for_age(age)
            .into_iter()
            .filter_map(agent_info)
            .collect(),
        None => all_agents().iter().collect(),
    }
}

pub fn agents_output(age: Option<u32>, format: OutputFormat) -> Result<String, serde_json::Error> {
    let agents = list_agents(age);
    match format {
        OutputFormat::Text => Ok(render_agents(&agents)),
        OutputFormat::Json => serde_json::to_string_pretty(&agents),
    }
}

/// Check the form, evaluate, and render the result.
pub fn run_evaluation(
    form: PatientForm,
    format: OutputFormat,
) -> Result<(String, Evaluation), FormError> {
    let patient = form.into_patient_input()?;
    let evaluation = evaluate(&patient);

    let output = match format {
        OutputFormat::Text => render_text(&patient, &evaluation),
        OutputFormat::Json => serde_json::to_string_pretty(&Report::new(&patient, &evaluation))
            .map_err(FormError::Encode)?,
    };
    Ok((output, evaluation))
}
