use serde::Serialize;

/// A gadolinium-based contrast agent and its formulary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentInfo {
    pub name: &'static str,
    /// Gadolinium concentration in mmol/mL.
    pub concentration_mmol_ml: f64,
    pub pediatric_eligible: bool,
}

static AGENTS: [AgentInfo; 5] = [
    AgentInfo {
        name: "Dotarem",
        concentration_mmol_ml: 0.5,
        pediatric_eligible: true,
    },
    AgentInfo {
        name: "Omniscan",
        concentration_mmol_ml: 0.5,
        pediatric_eligible: false,
    },
    AgentInfo {
        name: "Prohance",
        concentration_mmol_ml: 0.5,
        pediatric_eligible: true,
    },
    AgentInfo {
        name: "Gadovist",
        concentration_mmol_ml: 1.0,
        pediatric_eligible: true,
    },
    // Same product, US trade name.
    AgentInfo {
        name: "Gadavist",
        concentration_mmol_ml: 1.0,
        pediatric_eligible: true,
    },
];

/// Every agent in listing order.
pub fn all_agents() -> &'static [AgentInfo] {
    &AGENTS
}
