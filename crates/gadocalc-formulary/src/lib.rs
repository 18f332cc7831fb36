//! gadocalc-formulary
//!
//! Static gadolinium agent table and age classification. Pure data, no
//! I/O, no mutable state. Educational values only, not a clinical reference.

pub mod agents;

pub use agents::{AgentInfo, all_agents};

/// Standard MRI dose for brain/body protocols, in mmol per kg.
pub const STANDARD_DOSE_MMOL_PER_KG: f64 = 0.1;

/// Youngest and oldest age (years, inclusive) classified as pediatric.
pub const PEDIATRIC_AGE_MIN: u32 = 1;
pub const PEDIATRIC_AGE_MAX: u32 = 12;

/// Look up an agent by its exact name.
pub fn agent_info(name: &str) -> Option<&'static AgentInfo> {
    all_agents().iter().find(|a| a.name == name)
}

/// True when `age` falls within 1–12 years inclusive.
///
/// Age 0 is not pediatric under this rule.
pub fn is_pediatric(age: u32) -> bool {
    (PEDIATRIC_AGE_MIN..=PEDIATRIC_AGE_MAX).contains(&age)
}

/// Names of the agents that may be offered, in table order.
///
/// Every agent is returned for adults; only pediatric-eligible agents when
/// `pediatric` is set.
pub fn eligible_agents(pediatric: bool) -> Vec<&'static str> {
    all_agents()
        .iter()
        .filter(|a| !pediatric || a.pediatric_eligible)
        .map(|a| a.name)
        .collect()
}

pub fn eligible_agents_for_age(age: u32) -> Vec<&'static str> {
    eligible_agents(is_pediatric(age))
}
