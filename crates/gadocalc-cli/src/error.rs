use thiserror::Error;

/// Form-level problems caught before the evaluator runs.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("enter the patient's full name")]
    MissingName,

    #[error("age must be greater than 0 years, got {0}")]
    NonPositiveAge(i64),

    #[error("age must be at most {max} years, got {age}")]
    AgeOutOfRange { age: i64, max: u32 },

    #[error("weight must be greater than 0 kg, got {0}")]
    NonPositiveWeight(f64),

    #[error("weight must be at most {max} kg, got {weight}")]
    WeightOutOfRange { weight: f64, max: f64 },

    #[error("unknown agent '{0}'; run `gadocalc agents` for the list")]
    UnknownAgent(String),

    #[error("failed to read form input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid form input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode report: {0}")]
    Encode(serde_json::Error),
}
