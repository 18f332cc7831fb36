use gadocalc_core::Evaluation;

/// Process exit statuses. Usage errors share the form-error status so that
/// only a rule-blocked evaluation exits with [`EXIT_BLOCKED`].
pub const EXIT_OK: u8 = 0;
pub const EXIT_FORM_ERROR: u8 = 1;
pub const EXIT_BLOCKED: u8 = 2;

/// `--help` and `--version` are reported through clap errors but succeed.
pub fn parse_error_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FORM_ERROR
    } else {
        EXIT_OK
    }
}

pub fn evaluation_exit_code(evaluation: &Evaluation) -> u8 {
    if evaluation.is_ok() {
        EXIT_OK
    } else {
        EXIT_BLOCKED
    }
}
