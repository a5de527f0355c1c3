use serde::Serialize;

/// What `tr-nums report` prints: the library version and the numeric limits
/// of the closed-form path.
#[derive(Debug, Serialize)]
pub struct Report {
    pub version: &'static str,
    /// Integer Γ arguments up to here come from the exact factorial table.
    pub gamma_exact_up_to: f64,
    /// Last integer argument with a finite f64 Γ value.
    pub gamma_finite_up_to: f64,
}

pub fn report() -> Report {
    Report {
        version: trnums::VERSION,
        gamma_exact_up_to: trnums::gamma::MAX_EXACT_ARG,
        gamma_finite_up_to: trnums::gamma::MAX_FINITE_INT_ARG,
    }
}
