use super::state::ConductorState;

/// Drake ACSR under the standard scenario, at its 100 °C maximum temperature.
pub(crate) fn drake() -> ConductorState {
    ConductorState::with_defaults("Drake ACSR").expect("Drake ACSR is a registered preset")
}
