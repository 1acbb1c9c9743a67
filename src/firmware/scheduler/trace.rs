use log::info;

use super::super::types::CyclePhase;

/// Single-line structured trace of a lifecycle phase change, greppable
/// from the serial log.
pub(crate) fn emit_cycle_event(sequence: u32, from: CyclePhase, to: CyclePhase, trigger: &str) {
    info!(
        "CYCLE_EVENT {{\"seq\":{sequence},\"from\":\"{}\",\"to\":\"{}\",\"trigger\":\"{trigger}\"}}",
        from.as_str(),
        to.as_str()
    );
}
