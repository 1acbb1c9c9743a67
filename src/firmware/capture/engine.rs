use statig::blocking::IntoStateMachineExt as _;

use super::super::types::CaptureError;
use super::machine::{CaptureAction, CaptureEvent, CaptureMachine, CapturePhase, DispatchContext};

#[derive(Clone, Copy, Debug)]
pub(super) struct CaptureApplyResult {
    pub(super) phase: CapturePhase,
    pub(super) action: Option<CaptureAction>,
    pub(super) elapsed_ticks: u32,
}

/// Thin wrapper that dispatches events into the session state machine
/// and hands the resulting phase and side-effect request back to the
/// driver. All I/O stays outside the machine.
pub(super) struct CaptureEngine {
    machine: statig::blocking::StateMachine<CaptureMachine>,
}

impl CaptureEngine {
    pub(super) fn new(target_ticks: u32, drain_limit: u32) -> Self {
        Self {
            machine: CaptureMachine::new(target_ticks, drain_limit).state_machine(),
        }
    }

    pub(super) fn apply(&mut self, event: CaptureEvent) -> CaptureApplyResult {
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        CaptureApplyResult {
            phase: self.machine.inner().phase,
            action: context.action,
            elapsed_ticks: self.machine.inner().elapsed_ticks,
        }
    }

    pub(super) fn fault(&self) -> Option<CaptureError> {
        self.machine.inner().fault
    }
}
