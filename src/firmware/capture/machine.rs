use statig::prelude::*;

use super::super::types::{CaptureError, PipelineEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Linking,
    Running,
    Draining,
    Stopped,
    Committed,
    Faulted,
}

impl CapturePhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Linking => "Linking",
            Self::Running => "Running",
            Self::Draining => "Draining",
            Self::Stopped => "Stopped",
            Self::Committed => "Committed",
            Self::Faulted => "Faulted",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CaptureEvent {
    BeginLink,
    LinkFailed,
    Started,
    StartFailed,
    /// Event-wait timeout expiry; one elapsed second.
    Tick,
    Chain(PipelineEvent),
    GraceDone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CaptureAction {
    /// Ask the chain to flush and finalize. Emitted exactly once per
    /// session, at the tick that reaches the target duration.
    SignalDrain,
}

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct DispatchContext {
    pub(super) action: Option<CaptureAction>,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct CaptureMachine {
    pub(super) phase: CapturePhase,
    pub(super) target_ticks: u32,
    pub(super) elapsed_ticks: u32,
    pub(super) drain_ticks: u32,
    pub(super) drain_limit: u32,
    pub(super) fault: Option<CaptureError>,
}

impl CaptureMachine {
    pub(super) fn new(target_ticks: u32, drain_limit: u32) -> Self {
        Self {
            phase: CapturePhase::Idle,
            target_ticks,
            elapsed_ticks: 0,
            drain_ticks: 0,
            drain_limit,
            fault: None,
        }
    }

    fn fault_to(&mut self, error: CaptureError) -> Outcome<State> {
        self.fault = Some(error);
        self.phase = CapturePhase::Faulted;
        Transition(State::faulted())
    }
}

#[state_machine(initial = "State::idle()")]
impl CaptureMachine {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        match event {
            CaptureEvent::BeginLink => {
                self.phase = CapturePhase::Linking;
                Transition(State::linking())
            }
            _ => Handled,
        }
    }

    #[state]
    fn linking(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        match event {
            CaptureEvent::Started => {
                self.phase = CapturePhase::Running;
                Transition(State::running())
            }
            CaptureEvent::LinkFailed => self.fault_to(CaptureError::LinkFailed),
            CaptureEvent::StartFailed => self.fault_to(CaptureError::StartFailed),
            _ => Handled,
        }
    }

    #[state]
    fn running(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        match event {
            CaptureEvent::Tick => {
                self.elapsed_ticks += 1;
                if self.elapsed_ticks >= self.target_ticks {
                    context.action = Some(CaptureAction::SignalDrain);
                    self.phase = CapturePhase::Draining;
                    Transition(State::draining())
                } else {
                    Handled
                }
            }
            // A terminal event before the drain was requested means the
            // chain died under us; the recording is shorter than asked
            // for, which is data loss, not success.
            CaptureEvent::Chain(_) => self.fault_to(CaptureError::ChainFault),
            _ => Handled,
        }
    }

    #[state]
    fn draining(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        match event {
            CaptureEvent::Chain(PipelineEvent::Stopped | PipelineEvent::Finished) => {
                self.phase = CapturePhase::Stopped;
                Transition(State::stopped())
            }
            CaptureEvent::Chain(PipelineEvent::Fault) => self.fault_to(CaptureError::ChainFault),
            CaptureEvent::Tick => {
                self.drain_ticks += 1;
                if self.drain_ticks >= self.drain_limit {
                    self.fault_to(CaptureError::DrainTimeout)
                } else {
                    Handled
                }
            }
            _ => Handled,
        }
    }

    #[state]
    fn stopped(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        match event {
            CaptureEvent::GraceDone => {
                self.phase = CapturePhase::Committed;
                Transition(State::committed())
            }
            _ => Handled,
        }
    }

    #[state]
    fn committed(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        Handled
    }

    #[state]
    fn faulted(&mut self, context: &mut DispatchContext, event: &CaptureEvent) -> Outcome<State> {
        Handled
    }
}
