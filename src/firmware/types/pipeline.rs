use heapless::String;

use super::base::ARTIFACT_PATH_MAX;

/// Terminal or fault notification from the capture chain's event
/// interface. Timeout expiry on the event wait is not an event; the
/// capture engine turns it into an elapsed-second tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Chain reported a stopped source element.
    Stopped,
    /// Chain flushed its buffers and finished the sink file.
    Finished,
    /// Chain reported an unrecoverable internal error.
    Fault,
}

impl PipelineEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Finished => "finished",
            Self::Fault => "fault",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureError {
    /// Chain assembly or path binding failed (allocation, storage mount).
    LinkFailed,
    /// Chain refused to start.
    StartFailed,
    /// Chain faulted, or reported a terminal event before the drain was
    /// requested (a short recording is a data-loss event, not a success).
    ChainFault,
    /// No terminal event arrived within the drain budget after the drain
    /// signal was issued.
    DrainTimeout,
    /// The finished artifact could not be sized on storage.
    StoreFault,
}

impl CaptureError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LinkFailed => "link_failed",
            Self::StartFailed => "start_failed",
            Self::ChainFault => "chain_fault",
            Self::DrainTimeout => "drain_timeout",
            Self::StoreFault => "store_fault",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelFormat {
    /// Both I2S channels.
    Stereo,
    /// Right channel only, the single-microphone field deployment.
    RightOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    pub sample_rate_hz: u32,
    pub channel_format: ChannelFormat,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44_100,
            channel_format: ChannelFormat::RightOnly,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    pub bits_per_sample: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { bits_per_sample: 16 }
    }
}

/// Everything the media pipeline capability needs to assemble one
/// capture chain. A spec is consumed by exactly one chain; chains are
/// never reused across sessions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainSpec {
    pub source: SourceConfig,
    pub encoder: EncoderConfig,
    pub sink_path: String<ARTIFACT_PATH_MAX>,
}
