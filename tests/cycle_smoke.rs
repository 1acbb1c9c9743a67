//! End-to-end cycle exercise against scripted collaborators: a batching
//! deployment accumulates artifacts across wakes, then drains them all
//! when a wake lands in the upload window.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use embassy_futures::block_on;
use embassy_time::Duration;

use fieldlogger::{
    run_cycle, ArtifactStore, CaptureChain, CaptureError, ChainSpec, CycleOutcome, EndpointConfig,
    FileTransferClient, MediaPipeline, PipelineEvent, Platform, RebootReason, ScheduleConfig,
    StoreError, TimeOfDay, TimeProvider, Timestamp, TransferError, TransferMode,
    TransferSessionIo, UploadQueue,
};

struct FixedTime(u64);

impl TimeProvider for FixedTime {
    fn now(&mut self) -> Timestamp {
        Timestamp::from_unix(self.0)
    }
}

struct OneShotPipeline;

struct OneShotChain {
    polls: u32,
}

impl CaptureChain for OneShotChain {
    async fn start(&mut self) -> Result<(), CaptureError> {
        Ok(())
    }

    fn signal_drain(&mut self) {}

    async fn poll_event(&mut self, _timeout: Duration) -> Option<PipelineEvent> {
        self.polls += 1;
        // Two elapsed seconds, then the drain completes.
        if self.polls <= 2 {
            None
        } else {
            Some(PipelineEvent::Finished)
        }
    }

    async fn teardown(self) {}
}

impl MediaPipeline for OneShotPipeline {
    type Chain = OneShotChain;

    async fn build(&mut self, _spec: &ChainSpec) -> Result<Self::Chain, CaptureError> {
        Ok(OneShotChain { polls: 0 })
    }
}

#[derive(Default)]
struct WireLog {
    connects: u32,
    puts: Vec<String>,
}

struct AcceptAllSession {
    log: Rc<RefCell<WireLog>>,
}

impl TransferSessionIo for AcceptAllSession {
    async fn login(&mut self, _user: &str, _pass: &str) -> bool {
        true
    }

    async fn put(
        &mut self,
        local_path: &str,
        _remote_path: &str,
        _mode: TransferMode,
    ) -> Result<(), TransferError> {
        self.log.borrow_mut().puts.push(local_path.to_string());
        Ok(())
    }

    fn last_response(&mut self) -> Option<heapless::String<128>> {
        let mut line = heapless::String::new();
        let _ = line.push_str("226 Transfer complete");
        Some(line)
    }

    async fn quit(self) {}
}

struct AcceptAllServer {
    reachable: bool,
    log: Rc<RefCell<WireLog>>,
}

impl FileTransferClient for AcceptAllServer {
    type Session = AcceptAllSession;

    async fn connect(&mut self, _host: &str, _port: u16) -> Result<Self::Session, TransferError> {
        self.log.borrow_mut().connects += 1;
        if !self.reachable {
            return Err(TransferError::ConnectFailed);
        }
        Ok(AcceptAllSession {
            log: self.log.clone(),
        })
    }
}

struct SdCard {
    files: HashSet<String>,
}

impl ArtifactStore for SdCard {
    async fn file_size(&mut self, path: &str) -> Result<u64, StoreError> {
        // The chain wrote the file; sizing it is the first time the
        // controller touches it.
        self.files.insert(path.to_string());
        Ok(968_044)
    }

    async fn remove(&mut self, path: &str) -> Result<(), StoreError> {
        if self.files.remove(path) {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

struct InstantPlatform;

impl Platform for InstantPlatform {
    async fn delay(&mut self, _duration: Duration) {}
}

fn batching_config() -> ScheduleConfig {
    ScheduleConfig {
        record_duration_s: 2,
        tz_offset_minutes: 0,
        upload_at: Some(TimeOfDay::new(23, 59, 0)),
        ..ScheduleConfig::default()
    }
}

fn endpoint() -> EndpointConfig {
    fn filled<const N: usize>(text: &str) -> heapless::String<N> {
        let mut out = heapless::String::new();
        let _ = out.push_str(text);
        out
    }
    EndpointConfig {
        host: filled("collector.example.net"),
        port: 21,
        user: filled("logger"),
        password: filled("hunter2"),
        remote_root: filled("/incoming"),
    }
}

#[test]
fn batching_deployment_accumulates_then_drains() {
    let config = batching_config();
    let mut queue = UploadQueue::new(config.queue_capacity);
    let mut store = SdCard {
        files: HashSet::new(),
    };
    let log = Rc::new(RefCell::new(WireLog::default()));
    let mut server = AcceptAllServer {
        reachable: true,
        log: log.clone(),
    };
    let mut platform = InstantPlatform;

    // Three daytime wakes an hour apart; all of them defer.
    for (sequence, hour) in (1u32..=3).zip(10u64..13) {
        let mut time = FixedTime(1_699_920_000 + hour * 3_600); // 2023-11-14 00:00 UTC base
        let mut pipeline = OneShotPipeline;
        let outcome = block_on(run_cycle(
            &mut time,
            &mut pipeline,
            &mut server,
            &mut store,
            &mut platform,
            &config,
            &endpoint(),
            &mut queue,
            sequence,
        ));
        assert!(matches!(outcome, CycleOutcome::Sleep { .. }));
    }
    assert_eq!(queue.len(), 3);
    assert_eq!(store.files.len(), 3);
    assert_eq!(log.borrow().connects, 0);

    // A wake inside the window drains everything in arrival order.
    let mut time = FixedTime(1_699_920_000 + 86_340);
    let mut pipeline = OneShotPipeline;
    let outcome = block_on(run_cycle(
        &mut time,
        &mut pipeline,
        &mut server,
        &mut store,
        &mut platform,
        &config,
        &endpoint(),
        &mut queue,
        4,
    ));

    assert_eq!(outcome, CycleOutcome::Sleep { duration_s: 86_400 });
    assert!(queue.is_empty());
    assert!(store.files.is_empty());
    let log = log.borrow();
    assert_eq!(log.connects, 1);
    assert_eq!(log.puts.len(), 4);
    assert_eq!(log.puts[0], "/sdcard/2023.11.14.10.00.00.wav");
    assert_eq!(log.puts[3], "/sdcard/2023.11.14.23.59.00.wav");
}

#[test]
fn unreachable_server_reboots_but_loses_nothing() {
    let mut config = batching_config();
    config.upload_at = None; // immediate policy forces a transfer pass
    let mut queue = UploadQueue::new(config.queue_capacity);
    let mut store = SdCard {
        files: HashSet::new(),
    };
    let log = Rc::new(RefCell::new(WireLog::default()));
    let mut server = AcceptAllServer {
        reachable: false,
        log,
    };
    let mut platform = InstantPlatform;
    let mut time = FixedTime(1_700_000_000);
    let mut pipeline = OneShotPipeline;

    let outcome = block_on(run_cycle(
        &mut time,
        &mut pipeline,
        &mut server,
        &mut store,
        &mut platform,
        &config,
        &endpoint(),
        &mut queue,
        1,
    ));

    assert_eq!(
        outcome,
        CycleOutcome::Reboot {
            reason: RebootReason::TransferFault(TransferError::ConnectFailed)
        }
    );
    assert_eq!(queue.len(), 1);
    assert_eq!(store.files.len(), 1);
}
