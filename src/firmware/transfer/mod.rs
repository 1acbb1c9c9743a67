//! Transfer agent. Drains the upload queue over one control session;
//! per-file rejections keep the file and its queue slot, session-level
//! failures abort the whole pass.

pub mod response;


use heapless::Vec;
use log::{error, info, warn};

use super::config::EndpointConfig;
use super::hal::{ArtifactStore, FileTransferClient, TransferSessionIo};
use super::queue::UploadQueue;
use super::types::{
    Artifact, LinkState, TransferError, TransferMode, UploadReport, UploadStatus,
    UPLOAD_QUEUE_SLOTS,
};
use response::{is_positive_completion, parse_status_code, remote_path};

/// Runs one upload pass over everything currently queued.
///
/// Confirmed artifacts are deleted from local storage and leave the
/// queue; failed ones are re-queued in their original order so the next
/// pass retries them first. Connect and login failures are fatal for
/// the pass and leave the queue untouched.
pub async fn upload_all<C, S>(
    client: &mut C,
    store: &mut S,
    endpoint: &EndpointConfig,
    queue: &mut UploadQueue,
) -> Result<UploadReport, TransferError>
where
    C: FileTransferClient,
    S: ArtifactStore,
{
    if queue.is_empty() {
        return Ok(UploadReport::default());
    }
    info!(
        "upload pass: {} queued for {}:{}",
        queue.len(),
        endpoint.host,
        endpoint.port
    );

    let mut session = match client.connect(endpoint.host.as_str(), endpoint.port).await {
        Ok(session) => session,
        Err(_) => {
            error!("{}: connect to {} failed", LinkState::Disconnected.as_str(), endpoint.host);
            return Err(TransferError::ConnectFailed);
        }
    };
    if !session.login(endpoint.user.as_str(), endpoint.password.as_str()).await {
        error!("{}: login rejected", LinkState::Connected.as_str());
        session.quit().await;
        return Err(TransferError::AuthFailed);
    }
    info!("{}: session open", LinkState::Authenticated.as_str());

    let mut report = UploadReport::default();
    let mut retained: Vec<Artifact, UPLOAD_QUEUE_SLOTS> = Vec::new();

    while let Some(mut artifact) = queue.pop_front() {
        artifact.status = UploadStatus::InFlight;
        let remote = remote_path(endpoint.remote_root.as_str(), artifact.basename());
        let sent = session
            .put(artifact.local_path.as_str(), remote.as_str(), TransferMode::Binary)
            .await;

        let outcome = match sent {
            Err(error) => Err(error),
            Ok(()) => match session.last_response() {
                None => Err(TransferError::NoResponse),
                Some(line) => match parse_status_code(line.as_str()) {
                    None => Err(TransferError::NoResponse),
                    Some(code) if is_positive_completion(code) => Ok(()),
                    Some(code) => Err(TransferError::Rejected(code)),
                },
            },
        };

        match outcome {
            Ok(()) => {
                artifact.status = UploadStatus::Confirmed;
                report.confirmed += 1;
                info!("upload confirmed: {}", artifact.local_path);
                if store.remove(artifact.local_path.as_str()).await.is_err() {
                    warn!("confirmed artifact not deleted: {}", artifact.local_path);
                }
            }
            Err(error) => {
                artifact.status = UploadStatus::Failed;
                report.failed += 1;
                warn!("upload failed ({}): {}", error.as_str(), artifact.local_path);
                // Capacity matches the queue's backing, push cannot fail.
                let _ = retained.push(artifact);
            }
        }
    }

    session.quit().await;

    // Failed artifacts go back in their original relative order; the
    // queue was fully drained above, so there is room for all of them.
    for artifact in retained {
        let _ = queue.enqueue(artifact);
    }

    info!(
        "upload pass done: {} confirmed, {} failed",
        report.confirmed, report.failed
    );
    Ok(report)
}
