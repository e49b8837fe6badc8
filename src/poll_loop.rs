use chrono::{DateTime, Utc};
use display::DisplaySender;
use errors::MonitorError;
use integrations::remote_integration::RemoteIntegration;
use remote_status::JobState;
use signal::SignalState;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;
use translator::translate;

/// Asks the integration for the job, translating every fault into a log line.
fn fetch<I: RemoteIntegration>(integration: &I) -> Option<JobState> {
    let result = integration
        .connect()
        .and_then(|server| integration.fetch_job_state(&server));
    match result {
        Ok(state) => {
            if state.last_build.is_none() {
                warn!(
                    "--Poll--: {}",
                    MonitorError::BuildDataMissing {
                        job_name: state.job_name.clone()
                    }
                );
            }
            Some(state)
        }
        Err(e) => {
            warn!("--Poll--: Keeping the last signal. Details: {}", e);
            None
        }
    }
}

/// Runs one poll cycle and returns the signal to carry into the next one.
/// The signal is sent even when Jenkins couldn't be reached, so the tree
/// keeps hearing from us.
pub fn poll_once<I: RemoteIntegration>(
    integration: &I,
    sender: &DisplaySender,
    previous: SignalState,
    now: DateTime<Utc>,
) -> SignalState {
    let job_state = fetch(integration);
    let signal = translate(job_state.as_ref(), previous, now);
    info!("{}", signal);
    sender.send(&signal);
    signal
}

/// Polls until something arrives on `shutdown` (or its sender goes away).
pub fn run<I: RemoteIntegration>(
    integration: &I,
    sender: &DisplaySender,
    interval: Duration,
    shutdown: &Receiver<()>,
) -> SignalState {
    let mut signal = SignalState::default();
    loop {
        signal = poll_once(integration, sender, signal, Utc::now());
        match shutdown.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                info!("--Poll--: Shutting down.");
                return signal;
            }
        }
    }
}
