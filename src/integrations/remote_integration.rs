use errors::MonitorError;
use remote_status::JobState;

/// A CI server that can report the state of one job.
pub trait RemoteIntegration {
    /// Whatever `connect` learns about the server that `fetch_job_state` needs.
    type Handle;

    fn connect(&self) -> Result<Self::Handle, MonitorError>;
    fn fetch_job_state(&self, handle: &Self::Handle) -> Result<JobState, MonitorError>;
}
