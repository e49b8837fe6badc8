/// Everything that can go wrong during a single poll cycle. None of these are
/// fatal: the poll loop logs them and keeps the last signal it had.
#[derive(Debug, Fail, PartialEq)]
pub enum MonitorError {
    #[fail(display = "Jenkins server is unavailable: {}", message)]
    ServerUnavailable { message: String },

    #[fail(display = "Jenkins has no job named '{}'.", job_name)]
    JobNotFound { job_name: String },

    #[fail(display = "Jenkins returned job '{}', but it has no builds yet.", job_name)]
    BuildDataMissing { job_name: String },

    #[fail(display = "Unable to send control datagram to the display: {}", message)]
    TransmitFault { message: String },

    #[fail(display = "Malformed control datagram: {}", message)]
    MalformedSignal { message: String },
}

impl MonitorError {
    pub fn unavailable<T: ToString>(cause: T) -> MonitorError {
        MonitorError::ServerUnavailable {
            message: cause.to_string(),
        }
    }

    pub fn transmit<T: ToString>(cause: T) -> MonitorError {
        MonitorError::TransmitFault {
            message: cause.to_string(),
        }
    }
}
