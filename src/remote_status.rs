use chrono::{DateTime, Duration, TimeZone, Utc};

/// Outcome of the last completed build. Only `Success` lights the tree green.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BuildStatus {
    Success,
    Failure,
    Unknown,
}

/// One build of the watched job, as far as the tree cares about it.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildRecord {
    pub number: u32,
    pub status: BuildStatus,
    pub building: bool,
    /// Start of the build, Unix epoch in milliseconds.
    pub timestamp_millis: i64,
    /// Jenkins' guess at how long the build takes. `-1` when it has no history.
    pub estimated_duration_millis: i64,
}

impl BuildRecord {
    pub fn progress(&self, now: DateTime<Utc>) -> Option<BuildProgress> {
        if !self.building {
            return None;
        }
        let start_time = Utc
            .timestamp_millis_opt(self.timestamp_millis)
            .single()
            .unwrap_or(now);
        Some(BuildProgress {
            start_time: start_time,
            estimated_duration: Duration::try_milliseconds(self.estimated_duration_millis)
                .filter(|estimate| *estimate > Duration::zero()),
            now: now,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JobState {
    pub job_name: String,
    /// Most recent build, possibly still running.
    pub last_build: Option<BuildRecord>,
    /// Most recent build that reached a terminal status.
    pub last_completed_build: Option<BuildRecord>,
}

/// How far along a running build is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BuildProgress {
    pub start_time: DateTime<Utc>,
    /// `None` when Jenkins has no usable estimate.
    pub estimated_duration: Option<Duration>,
    pub now: DateTime<Utc>,
}

impl BuildProgress {
    pub fn elapsed(&self) -> Duration {
        self.now.signed_duration_since(self.start_time)
    }

    /// Elapsed time over estimated time. Without an estimate the build
    /// counts as overrun.
    pub fn fraction(&self) -> f64 {
        match self.estimated_duration {
            Some(estimate) => {
                self.elapsed().num_milliseconds() as f64 / estimate.num_milliseconds() as f64
            }
            None => f64::INFINITY,
        }
    }
}
