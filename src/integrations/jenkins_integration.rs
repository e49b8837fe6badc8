use errors::MonitorError;
use integrations::jenkins_response::*;
use network::get_url_response;
use remote_status::{BuildRecord, JobState};
use std::time::Duration;
use integrations::remote_integration::RemoteIntegration;

const BUILD_FIELDS: &str = "number,building,result,timestamp,estimatedDuration";

pub struct JenkinsIntegration {
    base_url: String,
    job_name: String,
    timeout: Duration,
}

/// Jobs the server listed when we connected.
pub struct JenkinsServer {
    pub job_names: Vec<String>,
}

impl JenkinsServer {
    pub fn has_job(&self, job_name: &str) -> bool {
        self.job_names.iter().any(|name| name == job_name)
    }
}

impl JenkinsIntegration {
    pub fn new(base_url: &str, job_name: &str, timeout: Duration) -> JenkinsIntegration {
        JenkinsIntegration {
            base_url: base_url.trim_end_matches('/').to_string(),
            job_name: job_name.to_string(),
            timeout: timeout,
        }
    }

    pub fn jobs_url(&self) -> String {
        format!("{base}/api/json?tree=jobs[name]", base = self.base_url)
    }

    pub fn job_url(&self) -> String {
        format!(
            "{base}/job/{job}/api/json?tree=lastBuild[{fields}],lastCompletedBuild[{fields}]",
            base = self.base_url,
            job = self.job_name,
            fields = BUILD_FIELDS
        )
    }

    fn job_not_found(&self) -> MonitorError {
        MonitorError::JobNotFound {
            job_name: self.job_name.clone(),
        }
    }

    pub fn to_job_state(&self, details: &JenkinsJobDetails) -> JobState {
        JobState {
            job_name: self.job_name.clone(),
            last_build: details.last_build.as_ref().map(BuildRecord::from),
            last_completed_build: details.last_completed_build.as_ref().map(BuildRecord::from),
        }
    }
}

impl RemoteIntegration for JenkinsIntegration {
    type Handle = JenkinsServer;

    fn connect(&self) -> Result<JenkinsServer, MonitorError> {
        let url_string = self.jobs_url();
        match get_url_response::<JenkinsJobResponse>(&url_string, self.timeout)? {
            Some(response) => Ok(JenkinsServer {
                job_names: response.jobs.into_iter().map(|job| job.name).collect(),
            }),
            None => Err(MonitorError::unavailable(format!(
                "{} answered 404, is this a Jenkins server?",
                url_string
            ))),
        }
    }

    fn fetch_job_state(&self, server: &JenkinsServer) -> Result<JobState, MonitorError> {
        if !server.has_job(&self.job_name) {
            return Err(self.job_not_found());
        }

        let job_url_string = self.job_url();
        match get_url_response::<JenkinsJobDetails>(&job_url_string, self.timeout)? {
            Some(details) => {
                let state = self.to_job_state(&details);
                info!(
                    "--Jenkins--: Job {}: last build {:?}, last completed build {:?}.",
                    self.job_name,
                    state.last_build.as_ref().map(|b| b.number),
                    state.last_completed_build.as_ref().map(|b| b.number)
                );
                Ok(state)
            }
            None => Err(self.job_not_found()),
        }
    }
}
