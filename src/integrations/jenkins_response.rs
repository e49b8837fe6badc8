use remote_status::{BuildRecord, BuildStatus};

#[derive(Deserialize)]
pub struct JenkinsJobResponse {
    pub jobs: Vec<JenkinsJob>,
}

#[derive(Deserialize)]
pub struct JenkinsJob {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsJobDetails {
    pub last_build: Option<JenkinsBuildResult>,
    pub last_completed_build: Option<JenkinsBuildResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JenkinsBuildResult {
    pub number: u32,

    #[serde(default)]
    pub building: bool,

    #[serde(rename = "result")]
    pub build_result: Option<JenkinsBuildStatus>,

    #[serde(default)]
    pub timestamp: i64,

    #[serde(default = "unknown_duration")]
    pub estimated_duration: i64,
}

fn unknown_duration() -> i64 {
    -1
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JenkinsBuildStatus {
    Success,
    Failure,
    NotBuilt,
    Aborted,
    Unstable,
    #[serde(other)]
    Other,
}

impl<'a> From<&'a JenkinsBuildResult> for BuildRecord {
    fn from(build: &'a JenkinsBuildResult) -> BuildRecord {
        let status = match build.build_result {
            Some(JenkinsBuildStatus::Success) => BuildStatus::Success,
            Some(JenkinsBuildStatus::Failure) | Some(JenkinsBuildStatus::Unstable) => BuildStatus::Failure,
            _ => BuildStatus::Unknown,
        };
        BuildRecord {
            number: build.number,
            status: status,
            building: build.building,
            timestamp_millis: build.timestamp,
            estimated_duration_millis: build.estimated_duration,
        }
    }
}
