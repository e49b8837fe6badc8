pub mod jenkins_integration;
pub mod jenkins_response;
pub mod remote_integration;
