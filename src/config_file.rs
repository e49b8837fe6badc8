use display::DisplayEndpoint;
use failure::Error;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub jenkins_base_url: String,
    pub job_name: String,

    pub poll_interval_secs: u64,
    pub request_timeout_secs: u64,

    pub display_host: String,
    pub display_port: u16,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            jenkins_base_url: "http://localhost:8080".to_string(),
            job_name: "TEST".to_string(),
            poll_interval_secs: 10,
            request_timeout_secs: 10,
            display_host: "192.168.1.253".to_string(),
            display_port: 8733,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(contents)?;
        if config.job_name.is_empty() {
            return Err(format_err!("job_name must not be empty"));
        }
        if config.poll_interval_secs == 0 {
            return Err(format_err!("poll_interval_secs must be at least 1"));
        }
        if config.request_timeout_secs == 0 {
            return Err(format_err!("request_timeout_secs must be at least 1"));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Config, Error> {
        let contents = fs::read_to_string(path)?;
        Config::from_toml(&contents)
    }

    /// Like `load`, but a file that doesn't exist gives the defaults. A file
    /// that exists and can't be used is still an error.
    pub fn load_or_default(path: &Path) -> Result<Config, Error> {
        match Config::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                let missing = e
                    .downcast_ref::<io::Error>()
                    .map_or(false, |io_err| io_err.kind() == io::ErrorKind::NotFound);
                if missing {
                    Ok(Config::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn display_endpoint(&self) -> DisplayEndpoint {
        DisplayEndpoint {
            host: self.display_host.clone(),
            port: self.display_port,
        }
    }
}

/// The config file to read: the first command line argument if there is
/// one, else the copy build.rs puts next to the executable, else the
/// working directory.
pub fn config_path() -> PathBuf {
    if let Some(arg) = env::args_os().nth(1) {
        return PathBuf::from(arg);
    }
    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
    match beside_exe {
        Some(ref path) if path.exists() => path.clone(),
        _ => PathBuf::from(CONFIG_FILE_NAME),
    }
}
