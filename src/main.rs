#[macro_use]
extern crate failure;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

extern crate chrono;
extern crate ctrlc;
extern crate log4rs;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate toml;

mod config_file;
mod display;
mod errors;
mod integrations;
mod network;
mod poll_loop;
mod remote_status;
mod signal;
mod translator;

use config_file::{config_path, Config};
use display::DisplaySender;
use failure::Error;
use integrations::jenkins_integration::JenkinsIntegration;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::process;
use std::sync::mpsc::channel;

lazy_static! {
    static ref HTTP_CLIENT: reqwest::blocking::Client = reqwest::blocking::Client::new();
}

fn init_logging(level: &str) -> Result<(), Error> {
    let level_filter = level
        .parse::<LevelFilter>()
        .map_err(|_| format_err!("Unknown log level '{}'", level))?;
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level_filter))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        eprintln!("No config file at {:?}, using defaults.", path);
    }
    match Config::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Unable to use config file {:?}: {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    let config = load_config();
    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Failed to set up logging: {}", e);
        process::exit(1);
    }

    let (shutdown_tx, shutdown_rx) = channel();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(());
    }) {
        error!("Unable to install the Ctrl-C handler: {}", e);
        process::exit(1);
    }

    info!(
        "Watching job '{}' on {} every {}s, sending to {}:{}.",
        config.job_name,
        config.jenkins_base_url,
        config.poll_interval_secs,
        config.display_host,
        config.display_port
    );

    let jenkins = JenkinsIntegration::new(
        &config.jenkins_base_url,
        &config.job_name,
        config.request_timeout(),
    );
    let sender = DisplaySender::new(config.display_endpoint());
    let last_signal = poll_loop::run(&jenkins, &sender, config.poll_interval(), &shutdown_rx);
    info!("Last signal sent to {}:{}: {}", sender.endpoint().host, sender.endpoint().port, last_signal);
}
