use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

// Copy the config file from /src to the output directory, next to the resulting executable
pub fn main() {
    println!("cargo:rerun-if-changed=src/config.toml");

    let cargo_manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").unwrap_or(OsString::from("no_manifest_dir"));
    let output_dir = env::var_os("OUT_DIR").unwrap_or(OsString::from("no_output_dir"));
    let exe_dir = match Path::new(&output_dir).ancestors().nth(3) {
        Some(dir) => dir.to_path_buf(),
        None => {
            println!("cargo:warning=Unable to locate the target directory from {:?}", output_dir);
            return;
        }
    };

    let mut config_file = PathBuf::new();
    config_file.push(&cargo_manifest_dir);
    config_file.push("src");
    config_file.push("config.toml");

    let dest_file = exe_dir.join("config.toml");
    match fs::copy(&config_file, &dest_file) {
        Ok(_) => println!("Copied config file successfully from {:?} to {:?}", config_file, dest_file),
        Err(e) => println!("Failed to copy config file from {:?} to {:?}: {:?}", config_file, dest_file, e),
    }
}
