#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp config file and return its path
pub fn write_config(name: &str, content: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, content).expect("write config");
    p
}
