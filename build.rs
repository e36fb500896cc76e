use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` into `option_env!` at compile time
const FORWARDED_KEYS: &[&str] = &[
    "SEEDR_API_BASE",
    "RELOGIN_DELAY_MS",
    "SESSION_RESTORED_MS",
    "ENABLE_LOGGING",
    "DEFAULT_AUTH",
    "DEFAULT_USERNAME",
    "DEFAULT_PASSWORD",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=Could not read .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !FORWARDED_KEYS.contains(&key) {
            continue;
        }
        // The real environment wins over .env
        if env::var(key).is_err() {
            let value = value.trim().trim_matches('"');
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
