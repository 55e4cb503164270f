use std::io::Write;

use chrono::Utc;
use env_logger::{Builder, Env};

fn timestamped(level: log::Level, data: &str) -> String {
    format!(
        "[{}] {:<5} {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        data
    )
}

/// Installs the console logger. Defaults to `info`, `RUST_LOG` still wins.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                timestamped(record.level(), &record.args().to_string())
            )
        })
        .init();
}
