use std::io::{BufRead, Write};

use anyhow::Context;

use wareflow_cli::{CliConfig, Mode, Session, WarehouseSeed};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env().with_args(std::env::args().skip(1));
    wareflow_observability::init(config.log_format);

    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let seed = match &config.seed_path {
        Some(path) => WarehouseSeed::from_json_file(path)
            .with_context(|| format!("loading seed from {}", path.display()))?,
        None => WarehouseSeed::default_layout(),
    };
    let warehouse = seed.build().context("building warehouse from seed")?;
    let mut session = Session::new(warehouse);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    if config.mode == Mode::Api {
        writeln!(stdout, "{}", serde_json::json!({ "status": "ready" }))?;
        stdout.flush()?;
    }
    tracing::info!(mode = ?config.mode, "session started");

    for line in stdin.lock().lines() {
        let line = line.context("reading command")?;
        if let Some(response) = session.handle_line(&line) {
            writeln!(stdout, "{response}")?;
            stdout.flush()?;
        }
    }

    tracing::info!(
        pending = session.coordinator().pending_len(),
        ready = session.coordinator().ready_len(),
        "session closed"
    );
    Ok(())
}
