use anyhow::Context;
use fingerbox::{assembly_report, default_config_path, init_logging, BoxAssembler, BoxConfig};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => BoxConfig::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => BoxConfig::load_or_default(&default_config_path())?,
    };

    let assembly = BoxAssembler::new().assemble(&config.spec)?;
    info!(
        panels = assembly.len(),
        width = config.spec.width,
        height = config.spec.height,
        depth = config.spec.depth,
        "box assembled"
    );

    let report = assembly_report(&assembly, config.export.spacing);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
