mod bootstrap;

use anyhow::Result;
use stats_core::formatting::banner;
use stats_core::settings::Settings;
use stats_data::analysis::{run_analysis, RunOutcome};
use stats_data::storage::FsReportStore;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Training Stats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, Output dir: {}",
        settings.input.display(),
        settings.output_dir.display()
    );

    println!("{}\n", banner());

    let store = FsReportStore::new(&settings.output_dir);
    let outcome = run_analysis(&settings.input, &store)?;

    for line in outcome.lines() {
        println!("{}", line);
    }

    if let RunOutcome::Completed(_) = outcome {
        println!(
            "¡Análisis completado! Verifique la carpeta '{}' para los archivos generados.",
            settings.output_dir.display()
        );
    }

    Ok(())
}
