use anyhow::Context;
use cursorfont_gen::{Config, pipeline};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let result = pipeline::run(&config).with_context(|| {
        format!(
            "generating {} from {}",
            config.output_path.display(),
            config.input_path.display()
        )
    });

    match result {
        Ok(count) => tracing::info!("generated {} cursor constants", count),
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
