use agrovision::cli::{commands, output::Output, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter env var; falls back to warnings only, or debug with `--verbose`.
const LOG_ENV: &str = "AGRO_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "agrovision=debug,agrovision_core=debug"
    } else {
        "agrovision=warn,agrovision_core=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = commands::run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
