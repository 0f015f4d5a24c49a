use clap::Parser;
use mavkus_launcher::cli::{self, Cli};
use mavkus_launcher::error::LauncherError;
use mavkus_launcher::{config, gate, install, launch};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "CLI arguments parsed");

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!(%err, "Launcher aborted");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32, LauncherError> {
    if cli.skip_install {
        info!("Skipping dependency install");
    } else {
        let manifest = cli::expand_path(&cli.requirements);
        install::install_requirements(&cli.python, &manifest).await?;
    }

    let explicit = cli.env_file.as_deref().map(cli::expand_path);
    let env = config::resolve(&config::launcher_dir(), explicit.as_deref())?;
    match &env.source {
        Some(path) => println!("✅ Environment loaded from {}", path.display()),
        None => println!("⚠️ No .env file found; using the process environment"),
    }

    let report = gate::GateReport::evaluate(&env);
    gate::print_report(&report);
    if !report.passed() {
        gate::print_remediation();
        return Err(LauncherError::MissingCredential {
            key: gate::REQUIRED_KEY,
        });
    }

    launch::print_banner();
    let spec = launch::LaunchSpec::server(&cli.python, &cli.entry, cli.reload);
    let code = launch::run(&spec, &env).await?;
    Ok(code)
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
