use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use rednote_dash::api::{Backend, Dispatcher, HttpBackend};
use rednote_dash::config::Config;
use rednote_dash::prefs::PreferencesStore;
use rednote_dash::ui::{self, AppState};
use std::process;
use std::sync::Arc;
use std::time::Instant;

pub fn run(cli: Cli) {
    let result = match cli.command {
        Some(Commands::InitConfig) => handle_init_config(cli.config.as_deref()),
        Some(Commands::Status) => load_config(&cli).and_then(|config| handle_status(&config)),
        None => launch(&cli),
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "exiting with error");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Config from `--config` or the default location, with CLI overrides applied
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    Ok(config)
}

fn launch(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let backend = HttpBackend::new(&config.api.base_url)
        .with_context(|| format!("Invalid backend URL: {}", config.api.base_url))?;
    let prefs = PreferencesStore::default_location()?;

    let mut state = AppState::new(config, Dispatcher::new(Arc::new(backend)), prefs);

    if let Some(account) = &cli.account {
        state.select_account(account);
    }
    if let Some(view) = &cli.view {
        state.navigate_by_name(view)?;
    }

    state.start(Instant::now());
    let result = ui::run_ui(&mut state).context("Terminal UI failed");
    state.shutdown();

    result
}

fn handle_init_config(path: Option<&std::path::Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    if path.exists() {
        let cfg = Config::load_from(&path)?;
        println!("Config loaded successfully from {}", path.display());
        println!("{:#?}", cfg);
    } else {
        println!("Config missing, creating default at {}", path.display());
        Config::default().save_to(&path)?;
    }

    Ok(())
}

fn handle_status(config: &Config) -> Result<()> {
    let backend = HttpBackend::new(&config.api.base_url)?;
    println!("Backend: {}", backend.base_url());

    let registry = backend
        .accounts()
        .context("Backend did not answer /api/accounts")?;
    println!(
        "Accounts: {} ({})",
        registry.accounts.len(),
        registry
            .accounts
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Personas: {}", registry.personas.len());

    match backend.analytics() {
        Ok(snapshot) => {
            println!("Total posts: {}", snapshot.total_posts());
            println!("This month: {}", snapshot.month_posts());
            println!("Avg score: {:.1}", snapshot.avg_score());
        }
        Err(e) => println!("Analytics unavailable: {}", e),
    }

    Ok(())
}
