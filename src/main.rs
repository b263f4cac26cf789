use gwkit::{
    Result, args,
    args::MainArgs,
    config::{self, ConfigError},
    log, log_debug, log_error, log_info,
    process::ActionRunner,
    registry::{self, ServerStore},
    session::SessionState,
    tui,
};

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Registry to merge an import into. A missing registry starts empty and is
/// created at the path that was looked up.
fn open_registry_for_import(explicit: Option<&Path>) -> Result<(PathBuf, ServerStore)> {
    match config::resolve_config_path(explicit, config::SERVER_CONFIG_FILE) {
        Ok(path) => {
            let store = ServerStore::load(&path)?;
            Ok((path, store))
        }
        Err(ConfigError::NotFound(path)) => {
            log_info!("No server registry at {:?}, creating a new one", path);
            Ok((path, ServerStore::new()))
        }
        Err(err) => Err(err.into()),
    }
}

fn run_import(args: &MainArgs, hosts_file: &Path) -> Result<ExitCode> {
    let listing = fs::read_to_string(hosts_file)?;
    let (registry_path, mut store) = open_registry_for_import(args.server_config.as_deref())?;

    let imported = registry::import_hosts(&mut store, &listing)?;
    store.save(&registry_path)?;

    println!("Imported {} server(s) into {}", imported, registry_path.display());
    Ok(ExitCode::SUCCESS)
}

fn run_launcher(args: &MainArgs) -> Result<ExitCode> {
    let server_config = config::resolve_config_path(args.server_config.as_deref(), config::SERVER_CONFIG_FILE)?;
    let username_config = config::resolve_config_path(args.username_config.as_deref(), config::USERNAME_CONFIG_FILE)?;

    let store = ServerStore::load(&server_config)?;
    let session = SessionState::new(config::load_identity_list(&username_config)?)?;
    let mut runner = ActionRunner::new(args.test_mode);

    if let Err(err) = runner.init_credentials() {
        log_error!("Credential init failed: {}", err);
        eprintln!("⚠️  kinit failed: {}", err);
    }

    tui::run_launcher(store, session, runner, server_config)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = args::main_args();

    if args.debug {
        log::LOGGER.enable_debug();
        if let Err(err) = log::LOGGER.log_debug("Debug mode enabled") {
            eprintln!("❌ Failed to initialize debug logging: {}", err);
            return ExitCode::FAILURE;
        }
    }
    log_debug!("parsed arguments = {:?}", args);

    let result = match &args.import_file {
        Some(hosts_file) => run_import(&args, hosts_file),
        None => run_launcher(&args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            log_error!("{}", err);
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    };

    if let Err(err) = log::LOGGER.flush() {
        eprintln!("❌ Failed to flush debug log: {}", err);
    }
    exit_code
}

#[cfg(test)]
#[path = "test/main.rs"]
mod tests;
