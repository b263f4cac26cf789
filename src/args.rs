use clap::{Arg, ArgMatches, Command};
use std::{ffi::OsString, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainArgs {
    pub debug: bool,
    pub test_mode: bool,
    pub server_config: Option<PathBuf>,
    pub username_config: Option<PathBuf>,
    /// Hosts listing passed to the `import` subcommand.
    pub import_file: Option<PathBuf>,
}

pub fn build_cli_command() -> Command {
    Command::new("gwkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Incremental-search launcher for remote login sessions.")
        .propagate_version(true)
        .arg(
            Arg::new("server_config")
                .short('s')
                .long("server-config")
                .value_name("PATH")
                .help("Server registry document (default: ~/.gwkit/server_config.json, then ./server_config.json)")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("username_config")
                .short('u')
                .long("username-config")
                .value_name("PATH")
                .help("Login identity list (default: ~/.gwkit/username_config.json, then ./username_config.json)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("test")
                .short('t')
                .long("test")
                .help("Dry-run mode: log commands instead of executing them")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging to ~/.gwkit/logs/gwkit.log")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("import").about("Merge a `hostname tag...` hosts listing into the server registry").arg(
                Arg::new("hosts_file")
                    .value_name("HOSTS_FILE")
                    .help("Hosts listing to import")
                    .required(true)
                    .value_parser(clap::value_parser!(PathBuf)),
            ),
        )
}

fn main_args_from_matches(matches: &ArgMatches) -> MainArgs {
    let import_file = match matches.subcommand() {
        Some(("import", sub_matches)) => sub_matches.get_one::<PathBuf>("hosts_file").cloned(),
        _ => None,
    };

    MainArgs {
        debug: matches.get_flag("debug"),
        test_mode: matches.get_flag("test"),
        server_config: matches.get_one::<PathBuf>("server_config").cloned(),
        username_config: matches.get_one::<PathBuf>("username_config").cloned(),
        import_file,
    }
}

/// Parse an explicit argument list. Exits with clap's usage message on error.
pub fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(args);
    main_args_from_matches(&matches)
}

/// Parses the process command line using clap.
pub fn main_args() -> MainArgs {
    let matches = build_cli_command().get_matches();
    main_args_from_matches(&matches)
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
