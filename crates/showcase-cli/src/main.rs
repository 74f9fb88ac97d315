use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use showcase_core::{Showcase, ShowcaseConfig};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("showcase")
        .version(showcase_core::VERSION)
        .about("Run the fixed-order showcase and print each step")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding the default run values"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("info")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .help("Log level when RUST_LOG is not set"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the run summary as JSON after the run"),
        )
}

/// Plain-text log lines; colour only when `ansi` is set
fn log_subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .finish()
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let ansi = std::io::stdout().is_terminal();
    log_subscriber(filter, std::io::stdout, ansi).init();
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<ShowcaseConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => ShowcaseConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ShowcaseConfig::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map_or("info", String::as_str);
    init_tracing(level);

    let config = load_config(&matches)?;
    tracing::debug!("Configuration: {:?}", config);

    let showcase = Showcase::new(config);
    let summary = showcase
        .run(&mut std::io::stdout())
        .await
        .context("showcase run failed")?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_test_utils::CapturedLogs;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn defaults_without_arguments() {
        let matches = cli().try_get_matches_from(["showcase"]).unwrap();
        assert_eq!(
            matches.get_one::<String>("log-level").map(String::as_str),
            Some("info")
        );
        assert!(!matches.get_flag("json"));
        assert_eq!(load_config(&matches).unwrap(), ShowcaseConfig::new());
    }

    #[test]
    fn parses_all_flags() {
        let matches = cli()
            .try_get_matches_from([
                "showcase",
                "--config",
                "run.toml",
                "--log-level",
                "debug",
                "--json",
            ])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("config"),
            Some(&PathBuf::from("run.toml"))
        );
        assert!(matches.get_flag("json"));
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(cli()
            .try_get_matches_from(["showcase", "--log-level", "loud"])
            .is_err());
    }

    #[test]
    fn redirected_log_lines_are_plain_text() {
        let logs = CapturedLogs::new();
        let subscriber = log_subscriber(EnvFilter::new("info"), logs.clone(), false);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(operation = "area", "Calling area");
        });

        let text = logs.contents();
        assert!(text.contains("INFO Calling area operation=\"area\""));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn log_level_filter_applies() {
        let logs = CapturedLogs::new();
        let subscriber = log_subscriber(EnvFilter::new("warn"), logs.clone(), false);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Calling area");
            tracing::warn!("Release failed");
        });

        let text = logs.contents();
        assert!(!text.contains("Calling area"));
        assert!(text.contains("Release failed"));
    }

    #[test]
    fn missing_config_file_is_reported() {
        let matches = cli()
            .try_get_matches_from(["showcase", "--config", "/no/such/showcase.toml"])
            .unwrap();
        let err = load_config(&matches).unwrap_err();
        assert!(err.to_string().contains("failed to load config"));
    }
}
