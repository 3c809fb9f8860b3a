mod commands;
mod dispatch;
mod helpers;

use clap::Parser;
use cpmg_core::ExchangeError;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CPMG_LOG";

pub fn run_from_env() -> i32 {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let exchange_error = error.as_exchange_error();
            eprintln!("{}", exchange_error.diagnostic_line());
            exchange_error.exit_code()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "cpmg-rs",
    version,
    about = "Two-site exchange kernel for CPMG relaxation dispersion"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Print the free-precession and RF Liouvillians as JSON
    Liouvillian(commands::LiouvillianArgs),
    /// Print the 2HzNz equilibrium state and its per-site readout
    Equilibrium(commands::EquilibriumArgs),
    /// Print exchange-corrected peak positions (rad/s)
    Shift(commands::ExchangeArgs),
    /// Print exchange-corrected peak intensities
    Intensity(commands::IntensityArgs),
    /// Expand scalar couplings (Hz) into a weighted line list
    Multiplet(commands::MultipletArgs),
    /// Estimate the 15N longitudinal cross-correlated relaxation rate
    Etaz(commands::EtazArgs),
    /// Describe the parameters of an experiment
    Describe(commands::DescribeArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Liouvillian(args) => commands::run_liouvillian_command(args),
        CliCommand::Equilibrium(args) => commands::run_equilibrium_command(args),
        CliCommand::Shift(args) => commands::run_shift_command(args),
        CliCommand::Intensity(args) => commands::run_intensity_command(args),
        CliCommand::Multiplet(args) => commands::run_multiplet_command(args),
        CliCommand::Etaz(args) => commands::run_etaz_command(args),
        CliCommand::Describe(args) => commands::run_describe_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(ExchangeError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_exchange_error(&self) -> ExchangeError {
        match self {
            Self::Usage(message) => ExchangeError::invalid_input("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => ExchangeError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliError, parse_and_dispatch};
    use cpmg_core::{ExchangeError, ExchangeErrorCategory};

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("cpmg-rs")
            .chain(values.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let error = parse_and_dispatch(args(&["propagate"])).expect_err("unknown command");
        let exchange_error = error.as_exchange_error();
        assert_eq!(exchange_error.placeholder(), "INPUT.CLI_USAGE");
        assert_eq!(exchange_error.exit_code(), 2);
    }

    #[test]
    fn help_exits_successfully() {
        assert_eq!(parse_and_dispatch(args(&["--help"])).ok(), Some(0));
    }

    #[test]
    fn internal_errors_map_to_io_category() {
        let error = CliError::from(anyhow::anyhow!("disk unplugged"));
        let exchange_error = error.as_exchange_error();
        assert_eq!(exchange_error.category(), ExchangeErrorCategory::IoSystemError);
        assert_eq!(exchange_error.exit_code(), 3);

        let compute = CliError::Compute(ExchangeError::degenerate_exchange("RUN.X", "roots"));
        assert_eq!(compute.as_exchange_error().exit_code(), 4);
    }
}
