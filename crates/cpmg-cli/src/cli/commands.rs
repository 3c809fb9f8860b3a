use super::CliError;
use super::dispatch::{
    DEFAULT_EXPERIMENT, experiment_descriptor, experiment_names, render_experiment_help,
};
use super::helpers::{
    EquilibriumReport, EtazReport, IntensityReport, LiouvillianReport, ShiftReport,
    load_parameters, print_json,
};
use clap::Args;
use cpmg_core::common::{Nucleus, ppm_to_rads};
use cpmg_core::{
    ExchangeError, ExchangeParameters, TwoSiteExchangeInput, calc_multiplet,
    calculate_shift_ex_2st, compute_2hznz_eq, compute_liouvillians, compute_nh_etaz,
    correct_intensities, get_atrz,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub(super) struct LiouvillianArgs {
    /// JSON file with exchange parameters; missing fields use defaults
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,
    #[command(flatten)]
    overrides: ParameterOverrides,
}

/// Individual parameters taking precedence over the parameter file.
#[derive(Debug, Default, Args)]
pub(super) struct ParameterOverrides {
    #[arg(long, allow_negative_numbers = true)]
    pb: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    kex: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    dw: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    r_nxy: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    dr_nxy: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    r_nz: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    r_2hznz: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    etaxy: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    etaz: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    j_hn: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    dj_hn: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    cs_offset: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    w1: Option<f64>,
}

impl ParameterOverrides {
    fn apply(&self, params: ExchangeParameters) -> ExchangeParameters {
        ExchangeParameters {
            pb: self.pb.unwrap_or(params.pb),
            kex: self.kex.unwrap_or(params.kex),
            dw: self.dw.unwrap_or(params.dw),
            r_nxy: self.r_nxy.unwrap_or(params.r_nxy),
            dr_nxy: self.dr_nxy.unwrap_or(params.dr_nxy),
            r_nz: self.r_nz.unwrap_or(params.r_nz),
            r_2hznz: self.r_2hznz.unwrap_or(params.r_2hznz),
            etaxy: self.etaxy.unwrap_or(params.etaxy),
            etaz: self.etaz.unwrap_or(params.etaz),
            j_hn: self.j_hn.unwrap_or(params.j_hn),
            dj_hn: self.dj_hn.unwrap_or(params.dj_hn),
            cs_offset: self.cs_offset.unwrap_or(params.cs_offset),
            w1: self.w1.unwrap_or(params.w1),
        }
    }
}

#[derive(Debug, Args)]
pub(super) struct EquilibriumArgs {
    /// Fractional population of state B
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pb: f64,
}

#[derive(Debug, Args)]
pub(super) struct ExchangeArgs {
    /// Fractional population of state B
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pb: f64,
    /// Exchange rate (1/s)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    kex: f64,
    /// Chemical shift difference (rad/s)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dw: f64,
    /// Transverse relaxation rate of state A (1/s)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    r_ixy: f64,
    /// Transverse relaxation rate difference between states B and A (1/s)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dr_ixy: f64,
}

impl ExchangeArgs {
    fn as_input(&self) -> TwoSiteExchangeInput {
        TwoSiteExchangeInput::new(self.pb, self.kex, self.dw, self.r_ixy, self.dr_ixy)
    }
}

#[derive(Debug, Args)]
pub(super) struct IntensityArgs {
    /// Longitudinal magnetization of state A
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    magz_a: f64,
    /// Longitudinal magnetization of state B
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    magz_b: f64,
    #[command(flatten)]
    exchange: ExchangeArgs,
}

#[derive(Debug, Args)]
pub(super) struct MultipletArgs {
    /// Scalar coupling in Hz; repeat for every coupled spin
    #[arg(long = "coupling", value_name = "HZ", allow_negative_numbers = true)]
    couplings: Vec<f64>,
    /// Starting line frequency in rad/s; repeat for several lines
    #[arg(long = "start", value_name = "RADS", allow_negative_numbers = true)]
    start: Vec<f64>,
}

#[derive(Debug, Args)]
pub(super) struct EtazArgs {
    /// Longitudinal 15N relaxation rate (1/s)
    #[arg(long, default_value_t = 1.5)]
    r_nz: f64,
    /// Proton Larmor frequency of the spectrometer (MHz)
    #[arg(long = "b0", value_name = "MHZ")]
    proton_larmor_mhz: f64,
}

#[derive(Debug, Args)]
pub(super) struct DescribeArgs {
    /// Experiment name
    #[arg(default_value = DEFAULT_EXPERIMENT)]
    name: String,
}

pub(super) fn run_liouvillian_command(args: LiouvillianArgs) -> Result<i32, CliError> {
    let base = match &args.params {
        Some(path) => {
            debug!(path = %path.display(), "loading exchange parameters");
            load_parameters(path)?
        }
        None => ExchangeParameters::default(),
    };
    let params = args.overrides.apply(base);
    params.validate().map_err(CliError::Compute)?;

    info!(pb = params.pb, kex = params.kex, w1 = params.w1, "assembling liouvillians");
    let liouvillians = compute_liouvillians(&params);
    print_json(&LiouvillianReport::from(&liouvillians))
}

pub(super) fn run_equilibrium_command(args: EquilibriumArgs) -> Result<i32, CliError> {
    cpmg_core::domain::validate_population(args.pb).map_err(CliError::Compute)?;

    let state = compute_2hznz_eq(args.pb);
    let readout = get_atrz(&state).map_err(CliError::Compute)?;
    debug!(magz_a = readout.0, magz_b = readout.1, "equilibrium readout");
    print_json(&EquilibriumReport::new(&state, readout))
}

pub(super) fn run_shift_command(args: ExchangeArgs) -> Result<i32, CliError> {
    let input = args.as_input();
    let (nu1, nu2) = calculate_shift_ex_2st(&input).map_err(CliError::Compute)?;
    info!(nu1, nu2, "exchange-corrected shifts");
    print_json(&ShiftReport { nu1, nu2 })
}

pub(super) fn run_intensity_command(args: IntensityArgs) -> Result<i32, CliError> {
    let input = args.exchange.as_input();
    let (magz_a, magz_b) =
        correct_intensities(args.magz_a, args.magz_b, &input).map_err(CliError::Compute)?;
    info!(magz_a, magz_b, "exchange-corrected intensities");
    print_json(&IntensityReport { magz_a, magz_b })
}

pub(super) fn run_multiplet_command(args: MultipletArgs) -> Result<i32, CliError> {
    let start = (!args.start.is_empty()).then_some(args.start.as_slice());
    let lines = calc_multiplet(&args.couplings, start).map_err(CliError::Compute)?;
    debug!(
        couplings = args.couplings.len(),
        lines = lines.len(),
        "expanded multiplet"
    );
    print_json(&lines)
}

pub(super) fn run_etaz_command(args: EtazArgs) -> Result<i32, CliError> {
    if !args.proton_larmor_mhz.is_finite() || args.proton_larmor_mhz <= 0.0 {
        return Err(CliError::Compute(ExchangeError::invalid_parameter(
            "INPUT.FIELD",
            format!(
                "proton Larmor frequency must be positive, got {}",
                args.proton_larmor_mhz
            ),
        )));
    }

    let ppm_to_rads = ppm_to_rads(Nucleus::N15, args.proton_larmor_mhz);
    let etaz = compute_nh_etaz(args.r_nz, ppm_to_rads);
    print_json(&EtazReport { ppm_to_rads, etaz })
}

pub(super) fn run_describe_command(args: DescribeArgs) -> Result<i32, CliError> {
    let descriptor = experiment_descriptor(&args.name).ok_or_else(|| {
        CliError::Usage(format!(
            "unknown experiment '{}'; available: {}",
            args.name,
            experiment_names().join(", ")
        ))
    })?;

    print!("{}", render_experiment_help(descriptor));
    Ok(0)
}
