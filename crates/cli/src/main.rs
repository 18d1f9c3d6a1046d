mod groups;

use anyhow::Context;
use betafit_beta_binomial::{Fit, fit};
use betafit_solvers::optimization::newton::Config;
use clap::Parser;

/// Estimate Beta-Binomial prior parameters from per-group counts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(
        value_name = "GROUPS",
        help = "Comma-separated `views:clicks` pairs, e.g. `1:0,2:0,10:2`"
    )]
    groups: String,

    #[arg(long, default_value_t = 2000, help = "Maximum Newton iterations")]
    max_iters: usize,

    #[arg(
        long,
        value_name = "ALPHA,BETA",
        value_delimiter = ',',
        num_args = 2,
        default_values_t = [10.0, 10.0],
        allow_negative_numbers = true,
        help = "Initial (alpha, beta); both must be positive"
    )]
    start: Vec<f64>,

    #[arg(
        long,
        default_value_t = 1000,
        help = "Iterations between progress lines when --debug is set"
    )]
    report_interval: usize,

    #[arg(long, help = "Log solver progress and a fit summary")]
    debug: bool,

    #[arg(long, help = "Print the fit as JSON")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let groups = groups::parse(&cli.groups).context("cannot parse GROUPS")?;
    let config = Config::new(cli.max_iters, &cli.start, cli.report_interval, cli.debug)
        .context("invalid solver settings")?;

    log::debug!("fitting {} groups with {config:?}", groups.trials.len());

    let fitted = fit(&groups.trials, &groups.successes, &config)
        .context("no solution for Beta-Binomial parameter estimation")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&fitted)?);
    } else {
        print_report(&fitted);
    }

    Ok(())
}

fn print_report(fitted: &Fit) {
    let summary = &fitted.summary;

    println!("status:        {:?}", fitted.status);
    println!("iterations:    {}", fitted.iters);
    println!("alpha:         {:.6}", fitted.alpha);
    println!("beta:          {:.6}", fitted.beta);
    println!("objective:     {:.6}", fitted.objective);
    match summary.observed_rate {
        Some(rate) => println!(
            "observed rate: {rate:.6} ({} / {} over {} groups)",
            summary.total_successes, summary.total_trials, summary.groups
        ),
        None => println!("observed rate: undefined (no trials)"),
    }
    println!("smoothed rate: {:.6}", summary.smoothed_rate);
}
