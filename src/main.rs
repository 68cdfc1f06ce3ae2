use std::process::ExitCode;

use cavity_flow::{config, Backend, CavityError, Result, Simulation};
use log::{error, warn};

const USAGE: &str = "usage: cavity-flow [grid_size] [timesteps] [--backend serial|parallel] [--config path]";

/// Command-line overrides on top of the config file.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    grid_size: Option<usize>,
    timesteps: Option<usize>,
    backend: Option<Backend>,
    config: Option<String>,
    help: bool,
}

/// Parse `[grid_size] [timesteps] [--backend B] [--config PATH] [--help]`.
fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut positionals = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--backend" | "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CavityError::InvalidParameter(format!("{arg} needs a value")))?;
                if arg == "--backend" {
                    cli.backend = Some(value.parse()?);
                } else {
                    cli.config = Some(value.clone());
                }
            }
            _ => positionals.push(arg),
        }
    }
    let mut positionals = positionals.into_iter();
    if let Some(n) = positionals.next() {
        cli.grid_size = Some(parse_count("grid_size", n)?);
    }
    if let Some(ts) = positionals.next() {
        cli.timesteps = Some(parse_count("timesteps", ts)?);
    }
    if let Some(extra) = positionals.next() {
        return Err(CavityError::InvalidParameter(format!("unexpected argument: {extra}")));
    }
    Ok(cli)
}

fn parse_count(name: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| CavityError::InvalidParameter(format!("{name} must be a non-negative integer, got {value}")))
}

fn run(args: &[String]) -> Result<()> {
    let cli = parse_args(args)?;
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };
    if let Some(n) = cli.grid_size {
        cfg.grid_size = n;
    }
    if let Some(ts) = cli.timesteps {
        cfg.timesteps = ts;
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }

    let mut sim = Simulation::with_params(cfg.grid_size, cfg.timesteps, cfg.backend, cfg.solver_params())?
        .with_log_interval(cfg.log_interval);

    let stability = sim.stability();
    if !stability.is_stable() {
        warn!(
            "explicit scheme likely unstable: diffusion number {:.3}, Courant number {:.3}",
            stability.diffusion_number, stability.courant_number
        );
    }

    let elapsed = sim.compute();
    let summary = sim.summary();

    println!(
        "Cavity flow: n={} timesteps={} backend={}",
        sim.grid_size(),
        sim.timesteps(),
        sim.backend()
    );
    println!("  elapsed      {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  u range      [{:+.6}, {:+.6}]", summary.u.min, summary.u.max);
    println!("  v range      [{:+.6}, {:+.6}]", summary.v.min, summary.v.max);
    println!("  p range      [{:+.6}, {:+.6}]", summary.p.min, summary.p.max);
    println!("  kinetic      {:.6e}", summary.kinetic_energy);
    println!("  max |div|    {:.6e}", summary.max_divergence);
    if !summary.finite {
        warn!("solution contains non-finite values");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
