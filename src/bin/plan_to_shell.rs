//! Builds a building shell from a floor-plan JSON file and writes it as OBJ.
//!
//! Usage:
//! ```text
//! plan-to-shell <plan.json> [--config <config.json>] [--output <shell.obj>]
//! ```
//!
//! Logging defaults to WARN for everything and INFO for planshell; override
//! with `RUST_LOG`.

use std::env;
use std::fs::{self, File};
use std::process::ExitCode;

use planshell::config::BuildConfig;
use planshell::kernel::{PrismKernel, PrismSolid};
use planshell::operations::BuildShell;
use planshell::plan::parse_plan_json;
use planshell::tessellation::{export_obj, ObjGroup, TessellateSolid, TriangleMesh};
use tracing::{error, info};

struct Args {
    plan: String,
    config: Option<String>,
    output: String,
}

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planshell=info".parse().unwrap_or_default())
        .add_directive("plan_to_shell=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>, String> {
    let mut plan = None;
    let mut config = None;
    let mut output = String::from("shell.obj");
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => config = Some(args.next().ok_or("--config needs a path")?),
            "--output" => output = args.next().ok_or("--output needs a path")?,
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ => {
                if plan.is_some() {
                    return Err(format!("unexpected argument {arg}"));
                }
                plan = Some(arg);
            }
        }
    }
    let plan = plan.ok_or("missing plan file")?;
    Ok(Some(Args {
        plan,
        config,
        output,
    }))
}

fn run(args: &Args) -> planshell::Result<()> {
    let config = match &args.config {
        Some(path) => BuildConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => BuildConfig::default(),
    };
    let min_area = config.tolerances.curve * config.tolerances.curve;
    let plan = parse_plan_json(&fs::read_to_string(&args.plan)?)?;
    info!(plan = %args.plan, rooms = plan.rooms.len(), "loaded plan");

    let shell = BuildShell::new(config).execute(&PrismKernel, plan)?;
    for subject in &shell.skipped_openings {
        info!(%subject, "opening skipped");
    }

    let walls = mesh(&shell.walls, min_area)?;
    let floor = mesh(&shell.floor, min_area)?;
    let ceiling = mesh(&shell.ceiling, min_area)?;

    export_obj(
        File::create(&args.output)?,
        &[
            ObjGroup { name: "walls", mesh: &walls },
            ObjGroup { name: "floor", mesh: &floor },
            ObjGroup { name: "ceiling", mesh: &ceiling },
        ],
    )?
    .sync_all()?;
    info!(
        output = %args.output,
        triangles = walls.triangle_count() + floor.triangle_count() + ceiling.triangle_count(),
        wall_volume = shell.walls.iter().map(PrismSolid::volume).sum::<f64>(),
        "wrote shell"
    );
    Ok(())
}

fn mesh(solids: &[PrismSolid], min_area: f64) -> planshell::Result<TriangleMesh> {
    let mut combined = TriangleMesh::default();
    for solid in solids {
        combined.merge(&TessellateSolid::new(solid, min_area).execute()?)?;
    }
    Ok(combined)
}

fn print_usage() {
    eprintln!(
        "Usage: plan-to-shell <plan.json> [--config <config.json>] [--output <shell.obj>]\n\
         \n\
         Options:\n\
         \x20 --config <path>   Build parameters as JSON (defaults: millimetres)\n\
         \x20 --output <path>   Output OBJ file (default: shell.obj)"
    );
}
