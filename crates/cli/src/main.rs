use anyhow::{Context, Result};
use auvgeom::prelude::{simulate, Auv, Controls, Polygon};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod parse;
mod provenance;

use demo::AuvSample;
use provenance::{write_sidecar, ControlsRecord, RunRecord};

/// Upper bound for `simulate --steps`; every state is kept in memory and written out.
const MAX_STEPS: i64 = 10_000_000;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Geometry primitives and AUV kinematics runner")]
struct Cmd {
    /// Optional run label; recorded in logs, reports and sidecars
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the classroom walkthrough as text
    Demo,
    /// Print the walkthrough results as JSON with provenance
    Report,
    /// Order points by bearing and print area and perimeter as JSON
    Polygon {
        /// Points as "x,y;x,y;..."
        #[arg(long, allow_hyphen_values = true)]
        points: String,
    },
    /// Integrate an AUV with constant controls and write the trajectory
    Simulate(SimArgs),
}

#[derive(clap::Args, Debug)]
struct SimArgs {
    #[arg(long)]
    out: String,
    #[arg(long, default_value = "AUV 1")]
    name: String,
    /// Initial position "x,y"
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    position: String,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    depth: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    heading: f64,
    /// Initial speed "vx,vy,vz"
    #[arg(long, default_value = "0,0,10", allow_hyphen_values = true)]
    speed: String,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    angular_speed: f64,
    /// Constant acceleration "ax,ay,az"
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    accel: String,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    angular_accel: f64,
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    dt: f64,
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=MAX_STEPS))]
    steps: u32,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => run_demo(),
        Action::Report => report(cmd.label),
        Action::Polygon { points } => polygon(&points),
        Action::Simulate(args) => simulate_to_file(&args, cmd.label),
    }
}

fn run_demo() -> Result<()> {
    tracing::info!("demo");
    for line in demo::run()?.lines() {
        println!("{line}");
    }
    Ok(())
}

fn report(label: Option<String>) -> Result<()> {
    tracing::info!(label = ?label, "report");
    let obj = serde_json::json!({
        "auvgeom_version": auvgeom::VERSION,
        "label": label,
        "results": demo::run()?,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn polygon_json(raw: &str) -> Result<serde_json::Value> {
    let poly = Polygon::new(parse::points(raw)?);
    let area = poly.area().context("polygon area")?;
    let perimeter = poly.perimeter().context("polygon perimeter")?;
    let signed_area = poly.signed_area()?;
    let ordered: Vec<[f64; 2]> = poly.points().iter().map(|p| [p.x, p.y]).collect();
    Ok(serde_json::json!({
        "points": ordered,
        "area": area,
        "perimeter": perimeter,
        "signed_area": signed_area,
    }))
}

fn polygon(raw: &str) -> Result<()> {
    let obj = polygon_json(raw)?;
    tracing::info!(area = %obj["area"], perimeter = %obj["perimeter"], "polygon");
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn controls(args: &SimArgs) -> Result<Controls> {
    Ok(Controls {
        accel: parse::vec3(&args.accel)?,
        angular_accel: args.angular_accel,
    })
}

fn trajectory(args: &SimArgs) -> Result<Vec<AuvSample>> {
    let start = Auv::new(
        args.name.as_str(),
        parse::point(&args.position)?,
        args.depth,
        args.heading,
        parse::vec3(&args.speed)?,
        args.angular_speed,
    );
    Ok(simulate(&start, controls(args)?, args.dt, args.steps as usize)
        .enumerate()
        .map(|(i, s)| AuvSample::at(&s, i as f64 * args.dt))
        .collect())
}

fn simulate_to_file(args: &SimArgs, label: Option<String>) -> Result<()> {
    tracing::info!(name = %args.name, steps = args.steps, dt = args.dt, out = %args.out, label = ?label, "simulate");
    let samples = trajectory(args)?;

    let out_path = Path::new(&args.out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&samples)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let c = controls(args)?;
    let record = RunRecord::from_samples(
        label,
        ControlsRecord {
            accel: [c.accel.x, c.accel.y, c.accel.z],
            angular_accel: c.angular_accel,
        },
        args.dt,
        &samples,
        out_path,
    )
    .context("empty trajectory")?;
    let sidecar = write_sidecar(out_path, &record)?;
    tracing::info!(
        x = record.final_state.x,
        y = record.final_state.y,
        depth = record.final_state.depth,
        heading = record.final_state.heading,
        sidecar = %sidecar.display(),
        "final_state"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sim_args(out: String) -> SimArgs {
        SimArgs {
            out,
            name: "AUV 1".into(),
            position: "0,0".into(),
            depth: 0.0,
            heading: 0.0,
            speed: "0,0,10".into(),
            angular_speed: 0.0,
            accel: "0,0,0".into(),
            angular_accel: 0.0,
            dt: 1.0,
            steps: 3,
        }
    }

    #[test]
    fn cli_parses_simulate_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "--label", "t1", "simulate", "--out", "o.json", "--speed", "-1,0,0", "--steps", "5",
        ])
        .unwrap();
        assert_eq!(cmd.label.as_deref(), Some("t1"));
        match cmd.action {
            Action::Simulate(a) => {
                assert_eq!(a.speed, "-1,0,0");
                assert_eq!(a.steps, 5);
                assert_eq!(a.dt, 1.0);
                assert_eq!(a.name, "AUV 1");
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn cli_bounds_step_count() {
        let max = MAX_STEPS.to_string();
        let over = (MAX_STEPS + 1).to_string();
        assert!(Cmd::try_parse_from(["cli", "simulate", "--out", "o.json", "--steps", &max]).is_ok());
        assert!(Cmd::try_parse_from(["cli", "simulate", "--out", "o.json", "--steps", &over]).is_err());
        assert!(Cmd::try_parse_from(["cli", "simulate", "--out", "o.json", "--steps", "-1"]).is_err());
    }

    #[test]
    fn polygon_json_orders_unit_square() {
        let v = polygon_json("0,1;0,0;1,0;1,1").unwrap();
        assert_eq!(v["area"], 1.0);
        assert_eq!(v["perimeter"], 4.0);
        assert_eq!(v["signed_area"], -1.0);
        assert_eq!(v["points"][0], serde_json::json!([0.0, 0.0]));
        assert!(polygon_json("0,0;1,1").is_err());
    }

    #[test]
    fn trajectory_dives_ten_per_second() {
        let samples = trajectory(&sim_args(String::new())).unwrap();
        assert_eq!(samples.len(), 4);
        let depths: Vec<f64> = samples.iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(samples[3].t, 3.0);
        assert!(samples.iter().all(|s| s.x == 0.0 && s.y == 0.0));
    }

    #[test]
    fn simulate_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("dive.json");
        let args = sim_args(out.to_string_lossy().into_owned());
        simulate_to_file(&args, Some("t2".into())).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 4);
        assert_eq!(parsed[3]["depth"], 30.0);
        let prov = dir.path().join("runs").join("dive.provenance.json");
        let meta: serde_json::Value =
            serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(meta["steps"], 3);
        assert_eq!(meta["label"], "t2");
        assert_eq!(meta["final_state"]["depth"], 30.0);
    }
}
