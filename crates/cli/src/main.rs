use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use encircle::figure::{Figure, Scene};
use encircle::geom2::rand::{draw_point_cloud, CloudCfg, PointCount, ReplayToken};
use encircle::geom2::Tol;
use encircle::Vec2;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;
mod render;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-set figure renderer and reporter")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render the figure in a window; blocks until the window closes
    Show {
        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Print the resolved figure as JSON, no window
    Report {
        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Write a sampled point cloud to CSV plus a provenance sidecar
    Sample {
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = 2015)]
        seed: u64,
        #[arg(long, default_value_t = 24)]
        count: usize,
        #[arg(long, default_value_t = 2.0)]
        spread: f64,
        /// Exact distance for pinned samples
        #[arg(long, default_value_t = 1.5)]
        ring_radius: f64,
        /// How many samples to pin at exactly --ring-radius
        #[arg(long, default_value_t = 0)]
        ring: usize,
    },
}

#[derive(Args)]
struct SceneArgs {
    /// CSV with x,y columns; a cloud is sampled when omitted
    #[arg(long)]
    input: Option<String>,
    /// Reference point "x,y"; enables the circle, hull, and highlights
    #[arg(long, value_parser = parse_xy)]
    center: Option<Vec2<f64>>,
    /// Circle radius around --center
    #[arg(long, default_value_t = 1.5)]
    radius: f64,
    /// Boundary tolerance for |distance - radius|
    #[arg(long, default_value_t = 1e-6)]
    eps: f64,
    /// Sampling: replay seed
    #[arg(long, default_value_t = 2015)]
    seed: u64,
    /// Sampling: point count
    #[arg(long, default_value_t = 24)]
    count: usize,
    /// Sampling: scatter radius around the center
    #[arg(long, default_value_t = 2.0)]
    spread: f64,
    /// Sampling: how many points to pin exactly on the circle
    #[arg(long, default_value_t = 4)]
    ring: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Show { scene } => show(scene),
        Action::Report { scene } => report(scene),
        Action::Sample {
            out,
            seed,
            count,
            spread,
            ring_radius,
            ring,
        } => sample(out, seed, count, spread, ring_radius, ring),
    }
}

fn parse_xy(s: &str) -> Result<Vec2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn build_figure(args: &SceneArgs) -> Result<Figure> {
    let points = match &args.input {
        Some(path) => io::read_points_csv(path)?,
        None => {
            let cfg = CloudCfg {
                count: PointCount::Fixed(args.count),
                spread: args.spread,
                ring_radius: args.radius,
                ring_count: if args.center.is_some() { args.ring } else { 0 },
            };
            let mut pts = draw_point_cloud(
                cfg,
                ReplayToken {
                    seed: args.seed,
                    index: 0,
                },
            );
            // The sampler works around the origin; shift onto the reference point.
            if let Some(center) = args.center {
                for p in &mut pts {
                    *p += center;
                }
            }
            pts
        }
    };
    let mut scene = Scene::new(points);
    if let Some(center) = args.center {
        scene = scene.with_circle(center, args.radius);
    }
    let tol = Tol {
        eps_circle: args.eps,
        ..Tol::default()
    };
    let fig = scene.figure(tol);
    tracing::info!(
        points = fig.scatter.len(),
        hull = fig.hull.len(),
        on_circle = fig.on_circle.len(),
        "figure"
    );
    Ok(fig)
}

fn show(args: SceneArgs) -> Result<()> {
    let fig = build_figure(&args)?;
    render::run_window("encircle", fig);
    Ok(())
}

#[derive(serde::Serialize)]
struct Report {
    points: usize,
    circle: Option<ReportCircle>,
    hull: Vec<[f64; 2]>,
    on_circle: Vec<usize>,
    spokes: Vec<[[f64; 2]; 2]>,
}

#[derive(serde::Serialize)]
struct ReportCircle {
    center: [f64; 2],
    radius: f64,
}

impl From<&Figure> for Report {
    fn from(fig: &Figure) -> Self {
        Self {
            points: fig.scatter.len(),
            circle: fig.circle.map(|c| ReportCircle {
                center: [c.center.x, c.center.y],
                radius: c.radius,
            }),
            hull: fig.hull.iter().map(|v| [v.x, v.y]).collect(),
            on_circle: fig.on_circle.clone(),
            spokes: fig
                .spokes
                .iter()
                .map(|s| [[s[0].x, s[0].y], [s[1].x, s[1].y]])
                .collect(),
        }
    }
}

fn report(args: SceneArgs) -> Result<()> {
    let fig = build_figure(&args)?;
    println!("{}", serde_json::to_string_pretty(&Report::from(&fig))?);
    Ok(())
}

fn sample(
    out: String,
    seed: u64,
    count: usize,
    spread: f64,
    ring_radius: f64,
    ring: usize,
) -> Result<()> {
    tracing::info!(out, seed, count, spread, ring_radius, ring, "sample");
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        spread,
        ring_radius,
        ring_count: ring,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed, index: 0 });
    io::write_points_csv(&out, &points)?;
    provenance::write_sidecar(
        &out,
        serde_json::json!({
            "seed": seed,
            "count": count,
            "spread": spread,
            "ring_radius": ring_radius,
            "ring": ring
        }),
    )?;
    Ok(())
}
