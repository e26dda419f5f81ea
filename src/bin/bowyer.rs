use anyhow::{Context, Result};
use bowyer::io::{load_triangulator, render_svg, SvgStyle};
use bowyer::{BoundaryPolicy, Triangulator, TriangulatorConfig};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bowyer")]
#[command(about = "Delaunay triangulation and Voronoi dual of point scripts")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct MeshOpts {
    /// Command script: lines of `add X Y`, `X Y` or `clear`
    script: PathBuf,
    /// Drop triangles attached to the super-triangle
    #[arg(long)]
    strip: bool,
    /// Tolerance for the circumcircle test
    #[arg(long, default_value_t = bowyer::config::DEFAULT_EPSILON)]
    epsilon: f64,
}

impl MeshOpts {
    fn config(&self) -> TriangulatorConfig {
        let boundary = if self.strip {
            BoundaryPolicy::Strip
        } else {
            BoundaryPolicy::Keep
        };
        TriangulatorConfig::default()
            .with_epsilon(self.epsilon)
            .with_boundary(boundary)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print point, triangle and Voronoi edge counts
    Stats {
        #[command(flatten)]
        mesh: MeshOpts,
    },
    /// Render the mesh and its Voronoi dual to SVG
    Svg {
        #[command(flatten)]
        mesh: MeshOpts,
        #[arg(long)]
        out: PathBuf,
        /// Draw circumcircles
        #[arg(long)]
        circles: bool,
        /// Mark circumcenters
        #[arg(long)]
        centers: bool,
        #[arg(long, default_value_t = 720)]
        width: u32,
        #[arg(long, default_value_t = 720)]
        height: u32,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);
    match cmd.action {
        Action::Stats { mesh } => {
            println!("{}", build(&mesh)?.stats());
            Ok(())
        }
        Action::Svg {
            mesh,
            out,
            circles,
            centers,
            width,
            height,
        } => {
            let style = SvgStyle {
                width,
                height,
                show_circles: circles,
                show_centers: centers,
                ..SvgStyle::default()
            };
            svg(&build(&mesh)?, &out, &style)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build(mesh: &MeshOpts) -> Result<Triangulator> {
    let input = std::fs::read_to_string(&mesh.script)
        .with_context(|| format!("reading {}", mesh.script.display()))?;
    let triangulator = load_triangulator(&input, mesh.config())
        .with_context(|| format!("loading {}", mesh.script.display()))?;
    tracing::info!(
        script = %mesh.script.display(),
        points = triangulator.points().len(),
        "script applied"
    );
    Ok(triangulator)
}

fn svg(triangulator: &Triangulator, out: &Path, style: &SvgStyle) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, render_svg(triangulator, style))
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), "wrote svg");
    Ok(())
}
