use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polyquery::rand::{draw_collection, RadialCfg, VertexCount};
use polyquery::store::write_polygons;
use polyquery::{PolygonStore, Session, SessionCfg};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

#[derive(Parser)]
#[command(name = "polyquery")]
#[command(about = "Area, count, extremum and frame queries over integer polygons")]
struct Cmd {
    /// Log rejected commands and loader details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Load polygons from FILE and answer commands line by line
    Query {
        /// Polygon file, one `N x1 y1 ... xN yN` literal per line
        input: PathBuf,
        /// Read commands from this file instead of stdin
        #[arg(long)]
        commands: Option<PathBuf>,
        #[arg(long, default_value = polyquery::query::INVALID_COMMAND)]
        invalid_marker: String,
        /// Fractional digits for area answers
        #[arg(long, default_value_t = 1)]
        precision: usize,
    },
    /// Write a reproducible random polygon file plus a provenance sidecar
    Gen {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 3)]
        min_vertices: usize,
        #[arg(long, default_value_t = 8)]
        max_vertices: usize,
        /// Base radius in lattice units
        #[arg(long, default_value_t = 20.0)]
        radius: f64,
    },
    /// Print a JSON summary of a polygon file
    Report { input: PathBuf },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Query {
            input,
            commands,
            invalid_marker,
            precision,
        } => query(
            &input,
            commands.as_deref(),
            SessionCfg {
                invalid_marker,
                area_precision: precision,
            },
        ),
        Action::Gen {
            out,
            count,
            seed,
            min_vertices,
            max_vertices,
            radius,
        } => generate(&out, count, seed, (min_vertices, max_vertices), radius),
        Action::Report { input } => report(&input),
    }
}

fn load_store(path: &Path) -> Result<(PolygonStore, Vec<usize>)> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let (store, skipped) = PolygonStore::from_reader(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    if !skipped.is_empty() {
        tracing::warn!(
            file = %path.display(),
            count = skipped.len(),
            lines = ?skipped,
            "skipped malformed polygon lines"
        );
    }
    tracing::debug!(polygons = store.len(), "loaded");
    Ok((store, skipped))
}

fn query(input: &Path, commands: Option<&Path>, cfg: SessionCfg) -> Result<()> {
    let (store, _) = load_store(input)?;
    let reader: Box<dyn BufRead> = match commands {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let stdout = io::stdout();
    let stats = Session::new(&store, cfg)
        .run(reader, BufWriter::new(stdout.lock()))
        .context("command stream")?;
    tracing::debug!(
        answered = stats.answered,
        rejected = stats.rejected,
        "session finished"
    );
    Ok(())
}

fn generate(out: &Path, count: usize, seed: u64, vertices: (usize, usize), radius: f64) -> Result<()> {
    tracing::info!(out = %out.display(), count, seed, "gen");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform {
            min: vertices.0,
            max: vertices.1,
        },
        radius,
        ..RadialCfg::default()
    };
    let polys = draw_collection(cfg, seed, count);
    if polys.len() < count {
        tracing::warn!(
            requested = count,
            drawn = polys.len(),
            "some draws collapsed below three vertices; increase --radius"
        );
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_polygons(BufWriter::new(file), &polys)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "count": count,
        "drawn": polys.len(),
        "seed": seed,
        "min_vertices": vertices.0,
        "max_vertices": vertices.1,
        "radius": radius
    });
    let sidecar = provenance::write_sidecar(out, provenance::Payload::new("gen", params))?;
    tracing::info!(sidecar = %sidecar.display(), "provenance written");
    Ok(())
}

fn report(input: &Path) -> Result<()> {
    let (store, skipped) = load_store(input)?;
    let summary = report::summarize(&store, &skipped, provenance::current_git_rev());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
