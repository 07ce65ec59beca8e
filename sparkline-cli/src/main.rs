//! sparkline-render: paint a sparkline job to a PNG file.

mod job;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use sparkline::{Rect, Renderer, SparklineView, WidgetRegistry};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::job::RenderJob;

#[derive(Parser, Debug)]
#[command(name = "sparkline-render", version, about = "Render sparkline jobs to PNG")]
struct Cli {
    /// JSON job file describing the widget and its properties
    job: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "sparkline.png")]
    output: PathBuf,

    /// Print the computed point layout as JSON instead of rendering
    #[arg(long)]
    dump_points: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let job = RenderJob::load(&cli.job)?;
    let registry = WidgetRegistry::with_builtin();
    let view = build_view(&registry, &job)?;

    let preferred = view.preferred_size();
    let width = job.width.unwrap_or(preferred.width);
    let height = job.height.unwrap_or(preferred.height);
    if width == 0 || height == 0 {
        bail!("nothing to render: surface would be {}x{}", width, height);
    }
    let area = Rect::from_size(width as f32, height as f32);

    if cli.dump_points {
        return dump_points(view.as_ref(), area);
    }

    let mut renderer = Renderer::new(width, height)?;
    renderer.clear(job.background);
    view.paint(&mut renderer, area);
    renderer
        .save_png(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    info!(
        "Rendered {} {}x{} to {}",
        view.type_name(),
        width,
        height,
        cli.output.display()
    );
    Ok(())
}

fn build_view(registry: &WidgetRegistry, job: &RenderJob) -> Result<Box<dyn SparklineView>> {
    if !registry.contains(&job.widget) {
        let known: Vec<&str> = registry.names().collect();
        bail!(
            "unknown widget `{}` (known: {})",
            job.widget,
            known.join(", ")
        );
    }
    let mut view = registry
        .create_with(&job.widget, &job.properties)
        .with_context(|| format!("configuring {}", job.widget))?;
    view.set_style(job.style.clone());
    Ok(view)
}

fn dump_points(view: &dyn SparklineView, area: Rect) -> Result<()> {
    let sequences = view.layout(area);
    println!("{}", serde_json::to_string_pretty(&sequences)?);
    Ok(())
}
