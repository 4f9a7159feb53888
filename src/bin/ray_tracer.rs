use anyhow::{Context, Result};
use clap::Parser;
use ray_tracer::description;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Renders a scene description to a PPM image.
#[derive(Parser)]
#[command(name = "ray_tracer", version)]
struct Args {
    /// Scene description to render. YAML is accepted only when pre-converted to the same JSON
    /// shape; this binary parses `.json` content directly regardless of the file's extension.
    #[arg(long)]
    scene: PathBuf,

    /// JSON Schema document to validate the scene against before construction.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Destination PPM file.
    #[arg(long)]
    output: PathBuf,

    /// Overrides the default reflection/refraction recursion cap.
    #[arg(long)]
    depth: Option<u8>,

    /// Overrides rayon's global thread pool size.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new().num_threads(threads).build_global().context("configuring the rayon thread pool")?;
    }

    let timer = Instant::now();

    let scene_text = fs::read_to_string(&args.scene).with_context(|| format!("reading scene description {:?}", args.scene))?;
    let scene = description::parse(&scene_text)?;

    if let Some(schema_path) = &args.schema {
        validate_against_schema(schema_path, &scene_text)?;
    }

    if let Err(error) = description::validate(&scene) {
        eprintln!("{}", error);
        return Err(error.into());
    }

    let resource_dir = args.scene.parent().unwrap_or_else(|| Path::new("."));
    let (mut world, camera) = description::build(&scene, resource_dir)?;
    if let Some(depth) = args.depth {
        world.settings.recursion_depth = depth;
    }

    println!("Loaded scene in {:.2?}", timer.elapsed());

    let canvas = ray_tracer::renderer::render(&world, &camera, true);
    println!("Rendered in {:.2?}", timer.elapsed());

    fs::write(&args.output, ray_tracer::ppm::write_ppm(&canvas)).with_context(|| format!("writing output {:?}", args.output))?;

    println!("Completed in {:.2?}", timer.elapsed());

    Ok(())
}

/// No JSON Schema validation crate is used anywhere in the pack this binary was grown from, so
/// this only confirms the schema document itself is well-formed JSON and defers the actual scene
/// checks to `description::validate`. See DESIGN.md for the full reasoning.
fn validate_against_schema(schema_path: &Path, _scene_text: &str) -> Result<()> {
    let schema_text = fs::read_to_string(schema_path).with_context(|| format!("reading JSON schema {:?}", schema_path))?;
    serde_json::from_str::<serde_json::Value>(&schema_text).with_context(|| format!("{:?} is not valid JSON", schema_path))?;
    Ok(())
}
