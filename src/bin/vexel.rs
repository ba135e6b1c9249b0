use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use vexel::{Canvas, Element, Scene, TextureStore, decode_image, render_scene};

#[derive(Parser, Debug)]
#[command(name = "vexel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON to a PNG frame.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Samples per pixel, per axis.
    #[arg(long, default_value_t = 4)]
    sample_rate: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => render_frame(args),
    }
}

fn render_frame(args: FrameArgs) -> anyhow::Result<()> {
    let json = fs::read_to_string(&args.in_path)
        .with_context(|| format!("read scene {}", args.in_path.display()))?;
    let scene: Scene = serde_json::from_str(&json).context("parse scene JSON")?;

    let base_dir = args.in_path.parent().unwrap_or(Path::new("."));
    let textures = load_textures(&scene, base_dir)?;

    let canvas = Canvas {
        width: args.width,
        height: args.height,
    };
    let frame = render_scene(&scene, &textures, canvas, args.sample_rate)?;

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write {}", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Load and mip every texture the scene references, relative to the scene
/// file's directory.
fn load_textures(scene: &Scene, base_dir: &Path) -> anyhow::Result<TextureStore> {
    let mut srcs = Vec::new();
    collect_srcs(&scene.elements, &mut srcs);

    let mut store = TextureStore::new();
    for src in srcs {
        if store.get(&src).is_some() {
            continue;
        }
        let path = base_dir.join(&src);
        let bytes =
            fs::read(&path).with_context(|| format!("read texture {}", path.display()))?;
        let mut texture = decode_image(&bytes)?;
        texture.generate_mips(0)?;
        store.insert(src, texture);
    }
    Ok(store)
}

fn collect_srcs(elements: &[Element], out: &mut Vec<String>) {
    for element in elements {
        match element {
            Element::Image(image) => out.push(image.src.clone()),
            Element::Group(group) => collect_srcs(&group.elements, out),
            _ => {}
        }
    }
}
