//! Headless host: renders consecutive frames of the zoom to binary PPM files.
//!
//! Usage: `spiralzoom-frames [width] [height] [frames] [out_dir] [preset]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use log::info;
    use spiralzoom_compute::{find_zoom_config, Animation, FrameRenderer, DEFAULT_TICK};
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Instant;

    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or_else(|| default.to_string());

    let width: u32 = arg(0, "640").parse()?;
    let height: u32 = arg(1, "360").parse()?;
    let frames: u32 = arg(2, "60").parse()?;
    let out_dir = PathBuf::from(arg(3, "frames"));
    let config = find_zoom_config(&arg(4, "spiral"))?;

    std::fs::create_dir_all(&out_dir)?;

    let renderer = FrameRenderer::new(&config);
    let mut animation = Animation::new(config)?;

    for frame in 0..frames {
        let start = Instant::now();
        let uniforms = animation.uniforms();
        let pixels = renderer.render(&uniforms, width, height);

        let path = out_dir.join(format!("frame_{:05}.ppm", frame));
        let mut file = std::io::BufWriter::new(std::fs::File::create(&path)?);
        write!(file, "P6\n{} {}\n255\n", width, height)?;
        for [r, g, b, _] in &pixels {
            file.write_all(&[*r, *g, *b])?;
        }
        file.flush()?;

        info!(
            "frame {} zoom={:.3e} rotation={:.3} in {:.1} ms -> {}",
            frame,
            uniforms.zoom,
            uniforms.rotation,
            start.elapsed().as_secs_f64() * 1000.0,
            path.display()
        );

        animation.tick(DEFAULT_TICK);
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
