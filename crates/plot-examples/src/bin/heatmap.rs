// File: crates/plot-examples/src/bin/heatmap.rs
// Summary: Minimal example that rasterizes a heat map to PNG.

use anyhow::{Context, Result};
use plot_core::{HeatMap, HeatMapView, Interval};

fn main() -> Result<()> {
    // A smooth interference pattern over [-2, 2] x [-2, 2].
    let map = HeatMap::new(
        Interval::new(-2.0, 2.0),
        Interval::new(-2.0, 2.0),
        Interval::new(-1.0, 1.0),
        |x, y| (x * 4.0).sin() * (y * 4.0).cos(),
    );
    let view = HeatMapView::new(map);

    let (width, height) = (512usize, 512usize);
    let pixels = view.render_to_rgba8(width, height);

    let out = std::path::PathBuf::from("target/out/example_heatmap.png");
    std::fs::create_dir_all(out.parent().unwrap())?;
    let image = image::RgbaImage::from_raw(width as u32, height as u32, pixels)
        .context("pixel buffer does not match the image dimensions")?;
    image.save(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
