use image_convolution::config::load_config;
use image_convolution::convolution::convolve;
use image_convolution::diagnostics::{ConvolutionReport, TimingBreakdown};
use image_convolution::image::io::{load_image, save_image, write_json_file};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let verbosity = config.run.verbosity;

    let image = load_image(&config.input, config.channels, config.layout)
        .map_err(|e| e.to_string())?;
    let kernel = config.kernel.build().map_err(|e| e.to_string())?;
    if verbosity >= 2 {
        println!(
            "Read {}:\n\tWidth: {}px\n\tHeight: {}px\n\tChannels: {}\n\tLayout: {}\n",
            config.input.display(),
            image.width(),
            image.height(),
            image.channels(),
            image.layout()
        );
        println!("{kernel}");
    }

    let iterations = config.run.iterations.max(1);
    let mut timing = TimingBreakdown::default();
    let mut output = None;
    for _ in 0..iterations {
        let start = Instant::now();
        let result = convolve(&image, &kernel, config.padding).map_err(|e| e.to_string())?;
        timing.record(start.elapsed().as_secs_f64() * 1000.0);
        output = Some(result);
    }
    let output = output.ok_or("No convolution was run")?;

    save_image(&output, &config.output.image).map_err(|e| e.to_string())?;
    let report = ConvolutionReport::new(&image, &kernel, config.padding, timing);
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
    }

    if verbosity >= 1 {
        println!(
            "Convolved {}x{}x{} ({}) with {}x{} kernel, {:?} padding: {:.3} ms mean over {} iterations",
            report.image_width,
            report.image_height,
            report.image_channels,
            report.layout,
            report.kernel_size,
            report.kernel_size,
            report.padding,
            report.mean_ms,
            report.iterations
        );
        println!("Saved {}", config.output.image.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: convolve_image <config.json>".to_string()
}
