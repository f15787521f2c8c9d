use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use histeq_gray::io::{load_grayscale, save_grayscale};
use histeq_gray::reference::{compare, equalize_reference};
use histeq_gray::{equalize, EqualizeError, EqualizeParams, Execution};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Histogram-equalize a grayscale image", long_about = None)]
struct Parameters {
    ///Path to the input image. Color images are converted to grayscale.
    #[arg(default_value = "pollen.jpg")]
    input: PathBuf,
    ///Output file path, format chosen by extension.
    #[arg(short, long, default_value = "equalized.png")]
    output: PathBuf,
    ///Run every stage on the current thread.
    #[arg(long)]
    sequential: bool,
    ///Also equalize with the conventional cdf_min formulation and report the difference.
    #[arg(long)]
    compare: bool,
}

fn run(params: &Parameters) -> Result<(), EqualizeError> {
    let image = load_grayscale(&params.input)?;
    let execution = if params.sequential {
        Execution::Sequential
    } else {
        Execution::Parallel
    };
    let result = equalize(&image.view(), &EqualizeParams::new(execution))?;
    let populated = result.histogram.counts().iter().filter(|&&c| c > 0).count();
    info!(
        "{} pixels over {} levels, lut spans {}..={}",
        result.map.pixel_count(),
        populated,
        result.map.lookup(0),
        result.map.lookup(255)
    );
    save_grayscale(&params.output, &result.image.view())?;
    info!("wrote {}", params.output.display());

    if params.compare {
        let reference = equalize_reference(&image.view())?;
        let cmp = compare(&result.image.view(), &reference.view())?;
        info!(
            "against cdf_min equalizer: max diff {}, mean diff {:.3}, {} pixels differ",
            cmp.max_abs_diff, cmp.mean_abs_diff, cmp.differing_pixels
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let params = Parameters::parse();
    match run(&params) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_when_omitted() {
        let params = Parameters::try_parse_from(["equalize_histogram"]).unwrap();
        assert_eq!(params.input, PathBuf::from("pollen.jpg"));
        assert_eq!(params.output, PathBuf::from("equalized.png"));
        assert!(!params.sequential);
    }

    #[test]
    fn explicit_paths_and_flags() {
        let params = Parameters::try_parse_from([
            "equalize_histogram",
            "dark.png",
            "-o",
            "bright.png",
            "--sequential",
            "--compare",
        ])
        .unwrap();
        assert_eq!(params.input, PathBuf::from("dark.png"));
        assert_eq!(params.output, PathBuf::from("bright.png"));
        assert!(params.sequential && params.compare);
    }
}
