//! KDP cover resizer: fixed configuration and the single resize run.

pub mod config;

use anyhow::Context;

use config::CoverConfig;
use cover_image::CoverReport;

/// Resize the configured cover and return the report.
pub fn run(config: &CoverConfig) -> Result<CoverReport, anyhow::Error> {
    let job = config.job()?;
    tracing::info!(
        input = %job.input().display(),
        output = %job.output().display(),
        "Resizing cover"
    );
    job.run()
        .with_context(|| format!("Failed to resize cover {}", job.input().display()))
}

/// Line printed to stdout after a successful resize.
pub fn success_line(report: &CoverReport) -> String {
    format!(
        "[Success] Cover resized for KDP: {}",
        report.output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    #[test]
    fn test_run_resizes_configured_cover() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cover.jpg");
        let output = dir.path().join("cover_kdp.jpg");
        let src = RgbImage::from_pixel(30, 48, Rgb([40, 80, 120]));
        cover_image::save_jpeg(&src, &input, 95).unwrap();

        let config = CoverConfig {
            input: input.clone(),
            output: output.clone(),
            width: 50,
            height: 80,
            ..CoverConfig::default()
        };
        let report = run(&config).unwrap();

        assert_eq!(report.output, output);
        assert_eq!((report.width, report.height), (50, 80));
        let out = image::open(&output).unwrap();
        assert_eq!((out.width(), out.height()), (50, 80));
    }

    #[test]
    fn test_run_missing_input_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoverConfig {
            input: dir.path().join("nope.jpg"),
            output: dir.path().join("out.jpg"),
            ..CoverConfig::default()
        };

        let err = run(&config).unwrap_err();

        assert!(format!("{err:#}").contains("nope.jpg"));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_success_line_names_output() {
        let report = CoverReport {
            output: PathBuf::from("ebook_assets/cover_kdp.jpg"),
            source_width: 800,
            source_height: 1200,
            width: 1600,
            height: 2560,
            bytes_written: 4096,
        };
        assert_eq!(
            success_line(&report),
            "[Success] Cover resized for KDP: ebook_assets/cover_kdp.jpg"
        );
    }
}
