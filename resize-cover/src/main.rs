//! `resize-cover` binary: resize one cover to the KDP size.

use tracing_subscriber::EnvFilter;

use resize_cover_lib::config::CoverConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let report = resize_cover_lib::run(&CoverConfig::default())?;
    println!("{}", resize_cover_lib::success_line(&report));
    Ok(())
}
