#[macro_use]
extern crate tracing;

use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// check that an icon is the 16x16 solid black favicon
struct Args {
    #[argh(option, default = "PathBuf::from(favicon_common::OUTPUT_PATH)")]
    /// path to the icon file
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let args: Args = argh::from_env();

    let report = favicon_common::check_icon(&args.path)?;
    info!(
        path = %args.path.display(),
        width = report.width,
        height = report.height,
        "icon ok"
    );

    Ok(())
}
