#[macro_use]
extern crate tracing;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(argh::FromArgs)]
/// write a 16x16 solid black favicon.ico into the current directory
struct Args {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let _args: Args = argh::from_env();

    debug!("generating {}", favicon_common::OUTPUT_PATH);
    favicon_common::generate_icon()?;

    Ok(())
}
