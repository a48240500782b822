use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    time::Instant,
};

use failure::{Error, ResultExt};
use structopt::StructOpt;

use ply2bytes::{
    PointCloud,
    io::{bytes, ply},
};

#[macro_use]
mod ui;

mod args;

use crate::args::Args;


/// We just catch potential errors here and pretty print them. The actual
/// useful code is in `run()`.
fn main() {
    if let Err(e) = run() {
        error!("An error occured: {}", e);

        for cause in e.iter_causes() {
            error!("  ... caused by: {}", cause);
        }

        if std::env::var("RUST_BACKTRACE") == Ok("1".to_string()) {
            error!();
            error!("{}", e.backtrace());
        }

        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::from_args();

    if args.to_bytes {
        ply_to_bytes(&args)
    } else {
        bytes_to_ply(&args)
    }
}

fn ply_to_bytes(args: &Args) -> Result<(), Error> {
    let start_time = Instant::now();

    let mut input = BufReader::new(
        File::open(&args.input).context(format!("failed to open '{}'", args.input))?,
    );
    let cloud = ply::read(&mut input).context("could not read source file")?;
    report_cloud(&cloud, &args.input);

    let mut output = BufWriter::new(
        File::create(&args.output).context(format!("failed to create '{}'", args.output))?,
    );
    bytes::Writer::new(&mut output)
        .write(&cloud)
        .context("could not write target file")?;
    output.flush().context("could not write target file")?;

    info!("Wrote '{}' in {:.2?}", args.output, start_time.elapsed());

    Ok(())
}

fn bytes_to_ply(args: &Args) -> Result<(), Error> {
    let start_time = Instant::now();

    let input = BufReader::new(
        File::open(&args.input).context(format!("failed to open '{}'", args.input))?,
    );
    let cloud = bytes::Reader::new(input)
        .read()
        .context("could not read source file")?;
    report_cloud(&cloud, &args.input);

    let mut output = BufWriter::new(
        File::create(&args.output).context(format!("failed to create '{}'", args.output))?,
    );
    ply::write(&mut output, &cloud).context("could not write target file")?;
    output.flush().context("could not write target file")?;

    info!("Wrote '{}' in {:.2?}", args.output, start_time.elapsed());

    Ok(())
}

fn report_cloud(cloud: &PointCloud, source: &str) {
    info!(
        "Read {} points from '{}' ({})",
        cloud.len(),
        source,
        if cloud.has_colors() { "with colors" } else { "without colors" },
    );
}
