//! Defines `Args` which is used to parse command line arguments.

use structopt::StructOpt;


/// Converts point clouds between PLY files and packed bytes files.
#[derive(StructOpt, Debug)]
#[structopt(name = "ply2bytes")]
pub struct Args {
    /// Path to the input file.
    pub input: String,

    /// Path to the output file. An existing file is overwritten.
    pub output: String,

    /// Convert a PLY file into a bytes file. Without this flag the
    /// conversion runs the other way: bytes file to ASCII PLY.
    #[structopt(long = "to-bytes")]
    pub to_bytes: bool,
}
