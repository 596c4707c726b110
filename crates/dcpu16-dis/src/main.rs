//! DCPU-16 disassembler CLI

use clap::Parser;
use dcpu16_core::disasm::disassemble;

/// DCPU-16 Disassembler
#[derive(Parser, Debug)]
#[command(name = "dcpu16-dis")]
#[command(about = "A DCPU-16 disassembler", long_about = None)]
struct Args {
    /// Path to the raw (big-endian) binary to disassemble
    #[arg(short = 'f', long = "file")]
    file: std::path::PathBuf,
}

fn main() {
    let args = Args::parse();

    let bytes = match std::fs::read(&args.file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("error opening file: {}", e);
            std::process::exit(1);
        }
    };

    for line in disassemble(&bytes) {
        println!("{}", line);
    }
}
