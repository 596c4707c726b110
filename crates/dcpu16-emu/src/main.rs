//! DCPU-16 CLI - command line interface for the DCPU-16 emulator

use clap::Parser;
use dcpu16_core::cpu::{Cpu, InstructionKind, Register};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// DCPU-16 Emulator
#[derive(Parser, Debug)]
#[command(name = "dcpu16-emu")]
#[command(about = "A DCPU-16 emulator", long_about = None)]
struct Args {
    /// Path to the raw (big-endian) binary to load at memory offset 0
    #[arg(short = 'f', long = "file")]
    file: std::path::PathBuf,

    /// Seconds to sleep between instructions
    #[arg(short = 'i', long = "interval", default_value_t = 1)]
    interval: u64,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    quiet: u8,
}

fn main() {
    let args = Args::parse();

    let rom_data = match std::fs::read(&args.file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("error opening file: {}", e);
            std::process::exit(1);
        }
    };

    // Matches the original C tool's verbose counter: starts at 1, one
    // `-v` per level up, one `-q` per level down. 0 is silent, 1 dumps
    // registers after each instruction, >=2 also traces the decoded
    // instruction before it runs.
    let verbosity: i32 = 1 + args.verbose as i32 - args.quiet as i32;

    let mut cpu = Cpu::new();
    cpu.load_be_bytes(&rom_data);

    let halt = Arc::new(AtomicBool::new(false));
    let dump_registers_requested = Arc::new(AtomicBool::new(false));
    let dump_memory_requested = Arc::new(AtomicBool::new(false));

    spawn_signal_thread(
        Arc::clone(&halt),
        Arc::clone(&dump_registers_requested),
        Arc::clone(&dump_memory_requested),
    );

    let interval = Duration::from_secs(args.interval);

    loop {
        if verbosity >= 2 {
            trace_instruction(&cpu);
        }

        if let Err(e) = cpu.step() {
            eprintln!("decode error at 0x{:04X}: {}", cpu.pc(), e);
            std::process::exit(1);
        }

        if dump_registers_requested.swap(false, Ordering::SeqCst) {
            dump_registers(&cpu);
        }
        if dump_memory_requested.swap(false, Ordering::SeqCst) {
            dump_memory(&cpu);
        }
        if verbosity >= 1 {
            dump_registers(&cpu);
        }

        if !interval.is_zero() {
            std::thread::sleep(interval);
        }

        while halt.load(Ordering::SeqCst) {
            std::thread::yield_now();
        }
    }
}

/// `SIGUSR1` toggles halt and requests a register dump; `SIGUSR2`
/// requests a memory dump. Run in a dedicated thread via
/// `signal-hook`'s iterator API rather than a raw `libc` handler, so
/// the response to a signal can safely print and touch normal
/// (non-async-signal-safe) state.
fn spawn_signal_thread(
    halt: Arc<AtomicBool>,
    dump_registers_requested: Arc<AtomicBool>,
    dump_memory_requested: Arc<AtomicBool>,
) {
    use signal_hook::consts::{SIGUSR1, SIGUSR2};
    use signal_hook::iterator::Signals;

    let mut signals = match Signals::new([SIGUSR1, SIGUSR2]) {
        Ok(signals) => signals,
        Err(e) => {
            eprintln!("warning: could not install signal handlers: {}", e);
            return;
        }
    };

    std::thread::spawn(move || {
        for signal in signals.forever() {
            match signal {
                SIGUSR1 => {
                    halt.fetch_xor(true, Ordering::SeqCst);
                    dump_registers_requested.store(true, Ordering::SeqCst);
                }
                SIGUSR2 => {
                    dump_memory_requested.store(true, Ordering::SeqCst);
                }
                _ => {}
            }
        }
    });
}

fn trace_instruction(cpu: &Cpu) {
    let decoded = cpu.peek_instruction();
    match decoded.kind {
        InstructionKind::Basic => println!(
            "   BASIC opcode: {:02X} a: {:02X} b: {:02X}",
            decoded.op, decoded.a_spec, decoded.b_spec
        ),
        InstructionKind::NonBasic => println!(
            "NONBASIC opcode: {:02X} a: {:02X}",
            decoded.op, decoded.b_spec
        ),
    }
}

fn dump_registers(cpu: &Cpu) {
    println!("DCPU-16 REGISTERS");
    println!("PC: 0x{:04X} SP: 0x{:04X}  O: 0x{:04X}", cpu.pc(), cpu.sp(), cpu.o());
    println!(
        " A: 0x{:04X}  B: 0x{:04X}  C: 0x{:04X}",
        cpu.reg(Register::A),
        cpu.reg(Register::B),
        cpu.reg(Register::C)
    );
    println!(
        " X: 0x{:04X}  Y: 0x{:04X}  Z: 0x{:04X}",
        cpu.reg(Register::X),
        cpu.reg(Register::Y),
        cpu.reg(Register::Z)
    );
    println!(" I: 0x{:04X}  J: 0x{:04X}", cpu.reg(Register::I), cpu.reg(Register::J));
    println!(" Cycles: {}", cpu.cycles());
    println!("--------------------------------");
}

const DUMP_COLUMNS: usize = 8;

fn dump_memory(cpu: &Cpu) {
    println!("DCPU-16 MEMORY");
    for (i, word) in cpu.memory().iter().enumerate() {
        if i % DUMP_COLUMNS == 0 {
            print!("0x{:04X}:", i);
        }
        print!(" {:04X}", word);
        if i % DUMP_COLUMNS == DUMP_COLUMNS - 1 {
            println!();
        }
    }
    println!("--------------------------------");
}
