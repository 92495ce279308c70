//! LS-8 CLI - command line runner for the LS-8 emulator

use clap::Parser;
use ls8_core::cpu::Output;
use ls8_core::image::Image;
use ls8_core::machine::Machine;
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

/// LS-8 emulator CLI
#[derive(Parser, Debug)]
#[command(name = "ls8-cli")]
#[command(about = "An LS-8 machine emulator", long_about = None)]
struct Args {
    /// Path to the program image (binary text, one byte per line)
    program: PathBuf,

    /// Clock rate in cycles per second
    #[arg(long, default_value_t = 1000)]
    hz: u32,

    /// Timer interrupt period in milliseconds on line 0; 0 disables the timer
    #[arg(long, default_value_t = 1000)]
    timer_ms: u64,

    /// Stop after this many cycles even if the machine is still running
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Run as fast as possible instead of pacing to the clock rate
    #[arg(long)]
    turbo: bool,

    /// Log at debug level (-v) or trace level (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes PRN values as lines and PRA values as raw characters on stdout
struct Console;

impl Output for Console {
    fn numeric(&mut self, value: u8) {
        println!("{}", value);
    }

    fn character(&mut self, value: u8) {
        print!("{}", value as char);
        let _ = io::stdout().flush();
    }
}

/// Periodic timer peripheral; raises interrupt line 0 every `period`
/// cycles. A period of 0 disables it.
struct Timer {
    period: u64,
    elapsed: u64,
}

impl Timer {
    fn new(period: u64) -> Self {
        Self { period, elapsed: 0 }
    }

    fn tick(&mut self, machine: &mut Machine) {
        if self.period == 0 {
            return;
        }
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            machine.raise_interrupt(0);
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init().unwrap();

    let text = match fs::read_to_string(&args.program) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("failed to read {}: {}", args.program.display(), e);
            std::process::exit(1);
        }
    };

    let image = match Image::parse(&text) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("failed to load {}: {}", args.program.display(), e);
            std::process::exit(1);
        }
    };

    let mut machine = Machine::new();
    machine.load_image(&image);
    log::debug!("loaded {} bytes from {}", image.len(), args.program.display());

    let hz = args.hz.max(1);
    let cycle = Duration::from_secs(1) / hz;
    // Timer period expressed in cycles at the configured clock rate
    let timer_cycles = args.timer_ms * hz as u64 / 1000;
    let mut timer = Timer::new(if args.timer_ms == 0 { 0 } else { timer_cycles.max(1) });

    let mut console = Console;
    let mut cycles: u64 = 0;

    loop {
        if let Some(limit) = args.max_cycles {
            if cycles >= limit {
                log::info!("cycle limit reached after {} cycles", cycles);
                break;
            }
        }

        match machine.tick(&mut console) {
            Ok(true) => {}
            Ok(false) => break,
            Err(fault) => {
                eprintln!("machine fault: {}", fault);
                std::process::exit(1);
            }
        }
        cycles += 1;

        timer.tick(&mut machine);

        if !args.turbo {
            spin_sleep::sleep(cycle);
        }
    }
}
