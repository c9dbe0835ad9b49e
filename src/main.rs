use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use palette::Srgb;

use palettecycler::intervaltimer::IntervalTimer;
use palettecycler::preview;
use palettecycler::{Blending, CyclerOptions, PaletteCycler, PaletteId};

#[derive(Parser)]
struct Cli {
    /// TOML file with cycler options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Palettes to cycle through, overriding the config file
    #[arg(short, long, value_delimiter = ',', value_name = "PALETTE")]
    palettes: Vec<PaletteId>,

    /// Preview frame rate
    #[arg(short, long, default_value_t = 30.0)]
    fps: f32,

    /// Width of the preview strip in pixels
    #[arg(short = 'n', long, default_value_t = 48)]
    pixels: usize,

    /// Show the built-in palettes and exit
    #[arg(long)]
    list: bool,
}

fn load_options(args: &Cli) -> Result<CyclerOptions, String> {
    let mut options = match args.config.as_deref() {
        Some(path) => CyclerOptions::load(path)?,
        None => CyclerOptions::default(),
    };

    if !args.palettes.is_empty() {
        options.active_palettes = args.palettes.clone();
    }

    options.validate()?;
    Ok(options)
}

fn list_palettes() {
    for id in PaletteId::ALL {
        println!("{:>18} {}", id.name(), preview::render_palette(&id.resolve()));
    }
}

fn run(args: &Cli, options: &CyclerOptions, running: &AtomicBool) -> Result<(), String> {
    if !(args.fps > 0.0 && args.fps.is_finite()) {
        return Err(format!("Invalid frame rate: {}", args.fps));
    }

    let mut cycler = PaletteCycler::from_options(options, Instant::now())?;
    let mut timer = IntervalTimer::new(args.fps);
    let mut pixels = vec![Srgb::new(0, 0, 0); args.pixels];
    let mut start_index = 0u8;
    let mut stdout = io::stdout();

    while running.load(Ordering::SeqCst) {
        cycler.tick(Instant::now());

        cycler
            .current()
            .fill(&mut pixels, start_index, 3, Blending::Linear);
        start_index = start_index.wrapping_add(1);

        if let Err(err) = write!(stdout, "\r{}", preview::render(&pixels)).and_then(|_| stdout.flush()) {
            return Err(format!("Cannot write preview: {}", err));
        }

        timer.sleep_until_next_tick();
    }

    println!();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    if args.list {
        list_palettes();
        return;
    }

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = Arc::clone(&running);
    if let Err(err) = ctrlc::set_handler(move || handler_flag.store(false, Ordering::SeqCst)) {
        log::error!("Cannot install Ctrl-C handler: {}", err);
        process::exit(1);
    }

    if let Err(err) = run(&args, &options, &running) {
        log::error!("{}", err);
        process::exit(1);
    }
}
