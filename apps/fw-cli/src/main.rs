use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use fw_devices::{
    Device, DeviceMeta, Level, MemoryPin, Mock, MockConfig, Mq2, Pwm, Rgb, Tmp36, Touch,
};
use fw_flow::{Average, Flow, FlowError, FlowResult, Log, Pull, Wheel};

#[derive(Parser)]
#[command(name = "fw-cli")]
#[command(about = "Flywheel CLI - Pull-based sensor/actuator pipeline tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a mock-fed pipeline into a level actuator
    Run {
        /// Values the mock source cycles through
        #[arg(long, value_delimiter = ',', default_value = "0,1")]
        cycle: Vec<f64>,
        /// Moving-average window size
        #[arg(long, default_value_t = 3)]
        window: usize,
        /// Number of scheduler ticks to drive
        #[arg(long, default_value_t = 12)]
        ticks: usize,
        /// Pause between ticks in milliseconds
        #[arg(long, default_value_t = 250)]
        period_ms: u64,
        /// Emit produced states as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// List built-in device kinds and their metadata
    Kinds {
        /// Emit metadata as JSON lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> FlowResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            cycle,
            window,
            ticks,
            period_ms,
            json,
        } => cmd_run(cycle, window, ticks, period_ms, json),
        Commands::Kinds { json } => cmd_kinds(json),
    }
}

fn cmd_run(
    cycle: Vec<f64>,
    window: usize,
    ticks: usize,
    period_ms: u64,
    json: bool,
) -> FlowResult<()> {
    let mut source = Mock::new(cycle)?;
    let upstream = source
        .states(None, false)
        .pipe(Log::new())
        .pipe(Average::new(window)?);

    let mut sink = Level::new(MemoryPin::new(13));
    let mut flow = sink.iterate(upstream, true);

    info!(window, ticks, "driving pipeline");

    for tick in 0..ticks {
        match flow.pull()? {
            Pull::Ready(state) => {
                if json {
                    let line = serde_json::to_string(&state).map_err(|e| FlowError::Backend {
                        message: e.to_string(),
                    })?;
                    println!("{line}");
                } else {
                    println!("tick {tick:>3}  {state}");
                }
            }
            Pull::Suppressed => {
                if !json {
                    println!("tick {tick:>3}  (suppressed)");
                }
            }
            Pull::Exhausted => break,
        }
        if period_ms > 0 {
            thread::sleep(Duration::from_millis(period_ms));
        }
    }
    drop(flow);

    println!("✓ final level: {}", sink.state());
    println!("  hardware writes: {}", sink.pin().writes());
    Ok(())
}

fn cmd_kinds(json: bool) -> FlowResult<()> {
    let pin = || MemoryPin::new(0);
    let kinds: Vec<(&str, DeviceMeta)> = vec![
        ("level", Level::new(pin()).meta()),
        ("touch", Touch::new(pin()).meta()),
        ("pwm", Pwm::new(pin()).meta()),
        ("rgb", Rgb::new(pin(), pin(), pin()).meta()),
        ("tmp36", Tmp36::new(pin()).meta()),
        ("mq2", Mq2::new(pin()).meta()),
        ("mock", Mock::with_config(MockConfig::default())?.meta()),
    ];

    if json {
        for (kind, meta) in &kinds {
            let line = serde_json::json!({ "kind": kind, "meta": meta });
            println!("{line}");
        }
    } else {
        println!("Device kinds:");
        for (kind, meta) in &kinds {
            println!("  {:<6} {} [{}] {}", kind, meta.unit_name, meta.unit, meta.symbol);
        }
    }
    Ok(())
}
