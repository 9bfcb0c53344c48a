//! Keygate CLI - portfolio shell
//!
//! Usage:
//!   keygate                         # Boot animation, then interactive keys
//!   keygate --text "xaby"           # Single-shot symbol feed
//!   keygate --visited               # Pre-set the visited flag (skip path)
//!   keygate --skip-boot             # Jump straight to the key loop
//!   keygate --text "xaby" --json    # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::thread::sleep;
use std::time::Duration;

use keygate::core::{BootSequencer, MemoryStore, SequenceDetector, SessionStore, SilentPlayback};
use keygate::types::{BootPhase, DetectorOutput, ReasonCode};
use keygate::{PROGRESS_TICK_MS, SETTLE_DELAY_MS, VERSION, VISITED_KEY, VISITED_VALUE};

/// Sections revealed once the boot settles. Presentational content lives
/// elsewhere; the shell only announces them.
const SECTIONS: [&str; 6] = ["hero", "about", "skills", "timeline", "projects", "contact"];

#[derive(Parser, Debug)]
#[command(
    name = "keygate",
    version = VERSION,
    about = "Keygate - boot sequencer and keystroke-sequence unlock detector",
    long_about = "Keygate is the interactive core of the portfolio shell.\n\n\
                  It runs the one-time boot animation (skipped on revisits\n\
                  within a session) and then watches the key stream for the\n\
                  unlock sequence.\n\n\
                  Modes:\n  \
                  (default)      Boot, then interactive key loop\n  \
                  --text         Feed symbols once and print the result\n\n\
                  Phases:\n  \
                  PRIMING - First visit, progress animation running\n  \
                  READY   - Content revealed"
)]
struct Args {
    /// Symbols to feed in one shot (e.g. "xaby")
    #[arg(short, long)]
    text: Option<String>,

    /// Pre-set the session visited flag before starting
    #[arg(long)]
    visited: bool,

    /// Skip the boot sequence entirely
    #[arg(long)]
    skip_boot: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut store = MemoryStore::new();
    if args.visited {
        // CLI glue, store failure is not actionable here
        let _ = store.set(VISITED_KEY, VISITED_VALUE);
    }

    if !args.skip_boot {
        let mut sequencer = BootSequencer::new(store);
        run_boot(&mut sequencer, &args);
    }

    let mut detector = SequenceDetector::new(SilentPlayback::new());
    if let Some(ref text) = args.text {
        run_single(&mut detector, text, &args);
    } else {
        run_interactive(&mut detector, &args);
    }
}

/// Drive the boot sequencer with real timers and render the progress bar
fn run_boot(sequencer: &mut BootSequencer<MemoryStore>, args: &Args) {
    let output = sequencer.start();

    if args.json {
        println!("{}", serde_json::to_string(&output).unwrap());
    }

    if output.phase == BootPhase::Ready {
        if !args.json {
            println!("{}", "Welcome back - priming skipped.".dimmed());
        }
        reveal_content(args);
        return;
    }

    if !args.json {
        println!("{}", "Loading Portfolio...".dimmed());
    }

    while sequencer.progress() < 100 {
        sleep(Duration::from_millis(PROGRESS_TICK_MS));
        let output = sequencer.tick();

        if args.json {
            println!("{}", serde_json::to_string(&output).unwrap());
        } else {
            render_progress(output.progress, args.no_color);
        }
    }

    // Settle delay between full bar and content reveal
    sleep(Duration::from_millis(SETTLE_DELAY_MS));
    let output = sequencer.settle();

    if args.json {
        println!("{}", serde_json::to_string(&output).unwrap());
    } else {
        println!();
    }

    reveal_content(args);
}

/// Redraw the progress bar in place
fn render_progress(progress: u8, no_color: bool) {
    const BAR_WIDTH: usize = 32;
    let filled = BAR_WIDTH * progress as usize / 100;
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);

    if no_color {
        print!("\r[{}] {:>3}%", bar, progress);
    } else {
        print!("\r[{}] {:>3}%", bar.cyan(), progress);
    }
    io::stdout().flush().unwrap();
}

/// Announce the revealed sections and the easter-egg hint
fn reveal_content(args: &Args) {
    if args.json {
        return;
    }

    println!();
    println!("{}", format!("  Keygate v{} - portfolio shell", VERSION).bold());
    println!("  Sections: {}", SECTIONS.join(" · "));
    println!();
    println!("{}", "🤖 Year 2300 A.D. - The Factory holds secrets...".blue());
    println!("{}", "Four keys unlock the path: X marks the spot".purple());
    println!();
}

/// Feed a one-shot symbol stream and print the final state
fn run_single(detector: &mut SequenceDetector<SilentPlayback>, text: &str, args: &Args) {
    let mut last: Option<DetectorOutput> = None;
    let mut matched = false;

    for c in text.chars() {
        let output = detector.observe(c);
        matched |= output.reason == ReasonCode::K003_SEQUENCE_MATCHED;
        if args.json {
            println!("{}", serde_json::to_string(&output).unwrap());
        }
        last = Some(output);
    }

    if matched {
        print_achievement(detector, args);
    }

    if !args.json {
        if let Some(output) = last {
            if args.no_color {
                println!("{}", output.to_parseable_string());
            } else {
                println!("{}", output.to_terminal_string());
            }
        }
    }
}

/// Interactive key loop: feed line characters, handle shell commands
fn run_interactive(detector: &mut SequenceDetector<SilentPlayback>, args: &Args) {
    if !args.json {
        println!("Type keys and press Enter. Commands: 'toggle', 'status', 'quit'.");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(detector, args.no_color);
        print!("{}", prompt);
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Keys observed: {}", detector.observe_count());
            break;
        }
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("toggle") {
            let output = detector.toggle_playback();
            print_output(&output, args);
            continue;
        }

        if line.eq_ignore_ascii_case("status") {
            print_output(&detector.current_output(), args);
            continue;
        }

        let mut matched = false;
        let mut last: Option<DetectorOutput> = None;
        for c in line.chars() {
            let output = detector.observe(c);
            matched |= output.reason == ReasonCode::K003_SEQUENCE_MATCHED;
            if args.json {
                println!("{}", serde_json::to_string(&output).unwrap());
            }
            last = Some(output);
        }

        if matched {
            print_achievement(detector, args);
        } else if !args.json {
            if let Some(ref output) = last {
                print_output(output, args);
            }
        }
    }
}

/// Format the key-loop prompt
fn format_prompt(detector: &SequenceDetector<SilentPlayback>, no_color: bool) -> String {
    let (emoji, color) = if detector.unlocked() {
        ("🔓", "\x1b[32m")
    } else {
        ("🔒", "\x1b[90m")
    };

    if no_color {
        format!("[{}] > ", detector.window_string())
    } else {
        format!("{}{} [{}]\x1b[0m > ", color, emoji, detector.window_string())
    }
}

fn print_output(output: &DetectorOutput, args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string(output).unwrap());
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Achievement popup, persists for the rest of the session
fn print_achievement(detector: &SequenceDetector<SilentPlayback>, args: &Args) {
    if args.json {
        return;
    }

    println!();
    println!("{}", "╔══════════════════════════════════════╗".green());
    println!(
        "{} {} {}",
        "║".green(),
        format!("{:<36}", "ACHIEVEMENT UNLOCKED").bright_blue().bold(),
        "║".green()
    );
    println!(
        "{} {} {}",
        "║".green(),
        format!("{:<36}", "Factory Puzzle Solved").bold(),
        "║".green()
    );
    println!(
        "{} {} {}",
        "║".green(),
        format!("{:<36}", "Year 2300 A.D. - The door opens...").dimmed(),
        "║".green()
    );
    println!("{}", "╚══════════════════════════════════════╝".green());

    match detector.playback_reason() {
        Some(ReasonCode::K004_PLAYBACK_STARTED) => {
            println!("{}", "♪ Corridors of Time - type 'toggle' to pause".cyan());
        }
        Some(ReasonCode::K004_PLAYBACK_UNAVAILABLE) => {
            println!("{}", "(music unavailable)".dimmed());
        }
        _ => {}
    }
    println!();
}
