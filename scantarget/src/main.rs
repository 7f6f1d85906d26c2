use clap::Parser;
use scantarget::logging::init_logging;
use scantarget::output;
use scantarget_lib::config::get_config;
use scantarget_lib::eval;
use scantarget_lib::record::fetch_user_record;
use scantarget_lib::scoring::calculate_score;
use tracing::debug;

/// Identifier the bare demo run fetches
const DEMO_USER_ID: i64 = 1;

#[derive(Parser, Debug)]
#[command(name = "scantarget")]
#[command(about = "Sample codebase driver for legacy-code analyzer demos", long_about = None)]
struct Args {
    /// Arithmetic expression to evaluate
    #[arg(short, long, allow_hyphen_values = true)]
    expr: Option<String>,

    /// Comma-separated numbers to score
    #[arg(short, long, allow_hyphen_values = true)]
    score: Option<String>,

    /// Fetch the demo user record for this identifier
    #[arg(short, long)]
    user: Option<i64>,

    /// Print the fixed configuration settings
    #[arg(long)]
    show_config: bool,

    /// Output format: json or text
    #[arg(short, long, default_value = "text")]
    format: String,
}

impl Args {
    /// True when no operation flag was given and the bare demo runs
    fn is_demo_run(&self) -> bool {
        self.expr.is_none() && self.score.is_none() && self.user.is_none() && !self.show_config
    }
}

/// Parse the comma-separated value list for the score flag
fn parse_score_values(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| format!("Invalid number '{part}' in score list"))
        })
        .collect()
}

/// The original demo flow: banner plus a fixed-record fetch
///
/// Exactly two lines on stdout; the simulated query only shows up on
/// stderr when debug logging is enabled.
fn run_demo() {
    println!("Legacy Code Analyzer Demo");
    let record = fetch_user_record(DEMO_USER_ID);
    println!("User: {record}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Validate format
    if args.format != "json" && args.format != "text" {
        eprintln!("Error: Unknown format '{}'. Use 'json' or 'text'", args.format);
        std::process::exit(1);
    }

    let config = get_config();
    init_logging(&config);
    debug!("settings: {config:?}");

    if args.is_demo_run() {
        run_demo();
        return Ok(());
    }

    if args.show_config {
        println!("{}", output::render_config(&config, &args.format));
    }

    if let Some(id) = args.user {
        let record = fetch_user_record(id);
        println!("{}", output::render_record(&record, &args.format));
    }

    if let Some(raw) = &args.score {
        let items = match parse_score_values(raw) {
            Ok(items) => items,
            Err(message) => {
                eprintln!("Error: {message}");
                std::process::exit(1);
            }
        };
        let total = calculate_score(&items);
        println!("{}", output::render_score(&items, total, &args.format));
    }

    if let Some(expr) = &args.expr {
        match eval::evaluate(expr) {
            Ok(value) => println!("{}", output::render_eval(expr, value, &args.format)),
            Err(err) => {
                eprintln!("Error: failed to evaluate '{expr}': {err}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
