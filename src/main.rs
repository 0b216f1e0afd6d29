use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_INPUT: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive metrics form (default if no subcommand)
    Form {
        /// Prefill the form from a metrics YAML file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Score a metrics file and print the prediction
    Predict {
        /// Path to the metrics YAML file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show the per-factor score breakdown
        #[arg(long)]
        explain: bool,
    },
    /// Print the field-by-field filling guide
    Guide,
    /// Create a metrics YAML file, interactively or blank
    Init {
        /// Where to write the file
        #[arg(default_value = "metrics.yaml")]
        path: PathBuf,

        /// Write an empty template without prompting
        #[arg(long)]
        blank: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "mfg-score")]
#[command(about = "Manufacturing performance scoring from operational metrics", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Form { input: None });

    match command {
        Commands::Form { input } => {
            let record = match input {
                Some(path) => match mfg_score::input::load_metrics(&path) {
                    Ok(mut record) => {
                        if cli.verbose {
                            eprintln!("Prefilled form from {}", path.display());
                        }
                        // Derived field catches up with whatever the file holds
                        mfg_score::scoring::refresh_utilization(&mut record);
                        record
                    }
                    Err(e) => {
                        eprintln!("Input error: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
                None => mfg_score::input::MetricsRecord::default(),
            };

            let app = mfg_score::tui::App::new(record);
            if let Err(e) = mfg_score::tui::run_tui(app) {
                eprintln!("Terminal error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }

        Commands::Predict {
            input,
            json,
            explain,
        } => {
            let mut record = match mfg_score::input::load_metrics(&input) {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Input error: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Loaded metrics for '{}' from {}",
                    record.company_name, input.display()
                );
            }

            mfg_score::scoring::refresh_utilization(&mut record);

            match mfg_score::scoring::compute_prediction(&record) {
                Ok(result) => {
                    if json {
                        println!("{}", mfg_score::output::result_json(&result));
                    } else {
                        let use_colors = mfg_score::output::should_use_colors();
                        println!("{}", mfg_score::output::format_result(&result, use_colors));
                        if explain {
                            println!();
                            println!(
                                "{}",
                                mfg_score::output::format_breakdown(&result, use_colors)
                            );
                        }
                    }
                }
                Err(errors) => {
                    eprintln!("Cannot score - required fields are missing:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_VALIDATION);
                }
            }
        }

        Commands::Guide => {
            let use_colors = mfg_score::output::should_use_colors();
            println!("{}", mfg_score::help::format_guide(use_colors));
        }

        Commands::Init { path, blank } => {
            if let Err(e) = mfg_score::input::run_init_wizard(&path, blank) {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
