use std::path::PathBuf;

use clap::Parser;
use quantity_quiz::{Config, DEFAULT_BASE_PATH, Quiz, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// URL prefix under which question images are served
    #[arg(short, long, env = "QUIZ_BASE_PATH", default_value = DEFAULT_BASE_PATH)]
    base_path: String,

    /// Directory holding the files served under the base path
    #[arg(short, long, env = "QUIZ_ASSETS_DIR", default_value = ".")]
    assets_dir: PathBuf,

    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Write logs to this file; nothing is logged without it
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(&args.log_level, args.log_file.as_deref()) {
        eprintln!("Error setting up logging: {}", e);
        std::process::exit(1);
    }

    let config = Config::new(args.base_path, args.assets_dir);
    let quiz = match Quiz::from_json(&args.questions, config) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
