use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use log::info;

use naturequiz::bank::QuestionBank;
use naturequiz::cli::Cli;
use naturequiz::logging;
use naturequiz::session::QuizSession;
use naturequiz::state::AppState;
use naturequiz::store::{default_data_dir, FileScoreStore, MemoryScoreStore, ScoreStore};
use naturequiz::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir);

    if let Err(e) = logging::init_logging(&data_dir, cli.verbose) {
        eprintln!("Warning: {}", e);
    }
    info!("Data directory {}", data_dir.display());

    let file_store = FileScoreStore::new(&data_dir);

    // Handle --best
    if cli.best {
        println!("Best score: {}%", file_store.load_best());
        return Ok(());
    }

    // Handle --reset-best
    if cli.reset_best {
        file_store.clear()?;
        eprintln!("Best score cleared.");
    }

    let bank = load_bank(cli.bank.as_deref())?;

    let store: Box<dyn ScoreStore> = if cli.no_save {
        Box::new(MemoryScoreStore::new())
    } else {
        Box::new(file_store)
    };

    let session = match cli.seed {
        Some(seed) => QuizSession::seeded(seed),
        None => QuizSession::new(),
    };

    let state = AppState::new(Arc::new(bank), session, store, cli.seed)?;
    tui::run_tui(state)?;

    Ok(())
}

fn load_bank(path: Option<&str>) -> Result<QuestionBank, String> {
    match path {
        Some(p) => {
            let bank = QuestionBank::load(Path::new(p))
                .map_err(|e| format!("{} ({})", e, p))?;
            info!("Loaded {} questions from {}", bank.len(), p);
            Ok(bank)
        }
        None => Ok(QuestionBank::builtin()),
    }
}
