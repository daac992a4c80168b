mod cli;
mod config;
mod error;
mod form;
mod journal;
mod player;
mod roster;
mod search;
mod table;

use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster", about = "Cricket player roster manager")]
pub struct Args {
    #[arg(
        short = 'c',
        long = "command",
        value_name = "LINE",
        action = clap::ArgAction::Append,
        help = "Run a command line and exit (repeatable, runs in order)"
    )]
    pub commands: Vec<String>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "ROSTER_JOURNAL_DIR", help = "Session journal directory")]
    pub journal_dir: Option<PathBuf>,

    #[arg(long, help = "Do not write a session journal")]
    pub no_journal: bool,

    #[arg(long, help = "Debug output (print settings and parsed commands)")]
    pub debug: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from(config_path)?
    } else {
        config::Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: failed to load config, using defaults: {}", e);
            config::Config::default()
        })
    };

    if let Err(errors) = cfg.validate() {
        for err in &errors {
            eprintln!("Config error {}", err);
        }
        return Err(anyhow::anyhow!(
            "Invalid configuration ({} errors)",
            errors.len()
        ));
    }

    let manager = roster::RosterManager::from_seed(&cfg.seed)?;

    let session_id = uuid::Uuid::new_v4().to_string();
    let journal = if args.no_journal || !cfg.journal_enabled() {
        journal::Journal::disabled(&session_id)
    } else {
        let root = std::env::current_dir()?;
        let journal_dir = args
            .journal_dir
            .clone()
            .unwrap_or_else(|| cfg.journal_dir(&root));
        std::fs::create_dir_all(&journal_dir)?;
        let journal_path = journal_dir.join(format!("{}.jsonl", session_id));
        journal::Journal::new(&journal_path, &session_id)?
    };

    if args.debug {
        eprintln!("[DEBUG] Session: {}", session_id);
        eprintln!("[DEBUG] Journal: {:?}", journal.path);
        eprintln!("[DEBUG] Seeded players: {}", manager.len());
        eprintln!("[DEBUG] Redraw after mutation: {}", cfg.redraw_after_mutation());
    }

    let ctx = cli::Context {
        roster: RefCell::new(manager),
        journal: RefCell::new(journal),
        session_id,
        debug: args.debug,
        config: cfg,
    };

    if let Err(e) = ctx.journal.borrow_mut().session_start(ctx.roster.borrow().len()) {
        eprintln!("Warning: failed to write journal: {}", e);
    }

    if args.commands.is_empty() {
        cli::run_repl(ctx)
    } else {
        cli::run_once(&ctx, &args.commands)
    }
}
