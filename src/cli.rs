// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    config::{
        consts::{DEBUG_LOG_FILE, STORE_DIR},
        options::{AppOptions, ReadmeOptions},
    },
    core::HttpClient,
    error::Result,
    file,
    progress::Progress,
    runner,
    session::Session,
};

/// Keep a pub.dev package list README up to date
#[derive(Parser, Debug)]
#[command(name = "pub_readme", version, about)]
pub struct Cli {
    /// Repository holding README.md (auto-detected when omitted)
    #[arg(long, global = true, env = "PUB_README_REPO")]
    pub repo: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, global = true, env = "PUB_README_REGISTRY")]
    pub registry: Option<String>,

    /// Publisher whose packages are listed
    #[arg(long, global = true, env = "PUB_README_PUBLISHER")]
    pub publisher: Option<String>,

    /// Debug-level file logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Discover packages on the registry and rewrite README.md
    Update {
        /// Add, commit and force-push README.md afterwards
        #[arg(long)]
        push: bool,
    },

    /// Print the packages listed in README.md
    List,

    /// Add a package to README.md
    Add { name: String },

    /// Remove a package from README.md
    Remove { name: String },

    /// Regenerate README.md from its own package list
    Generate,

    /// Pull the repository (keeping our side on conflicts)
    Pull,

    /// Regenerate, commit and force-push README.md
    Publish {
        /// Commit message
        #[arg(long, short = 'm')]
        message: Option<String>,
    },
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(url) = &self.registry {
            opts.registry = opts.registry.with_base_url(url);
        }
        if let Some(p) = &self.publisher {
            opts.registry.publisher = p.clone();
        }
        let repo = self.repo.clone().unwrap_or_else(file::find_repo_path);
        opts.readme = ReadmeOptions::for_repo(repo);
        opts
    }
}

/// Prints progress straight to stdout, one line per event.
#[derive(Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str, version: &str) {
        println!("  ✓ {name} v{version}");
    }
    fn item_failed(&mut self, name: &str) {
        println!("  ✗ {name} (failed)");
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let mut options = cli.options();
    let repo = options.readme.repo_path.clone();
    crate::log::init(&Path::new(STORE_DIR).join(DEBUG_LOG_FILE), cli.verbose);
    logf!("CLI: {:?} in {}", cli.command, repo.display());

    let mut progress = ConsoleProgress;
    let rule = "=".repeat(60);

    match cli.command {
        Command::Update { push } => {
            options.git.push = push;
            println!("{rule}\n📦 GLLB-Apps Package Updater\n{rule}");
            let client = HttpClient::new(options.registry.timeout)?;
            runner::run_update(&options, &client, &mut progress)?;
            println!("{rule}");
        }
        Command::List => {
            let mut session = Session::new(&repo);
            session.load_from_readme(&mut progress)?;
            for entry in session.sorted_packages() {
                println!("{}\t{}\t{}", entry.name, entry.version, entry.source);
            }
        }
        Command::Add { name } => {
            let mut session = Session::new(&repo);
            session.load_from_readme(&mut progress)?;
            session.add_package(&name, &mut progress)?;
            session.generate_readme(&mut progress)?;
        }
        Command::Remove { name } => {
            let mut session = Session::new(&repo);
            session.load_from_readme(&mut progress)?;
            session.remove_package(Some(&name), &mut progress)?;
            session.generate_readme(&mut progress)?;
        }
        Command::Generate => {
            let mut session = Session::new(&repo);
            session.load_from_readme(&mut progress)?;
            session.generate_readme(&mut progress)?;
        }
        Command::Pull => {
            Session::new(&repo).pull(&mut progress)?;
        }
        Command::Publish { message } => {
            let mut session = Session::new(&repo);
            session.load_from_readme(&mut progress)?;
            let message = message.unwrap_or(options.git.commit_message);
            session.publish(&message, &mut progress)?;
        }
    }
    Ok(())
}
