use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use topolog_graph::{write_history, CommitGraph};
use topolog_loose::LooseObjectStore;
use topolog_ref::BranchHeads;
use topolog_repository::Repository;

#[derive(Parser)]
#[command(
    name = "topolog",
    about = "Print branch history in topological order, straight from the loose object store",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Run as if started in <path>
    #[arg(short = 'C', value_name = "path")]
    change_dir: Option<PathBuf>,

    /// Use <path> as the repository metadata directory instead of searching upward
    #[arg(long = "git-dir", value_name = "path")]
    git_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.change_dir {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("fatal: cannot change to '{}': {}", dir.display(), e);
            process::exit(1);
        }
    }

    if let Err(e) = run(&cli) {
        eprintln!("fatal: {e}");
        process::exit(1);
    }
}

/// Open the repository, assemble the commit graph, and print its history.
fn run(cli: &Cli) -> Result<()> {
    let repo = open_repo(cli)?;
    let store = LooseObjectStore::open(repo.objects_dir());
    let heads = BranchHeads::read(repo.heads_dir())?;

    let mut graph = CommitGraph::from_store(&store)?;
    let mut order = graph.topo_order();
    graph.prune_unreachable(&mut order, &heads);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_history(&mut out, &graph, &order, &heads)?;
    out.flush()?;
    Ok(())
}

/// Open a repository, respecting the --git-dir override.
fn open_repo(cli: &Cli) -> Result<Repository> {
    let repo = if let Some(ref git_dir) = cli.git_dir {
        Repository::open(git_dir)?
    } else {
        Repository::discover(".")?
    };
    Ok(repo)
}
