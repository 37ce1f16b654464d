//! Filter domain names from stdin against a match file.
//!
//! Reads one domain per line and prints the lines covered by the match list
//! (or, with `--invert`, the ones that are not).

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};

use dfilter_r::{
    parse_patterns_from_file, DomainFilter, DomainPolicy, DomainTrie, MatchMode, NilPolicy,
    PublicSuffixPolicy, Result, DEFAULT_CACHE_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "dfilter", version, about = "Filter domain names from stdin against a match file")]
struct Args {
    /// File of domain patterns, one per line (`*.zone` and `+.zone`
    /// wildcards supported)
    #[arg(short, long)]
    match_file: PathBuf,

    /// Accept wildcard zone matches instead of exact matches only
    #[arg(short, long)]
    wildcard: bool,

    /// Print lines that do NOT match
    #[arg(short = 'v', long)]
    invert: bool,

    /// Reject patterns and queries that are not plausible public domains
    #[arg(long)]
    strict: bool,

    /// Match-decision cache size
    #[arg(long, default_value_t = DEFAULT_CACHE_SIZE)]
    cache_size: usize,
}

fn run(args: &Args) -> Result<()> {
    let patterns = parse_patterns_from_file(&args.match_file)?;

    let policy: Arc<dyn DomainPolicy> = if args.strict {
        Arc::new(PublicSuffixPolicy)
    } else {
        Arc::new(NilPolicy)
    };
    let trie = DomainTrie::with_policy(&patterns, policy);
    if trie.is_empty() {
        warn!(
            "match file {} produced an empty index; nothing will match",
            args.match_file.display()
        );
    }

    let mode = if args.wildcard {
        MatchMode::Wildcard
    } else {
        MatchMode::Exact
    };
    let filter = DomainFilter::with_cache_size(trie, mode, args.invert, args.cache_size);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);
    let kept = filter.run(stdin, &mut writer)?;
    writer.flush()?;
    info!("kept {kept} lines");

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}
