use std::path::PathBuf;

use anyhow::{Context, Result};
use btree_index::{BTree, RecordReader, TreeConfig, DEFAULT_MAXIMUM};
use clap::Parser;

#[derive(Parser)]
#[command(name = "btree-load")]
#[command(about = "Load whitespace-delimited key/value records into a B-tree and print it")]
struct Cli {
    /// Record file: one `key value` pair per line
    input: PathBuf,

    /// Maximum entries per node (odd, at least 1)
    #[arg(short, long, default_value_t = DEFAULT_MAXIMUM)]
    maximum: usize,

    /// Do not print a line for each inserted record
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TreeConfig::new(cli.maximum).context("Invalid --maximum")?;
    let mut tree: BTree<i64, String> = BTree::with_config(config);

    let reader = RecordReader::<_, i64, String>::open(&cli.input)
        .with_context(|| format!("Failed to open {:?}", cli.input))?;

    for record in reader {
        let (key, value) = record.with_context(|| format!("Failed to read {:?}", cli.input))?;
        tree.insert(key, value);
        if !cli.quiet {
            println!("{} inserted", key);
        }
    }

    print!("{}", tree);
    println!(
        "{} entries, {} nodes, height {}",
        tree.len(),
        tree.node_count(),
        tree.height()
    );
    println!("{}", tree.stats().snapshot());

    Ok(())
}
