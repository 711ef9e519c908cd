//! ankor - heading anchor ID assignment for document trees

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;

use ankor::{AnchorOptions, Node, assign_heading_ids, collect_anchors};

#[derive(Parser)]
#[command(name = "ankor")]
#[command(version, about = "Assign stable anchor IDs to document headings", long_about = None)]
#[command(after_help = "EXAMPLES:
    ankor doc.json out.json     Assign heading IDs and write the tree
    ankor doc.json              Assign heading IDs and print to stdout
    ankor -l doc.json           List the resolved anchors")]
struct Cli {
    /// Input document tree (JSON), or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Preserve heading casing in derived slugs
    #[arg(short, long)]
    maintain_case: bool,

    /// List the resolved anchors instead of writing the tree
    #[arg(short, long)]
    list: bool,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ankor::Result<()> {
    let json = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let mut doc = Node::from_json(&json)?;
    let options = AnchorOptions {
        maintain_case: cli.maintain_case,
    };
    assign_heading_ids(&mut doc, &options);

    if cli.list {
        for anchor in collect_anchors(&doc) {
            let indent = anchor.depth.saturating_sub(1) as usize * 2;
            println!("{:indent$}#{} {}", "", anchor.id, anchor.text);
        }
        return Ok(());
    }

    let out = doc.to_json()?;
    match &cli.output {
        Some(path) => {
            fs::write(path, &out)?;
            if !cli.quiet {
                eprintln!("wrote {path}");
            }
        }
        None => println!("{out}"),
    }

    Ok(())
}
