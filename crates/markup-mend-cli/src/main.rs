use anyhow::{Context, Result};
use markup_mend_syntax::{Document, dump_tree, lexer};
use std::{env, fs, process};

struct Args {
    path: String,
    flatten: bool,
    tokens: bool,
}

fn parse_args() -> Args {
    let mut path = None;
    let mut flatten = false;
    let mut tokens = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--flatten" => flatten = true,
            "--tokens" => tokens = true,
            "--help" | "-h" => usage(0),
            _ if arg.starts_with('-') => {
                eprintln!("unknown option: {arg}");
                usage(2);
            }
            _ => {
                if path.replace(arg).is_some() {
                    eprintln!("expected exactly one input file");
                    usage(2);
                }
            }
        }
    }

    match path {
        Some(path) => Args {
            path,
            flatten,
            tokens,
        },
        None => usage(2),
    }
}

fn usage(code: i32) -> ! {
    eprintln!("usage: markup-mend [--tokens | --flatten] <file>");
    eprintln!();
    eprintln!("Parses a markup file and prints its syntax tree with tag blocks");
    eprintln!("grouped into elements.");
    eprintln!();
    eprintln!("  --tokens    print the raw token stream instead of a tree");
    eprintln!("  --flatten   unwrap elements back to the flat tag-block tree");
    process::exit(code);
}

fn main() -> Result<()> {
    let args = parse_args();
    let source = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path))?;

    if args.tokens {
        for token in lexer::lex(&source) {
            println!("{:?} {:?}", token.kind, token.text);
        }
        return Ok(());
    }

    let document = Document::parse(&source).build_elements();
    let document = if args.flatten {
        document.flatten_elements()
    } else {
        document
    };

    println!("{}", dump_tree(document.root()));
    Ok(())
}
