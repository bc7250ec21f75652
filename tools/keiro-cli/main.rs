use clap::Parser;
use keiro::flow::selector::referenced_selectors;
use keiro::prelude::*;
use std::fs;
use std::time::Instant;

/// A graph-structuring compiler CLI: turns a flow editor's JSON export into
/// an execution-engine program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow graph JSON file
    flow_path: String,

    /// Write the compiled program to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// List the `{{#...#}}` selectors referenced by node parameters and exit
    #[arg(long)]
    selectors: bool,
}

fn main() {
    let cli = Cli::parse();

    let flow_json = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read flow file '{}': {}",
            &cli.flow_path, e
        ))
    });

    let document = FlowDocument::from_json(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)));
    let flow = document
        .into_flow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert flow document: {}", e)));

    if cli.selectors {
        print_selectors(&flow);
        return;
    }

    let compile_start = Instant::now();
    let output = Compiler::builder(flow)
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    let compile_duration = compile_start.elapsed();

    eprintln!(
        "Compiled {} binding(s) in {:?}",
        output.bindings.len(),
        compile_duration
    );

    let artifact = output.artifact();
    match cli.output {
        Some(path) => {
            fs::write(&path, &artifact).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write program to '{}': {}", path, e))
            });
            eprintln!("Program written to '{}'", path);
        }
        None => println!("{}", artifact),
    }
}

/// Prints every selector referenced by a node parameter, grouped per node.
fn print_selectors(flow: &FlowDefinition) {
    for node in &flow.nodes {
        let mut selectors = Vec::new();
        for param in &node.params {
            if let Some(value) = &param.value {
                selectors.extend(referenced_selectors(value));
            }
        }
        if !selectors.is_empty() {
            println!("{}: {}", node.id, selectors.join(", "));
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
