use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{json, Value};
use std::fs;

/// A CLI tool to generate random flow graph JSON for exercising the compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The minimum number of task nodes in the main chain
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of task nodes in the main chain
    #[arg(long, default_value_t = 5)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating a random flow graph ({} to {} chained tasks)...",
        cli.min, cli.max
    );

    let document = generate_flow(&mut rng, cli.min, cli.max);
    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved flow to '{}'", cli.output);
    Ok(())
}

/// Builds a valid editor-format document: a start node, a chain of tasks,
/// and a tail section that is either linear, a parallel fan-out converging
/// on the end node, or a condition with branches to the end node.
fn generate_flow(rng: &mut ThreadRng, min: usize, max: usize) -> Value {
    let mut nodes = vec![editor_node("start-1", "start", "Start", rng)];
    let mut edges = Vec::new();

    let chain_len = rng.random_range(min..=max);
    let mut previous = "start-1".to_string();
    for i in 0..chain_len {
        let id = format!("task-{}", i + 1);
        nodes.push(editor_node(&id, task_type(rng), "Task", rng));
        edges.push(editor_edge(edges.len(), &previous, &id));
        previous = id;
    }

    nodes.push(editor_node("end-1", "end", "End", rng));

    match rng.random_range(0..3) {
        // Linear tail.
        0 => edges.push(editor_edge(edges.len(), &previous, "end-1")),
        // Parallel fan-out converging on the end node.
        1 => {
            let width = rng.random_range(2..=3);
            for i in 0..width {
                let id = format!("branch-{}", i + 1);
                nodes.push(editor_node(&id, task_type(rng), "Branch", rng));
                edges.push(editor_edge(edges.len(), &previous, &id));
                edges.push(editor_edge(edges.len(), &id, "end-1"));
            }
        }
        // Condition with one task per branch.
        _ => {
            nodes.push(editor_node("cond-1", "condition", "Decide", rng));
            edges.push(editor_edge(edges.len(), &previous, "cond-1"));
            let width = rng.random_range(2..=3);
            for i in 0..width {
                let id = format!("case-{}", i + 1);
                nodes.push(editor_node(&id, task_type(rng), "Case", rng));
                edges.push(editor_edge(edges.len(), "cond-1", &id));
                edges.push(editor_edge(edges.len(), &id, "end-1"));
            }
        }
    }

    json!({ "nodes": nodes, "edges": edges })
}

fn task_type(rng: &mut ThreadRng) -> &'static str {
    if rng.random_bool(0.5) {
        "code"
    } else {
        "http-request"
    }
}

fn editor_node(id: &str, node_type: &str, title: &str, rng: &mut ThreadRng) -> Value {
    let mut data = json!({ "title": title, "params": random_params(rng) });
    if node_type == "http-request" {
        data["method"] = json!("POST");
        data["url"] = json!("https://example.invalid/hook");
    }
    json!({ "id": id, "type": node_type, "title": title, "data": data })
}

fn random_params(rng: &mut ThreadRng) -> Value {
    let mut params = Vec::new();
    for i in 0..rng.random_range(0..=2) {
        let value = if rng.random_bool(0.5) {
            "literal value".to_string()
        } else {
            format!("prefix {{{{#task-{}.result#}}}} suffix", i + 1)
        };
        params.push(json!({
            "variable": format!("param{}", i + 1),
            "label": format!("Parameter {}", i + 1),
            "required": rng.random_bool(0.5),
            "type": "string",
            "value": value,
        }));
    }
    json!(params)
}

fn editor_edge(index: usize, source: &str, target: &str) -> Value {
    json!({
        "id": format!("edge-{}", index + 1),
        "source": source,
        "target": target,
        "sourceHandle": "source",
        "targetHandle": "target",
    })
}
