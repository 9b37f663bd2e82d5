use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use predicate_rewrite::{
    CompareClass, CompareOperator, ExprSignature, Node, NodeDef, OrderInference, RewriteOpts,
};

#[derive(Parser, Debug)]
#[command(name = "predrw", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a tree and evaluate it against a context.
    Eval(EvalArgs),
    /// Print the canonical form of a tree.
    Canonicalize(CanonicalizeArgs),
    /// Assume the outcome of the best anchor comparison and print the simplified tree.
    Propagate(PropagateArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Context JSON (flat object of name -> scalar).
    #[arg(long)]
    ctx: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CanonicalizeArgs {
    /// Input tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Mirror order operators when their operands are swapped.
    #[arg(long)]
    mirror_order: bool,
}

#[derive(Parser, Debug)]
struct PropagateArgs {
    /// Input tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Assumed outcome of the anchor comparison.
    #[arg(long, action = clap::ArgAction::Set)]
    assume: bool,

    /// Rewrite options JSON; flags below override it.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Decide order comparisons through the implication table.
    #[arg(long)]
    implication: bool,

    /// Mirror order operators when their operands are swapped.
    #[arg(long)]
    mirror_order: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Canonicalize(args) => cmd_canonicalize(args),
        Command::Propagate(args) => cmd_propagate(args),
    }
}

fn read_tree_json(path: &Path) -> anyhow::Result<Node> {
    let f = File::open(path).with_context(|| format!("open tree '{}'", path.display()))?;
    let def: NodeDef =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse tree JSON")?;
    let node = predicate_rewrite::build_node(&def)
        .with_context(|| format!("validate tree '{}'", path.display()))?;
    Ok(node)
}

fn read_to_string(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn print_tree(node: &Node) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&node.to_def()).with_context(|| "serialize tree")?;
    println!("{json}");
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let tree = read_tree_json(&args.in_path)?;
    let ctx = match &args.ctx {
        Some(p) => predicate_rewrite::Context::from_json(&read_to_string(p, "context")?)?,
        None => predicate_rewrite::Context::new(),
    };
    if ctx.is_empty() {
        tracing::warn!("empty context; every named operand evaluates as undefined");
    } else {
        tracing::debug!(entries = ctx.len(), "context loaded");
    }
    let value = tree.eval(&ctx)?;
    println!("{}", serde_json::to_string(&value).with_context(|| "serialize value")?);
    Ok(())
}

fn cmd_canonicalize(args: CanonicalizeArgs) -> anyhow::Result<()> {
    let tree = read_tree_json(&args.in_path)?;
    let opts = predicate_rewrite::CanonicalizeOpts {
        mirror_order_operators: args.mirror_order,
    };
    print_tree(&predicate_rewrite::canonicalize_with(tree, &opts))
}

fn cmd_propagate(args: PropagateArgs) -> anyhow::Result<()> {
    let mut opts = match &args.opts {
        Some(p) => RewriteOpts::from_json(&read_to_string(p, "options")?)?,
        None => RewriteOpts::default(),
    };
    if args.implication {
        opts.order_inference = OrderInference::Implication;
    }
    if args.mirror_order {
        opts.canonicalize.mirror_order_operators = true;
    }

    let tree = read_tree_json(&args.in_path)?;
    let tree = predicate_rewrite::canonicalize_with(tree, &opts.canonicalize);

    let Some(probe) = first_static_compare(&tree) else {
        eprintln!("no comparison against a static value; tree unchanged");
        return print_tree(&tree);
    };
    let signature = ExprSignature::of(&probe);
    let candidates = predicate_rewrite::collect_candidates(&tree, &probe);
    let anchor = predicate_rewrite::select_rewrite_expression(&signature, &candidates)?.clone();
    eprintln!("anchor: {anchor} (assumed {})", args.assume);

    let out =
        predicate_rewrite::compare_rewrite_with(tree, &signature, &anchor, args.assume, &opts)?;
    print_tree(&out)
}

/// First comparison (pre-order) that can anchor a propagation.
fn first_static_compare(tree: &Node) -> Option<CompareOperator> {
    let mut found = None;
    predicate_rewrite::walk(tree, &mut |n: &Node| {
        if found.is_none()
            && let Some(c) = n.as_compare()
            && c.static_side().is_some()
            && (c.op.class() == CompareClass::Order || c.left.is_named())
        {
            found = Some(c.clone());
        }
    });
    found
}
