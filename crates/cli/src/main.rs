use anyhow::{anyhow, bail, Context, Result};
use catalog::{load_catalog, Catalog, Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use criteria::{
    filter, AndSpecification, ColorSpecification, NameContains, OrSpecification,
    SizeSpecification, Specification,
};
use journal::FileStore;
use relations::{Person, Relationships, Research};
use shapes::{total_area, Rectangle, Shape, Square};
use std::fs;
use std::path::{Path, PathBuf};

/// Sift - composable specification and filtering demos
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Filter items with composable specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a product catalog with composable criteria
    Filter {
        /// Path to a catalog file (id::name::color::size per line);
        /// a built-in sample catalog is used when omitted
        #[arg(long)]
        data: Option<PathBuf>,

        /// Keep only products of this color
        #[arg(long)]
        color: Option<Color>,

        /// Keep only products of this size
        #[arg(long)]
        size: Option<Size>,

        /// Keep only products whose name contains this text
        #[arg(long)]
        name_contains: Option<String>,

        /// Combine the given criteria with OR instead of AND
        #[arg(long)]
        any: bool,
    },

    /// Keep a journal of numbered entries in a file
    Journal {
        /// Path of the journal file
        #[arg(long)]
        file: PathBuf,

        #[command(subcommand)]
        action: JournalAction,
    },

    /// List the recorded children of a person
    Children {
        /// Name of the parent to look up
        #[arg(long)]
        of: String,

        /// Path to a family file (parent::child per line);
        /// a built-in sample family is used when omitted
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Print the areas of a demo set of shapes
    Shapes,
}

#[derive(Subcommand)]
enum JournalAction {
    /// Append an entry
    Add { text: String },
    /// Print all entries
    List,
    /// Remove the entry at a list position
    Remove { pos: usize },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            data,
            color,
            size,
            name_contains,
            any,
        } => handle_filter(data, color, size, name_contains, any)?,
        Commands::Journal { file, action } => handle_journal(file, action)?,
        Commands::Children { of, data } => handle_children(of, data)?,
        Commands::Shapes => handle_shapes()?,
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(
    data: Option<PathBuf>,
    color: Option<Color>,
    size: Option<Size>,
    name_contains: Option<String>,
    any: bool,
) -> Result<()> {
    let catalog = match data {
        Some(path) => load_catalog(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => sample_catalog()?,
    };

    // One leaf specification per provided flag
    let mut specs: Vec<Box<dyn Specification<Product>>> = Vec::new();
    if let Some(color) = color {
        specs.push(Box::new(ColorSpecification::new(color)));
    }
    if let Some(size) = size {
        specs.push(Box::new(SizeSpecification::new(size)));
    }
    if let Some(needle) = name_contains {
        specs.push(Box::new(NameContains::new(needle)));
    }

    if specs.is_empty() {
        bail!("provide at least one of --color, --size, --name-contains");
    }

    let spec: Box<dyn Specification<Product>> = if any {
        Box::new(OrSpecification::new(specs)?)
    } else {
        Box::new(AndSpecification::new(specs)?)
    };

    let total = catalog.len();
    let mut matched = 0usize;
    for result in filter(catalog.products(), spec.as_ref()) {
        let product = result?;
        println!("  {} {}", "✓".green(), product);
        matched += 1;
    }
    println!("{} of {} products matched", matched, total);

    Ok(())
}

/// Handle the 'journal' command
fn handle_journal(file: PathBuf, action: JournalAction) -> Result<()> {
    let store = FileStore::new(&file);
    let mut journal = store
        .load_or_new()
        .with_context(|| format!("Failed to load journal from {}", file.display()))?;

    match action {
        JournalAction::Add { text } => {
            let seq = journal.add_entry(text);
            store.save(&journal).context("Failed to save journal")?;
            println!("{} Added entry {}", "✓".green(), seq);
        }
        JournalAction::List => {
            if journal.is_empty() {
                println!("(journal is empty)");
            } else {
                println!("{}", journal);
            }
        }
        JournalAction::Remove { pos } => {
            let removed = journal
                .remove_entry(pos)
                .context("Failed to remove entry")?;
            store.save(&journal).context("Failed to save journal")?;
            println!("{} Removed entry {}: {}", "✓".green(), removed.seq, removed.text);
        }
    }

    Ok(())
}

/// Handle the 'children' command
fn handle_children(of: String, data: Option<PathBuf>) -> Result<()> {
    let relationships = match data {
        Some(path) => load_family(&path)?,
        None => sample_family(),
    };

    let research = Research::new(&relationships);
    let findings = research.report(&of);

    if findings.is_empty() {
        println!("No children recorded for {}", of.bold());
    } else {
        for finding in findings {
            println!("  {}", finding);
        }
    }

    Ok(())
}

/// Handle the 'shapes' command
fn handle_shapes() -> Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(2.0, 3.0)?),
        Box::new(Rectangle::new(4.0, 1.5)?),
        Box::new(Square::new(5.0)?),
    ];

    for shape in &shapes {
        println!("  {:<9} area = {}", shape.name(), shape.area());
    }
    println!("Total area: {}", total_area(&shapes));

    Ok(())
}

/// Built-in catalog used when no --data file is given
fn sample_catalog() -> Result<Catalog> {
    let catalog = Catalog::from_products(vec![
        Product::new(1, "Apple", Color::Green, Size::Small),
        Product::new(2, "Tree", Color::Green, Size::Large),
        Product::new(3, "House", Color::Blue, Size::Large),
        Product::new(4, "Cherry", Color::Red, Size::Small),
        Product::new(5, "Boat", Color::Blue, Size::Medium),
    ])?;
    Ok(catalog)
}

/// Built-in family used when no --data file is given
fn sample_family() -> Relationships {
    let john = Person::new("John");
    let chris = Person::new("Chris");
    let matt = Person::new("Matt");

    let mut relationships = Relationships::new();
    relationships.add_parent_child(&john, &chris);
    relationships.add_parent_child(&john, &matt);
    relationships.add_siblings(&chris, &matt);
    relationships
}

/// Parse a family file: one `parent::child` pair per line
fn load_family(path: &Path) -> Result<Relationships> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read family file {}", path.display()))?;

    let mut relationships = Relationships::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (parent, child) = line
            .split_once("::")
            .ok_or_else(|| anyhow!("line {}: expected parent::child", idx + 1))?;
        relationships.add_parent_child(&Person::new(parent.trim()), &Person::new(child.trim()));
    }

    Ok(relationships)
}
