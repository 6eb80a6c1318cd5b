use crate::reports;
use bootforge::error::{BfResult, BootForgeError};
use bootforge::keymap::{self, Rule, TABLE_SIZE};
use bootforge::layouts::KnownLayout;
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct KeymapArgs {
    /// Built-in layout to compile (azerty, qwerty).
    #[arg(short, long, default_value = "azerty")]
    pub layout: String,

    /// JSON rule file replacing the built-in layout.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(short, long, default_value = "keymap.bin")]
    pub output: PathBuf,

    /// Render each compiled layer as a character grid.
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

pub fn run(args: KeymapArgs) -> BfResult<()> {
    let rules = match &args.rules {
        Some(path) => {
            info!("📂 Loading rules from {}", path.display());
            Rule::load_from_file(path)?
        }
        None => {
            let layout = KnownLayout::from_str(&args.layout)
                .map_err(|_| BootForgeError::Rule(format!("unknown layout '{}'", args.layout)))?;
            info!("⌨️  Compiling built-in layout: {layout}");
            layout.rules()
        }
    };

    let table = keymap::compile(&rules)?;
    table.write_to(&args.output)?;
    info!(
        "📦 Wrote {} bytes ({} rules) to {}",
        TABLE_SIZE,
        rules.len(),
        args.output.display()
    );

    if args.show {
        reports::print_keymap_grids(&table);
    }
    Ok(())
}
