use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "header-guard",
    version,
    about = "Check/fix header guards in C/C++ header files"
)]
pub struct Cli {
    #[arg(required = true, num_args = 1.., help = "Files or directories")]
    pub paths: Vec<PathBuf>,
    #[arg(long, help = "Check only, do not rewrite files")]
    pub check: bool,
    #[arg(
        long,
        help = "Root path used to derive guard names (defaults to the current directory)"
    )]
    pub root: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}

impl Cli {
    /// Root directory for guard names, resolved to an absolute path.
    pub fn resolved_root(&self) -> anyhow::Result<PathBuf> {
        let root = match &self.root {
            Some(r) => r.clone(),
            None => std::env::current_dir()?,
        };
        root.canonicalize()
            .with_context(|| format!("cannot resolve root {}", root.display()))
    }
}
