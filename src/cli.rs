//! Minimal CLI: Go file → per-struct JSON schema transcript
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;

use crate::builder::{BuildOptions, SchemaBuilder};
use crate::decl::TypeDeclaration;
use crate::schema::RequiredNames;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// print a JSON-schema-ish description of every tagged struct in a Go source file
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// Go source file to inspect
    path: PathBuf,

    /// treat PATH as a JSON declaration list (as written by --dump-declarations)
    #[arg(long, default_value_t = false)]
    declarations: bool,

    /// print the parsed declaration list as JSON instead of schemas
    #[arg(long, default_value_t = false)]
    dump_declarations: bool,

    /// list the raw json tag content in `required` instead of the property name
    #[arg(long, default_value_t = false)]
    literal_required: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// more logging on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Default log directive for `-v` counts.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }

        let decls = self.load_declarations()?;
        tracing::info!(path = %self.path.display(), count = decls.len(), "loaded declarations");

        let output = if self.dump_declarations {
            let mut json = serde_json::to_string_pretty(&decls)?;
            json.push('\n');
            json
        } else {
            let builder = SchemaBuilder::new(BuildOptions {
                required_names: if self.literal_required {
                    RequiredNames::Literal
                } else {
                    RequiredNames::Resolved
                },
            });
            crate::render::transcript(builder.build_all(&decls))?
        };

        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, &output)
                .with_context(|| format!("failed to write {}", out.display()))?;
        } else {
            print!("{output}");
        }
        Ok(())
    }

    fn load_declarations(&self) -> anyhow::Result<Vec<TypeDeclaration>> {
        if self.declarations {
            let source = std::fs::read_to_string(&self.path)
                .with_context(|| format!("failed to read {}", self.path.display()))?;
            crate::path_de::declarations_from_str(&source).with_context(|| {
                format!("failed to load declarations from {}", self.path.display())
            })
        } else {
            Ok(crate::source::parse_file(&self.path)?)
        }
    }
}
