//! Minimal CLI: declarations → (codec | stream-codec)
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::codegen::{Codegen, Generation, Outcome, Paradigm};
use crate::config::{Config, NameStyle};
use crate::synth::Insertion;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// synthesize `Codec` / `StreamCodec` declarations from JSON type declarations
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate a value codec (`CODEC`), or the `StringRepresentable` codec for enums
    Codec(GenerateOut),
    /// generate a binary stream codec (`STREAM_CODEC`)
    StreamCodec(GenerateOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more declaration documents. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// name of the declaration to generate for (first declaration if omitted)
    #[arg(long = "type")]
    type_name: Option<String>,
}

#[derive(Args, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// name style for generated code (overrides the config file)
    #[arg(long, value_enum)]
    style: Option<NameStyle>,

    /// source file the declaration came from; edits are applied to it
    #[arg(long)]
    source: Option<PathBuf>,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<crate::decl::TypeDecl>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .map_err(|error| anyhow::anyhow!("failed to resolve input file paths: {error}"))?;
        let mut decls = Vec::new();
        for source_path in source_paths {
            let loaded = crate::decl::load_document(&source_path)
                .with_context(|| format!("failed to load declarations ({})", source_path.display()))?;
            decls.extend(loaded);
        }
        Ok(decls)
    }
}

impl GenerateOut {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path).with_context(|| format!("failed to load config ({})", path.display()))?,
            None => Config::default(),
        };
        if let Some(style) = self.style {
            config.style = style;
        }
        Ok(config)
    }

    fn run(&self, paradigm: Paradigm) -> Result<()> {
        let codegen = Codegen::new(self.config()?);
        let decls = self.input_settings.load()?;
        let decl = crate::decl::select(&decls, self.input_settings.type_name.as_deref());

        let generation = match codegen.emit_selected(decl, paradigm)? {
            Outcome::Generated(generation) => generation,
            Outcome::Skipped(reason) => {
                let name = self.input_settings.type_name.as_deref().unwrap_or("<first>");
                eprintln!("{} {name}: {reason}", "skipped".yellow().bold());
                return Ok(());
            }
        };

        let output = match (&self.source, decl) {
            (Some(source), Some(decl)) => {
                let mut doc = std::fs::read_to_string(source)
                    .with_context(|| format!("failed to read source file ({})", source.display()))?;
                crate::edit::plan(decl, &generation, &codegen.config().indent)?.commit(&mut doc)?;
                doc
            }
            _ => render_fragments(&generation),
        };

        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, &output)?;
            eprintln!("{} {} → {}", "generated".green().bold(), generation.type_name, out.display());
        } else {
            print!("{output}");
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        let (target, paradigm) = match &self.cmd {
            Command::Codec(target) => (target, Paradigm::Value),
            Command::StreamCodec(target) => (target, Paradigm::Stream),
        };
        // debug path
        if target.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }
        target.run(paradigm)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn render_fragments(generation: &Generation) -> String {
    let mut out = String::new();
    for imp in &generation.imports {
        out.push_str(&format!("import {imp};\n"));
    }
    if !generation.imports.is_empty() {
        out.push('\n');
    }
    for generated in &generation.declarations {
        if let Insertion::At(offset) = generated.insertion {
            out.push_str(&format!("// insert at offset {offset}:\n"));
        }
        out.push_str(&generated.text);
        out.push_str("\n\n");
    }
    out
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                matched_any = true;
                out.push(entry?);
            }
            if !matched_any {
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::GeneratedDeclaration;

    #[test]
    fn fragments_list_imports_then_declarations() {
        let generation = Generation {
            type_name: "Color".into(),
            declarations: vec![
                GeneratedDeclaration::member("int a;".into()),
                GeneratedDeclaration { text: " implements X".into(), insertion: Insertion::At(7) },
            ],
            imports: vec!["q.X".into()],
        };
        assert_eq!(
            render_fragments(&generation),
            "import q.X;\n\nint a;\n\n// insert at offset 7:\n implements X\n\n"
        );
    }

    #[test]
    fn literal_paths_pass_through_and_empty_globs_fail() {
        let paths = resolve_file_path_patterns(["a.json", "dir/b.json"]).unwrap();
        assert_eq!(paths, [PathBuf::from("a.json"), PathBuf::from("dir/b.json")]);
        assert!(resolve_file_path_patterns(["/nonexistent-codec-gen-dir/*.json"]).is_err());
    }

    #[test]
    fn cli_parses_both_subcommands() {
        let cli = CommandLineInterface::try_parse_from([
            "codec-gen", "stream-codec", "-i", "a.json", "--type", "Point", "--style", "qualified",
        ])
        .unwrap();
        match cli.cmd {
            Command::StreamCodec(target) => {
                assert_eq!(target.input_settings.type_name.as_deref(), Some("Point"));
                assert_eq!(target.style, Some(NameStyle::Qualified));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
