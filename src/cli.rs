//! Minimal CLI: resolve | check
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use json_ui::config::Settings;
use json_ui::i18n::ResourceDescriptor;
use json_ui::tree::{self, Handling};
use json_ui::{DirSource, IdSource, Locale, Resolver, TranslationProvider, ValueTable};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// resolve declarative JSON UI templates into typed component trees
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,

    /// raise log verbosity (-v debug, -vv trace); overrides JSON_UI_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// resolve one template and print the component tree as JSON
    Resolve(ResolveOut),
    /// parse templates and report structural failures without resolving
    Check(CheckSettings),
}

#[derive(Args, Debug, Clone)]
struct ResolveOut {
    /// template file to resolve
    #[arg(long, short)]
    template: PathBuf,

    /// active locale, e.g. `en` or `de-AT` (settings default if omitted)
    #[arg(long)]
    locale: Option<Locale>,

    /// translation resources. May be literal paths or quoted glob patterns
    #[arg(long, num_args = 1..)]
    translations: Vec<String>,

    /// JSON object files bound as value tables, in precedence-tie order
    #[arg(long, num_args = 1..)]
    values: Vec<PathBuf>,

    /// settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// leave value tokens verbatim
    #[arg(long = "static", default_value_t = false)]
    static_handling: bool,

    /// number generated identifiers instead of randomizing them
    #[arg(long, default_value_t = false)]
    sequential_ids: bool,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct CheckSettings {
    /// One or more templates. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    template: Vec<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Resolve(target) => target.run(),
            Command::Check(target) => target.run(),
        }
    }
}

impl ResolveOut {
    fn settings(&self) -> anyhow::Result<(Settings, Option<PathBuf>)> {
        match &self.config {
            None => Ok((Settings::default(), None)),
            Some(path) => {
                let settings = Settings::load(path)?;
                Ok((settings, path.parent().map(Path::to_path_buf)))
            }
        }
    }

    fn run(&self) -> anyhow::Result<()> {
        // 1) settings, flags win
        let (settings, settings_dir) = self.settings()?;
        let locale = self.locale.clone().unwrap_or_else(|| settings.default_locale.clone());
        let mut patterns = settings.translation_patterns(settings_dir.as_deref());
        patterns.extend(self.translations.iter().cloned());

        // 2) translations
        let descriptors = resolve_file_path_patterns(&patterns)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("failed to resolve translation resource paths")?
            .into_iter()
            .map(ResourceDescriptor::File)
            .collect::<Vec<_>>();
        let provider = TranslationProvider::load(&descriptors);

        // 3) value tables
        let mut tables = Vec::with_capacity(self.values.len());
        for path in &self.values {
            tables.push(load_value_table(path)?);
        }

        // 4) template
        let source_id = self.template.to_string_lossy().to_string();
        let text = std::fs::read_to_string(&self.template)
            .with_context(|| format!("failed to read template {source_id}"))?;
        let mut template = tree::parse(&source_id, &text)?;
        if self.static_handling {
            template.handling = Handling::Static;
        }

        // 5) resolve
        let template_root = settings
            .template_root
            .clone()
            .or_else(|| self.template.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        let templates = DirSource::new(template_root);
        let ids = if self.sequential_ids {
            IdSource::sequential("id-")
        } else {
            IdSource::Random
        };
        let resolution = Resolver::new(&provider)
            .with_tables(tables)
            .with_locale(locale)
            .with_ids(ids)
            .with_overlap_policy(settings.overlap_policy)
            .with_templates(&templates)
            .with_max_include_depth(settings.max_include_depth)
            .resolve(&template)?;
        tracing::info!(source = %source_id, elapsed = ?resolution.elapsed, "resolved");

        let output = serde_json::to_string_pretty(&resolution.root)?;
        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, &output).with_context(|| format!("failed to write {}", out.display()))?;
        } else {
            println!("{output}");
        }
        Ok(())
    }
}

impl CheckSettings {
    fn run(&self) -> anyhow::Result<()> {
        let paths = resolve_file_path_patterns(&self.template)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("failed to resolve template paths")?;
        let mut failed = 0usize;
        for path in &paths {
            let source_id = path.to_string_lossy().to_string();
            let outcome = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template {source_id}"))
                .and_then(|text| Ok(tree::parse(&source_id, &text)?));
            match outcome {
                Ok(_) => eprintln!("{} {source_id}", "ok".green()),
                Err(error) => {
                    failed += 1;
                    eprintln!("{} {error:#}", "failed".red());
                }
            }
        }
        if failed > 0 {
            bail!("{failed} of {} templates failed to parse", paths.len());
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn load_value_table(path: &Path) -> anyhow::Result<ValueTable> {
    let name = path.display().to_string();
    let src = std::fs::read_to_string(path).with_context(|| format!("failed to read values {name}"))?;
    let json = serde_json::from_str::<serde_json::Value>(&src).with_context(|| format!("failed to parse values {name}"))?;
    let serde_json::Value::Object(object) = json else {
        bail!("values {name} must hold a JSON object");
    };
    ValueTable::from_json(&object, 0).with_context(|| format!("invalid values {name}"))
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                match entry {
                    Ok(p) => {
                        matched_any = true;
                        out.push(p);
                    }
                    Err(e) => return Err(Box::new(e)),
                }
            }
            if !matched_any {
                // an explicit glob that matched nothing is surfaced
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
