use std::{fs, path::PathBuf};

use crate::cli::{interaction::TerminalInteraction, output, test_mode};
use crate::config::{ConfigManager, EditorConfig, OutputFormat};
use crate::editor::{open_editor, EditorOptions};
use crate::errors::{EditorError, Result};
use crate::model::{InputDefinition, InputType};
use crate::template::DirectoryTemplateLoader;

pub const USAGE: &str = "\
Usage: input_editor_cli [OPTIONS]

Options:
  --seed <FILE>          Edit an existing input definition (JSON)
  --template <NAME>      Template resource to render (default: InputItem.template)
  --template-dir <DIR>   Directory searched for templates before the built-ins
  --format <FORMAT>      Output format: template or json
  --type <TYPE>          Type preselected for new definitions: boolean or string
  --save-config          Persist the options above as the new defaults
  --quiet                Only print the result and errors
  -h, --help             Show this message";

/// Parsed command-line options. Unset values fall back to the stored config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: Option<PathBuf>,
    pub template: Option<String>,
    pub template_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub initial_type: Option<InputType>,
    pub save_config: bool,
    pub quiet: bool,
    pub show_help: bool,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--seed" => {
                    parsed.seed = Some(PathBuf::from(required_value(&arg, &mut iter)?))
                }
                "--template" => parsed.template = Some(required_value(&arg, &mut iter)?),
                "--template-dir" => {
                    parsed.template_dir = Some(PathBuf::from(required_value(&arg, &mut iter)?))
                }
                "--format" => parsed.format = Some(required_value(&arg, &mut iter)?.parse()?),
                "--type" => {
                    parsed.initial_type = Some(required_value(&arg, &mut iter)?.parse()?)
                }
                "--save-config" => parsed.save_config = true,
                "--quiet" | "-q" => parsed.quiet = true,
                "--help" | "-h" => parsed.show_help = true,
                other => {
                    return Err(EditorError::InvalidArgument(format!(
                        "unexpected argument `{}`",
                        other
                    )))
                }
            }
        }
        Ok(parsed)
    }

    /// Overlays explicitly passed options onto `config`.
    pub fn apply(&self, config: &mut EditorConfig) {
        if let Some(template) = &self.template {
            config.template_name = template.clone();
        }
        if let Some(dir) = &self.template_dir {
            config.template_dir = Some(dir.clone());
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if let Some(input_type) = self.initial_type {
            config.initial_type = Some(input_type);
        }
    }
}

fn required_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String> {
    iter.next()
        .ok_or_else(|| EditorError::InvalidArgument(format!("`{}` expects a value", flag)))
}

pub fn run_cli() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    output::set_preferences(output::OutputPreferences {
        plain: test_mode::is_enabled(),
        quiet: args.quiet,
    });

    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    args.apply(&mut config);
    if args.save_config {
        manager.save(&config)?;
        output::info(format!("Saved defaults to {}", manager.path().display()));
    }

    let seed = match &args.seed {
        Some(path) => Some(InputDefinition::from_json(&fs::read_to_string(path)?)?),
        None => None,
    };

    let options = EditorOptions {
        initial_type: config.initial_type,
    };
    let mut result = None;
    let outcome = open_editor(
        &mut TerminalInteraction::new(),
        |definition| result = definition,
        seed.as_ref(),
        &options,
    );
    match outcome {
        Ok(()) => {}
        Err(err) if err.is_interrupted() => {
            tracing::info!("editor interrupted; treating as cancel");
        }
        Err(err) => return Err(err),
    }

    match result {
        Some(definition) => emit(&definition, &config, &manager),
        None => {
            output::info("Input definition cancelled.");
            Ok(())
        }
    }
}

fn emit(
    definition: &InputDefinition,
    config: &EditorConfig,
    manager: &ConfigManager,
) -> Result<()> {
    output::success(format!("Input definition `{}` accepted.", definition.id()));
    match config.output_format {
        OutputFormat::Template => {
            let root = config
                .template_dir
                .clone()
                .unwrap_or_else(|| manager.templates_dir().to_path_buf());
            let loader = DirectoryTemplateLoader::new(root).with_builtin_fallback();
            print!("{}", definition.render_with(&loader, &config.template_name)?);
        }
        OutputFormat::Json => println!("{}", definition.to_json()?),
    }
    Ok(())
}
