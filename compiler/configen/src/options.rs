//! Command-line options.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use configen_codegen::Target;

/// Options for one generation run.
///
/// `-h` is taken by the mapping ("hints") path, so help is `--help` only.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "configen",
    version,
    about = "Generates configuration constants from a mapping file and a value source",
    disable_help_flag = true
)]
pub struct GenerateOptions {
    #[arg(
        short = 'p',
        long = "plist-path",
        visible_alias = "values-path",
        value_name = "FILE",
        help = "Value source: a JSON object of per-environment values"
    )]
    pub values_path: PathBuf,

    #[arg(
        short = 'h',
        long = "hints-path",
        value_name = "FILE",
        help = "Mapping file with one `name : Type` declaration per line"
    )]
    pub mapping_path: PathBuf,

    #[arg(short = 'n', long = "class-name", help = "Name of the generated class")]
    pub class_name: String,

    #[arg(
        short = 'o',
        long = "output-directory",
        value_name = "DIR",
        help = "Directory the generated files are written to"
    )]
    pub output_directory: PathBuf,

    #[arg(
        short = 'c',
        long = "objective-c",
        help = "Generate an Objective-C header and implementation instead of Swift"
    )]
    pub objective_c: bool,

    #[arg(long, action = ArgAction::Help, help = "Print help")]
    pub help: Option<bool>,
}

impl GenerateOptions {
    pub fn target(&self) -> Target {
        if self.objective_c {
            Target::ObjectiveC
        } else {
            Target::Swift
        }
    }
}
