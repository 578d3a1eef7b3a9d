//! Configen command-line front end.
//!
//! Reads the mapping file and the value source, runs the generator for the
//! selected target, and writes the generated files. Everything is rendered
//! before anything is written, so a failing variable leaves the output
//! directory untouched.

mod options;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use configen_codegen::{GenerateError, GeneratedFile, Generator};
use configen_ir::{Mapping, ValueSource};

pub use options::GenerateOptions;

/// Name written into the auto-generation notice.
pub const TOOL_NAME: &str = "configen";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=configen=debug` or
/// `RUST_LOG=configen_codegen=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run one generation pass and return the paths written.
pub fn run(options: &GenerateOptions) -> Result<Vec<PathBuf>, GenerateError> {
    let mapping = Mapping::parse(&read(&options.mapping_path)?)?;
    let values = ValueSource::from_json_str(&read(&options.values_path)?)?;

    let files = Generator::new(&options.class_name, options.target())
        .with_tool_name(TOOL_NAME)
        .with_mapping_path(options.mapping_path.display().to_string())
        .generate(&mapping, &values)?;

    write_files(&options.output_directory, &files)
}

fn read(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::Io {
        action: "read file",
        path: path.to_path_buf(),
        source,
    })
}

/// Write generated files into `directory`, creating it if needed.
pub fn write_files(
    directory: &Path,
    files: &[GeneratedFile],
) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(directory).map_err(|source| GenerateError::Io {
        action: "create directory",
        path: directory.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = directory.join(&file.file_name);
        fs::write(&path, &file.contents).map_err(|source| GenerateError::Io {
            action: "write file",
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = file.contents.len(), "wrote file");
        written.push(path);
    }
    Ok(written)
}
