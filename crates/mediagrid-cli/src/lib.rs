use std::path::Path;

use anyhow::{Context, Result};
use mediagrid_core::SelectedFile;
use mediagrid_web::{Notice, Notifier};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints notices to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice.message());
    }
}

/// Read a local file as an upload selection, guessing its content type from the extension.
pub fn read_selected_file(path: &Path) -> Result<SelectedFile> {
    if path
        .components()
        .any(|c| c == std::path::Component::ParentDir)
    {
        return Err(anyhow::anyhow!("Invalid input: {}", path.display()));
    }

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    let file = SelectedFile::new(name, bytes);
    Ok(match mime_guess::from_path(path).first() {
        Some(mime) => file.with_content_type(mime.essence_str()),
        None => file,
    })
}

/// Write to `path`, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
