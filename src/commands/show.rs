//! Implementation of the `overlay-lint show` command.

use super::resolve_config;
use crate::cli::ShowArgs;
use crate::error::{LintError, Result};
use crate::loader::{Document, load_document};
use crate::overlay::TracingSink;

/// Execute the `overlay-lint show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let doc = load_document(&args.path, &config, &mut TracingSink)?;
    print!("{}", render_document(&doc)?);
    Ok(())
}

/// Render a validated document as YAML.
pub fn render_document(doc: &Document) -> Result<String> {
    serde_yaml::to_string(&doc.root).map_err(|e| {
        LintError::UserError(format!(
            "failed to render '{}' as YAML: {}",
            doc.path.display(),
            e
        ))
    })
}
