//! Implementation of the `overlay-lint paths` command.
//!
//! Lists overlay directives without validating them, so a conflicting
//! document can still be inspected.

use super::resolve_config;
use crate::cli::PathsArgs;
use crate::error::Result;
use crate::loader::parse_document;
use crate::overlay::{ChooseSplit, OverlayFamily, find_family, find_last_choose, is_conditional};
use crate::tree::{KeyPath, Node};

/// One overlay directive as listed by `paths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveRow {
    pub family: OverlayFamily,
    pub path: KeyPath,
    pub line: usize,
    /// Innermost `choose_` block and case, for conditional directives.
    pub choose: Option<ChooseSplit>,
}

/// Execute the `overlay-lint paths` command.
pub fn cmd_paths(args: PathsArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let doc = parse_document(&args.path, &config)?;

    let rows = list_directives(&doc.root)?;
    if rows.is_empty() {
        println!("No overlay directives in {}", doc.path.display());
        return Ok(());
    }

    println!("Overlay directives in {} ({}):", doc.path.display(), rows.len());
    for row in &rows {
        let location = match &row.choose {
            Some(split) => format!("case ``{}`` of ``{}``", split.case, split.prefix),
            None => "unconditional".to_string(),
        };
        println!(
            "  {:<9} {}:{}  {}",
            row.family.to_string(),
            row.path,
            row.line,
            location
        );
    }

    Ok(())
}

/// Every overlay directive in `root`, `_changes` family first, each family
/// in document order.
pub fn list_directives(root: &Node) -> Result<Vec<DirectiveRow>> {
    let mut rows = Vec::new();

    for family in OverlayFamily::ALL {
        for found in find_family(root, family) {
            let choose = if is_conditional(&found.path) {
                Some(find_last_choose(&found.path)?)
            } else {
                None
            };
            rows.push(DirectiveRow {
                family,
                line: found.position.line,
                path: found.path,
                choose,
            });
        }
    }

    Ok(rows)
}
