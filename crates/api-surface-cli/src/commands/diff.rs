//! Diff command implementation.

use anyhow::Result;
use api_surface_core::{CodebaseComparator, ComparisonVisitor, ItemHandle};
use serde::Serialize;
use std::path::Path;

use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct DiffEntry {
    change: &'static str,
    item: String,
    /// For a removed member that is still inherited: the class that now
    /// provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    provided_by: Option<String>,
}

#[derive(Default)]
struct DiffCollector {
    entries: Vec<DiffEntry>,
}

impl ComparisonVisitor for DiffCollector {
    fn added_item(&mut self, new: ItemHandle<'_>) {
        self.entries.push(DiffEntry {
            change: "added",
            item: new.describe(),
            provided_by: None,
        });
    }

    fn removed_item(&mut self, old: ItemHandle<'_>, from: Option<ItemHandle<'_>>) {
        self.entries.push(DiffEntry {
            change: "removed",
            item: old.describe(),
            provided_by: from.map(|f| f.qualified_name().to_string()),
        });
    }
}

/// Runs the diff command.
pub fn run(old: &Path, new: &Path, format: OutputFormat) -> Result<()> {
    let old_codebase = super::lint::load_codebase(old)?;
    let new_codebase = super::lint::load_codebase(new)?;

    let mut collector = DiffCollector::default();
    CodebaseComparator::new().compare(&mut collector, &old_codebase, &new_codebase, None);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&collector.entries)?);
        }
        OutputFormat::Text | OutputFormat::Compact => {
            for entry in &collector.entries {
                let sign = if entry.change == "added" { '+' } else { '-' };
                match &entry.provided_by {
                    Some(class) => {
                        println!("{sign} {} (now provided by {class})", entry.item);
                    }
                    None => println!("{sign} {}", entry.item),
                }
            }
            println!("\n{} change(s)", collector.entries.len());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_surface_core::signature;

    #[test]
    fn collector_records_added_and_removed() {
        let old = signature::load_str(
            r#"{"packages": [{"name": "pkg", "classes": [
                {"name": "Foo", "methods": [{"name": "gone", "returns": {"name": "void"}}]}
            ]}]}"#,
            "old",
        )
        .expect("old loads");
        let new = signature::load_str(
            r#"{"packages": [{"name": "pkg", "classes": [
                {"name": "Foo", "methods": [{"name": "fresh", "returns": {"name": "void"}}]}
            ]}]}"#,
            "new",
        )
        .expect("new loads");

        let mut collector = DiffCollector::default();
        CodebaseComparator::new().compare(&mut collector, &old, &new, None);

        let changes: Vec<(&str, &str)> = collector
            .entries
            .iter()
            .map(|e| (e.change, e.item.as_str()))
            .collect();
        assert!(changes.contains(&("added", "method pkg.Foo.fresh()")));
        assert!(changes.contains(&("removed", "method pkg.Foo.gone()")));
    }
}
