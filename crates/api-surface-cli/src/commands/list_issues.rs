//! List-issues command implementation.

use api_surface_core::Issue;

/// Runs the list-issues command.
pub fn run() {
    println!("Issue catalog:\n");
    println!("{:<8} {:<28} Default severity", "Code", "Name");
    println!("{}", "-".repeat(60));

    for issue in Issue::ALL {
        println!(
            "{:<8} {:<28} {}",
            issue.code(),
            issue.name(),
            issue.default_severity()
        );
    }

    println!("\nOverride severities in api-surface.toml:");
    println!("  [issues]");
    println!("  acronym-name = \"error\"");
}
