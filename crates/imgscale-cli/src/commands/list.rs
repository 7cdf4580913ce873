//! Filter listing command.

use anyhow::Result;
use imgscale_ops::FilterInfo;

/// One line per filter, names padded to a common column.
fn render(filters: &[FilterInfo]) -> Vec<String> {
    let width = filters.iter().map(|f| f.name.len()).max().unwrap_or(0);
    filters
        .iter()
        .map(|info| format!("{:<width$}  {}x{}", info.name, info.scale_x, info.scale_y))
        .collect()
}

/// Prints every registered filter with its scale factors.
pub fn run(verbose: bool) -> Result<()> {
    let filters = imgscale_ops::list_filters();
    for line in render(&filters) {
        println!("{line}");
    }
    if verbose {
        println!("\n{} filters", filters.len());
    }
    Ok(())
}
