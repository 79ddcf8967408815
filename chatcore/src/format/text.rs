//! Plain-text rendering of classified replies for terminals.

use super::block::Block;

/// One `- heading` bullet per block with indented `label: value` lines.
pub(crate) fn blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("- {}\n", block.heading));
        for field in &block.fields {
            out.push_str(&format!("  {}: {}\n", field.label, field.value));
        }
    }
    out.trim_end().to_owned()
}
