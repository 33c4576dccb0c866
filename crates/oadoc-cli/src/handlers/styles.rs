//! List-styles command handler

use crate::error::Result;
use crate::output::OutputWriter;
use oadoc_core::OutputStyle;

/// Handle the list-styles command
pub fn handle_list_styles(output: &mut OutputWriter) -> Result<()> {
    output.styles(&OutputStyle::ALL)
}
