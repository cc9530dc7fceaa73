// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

/// Embed the short git SHA used by `commit_rules::version`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
