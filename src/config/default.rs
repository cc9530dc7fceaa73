// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::LintConfig;

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commit-rules configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Base rule sets to inherit from
extends = ["config-conventional"]

# Plugins enabling function-backed rules
plugins = ["function-rules"]

# Longest allowed body line, except for chore(deps) and chore(deps-dev)
body_max_line_length = 1000

# Rule overrides: [severity, "always" | "never", value]
# severity: 0 = off, 1 = warning, 2 = error
[rules]
"body-max-line-length" = [0]
"function-rules/body-max-line-length" = [2, "always"]
"#
}
