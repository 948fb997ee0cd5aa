//! Variable substitution for command templates.
//!
//! Command lines in the catalog may reference environment variables and the
//! tool's declared version.
//!
//! # Syntax
//!
//! - `$NAME` and `${NAME}` - replaced with the environment variable's value
//!   (empty when unset)
//! - `${version}` - replaced with the tool's declared `version` when one
//!   exists; otherwise treated like any other variable
//!
//! # Example
//!
//! ```yaml
//! commands:
//!   - "wget https://go.dev/dl/go${version}.linux-amd64.tar.gz -O $HOME/go.tgz"
//! ```

/// Placeholder name bound to the tool's declared version.
pub const VERSION_PLACEHOLDER: &str = "version";

/// Expand a command template against the process environment.
pub fn expand_command(template: &str, version: Option<&str>) -> String {
    expand_template(template, version, &|name| std::env::var(name).ok())
}

/// Expand a command template with a custom variable lookup.
///
/// This allows testing without modifying actual environment variables.
pub fn expand_template(
    template: &str,
    version: Option<&str>,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> String {
    let resolve = |name: &str| -> String {
        match version {
            Some(v) if name == VERSION_PLACEHOLDER => v.to_string(),
            _ => lookup(name).unwrap_or_else(|| {
                tracing::debug!("Variable '{}' is not set, substituting empty string", name);
                String::new()
            }),
        }
    };

    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }

        match chars.peek() {
            Some('{') => {
                chars.next(); // consume {
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }

                if closed && !name.is_empty() {
                    output.push_str(&resolve(&name));
                } else {
                    // Malformed reference stays literal
                    output.push_str("${");
                    output.push_str(&name);
                    if closed {
                        output.push('}');
                    }
                }
            }
            Some(&next) if is_name_char(next) => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                output.push_str(&resolve(&name));
            }
            _ => output.push('$'),
        }
    }

    output
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
