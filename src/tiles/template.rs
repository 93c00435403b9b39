use crate::{MapError, Result};
use std::collections::HashMap;

/// Fills `{key}` placeholders in a tile URL template.
///
/// Every placeholder must have a value; an unknown one or an unclosed brace
/// is a [`MapError::Template`].
pub fn render(template: &str, values: &HashMap<&str, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| MapError::Template(format!("unclosed placeholder in {}", template)))?;
        let key = after[..end].trim();
        let value = values
            .get(key)
            .ok_or_else(|| MapError::Template(format!("no value provided for {{{}}}", key)))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
