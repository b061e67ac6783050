//! Filter key table output formatting.

use demo_filter_rs::filter::{KeySpec, Template};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::flag_names;

/// JSON output structure for the keys command.
#[derive(Serialize)]
pub struct KeysListOutput {
    pub keys: Vec<KeyOutput>,
}

/// JSON output structure for a single key.
#[derive(Serialize)]
pub struct KeyOutput {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub value_type: String,
    pub field: String,
    pub needs: Vec<&'static str>,
}

fn field_of(template: Template) -> String {
    match template {
        Template::Contains(field) => field.to_string(),
        Template::Compare(field) => field.to_string(),
    }
}

/// Formats the key table as JSON.
pub fn format_keys_json(keys: &[KeySpec]) -> Result<String, serde_json::Error> {
    let output = KeysListOutput {
        keys: keys
            .iter()
            .map(|k| KeyOutput {
                name: k.name,
                value_type: k.value_type.to_string(),
                field: field_of(k.template),
                needs: flag_names(k.flags),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats the key table.
pub fn format_keys_table(keys: &[KeySpec], use_colors: bool) -> String {
    let mut output = String::new();

    let header = format!("{:<18} {:<5} {:<22} {}", "Key", "Type", "Field", "Needs");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for key in keys {
        let needs = flag_names(key.flags).join(", ");
        output.push_str(&format!(
            "{:<18} {:<5} {:<22} {}\n",
            key.name,
            key.value_type.to_string(),
            field_of(key.template),
            needs
        ));
    }

    output
}
