//! Compiled query output formatting.

use demo_filter_rs::filter::CompiledQuery;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::flag_names;

/// JSON output structure for the check command.
#[derive(Serialize)]
pub struct QueryOutput<'a> {
    pub clauses: Vec<ClauseOutput<'a>>,
    pub needs: Vec<&'static str>,
}

/// JSON output structure for one compiled clause.
#[derive(Serialize)]
pub struct ClauseOutput<'a> {
    pub key: &'a str,
    pub negated: bool,
    pub expr: String,
    pub needs: Vec<&'static str>,
}

/// Formats a compiled query as JSON.
pub fn format_query_json(query: &CompiledQuery) -> Result<String, serde_json::Error> {
    let output = QueryOutput {
        clauses: query
            .clauses
            .iter()
            .map(|c| ClauseOutput {
                key: c.key,
                negated: c.negated,
                expr: c.expr.to_string(),
                needs: flag_names(c.flags),
            })
            .collect(),
        needs: flag_names(query.flags),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a compiled query as one line per clause.
pub fn format_query_table(query: &CompiledQuery, use_colors: bool) -> String {
    if query.is_empty() {
        return "Empty filter: every demo matches.\n".to_string();
    }

    let mut output = String::new();

    for (i, clause) in query.clauses.iter().enumerate() {
        let key = if clause.negated {
            format!("!{}", clause.key)
        } else {
            clause.key.to_string()
        };
        let key = if use_colors {
            key.cyan().to_string()
        } else {
            key
        };
        output.push_str(&format!("{:>2}. {}: {}\n", i + 1, key, clause.expr));
    }

    let needs = flag_names(query.flags);
    let needs = if needs.is_empty() {
        "nothing".to_string()
    } else {
        needs.join(", ")
    };
    let footer = format!("Needs: {needs}");
    if use_colors {
        output.push_str(&format!("{}\n", footer.dimmed()));
    } else {
        output.push_str(&footer);
        output.push('\n');
    }

    output
}
