//! Compilation of parsed clauses into evaluable expressions.

use tracing::debug;

use super::ast::{CmpOp, Expr, NumField};
use super::decode::Parameter;
use super::error::{FilterError, FilterResult};
use super::keys::{Flags, KeySpec, Template};
use super::parser::{Clause, FilterParser};

/// One compiled clause: a pure predicate over a demo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledClause {
    /// Key the clause was written for.
    pub key: &'static str,
    /// Whether the clause was negated.
    pub negated: bool,
    /// Record data this clause needs.
    pub flags: Flags,
    /// Expression the clause evaluates.
    pub expr: Expr,
}

/// The result of compiling a filter string.
///
/// A record matches the query if every clause matches it. `flags` is the
/// union of the flags of every key used, telling the caller which lazily
/// fetched record data must be present before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledQuery {
    /// Compiled clauses, in filter string order.
    pub clauses: Vec<CompiledClause>,
    /// Aggregated data requirements.
    pub flags: Flags,
}

impl CompiledQuery {
    /// Splits the query into its clauses and flags.
    pub fn into_parts(self) -> (Vec<CompiledClause>, Flags) {
        (self.clauses, self.flags)
    }

    /// Returns true if the query has no clauses and therefore matches every record.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Parses and compiles a filter string.
///
/// # Example
///
/// ```
/// use demo_filter_rs::filter::{process, Flags};
///
/// let query = process("map: koth_, beststreak: 6.., !bookmarks: 0").unwrap();
/// assert_eq!(query.clauses.len(), 3);
/// assert_eq!(query.flags, Flags::NEEDS_HEADER);
/// ```
///
/// # Errors
///
/// Returns any parse error from [`FilterParser::parse`], or a compile error
/// from [`compile`].
pub fn process(filter: &str) -> FilterResult<CompiledQuery> {
    let clauses = FilterParser::parse(filter)?;
    compile(&clauses)
}

/// Compiles parsed clauses into a [`CompiledQuery`].
///
/// # Errors
///
/// - `FilterError::UnknownKey` if a key is not in the key table.
/// - `FilterError::InvalidParameterType` if a value cannot be coerced to the
///   key's type.
/// - `FilterError::RangeNotSupported` if a range is given for a string key.
/// - `FilterError::EmptyParameterList` or `FilterError::ExpectedParameter`
///   for hand-built clauses whose parameter has no values or no bounds.
pub fn compile(clauses: &[Clause]) -> FilterResult<CompiledQuery> {
    let mut query = CompiledQuery::default();

    for clause in clauses {
        let spec = KeySpec::lookup(&clause.key).ok_or_else(|| {
            FilterError::unknown_key(&clause.key, KeySpec::suggest(&clause.key).map(String::from))
        })?;

        let expr = compile_clause(spec, clause)?;
        query.flags |= spec.flags;
        query.clauses.push(CompiledClause {
            key: spec.name,
            negated: clause.negated,
            flags: spec.flags,
            expr,
        });
    }

    debug!(
        clauses = query.clauses.len(),
        flags = ?query.flags,
        "compiled filter"
    );
    Ok(query)
}

fn compile_clause(spec: &KeySpec, clause: &Clause) -> FilterResult<Expr> {
    clause.parameter.validate(spec.name)?;
    match (&clause.parameter, spec.template) {
        (Parameter::List(values), Template::Contains(field)) => {
            let any = Expr::any(
                values
                    .iter()
                    .map(|v| Expr::Contains(field, v.clone()))
                    .collect(),
            );
            Ok(negate_if(any, clause.negated))
        }
        (Parameter::List(values), Template::Compare(field)) => {
            let exprs = values
                .iter()
                .map(|v| Ok(Expr::Compare(field, CmpOp::Eq, coerce_int(spec, v)?)))
                .collect::<FilterResult<Vec<_>>>()?;
            Ok(negate_if(Expr::any(exprs), clause.negated))
        }
        (Parameter::Range { start, end }, Template::Compare(field)) => {
            let start = start.as_deref().map(|s| coerce_int(spec, s)).transpose()?;
            let end = end.as_deref().map(|s| coerce_int(spec, s)).transpose()?;
            Ok(compile_range(field, start, end, clause.negated))
        }
        (Parameter::Range { .. }, Template::Contains(_)) => Err(FilterError::RangeNotSupported {
            key: spec.name.to_string(),
        }),
    }
}

fn negate_if(expr: Expr, negated: bool) -> Expr {
    if negated {
        Expr::negate(expr)
    } else {
        expr
    }
}

/// Builds `start <= field <= end`, or its De Morgan dual
/// `field < start || field > end` when negated. Only present bounds
/// contribute a comparison.
fn compile_range(field: NumField, start: Option<i64>, end: Option<i64>, negated: bool) -> Expr {
    let (lower_op, upper_op) = if negated {
        (CmpOp::Lt, CmpOp::Gt)
    } else {
        (CmpOp::Ge, CmpOp::Le)
    };

    let bounds: Vec<Expr> = [(start, lower_op), (end, upper_op)]
        .into_iter()
        .filter_map(|(bound, op)| bound.map(|value| Expr::Compare(field, op, value)))
        .collect();

    if negated {
        Expr::any(bounds)
    } else {
        Expr::all(bounds)
    }
}

fn coerce_int(spec: &KeySpec, value: &str) -> FilterResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| FilterError::invalid_parameter(spec.name, value))
}
