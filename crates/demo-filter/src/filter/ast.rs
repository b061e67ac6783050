//! Expression tree for compiled filter clauses.

use std::fmt;

/// A string projection of a demo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// The demo file name.
    Name,
    /// All bookmark labels, concatenated.
    BookmarkLabels,
    /// Header map name.
    Map,
    /// Header server hostname.
    Hostname,
    /// Header client id.
    ClientId,
}

/// An integer projection of a demo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumField {
    /// Number of killstreaks.
    KillstreakCount,
    /// Number of bookmarks.
    BookmarkCount,
    /// Highest killstreak peak, `-1` if there are none.
    BestStreak,
    /// File modification time (Unix seconds).
    ModDate,
    /// File size in bytes.
    FileSize,
}

/// Comparison operator for integer projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    /// `==`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CmpOp {
    /// Applies the operator to `lhs` and `rhs`.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            CmpOp::Eq => lhs == rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

/// A boolean expression over a demo record.
///
/// User-supplied strings only ever appear as `Contains` needles; they are
/// compared, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The text field contains the needle as a substring.
    Contains(TextField, String),
    /// The integer field compares against the value.
    Compare(NumField, CmpOp, i64),
    /// All children hold.
    And(Vec<Expr>),
    /// At least one child holds.
    Or(Vec<Expr>),
    /// The child does not hold.
    Not(Box<Expr>),
}

impl Expr {
    /// Combines expressions with AND, collapsing a single expression to itself.
    pub fn all(mut exprs: Vec<Expr>) -> Self {
        if exprs.len() == 1 {
            exprs.remove(0)
        } else {
            Expr::And(exprs)
        }
    }

    /// Combines expressions with OR, collapsing a single expression to itself.
    pub fn any(mut exprs: Vec<Expr>) -> Self {
        if exprs.len() == 1 {
            exprs.remove(0)
        } else {
            Expr::Or(exprs)
        }
    }

    /// Creates a NOT expression.
    pub fn negate(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextField::Name => "name",
            TextField::BookmarkLabels => "bookmark_labels",
            TextField::Map => "header.map_name",
            TextField::Hostname => "header.hostname",
            TextField::ClientId => "header.clientid",
        };
        f.write_str(name)
    }
}

impl fmt::Display for NumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumField::KillstreakCount => "len(killstreaks)",
            NumField::BookmarkCount => "len(bookmarks)",
            NumField::BestStreak => "max(killstreaks.peak)",
            NumField::ModDate => "filedata.modtime",
            NumField::FileSize => "filedata.filesize",
        };
        f.write_str(name)
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, exprs: &[Expr], connective: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, " {connective} ")?;
        }
        write!(f, "{expr}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Contains(field, needle) => write!(f, "{field} contains {needle:?}"),
            Expr::Compare(field, op, value) => write!(f, "{field} {} {value}", op.symbol()),
            Expr::And(exprs) => write_joined(f, exprs, "and"),
            Expr::Or(exprs) => write_joined(f, exprs, "or"),
            Expr::Not(inner) => write!(f, "not {inner}"),
        }
    }
}
