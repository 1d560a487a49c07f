//! SQL-generation visitors.
//!
//! A visitor turns a small expression tree into MySQL text. The base
//! [`MySqlVisitor`] renders function names verbatim; [`MySqlSpatialVisitor`]
//! maps standard `ST_*` spatial function names onto the names MySQL 5.x
//! understands. Values are rendered through a [`ValueQuoter`], so geometry
//! arguments go through the geometry codec.

use crate::base::quote_identifier;
use crate::error::Result;
use crate::value::SqlValue;
use std::borrow::Cow;

/// Expression tree compiled by a [`SqlVisitor`].
#[derive(Debug, Clone, PartialEq)]
pub enum SqlExpr {
    Column {
        table: Option<String>,
        name: String,
    },
    Value(SqlValue),
    Function {
        name: String,
        args: Vec<SqlExpr>,
    },
    /// Function named by its standard (OGC) spatial name, e.g. `ST_Length`.
    SpatialFunction {
        name: String,
        args: Vec<SqlExpr>,
    },
    /// Pre-rendered SQL, emitted verbatim.
    Raw(String),
}

impl SqlExpr {
    pub fn column(name: impl Into<String>) -> Self {
        SqlExpr::Column {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        SqlExpr::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    pub fn value(value: impl Into<SqlValue>) -> Self {
        SqlExpr::Value(value.into())
    }

    pub fn function(name: impl Into<String>, args: Vec<SqlExpr>) -> Self {
        SqlExpr::Function {
            name: name.into(),
            args,
        }
    }

    pub fn spatial(name: impl Into<String>, args: Vec<SqlExpr>) -> Self {
        SqlExpr::SpatialFunction {
            name: name.into(),
            args,
        }
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        SqlExpr::Raw(sql.into())
    }
}

/// Renders values embedded in an expression.
pub trait ValueQuoter {
    fn quote_value(&self, value: &SqlValue) -> Result<String>;
}

/// SQL-generation visitor.
pub trait SqlVisitor: std::fmt::Debug + Send + Sync {
    /// Visitor identifier.
    fn name(&self) -> &'static str;

    /// Dialect name for a standard spatial function.
    fn spatial_function_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(name)
    }

    /// Compile `expr` to SQL text.
    fn compile(&self, expr: &SqlExpr, quoter: &dyn ValueQuoter) -> Result<String> {
        match expr {
            SqlExpr::Column { table, name } => Ok(match table {
                Some(table) => format!("{}.{}", quote_identifier(table), quote_identifier(name)),
                None => quote_identifier(name),
            }),
            SqlExpr::Value(value) => quoter.quote_value(value),
            SqlExpr::Function { name, args } => {
                Ok(format!("{}({})", name, self.compile_args(args, quoter)?))
            }
            SqlExpr::SpatialFunction { name, args } => Ok(format!(
                "{}({})",
                self.spatial_function_name(name),
                self.compile_args(args, quoter)?
            )),
            SqlExpr::Raw(sql) => Ok(sql.clone()),
        }
    }

    /// Compile a comma-separated argument list.
    fn compile_args(&self, args: &[SqlExpr], quoter: &dyn ValueQuoter) -> Result<String> {
        let parts = args
            .iter()
            .map(|arg| self.compile(arg, quoter))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(", "))
    }
}

/// Generic MySQL visitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlVisitor;

impl SqlVisitor for MySqlVisitor {
    fn name(&self) -> &'static str {
        "MySQL"
    }
}

/// Spatial-aware MySQL visitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlSpatialVisitor;

impl MySqlSpatialVisitor {
    /// Standard names with no `ST_`-stripped MySQL equivalent.
    const FUNC_MAP: [(&'static str, &'static str); 3] = [
        ("st_wkttosql", "GeomFromText"),
        ("st_wkbtosql", "GeomFromWKB"),
        ("st_length", "GLength"),
    ];
}

impl SqlVisitor for MySqlSpatialVisitor {
    fn name(&self) -> &'static str {
        "MySQL2Spatial"
    }

    fn spatial_function_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let lower = name.to_ascii_lowercase();
        if let Some((_, mapped)) = Self::FUNC_MAP.iter().find(|(standard, _)| *standard == lower) {
            return Cow::Borrowed(*mapped);
        }
        match lower.strip_prefix("st_") {
            Some(rest) if !rest.is_empty() => Cow::Borrowed(&name[3..]),
            _ => Cow::Borrowed(name),
        }
    }
}
