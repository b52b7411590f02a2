//! Data type markers.
//!
//! A [`DataType`] is always a leaf of the traversal, including the element
//! type of an `ARRAY` and the name of a custom type.

/// A SQL data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType<'a> {
    /// `CHAR[(n)]`
    Char(Option<u64>),
    /// `VARCHAR[(n)]`
    Varchar(Option<u64>),
    Uuid,
    /// `CLOB(n)`
    Clob(u64),
    /// `BINARY(n)`
    Binary(u64),
    /// `VARBINARY(n)`
    Varbinary(u64),
    /// `BLOB(n)`
    Blob(u64),
    /// `DECIMAL[(precision[, scale])]`
    Decimal {
        precision: Option<u64>,
        scale: Option<u64>,
    },
    /// `FLOAT[(n)]`
    Float(Option<u64>),
    SmallInt,
    Int,
    BigInt,
    Real,
    Double,
    Boolean,
    Date,
    Time,
    Timestamp,
    Interval,
    Regclass,
    Text,
    Bytea,
    /// `element[]`
    Array(&'a DataType<'a>),
    /// A user-defined type name.
    Custom(&'a str),
}

impl std::fmt::Display for DataType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn sized(f: &mut std::fmt::Formatter<'_>, name: &str, n: Option<u64>) -> std::fmt::Result {
            match n {
                Some(n) => write!(f, "{name}({n})"),
                None => f.write_str(name),
            }
        }

        match self {
            DataType::Char(n) => sized(f, "CHAR", *n),
            DataType::Varchar(n) => sized(f, "VARCHAR", *n),
            DataType::Uuid => f.write_str("UUID"),
            DataType::Clob(n) => write!(f, "CLOB({n})"),
            DataType::Binary(n) => write!(f, "BINARY({n})"),
            DataType::Varbinary(n) => write!(f, "VARBINARY({n})"),
            DataType::Blob(n) => write!(f, "BLOB({n})"),
            DataType::Decimal { precision, scale } => match (precision, scale) {
                (Some(p), Some(s)) => write!(f, "DECIMAL({p},{s})"),
                (Some(p), None) => write!(f, "DECIMAL({p})"),
                _ => f.write_str("DECIMAL"),
            },
            DataType::Float(n) => sized(f, "FLOAT", *n),
            DataType::SmallInt => f.write_str("SMALLINT"),
            DataType::Int => f.write_str("INT"),
            DataType::BigInt => f.write_str("BIGINT"),
            DataType::Real => f.write_str("REAL"),
            DataType::Double => f.write_str("DOUBLE PRECISION"),
            DataType::Boolean => f.write_str("BOOLEAN"),
            DataType::Date => f.write_str("DATE"),
            DataType::Time => f.write_str("TIME"),
            DataType::Timestamp => f.write_str("TIMESTAMP"),
            DataType::Interval => f.write_str("INTERVAL"),
            DataType::Regclass => f.write_str("REGCLASS"),
            DataType::Text => f.write_str("TEXT"),
            DataType::Bytea => f.write_str("BYTEA"),
            DataType::Array(inner) => write!(f, "{inner}[]"),
            DataType::Custom(name) => f.write_str(name),
        }
    }
}
