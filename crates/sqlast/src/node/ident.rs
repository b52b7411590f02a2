//! Identifiers and object names.

use crate::Span;

/// A single SQL identifier, such as a column, table or alias name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'a> {
    /// The identifier text, without quotes.
    pub value: &'a str,
    /// The quote character, if the identifier was quoted (`"` or `` ` ``).
    pub quote_style: Option<char>,
    /// Byte span in the source text.
    pub span: Span,
}

impl<'a> Ident<'a> {
    /// Creates an unquoted identifier.
    #[inline]
    pub const fn new(value: &'a str, span: Span) -> Self {
        Self {
            value,
            quote_style: None,
            span,
        }
    }

    /// Creates a quoted identifier.
    #[inline]
    pub const fn quoted(value: &'a str, quote: char, span: Span) -> Self {
        Self {
            value,
            quote_style: Some(quote),
            span,
        }
    }
}

/// An identifier used as an expression. Child: the [`Ident`].
#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a> {
    pub ident: Ident<'a>,
}

impl<'a> Identifier<'a> {
    #[inline]
    pub const fn new(ident: Ident<'a>) -> Self {
        Self { ident }
    }
}

/// A dotted identifier used as an expression, e.g. `orders.id`.
#[derive(Debug, Clone, Copy)]
pub struct CompoundIdentifier<'a> {
    pub idents: &'a [Ident<'a>],
}

/// A possibly qualified object name, e.g. `public.orders`.
#[derive(Debug, Clone, Copy)]
pub struct ObjectName<'a> {
    pub idents: &'a [Ident<'a>],
}

impl<'a> ObjectName<'a> {
    #[inline]
    pub const fn new(idents: &'a [Ident<'a>]) -> Self {
        Self { idents }
    }

    /// Returns the unqualified last part of the name.
    pub fn base_name(&self) -> Option<&'a str> {
        self.idents.last().map(|ident| ident.value)
    }
}

impl std::fmt::Display for ObjectName<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, ident) in self.idents.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match ident.quote_style {
                Some(q) => write!(f, "{q}{}{q}", ident.value)?,
                None => f.write_str(ident.value)?,
            }
        }
        Ok(())
    }
}

/// `*` in a projection or as a function argument (`COUNT(*)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wildcard;
