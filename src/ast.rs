use std::fmt;

use crate::error::ParseError;

/// The type annotation attached to a [`Symbol`].
///
/// A symbol written as `name:type` carries [`SymbolType::Typed`]; a bare
/// `name` carries the [`SymbolType::Untyped`] sentinel, meaning the symbol is
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolType {
    /// No type was written.
    Untyped,
    /// The text after the first `:` of the identifier.
    Typed(String),
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untyped => write!(f, "untyped"),
            Self::Typed(ty) => write!(f, "{ty}"),
        }
    }
}

/// A named, optionally typed reference used on either side of a statement.
///
/// Symbols are immutable once built. The identifier is split on the first
/// `:` only, so `out:RTC.TimedLong` and `a:b:c` both keep everything after
/// the first colon as the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: String,
    ty:   SymbolType,
}

impl Symbol {
    /// Builds a symbol from an identifier of the form `name` or `name:type`.
    ///
    /// Any string is accepted.
    ///
    /// # Example
    /// ```
    /// use formula::ast::{Symbol, SymbolType};
    ///
    /// let typed = Symbol::new("out:CustomType");
    /// assert_eq!(typed.name(), "out");
    /// assert_eq!(typed.type_name(), Some("CustomType"));
    ///
    /// let bare = Symbol::new("flag");
    /// assert_eq!(bare.name(), "flag");
    /// assert_eq!(bare.ty(), &SymbolType::Untyped);
    /// ```
    #[must_use]
    pub fn new(id: &str) -> Self {
        match id.split_once(':') {
            Some((name, ty)) => Self { name: name.to_string(),
                                       ty:   SymbolType::Typed(ty.to_string()), },
            None => Self { name: id.to_string(),
                           ty:   SymbolType::Untyped, },
        }
    }

    /// The part of the identifier before the first `:`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The written type, or the [`SymbolType::Untyped`] sentinel.
    #[must_use]
    pub const fn ty(&self) -> &SymbolType {
        &self.ty
    }

    /// The written type, or `None` for an untyped symbol.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match &self.ty {
            SymbolType::Typed(ty) => Some(ty),
            SymbolType::Untyped => None,
        }
    }

    /// Returns `true` if the identifier carried a `:type` suffix.
    #[must_use]
    pub const fn is_typed(&self) -> bool {
        matches!(self.ty, SymbolType::Typed(_))
    }
}

impl From<&str> for Symbol {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            SymbolType::Typed(ty) => write!(f, "{}:{ty}", self.name),
            SymbolType::Untyped => write!(f, "{}", self.name),
        }
    }
}

/// An abstract syntax tree node representing an expression.
///
/// The set of variants is closed: every consumer matches exhaustively instead
/// of inspecting node kinds at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (only negation is produced by the parser).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A symbol reference leaf.
    Symbol(Symbol),
    /// A numeric literal leaf.
    Number(f64),
    /// A quoted string literal leaf, without its quotes.
    Str(String),
    /// A boolean leaf. Only produced by folding a numeric comparison.
    Boolean(bool),
}

impl Expr {
    /// Builds a binary node from two operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, line: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line }
    }

    /// Returns the numeric value if `self` is a number leaf.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// The single top-level statement of a formula.
///
/// A statement relates a target symbol to an expression, e.g.
/// `out:Long = in1:Long + in2:Long`. The left-hand side is always a bare
/// symbol; the grammar never allows a subtree there.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    /// One of the statement operators (`=`, `:=`, `==`, `!=`, `>`, `>=`, `<`,
    /// `<=`).
    pub op:     BinaryOperator,
    /// The left-hand side.
    pub target: Symbol,
    /// The right-hand side.
    pub value:  Expr,
    /// Line number of the statement operator.
    pub line:   usize,
}

impl Formula {
    /// Symbols written on the left-hand side, in order.
    ///
    /// Downstream generators treat these as the formula's outputs.
    #[must_use]
    pub fn outputs(&self) -> Vec<&Symbol> {
        vec![&self.target]
    }

    /// Symbols referenced on the right-hand side, left to right, duplicates
    /// kept.
    ///
    /// # Example
    /// ```
    /// let formula = formula::parse("y = a + (b + a)").unwrap();
    /// let names: Vec<_> = formula.inputs().iter().map(|s| s.name()).collect();
    ///
    /// assert_eq!(names, ["a", "b", "a"]);
    /// ```
    #[must_use]
    pub fn inputs(&self) -> Vec<&Symbol> {
        crate::engine::symbols::collect_symbols(&self.value)
    }

    /// Checks that the statement is a plain assignment (`=`).
    ///
    /// The parser accepts every statement operator; callers that generate
    /// assignment code use this to reject the rest.
    ///
    /// # Errors
    /// Returns [`ParseError::NotAnAssignment`] for any other operator.
    pub fn require_assignment(&self) -> Result<&Self, ParseError> {
        if self.op == BinaryOperator::Assign {
            Ok(self)
        } else {
            Err(ParseError::NotAnAssignment { op:   self.op,
                                              line: self.line, })
        }
    }

    /// The statement as a plain expression tree, with the target as a symbol
    /// leaf on the left.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        Expr::binary(Expr::Symbol(self.target.clone()),
                     self.op,
                     self.value.clone(),
                     self.line)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.target, self.op, self.value)
    }
}

/// Represents a binary operator.
///
/// Covers the arithmetic operators found inside expressions as well as the
/// statement operators that relate the target to its expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Assignment (`=`)
    Assign,
    /// Connection (`:=`)
    Connect,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
}

impl BinaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Assign => "=",
            Self::Connect => ":=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        }
    }

    /// `+ - * /`
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// `== != > >= < <=`
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::Less
                 | Self::LessEqual)
    }

    /// Returns `true` for the operators allowed between a statement's target
    /// and its expression.
    ///
    /// # Example
    /// ```
    /// use formula::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Connect.is_statement_op());
    /// assert!(BinaryOperator::LessEqual.is_statement_op());
    /// assert!(!BinaryOperator::Mul.is_statement_op());
    /// ```
    #[must_use]
    pub const fn is_statement_op(self) -> bool {
        matches!(self, Self::Assign | Self::Connect) || self.is_comparison()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
