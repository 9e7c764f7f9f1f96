/// An abstract syntax tree (AST) node representing an expression.
///
/// `Node` covers every construct the expression grammar can produce: numeric
/// literals, variable references, binary operations, and single-argument
/// function calls. The set of variants is closed, so each operation over a
/// tree is a single exhaustive `match` with no late binding.
///
/// Each parent exclusively owns its children through `Box`; a tree has no
/// sharing and no cycles, and dropping the root drops the whole subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A fixed numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Byte offset of the literal in the source.
        pos:   usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Byte offset of the name in the source.
        pos:  usize,
    },
    /// A binary operation (addition, division, exponentiation, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset of the operator in the source.
        pos:   usize,
    },
    /// A call of a recognized function with exactly one argument
    /// (e.g. `sin(x)`).
    FunctionCall {
        /// The function being applied.
        function: FunctionName,
        /// The argument expression.
        argument: Box<Self>,
        /// Byte offset of the function name in the source.
        pos:      usize,
    },
}

impl Node {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use solvra::ast::Node;
    ///
    /// let node = Node::Variable { name: "x".to_string(),
    ///                             pos:  4, };
    ///
    /// assert_eq!(node.pos(), 4);
    /// ```
    #[must_use]
    pub const fn pos(&self) -> usize {
        match self {
            Self::Number { pos, .. }
            | Self::Variable { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::FunctionCall { pos, .. } => *pos,
        }
    }

    /// Returns the short display string for this node.
    ///
    /// The label is the operator symbol, the function name, the variable
    /// name, or the numeric literal with trailing zeros and any trailing
    /// decimal point stripped (`2.50` displays as `2.5`, `55.0` as `55`).
    ///
    /// # Example
    /// ```
    /// use solvra::ast::Node;
    ///
    /// let number = Node::Number { value: 2.5,
    ///                             pos:   0, };
    ///
    /// assert_eq!(number.label(), "2.5");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number { value, .. } => value.to_string(),
            Self::Variable { name, .. } => name.clone(),
            Self::BinaryOp { op, .. } => op.to_string(),
            Self::FunctionCall { function, .. } => function.to_string(),
        }
    }

    /// Returns the ordered list of immediate child nodes.
    ///
    /// Leaves return an empty list. The ordering is structural: a binary
    /// operation yields `[left, right]`, a function call yields its single
    /// argument. This exists purely so that a rendering layer can walk the
    /// tree without matching on variants itself.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Number { .. } | Self::Variable { .. } => Vec::new(),
            Self::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::FunctionCall { argument, .. } => vec![argument.as_ref()],
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { function, argument, .. } => write!(f, "{function}({argument})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents one of the recognized unary functions.
///
/// The set is fixed; a word that is not one of these names lexes as a
/// variable instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FunctionName {
    /// Sine, operating in radians.
    Sin,
    /// Cosine, operating in radians.
    Cos,
    /// Tangent, operating in radians.
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    /// Square root.
    Sqrt,
}

impl FunctionName {
    /// Looks up a function by its source-text name.
    ///
    /// # Example
    /// ```
    /// use solvra::ast::FunctionName;
    ///
    /// assert_eq!(FunctionName::from_name("sqrt"), Some(FunctionName::Sqrt));
    /// assert_eq!(FunctionName::from_name("sinh"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use FunctionName::{Cos, Ln, Log, Sin, Sqrt, Tan};
        let name = match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Log => "log",
            Ln => "ln",
            Sqrt => "sqrt",
        };
        write!(f, "{name}")
    }
}
