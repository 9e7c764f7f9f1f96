use log::warn;
use logos::Logos;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `55`, `2.5`, or `.5`.
    ///
    /// The scanner greedily consumes digits and `.` characters without
    /// validating decimal-point placement, so text like `2.5.3` still lexes
    /// as a single number token; conversion to a value happens at parse
    /// time, where malformed literals fail.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// Recognized function names: `sin`, `cos`, `tan`, `log`, `ln`, `sqrt`.
    ///
    /// The priority only breaks exact-length ties against `Variable`;
    /// longer words such as `sinx` or `sqrt2` still lex as variables
    /// because the longest match wins.
    #[regex(r"sin|cos|tan|log|ln|sqrt", |lex| lex.slice().to_owned(), priority = 10)]
    Function(String),
    /// Variable name tokens, such as `x` or `salary`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_owned())]
    Variable(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Function(text) | Self::Variable(text) => {
                write!(f, "{text}")
            },
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// A notice about a character the lexer skipped.
///
/// Unrecognized characters are not an error: the lexer advances past them
/// and records one diagnostic per skipped character. An expression
/// containing such characters will generally still fail later, at parse
/// time, because a token the grammar expects is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexDiagnostic {
    /// The character that was skipped.
    pub character: char,
    /// The byte offset of the character in the source.
    pub pos:       usize,
}

impl std::fmt::Display for LexDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Skipped unrecognized character '{}' at position {}.",
               self.character, self.pos)
    }
}

/// Scans raw text into an ordered token sequence.
///
/// Tokenizing never fails. Each returned token is paired with its byte
/// offset in `source`. Unrecognized characters are skipped; each one is
/// logged at `warn` level and reported in the returned diagnostic list, so
/// callers can decide whether to surface them.
///
/// # Parameters
/// - `source`: The expression text to scan.
///
/// # Returns
/// The token sequence and the list of skipped-character diagnostics.
///
/// # Example
/// ```
/// use solvra::engine::lexer::{Token, tokenize};
///
/// let (tokens, diagnostics) = tokenize("2 + salary");
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], (Token::Plus, 2));
/// assert!(diagnostics.is_empty());
///
/// // Unknown characters are skipped, not fatal.
/// let (tokens, diagnostics) = tokenize("2 # 3");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(diagnostics[0].character, '#');
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<(Token, usize)>, Vec<LexDiagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span().start)),
            Err(()) => {
                for (offset, character) in lexer.slice().char_indices() {
                    let diagnostic = LexDiagnostic { character,
                                                     pos: lexer.span().start + offset, };
                    warn!("{diagnostic}");
                    diagnostics.push(diagnostic);
                }
            },
        }
    }

    (tokens, diagnostics)
}
