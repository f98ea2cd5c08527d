use logos::Logos;

use crate::error::ParseError;

/// Represents the kind of a lexical token, together with its literal payload.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords are matched case-sensitively; any other word is an identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Numeric literal with a decimal point, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_number)]
    Real(f64),
    /// Numeric literal without a decimal point, such as `42`. Any digit run is
    /// accepted and rounds to the nearest number.
    #[regex(r"[0-9]+", parse_number)]
    Integer(f64),
    /// String literal delimited by `"` or `'`. A missing closing quote ends the
    /// literal at the end of input.
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"?"#, parse_string, allow_greedy = true)]
    #[regex(r#"'([^'\\]|\\(.|\n))*\\?'?"#, parse_string, allow_greedy = true)]
    Str(String),
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// Identifier tokens; variable or intention names such as `x` or `greet`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `think`
    #[token("think")]
    Think,
    /// `express`
    #[token("express")]
    Express,
    /// `consider`
    #[token("consider")]
    Consider,
    /// `if`
    #[token("if")]
    If,
    /// `otherwise`
    #[token("otherwise")]
    Otherwise,
    /// `remember`
    #[token("remember")]
    Remember,
    /// `show`
    #[token("show")]
    Show,
    /// `as`
    #[token("as")]
    As,
    /// `from`
    #[token("from")]
    From,
    /// `to`
    #[token("to")]
    To,
    /// `is`
    #[token("is")]
    Is,
    /// `not`
    #[token("not")]
    Not,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `in`
    #[token("in")]
    In,
    /// `define`
    #[token("define")]
    Define,
    /// `intention`
    #[token("intention")]
    Intention,
    /// `with`
    #[token("with")]
    With,
    /// `return`
    #[token("return")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `memories`
    #[token("memories")]
    Memories,
    /// `even`
    #[token("even")]
    Even,
    /// `odd`
    #[token("odd")]
    Odd,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `each`
    #[token("each")]
    Each,

    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
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
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks are significant: they end statements and delimit blocks.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f\v]+", logos::skip)]
    Ignored,
    /// Appended once after the last real token.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every token
/// can be given a line and a column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token kind positioned in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned, including its literal value.
    pub kind:   TokenKind,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based source column, counted in characters.
    pub column: usize,
}

impl TokenKind {
    /// Gets the upper-case name of the token kind used in syntax errors.
    ///
    /// # Example
    /// ```
    /// use thoughtscript::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Think.name(), "THINK");
    /// assert_eq!(TokenKind::Identifier("x".into()).name(), "IDENTIFIER");
    /// assert_eq!(TokenKind::Integer(1.0).name(), "NUMBER");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Real(_) | Self::Integer(_) => "NUMBER",
            Self::Str(_) => "STRING",
            Self::Bool(true) => "TRUE",
            Self::Bool(false) => "FALSE",
            Self::Null => "NULL",
            Self::Identifier(_) => "IDENTIFIER",
            Self::Think => "THINK",
            Self::Express => "EXPRESS",
            Self::Consider => "CONSIDER",
            Self::If => "IF",
            Self::Otherwise => "OTHERWISE",
            Self::Remember => "REMEMBER",
            Self::Show => "SHOW",
            Self::As => "AS",
            Self::From => "FROM",
            Self::To => "TO",
            Self::Is => "IS",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::In => "IN",
            Self::Define => "DEFINE",
            Self::Intention => "INTENTION",
            Self::With => "WITH",
            Self::Return => "RETURN",
            Self::Break => "BREAK",
            Self::Continue => "CONTINUE",
            Self::Memories => "MEMORIES",
            Self::Even => "EVEN",
            Self::Odd => "ODD",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Each => "EACH",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MULTIPLY",
            Self::Slash => "DIVIDE",
            Self::Assign => "ASSIGN",
            Self::EqualEqual => "EQUALS",
            Self::Bang => "BANG",
            Self::BangEqual => "NOT_EQUALS",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
            Self::Eof => "EOF",
        }
    }
}

/// Converts source text into positioned tokens, always ending with `Eof`.
///
/// Whitespace and `#` comments are dropped; line breaks are kept as
/// `NewLine` tokens.
///
/// # Errors
/// `UnexpectedCharacter` for a character that starts no token.
///
/// # Example
/// ```
/// use thoughtscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("think 42 as answer").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Think,
///                 TokenKind::Integer(42.0),
///                 TokenKind::As,
///                 TokenKind::Identifier("answer".into()),
///                 TokenKind::Eof]);
/// assert_eq!(tokens[3].column, 13);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    loop {
        // Skipped input never spans a line break, so the state before `next`
        // is the state at the start of the returned token.
        let line = lexer.extras.line;
        let line_start = lexer.extras.line_start;

        let Some(result) = lexer.next() else {
            break;
        };
        let column = column_of(source, line_start, lexer.span().start);

        match result {
            Ok(kind) => tokens.push(Token { kind, line, column }),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedCharacter { character,
                                                             line,
                                                             column });
            },
        }
    }

    let column = column_of(source, lexer.extras.line_start, source.len());
    tokens.push(Token { kind: TokenKind::Eof,
                        line: lexer.extras.line,
                        column });

    Ok(tokens)
}

fn column_of(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(1, |prefix| prefix.chars().count() + 1)
}

fn newline(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
}

fn parse_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().trim_end_matches('.').parse().ok()
}

/// Decodes a quoted literal: strips the quotes and resolves `\n`, `\t`, `\r`,
/// `\\`, `\"` and `\'`. Any other escaped character stands for itself.
fn parse_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();

    for (offset, c) in slice.char_indices() {
        if c == '\n' {
            lex.extras.line += 1;
            lex.extras.line_start = lex.span().start + offset + 1;
        }
    }

    let mut chars = slice.chars();
    let quote = chars.next();
    let mut value = String::with_capacity(slice.len());

    while let Some(c) = chars.next() {
        if Some(c) == quote {
            break;
        }
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some(escaped) => value.push(escaped),
            None => break,
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn numbers_keep_their_declared_kind() {
        assert_eq!(kinds("42 2.5 7."),
                   vec![TokenKind::Integer(42.0),
                        TokenKind::Real(2.5),
                        TokenKind::Real(7.0),
                        TokenKind::Eof]);
    }

    #[test]
    fn second_decimal_point_starts_a_new_token() {
        assert_eq!(kinds("1.2.3"),
                   vec![TokenKind::Real(1.2), TokenKind::Dot, TokenKind::Integer(3.0), TokenKind::Eof]);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(kinds("== != <= >= = ! < >"),
                   vec![TokenKind::EqualEqual,
                        TokenKind::BangEqual,
                        TokenKind::LessEqual,
                        TokenKind::GreaterEqual,
                        TokenKind::Assign,
                        TokenKind::Bang,
                        TokenKind::Less,
                        TokenKind::Greater,
                        TokenKind::Eof]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("think Think thinking"),
                   vec![TokenKind::Think,
                        TokenKind::Identifier("Think".into()),
                        TokenKind::Identifier("thinking".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(kinds(r#""a\nb\t\"q\" \z" 'it\'s'"#),
                   vec![TokenKind::Str("a\nb\t\"q\" z".into()),
                        TokenKind::Str("it's".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        assert_eq!(kinds("express \"open\nstill open"),
                   vec![TokenKind::Express,
                        TokenKind::Str("open\nstill open".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn comments_are_dropped_but_newlines_kept() {
        assert_eq!(kinds("think 1 # note\n# whole line\nexpress 2"),
                   vec![TokenKind::Think,
                        TokenKind::Integer(1.0),
                        TokenKind::NewLine,
                        TokenKind::NewLine,
                        TokenKind::Express,
                        TokenKind::Integer(2.0),
                        TokenKind::Eof]);
    }

    #[test]
    fn positions_are_line_and_column() {
        let tokens = tokenize("think 1\n    express x").unwrap();
        let express = &tokens[3];
        assert_eq!(express.kind, TokenKind::Express);
        assert_eq!((express.line, express.column), (2, 5));

        let newline = &tokens[2];
        assert_eq!((newline.line, newline.column), (1, 8));
    }

    #[test]
    fn positions_after_multiline_string() {
        let tokens = tokenize("'a\nb' x").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Identifier("x".into()));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
    }

    #[test]
    fn unknown_character_is_reported_with_position() {
        assert_eq!(tokenize("think 1\nexpress @"),
                   Err(ParseError::UnexpectedCharacter { character: '@',
                                                         line:      2,
                                                         column:    9, }));
    }

    #[test]
    fn long_integers_round_to_the_nearest_number() {
        assert_eq!(kinds("9007199254740993 99999999999999999999"),
                   vec![TokenKind::Integer(9_007_199_254_740_992.0),
                        TokenKind::Integer(1e20),
                        TokenKind::Eof]);
    }

    #[test]
    fn tokenizing_is_repeatable() {
        let source = "define intention greet with name:\n    express \"Hi \" + name\n";
        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }
}
