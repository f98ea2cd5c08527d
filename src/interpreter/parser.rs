/// Parser entry points.
///
/// Holds the `ParseResult` alias, the program parser and the expression entry
/// point that every other parsing module descends from.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix negation and logical not, literals, identifiers, calls,
/// parenthesized expressions and the `memories`/`even`/`odd` shorthands.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence ladder from logical or down to multiplication.
/// Every level is left-associative.
pub mod binary;

/// Indentation-delimited blocks.
///
/// Decides where a block that follows a `:` begins and ends, based on the
/// column of the first token of each line.
pub mod block;

/// Shared helpers for the parser.
///
/// Token expectations, identifiers and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading keyword of a statement: `think`, `express`,
/// `consider`, `if`, `remember`, `show` and `define intention`. Anything else
/// is an expression statement.
pub mod statement;

pub use self::core::{ParseResult, parse_program};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, Block, LiteralValue, Node},
        error::ParseError,
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Vec<Node>> {
        let tokens = tokenize(source)?;
        match parse_program(&tokens)? {
            Node::Program { statements } => Ok(statements),
            other => panic!("expected a program, got {other:?}"),
        }
    }

    fn block_len(block: &Block) -> usize {
        block.statements.len()
    }

    #[test]
    fn precedence_and_associativity() {
        let statements = parse("express 1 + 2 * 3 - 4").unwrap();
        let Node::Express { expr, .. } = &statements[0] else {
            panic!("expected express");
        };
        let Node::BinaryOp { left, op, right, .. } = expr.as_ref() else {
            panic!("expected binary op");
        };
        assert_eq!(*op, BinaryOperator::Sub);
        assert_eq!(right.as_ref(),
                   &Node::Literal { value: LiteralValue::Integer(4.0),
                                    line:  1, });
        assert!(matches!(left.as_ref(),
                         Node::BinaryOp { op: BinaryOperator::Add,
                                          .. }));
    }

    #[test]
    fn is_is_an_alias_for_equality() {
        let statements = parse("x is 3").unwrap();
        assert!(matches!(&statements[0],
                         Node::BinaryOp { op: BinaryOperator::Equal,
                                          .. }));
    }

    #[test]
    fn indented_block_ends_at_dedent() {
        let source = "consider i from 1 to 3:\n    express i\n    express i * 2\nexpress \"done\"\n";
        let statements = parse(source).unwrap();
        assert_eq!(statements.len(), 2);
        let Node::Consider { body, .. } = &statements[0] else {
            panic!("expected consider");
        };
        assert_eq!(block_len(body), 2);
    }

    #[test]
    fn inline_block_holds_one_statement() {
        let statements = parse("consider n from 1 to 3: express n\nexpress 0").unwrap();
        assert_eq!(statements.len(), 2);
        let Node::Consider { body, .. } = &statements[0] else {
            panic!("expected consider");
        };
        assert_eq!(block_len(body), 1);
    }

    #[test]
    fn deeper_lines_after_an_inline_statement_join_the_block() {
        let statements = parse("if false: express 1\n    express 2\nexpress 3").unwrap();
        assert_eq!(statements.len(), 2);
        let Node::If { then_block,
                       else_block: None,
                       .. } = &statements[0]
        else {
            panic!("expected if");
        };
        assert_eq!(block_len(then_block), 2);
    }

    #[test]
    fn inline_if_keeps_its_inline_otherwise() {
        let statements = parse("if x: express 1 otherwise: express 2\nexpress 3").unwrap();
        assert_eq!(statements.len(), 2);
        assert!(matches!(&statements[0],
                         Node::If { else_block: Some(_),
                                    .. }));
    }

    #[test]
    fn nesting_is_capped() {
        let run = |source: String| {
            std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                                       .spawn(move || parse(&source))
                                       .unwrap()
                                       .join()
                                       .unwrap()
        };

        let parens = |n: usize| format!("express {}1{}", "(".repeat(n), ")".repeat(n));
        assert!(run(parens(100)).is_ok());
        assert!(matches!(run(parens(20_000)),
                         Err(ParseError::NestingTooDeep { limit: super::core::MAX_NESTING_DEPTH,
                                                          line: 1,
                                                          .. })));
        assert!(matches!(run(format!("express {}1", "-".repeat(20_000))),
                         Err(ParseError::NestingTooDeep { .. })));

        let mut blocks = String::new();
        for level in 0..300 {
            blocks.push_str(&" ".repeat(level));
            blocks.push_str("if true:\n");
        }
        blocks.push_str(&" ".repeat(300));
        blocks.push_str("express 1\n");
        assert!(matches!(run(blocks), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn nested_blocks_and_otherwise() {
        let source = "\
if a:
    if b:
        express 1
    otherwise:
        express 2
    express 3
otherwise:
    express 4
";
        let statements = parse(source).unwrap();
        assert_eq!(statements.len(), 1);
        let Node::If { then_block,
                       else_block: Some(else_block),
                       .. } = &statements[0]
        else {
            panic!("expected if with otherwise");
        };
        assert_eq!(block_len(then_block), 2);
        assert_eq!(block_len(else_block), 1);
        assert!(matches!(&then_block.statements[0],
                         Node::If { else_block: Some(_),
                                    .. }));
    }

    #[test]
    fn blank_lines_and_comments_inside_blocks() {
        let source = "define intention greet with name:\n\n    # say hi\n    express \"Hi \" + name\n\n    express name\ngreet(\"World\")";
        let statements = parse(source).unwrap();
        assert_eq!(statements.len(), 2);
        let Node::Intention { params, body, .. } = &statements[0] else {
            panic!("expected intention");
        };
        assert_eq!(params, &vec!["name".to_string()]);
        assert_eq!(block_len(body), 2);
    }

    #[test]
    fn missing_block_is_an_error() {
        assert!(matches!(parse("if true:\nexpress 1"),
                         Err(ParseError::ExpectedIndentedBlock { line: 1, .. })));
        assert!(matches!(parse("if true:"),
                         Err(ParseError::ExpectedIndentedBlock { .. })));
    }

    #[test]
    fn syntax_error_reports_expected_and_found() {
        assert_eq!(parse("consider i to 3: express i"),
                   Err(ParseError::UnexpectedToken { expected: "FROM".to_string(),
                                                     found:    "TO".to_string(),
                                                     line:     1,
                                                     column:   12, }));
    }

    #[test]
    fn statements_must_end_at_a_line_break() {
        assert!(matches!(parse("think 1 express 2"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn reserved_words_without_a_statement_form_are_rejected() {
        assert!(matches!(parse("return 1"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn parsing_is_repeatable() {
        let source = "think 5 as x\nif x > 3:\n    remember x as \"big\"\nshow memories\n";
        assert_eq!(parse(source), parse(source));
    }
}
