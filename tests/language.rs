use std::fs::{self};

use thoughtscript::{ErrorKind, Interpreter, Value, run};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_thought_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("ThoughtScript example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No ThoughtScript examples found in book/src");
}

#[test]
fn example_program_runs() {
    let source = fs::read_to_string("tests/example.thought").expect("example program is missing");
    let (_, output) = run(&source).unwrap_or_else(|e| panic!("example program failed: {e}"));

    assert_eq!(output.first().map(String::as_str), Some("Hello, I am Thought"));
    assert!(output.iter().any(|line| line == "Hi World"));
}

fn extract_thought_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```thought") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_output(src: &str, expected: &[&str]) {
    match run(src) {
        Ok((_, output)) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

fn assert_error_kind(src: &str, kind: ErrorKind) {
    match run(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail with {kind}:\n{src}"),
        Err(e) => assert_eq!(e.kind(), kind, "wrong error for:\n{src}\n{e}"),
    }
}

#[test]
fn arithmetic_builtins_follow_integer_arithmetic() {
    let pairs = [(2, 3), (-4, 7), (0, 9), (12, -5), (1000, 1000)];

    for (a, b) in pairs {
        assert_output(&format!("express add({a}, {b})"), &[&(a + b).to_string()]);
        assert_output(&format!("express subtract({a}, {b})"), &[&(a - b).to_string()]);
        assert_output(&format!("express multiply({a}, {b})"), &[&(a * b).to_string()]);
    }

    assert_output("express divide(10, 4)", &["2.5"]);
    assert_output("express divide(9, 3)", &["3"]);
}

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    assert_error_kind("express divide(10, 0)", ErrorKind::Arithmetic);
    assert_error_kind("express 1 / 0", ErrorKind::Arithmetic);

    let mut interpreter = Interpreter::new();
    assert!(interpreter.interpret("express divide(10, 0)").is_err());
    assert!(interpreter.output().is_empty());
}

#[test]
fn operator_precedence_and_associativity() {
    assert_output("express 2 + 3 * 4", &["14"]);
    assert_output("express (2 + 3) * 4", &["20"]);
    assert_output("express 10 - 4 - 3", &["3"]);
    assert_output("express 16 / 4 / 2", &["2"]);
    assert_output("express -2 * 3", &["-6"]);
    assert_output("express 1 + 2 < 4 and 3 > 2", &["true"]);
    assert_output("express -0", &["0"]);
}

#[test]
fn consider_counts_inclusively_in_order() {
    assert_output("consider n from 1 to 3: express n", &["1", "2", "3"]);
    assert_output("consider x from 2 to 5:\n    express x", &["2", "3", "4", "5"]);
    assert_output("consider x from 4 to 4: express x", &["4"]);
    assert_output("consider x from 5 to 2: express x", &[]);

    for (start, end) in [(0, 0), (-2, 2), (3, 10)] {
        let (_, output) = run(&format!("consider i from {start} to {end}: express i")).unwrap();
        let expected = (start..=end).map(|i: i32| i.to_string()).collect::<Vec<_>>();
        assert_eq!(output, expected);
    }
}

#[test]
fn consider_shares_one_scope_across_iterations() {
    let src = "\
think 0 as total
consider i from 1 to 4:
    think total + i as total
    express total
express total";

    assert_output(src, &["1", "3", "6", "10", "0"]);
}

#[test]
fn consider_requires_numeric_bounds() {
    assert_error_kind("consider i from \"a\" to 3: express i", ErrorKind::Type);
    assert_error_kind("consider i from 1 to null: express i", ErrorKind::Type);
}

#[test]
fn think_and_express() {
    assert_output("think \"Alice\" as name\nexpress \"Hello, \" + name", &["Hello, Alice"]);
    assert_output("think 25 as age\nexpress \"I am \" + age", &["I am 25"]);
    assert_output("think 1 + 1", &[]);

    let (value, _) = run("think 6 * 7").unwrap();
    assert_eq!(value, Value::Number(42.0));
}

#[test]
fn literals_evaluate_to_themselves() {
    let cases = [("42", Value::Number(42.0)),
                 ("2.5", Value::Number(2.5)),
                 ("\"hi\"", Value::from("hi")),
                 ("'hi'", Value::from("hi")),
                 ("true", Value::Bool(true)),
                 ("false", Value::Bool(false)),
                 ("null", Value::Null),
                 ("even", Value::from("even")),
                 ("odd", Value::from("odd"))];

    for (src, expected) in cases {
        let (value, _) = run(src).unwrap_or_else(|e| panic!("{src} failed: {e}"));
        assert_eq!(value, expected, "literal {src}");
    }
}

#[test]
fn strings_escape_and_tolerate_missing_quote() {
    assert_output(r#"express "a\tb""#, &["a\tb"]);
    assert_output(r"express 'it\'s'", &["it's"]);
    assert_output("express \"unterminated", &["unterminated"]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("# a thought about nothing\n\nexpress 1 # trailing\n\n", &["1"]);
}

#[test]
fn equality_is_strict() {
    assert_output("express 1 is 1", &["true"]);
    assert_output("express 1 == \"1\"", &["false"]);
    assert_output("express null == null", &["true"]);
    assert_output("express null == 0", &["false"]);
    assert_output("express \"a\" != \"b\"", &["true"]);
    assert_output("express \"apple\" < \"banana\"", &["true"]);
}

#[test]
fn truthiness_drives_branches() {
    let falsy = ["false", "null", "0", "\"\""];
    let truthy = ["true", "1", "-3", "\"no\"", "memories"];

    for value in falsy {
        assert_output(&format!("if {value}: express 1\notherwise: express 2"), &["2"]);
    }
    for value in truthy {
        assert_output(&format!("if {value}: express 1\notherwise: express 2"), &["1"]);
    }

    assert_output("express not 0", &["true"]);
    assert_output("express !true", &["false"]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_output("express true or false", &["true"]);
    assert_output("express 1 and 0", &["false"]);
    assert_error_kind("express false and missingVar", ErrorKind::Name);
    assert_error_kind("express true or missingVar", ErrorKind::Name);
}

#[test]
fn nested_blocks_follow_indentation() {
    let src = "\
consider n from 1 to 4:
    if isEven(n):
        express n + \" is even\"
    otherwise:
        express n + \" is odd\"
express \"done\"";

    assert_output(src,
                  &["1 is odd", "2 is even", "3 is odd", "4 is even", "done"]);
}

#[test]
fn intentions_are_called_with_arguments() {
    assert_output("define intention greet with name: express \"Hi \" + name\ngreet(\"World\")",
                  &["Hi World"]);

    let src = "\
define intention area with width, height:
    think width * height as result
    result
express area(3, 4)";
    assert_output(src, &["12"]);
}

#[test]
fn intentions_close_over_their_defining_scope() {
    let src = "\
think \"global\" as who
define intention whoAmI:
    who
define intention caller:
    think \"local\" as who
    whoAmI()
express caller()
express who";

    assert_output(src, &["global", "global"]);
}

#[test]
fn intentions_recurse() {
    let src = "\
define intention countdown with n:
    if n > 0:
        express n
        countdown(n - 1)
countdown(3)";

    assert_output(src, &["3", "2", "1"]);
}

/// Runs each source in turn on one interpreter, on a thread with enough stack
/// for deep recursion. Values come back rendered since they cannot cross
/// threads.
fn run_with_large_stack(sources: Vec<String>) -> Vec<Result<String, ErrorKind>> {
    std::thread::Builder::new().stack_size(256 * 1024 * 1024)
                               .spawn(move || {
                                   let mut interpreter = Interpreter::new();
                                   sources.iter()
                                          .map(|src| {
                                              interpreter.interpret(src)
                                                         .map(|value| value.to_string())
                                                         .map_err(|e| e.kind())
                                          })
                                          .collect()
                               })
                               .unwrap()
                               .join()
                               .unwrap()
}

#[test]
fn recursion_is_bounded_by_the_call_depth() {
    let countdown = "\
define intention f with n:
    if n > 0: f(n - 1)
    otherwise: n
";

    let results = run_with_large_stack(vec![format!("{countdown}f(500)"),
                                            format!("{countdown}f(100000)"),
                                            "define intention spin with n: spin(n)\nspin(1)".to_string()]);

    assert_eq!(results[0], Ok("0".to_string()));
    assert_eq!(results[1], Err(ErrorKind::Recursion));
    assert_eq!(results[2], Err(ErrorKind::Recursion));
}

#[test]
fn interpreter_recovers_after_hitting_the_call_depth() {
    let results = run_with_large_stack(vec!["define intention spin with n: spin(n)\nspin(1)".to_string(),
                                            "express 1 + 1".to_string(),
                                            "define intention f with n:\n    if n > 0: f(n - 1)\n    otherwise: \"done\"\nf(900)".to_string()]);

    assert_eq!(results[0], Err(ErrorKind::Recursion));
    assert_eq!(results[1], Ok("2".to_string()));
    assert_eq!(results[2], Ok("done".to_string()));
}

#[test]
fn builtins_check_types_and_arity() {
    assert_output("express length(\"hello\")", &["5"]);
    assert_output("express uppercase(\"quiet\") + lowercase(\"LOUD\")", &["QUIETloud"]);
    assert_output("express isEven(4)\nexpress isOdd(4)", &["true", "false"]);
    assert_output("express type(null)\nexpress type(1)\nexpress type(\"a\")\nexpress type(true)",
                  &["null", "number", "string", "boolean"]);
    assert_output("express type(memories)\nexpress type(add)", &["object", "function"]);

    assert_error_kind("express uppercase(5)", ErrorKind::Type);
    assert_error_kind("express isEven(\"two\")", ErrorKind::Type);
    assert_error_kind("express length(5)", ErrorKind::Type);
    assert_error_kind("express length(\"a\", \"b\")", ErrorKind::Arity);
    assert_error_kind("define intention f with a, b: a + b\nf(1)", ErrorKind::Arity);
}

#[test]
fn unknown_names_fail() {
    assert_error_kind("express missingVar", ErrorKind::Name);
    assert_error_kind("think 5 as x\nx()", ErrorKind::Name);
    assert_error_kind("nothing(1)", ErrorKind::Name);
    assert_error_kind("express -\"x\"", ErrorKind::Type);
}

#[test]
fn lexical_and_syntax_errors_are_classified() {
    assert_error_kind("express 1 @ 2", ErrorKind::Lexical);
    assert_error_kind("think 1 as", ErrorKind::Syntax);
    assert_error_kind("if true:\nexpress 1", ErrorKind::Syntax);
    assert_error_kind("return 1", ErrorKind::Syntax);
    assert_failure("express (1 + 2");
}

#[test]
fn show_prints_values_and_memories() {
    assert_output("show 5", &["5"]);
    assert_output("show memories", &["No memories stored"]);
    assert_output("remember \"curious\" as \"mood\"\nremember 25 as \"age\"\nshow memories",
                  &["Memories:\nmood: curious\nage: 25"]);

    let (value, _) = run("remember 1 as 2\nshow memories").unwrap();
    assert_eq!(value,
               Value::from(vec![Value::from(vec![Value::from("2"), Value::Number(1.0)])]));
}

#[test]
fn long_and_tiny_numbers_print_in_exponent_form() {
    assert_output("express 99999999999999999999", &["100000000000000000000"]);
    assert_output("express 99999999999999999999 * 10", &["1e+21"]);
    assert_output("express 1 / 10000000", &["1e-7"]);
    assert_output("express 1 / 1000000", &["0.000001"]);
}

#[test]
fn deeper_lines_after_an_inline_statement_stay_in_its_block() {
    assert_output("if false: express 1\n    express 2\nexpress 3", &["3"]);
    assert_output("if true: express 1\n    express 2\nexpress 3", &["1", "2", "3"]);
}

#[test]
fn memories_remembered_in_an_intention_outlive_the_call() {
    let src = "\
define intention note with n:
    remember n as \"last\"
    if n > 1:
        remember n * 2 as \"double\"
note(7)
show memories";

    assert_output(src, &["Memories:\nlast: 7\ndouble: 14"]);

    let nested = "\
define intention inner with v:
    remember v as \"seen\"
define intention outer with v:
    inner(v + 1)
outer(1)
show memories";

    assert_output(nested, &["Memories:\nseen: 2"]);
}

#[test]
fn remembered_values_are_visible_after_nested_blocks() {
    let src = "\
remember \"outer\" as \"mood\"
remember 1 as \"count\"
if true:
    remember \"inner\" as \"mood\"
    remember \"deep\" as \"extra\"
    show memories
show memories";

    let listing = "Memories:\nmood: inner\ncount: 1\nextra: deep";
    assert_output(src, &[listing, listing]);
}

#[test]
fn state_persists_across_interpret_calls() {
    let mut interpreter = Interpreter::new();

    interpreter.interpret("think 2 as x\nexpress x").unwrap();
    assert_eq!(interpreter.output(), ["2"]);

    let value = interpreter.interpret("x * 10").unwrap();
    assert_eq!(value, Value::Number(20.0));
    assert!(interpreter.output().is_empty());

    assert!(interpreter.interpret("express missingVar").is_err());
    interpreter.interpret("express x").unwrap();
    assert_eq!(interpreter.output(), ["2"]);

    interpreter.clear_output();
    assert!(interpreter.output().is_empty());
}

#[test]
fn tokenize_and_parse_are_repeatable() {
    let src = std::fs::read_to_string("tests/example.thought").unwrap();

    assert_eq!(thoughtscript::tokenize(&src).unwrap(), thoughtscript::tokenize(&src).unwrap());
    assert_eq!(thoughtscript::parse(&src).unwrap(), thoughtscript::parse(&src).unwrap());
}
