use monkey_interpreter::environment::Environment;
use monkey_interpreter::evaluator::eval_program;
use monkey_interpreter::lexer::Lexer;
use monkey_interpreter::object::Object;
use monkey_interpreter::parser::Parser;
use std::rc::Rc;

fn run(input: &str) -> Rc<Object> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse();
    assert!(
        parser.errors().is_empty(),
        "parser errors for {:?}: {:?}",
        input,
        parser.errors()
    );
    let env = Environment::new();
    eval_program(&program, &env)
}

fn render(input: &str) -> String {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse();
    assert!(
        parser.errors().is_empty(),
        "parser errors for {:?}: {:?}",
        input,
        parser.errors()
    );
    format!("{}", program)
}

#[test]
fn arithmetic_with_precedence() {
    assert_eq!(run("5 + 5 * 2").as_ref(), &Object::Integer(15));
}

#[test]
fn conditionals() {
    assert_eq!(
        run("if (1 < 2) { 10 } else { 20 }").as_ref(),
        &Object::Integer(10)
    );
    assert_eq!(run("if (1 > 2) { 10 }").as_ref(), &Object::Null);
}

#[test]
fn function_application() {
    assert_eq!(
        run("let add = fn(a, b) { a + b }; add(3, add(4, 5))").as_ref(),
        &Object::Integer(12)
    );
}

#[test]
fn closures() {
    let input = "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3)";
    assert_eq!(run(input).as_ref(), &Object::Integer(5));
}

#[test]
fn closures_capture_definition_time_bindings() {
    let input = "let x = 5; let f = fn() { x }; let x = 10; f()";
    assert_eq!(run(input).as_ref(), &Object::Integer(5));
}

#[test]
fn string_concatenation_and_its_error() {
    assert_eq!(
        run(r#""Hello" + " " + "World""#).as_ref(),
        &Object::MonkeyString("Hello World".to_string())
    );
    assert_eq!(
        run(r#""a" - "b""#).as_ref(),
        &Object::Error("unknown operator: STRING - STRING".to_string())
    );
}

#[test]
fn arrays_and_builtins() {
    assert_eq!(
        run("let a = [1, 2, 3]; push(a, 4); a").as_ref(),
        &Object::ArrayObject(vec![
            Rc::new(Object::Integer(1)),
            Rc::new(Object::Integer(2)),
            Rc::new(Object::Integer(3)),
        ])
    );
    assert_eq!(
        run("let a = [1, 2, 3]; first(rest(a))").as_ref(),
        &Object::Integer(2)
    );
    assert_eq!(run("let a = [1, 2, 3]; a[10]").as_ref(), &Object::Null);
}

#[test]
fn type_mismatch_is_an_error_value() {
    assert_eq!(
        run("5 + true").as_ref(),
        &Object::Error("type mismatch: INTEGER + BOOLEAN".to_string())
    );
}

#[test]
fn unknown_identifier_is_an_error_value() {
    assert_eq!(
        run("foobar").as_ref(),
        &Object::Error("identifier not found: foobar".to_string())
    );
}

#[test]
fn nested_return_propagates_to_the_program_boundary() {
    let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
    assert_eq!(run(input).as_ref(), &Object::Integer(10));
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert_eq!(run("if (0) { 1 } else { 2 }").as_ref(), &Object::Integer(1));
    assert_eq!(
        run(r#"if ("") { 1 } else { 2 }"#).as_ref(),
        &Object::Integer(1)
    );
    assert_eq!(run("!0").as_ref(), &Object::Boolean(false));
}

#[test]
fn negated_integer_literals() {
    assert_eq!(run("-5").as_ref(), &Object::Integer(-5));
    assert_eq!(run("5").as_ref(), &Object::Integer(5));
}

#[test]
fn double_negation_restores_booleans() {
    assert_eq!(run("!true").as_ref(), &Object::Boolean(false));
    assert_eq!(run("!!true").as_ref(), &Object::Boolean(true));
    assert_eq!(run("!!false").as_ref(), &Object::Boolean(false));
}

#[test]
fn canonical_rendering_oracles() {
    let tests = vec![
        ("-a * b", "((-a) * b)"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d)",
        ),
        ("let x = 5;", "let x = 5;"),
        ("return x;", "return x;"),
        (
            "if (x < y) { x } else { y }",
            "if((x < y)){x}else{y}",
        ),
        ("fn(x, y) { x + y }", "fn(x, y){(x + y)}"),
    ];
    for (input, expected) in tests {
        assert_eq!(render(input), expected, "input: {}", input);
    }
}

#[test]
fn rendering_is_idempotent() {
    let inputs = vec![
        "let add = fn(a, b) { a + b }; add(3, add(4, 5))",
        "a * [1, 2, 3, 4][b * c] * d",
        "if (x < y) { x } else { y }",
        "return -a * b;",
        r#"let s = "foo" + "bar";"#,
    ];
    for input in inputs {
        let once = render(input);
        let twice = render(&once);
        assert_eq!(once, twice, "input: {}", input);
    }
}

#[test]
fn the_repl_environment_outlives_single_programs() {
    // One environment, several parsed programs, as the REPL drives it.
    let env = Environment::new();
    let mut results = Vec::new();
    for input in &["let counter = fn(x) { x + 1 };", "let n = counter(1);", "counter(n)"] {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse();
        assert!(parser.errors().is_empty(), "errors: {:?}", parser.errors());
        results.push(eval_program(&program, &env));
    }
    assert_eq!(results[2].as_ref(), &Object::Integer(3));
}
