use crate::environment::Environment;
use crate::evaluator::eval_program;
use crate::lexer::Lexer;
use crate::parser::Parser;
use std::io;
use std::io::Write;

const PROMPT: &'static str = ">> ";

pub fn start() {
    let env = Environment::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().unwrap();
        let mut input = String::new();
        let read = io::stdin().read_line(&mut input).unwrap();
        if read == 0 {
            // EOF
            return;
        }
        let input = input.trim_end();
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse();
        if !parser.errors().is_empty() {
            for error in parser.errors() {
                println!("parser error: {}", error);
            }
            continue;
        }
        let result = eval_program(&program, &env);
        println!("{}", result);
    }
}
