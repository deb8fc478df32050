use monkey_interpreter::repl;

fn main() {
    println!("This is the Monkey programming language!");
    repl::start();
}
