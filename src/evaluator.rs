use crate::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::builtins;
use crate::environment::Environment;
use crate::object::Object;
use std::cell::RefCell;
use std::rc::Rc;

pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    let mut result = Rc::new(Object::Null);
    for stmt in program.statements() {
        result = eval_statement(stmt, env);
        match result.as_ref() {
            Object::ReturnValue(value) => return Rc::clone(value),
            Object::Error(..) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(stmt: &Statement, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    match stmt {
        Statement::LetStatement { name, value } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name, value);
            Rc::new(Object::Null)
        }
        Statement::ReturnStatement(value) => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }
            Rc::new(Object::ReturnValue(value))
        }
        Statement::ExpressionStatement(exp) => eval_expression(exp, env),
        Statement::BlockStatement(statements) => eval_block_statement(statements, env),
    }
}

// Unlike eval_program, return values pass through unopened so that a `return`
// in a nested block reaches the enclosing function call or program boundary.
fn eval_block_statement(statements: &[Statement], env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    let mut result = Rc::new(Object::Null);
    for stmt in statements {
        result = eval_statement(stmt, env);
        if matches!(result.as_ref(), Object::ReturnValue(..) | Object::Error(..)) {
            return result;
        }
    }
    result
}

fn eval_expression(exp: &Expression, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    match exp {
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::IntegerLiteral(value) => Rc::new(Object::Integer(*value)),
        Expression::StringLiteral(value) => Rc::new(Object::MonkeyString(value.to_string())),
        Expression::Boolean(value) => Rc::new(Object::Boolean(*value)),
        Expression::PrefixExpression { operator, right } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }
        Expression::InfixExpression {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }
        Expression::IfExpression {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, env);
            if condition.is_error() {
                return condition;
            }
            if is_truthy(&condition) {
                eval_statement(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_statement(alternative, env)
            } else {
                Rc::new(Object::Null)
            }
        }
        Expression::FunctionLiteral { parameters, body } => {
            // The closure keeps the bindings as they stand at definition time.
            Rc::new(Object::Function {
                parameters: parameters.clone(),
                body: (**body).clone(),
                env: Rc::new(RefCell::new(env.borrow().snapshot())),
            })
        }
        Expression::CallExpression {
            function,
            arguments,
        } => {
            let function = eval_expression(function, env);
            if function.is_error() {
                return function;
            }
            let arguments = match eval_expressions(arguments, env) {
                Ok(arguments) => arguments,
                Err(err) => return err,
            };
            apply_function(function, arguments)
        }
        Expression::ArrayLiteral(elements) => match eval_expressions(elements, env) {
            Ok(elements) => Rc::new(Object::ArrayObject(elements)),
            Err(err) => err,
        },
        Expression::IndexExpression { left, index } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Rc<Object> {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Rc::new(Object::Builtin(builtin));
    }
    new_error(format!("identifier not found: {}", name))
}

fn eval_expressions(
    expressions: &[Expression],
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Rc<Object>>, Rc<Object>> {
    let mut results = Vec::new();
    for expression in expressions {
        let result = eval_expression(expression, env);
        if result.is_error() {
            return Err(result);
        }
        results.push(result);
    }
    Ok(results)
}

fn eval_prefix_expression(operator: &PrefixOperator, right: Rc<Object>) -> Rc<Object> {
    match operator {
        PrefixOperator::BANG => eval_bang_operator_expression(right),
        PrefixOperator::MINUS => eval_minus_prefix_operator_expression(right),
    }
}

fn eval_bang_operator_expression(right: Rc<Object>) -> Rc<Object> {
    let result = match right.as_ref() {
        Object::Boolean(value) => !value,
        Object::Null => true,
        _ => false,
    };
    Rc::new(Object::Boolean(result))
}

fn eval_minus_prefix_operator_expression(right: Rc<Object>) -> Rc<Object> {
    match right.as_ref() {
        Object::Integer(value) => Rc::new(Object::Integer(-value)),
        _ => new_error(format!("unknown operator: -{}", right.r#type())),
    }
}

fn eval_infix_expression(
    operator: &InfixOperator,
    left: Rc<Object>,
    right: Rc<Object>,
) -> Rc<Object> {
    match (left.as_ref(), right.as_ref()) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r)
        }
        (Object::MonkeyString(l), Object::MonkeyString(r)) => {
            eval_string_infix_expression(operator, l, r)
        }
        (l, r) if l.r#type() == r.r#type() => match operator {
            InfixOperator::EQ => Rc::new(Object::Boolean(left == right)),
            InfixOperator::NEQ => Rc::new(Object::Boolean(left != right)),
            _ => new_error(format!(
                "unknown operator: {} {} {}",
                left.r#type(),
                operator,
                right.r#type()
            )),
        },
        _ => new_error(format!(
            "type mismatch: {} {} {}",
            left.r#type(),
            operator,
            right.r#type()
        )),
    }
}

fn eval_integer_infix_expression(operator: &InfixOperator, left: i64, right: i64) -> Rc<Object> {
    use InfixOperator::*;
    let result = match operator {
        PLUS => Object::Integer(left + right),
        MINUS => Object::Integer(left - right),
        ASTERISK => Object::Integer(left * right),
        SLASH => {
            if right == 0 {
                return new_error("division by zero".to_string());
            }
            Object::Integer(left / right)
        }
        LT => Object::Boolean(left < right),
        GT => Object::Boolean(left > right),
        EQ => Object::Boolean(left == right),
        NEQ => Object::Boolean(left != right),
    };
    Rc::new(result)
}

fn eval_string_infix_expression(operator: &InfixOperator, left: &str, right: &str) -> Rc<Object> {
    match operator {
        InfixOperator::PLUS => Rc::new(Object::MonkeyString(format!("{}{}", left, right))),
        _ => new_error(format!("unknown operator: STRING {} STRING", operator)),
    }
}

fn eval_index_expression(left: Rc<Object>, index: Rc<Object>) -> Rc<Object> {
    match (left.as_ref(), index.as_ref()) {
        (Object::ArrayObject(elements), Object::Integer(i)) => {
            if *i < 0 || *i >= elements.len() as i64 {
                Rc::new(Object::Null)
            } else {
                Rc::clone(&elements[*i as usize])
            }
        }
        _ => new_error(format!("index operator not supported: {}", left.r#type())),
    }
}

fn apply_function(function: Rc<Object>, arguments: Vec<Rc<Object>>) -> Rc<Object> {
    match function.as_ref() {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = Environment::new_enclosed(Rc::clone(env));
            for (i, parameter) in parameters.iter().enumerate() {
                // Parameter names leave the captured frame and bind in the
                // call frame; missing arguments leave the name unbound.
                env.borrow_mut().delete(parameter);
                if let Some(argument) = arguments.get(i) {
                    call_env.borrow_mut().set(parameter, Rc::clone(argument));
                }
            }
            unwrap_return_value(eval_statement(body, &call_env))
        }
        Object::Builtin(builtin) => builtin.apply(arguments),
        _ => new_error(format!("not a function: {}", function.r#type())),
    }
}

fn unwrap_return_value(result: Rc<Object>) -> Rc<Object> {
    match result.as_ref() {
        Object::ReturnValue(value) => Rc::clone(value),
        _ => result,
    }
}

fn is_truthy(condition: &Object) -> bool {
    !matches!(condition, Object::Boolean(false) | Object::Null)
}

fn new_error(message: String) -> Rc<Object> {
    Rc::new(Object::Error(message))
}
