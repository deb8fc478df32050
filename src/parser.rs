use crate::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::lexer::Lexer;
use crate::token::Token;
use anyhow::{bail, Result};

#[derive(PartialOrd, PartialEq)]
enum Precedence {
    LOWEST,
    EQUALS,
    LESS,
    SUM,
    PRODUCT,
    PREFIX,
    CALL,
    INDEX,
}

impl Token {
    fn precedence(&self) -> Precedence {
        use Precedence::*;
        use Token::*;
        match self {
            EQ | NEQ => EQUALS,
            LT | GT => LESS,
            PLUS | MINUS => SUM,
            ASTERISK | SLASH => PRODUCT,
            LPAREN => CALL,
            LBRACKET => INDEX,
            _ => LOWEST,
        }
    }
}

pub struct Parser<'a> {
    l: Lexer<'a>,
    cur: Token,
    peek: Token,
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(l: Lexer<'a>) -> Self {
        let mut parser = Parser {
            l,
            cur: Token::EOF,
            peek: Token::EOF,
            errors: Vec::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
    fn next_token(&mut self) {
        // self.cur <- self.peek
        // self.peek <- self.l.next()
        std::mem::swap(&mut self.cur, &mut self.peek);
        self.peek = self.l.next().unwrap_or(Token::EOF);
    }
    fn cur_token_is(&self, token: &Token) -> bool {
        &self.cur == token
    }
    fn peek_token_is(&self, token: &Token) -> bool {
        &self.peek == token
    }
    fn expect_peek(&self, token: &Token) -> Result<()> {
        if !self.peek_token_is(token) {
            bail!(
                "expected next token to be {}, got {} instead",
                token.type_name(),
                self.peek.type_name()
            );
        }
        Ok(())
    }
    pub fn parse(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cur_token_is(&Token::EOF) {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => self.errors.push(err.to_string()),
            }
            self.next_token();
        }
        Program::new(statements)
    }
    fn parse_statement(&mut self) -> Result<Statement> {
        match self.cur {
            Token::LET => self.parse_let_statement(),
            Token::RETURN => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }
    fn parse_let_statement(&mut self) -> Result<Statement> {
        match &self.peek {
            Token::IDENT(literal) => {
                let name = literal.to_string();
                self.next_token(); // self.cur <- IDENT

                self.expect_peek(&Token::ASSIGN)?; // =
                self.next_token(); // self.cur <- ASSIGN

                self.next_token();
                let value = self.parse_expression(Precedence::LOWEST)?;

                if self.peek_token_is(&Token::SEMICOLON) {
                    self.next_token();
                }
                Ok(Statement::LetStatement { name, value })
            }
            peek => {
                bail!(
                    "expected next token to be IDENT, got {} instead",
                    peek.type_name()
                )
            }
        }
    }
    fn parse_return_statement(&mut self) -> Result<Statement> {
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(&Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::ReturnStatement(value))
    }
    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let exp = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(&Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::ExpressionStatement(exp))
    }
    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression> {
        use Expression::*;
        use Token::*;
        let mut exp = match &self.cur {
            IDENT(literal) => Identifier(literal.to_string()),
            INT(literal) => match literal.parse::<i64>() {
                Ok(value) => IntegerLiteral(value),
                Err(..) => bail!("could not parse {} as integer", literal),
            },
            STRING(literal) => StringLiteral(literal.to_string()),
            MINUS | BANG => self.parse_prefix_expression()?,
            LPAREN => self.parse_grouped_expression()?,
            LBRACKET => self.parse_array_literal()?,
            TRUE => Boolean(true),
            FALSE => Boolean(false),
            IF => self.parse_if_expression()?,
            FUNCTION => self.parse_function_literal()?,
            token => {
                bail!("no prefix parse function for {} found", token.type_name());
            }
        };
        while !self.peek_token_is(&Token::SEMICOLON) && precedence < self.peek.precedence() {
            exp = match &self.peek {
                PLUS | MINUS | ASTERISK | SLASH | LT | GT | EQ | NEQ => {
                    self.next_token();
                    self.parse_infix_expression(exp)?
                }
                LPAREN => {
                    self.next_token();
                    self.parse_call_expression(exp)?
                }
                LBRACKET => {
                    self.next_token();
                    self.parse_index_expression(exp)?
                }
                _ => return Ok(exp),
            };
        }
        Ok(exp)
    }
    fn parse_grouped_expression(&mut self) -> Result<Expression> {
        assert_eq!(self.cur, Token::LPAREN); // (
        self.next_token();
        let exp = self.parse_expression(Precedence::LOWEST)?;
        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token();
        Ok(exp)
    }
    fn parse_prefix_expression(&mut self) -> Result<Expression> {
        let op = match &self.cur {
            Token::MINUS => PrefixOperator::MINUS,
            Token::BANG => PrefixOperator::BANG,
            token => {
                bail!("unexpected operator: {:?}", token);
            }
        };
        self.next_token();
        let right = self.parse_expression(Precedence::PREFIX)?;
        Ok(Expression::PrefixExpression {
            operator: op,
            right: Box::new(right),
        })
    }
    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression> {
        let op = match &self.cur {
            Token::PLUS => InfixOperator::PLUS,
            Token::MINUS => InfixOperator::MINUS,
            Token::ASTERISK => InfixOperator::ASTERISK,
            Token::SLASH => InfixOperator::SLASH,
            Token::LT => InfixOperator::LT,
            Token::GT => InfixOperator::GT,
            Token::EQ => InfixOperator::EQ,
            Token::NEQ => InfixOperator::NEQ,
            token => {
                bail!("unexpected operator: {:?}", token);
            }
        };
        let precedence = self.cur.precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::InfixExpression {
            left: Box::new(left),
            operator: op,
            right: Box::new(right),
        })
    }
    fn parse_if_expression(&mut self) -> Result<Expression> {
        self.expect_peek(&Token::LPAREN)?; // (
        self.next_token(); // self.cur <- LPAREN

        self.next_token();
        let condition = self.parse_expression(Precedence::LOWEST)?;

        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token(); // self.cur <- RPAREN

        self.expect_peek(&Token::LBRACE)?; // {
        self.next_token(); // self.cur <- LBRACE

        let consequence = self.parse_block_statement()?;
        let alternative = if self.peek_token_is(&Token::ELSE) {
            self.next_token();

            self.expect_peek(&Token::LBRACE)?; // {
            self.next_token(); // self.cur <- LBRACE

            let alt = self.parse_block_statement()?;
            Some(Box::new(alt))
        } else {
            None
        };
        Ok(Expression::IfExpression {
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative,
        })
    }
    fn parse_function_literal(&mut self) -> Result<Expression> {
        self.expect_peek(&Token::LPAREN)?; // (
        self.next_token(); // self.cur <- LPAREN

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(&Token::LBRACE)?; // {
        self.next_token(); // self.cur <- LBRACE

        let body = self.parse_block_statement()?;
        Ok(Expression::FunctionLiteral {
            parameters,
            body: Box::new(body),
        })
    }
    fn parse_function_parameters(&mut self) -> Result<Vec<String>> {
        let mut parameters = Vec::new();
        if self.peek_token_is(&Token::RPAREN) {
            self.next_token(); // self.cur <- RPAREN
            return Ok(parameters);
        }
        self.next_token();
        parameters.push(self.parse_parameter()?);
        while self.peek_token_is(&Token::COMMA) {
            self.next_token(); // self.cur <- COMMA
            self.next_token();
            parameters.push(self.parse_parameter()?);
        }
        self.expect_peek(&Token::RPAREN)?; // )
        self.next_token();
        Ok(parameters)
    }
    fn parse_parameter(&mut self) -> Result<String> {
        match &self.cur {
            Token::IDENT(literal) => Ok(literal.to_string()),
            token => {
                bail!(
                    "expected next token to be IDENT, got {} instead",
                    token.type_name()
                )
            }
        }
    }
    fn parse_block_statement(&mut self) -> Result<Statement> {
        self.next_token();
        let mut statements = Vec::new();
        while !self.cur_token_is(&Token::RBRACE) && !self.cur_token_is(&Token::EOF) {
            let stmt = self.parse_statement()?;
            statements.push(stmt);
            self.next_token();
        }
        Ok(Statement::BlockStatement(statements))
    }
    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression> {
        let arguments = self.parse_expression_list(&Token::RPAREN)?;
        Ok(Expression::CallExpression {
            function: Box::new(function),
            arguments,
        })
    }
    fn parse_array_literal(&mut self) -> Result<Expression> {
        let elements = self.parse_expression_list(&Token::RBRACKET)?;
        Ok(Expression::ArrayLiteral(elements))
    }
    fn parse_expression_list(&mut self, end: &Token) -> Result<Vec<Expression>> {
        let mut list = Vec::new();
        if self.peek_token_is(end) {
            self.next_token();
            return Ok(list);
        }
        self.next_token();
        list.push(self.parse_expression(Precedence::LOWEST)?);
        while self.peek_token_is(&Token::COMMA) {
            self.next_token(); // self.cur <- COMMA
            self.next_token();
            list.push(self.parse_expression(Precedence::LOWEST)?);
        }
        self.expect_peek(end)?;
        self.next_token();
        Ok(list)
    }
    fn parse_index_expression(&mut self, left: Expression) -> Result<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::LOWEST)?;
        self.expect_peek(&Token::RBRACKET)?; // ]
        self.next_token();
        Ok(Expression::IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
        })
    }
}
