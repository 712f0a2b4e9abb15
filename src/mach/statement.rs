use super::eval::evaluate_index;
use super::runtime::State;
use super::{Event, Operation, Runtime, Val};
use crate::error;
use crate::lang::ast::{Expression, Ident, SyntaxElement};
use crate::lang::token::Operator;
use crate::lang::{Error, Parser};
use log::debug;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement handlers
///
/// Each handler gets the words after its verb. One `Parser` session
/// walks the clauses of one statement and is dropped with it.

impl Runtime {
    pub(super) fn r#clear(&mut self) -> Result<()> {
        debug!("clear variables");
        self.var.clear();
        Ok(())
    }

    pub(super) fn r#cls(&mut self) -> Result<()> {
        self.events.push_back(Event::Cls);
        Ok(())
    }

    pub(super) fn r#delete(&mut self, args: &[String]) -> Result<()> {
        for number in self.line_numbers(args)? {
            if !self.listing.remove_line(number) {
                return Err(error!(UndefinedLine; &number.to_string()));
            }
        }
        Ok(())
    }

    pub(super) fn r#dim(&mut self, args: &[String]) -> Result<()> {
        let arrays = match Parser::new().parse_fragments(args)? {
            SyntaxElement::Expression(Expression::List(v)) => v,
            SyntaxElement::Expression(expr) => vec![expr],
            _ => return Err(error!(SyntaxError; "EXPECTED ARRAY")),
        };
        for array in arrays {
            match array {
                Expression::Array(ident, dims) => {
                    let dims = evaluate_index(&dims, &self.var)?;
                    debug!("dim {} {:?}", ident, dims);
                    self.var.dimension(&ident, dims)?;
                }
                _ => return Err(error!(SyntaxError; "EXPECTED ARRAY")),
            }
        }
        Ok(())
    }

    pub(super) fn r#end(&mut self) -> Result<()> {
        self.listing.end();
        Ok(())
    }

    pub(super) fn r#exit(&mut self) -> Result<()> {
        self.events.push_back(Event::Exit);
        Ok(())
    }

    pub(super) fn r#for(&mut self, args: &[String]) -> Result<()> {
        self.require_program()?;
        let mut parser = Parser::new();
        let (target, start) = match parser.parse_fragments(args)? {
            SyntaxElement::Expression(Expression::Binary(Operator::Equal, target, start)) => {
                (*target, *start)
            }
            _ => return Err(error!(SyntaxError; "EXPECTED ASSIGNMENT")),
        };
        let ident = match target {
            Expression::Var(ident @ Ident::Double(_))
            | Expression::Var(ident @ Ident::Integer(_)) => ident,
            _ => return Err(error!(SyntaxError; "EXPECTED NUMERIC VARIABLE")),
        };
        let limit = match parser.continue_parsing()? {
            Some(SyntaxElement::To(expr)) => expr,
            _ => return Err(error!(SyntaxError; "EXPECTED TO")),
        };
        let step = match parser.continue_parsing()? {
            Some(SyntaxElement::Step(expr)) => Some(expr),
            None => None,
            _ => return Err(error!(SyntaxError; "EXPECTED STEP")),
        };
        let name = ident.name().clone();
        if !self.listing.take_for_loop_resume(&name) {
            let value = start.evaluate(&self.var)?.coerce_to(&ident)?;
            self.var.set(&ident, value)?;
            if !self.listing.enter_for_loop(&name) {
                return Err(error!(IllegalDirect));
            }
            return Ok(());
        }
        let step = match step {
            Some(expr) => expr.evaluate(&self.var)?,
            None => Val::Integer(1),
        };
        let limit = f64::try_from(limit.evaluate(&self.var)?)?;
        let step_f64 = f64::try_from(step.clone())?;
        let value = Operation::binary(Operator::Plus, self.var.get(&ident)?, step)?;
        let value = value.coerce_to(&ident)?;
        let value_f64 = f64::try_from(value.clone())?;
        self.var.set(&ident, value)?;
        if (step_f64 > 0.0 && value_f64 > limit) || (step_f64 < 0.0 && value_f64 < limit) {
            self.listing.exit_for_loop(&name);
        }
        Ok(())
    }

    pub(super) fn r#gosub(&mut self, args: &[String]) -> Result<()> {
        self.require_program()?;
        let number = self.line_number(args)?;
        self.listing.gosub(number)
    }

    pub(super) fn r#goto(&mut self, args: &[String]) -> Result<()> {
        let number = self.line_number(args)?;
        if self.is_running() {
            return self.listing.goto(number);
        }
        self.start();
        if let Err(error) = self.listing.goto(number) {
            self.stop();
            return Err(error);
        }
        Ok(())
    }

    pub(super) fn r#if(&mut self, args: &[String]) -> Result<()> {
        let mut parser = Parser::new();
        let condition = match parser.parse_fragments(args)? {
            SyntaxElement::Expression(expr) => expr,
            _ => return Err(error!(SyntaxError; "EXPECTED CONDITION")),
        };
        match parser.continue_parsing()? {
            Some(SyntaxElement::Then) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED THEN")),
        }
        let action = parser.continue_parsing()?;
        if !condition.evaluate(&self.var)?.is_true()? {
            return Ok(());
        }
        match action {
            Some(SyntaxElement::Command(words)) => self.statement(&words),
            Some(SyntaxElement::Expression(Expression::Number(n))) => {
                let number = to_line_number(Val::Double(n))?;
                if self.is_running() {
                    self.listing.goto(number)
                } else {
                    self.r#goto(&[n.to_string()])
                }
            }
            Some(SyntaxElement::Expression(Expression::Binary(Operator::Equal, target, value))) => {
                let value = value.evaluate(&self.var)?;
                self.assign(&target, value)
            }
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT AFTER THEN")),
        }
    }

    pub(super) fn r#input(&mut self, args: &[String]) -> Result<()> {
        let mut parser = Parser::new();
        let mut element = parser.parse_fragments(args)?;
        if let SyntaxElement::Expression(prompt @ Expression::String(_)) = &element {
            let mut prompt = prompt.evaluate(&self.var)?.to_string();
            element = match parser.continue_parsing()? {
                Some(SyntaxElement::LineConcat) => parser.continue_parsing()?,
                Some(element) => {
                    prompt.push('\n');
                    Some(element)
                }
                None => None,
            }
            .ok_or_else(|| error!(SyntaxError; "EXPECTED VARIABLE"))?;
            self.events.push_back(Event::Print(prompt));
        }
        let target = match element {
            SyntaxElement::Expression(expr) if expr.target().is_some() => expr,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        if !parser.is_at_end() {
            return Err(error!(SyntaxError; "UNEXPECTED TEXT AFTER VARIABLE"));
        }
        let running = self.is_running();
        self.state = State::Input { target, running };
        Ok(())
    }

    pub(super) fn r#let(&mut self, args: &[String]) -> Result<()> {
        let mut parser = Parser::new();
        let (target, value) = match parser.parse_fragments(args)? {
            SyntaxElement::Expression(Expression::Binary(Operator::Equal, target, value)) => {
                (target, value)
            }
            _ => return Err(error!(SyntaxError; "EXPECTED ASSIGNMENT")),
        };
        if !parser.is_at_end() {
            return Err(error!(SyntaxError; "EXPECTED END OF STATEMENT"));
        }
        let value = value.evaluate(&self.var)?;
        self.assign(&target, value)
    }

    pub(super) fn r#list(&mut self, args: &[String]) -> Result<()> {
        if args.is_empty() {
            for line in self.listing.lines() {
                self.events.push_back(Event::List(line.to_string()));
            }
            return Ok(());
        }
        for number in self.line_numbers(args)? {
            match self.listing.get_line(number) {
                Some(line) => self.events.push_back(Event::List(line)),
                None => return Err(error!(UndefinedLine; &number.to_string())),
            }
        }
        Ok(())
    }

    pub(super) fn r#load(&mut self, args: &[String]) -> Result<()> {
        let filename = self.filename(args)?;
        self.stop();
        self.events.push_back(Event::Load(filename));
        Ok(())
    }

    pub(super) fn r#new_program(&mut self) -> Result<()> {
        self.stop();
        self.listing.clear();
        Ok(())
    }

    pub(super) fn r#next(&mut self, args: &[String]) -> Result<()> {
        let ident = match Parser::new().parse_fragments(args)? {
            SyntaxElement::Expression(Expression::Var(ident)) => ident,
            _ => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        if !self.listing.continue_for_loop(ident.name()) {
            return Err(error!(NextWithoutFor; &ident.to_string()));
        }
        Ok(())
    }

    pub(super) fn r#print(&mut self, args: &[String]) -> Result<()> {
        let mut s = String::new();
        let mut newline = true;
        let mut parser = Parser::new();
        let mut element = match args.is_empty() {
            true => None,
            false => Some(parser.parse_fragments(args)?),
        };
        while let Some(item) = element {
            match item {
                SyntaxElement::Expression(expr) => {
                    s.push_str(&expr.evaluate(&self.var)?.to_string());
                    newline = true;
                }
                SyntaxElement::LineConcat => newline = false,
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            }
            element = parser.continue_parsing()?;
        }
        if newline {
            s.push('\n');
        }
        self.events.push_back(Event::Print(s));
        Ok(())
    }

    pub(super) fn r#return(&mut self) -> Result<()> {
        self.require_program()?;
        self.listing.return_from_gosub()
    }

    pub(super) fn r#run(&mut self, args: &[String]) -> Result<()> {
        if args.is_empty() {
            self.start();
            return Ok(());
        }
        let filename = self.filename(args)?;
        self.run_after_load = true;
        self.events.push_back(Event::Load(filename));
        Ok(())
    }

    pub(super) fn r#save(&mut self, args: &[String]) -> Result<()> {
        let filename = self.filename(args)?;
        self.events.push_back(Event::Save(filename));
        Ok(())
    }

    /// Store into a scalar or an array element, converting to the
    /// target's kind first so a failed conversion changes nothing.
    fn assign(&mut self, target: &Expression, value: Val) -> Result<()> {
        match target.target() {
            Some((ident, None)) => {
                let value = value.coerce_to(ident)?;
                self.var.set(ident, value)
            }
            Some((ident, Some(indices))) => {
                let index = evaluate_index(indices, &self.var)?;
                let value = value.coerce_to(ident)?;
                self.var.store_element(ident, &index, value)
            }
            None => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    pub(super) fn assign_input(&mut self, target: &Expression, text: &str) -> Result<()> {
        let ident = match target.target() {
            Some((ident, _)) => ident,
            None => return Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        };
        let value = Val::from_input(text, ident)?;
        self.assign(target, value)
    }

    fn require_program(&self) -> Result<()> {
        if self.is_running() {
            Ok(())
        } else {
            Err(error!(IllegalDirect))
        }
    }

    fn line_number(&self, args: &[String]) -> Result<u32> {
        let mut parser = Parser::new();
        let number = match parser.parse_fragments(args)? {
            SyntaxElement::Expression(expr) => to_line_number(expr.evaluate(&self.var)?)?,
            _ => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        };
        if !parser.is_at_end() {
            return Err(error!(SyntaxError; "EXPECTED END OF STATEMENT"));
        }
        Ok(number)
    }

    fn line_numbers(&self, args: &[String]) -> Result<Vec<u32>> {
        let mut numbers = vec![];
        let mut parser = Parser::new();
        let mut element = Some(parser.parse_fragments(args)?);
        while let Some(item) = element {
            match item {
                SyntaxElement::Expression(expr) => match expr.evaluate(&self.var)? {
                    Val::List(v) => {
                        for val in v {
                            numbers.push(to_line_number(val)?);
                        }
                    }
                    val => numbers.push(to_line_number(val)?),
                },
                _ => return Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
            }
            element = parser.continue_parsing()?;
        }
        Ok(numbers)
    }

    fn filename(&self, args: &[String]) -> Result<String> {
        if args.is_empty() {
            return Err(error!(BadFileName; "FILE NAME REQUIRED"));
        }
        match Parser::new().parse_fragments(args)? {
            SyntaxElement::Expression(expr) => match expr.evaluate(&self.var)? {
                Val::String(s) if !s.is_empty() => Ok(s.to_string()),
                _ => Err(error!(BadFileName)),
            },
            _ => Err(error!(BadFileName)),
        }
    }
}

fn to_line_number(val: Val) -> Result<u32> {
    let n = f64::try_from(val)?;
    if n.fract() != 0.0 || n < 0.0 || n > u32::max_value() as f64 {
        return Err(error!(UndefinedLine; &n.to_string()));
    }
    Ok(n as u32)
}
