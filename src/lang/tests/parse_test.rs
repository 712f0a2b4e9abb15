use super::*;

fn parse(s: &str) -> SyntaxElement {
    Parser::new().parse_str(s).unwrap()
}

#[test]
fn test_precedence() {
    let answer = Expression::binary(
        Operator::Plus,
        num(3.0),
        Expression::binary(Operator::Multiply, num(4.0), num(2.0)),
    );
    assert_eq!(parse("3+4*2"), SyntaxElement::Expression(answer));
}

#[test]
fn test_grouping() {
    let answer = Expression::binary(
        Operator::Multiply,
        Expression::Group(Box::new(Expression::binary(
            Operator::Plus,
            num(3.0),
            num(4.0),
        ))),
        num(2.0),
    );
    assert_eq!(parse("(3 + 4) * 2"), SyntaxElement::Expression(answer));
}

#[test]
fn test_comparison_below_arithmetic() {
    let answer = Expression::binary(
        Operator::Greater,
        num(5.0),
        Expression::binary(Operator::Minus, num(3.0), num(1.0)),
    );
    assert_eq!(parse("5 > 3 - 1"), SyntaxElement::Expression(answer));
}

#[test]
fn test_left_associative() {
    let answer = Expression::binary(
        Operator::Minus,
        Expression::binary(Operator::Minus, num(9.0), num(3.0)),
        num(1.0),
    );
    assert_eq!(parse("9-3-1"), SyntaxElement::Expression(answer));
}

#[test]
fn test_unary() {
    let answer = Expression::Negation(Box::new(double("X")));
    assert_eq!(parse("-X"), SyntaxElement::Expression(answer));
    let answer = Expression::Not(Box::new(Expression::Boolean(true)));
    assert_eq!(parse("NOT true"), SyntaxElement::Expression(answer));
}

#[test]
fn test_array_reference() {
    let answer = Expression::Array(Ident::Integer("A#".into()), vec![num(1.0), num(2.0)]);
    assert_eq!(parse("A#(1, 2)"), SyntaxElement::Expression(answer));
    let answer = Expression::Array(Ident::Double("B".into()), vec![double("I")]);
    assert_eq!(parse("B(I)"), SyntaxElement::Expression(answer));
}

#[test]
fn test_print_items() {
    let tokens = tokenize("PRINT A$; B$").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::CommandName,
            TokenKind::StringVariable,
            TokenKind::Semicolon,
            TokenKind::StringVariable
        ]
    );
    let mut parser = Parser::new();
    assert_eq!(
        parser.parse(tokens[1..].to_vec()).unwrap(),
        SyntaxElement::Expression(string_var("A$"))
    );
    assert_eq!(
        parser.continue_parsing().unwrap(),
        Some(SyntaxElement::LineConcat)
    );
    assert_eq!(
        parser.continue_parsing().unwrap(),
        Some(SyntaxElement::Expression(string_var("B$")))
    );
    assert_eq!(parser.continue_parsing().unwrap(), None);
}

#[test]
fn test_for_clauses() {
    let mut parser = Parser::new();
    let first = parser.parse_str("I = 1 TO N + 1 STEP 2").unwrap();
    assert_eq!(
        first,
        SyntaxElement::Expression(Expression::binary(Operator::Equal, double("I"), num(1.0)))
    );
    assert_eq!(
        parser.continue_parsing().unwrap(),
        Some(SyntaxElement::To(Expression::binary(
            Operator::Plus,
            double("N"),
            num(1.0)
        )))
    );
    assert_eq!(
        parser.continue_parsing().unwrap(),
        Some(SyntaxElement::Step(num(2.0)))
    );
    assert!(parser.is_at_end());
}

#[test]
fn test_then_command() {
    let mut parser = Parser::new();
    parser.parse_fragments(&["X", ">", "1", "then", "print", "X"]).unwrap();
    assert_eq!(parser.continue_parsing().unwrap(), Some(SyntaxElement::Then));
    assert_eq!(
        parser.continue_parsing().unwrap(),
        Some(SyntaxElement::Command(vec![
            "print".to_string(),
            "X".to_string()
        ]))
    );
}

#[test]
fn test_bare_keyword() {
    let mut parser = Parser::new();
    assert_eq!(
        parser.parse_str("step").unwrap(),
        SyntaxElement::Keyword("step".into())
    );
}

#[test]
fn test_missing_parenthesis() {
    let e = Parser::new().parse_str("(3 + 4").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR; EXPECTED CLOSING PARENTHESIS");
    assert_eq!(e.category(), Category::Parse);
}

#[test]
fn test_unexpected_token() {
    let e = Parser::new().parse_str("?").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR; UNEXPECTED TOKEN ?");
    let e = Parser::new().parse_str("3 +").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR; UNEXPECTED END OF STATEMENT");
}

#[test]
fn test_marker_is_not_an_operand() {
    let e = Parser::new().parse_str("3 + then").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR; EXPECTED EXPRESSION AFTER +");
}
