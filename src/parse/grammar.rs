use winnow::ascii::{digit1, till_line_ending};
use winnow::combinator::{alt, cut_err, delimited, opt, repeat, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Operator, Rule, RuleType, RuleValue};

use super::parser::ParsedRuleSet;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

fn expected(what: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(what))
}

// -- Identifiers ------------------------------------------------------------

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word_char).parse_next(input)
}

fn tag<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_lowercase() || c == '_').parse_next(input)
}

fn rule_type(input: &mut &str) -> ModalResult<RuleType> {
    tag.try_map(str::parse::<RuleType>)
        .context(expected("rule type"))
        .parse_next(input)
}

fn operator(input: &mut &str) -> ModalResult<Operator> {
    tag.try_map(str::parse::<Operator>)
        .context(expected("operator"))
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        match any.parse_next(input)? {
            '"' => return Ok(s),
            '\\' => match any.parse_next(input)? {
                '"' => s.push('"'),
                '\\' => s.push('\\'),
                other => {
                    s.push('\\');
                    s.push(other);
                }
            },
            c => s.push(c),
        }
    }
}

fn item(input: &mut &str) -> ModalResult<String> {
    alt((string_literal, word.map(str::to_owned))).parse_next(input)
}

fn item_list(input: &mut &str) -> ModalResult<RuleValue> {
    '['.parse_next(input)?;
    let items: Vec<String> = separated(0.., delimited(ws, item, ws), ',').parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(']')
        .context(expected("']'"))
        .parse_next(input)?;
    Ok(RuleValue::Items(items))
}

fn number(input: &mut &str) -> ModalResult<f64> {
    (opt('-'), digit1, opt(('.', digit1)))
        .take()
        .try_map(str::parse::<f64>)
        .context(expected("number"))
        .parse_next(input)
}

fn number_pair(input: &mut &str) -> ModalResult<RuleValue> {
    '('.parse_next(input)?;
    let (low, high) = cut_err((
        delimited(ws, number, ws),
        ',',
        delimited(ws, number, ws),
        ')',
    ))
    .map(|(low, _, high, _)| (low, high))
    .parse_next(input)?;
    Ok(RuleValue::Range(low, high))
}

fn value(input: &mut &str) -> ModalResult<RuleValue> {
    alt((item_list, number_pair, number.map(RuleValue::Amount))).parse_next(input)
}

// -- Rule definitions -------------------------------------------------------

fn rule_def(input: &mut &str) -> ModalResult<Rule> {
    ws.parse_next(input)?;
    ("rule", take_while(1.., |c: char| c.is_ascii_whitespace())).parse_next(input)?;
    ws.parse_next(input)?;

    let id = cut_err(word)
        .context(expected("rule id"))
        .parse_next(input)?;

    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;
    ws.parse_next(input)?;

    let rule_type = cut_err(rule_type).parse_next(input)?;
    ws.parse_next(input)?;
    let operator = cut_err(operator).parse_next(input)?;
    ws.parse_next(input)?;
    let value = opt(value).parse_next(input)?.unwrap_or(RuleValue::Empty);

    Ok(Rule::new(id, rule_type, operator, value))
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_ruleset(input: &mut &str) -> ModalResult<ParsedRuleSet> {
    let rules: Vec<Rule> = repeat(0.., rule_def).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(ParsedRuleSet { rules })
}
