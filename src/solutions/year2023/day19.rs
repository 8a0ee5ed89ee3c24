use anyhow::{bail, Context, Result};
use rustc_hash::FxHashMap;

use crate::{numbers_in, range::Interval, Answer, PuzzleInput};

#[derive(Debug, Clone, Copy)]
enum Comparison {
    Less,
    Greater,
}

#[derive(Debug)]
struct Rule<'a> {
    condition: Option<(usize, Comparison, i64)>,
    target: &'a str,
}

type Workflows<'a> = FxHashMap<&'a str, Vec<Rule<'a>>>;

fn category(name: &str) -> Result<usize> {
    Ok(match name {
        "x" => 0,
        "m" => 1,
        "a" => 2,
        "s" => 3,
        _ => bail!("unknown category {name:?}"),
    })
}

fn parse_rule(rule: &str) -> Result<Rule<'_>> {
    let Some((condition, target)) = rule.split_once(':') else {
        return Ok(Rule {
            condition: None,
            target: rule,
        });
    };
    let (split, comparison) = match condition.find(['<', '>']) {
        Some(i) if condition.as_bytes()[i] == b'<' => (i, Comparison::Less),
        Some(i) => (i, Comparison::Greater),
        None => bail!("invalid condition {condition:?}"),
    };
    Ok(Rule {
        condition: Some((
            category(&condition[..split])?,
            comparison,
            condition[split + 1..].parse()?,
        )),
        target,
    })
}

fn parse(input: &PuzzleInput) -> Result<(Workflows<'_>, Vec<[i64; 4]>)> {
    let groups = input.groups();
    let [workflows, parts] = groups.as_slice() else {
        bail!("expected workflows and parts");
    };
    let workflows = workflows
        .iter()
        .map(|line| {
            let (name, rules) = line
                .strip_suffix('}')
                .and_then(|line| line.split_once('{'))
                .with_context(|| format!("invalid workflow {line:?}"))?;
            let rules = rules.split(',').map(parse_rule).collect::<Result<Vec<_>>>()?;
            Ok((name, rules))
        })
        .collect::<Result<_>>()?;
    let parts = parts
        .iter()
        .map(|line| {
            <[i64; 4]>::try_from(numbers_in(line)?)
                .map_err(|_| anyhow::anyhow!("invalid part {line:?}"))
        })
        .collect::<Result<_>>()?;
    Ok((workflows, parts))
}

fn accepted(workflows: &Workflows, part: &[i64; 4]) -> Result<bool> {
    let mut name = "in";
    loop {
        match name {
            "A" => return Ok(true),
            "R" => return Ok(false),
            _ => {}
        }
        let rules = workflows.get(name).with_context(|| format!("unknown workflow {name}"))?;
        let rule = rules
            .iter()
            .find(|rule| match rule.condition {
                None => true,
                Some((i, Comparison::Less, value)) => part[i] < value,
                Some((i, Comparison::Greater, value)) => part[i] > value,
            })
            .with_context(|| format!("workflow {name} has no matching rule"))?;
        name = rule.target;
    }
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (workflows, parts) = parse(input)?;
    let mut total = 0;
    for part in &parts {
        if accepted(&workflows, part)? {
            total += part.iter().sum::<i64>();
        }
    }
    Ok(total.into())
}

/// Number of rating combinations within `ratings` that end up accepted from workflow `name`.
fn combinations(workflows: &Workflows, name: &str, mut ratings: [Interval; 4]) -> Result<i64> {
    match name {
        "A" => return Ok(ratings.iter().map(Interval::size).product()),
        "R" => return Ok(0),
        _ => {}
    }
    let rules = workflows.get(name).with_context(|| format!("unknown workflow {name}"))?;
    let mut total = 0;
    for rule in rules {
        let Some((i, comparison, value)) = rule.condition else {
            return Ok(total + combinations(workflows, rule.target, ratings)?);
        };
        let (matching, rest) = match comparison {
            Comparison::Less => ratings[i].split_at(value),
            Comparison::Greater => {
                let (rest, matching) = ratings[i].split_at(value + 1);
                (matching, rest)
            }
        };
        if let Some(matching) = matching {
            let mut branch = ratings;
            branch[i] = matching;
            total += combinations(workflows, rule.target, branch)?;
        }
        let Some(rest) = rest else {
            return Ok(total);
        };
        ratings[i] = rest;
    }
    Ok(total)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (workflows, _) = parse(input)?;
    let all = Interval::inclusive(1, 4000);
    Ok(combinations(&workflows, "in", [all; 4])?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        px{a<2006:qkq,m>2090:A,rfg}
        pv{a>1716:R,A}
        lnx{m>1548:A,A}
        rfg{s<537:gd,x>2440:R,A}
        qs{s>3448:A,lnx}
        qkq{x<1416:A,crn}
        crn{x>2662:A,R}
        in{s<1351:px,qqz}
        qqz{s>2770:qs,m<1801:hdj,R}
        gd{a>3333:R,R}
        hdj{m>838:A,pv}

        {x=787,m=2655,a=1222,s=2876}
        {x=1679,m=44,a=2067,s=496}
        {x=2036,m=264,a=79,s=2244}
        {x=2461,m=1339,a=466,s=291}
        {x=2127,m=1623,a=2188,s=1013}
    "};

    #[test]
    fn test_day19() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(19114));
        assert_eq!(part_b(&input)?, Answer::from(167409079868000_i64));
        Ok(())
    }
}
