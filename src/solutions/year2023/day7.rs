use anyhow::{bail, Context, Result};

use crate::{Answer, PuzzleInput};

const CARDS: &[u8] = b"23456789TJQKA";
const CARDS_WITH_JOKERS: &[u8] = b"J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    fn of(cards: &[u8; 5], jokers: bool) -> Self {
        let mut counts = [0u8; 13];
        let mut joker_count = 0;
        for &card in cards {
            if jokers && card == 0 {
                joker_count += 1;
            } else {
                counts[card as usize] += 1;
            }
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        // Jokers always do best joining the largest group.
        match (counts[0] + joker_count, counts[1]) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

/// Sort key: type first, then the card strengths in order.
fn hand_key(hand: &str, jokers: bool) -> Result<(HandType, [u8; 5])> {
    let order = if jokers { CARDS_WITH_JOKERS } else { CARDS };
    let mut cards = [0u8; 5];
    if hand.len() != cards.len() {
        bail!("hand {hand:?} does not have five cards");
    }
    for (slot, b) in cards.iter_mut().zip(hand.bytes()) {
        *slot = order
            .iter()
            .position(|&card| card == b)
            .with_context(|| format!("unknown card {:?}", b as char))? as u8;
    }
    Ok((HandType::of(&cards, jokers), cards))
}

fn winnings(input: &PuzzleInput, jokers: bool) -> Result<Answer> {
    let mut hands = input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (hand, bid) = line
                .split_once(' ')
                .with_context(|| format!("invalid hand {line:?}"))?;
            Ok((hand_key(hand, jokers)?, bid.parse::<u64>()?))
        })
        .collect::<Result<Vec<_>>>()?;
    hands.sort_unstable();
    let total: u64 = hands
        .iter()
        .enumerate()
        .map(|(rank, (_, bid))| (rank as u64 + 1) * bid)
        .sum();
    Ok(total.into())
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    winnings(input, false)
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    winnings(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        32T3K 765
        T55J5 684
        KK677 28
        KTJJT 220
        QQQJA 483
    "};

    #[test]
    fn test_day7() -> Result<()> {
        let input = PuzzleInput::example(EXAMPLE);
        assert_eq!(part_a(&input)?, Answer::from(6440));
        assert_eq!(part_b(&input)?, Answer::from(5905));
        Ok(())
    }

    #[test]
    fn test_hand_type() -> Result<()> {
        assert_eq!(hand_key("JJJJJ", true)?.0, HandType::FiveOfAKind);
        assert_eq!(hand_key("2233J", true)?.0, HandType::FullHouse);
        assert_eq!(hand_key("2233J", false)?.0, HandType::TwoPair);
        Ok(())
    }
}
