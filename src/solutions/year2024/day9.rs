use anyhow::{bail, Result};

use crate::{Answer, PuzzleInput};

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// File spans (indexed by file id) and the free spans between them.
fn parse(input: &PuzzleInput) -> Result<(Vec<Span>, Vec<Span>)> {
    let mut files = Vec::new();
    let mut free = Vec::new();
    let mut position = 0;
    for (i, b) in input.single_line()?.bytes().enumerate() {
        if !b.is_ascii_digit() {
            bail!("invalid disk map digit {:?}", b as char);
        }
        let span = Span {
            start: position,
            len: (b - b'0') as usize,
        };
        position += span.len;
        if i % 2 == 0 {
            files.push(span);
        } else {
            free.push(span);
        }
    }
    Ok((files, free))
}

fn checksum(files: &[Span]) -> usize {
    files
        .iter()
        .enumerate()
        .map(|(id, span)| (span.start..span.start + span.len).sum::<usize>() * id)
        .sum()
}

pub fn part_a(input: &PuzzleInput) -> Result<Answer> {
    let (files, _) = parse(input)?;
    let size = files.last().map_or(0, |span| span.start + span.len);
    let mut blocks: Vec<Option<usize>> = vec![None; size];
    for (id, span) in files.iter().enumerate() {
        blocks[span.start..span.start + span.len].fill(Some(id));
    }

    let (mut left, mut right) = (0, blocks.len());
    while left < right {
        if blocks[left].is_some() {
            left += 1;
        } else if blocks[right - 1].is_none() {
            right -= 1;
        } else {
            blocks.swap(left, right - 1);
        }
    }

    let sum: usize = blocks
        .iter()
        .enumerate()
        .filter_map(|(position, id)| id.map(|id| id * position))
        .sum();
    Ok(sum.into())
}

pub fn part_b(input: &PuzzleInput) -> Result<Answer> {
    let (mut files, mut free) = parse(input)?;
    for file in files.iter_mut().rev() {
        let target = free
            .iter_mut()
            .take_while(|span| span.start < file.start)
            .find(|span| span.len >= file.len);
        if let Some(span) = target {
            file.start = span.start;
            span.start += file.len;
            span.len -= file.len;
        }
    }
    Ok(checksum(&files).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day9() -> Result<()> {
        let input = PuzzleInput::example("2333133121414131402\n");
        assert_eq!(part_a(&input)?, Answer::from(1928));
        assert_eq!(part_b(&input)?, Answer::from(2858));
        Ok(())
    }
}
