pub mod answer;
pub mod direction;
pub mod error;
pub mod graph;
pub mod grid;
pub mod input;
pub mod logging;
pub mod range;
pub mod registry;
pub mod solutions;

pub use answer::Answer;
pub use error::AdventError;
pub use input::PuzzleInput;
pub use registry::{Registry, Solver, SolverKey};

/// Result is only correct if bytes represents a valid positive number without any additional
/// characters!
pub fn parse_usize_from_bytes(bytes: &[u8]) -> usize {
    let mut ret = 0;
    for b in bytes {
        ret = ret * 10 + (b - b'0') as usize;
    }
    ret
}

/// Parses every (optionally negative) integer embedded in `line`, ignoring everything else.
pub fn numbers_in(line: &str) -> anyhow::Result<Vec<i64>> {
    let mut numbers = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = if i > 0 && bytes[i - 1] == b'-' { i - 1 } else { i };
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let value = line[start..i]
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("number {:?} out of range", &line[start..i]))?;
            numbers.push(value);
        } else {
            i += 1;
        }
    }
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_in() -> anyhow::Result<()> {
        assert_eq!(numbers_in("p=0,4 v=3,-3")?, vec![0, 4, 3, -3]);
        assert_eq!(numbers_in("Button A: X+94, Y+34")?, vec![94, 34]);
        assert_eq!(numbers_in("no digits")?, Vec::<i64>::new());
        assert_eq!(numbers_in("-9223372036854775808")?, vec![i64::MIN]);
        assert_eq!(parse_usize_from_bytes(b"1024"), 1024);
        Ok(())
    }

    #[test]
    fn test_numbers_in_overflow() {
        assert!(numbers_in("x=9223372036854775808").is_err());
        assert!(numbers_in("1,99999999999999999999999").is_err());
    }
}
