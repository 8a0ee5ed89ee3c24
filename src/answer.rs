use std::fmt::{self, Display};

/// What a solver prints: almost always a number, occasionally a string such as a password or a
/// list of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Number(i128),
    Text(String),
}

impl Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! answer_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    Answer::Number(value as i128)
                }
            }
        )*
    };
}

answer_from_int!(i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Answer::from(42u64).to_string(), "42");
        assert_eq!(Answer::from(-7i64).to_string(), "-7");
        assert_eq!(Answer::from("2=-1=0").to_string(), "2=-1=0");
    }
}
