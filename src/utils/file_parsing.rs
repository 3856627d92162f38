/// `"0"` maps to 0; any other token maps to 1.
#[inline]
pub fn parse_binary_token(token: &str) -> u8 {
    if token.trim() == "0" { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_tokens() {
        assert_eq!(parse_binary_token("0"), 0);
        assert_eq!(parse_binary_token(" 0 "), 0);
        assert_eq!(parse_binary_token("1"), 1);
        assert_eq!(parse_binary_token("00"), 1);
        assert_eq!(parse_binary_token(""), 1);
    }
}
