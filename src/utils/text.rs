/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("dance"), "Dance");
        assert_eq!(capitalize("carbon_fiber"), "Carbon_fiber");
        assert_eq!(capitalize("DARK BLUE"), "Dark blue");
        assert_eq!(capitalize(""), "");
    }
}
