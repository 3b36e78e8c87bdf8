//! Flattening of a client's phone list into the single text column it is
//! stored in.
//!
//! Phones are joined with a bare `,` and split back on `,`, trimming each
//! piece. There is no escaping: a phone number that itself contains a comma
//! comes back as two numbers.

const SEPARATOR: char = ',';

/// Joins `phones` into their stored form.
pub fn encode<S: AsRef<str>>(phones: &[S]) -> String {
    phones
        .iter()
        .map(|phone| phone.as_ref())
        .collect::<Vec<&str>>()
        .join(",")
}

/// Splits a stored (or typed) phone string back into a list.
///
/// Every piece is trimmed. Empty or whitespace-only input is an empty list.
pub fn decode(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(SEPARATOR)
        .map(|piece| piece.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_with_bare_comma() {
        assert_eq!(encode(&["555-1", "555-2", "555-3"]), "555-1,555-2,555-3");
        assert_eq!(encode(&["only"]), "only");
    }

    #[test]
    fn decode_trims_each_piece() {
        assert_eq!(decode(" 555-1 ,555-2,  555-3"), vec!["555-1", "555-2", "555-3"]);
    }

    #[test]
    fn decode_of_encode_returns_trimmed_list() {
        let phones = vec![" 300 123".to_string(), "301\t".to_string(), "302".to_string()];
        let trimmed: Vec<String> = phones.iter().map(|p| p.trim().to_string()).collect();
        assert_eq!(decode(&encode(&phones)), trimmed);
    }

    #[test]
    fn empty_list_survives_the_round_trip() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(encode(&empty), "");
        assert!(decode("").is_empty());
    }

    #[test]
    fn whitespace_only_input_is_an_empty_list() {
        assert!(decode(" ").is_empty());
        assert!(decode(" \t ").is_empty());
        // Blank pieces next to a separator are still kept.
        assert_eq!(decode(" , "), vec!["", ""]);
    }

    #[test]
    fn embedded_comma_splits_the_number() {
        let phones = ["555,1"];
        assert_eq!(decode(&encode(&phones)), vec!["555", "1"]);
    }

    #[test]
    fn blank_pieces_are_kept() {
        assert_eq!(decode("1,,2"), vec!["1", "", "2"]);
    }
}
