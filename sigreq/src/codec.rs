use crate::FormatError;
use std::convert::TryInto;

/// Field delimiter of the wire format: a blank line.
pub const DELIMITER: &str = "\n\n";

/// Number of fields in an encoded signature request.
pub const FIELD_COUNT: usize = 5;

/// Split a raw request into its five fields, in wire order:
/// election id, request id, public key, ballot, signature.
///
/// No field content is interpreted here.
pub fn split_fields(raw: &[u8]) -> Result<[&str; FIELD_COUNT], FormatError> {
    let text = std::str::from_utf8(raw)?;
    let parts: Vec<&str> = text.split(DELIMITER).collect();

    parts
        .try_into()
        .map_err(|parts: Vec<&str>| FormatError::WrongFieldCount(parts.len()))
}

/// Join fields with the delimiter. Inverse of `split_fields` for five fields,
/// and used with four fields to build signing transcripts.
pub fn join_fields(fields: &[&str]) -> String {
    fields.join(DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn split_five() {
        let fields = split_fields(b"E1\n\nabc\n\nkey\n\nbXl2b3Rl\n\nsig").unwrap();
        assert_eq!(fields, ["E1", "abc", "key", "bXl2b3Rl", "sig"]);
    }

    #[test]
    fn wrong_field_count() {
        match split_fields(b"a\n\nb\n\nc\n\nd") {
            Err(FormatError::WrongFieldCount(4)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match split_fields(b"a\n\nb\n\nc\n\nd\n\ne\n\nf") {
            Err(FormatError::WrongFieldCount(6)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match split_fields(b"") {
            Err(FormatError::WrongFieldCount(1)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn single_newlines_stay_inside_fields() {
        let fields = split_fields(b"a\nb\n\nc\n\nd\n\ne\n\nf").unwrap();
        assert_eq!(fields[0], "a\nb");
    }

    #[test]
    fn rejects_non_utf8() {
        match split_fields(b"\xff\n\nb\n\nc\n\nd\n\ne") {
            Err(FormatError::NotUtf8(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn split_inverts_join(fields in proptest::array::uniform5("[A-Za-z0-9+/=: -]{0,40}")) {
            let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
            let joined = join_fields(&refs);
            let split = split_fields(joined.as_bytes()).unwrap();
            prop_assert_eq!(split.to_vec(), refs);
        }
    }
}
