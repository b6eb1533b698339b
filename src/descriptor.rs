//! Descriptor codec — the compact `"<kind-letter>:<fully-qualified-name>"`
//! identifier notation used by the documentation file and by cross-references.

use crate::error::Error;

/// Member kind derived from a descriptor's leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Type,
    Method,
    Event,
    Field,
    Property,
}

/// Map a descriptor kind letter to its member kind.
pub fn kind_from_letter(letter: char) -> Result<Kind, Error> {
    match letter {
        'T' => Ok(Kind::Type),
        'M' => Ok(Kind::Method),
        'E' => Ok(Kind::Event),
        'F' => Ok(Kind::Field),
        'P' => Ok(Kind::Property),
        other => Err(Error::UnknownDescriptorKind(other)),
    }
}

/// Split a descriptor into its kind and fully-qualified name.
///
/// `"T:A.B"` → `(Kind::Type, "A.B")`. The kind part must be a single
/// recognized letter and the name part must be non-empty.
pub fn parse_descriptor(text: &str) -> Result<(Kind, String), Error> {
    let (kind_part, name) = text
        .split_once(':')
        .ok_or_else(|| Error::MalformedDescriptor(text.to_string()))?;

    let mut letters = kind_part.chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(l), None) => l,
        _ => return Err(Error::MalformedDescriptor(text.to_string())),
    };
    if name.is_empty() {
        return Err(Error::MalformedDescriptor(text.to_string()));
    }

    Ok((kind_from_letter(letter)?, name.to_string()))
}

/// Shorten a fully-qualified name relative to the member being documented.
///
/// Strips any parameter-list suffix, then drops the longest common leading
/// dot-segment prefix shared with `context` (plus its trailing dot).
/// `shorten_name("A.B.C.Method", "A.B.D")` → `"C.Method"`. A name with no
/// common prefix is returned unmodified.
pub fn shorten_name(name: &str, context: &str) -> String {
    let bare = match name.find('(') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let common = bare
        .split('.')
        .zip(context.split('.'))
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len() + 1) // segment plus its trailing dot
        .sum::<usize>();

    if common == 0 || common > bare.len() {
        return bare.to_string();
    }
    bare[common..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_kinds() {
        assert_eq!(parse_descriptor("T:A.B").unwrap(), (Kind::Type, "A.B".into()));
        assert_eq!(parse_descriptor("M:A.B.C(X.Y)").unwrap(), (Kind::Method, "A.B.C(X.Y)".into()));
        assert_eq!(parse_descriptor("E:A.E").unwrap(), (Kind::Event, "A.E".into()));
        assert_eq!(parse_descriptor("F:A.F").unwrap(), (Kind::Field, "A.F".into()));
        assert_eq!(parse_descriptor("P:A.P").unwrap(), (Kind::Property, "A.P".into()));
    }

    #[test]
    fn parse_unknown_letter() {
        assert!(matches!(
            parse_descriptor("N:Some.Namespace"),
            Err(Error::UnknownDescriptorKind('N'))
        ));
        assert!(matches!(
            parse_descriptor("X:A"),
            Err(Error::UnknownDescriptorKind('X'))
        ));
    }

    #[test]
    fn parse_missing_colon() {
        assert!(matches!(
            parse_descriptor("TA.B"),
            Err(Error::MalformedDescriptor(_))
        ));
    }

    #[test]
    fn parse_long_kind_part() {
        assert!(matches!(
            parse_descriptor("TT:A.B"),
            Err(Error::MalformedDescriptor(_))
        ));
    }

    #[test]
    fn parse_empty_name() {
        assert!(matches!(
            parse_descriptor("T:"),
            Err(Error::MalformedDescriptor(_))
        ));
    }

    #[test]
    fn shorten_common_prefix() {
        assert_eq!(shorten_name("A.B.C.Method", "A.B.D"), "C.Method");
    }

    #[test]
    fn shorten_no_common_prefix() {
        assert_eq!(shorten_name("X.Y", "Z"), "X.Y");
    }

    #[test]
    fn shorten_strips_parameter_list() {
        assert_eq!(
            shorten_name("A.B.C.Method(System.Int32)", "A.B.D"),
            "C.Method"
        );
    }

    #[test]
    fn shorten_partial_segment_not_common() {
        // "Ab" and "Abc" share text but not a whole segment
        assert_eq!(shorten_name("Ab.X", "Abc.Y"), "Ab.X");
    }
}
