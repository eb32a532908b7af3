//! Scalar-boundary string helpers.
//!
//! The cleanup passes slice owned `String` texts; these helpers keep every
//! cut on a Unicode scalar boundary while counting in scalars, not bytes.

/// Number of Unicode scalar values in `s`.
pub(crate) fn scalar_len(s: &str) -> usize {
    s.chars().count()
}

/// Split before the `n`th scalar. `n` past the end splits at the end.
pub(crate) fn split_at_scalar(s: &str, n: usize) -> (&str, &str) {
    let byte = s
        .char_indices()
        .nth(n)
        .map_or(s.len(), |(i, _)| i);
    s.split_at(byte)
}

/// Byte length of the scalar-exact common prefix of two strings. Always a
/// char boundary in both.
pub(crate) fn common_prefix_bytes(a: &str, b: &str) -> usize {
    let mut end = 0;
    for ((i, ca), cb) in a.char_indices().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end = i + ca.len_utf8();
    }
    end
}

/// Byte length of the scalar-exact common suffix of two strings.
pub(crate) fn common_suffix_bytes(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_bytes_stop_on_scalar_boundary() {
        assert_eq!(0, common_prefix_bytes("é", "e"));
        assert_eq!("aé".len(), common_prefix_bytes("aéx", "aéy"));
    }

    #[test]
    fn suffix_bytes_stop_on_scalar_boundary() {
        assert_eq!(0, common_suffix_bytes("é", "e"));
        assert_eq!("éa".len(), common_suffix_bytes("xéa", "yéa"));
    }

    #[test]
    fn split_counts_scalars() {
        assert_eq!(("aé", "b"), split_at_scalar("aéb", 2));
        assert_eq!(("aéb", ""), split_at_scalar("aéb", 9));
    }
}
