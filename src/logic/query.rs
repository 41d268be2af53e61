//! Query text normalization
//!
//! The search box and the recommend call both treat surrounding whitespace
//! as noise, and a whitespace-only field as empty.

/// Strip surrounding whitespace from raw field text
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}

/// Whether the field holds anything worth sending to the server
pub fn is_submittable(raw: &str) -> bool {
    !normalize(raw).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_both_ends() {
        assert_eq!(normalize("  blade runner "), "blade runner");
        assert_eq!(normalize("inception"), "inception");
        assert_eq!(normalize("\tmatrix\n"), "matrix");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" the  dark   knight "), "the  dark   knight");
    }

    #[test]
    fn test_is_submittable() {
        assert!(is_submittable("alien"));
        assert!(is_submittable("  alien  "));
        assert!(!is_submittable(""));
        assert!(!is_submittable("   "));
        assert!(!is_submittable("\t\n"));
    }
}
