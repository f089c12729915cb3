//! Generic URI splitting into scheme / netloc / path / query / fragment.
//!
//! This is a permissive component splitter, not a validating parser. Feature
//! extraction depends on degraded inputs (empty strings, schemeless strings,
//! hosts with out-of-range octets) still splitting into components, so a
//! strict URL parser cannot be used here: it would reject exactly the inputs
//! whose feature values are part of the classifier contract.

/// Characters allowed in a scheme after the leading letter.
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Components of a split URL. All fields are verbatim slices of the input
/// except `scheme`, which is lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

/// Error raised when the network location is malformed beyond splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitError {
    pub message: String,
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid URL: {}", self.message)
    }
}

impl std::error::Error for SplitError {}

impl UrlParts {
    /// Split a URL string into its five components.
    ///
    /// Rules:
    /// - A scheme is recognized only when a `:` is preceded by a leading
    ///   ASCII letter followed by letters, digits, `+`, `-` or `.`; it is
    ///   lowercased. Anything else leaves the scheme empty.
    /// - The netloc is present only after a literal `//` and runs to the
    ///   next `/`, `?` or `#`. Userinfo and port stay inside it.
    /// - The fragment is split off before the query, so a `?` after `#`
    ///   belongs to the fragment.
    ///
    /// The only rejected input is a netloc with unbalanced IPv6 brackets;
    /// everything else splits successfully, possibly into empty components.
    pub fn split(url: &str) -> Result<UrlParts, SplitError> {
        let mut rest = url;
        let mut scheme = String::new();

        if let Some(colon) = rest.find(':') {
            let candidate = &rest[..colon];
            let mut chars = candidate.chars();
            let valid = match chars.next() {
                Some(first) => first.is_ascii_alphabetic() && chars.all(is_scheme_char),
                None => false,
            };
            if valid {
                scheme = candidate.to_ascii_lowercase();
                rest = &rest[colon + 1..];
            }
        }

        let mut netloc = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after
                .find(['/', '?', '#'])
                .unwrap_or(after.len());
            netloc = &after[..end];
            rest = &after[end..];

            if netloc.contains('[') != netloc.contains(']') {
                return Err(SplitError {
                    message: "unbalanced IPv6 brackets in network location".to_string(),
                });
            }
        }

        let (rest, fragment) = match rest.split_once('#') {
            Some((r, f)) => (r, f),
            None => (rest, ""),
        };

        let (path, query) = match rest.split_once('?') {
            Some((p, q)) => (p, q),
            None => (rest, ""),
        };

        Ok(UrlParts {
            scheme,
            netloc: netloc.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_full_url() {
        let p = UrlParts::split("https://www.example.com/login?next=%2Fhome#top").unwrap();
        assert_eq!(p.scheme, "https");
        assert_eq!(p.netloc, "www.example.com");
        assert_eq!(p.path, "/login");
        assert_eq!(p.query, "next=%2Fhome");
        assert_eq!(p.fragment, "top");
    }

    #[test]
    fn scheme_is_lowercased() {
        let p = UrlParts::split("HTTPS://Example.COM").unwrap();
        assert_eq!(p.scheme, "https");
        assert_eq!(p.netloc, "Example.COM");
    }

    #[test]
    fn empty_string_splits_to_empty_parts() {
        let p = UrlParts::split("").unwrap();
        assert_eq!(p.scheme, "");
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "");
        assert_eq!(p.query, "");
    }

    #[test]
    fn schemeless_string_is_all_path() {
        let p = UrlParts::split("www.google.com/search").unwrap();
        assert_eq!(p.scheme, "");
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "www.google.com/search");
    }

    #[test]
    fn digit_leading_prefix_is_not_a_scheme() {
        // "1ab:" starts with a digit, so the colon stays in the path.
        let p = UrlParts::split("1ab://host").unwrap();
        assert_eq!(p.scheme, "");
        assert_eq!(p.path, "1ab://host");
    }

    #[test]
    fn netloc_keeps_port_and_userinfo() {
        let p = UrlParts::split("http://user:pw@example.com:8080/x").unwrap();
        assert_eq!(p.netloc, "user:pw@example.com:8080");
        assert_eq!(p.path, "/x");
    }

    #[test]
    fn invalid_host_octets_still_split() {
        let p = UrlParts::split("https://999.999.999.999").unwrap();
        assert_eq!(p.netloc, "999.999.999.999");
    }

    #[test]
    fn fragment_splits_before_query() {
        let p = UrlParts::split("http://h/p#frag?notquery").unwrap();
        assert_eq!(p.fragment, "frag?notquery");
        assert_eq!(p.query, "");
    }

    #[test]
    fn unbalanced_brackets_rejected() {
        assert!(UrlParts::split("http://[::1/x").is_err());
        assert!(UrlParts::split("http://::1]/x").is_err());
        assert!(UrlParts::split("http://[::1]/x").is_ok());
    }
}
