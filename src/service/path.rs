//! Resource path templates
//!
//! A DICOMweb resource declares its path as an ordered sequence of segments,
//! each either a literal (`studies`) or a wildcard parameter (`{study}`).
//! Matching a concrete request path against a template is segment-by-segment:
//! lengths must be equal, literals must compare exactly, and a wildcard
//! matches any single segment. There is no prefix matching and no regex.

use crate::error::{DicomWebError, Result};
use std::fmt;

/// One segment of a resource path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Literal segment that must match the request segment exactly (case-sensitive)
    Literal(String),
    /// Wildcard segment that matches any single request segment
    Wildcard,
}

/// A resource's declared path pattern
///
/// # Examples
///
/// ```
/// use dicomweb_rust::service::PathTemplate;
///
/// let template = PathTemplate::parse("studies/{study}/series/{series}").unwrap();
/// let path: Vec<String> = ["studies", "S1", "series", "R1"]
///     .iter().map(|s| s.to_string()).collect();
///
/// assert!(template.matches(&path));
/// assert_eq!(template.captures(&path), vec!["S1", "R1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<PathSegment>,
}

impl PathTemplate {
    /// Parse a template string such as `"studies/{study}/series"`
    ///
    /// Segments are separated by `/`; a leading or trailing slash is
    /// tolerated. A segment wrapped in braces declares a wildcard.
    ///
    /// # Errors
    ///
    /// - [`DicomWebError::InvalidResourcePath`] - empty template, empty
    ///   segment, unbalanced braces, or an empty parameter name
    pub fn parse(template: &str) -> Result<Self> {
        let trimmed = template.trim_matches('/');
        if trimmed.is_empty() {
            return Err(DicomWebError::InvalidResourcePath(
                "template must declare at least one segment".to_string(),
            ));
        }

        let mut segments = Vec::new();
        for raw in trimmed.split('/') {
            segments.push(Self::parse_segment(raw, template)?);
        }
        Ok(PathTemplate { segments })
    }

    fn parse_segment(raw: &str, template: &str) -> Result<PathSegment> {
        if raw.is_empty() {
            return Err(DicomWebError::InvalidResourcePath(format!(
                "empty segment in template '{template}'"
            )));
        }
        match (raw.starts_with('{'), raw.ends_with('}')) {
            (true, true) => {
                let name = &raw[1..raw.len() - 1];
                if name.is_empty() {
                    return Err(DicomWebError::InvalidResourcePath(format!(
                        "empty parameter name in template '{template}'"
                    )));
                }
                Ok(PathSegment::Wildcard)
            }
            (false, false) => Ok(PathSegment::Literal(raw.to_string())),
            _ => Err(DicomWebError::InvalidResourcePath(format!(
                "unbalanced braces in segment '{raw}' of template '{template}'"
            ))),
        }
    }

    /// Build a template directly from segments
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        PathTemplate { segments }
    }

    /// The template's segments in declaration order
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments in the template
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the template has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of wildcard segments
    pub fn wildcard_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::Wildcard))
            .count()
    }

    /// Whether the template declares at least one path capture
    pub fn has_wildcards(&self) -> bool {
        self.wildcard_count() > 0
    }

    /// Check whether a concrete request path matches this template
    ///
    /// Pure and total: any length mismatch is `false`, otherwise every
    /// literal must equal its request segment and every wildcard consumes
    /// exactly one segment.
    pub fn matches(&self, path: &[String]) -> bool {
        if self.segments.len() != path.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(path)
            .all(|(segment, value)| match segment {
                PathSegment::Literal(literal) => literal == value,
                PathSegment::Wildcard => true,
            })
    }

    /// Extract the wildcard-matched values from a request path, left to right
    ///
    /// Call only with a path for which [`matches`](Self::matches) is true;
    /// for a non-matching path the captures are meaningless.
    pub fn captures(&self, path: &[String]) -> Vec<String> {
        self.segments
            .iter()
            .zip(path)
            .filter(|(segment, _)| matches!(segment, PathSegment::Wildcard))
            .map(|(_, value)| value.clone())
            .collect()
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str("/")?;
            }
            first = false;
            match segment {
                PathSegment::Literal(literal) => f.write_str(literal)?,
                PathSegment::Wildcard => f.write_str("{}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_literals_only() {
        let template = PathTemplate::parse("studies").unwrap();
        assert_eq!(template.len(), 1);
        assert!(!template.has_wildcards());
    }

    #[test]
    fn test_parse_with_wildcards() {
        let template = PathTemplate::parse("studies/{study}/series/{series}").unwrap();
        assert_eq!(template.len(), 4);
        assert_eq!(template.wildcard_count(), 2);
        assert_eq!(
            template.segments()[0],
            PathSegment::Literal("studies".to_string())
        );
        assert_eq!(template.segments()[1], PathSegment::Wildcard);
    }

    #[test]
    fn test_parse_tolerates_surrounding_slashes() {
        let template = PathTemplate::parse("/studies/{study}/").unwrap();
        assert_eq!(template.len(), 2);
    }

    #[test]
    fn test_parse_empty_template() {
        assert!(matches!(
            PathTemplate::parse(""),
            Err(DicomWebError::InvalidResourcePath(_))
        ));
        assert!(PathTemplate::parse("/").is_err());
    }

    #[test]
    fn test_parse_empty_segment() {
        assert!(PathTemplate::parse("studies//series").is_err());
    }

    #[test]
    fn test_parse_unbalanced_braces() {
        assert!(PathTemplate::parse("studies/{study").is_err());
        assert!(PathTemplate::parse("studies/study}").is_err());
    }

    #[test]
    fn test_parse_empty_parameter_name() {
        assert!(PathTemplate::parse("studies/{}").is_err());
    }

    #[test]
    fn test_matches_exact_literals() {
        let template = PathTemplate::parse("studies/series").unwrap();
        assert!(template.matches(&path(&["studies", "series"])));
        assert!(!template.matches(&path(&["studies", "instances"])));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let template = PathTemplate::parse("studies").unwrap();
        assert!(!template.matches(&path(&["Studies"])));
    }

    #[test]
    fn test_matches_length_mismatch() {
        let template = PathTemplate::parse("studies/{study}").unwrap();
        assert!(!template.matches(&path(&["studies"])));
        assert!(!template.matches(&path(&["studies", "S1", "series"])));
        assert!(!template.matches(&path(&[])));
    }

    #[test]
    fn test_wildcard_matches_any_single_segment() {
        let template = PathTemplate::parse("studies/{study}").unwrap();
        assert!(template.matches(&path(&["studies", "S1"])));
        assert!(template.matches(&path(&["studies", "anything-at-all"])));
        // A wildcard never spans multiple segments
        assert!(!template.matches(&path(&["studies", "S1", "extra"])));
    }

    #[test]
    fn test_captures_in_template_order() {
        let template = PathTemplate::parse("studies/{study}/series/{series}").unwrap();
        let captures = template.captures(&path(&["studies", "S1", "series", "R1"]));
        assert_eq!(captures, vec!["S1".to_string(), "R1".to_string()]);
    }

    #[test]
    fn test_captures_empty_without_wildcards() {
        let template = PathTemplate::parse("studies").unwrap();
        assert!(template.captures(&path(&["studies"])).is_empty());
    }

    #[test]
    fn test_display() {
        let template = PathTemplate::parse("studies/{study}/series").unwrap();
        assert_eq!(template.to_string(), "studies/{}/series");
    }
}
