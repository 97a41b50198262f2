//! Part-of-speech pattern matching.
//!
//! Morphological dictionaries classify every morpheme with a POS hierarchy of
//! up to four levels, coarse to fine (e.g. `助詞,格助詞,引用,*`). A
//! [`PosPattern`] describes a set of hierarchies: each of its four levels is a
//! literal tag or the wildcard `*`. Patterns are written as `-`-joined
//! segments and shorter patterns are padded with `*`, so `助詞` means
//! `助詞-*-*-*`.
//!
//! A [`PosFilter`] holds a set of patterns and is used by the Japanese
//! tokenizer in two roles, dropping stop tags and rewriting inflected words to
//! their base form. The two roles are carried by [`PosFilterSet`].
//!
//! # Pattern tables
//!
//! Pattern tables are newline-delimited. Blank lines and lines starting with
//! `#` are ignored; every other line is one pattern:
//!
//! ```text
//! # particles
//! 助詞
//! 助詞-格助詞-引用
//! ```
//!
//! # Examples
//!
//! ```
//! use yomi::analysis::pos::PosFilter;
//!
//! let filter = PosFilter::from_patterns(["助詞", "記号-句点"]).unwrap();
//!
//! assert!(filter.matches(&["助詞", "係助詞", "*", "*"]));
//! assert!(filter.matches(&["記号", "句点", "*", "*"]));
//! assert!(!filter.matches(&["記号", "読点", "*", "*"]));
//! // Hierarchies with fewer than four levels never match.
//! assert!(!filter.matches(&["助詞"]));
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::analysis::morphology::Morpheme;
use crate::error::{Result, YomiError};

/// Number of levels in a POS hierarchy.
pub const POS_HIERARCHY: usize = 4;

/// Pattern level that matches any tag.
pub const WILDCARD: &str = "*";

/// Separator between the levels of a written pattern.
pub const SEPARATOR: char = '-';

/// A four-level POS pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PosPattern {
    levels: [String; POS_HIERARCHY],
}

impl PosPattern {
    /// Parse a `-`-joined pattern of 1 to 4 segments.
    ///
    /// Missing trailing levels are filled with the wildcard. Empty segments
    /// and patterns with more than four segments are rejected.
    pub fn parse(pattern: &str) -> Result<Self> {
        let segments: Vec<&str> = pattern.split(SEPARATOR).collect();

        if segments.len() > POS_HIERARCHY {
            return Err(YomiError::configuration(format!(
                "POS pattern '{pattern}' has {} levels, at most {POS_HIERARCHY} are allowed",
                segments.len()
            )));
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(YomiError::configuration(format!(
                "POS pattern '{pattern}' contains an empty level"
            )));
        }

        let mut levels: [String; POS_HIERARCHY] = Default::default();
        for (i, level) in levels.iter_mut().enumerate() {
            *level = segments.get(i).copied().unwrap_or(WILDCARD).to_string();
        }

        Ok(Self { levels })
    }

    /// The four levels of this pattern.
    pub fn levels(&self) -> &[String; POS_HIERARCHY] {
        &self.levels
    }

    /// Check whether a POS hierarchy matches this pattern.
    ///
    /// The hierarchy must have exactly four levels.
    pub fn matches<S: AsRef<str>>(&self, pos: &[S]) -> bool {
        pos.len() == POS_HIERARCHY
            && self
                .levels
                .iter()
                .zip(pos)
                .all(|(pattern, tag)| pattern == WILDCARD || pattern == tag.as_ref())
    }
}

impl FromStr for PosPattern {
    type Err = YomiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PosPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.levels.join("-"))
    }
}

/// A set of POS patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosFilter {
    patterns: Vec<PosPattern>,
}

impl PosFilter {
    /// Create a filter from already parsed patterns.
    pub fn new(patterns: Vec<PosPattern>) -> Self {
        let mut filter = Self::default();
        for pattern in patterns {
            filter.add_pattern(pattern);
        }
        filter
    }

    /// Create a filter from written patterns.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| PosPattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(patterns))
    }

    /// Parse a pattern table.
    ///
    /// Errors name the offending line (1-based).
    pub fn parse_table(table: &str) -> Result<Self> {
        let mut filter = Self::default();

        for (number, line) in table.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pattern = PosPattern::parse(line).map_err(|e| {
                YomiError::configuration(format!("line {}: {}", number + 1, message(&e)))
            })?;
            filter.add_pattern(pattern);
        }

        Ok(filter)
    }

    /// Load a pattern table from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = fs::read_to_string(path)?;
        Self::parse_table(&table).map_err(|e| {
            YomiError::configuration(format!("{}: {}", path.display(), message(&e)))
        })
    }

    fn add_pattern(&mut self, pattern: PosPattern) {
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }

    /// The patterns of this filter, in the order they were added.
    pub fn patterns(&self) -> &[PosPattern] {
        &self.patterns
    }

    /// Get the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the filter has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether a POS hierarchy matches any pattern.
    pub fn matches<S: AsRef<str>>(&self, pos: &[S]) -> bool {
        self.patterns.iter().any(|p| p.matches(pos))
    }

    /// Remove every morpheme whose POS matches.
    pub fn drop_matching(&self, morphemes: &mut Vec<Morpheme>) {
        morphemes.retain(|m| !self.matches(&m.pos));
    }
}

fn message(error: &YomiError) -> String {
    match error {
        YomiError::Configuration(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// The POS filters applied by the Japanese tokenizer.
///
/// The drop filter removes morphemes before assembly; the rewrite filter
/// replaces the term of matching morphemes with their base form. Each slot is
/// independently present or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PosFilterSet {
    /// No filtering.
    #[default]
    None,
    /// Only drop matching morphemes.
    DropOnly(PosFilter),
    /// Only rewrite matching morphemes to their base form.
    RewriteOnly(PosFilter),
    /// Drop first, then rewrite the survivors.
    Both {
        /// Filter for morphemes to remove.
        drop: PosFilter,
        /// Filter for morphemes to rewrite.
        rewrite: PosFilter,
    },
}

impl PosFilterSet {
    /// Build the set from optional drop and rewrite filters.
    pub fn new(drop: Option<PosFilter>, rewrite: Option<PosFilter>) -> Self {
        match (drop, rewrite) {
            (None, None) => PosFilterSet::None,
            (Some(drop), None) => PosFilterSet::DropOnly(drop),
            (None, Some(rewrite)) => PosFilterSet::RewriteOnly(rewrite),
            (Some(drop), Some(rewrite)) => PosFilterSet::Both { drop, rewrite },
        }
    }

    /// Replace the drop filter, keeping the rewrite filter.
    pub fn with_drop(self, drop: PosFilter) -> Self {
        let rewrite = self.rewrite().cloned();
        Self::new(Some(drop), rewrite)
    }

    /// Replace the rewrite filter, keeping the drop filter.
    pub fn with_rewrite(self, rewrite: PosFilter) -> Self {
        let drop = self.drop().cloned();
        Self::new(drop, Some(rewrite))
    }

    /// The drop filter, if configured.
    pub fn drop(&self) -> Option<&PosFilter> {
        match self {
            PosFilterSet::DropOnly(drop) | PosFilterSet::Both { drop, .. } => Some(drop),
            _ => None,
        }
    }

    /// The rewrite filter, if configured.
    pub fn rewrite(&self) -> Option<&PosFilter> {
        match self {
            PosFilterSet::RewriteOnly(rewrite) | PosFilterSet::Both { rewrite, .. } => {
                Some(rewrite)
            }
            _ => None,
        }
    }

    /// Short name of the configured variant, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            PosFilterSet::None => "none",
            PosFilterSet::DropOnly(_) => "drop",
            PosFilterSet::RewriteOnly(_) => "rewrite",
            PosFilterSet::Both { .. } => "drop+rewrite",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn morpheme(surface: &str, pos: &[&str], index: usize) -> Morpheme {
        Morpheme::new(surface, 0, pos.iter().map(|s| s.to_string()).collect(), index)
    }

    #[test]
    fn test_pattern_padding() {
        let pattern = PosPattern::parse("助詞").unwrap();
        assert_eq!(pattern.levels(), &["助詞", "*", "*", "*"]);
        assert_eq!(pattern.to_string(), "助詞-*-*-*");

        let pattern: PosPattern = "助詞-格助詞-引用".parse().unwrap();
        assert_eq!(pattern.levels(), &["助詞", "格助詞", "引用", "*"]);
    }

    #[test]
    fn test_pattern_rejects_malformed() {
        assert!(PosPattern::parse("").unwrap_err().is_configuration());
        assert!(PosPattern::parse("助詞--引用").is_err());
        assert!(PosPattern::parse("a-b-c-d-e").is_err());
        assert!(PosPattern::parse("a-b-c-d").is_ok());
    }

    #[test]
    fn test_pattern_match() {
        let pattern = PosPattern::parse("助詞-格助詞").unwrap();
        assert!(pattern.matches(&["助詞", "格助詞", "一般", "*"]));
        assert!(pattern.matches(&["助詞", "格助詞", "引用", "*"]));
        assert!(!pattern.matches(&["助詞", "係助詞", "*", "*"]));
        assert!(!pattern.matches(&["名詞", "格助詞", "*", "*"]));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let pattern = PosPattern::parse("NOUN").unwrap();
        assert!(pattern.matches(&["NOUN", "*", "*", "*"]));
        assert!(!pattern.matches(&["noun", "*", "*", "*"]));
    }

    #[test]
    fn test_short_hierarchy_never_matches() {
        let filter = PosFilter::from_patterns(["*", "接続詞"]).unwrap();
        assert!(filter.matches(&["接続詞", "*", "*", "*"]));
        assert!(!filter.matches(&["接続詞", "*", "*"]));
        assert!(!filter.matches(&["UNK"]));
        assert!(!filter.matches::<&str>(&[]));
    }

    #[test]
    fn test_long_hierarchy_never_matches() {
        let filter = PosFilter::from_patterns(["動詞"]).unwrap();
        assert!(!filter.matches(&["動詞", "自立", "*", "*", "五段・マ行"]));
    }

    #[test]
    fn test_parse_table() {
        let table = "# stop tags\n\n接続詞\n  助詞-格助詞  \n#助動詞\n記号\n接続詞\n";
        let filter = PosFilter::parse_table(table).unwrap();
        assert_eq!(filter.len(), 3);
        assert_eq!(filter.patterns()[1].to_string(), "助詞-格助詞-*-*");
        assert!(!filter.matches(&["助動詞", "*", "*", "*"]));
    }

    #[test]
    fn test_parse_table_reports_line() {
        let err = PosFilter::parse_table("接続詞\n# ok\n助詞--引用\n").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom").unwrap();
        writeln!(file, "名詞-数").unwrap();
        let filter = PosFilter::load(file.path()).unwrap();
        assert!(filter.matches(&["名詞", "数", "*", "*"]));

        let missing = PosFilter::load("/nonexistent/stop_tags.txt").unwrap_err();
        assert!(matches!(missing, YomiError::Io(_)));
    }

    #[test]
    fn test_drop_matching() {
        let filter = PosFilter::from_patterns(["助詞", "記号"]).unwrap();
        let mut morphemes = vec![
            morpheme("私", &["名詞", "代名詞", "一般", "*"], 0),
            morpheme("は", &["助詞", "係助詞", "*", "*"], 1),
            morpheme("鰻", &["名詞", "一般", "*", "*"], 2),
            morpheme("。", &["記号", "句点", "*", "*"], 3),
            morpheme("？", &["記号"], 4),
        ];
        filter.drop_matching(&mut morphemes);

        let surfaces: Vec<_> = morphemes.iter().map(|m| m.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["私", "鰻", "？"]);
        assert_eq!(morphemes[1].index, 2);
    }

    #[test]
    fn test_filter_set_variants() {
        let drop = PosFilter::from_patterns(["助詞"]).unwrap();
        let rewrite = PosFilter::from_patterns(["動詞"]).unwrap();

        let set = PosFilterSet::new(None, None);
        assert_eq!(set, PosFilterSet::None);
        assert!(set.drop().is_none() && set.rewrite().is_none());

        let set = PosFilterSet::new(Some(drop.clone()), None);
        assert_eq!(set.name(), "drop");
        assert_eq!(set.drop(), Some(&drop));

        let set = set.with_rewrite(rewrite.clone());
        assert_eq!(set.name(), "drop+rewrite");
        assert_eq!(set.drop(), Some(&drop));
        assert_eq!(set.rewrite(), Some(&rewrite));

        let set = PosFilterSet::default().with_rewrite(rewrite.clone());
        assert_eq!(set, PosFilterSet::RewriteOnly(rewrite));
    }
}
