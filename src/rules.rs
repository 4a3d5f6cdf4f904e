use crate::error::GenerateError;
use regex::Regex;

/// Pattern that matches every package.
pub const DEFAULT_PATTERN: &str = ".*";

/// A configured rule: packages whose identifier fully matches `pattern`
/// receive `lines` as the header of their package-info.java.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRule {
    pub pattern: String,
    pub lines: Vec<String>,
}

impl PackageRule {
    pub fn new<I, S>(pattern: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: pattern.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for PackageRule {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            lines: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: PackageRule,
    regex: Regex,
}

impl CompiledRule {
    pub fn compile(rule: &PackageRule) -> Result<Self, GenerateError> {
        // Anchor both ends so the whole identifier has to match.
        let regex = Regex::new(&format!("^(?:{})$", rule.pattern)).map_err(|source| {
            GenerateError::PatternCompilation {
                pattern: rule.pattern.clone(),
                source,
            }
        })?;
        Ok(Self {
            rule: rule.clone(),
            regex,
        })
    }

    pub fn matches(&self, package: &str) -> bool {
        self.regex.is_match(package)
    }

    pub fn pattern(&self) -> &str {
        &self.rule.pattern
    }

    pub fn lines(&self) -> &[String] {
        &self.rule.lines
    }
}

/// Ordered rules; declaration order decides which one applies.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile(rules: &[PackageRule]) -> Result<Self, GenerateError> {
        let rules = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// First rule whose pattern matches the whole `package` identifier.
    pub fn first_match(&self, package: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.matches(package))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
