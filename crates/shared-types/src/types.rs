use std::fmt;

/// Characters that end a line; `\r\n` counts as a single break
pub const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// A block of free text viewed as an ordered sequence of lines.
///
/// Lines end at any of [`LINE_BREAKS`], with `\r\n` taken as one break. A
/// trailing terminator does not produce an extra empty line, and empty text
/// has no lines at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// All lines, blanks included, untrimmed.
    pub fn lines(self) -> DocumentLines<'a> {
        DocumentLines { rest: self.text }
    }

    /// Lines whose trimmed form is non-empty, in document order.
    pub fn clauses(self) -> impl Iterator<Item = &'a str> {
        self.lines().filter(|line| !line.trim().is_empty())
    }
}

/// Iterator over the lines of a [`Document`]
#[derive(Debug, Clone)]
pub struct DocumentLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for DocumentLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(LINE_BREAKS) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let after = &self.rest[pos..];
                let terminator = if after.starts_with("\r\n") {
                    2
                } else {
                    after.chars().next().map_or(1, char::len_utf8)
                };
                self.rest = &self.rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Compliance tier of a single regulation clause.
///
/// Ordered from worst to best, so `NonCompliant < Partial < Compliant`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ComplianceStatus {
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
    Partial,
    Compliant,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] = [
        ComplianceStatus::Compliant,
        ComplianceStatus::Partial,
        ComplianceStatus::NonCompliant,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Partial => "Partial",
            ComplianceStatus::NonCompliant => "Non-Compliant",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "✅",
            ComplianceStatus::Partial => "⚠️",
            ComplianceStatus::NonCompliant => "❌",
        }
    }

    pub fn needs_remediation(&self) -> bool {
        matches!(self, ComplianceStatus::NonCompliant)
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonResult {
    pub clause_text: String,  // Literal regulation line
    pub match_score: f64,     // Best similarity, rounded to 2 decimals
    pub status: ComplianceStatus,
}

/// Per-clause outcomes of one comparison run, in regulation line order
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    results: Vec<ComparisonResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ComparisonResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[ComparisonResult] {
        &self.results
    }

    pub fn count(&self, status: ComplianceStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Results whose clause has no adequate counterpart in the policy
    pub fn non_compliant(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results.iter().filter(|r| r.status.needs_remediation())
    }

    pub fn summary(&self) -> ComplianceSummary {
        ComplianceSummary::from_results(self)
    }
}

impl FromIterator<ComparisonResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ComparisonResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ComparisonResult;
    type IntoIter = std::slice::Iter<'a, ComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = ComparisonResult;
    type IntoIter = std::vec::IntoIter<ComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Aggregate counts per compliance tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub compliant: usize,
    pub partial: usize,
    pub non_compliant: usize,
}

impl ComplianceSummary {
    pub fn from_results(results: &ResultSet) -> Self {
        let total = results.len();
        let partial = results.count(ComplianceStatus::Partial);
        let non_compliant = results.count(ComplianceStatus::NonCompliant);

        Self {
            total,
            compliant: total - partial - non_compliant,
            partial,
            non_compliant,
        }
    }

    pub fn count(&self, status: ComplianceStatus) -> usize {
        match status {
            ComplianceStatus::Compliant => self.compliant,
            ComplianceStatus::Partial => self.partial,
            ComplianceStatus::NonCompliant => self.non_compliant,
        }
    }
}
