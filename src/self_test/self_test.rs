use crate::error_handling::Error::{
    IOError, InvalidSelfTestSuite, MissingSuiteKey, YamlParsingError,
};
use crate::error_handling::Result;
use indexmap::IndexMap;
use serde_yaml::Value;
use std::io::Read;

#[derive(Clone, Debug, PartialEq)]
pub struct SelfTestCase {
    pub pattern: String,
    pub text: String,
    pub expected: bool,
}

impl SelfTestCase {
    pub fn new(pattern: &str, text: &str, expected: bool) -> SelfTestCase {
        Self {
            pattern: pattern.to_string(),
            text: text.to_string(),
            expected,
        }
    }
}

pub struct SelfTestSuite {
    cases: Vec<SelfTestCase>,
}

impl Default for SelfTestSuite {
    fn default() -> Self {
        let cases = [
            ("a", "a", true),
            ("a", "b", false),
            (".", "x", true),
            ("a*", "", true),
            ("a*", "aaa", true),
            ("a+", "", false),
            ("a+", "aaa", true),
            ("a?", "", true),
            ("a?", "a", true),
            ("a?", "aa", true),
            ("a|b", "a", true),
            ("a|b", "b", true),
            ("a|b", "c", false),
            ("(ab)*", "", true),
            ("(ab)*", "abab", true),
            ("a.c", "abc", true),
            ("a.c", "axc", true),
            ("a.c", "ac", false),
            ("a(b|c)d", "abd", true),
            ("a(b|c)d", "acd", true),
            ("a(b|c)d", "axd", false),
        ];
        Self {
            cases: cases
                .iter()
                .map(|&(pattern, text, expected)| SelfTestCase::new(pattern, text, expected))
                .collect(),
        }
    }
}

impl SelfTestSuite {
    const CASES_KEY: &'static str = "cases";
    const PATTERN_KEY: &'static str = "pattern";
    const TEXT_KEY: &'static str = "text";
    const EXPECTED_KEY: &'static str = "expected";

    pub fn new(cases: Vec<SelfTestCase>) -> Self {
        Self { cases }
    }

    pub fn get_cases(&self) -> &[SelfTestCase] {
        &self.cases
    }

    pub fn parse_from_file(yaml_file_path: &str) -> Result<SelfTestSuite> {
        match std::fs::File::open(yaml_file_path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    return Err(IOError(e));
                }
                Self::parse_from_str(contents.as_str())
            }
            Err(e) => Err(IOError(e)),
        }
    }

    pub fn parse_from_str(yaml_content: &str) -> Result<SelfTestSuite> {
        let kv_pairs = Self::load_kv_pairs_from_yaml_content(yaml_content)?;
        Self::load_from_kv_pairs(kv_pairs)
    }

    pub fn run(&self) -> SelfTestReport {
        let results = self
            .cases
            .iter()
            .map(|case| SelfTestResult {
                actual: crate::is_match(&case.pattern, &case.text),
                case: case.clone(),
            })
            .collect();
        SelfTestReport { results }
    }

    fn load_kv_pairs_from_yaml_content(yaml_content: &str) -> Result<IndexMap<String, Value>> {
        let document: Value = serde_yaml::from_str(yaml_content).map_err(YamlParsingError)?;
        if false == document.is_mapping() {
            return Err(InvalidSelfTestSuite);
        }
        // Only non-string keys can fail here.
        serde_yaml::from_value(document).map_err(|_| InvalidSelfTestSuite)
    }

    fn load_from_kv_pairs(kv_pairs: IndexMap<String, Value>) -> Result<Self> {
        let cases = kv_pairs
            .get(Self::CASES_KEY)
            .ok_or(MissingSuiteKey(Self::CASES_KEY))?;
        let Value::Sequence(sequence) = cases else {
            return Err(InvalidSelfTestSuite);
        };

        let cases = sequence
            .iter()
            .map(Self::load_case)
            .collect::<Result<Vec<SelfTestCase>>>()?;
        Ok(Self { cases })
    }

    fn load_case(val: &Value) -> Result<SelfTestCase> {
        let Value::Mapping(map) = val else {
            return Err(InvalidSelfTestSuite);
        };
        let get = |key: &'static str| map.get(key).ok_or(MissingSuiteKey(key));

        match (
            get(Self::PATTERN_KEY)?,
            get(Self::TEXT_KEY)?,
            get(Self::EXPECTED_KEY)?,
        ) {
            (Value::String(pattern), Value::String(text), Value::Bool(expected)) => {
                Ok(SelfTestCase::new(pattern, text, *expected))
            }
            _ => Err(InvalidSelfTestSuite),
        }
    }
}

pub struct SelfTestResult {
    pub case: SelfTestCase,
    pub actual: bool,
}

impl SelfTestResult {
    pub fn passed(&self) -> bool {
        self.actual == self.case.expected
    }
}

impl std::fmt::Display for SelfTestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' vs '{}' -> {} (expected: {})",
            if self.passed() { "✓" } else { "✗" },
            self.case.pattern,
            self.case.text,
            self.actual,
            self.case.expected
        )
    }
}

pub struct SelfTestReport {
    results: Vec<SelfTestResult>,
}

impl SelfTestReport {
    pub fn get_results(&self) -> &[SelfTestResult] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|result| result.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

impl std::fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        write!(f, "{}/{} cases passed", self.passed(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::Error;

    #[test]
    fn test_default_suite_passes() {
        let report = SelfTestSuite::default().run();
        assert_eq!(report.total(), 21);
        assert_eq!(report.passed(), 21);
        assert!(report.all_passed());
    }

    #[test]
    fn test_parse_from_str() -> Result<()> {
        let yaml = r#"
cases:
  - pattern: "a*a"
    text: "aaa"
    expected: false
  - pattern: ""
    text: ""
    expected: true
"#;
        let suite = SelfTestSuite::parse_from_str(yaml)?;
        assert_eq!(
            suite.get_cases(),
            &[
                SelfTestCase::new("a*a", "aaa", false),
                SelfTestCase::new("", "", true),
            ]
        );
        assert!(suite.run().all_passed());
        Ok(())
    }

    #[test]
    fn test_missing_cases_key() {
        let result = SelfTestSuite::parse_from_str("tests: []");
        assert!(matches!(result, Err(Error::MissingSuiteKey("cases"))));
    }

    #[test]
    fn test_missing_case_field() {
        let yaml = "cases:\n  - pattern: a\n    text: a\n";
        let result = SelfTestSuite::parse_from_str(yaml);
        assert!(matches!(result, Err(Error::MissingSuiteKey("expected"))));
    }

    #[test]
    fn test_wrongly_typed_case() {
        let yaml = "cases:\n  - pattern: a\n    text: a\n    expected: maybe\n";
        let result = SelfTestSuite::parse_from_str(yaml);
        assert!(matches!(result, Err(Error::InvalidSelfTestSuite)));

        let result = SelfTestSuite::parse_from_str("cases: a");
        assert!(matches!(result, Err(Error::InvalidSelfTestSuite)));
    }

    #[test]
    fn test_top_level_must_be_a_mapping() {
        for yaml in ["- a", "cases", "42"] {
            let result = SelfTestSuite::parse_from_str(yaml);
            assert!(
                matches!(result, Err(Error::InvalidSelfTestSuite)),
                "yaml {:?}",
                yaml
            );
        }
    }

    #[test]
    fn test_malformed_yaml() {
        let result = SelfTestSuite::parse_from_str("cases: [");
        assert!(matches!(result, Err(Error::YamlParsingError(_))));
    }

    #[test]
    fn test_report_rendering() {
        let suite = SelfTestSuite::new(vec![
            SelfTestCase::new("a", "a", true),
            SelfTestCase::new("a*a", "aaa", true),
        ]);
        let report = suite.run();
        assert_eq!(
            report.to_string(),
            "✓ 'a' vs 'a' -> true (expected: true)\n\
             ✗ 'a*a' vs 'aaa' -> false (expected: true)\n\
             1/2 cases passed"
        );
        assert!(false == report.all_passed());
    }
}
