//! Line-oriented test-suite parsing shared by fixture-driven tests.
//!
//! A line starting with `+` opens a new case and names it; the next line is
//! the input pattern; every following non-empty line up to the next `+` line
//! is one expected path, in order. A case with no expected paths asserts that
//! the pattern must not expand.

/// One named fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteCase {
    /// Case name from the `+` line.
    pub name: String,
    /// Input pattern.
    pub input: String,
    /// Expected expansion; empty means the pattern must fail.
    pub expect: Vec<String>,
}

/// Parse the suite text into its ordered cases.
pub fn parse_suite(text: &str) -> Vec<SuiteCase> {
    let mut cases: Vec<SuiteCase> = Vec::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        if let Some(name) = line.strip_prefix('+') {
            let input = lines.next().unwrap_or_default().to_owned();
            cases.push(SuiteCase {
                name: name.trim().to_owned(),
                input,
                expect: Vec::new(),
            });
        } else if !line.is_empty() {
            if let Some(case) = cases.last_mut() {
                case.expect.push(line.to_owned());
            }
        }
    }

    cases
}
