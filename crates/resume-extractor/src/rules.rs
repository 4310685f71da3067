//! Ordered classification rules

use resume_domain::SkillCategory;

use crate::TokenSet;

/// A single classification rule
///
/// The rule holds when at least one `any_of` keyword is present, every
/// `all_of` keyword is present, and no `none_of` keyword is present. An empty
/// `any_of` or `all_of` list imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Category assigned when the rule holds
    pub label: SkillCategory,

    /// At least one of these tokens must appear
    pub any_of: &'static [&'static str],

    /// All of these tokens must appear
    pub all_of: &'static [&'static str],

    /// None of these tokens may appear
    pub none_of: &'static [&'static str],
}

impl ClassificationRule {
    /// Check the rule against a token set
    pub fn matches(&self, tokens: &TokenSet) -> bool {
        (self.any_of.is_empty() || tokens.contains_any(self.any_of))
            && tokens.contains_all(self.all_of)
            && !tokens.contains_any(self.none_of)
    }

    /// Human-readable condition, e.g. `all of {java, spring} and none of {react}`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.any_of.is_empty() {
            parts.push(format!("any of {{{}}}", self.any_of.join(", ")));
        }
        if !self.all_of.is_empty() {
            parts.push(format!("all of {{{}}}", self.all_of.join(", ")));
        }
        if !self.none_of.is_empty() {
            parts.push(format!("none of {{{}}}", self.none_of.join(", ")));
        }
        if parts.is_empty() {
            return "always".to_string();
        }
        parts.join(" and ")
    }
}

/// The built-in rules, highest priority first
///
/// Order decides the outcome when a document satisfies several rules: a
/// resume mentioning both `selenium` and `java` is QA, not Java Full Stack.
/// `"c"` is matched as a literal single-letter token. `"c#"` and `"c-sharp"`
/// contain separators and therefore never occur as tokens.
pub const DEFAULT_RULES: [ClassificationRule; 7] = [
    ClassificationRule {
        label: SkillCategory::Qa,
        any_of: &["qa", "selenium", "test", "automation"],
        all_of: &[],
        none_of: &[],
    },
    ClassificationRule {
        label: SkillCategory::PythonBackend,
        any_of: &[],
        all_of: &[
            "python", "numpy", "pytest", "dataframe", "matlabplot", "pandas", "fast", "flask",
        ],
        none_of: &["javascript", "java", "react"],
    },
    ClassificationRule {
        label: SkillCategory::PythonFullStack,
        any_of: &[],
        all_of: &[
            "python", "numpy", "pytest", "dataframe", "matlabplot", "pandas", "react",
            "javascript", "typescript", "fast", "flask",
        ],
        none_of: &["java"],
    },
    ClassificationRule {
        label: SkillCategory::JavaFullStack,
        any_of: &["react", "java", "javascript"],
        all_of: &[],
        none_of: &["python"],
    },
    ClassificationRule {
        label: SkillCategory::JavaBackend,
        any_of: &[],
        all_of: &["java", "spring", "junit"],
        none_of: &["net", "c", "react", "python"],
    },
    ClassificationRule {
        label: SkillCategory::DotNetBackend,
        any_of: &["c", "net", "csharp", "c#", "c-sharp"],
        all_of: &[],
        none_of: &["java", "python", "react"],
    },
    ClassificationRule {
        label: SkillCategory::DotNetFullStack,
        any_of: &["c", "net", "react", "javascript", "csharp", "c#"],
        all_of: &[],
        none_of: &["java", "python"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(label: SkillCategory) -> ClassificationRule {
        DEFAULT_RULES
            .iter()
            .copied()
            .find(|r| r.label == label)
            .unwrap()
    }

    fn holds(label: SkillCategory, text: &str) -> bool {
        rule(label).matches(&TokenSet::from_text(text))
    }

    const PYTHON_STACK: &str = "python numpy pytest dataframe matlabplot pandas fast flask";

    #[test]
    fn test_priority_order() {
        let labels: Vec<_> = DEFAULT_RULES.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                SkillCategory::Qa,
                SkillCategory::PythonBackend,
                SkillCategory::PythonFullStack,
                SkillCategory::JavaFullStack,
                SkillCategory::JavaBackend,
                SkillCategory::DotNetBackend,
                SkillCategory::DotNetFullStack,
            ]
        );
    }

    #[test]
    fn test_qa_rule() {
        assert!(holds(SkillCategory::Qa, "Selenium"));
        assert!(holds(SkillCategory::Qa, "unit test"));
        assert!(!holds(SkillCategory::Qa, "testing tester"));
    }

    #[test]
    fn test_python_backend_rule() {
        assert!(holds(SkillCategory::PythonBackend, PYTHON_STACK));
        assert!(!holds(SkillCategory::PythonBackend, "python numpy pandas flask"));
        let with_react = format!("{} react", PYTHON_STACK);
        assert!(!holds(SkillCategory::PythonBackend, &with_react));
    }

    #[test]
    fn test_python_full_stack_rule() {
        let text = format!("{} react javascript typescript", PYTHON_STACK);
        assert!(holds(SkillCategory::PythonFullStack, &text));
        let with_java = format!("{} java", text);
        assert!(!holds(SkillCategory::PythonFullStack, &with_java));
    }

    #[test]
    fn test_java_full_stack_rule() {
        assert!(holds(SkillCategory::JavaFullStack, "React and JavaScript"));
        assert!(holds(SkillCategory::JavaFullStack, "Java"));
        assert!(!holds(SkillCategory::JavaFullStack, "java python"));
    }

    #[test]
    fn test_java_backend_rule() {
        assert!(holds(SkillCategory::JavaBackend, "Java, Spring, JUnit"));
        assert!(!holds(SkillCategory::JavaBackend, "Java, Spring"));
        assert!(!holds(SkillCategory::JavaBackend, "Java Spring JUnit and C"));
    }

    #[test]
    fn test_dotnet_backend_rule() {
        assert!(holds(SkillCategory::DotNetBackend, "C and .NET"));
        assert!(holds(SkillCategory::DotNetBackend, "csharp"));
        assert!(!holds(SkillCategory::DotNetBackend, "csharp react"));
    }

    #[test]
    fn test_dotnet_full_stack_rule() {
        assert!(holds(SkillCategory::DotNetFullStack, ".NET with React"));
        assert!(!holds(SkillCategory::DotNetFullStack, ".NET with Java"));
    }

    #[test]
    fn test_single_letter_c_is_literal() {
        // "C programming" yields the token "c"
        assert!(holds(SkillCategory::DotNetBackend, "C programming"));
        assert!(!holds(SkillCategory::DotNetBackend, "Objective-Cee"));
    }

    #[test]
    fn test_describe() {
        let description = rule(SkillCategory::JavaBackend).describe();
        assert_eq!(
            description,
            "all of {java, spring, junit} and none of {net, c, react, python}"
        );
        assert!(rule(SkillCategory::Qa).describe().starts_with("any of {qa"));
    }

    #[test]
    fn test_empty_rule_always_holds() {
        let rule = ClassificationRule {
            label: SkillCategory::Unclassified,
            any_of: &[],
            all_of: &[],
            none_of: &[],
        };
        assert!(rule.matches(&TokenSet::default()));
        assert_eq!(rule.describe(), "always");
    }
}
