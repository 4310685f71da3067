//! First-match skill classification

use resume_domain::SkillCategory;

use crate::{ClassificationRule, TokenSet, DEFAULT_RULES};

/// Assigns a skill category by walking an ordered rule list
///
/// The first rule that holds wins, even when later rules also hold. Nothing
/// is scored.
#[derive(Debug, Clone)]
pub struct SkillClassifier {
    rules: Vec<ClassificationRule>,
}

impl SkillClassifier {
    /// Create a classifier over `rules`, highest priority first
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classify raw text
    pub fn classify(&self, text: &str) -> SkillCategory {
        self.classify_tokens(&TokenSet::from_text(text))
    }

    /// Classify an already tokenized document
    pub fn classify_tokens(&self, tokens: &TokenSet) -> SkillCategory {
        self.rules
            .iter()
            .find(|rule| rule.matches(tokens))
            .map(|rule| rule.label)
            .unwrap_or(SkillCategory::Unclassified)
    }

    /// Labels of every rule that holds, in priority order
    ///
    /// The first element, when present, is what [`SkillClassifier::classify`]
    /// returns.
    pub fn matching_rules(&self, tokens: &TokenSet) -> Vec<SkillCategory> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(tokens))
            .map(|rule| rule.label)
            .collect()
    }
}

impl Default for SkillClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let classifier = SkillClassifier::default();
        // QA and Java Full Stack both hold
        let text = "Selenium automation with Java and React";
        let tokens = TokenSet::from_text(text);
        assert_eq!(
            classifier.matching_rules(&tokens),
            vec![SkillCategory::Qa, SkillCategory::JavaFullStack]
        );
        assert_eq!(classifier.classify(text), SkillCategory::Qa);
    }

    #[test]
    fn test_java_full_stack_shadows_java_backend() {
        let classifier = SkillClassifier::default();
        assert_eq!(
            classifier.classify("Java, Spring Boot, JUnit"),
            SkillCategory::JavaFullStack
        );
    }

    #[test]
    fn test_python_backend() {
        let classifier = SkillClassifier::default();
        let text = "Python, NumPy, pytest, DataFrame, matlabplot, Pandas, Fast API, Flask";
        assert_eq!(classifier.classify(text), SkillCategory::PythonBackend);
    }

    #[test]
    fn test_python_full_stack() {
        let classifier = SkillClassifier::default();
        let text = "python numpy pytest dataframe matlabplot pandas fast flask \
                    react javascript typescript";
        assert_eq!(classifier.classify(text), SkillCategory::PythonFullStack);
    }

    #[test]
    fn test_partial_python_stack_is_unclassified() {
        let classifier = SkillClassifier::default();
        assert_eq!(
            classifier.classify("python pandas numpy"),
            SkillCategory::Unclassified
        );
    }

    #[test]
    fn test_dotnet_backend() {
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify("C, .NET"), SkillCategory::DotNetBackend);
    }

    #[test]
    fn test_dotnet_full_stack_is_shadowed() {
        // Every input reaching the last rule without react/javascript already
        // satisfied .Net Backend, and react/javascript alone satisfy Java Full Stack
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify(".NET React"), SkillCategory::JavaFullStack);
        let tokens = TokenSet::from_text(".NET React");
        assert!(classifier
            .matching_rules(&tokens)
            .contains(&SkillCategory::DotNetFullStack));
    }

    #[test]
    fn test_empty_text_is_unclassified() {
        let classifier = SkillClassifier::default();
        assert_eq!(classifier.classify(""), SkillCategory::Unclassified);
        assert!(classifier.matching_rules(&TokenSet::default()).is_empty());
    }

    #[test]
    fn test_custom_rule_order() {
        let mut rules = DEFAULT_RULES.to_vec();
        rules.swap(0, 3);
        let classifier = SkillClassifier::new(rules);
        assert_eq!(
            classifier.classify("Selenium automation with Java"),
            SkillCategory::JavaFullStack
        );
        assert_eq!(classifier.rules()[0].label, SkillCategory::JavaFullStack);
    }
}
