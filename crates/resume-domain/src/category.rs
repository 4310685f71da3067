//! Skill categories - the closed set of classification buckets

use std::fmt;

/// Skill category assigned to a resume
///
/// The set is closed. Documents that satisfy no classification rule land in
/// [`SkillCategory::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    /// Testing and test automation
    Qa,

    /// Python services without a JavaScript/Java front end
    PythonBackend,

    /// Python services together with a JavaScript/TypeScript front end
    PythonFullStack,

    /// Java or JavaScript/React without Python
    JavaFullStack,

    /// Java with Spring and JUnit, no front end
    JavaBackend,

    /// C#/.NET without Java, Python or React
    DotNetBackend,

    /// C#/.NET with a JavaScript/React front end
    DotNetFullStack,

    /// No rule matched
    Unclassified,
}

impl SkillCategory {
    /// Every category in report order, classification buckets first and the
    /// sentinel last
    pub const ALL: [SkillCategory; 8] = [
        SkillCategory::Qa,
        SkillCategory::PythonBackend,
        SkillCategory::PythonFullStack,
        SkillCategory::JavaFullStack,
        SkillCategory::JavaBackend,
        SkillCategory::DotNetBackend,
        SkillCategory::DotNetFullStack,
        SkillCategory::Unclassified,
    ];

    /// Get the label written to the report
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Qa => "QA",
            SkillCategory::PythonBackend => "Python Backend",
            SkillCategory::PythonFullStack => "Python Full Stack",
            SkillCategory::JavaFullStack => "Java Full Stack",
            SkillCategory::JavaBackend => "Java Backend",
            SkillCategory::DotNetBackend => ".Net Backend",
            SkillCategory::DotNetFullStack => ".Net Full Stack",
            SkillCategory::Unclassified => "Unclassified",
        }
    }

    /// Whether this is the "no rule matched" sentinel
    pub fn is_unclassified(&self) -> bool {
        matches!(self, SkillCategory::Unclassified)
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        SkillCategory::Unclassified
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
