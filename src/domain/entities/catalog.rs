//! Skill catalog entity
//!
//! The hand-authored list of skills plus the free-form technology list
//! shown under "Also Experienced In".

use serde::Serialize;

use super::skill::SkillRecord;

/// Authored skills and technologies, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SkillCatalog {
    skills: Vec<SkillRecord>,
    technologies: Vec<String>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<SkillRecord>, technologies: Vec<String>) -> Self {
        Self {
            skills,
            technologies,
        }
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let skills = [
            ("Exploratory Data Analysis", 85, "Data"),
            ("Machine Learning", 82, "Data"),
            ("Model Training & Evaluation", 78, "Data"),
            ("Data Preprocessing & Visualization", 80, "Data"),
            ("Automation (n8n)", 75, "Automation"),
            ("Python", 88, "Languages"),
            ("C++", 70, "Languages"),
            ("Java", 65, "Languages"),
        ]
        .into_iter()
        .map(|(name, base, category)| SkillRecord::new(name, base, category))
        .collect();

        let technologies = [
            "Python",
            "n8n",
            "LLaMA (Groq)",
            "Pandas",
            "scikit-learn",
            "PyTorch",
            "NumPy",
            "Google Sheets",
            "Docker",
            "PostgreSQL",
            "React",
            "Tailwind CSS",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self::new(skills, technologies)
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        categories_in_order(self.skills.iter().map(SkillRecord::category))
    }
}

/// Distinct categories, in order of first appearance.
pub fn categories_in_order<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for category in categories {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}
