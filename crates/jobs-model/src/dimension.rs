//! Groupable fields of a [`JobPosting`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::{JobPosting, fields};

/// A field records can be grouped on.
///
/// Single-valued dimensions contribute one value per record; multi-valued
/// dimensions hold a list and a record contributes once per distinct entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Title,
    Company,
    Country,
    SeniorityLevel,
    Source,
    SalaryType,
    SalaryCurrency,
    TechnicalSkills,
    ToolsUsed,
    Domains,
}

impl Dimension {
    pub const ALL: [Dimension; 10] = [
        Dimension::Title,
        Dimension::Company,
        Dimension::Country,
        Dimension::SeniorityLevel,
        Dimension::Source,
        Dimension::SalaryType,
        Dimension::SalaryCurrency,
        Dimension::TechnicalSkills,
        Dimension::ToolsUsed,
        Dimension::Domains,
    ];

    /// Column name in the source file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Title => fields::TITLE,
            Dimension::Company => fields::COMPANY,
            Dimension::Country => fields::COUNTRY,
            Dimension::SeniorityLevel => fields::SENIORITY_LEVEL,
            Dimension::Source => fields::SOURCE,
            Dimension::SalaryType => fields::SALARY_TYPE,
            Dimension::SalaryCurrency => fields::SALARY_CURRENCY,
            Dimension::TechnicalSkills => fields::TECHNICAL_SKILLS,
            Dimension::ToolsUsed => fields::TOOLS_USED,
            Dimension::Domains => fields::DOMAINS,
        }
    }

    /// Human-readable label for chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Title => "Job title",
            Dimension::Company => "Company",
            Dimension::Country => "Country",
            Dimension::SeniorityLevel => "Seniority",
            Dimension::Source => "Source",
            Dimension::SalaryType => "Salary type",
            Dimension::SalaryCurrency => "Salary currency",
            Dimension::TechnicalSkills => "Technical skills",
            Dimension::ToolsUsed => "Tools",
            Dimension::Domains => "Domains",
        }
    }

    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            Dimension::TechnicalSkills | Dimension::ToolsUsed | Dimension::Domains
        )
    }

    /// The record's values for this dimension. Single-valued dimensions
    /// yield a one-element slice.
    pub fn values<'a>(&self, posting: &'a JobPosting) -> &'a [String] {
        match self {
            Dimension::Title => std::slice::from_ref(&posting.title),
            Dimension::Company => std::slice::from_ref(&posting.company),
            Dimension::Country => std::slice::from_ref(&posting.country),
            Dimension::SeniorityLevel => std::slice::from_ref(&posting.seniority_level),
            Dimension::Source => std::slice::from_ref(&posting.source),
            Dimension::SalaryType => std::slice::from_ref(&posting.salary_type),
            Dimension::SalaryCurrency => std::slice::from_ref(&posting.salary_currency),
            Dimension::TechnicalSkills => &posting.technical_skills,
            Dimension::ToolsUsed => &posting.tools_used,
            Dimension::Domains => &posting.domains,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    /// Accepts column names plus a few short aliases (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "title" | "titles" => Ok(Dimension::Title),
            "company" | "companies" => Ok(Dimension::Company),
            "country" | "countries" | "geo" => Ok(Dimension::Country),
            "seniority_level" | "seniority" => Ok(Dimension::SeniorityLevel),
            "source" => Ok(Dimension::Source),
            "salary_type" => Ok(Dimension::SalaryType),
            "salary_currency" | "currency" => Ok(Dimension::SalaryCurrency),
            "technical_skills" | "skills" => Ok(Dimension::TechnicalSkills),
            "tools_used" | "tools" => Ok(Dimension::ToolsUsed),
            "domains" => Ok(Dimension::Domains),
            _ => Err(ModelError::UnknownDimension {
                name: s.to_string(),
            }),
        }
    }
}

/// Boolean fields shown as two-slice splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanField {
    HybridPolicy,
    VisaSponsorship,
}

impl BooleanField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanField::HybridPolicy => fields::HYBRID_POLICY,
            BooleanField::VisaSponsorship => fields::VISA_SPONSORSHIP,
        }
    }

    /// Slice labels for the true and false sides.
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            BooleanField::HybridPolicy => ("Hybrid", "On-site"),
            BooleanField::VisaSponsorship => ("Visa OK", "Visa No"),
        }
    }

    pub fn get(&self, posting: &JobPosting) -> bool {
        match self {
            BooleanField::HybridPolicy => posting.hybrid_policy,
            BooleanField::VisaSponsorship => posting.visa_sponsorship,
        }
    }
}

impl fmt::Display for BooleanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BooleanField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "hybrid_policy" | "hybrid" => Ok(BooleanField::HybridPolicy),
            "visa_sponsorship" | "visa" => Ok(BooleanField::VisaSponsorship),
            _ => Err(ModelError::UnknownBooleanField {
                name: s.to_string(),
            }),
        }
    }
}
