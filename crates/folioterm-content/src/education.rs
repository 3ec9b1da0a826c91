//! Education history and the certification table.
//!
//! Certifications carry the asset id of their scanned certificate so the
//! `education` command can emit them as viewer-opening entries.

/// One certification row: display fields plus its certificate image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub label: &'static str,
    pub period: &'static str,
    pub org: &'static str,
    pub asset: &'static str,
}

impl Certification {
    /// The row as it appears in the education block.
    pub fn line(&self) -> String {
        format!("- {} | {} ({})", self.label, self.period, self.org)
    }
}

/// Degrees portion of the `education` block, up to and including the
/// `Certifications:` heading. Certification rows follow, one per table entry.
pub const HEADER: &str = "
Education
---------
Bachelor's Degree in Computer Science
University of Veliko Turnovo \"St. Cyril and St. Methodius\"
Veliko Turnovo, Bulgaria | Sep 2019 - Jul 2024

Professional Degree - Computer Technician and Technologies
PGMET \"Deveti mai\"
Cherven Bryag, Bulgaria | Sep 2015 - Jul 2019


Certifications:";

/// The Intern & Team Lead certificate; always shown in a split view
/// together with its recommendation letter.
pub const INTERN_TEAM_LEAD: &str = "certificates/intern-team-lead.jpg";

/// Companion image shown beside the Intern & Team Lead certificate.
pub const INTERN_TEAM_LEAD_RECOMMENDATION: &str =
    "certificates/intern-team-lead-recommendation.jpg";

/// Certifications, newest first, as presented by `education`.
pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        label: "Intern & Team Lead Academy (incl. Recommendation)",
        period: "Nov 2023 - Feb 2024",
        org: "SoftUni",
        asset: "certificates/intern-team-lead.jpg",
    },
    Certification {
        label: "ASP.NET Advanced",
        period: "Jul 2023 - Aug 2023",
        org: "SoftUni",
        asset: "certificates/aspnet-advanced.jpg",
    },
    Certification {
        label: "ASP.NET Fundamentals",
        period: "May 2023 - Jul 2023",
        org: "SoftUni",
        asset: "certificates/aspnet-fundamentals.jpg",
    },
    Certification {
        label: "Entity Framework Core",
        period: "Feb 2023 - Mar 2023",
        org: "SoftUni",
        asset: "certificates/entity-framework-core.jpg",
    },
    Certification {
        label: "MS SQL",
        period: "Jan 2023 - Mar 2023",
        org: "SoftUni",
        asset: "certificates/ms-sql.jpg",
    },
    Certification {
        label: "JS Applications",
        period: "Oct 2022 - Dec 2022",
        org: "SoftUni",
        asset: "certificates/js-applications.jpg",
    },
    Certification {
        label: "JS Advanced",
        period: "Sep 2022 - Oct 2022",
        org: "SoftUni",
        asset: "certificates/js-advanced.jpg",
    },
    Certification {
        label: "C# OOP",
        period: "Jun 2022 - Aug 2022",
        org: "SoftUni",
        asset: "certificates/csharp-oop.jpg",
    },
    Certification {
        label: "C# Advanced",
        period: "Jun 2022 - Aug 2022",
        org: "SoftUni",
        asset: "certificates/csharp-advanced.jpg",
    },
    Certification {
        label: "Programming Fundamentals with C#",
        period: "Jan 2022 - Apr 2022",
        org: "SoftUni",
        asset: "certificates/programming-fundamentals.jpg",
    },
    Certification {
        label: "Basics with C#",
        period: "Oct 2021 - Dec 2021",
        org: "SoftUni",
        asset: "certificates/programming-basics.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn header_ends_at_the_certifications_heading() {
        assert!(HEADER.starts_with('\n'));
        assert!(HEADER.ends_with("Certifications:"));
    }

    #[test]
    fn header_lists_both_degrees() {
        assert!(HEADER.contains("Bachelor's Degree in Computer Science"));
        assert!(HEADER.contains("Professional Degree - Computer Technician and Technologies"));
    }

    #[test]
    fn eleven_certifications() {
        assert_eq!(CERTIFICATIONS.len(), 11);
    }

    #[test]
    fn assets_are_unique_jpg_paths() {
        let mut seen = HashSet::new();
        for cert in CERTIFICATIONS {
            assert!(cert.asset.starts_with("certificates/"), "{}", cert.asset);
            assert!(cert.asset.ends_with(".jpg"), "{}", cert.asset);
            assert!(seen.insert(cert.asset), "duplicate asset {}", cert.asset);
        }
    }

    #[test]
    fn line_formats_label_period_org() {
        let cert = &CERTIFICATIONS[1];
        assert_eq!(cert.line(), "- ASP.NET Advanced | Jul 2023 - Aug 2023 (SoftUni)");
    }

    #[test]
    fn intern_team_lead_is_first_and_has_a_companion() {
        let first = &CERTIFICATIONS[0];
        assert!(first.asset.contains("intern-team-lead"));
        assert!(INTERN_TEAM_LEAD_RECOMMENDATION.contains("intern-team-lead"));
        assert_ne!(first.asset, INTERN_TEAM_LEAD_RECOMMENDATION);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: HashSet<_> = CERTIFICATIONS.iter().map(|c| c.label).collect();
        assert_eq!(labels.len(), CERTIFICATIONS.len());
    }
}
