use super::Faculty;

/// How a keyword is compared against a lower-cased program name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Keyword may appear anywhere in the name.
    Substring,
    /// Keyword must equal a whole alphanumeric token ("cs" matches "BS CS", not "Classics").
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub term: &'static str,
    pub kind: MatchKind,
}

impl Keyword {
    const fn substring(term: &'static str) -> Self {
        Self {
            term,
            kind: MatchKind::Substring,
        }
    }

    const fn word(term: &'static str) -> Self {
        Self {
            term,
            kind: MatchKind::Word,
        }
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        match self.kind {
            MatchKind::Substring => lowered.contains(self.term),
            MatchKind::Word => lowered
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == self.term),
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct FacultyRule {
    pub faculty: Faculty,
    pub keywords: &'static [Keyword],
}

impl FacultyRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword.matches(lowered))
    }
}

const COMPUTING: &[Keyword] = &[
    Keyword::substring("computer"),
    Keyword::substring("software"),
    Keyword::substring("information technology"),
    Keyword::substring("artificial intelligence"),
    Keyword::substring("data science"),
    Keyword::substring("cyber"),
    Keyword::substring("computing"),
    Keyword::word("cs"),
    Keyword::word("it"),
    Keyword::word("ai"),
];

const ENGINEERING: &[Keyword] = &[
    Keyword::substring("engineering"),
    Keyword::substring("architecture"),
];

const HUMANITIES: &[Keyword] = &[
    Keyword::substring("education"),
    Keyword::substring("english"),
    Keyword::substring("islamic"),
    Keyword::substring("media"),
    Keyword::substring("communication"),
    Keyword::substring("politics"),
    Keyword::substring("international relations"),
    Keyword::substring("urdu"),
    Keyword::substring("psychology"),
    Keyword::substring("sociology"),
    Keyword::substring("history"),
    Keyword::substring("arts"),
];

const LAW: &[Keyword] = &[
    Keyword::substring("law"),
    Keyword::substring("llb"),
    Keyword::substring("legal"),
    Keyword::substring("paralegal"),
];

const MANAGEMENT: &[Keyword] = &[
    Keyword::substring("aviation"),
    Keyword::substring("business"),
    Keyword::substring("bba"),
    Keyword::substring("commerce"),
    Keyword::substring("economics"),
    Keyword::substring("accounting"),
    Keyword::substring("finance"),
    Keyword::substring("mba"),
    Keyword::substring("management"),
    Keyword::substring("admin"),
];

const ALLIED_HEALTH: &[Keyword] = &[
    Keyword::substring("pharmacy"),
    Keyword::substring("pharmd"),
    Keyword::substring("physiotherapy"),
    Keyword::substring("rehabilitation"),
    Keyword::substring("dpt"),
    Keyword::substring("dietetics"),
    Keyword::substring("nutrition"),
    Keyword::substring("medical lab"),
    Keyword::substring("imaging"),
    Keyword::substring("radiography"),
    Keyword::substring("health"),
];

const SCIENCES: &[Keyword] = &[
    Keyword::substring("biochemistry"),
    Keyword::substring("biology"),
    Keyword::substring("zoology"),
    Keyword::substring("biotechnology"),
    Keyword::substring("chemistry"),
    Keyword::substring("mathematics"),
    Keyword::substring("math"),
    Keyword::substring("physics"),
    Keyword::substring("botany"),
    Keyword::substring("science"),
    Keyword::substring("bio"),
    Keyword::substring("fsc"),
    Keyword::substring("intermediate"),
];

const TEXTILE: &[Keyword] = &[
    Keyword::substring("fashion"),
    Keyword::substring("textile"),
    Keyword::substring("design"),
];

// Allied health must stay ahead of sciences: "science" would otherwise swallow
// pharmacy and health-science names.
static RULES: [FacultyRule; 8] = [
    FacultyRule {
        faculty: Faculty::ComputingAndInformationTechnology,
        keywords: COMPUTING,
    },
    FacultyRule {
        faculty: Faculty::EngineeringAndArchitecture,
        keywords: ENGINEERING,
    },
    FacultyRule {
        faculty: Faculty::HumanitiesAndSocialSciences,
        keywords: HUMANITIES,
    },
    FacultyRule {
        faculty: Faculty::Law,
        keywords: LAW,
    },
    FacultyRule {
        faculty: Faculty::ManagementAndAdministrativeSciences,
        keywords: MANAGEMENT,
    },
    FacultyRule {
        faculty: Faculty::PharmacyAndAlliedHealthSciences,
        keywords: ALLIED_HEALTH,
    },
    FacultyRule {
        faculty: Faculty::Sciences,
        keywords: SCIENCES,
    },
    FacultyRule {
        faculty: Faculty::TextileAndFashionDesigning,
        keywords: TEXTILE,
    },
];

/// The ordered rule table, first-checked rule first. [`Faculty::Other`] has no rule.
pub fn rules() -> &'static [FacultyRule] {
    &RULES
}
