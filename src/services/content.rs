use serde::Serialize;

/// One practice area as presented on the marketing site. The `name` doubles
/// as the service value the booking form submits.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeArea {
    pub name: &'static str,
    pub summary: &'static str,
    pub typical_matters: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirmValue {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FirmProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub founded: u16,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub values: Vec<FirmValue>,
}

pub fn practice_areas() -> Vec<PracticeArea> {
    vec![
        PracticeArea {
            name: "Corporate Law",
            summary: "Formation, governance and transactions for businesses of every size.",
            typical_matters: &["Entity formation", "Shareholder agreements", "Mergers and acquisitions"],
        },
        PracticeArea {
            name: "Criminal Law",
            summary: "Defense representation from arraignment through appeal.",
            typical_matters: &["White collar defense", "DUI and traffic offenses", "Expungements"],
        },
        PracticeArea {
            name: "Family Law",
            summary: "Counsel through divorce, custody and adoption with discretion.",
            typical_matters: &["Divorce and separation", "Child custody", "Prenuptial agreements"],
        },
        PracticeArea {
            name: "Intellectual Property",
            summary: "Protecting the ideas and brands that set your work apart.",
            typical_matters: &["Trademark registration", "Licensing agreements", "Trade secret disputes"],
        },
        PracticeArea {
            name: "Real Estate",
            summary: "Residential and commercial transactions, leases and disputes.",
            typical_matters: &["Purchase and sale", "Commercial leasing", "Title disputes"],
        },
        PracticeArea {
            name: "Tax Law",
            summary: "Planning and controversy work for individuals and businesses.",
            typical_matters: &["Audit representation", "Tax planning", "Offers in compromise"],
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Eleanor Hartwell",
            title: "Managing Partner",
            bio: "Eleanor founded the firm in 2003 and leads the corporate practice. She advises boards on governance and has closed transactions on both coasts.",
            email: "eleanor@hartwellcrane.com",
        },
        TeamMember {
            name: "Marcus Crane",
            title: "Senior Partner, Criminal Defense",
            bio: "A former public defender, Marcus has tried more than sixty cases to verdict and argues regularly before the state appellate courts.",
            email: "marcus@hartwellcrane.com",
        },
        TeamMember {
            name: "Priya Raman",
            title: "Partner, Intellectual Property",
            bio: "Priya came to the firm from an engineering background and manages trademark and licensing portfolios for technology clients.",
            email: "priya@hartwellcrane.com",
        },
        TeamMember {
            name: "Daniel Okafor",
            title: "Associate, Family Law",
            bio: "Daniel handles custody and adoption matters and runs the firm's monthly pro bono clinic.",
            email: "daniel@hartwellcrane.com",
        },
    ]
}

pub fn firm_profile() -> FirmProfile {
    FirmProfile {
        name: "Hartwell & Crane LLP",
        tagline: "Measured counsel. Decisive advocacy.",
        mission: "To give individuals and businesses in our community the same caliber of representation the largest institutions take for granted.",
        founded: 2003,
        address: "410 Meridian Avenue, Suite 900, Arlington, VA 22203",
        phone: "(703) 555-0142",
        email: "contact@hartwellcrane.com",
        values: vec![
            FirmValue {
                name: "Candor",
                description: "Clients hear our honest read of their position, not what they hope to hear.",
            },
            FirmValue {
                name: "Preparation",
                description: "Cases are won in the file room long before the courtroom.",
            },
            FirmValue {
                name: "Accessibility",
                description: "Calls returned the same day, fees explained before work begins.",
            },
        ],
    }
}
