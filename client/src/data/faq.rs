//! Frequently asked questions and the FAQ page search.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqCategory {
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

pub const FAQ_CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        title: "General Questions",
        entries: &[
            FaqEntry {
                question: "What is DRAMP and how does it work?",
                answer: "DRAMP (Discrimination Reporting and Monitoring Platform) is a comprehensive platform that helps fight housing discrimination in Italy. We provide verified listings, anonymous reporting tools, and data-driven insights to create a safer housing marketplace for everyone, especially international students and marginalized communities.",
            },
            FaqEntry {
                question: "Is DRAMP free to use?",
                answer: "Yes, DRAMP is completely free for renters. Our basic services including browsing verified listings, reporting discrimination, and accessing safety information are available at no cost. We may charge fees to property hosts for premium verification services.",
            },
            FaqEntry {
                question: "How do I create an account?",
                answer: "Creating an account is simple. Click on \"Register\" in the top menu, fill out the basic information form, and verify your email address. You can also browse listings without an account, but registration is required to save listings and submit reports.",
            },
            FaqEntry {
                question: "What cities in Italy does DRAMP cover?",
                answer: "DRAMP covers major Italian cities including Milan, Rome, Bologna, Florence, Naples, Turin, Venice, and many others. We are continuously expanding to cover more cities and regions across Italy.",
            },
        ],
    },
    FaqCategory {
        title: "Housing & Listings",
        entries: &[
            FaqEntry {
                question: "How are listings verified as \"safe\"?",
                answer: "Our verification process includes background checks on hosts, review of rental agreements for discriminatory language, analysis of past tenant reviews, and AI-powered screening for bias indicators. Only listings that pass all checks receive our \"Verified Safe\" badge.",
            },
            FaqEntry {
                question: "What should I do if I find a discriminatory listing?",
                answer: "If you encounter a discriminatory listing, please report it immediately using our reporting tool. Include screenshots, links, and any relevant details. We investigate all reports within 24 hours and remove verified discriminatory content.",
            },
            FaqEntry {
                question: "Can I save listings for later?",
                answer: "Yes, registered users can save listings to their personal list. Click the heart icon on any listing to save it. You can access your saved listings anytime from your dashboard or the \"Saved Listings\" page.",
            },
            FaqEntry {
                question: "How do I contact a host?",
                answer: "For verified listings, you can contact hosts directly through our secure messaging system. Click \"Contact Host\" on any listing details page. This helps us monitor communications and ensure fair treatment.",
            },
        ],
    },
    FaqCategory {
        title: "Discrimination Reporting",
        entries: &[
            FaqEntry {
                question: "What types of discrimination can I report?",
                answer: "You can report discrimination based on race, ethnicity, national origin, religion, gender, disability, familial status, sexual orientation, age, source of income, or any other protected characteristic. We also track other forms of unfair treatment in housing.",
            },
            FaqEntry {
                question: "Is my report anonymous?",
                answer: "Yes, all discrimination reports are completely anonymous by default. You can choose to provide contact information if you want follow-up, but this is optional. We never share reporter information without explicit consent.",
            },
            FaqEntry {
                question: "What happens after I submit a report?",
                answer: "After submission, we review your report within 24 hours, investigate the claims, update our database, and may flag or remove discriminatory listings. If you provided contact info, we may reach out for additional information or to offer support resources.",
            },
            FaqEntry {
                question: "Can DRAMP help with legal action?",
                answer: "While DRAMP doesn't provide legal services directly, we can connect you with partner organizations and legal aid societies in Italy that specialize in housing discrimination cases. We also provide documentation that may be helpful for legal proceedings.",
            },
        ],
    },
    FaqCategory {
        title: "Safety & Security",
        entries: &[
            FaqEntry {
                question: "How do you protect my personal information?",
                answer: "We use industry-standard encryption and security measures to protect all user data. Personal information is never shared with hosts or third parties without your explicit consent. All communications are encrypted and stored securely.",
            },
            FaqEntry {
                question: "What if I feel unsafe during a housing search?",
                answer: "If you feel unsafe at any point, trust your instincts. Use our emergency reporting feature for immediate concerns. We also provide safety tips for housing searches and can connect you with local support organizations.",
            },
            FaqEntry {
                question: "How do you verify host backgrounds?",
                answer: "Our host verification includes identity verification, criminal background checks where legally permitted, previous tenant feedback analysis, and social media screening for discriminatory behavior patterns.",
            },
            FaqEntry {
                question: "Can I report safety concerns about a property?",
                answer: "Absolutely. Use our reporting system to flag safety issues like poor building conditions, lack of proper exits, or other hazards. We investigate all safety reports and work with local authorities when necessary.",
            },
        ],
    },
    FaqCategory {
        title: "Platform Features",
        entries: &[
            FaqEntry {
                question: "How do I use the analytics dashboard?",
                answer: "The analytics dashboard shows discrimination trends, safe neighborhoods, and platform statistics. You can filter data by city, time period, and discrimination type to understand housing patterns in your area of interest.",
            },
            FaqEntry {
                question: "What is the rating system for hosts?",
                answer: "Hosts are rated on fairness, responsiveness, property accuracy, and overall experience. Ratings include safety scores based on discrimination reports and verification status. Only verified tenants can submit ratings.",
            },
            FaqEntry {
                question: "Can I use DRAMP on mobile devices?",
                answer: "Yes, DRAMP is fully optimized for mobile devices. You can access all features including browsing listings, submitting reports, and viewing analytics from your smartphone or tablet browser.",
            },
            FaqEntry {
                question: "How often is the platform updated?",
                answer: "We continuously update our listings database, safety information, and platform features. New listings are verified daily, and safety reports are processed in real-time. Major platform updates are released monthly.",
            },
        ],
    },
];

/// A category with only the entries matching the current search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqMatch {
    pub title: &'static str,
    pub entries: Vec<FaqEntry>,
}

pub fn total_questions() -> usize {
    FAQ_CATEGORIES.iter().map(|c| c.entries.len()).sum()
}

/// Case-insensitive search over questions and answers. Categories with no
/// matching entry are dropped; an empty query keeps everything.
pub fn search(query: &str) -> Vec<FaqMatch> {
    let needle = query.to_lowercase();
    FAQ_CATEGORIES
        .iter()
        .map(|category| FaqMatch {
            title: category.title,
            entries: category
                .entries
                .iter()
                .filter(|e| e.question.to_lowercase().contains(&needle) || e.answer.to_lowercase().contains(&needle))
                .copied()
                .collect(),
        })
        .filter(|m| !m.entries.is_empty())
        .collect()
}

/// Summary line above the results.
pub fn results_caption(query: &str, matched: usize) -> String {
    let total = total_questions();
    if query.is_empty() {
        format!("{total} questions available")
    } else {
        format!("Showing {matched} of {total} questions")
    }
}
