//! Static site copy: the FAQ entries, the corporate office contact card,
//! and the about blurb.

use crate::disclosure::{DisclosureGroup, DisclosureMode};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FaqEntry {
    /// Stable panel id for the FAQ accordion.
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 3] = [
    FaqEntry {
        id: "faq-services",
        question: "What services does Genexcorp offer?",
        answer: "Genexcorp offers services in cloud solutions, DevOps, e-commerce development, \
                 and custom software engineering tailored to your business needs.",
    },
    FaqEntry {
        id: "faq-demo",
        question: "How can I request a demo or consultation?",
        answer: "You can fill out the contact form on this page or email us at hr@genexcorp.com \
                 to schedule a consultation or product demo.",
    },
    FaqEntry {
        id: "faq-location",
        question: "Where is Genexcorp located?",
        answer: "Our corporate office is located in VT Plaza, 4th Floor, KPHB Colony, \
                 Kukatpally, Telangana, India.",
    },
];

/// The FAQ accordion: one panel per entry, at most one open.
pub fn faq_group() -> DisclosureGroup {
    DisclosureGroup::with_panels(DisclosureMode::Exclusive, FAQS.iter().map(|entry| entry.id))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContactCard {
    pub organization: &'static str,
    pub address_lines: [&'static str; 2],
    pub phone: &'static str,
    pub email: &'static str,
}

pub const CORPORATE_OFFICE: ContactCard = ContactCard {
    organization: "GENEX CORPORATE PRIVATE LIMITED",
    address_lines: [
        "VT Plaza, 4th Floor, KPHB Colony, Kukatpally, Road # 1,",
        "Hyderabad - 500085, Telangana, India",
    ],
    phone: "+91-9920779995",
    email: "hr@genexcorp.com",
};

pub const ABOUT_BLURB: &str = "Some believe in the power of numbers. Some believe in the power \
                               of technology. We believe in the power of people, power of human \
                               touch which brings best out of the best and the impact people can \
                               have on technology.";
