//! Built-in scheme content

use super::SchemeEntry;

struct SchemeRow {
    id: &'static str,
    name: &'static str,
    overview: &'static str,
    eligibility: &'static str,
    documents: &'static str,
    benefits: &'static str,
    apply: &'static str,
}

impl From<&SchemeRow> for SchemeEntry {
    fn from(row: &SchemeRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name.to_string(),
            overview: row.overview.to_string(),
            eligibility: row.eligibility.to_string(),
            documents: row.documents.to_string(),
            benefits: row.benefits.to_string(),
            apply: row.apply.to_string(),
        }
    }
}

// Menu numbering follows this order.
const SCHEMES: &[SchemeRow] = &[
    SchemeRow {
        id: "PMFBY",
        name: "PMFBY – Crop Insurance",
        overview: "Pradhan Mantri Fasal Bima Yojana.\nLow premium crop insurance for farmers.",
        eligibility: "All farmers in notified area.\nLoanee: compulsory\nNon-loanee: voluntary.",
        documents: "Aadhaar\nLand Record\nBank Account\nCrop details",
        benefits: "• 2% Kharif\n• 1.5% Rabi\n• Covers drought, flood, pest\n• Post-harvest coverage",
        apply: "Apply at pmfby.gov.in or nearest bank/CSC.",
    },
    SchemeRow {
        id: "PMKSY",
        name: "PMKSY – Irrigation",
        overview: "Pradhan Mantri Krishi Sinchayee Yojana.\nHar Khet Ko Pani.",
        eligibility: "Farmers with land ownership/possession.",
        documents: "Aadhaar\nLand document\nBank account",
        benefits: "• Drip irrigation subsidy\n• Rainwater harvesting\n• Reduced water usage",
        apply: "Apply at District Agriculture Office.",
    },
    SchemeRow {
        id: "SHC",
        name: "SHC – Soil Health Card",
        overview: "Free soil testing every 2 years.",
        eligibility: "All farmers across India.",
        documents: "Aadhaar\nLand Record",
        benefits: "• Fertilizer recommendations\n• Improves crop yield\n• Reduces cost",
        apply: "Visit nearest Krishi Vigyan Kendra (KVK).",
    },
    SchemeRow {
        id: "ENAM",
        name: "eNAM – Online Market",
        overview: "National Agriculture Market for online crop selling.",
        eligibility: "Farmers registered at APMC mandi.",
        documents: "Aadhaar\nBank account\nAPMC registration",
        benefits: "• Online bidding\n• Better price discovery\n• Direct bank payment",
        apply: "Register at enam.gov.in.",
    },
    SchemeRow {
        id: "KCC",
        name: "KCC – Kisan Call Centre",
        overview: "Toll-free farmer advisory helpline.",
        eligibility: "All farmers.",
        documents: "No documents required.",
        benefits: "• Free expert advice\n• Pest & crop guidance\n• 22 languages supported",
        apply: "Call 1800-180-1551 (6AM–10PM).",
    },
    SchemeRow {
        id: "PGS",
        name: "PGS – Organic Certification",
        overview: "Low-cost organic certification system.",
        eligibility: "Farmers practicing organic farming in groups.",
        documents: "Land record\nOrganic farming proof\nAadhaar",
        benefits: "• Affordable certification\n• Access to organic market\n• Peer inspection system",
        apply: "Join local PGS group.\nVisit pgsindia.net.",
    },
    SchemeRow {
        id: "PM_DHAN_DHANAY",
        name: "PM Dhan Dhanay Scheme",
        overview: "District productivity enhancement program (2025–2031).",
        eligibility: "Farmers in 100 low-productivity districts.",
        documents: "Aadhaar\nLand Record\nBank Account",
        benefits: "• ₹24,000 Cr yearly budget\n• Crop diversification\n• Irrigation & credit support",
        apply: "Apply via District Agriculture Office.",
    },
    SchemeRow {
        id: "PULSES_MISSION",
        name: "Atmanirbhar Pulses Mission",
        overview: "Mission to boost Tur, Urad & Masoor production.",
        eligibility: "Farmers growing Tur, Urad, Masoor.",
        documents: "Aadhaar\nLand Record\nCrop details",
        benefits: "• MSP procurement guarantee\n• Seed subsidy\n• ₹11,440 Cr budget",
        apply: "Apply via Agriculture Department.",
    },
    SchemeRow {
        id: "COTTON_MISSION",
        name: "Cotton Productivity Mission",
        overview: "Improve cotton yield & textile value chain.",
        eligibility: "Cotton farmers in Gujarat, Maharashtra, Telangana, Punjab, Haryana, Rajasthan.",
        documents: "Aadhaar\nLand Record\nCotton cultivation proof",
        benefits: "• Technology support\n• Higher yield varieties\n• Market linkage",
        apply: "Apply via State Agriculture Office.",
    },
    SchemeRow {
        id: "SEEDS_MISSION",
        name: "High Yield Seeds Mission",
        overview: "National Mission for improved seed varieties.",
        eligibility: "Farmers growing pulses, oilseeds, vegetables.",
        documents: "Aadhaar\nLand Record\nFarmer registration",
        benefits: "• 15–20% yield increase\n• New seed varieties\n• Subsidized distribution",
        apply: "Apply via Agriculture Office.",
    },
    SchemeRow {
        id: "MAKHANA_BOARD",
        name: "National Makhana Board",
        overview: "Dedicated board for Makhana farmers in Bihar.",
        eligibility: "Makhana farmers in Bihar.",
        documents: "Aadhaar\nBihar residency proof\nCultivation record",
        benefits: "• ₹476 Cr support\n• Market linkage\n• Price stabilization",
        apply: "Apply via Bihar Agriculture Department.",
    },
];

pub(super) fn builtin_entries() -> Vec<SchemeEntry> {
    SCHEMES.iter().map(SchemeEntry::from).collect()
}
