//! Frontend Models
//!
//! Data structures for deals, pipeline stages and leads.

use serde::{Deserialize, Serialize};

/// Fixed set of pipeline stages, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    Qualified,
    Proposal,
    Negotiation,
    Closed,
}

impl StageId {
    /// All stages in display order.
    pub const ALL: [StageId; 4] = [
        StageId::Qualified,
        StageId::Proposal,
        StageId::Negotiation,
        StageId::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StageId::Qualified => "Qualified",
            StageId::Proposal => "Proposal",
            StageId::Negotiation => "Negotiation",
            StageId::Closed => "Closed Won",
        }
    }

    /// CSS color token for stage dots and stat cards.
    pub fn color(self) -> &'static str {
        match self {
            StageId::Qualified => "stage-blue",
            StageId::Proposal => "stage-purple",
            StageId::Negotiation => "stage-orange",
            StageId::Closed => "stage-green",
        }
    }

    /// Stable index into the board's stage array.
    pub fn index(self) -> usize {
        match self {
            StageId::Qualified => 0,
            StageId::Proposal => 1,
            StageId::Negotiation => 2,
            StageId::Closed => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<StageId> {
        StageId::ALL.get(index).copied()
    }

    pub fn id_str(self) -> &'static str {
        match self {
            StageId::Qualified => "qualified",
            StageId::Proposal => "proposal",
            StageId::Negotiation => "negotiation",
            StageId::Closed => "closed",
        }
    }

    pub fn from_id_str(s: &str) -> Option<StageId> {
        StageId::ALL.iter().copied().find(|stage| stage.id_str() == s)
    }
}

/// Deal data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub value: f64,
    pub probability: u8,
    /// ISO date, YYYY-MM-DD
    pub close_date: String,
    pub contact: String,
    pub description: String,
    pub notes: String,
}

/// Validated deal form payload (create/edit)
///
/// Carries a stage selection for the form UI, but stage membership is owned
/// by the board: add appends to Qualified, update leaves membership alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DealDraft {
    pub title: String,
    pub company: String,
    pub value: f64,
    pub probability: u8,
    pub close_date: String,
    pub contact: String,
    pub stage: Option<StageId>,
    pub description: String,
    pub notes: String,
}

/// Lead status values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Unqualified,
    Converted,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Unqualified,
        LeadStatus::Converted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Unqualified => "Unqualified",
            LeadStatus::Converted => "Converted",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            LeadStatus::New => "badge badge-blue",
            LeadStatus::Contacted => "badge badge-orange",
            LeadStatus::Qualified => "badge badge-purple",
            LeadStatus::Unqualified => "badge badge-gray",
            LeadStatus::Converted => "badge badge-green",
        }
    }

    pub fn id_str(self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Unqualified => "unqualified",
            LeadStatus::Converted => "converted",
        }
    }

    pub fn from_id_str(s: &str) -> Option<LeadStatus> {
        LeadStatus::ALL.iter().copied().find(|status| status.id_str() == s)
    }
}

/// Lead data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub status: LeadStatus,
    pub score: u8,
    pub source: String,
    /// Display string, e.g. "$45,000"
    pub value: String,
    pub last_contact: String,
}

/// Validated lead form payload (create/edit)
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub status: LeadStatus,
    pub score: u8,
    pub source: String,
    pub value: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            status: LeadStatus::New,
            score: 50,
            source: "Website".to_string(),
            value: String::new(),
        }
    }
}

/// Lead source options for the lead form
pub const LEAD_SOURCES: &[&str] = &[
    "Website",
    "LinkedIn",
    "Cold Email",
    "Referral",
    "Social Media",
    "Phone Call",
    "Event",
    "Advertisement",
    "Partner",
];

/// Format a USD amount without decimals, e.g. 85000.0 -> "$85,000"
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = (amount.abs()).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Initials for the lead avatar, e.g. "Sarah Johnson" -> "SJ"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Seed leads shown on first load
pub fn sample_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: 1,
            name: "Sarah Johnson".to_string(),
            company: "TechStart Inc".to_string(),
            email: "sarah@techstart.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            status: LeadStatus::Qualified,
            score: 85,
            source: "Website".to_string(),
            value: "$45,000".to_string(),
            last_contact: "2 hours ago".to_string(),
        },
        Lead {
            id: 2,
            name: "Michael Chen".to_string(),
            company: "Global Solutions".to_string(),
            email: "m.chen@globalsol.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            location: "New York, NY".to_string(),
            status: LeadStatus::New,
            score: 70,
            source: "LinkedIn".to_string(),
            value: "$78,000".to_string(),
            last_contact: "1 day ago".to_string(),
        },
        Lead {
            id: 3,
            name: "Emily Rodriguez".to_string(),
            company: "Innovation Labs".to_string(),
            email: "emily@innovationlabs.co".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            location: "Austin, TX".to_string(),
            status: LeadStatus::Contacted,
            score: 92,
            source: "Referral".to_string(),
            value: "$32,000".to_string(),
            last_contact: "3 hours ago".to_string(),
        },
        Lead {
            id: 4,
            name: "David Park".to_string(),
            company: "Future Systems".to_string(),
            email: "david@futuresys.com".to_string(),
            phone: "+1 (555) 321-9876".to_string(),
            location: "Seattle, WA".to_string(),
            status: LeadStatus::Converted,
            score: 95,
            source: "Cold Call".to_string(),
            value: "$120,000".to_string(),
            last_contact: "1 week ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(85000.0), "$85,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_stage_index_round_trip() {
        for stage in StageId::ALL {
            assert_eq!(StageId::from_index(stage.index()), Some(stage));
            assert_eq!(StageId::from_id_str(stage.id_str()), Some(stage));
        }
        assert_eq!(StageId::from_index(4), None);
        assert_eq!(StageId::from_id_str("archived"), None);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Dr. Martinez"), "DM");
        assert_eq!(initials(""), "");
    }
}
