//! Lead Filtering
//!
//! Pure search/status filter over the lead list, recomputed on every input
//! change. Linear scan is fine at this data scale.

use crate::models::{Lead, LeadStatus};

/// Status filter selection; `All` is the sentinel matching every status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn matches(self, status: LeadStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(want) => status == want,
        }
    }

    /// Parse the select element's value ("all" or a status id).
    pub fn from_select_value(value: &str) -> StatusFilter {
        match LeadStatus::from_id_str(value) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }
}

/// Leads whose name or company contains `query` (case-insensitive) and whose
/// status passes the filter.
pub fn filter_leads(leads: &[Lead], query: &str, status: StatusFilter) -> Vec<Lead> {
    let needle = query.to_lowercase();
    leads
        .iter()
        .filter(|lead| {
            let matches_search = lead.name.to_lowercase().contains(&needle)
                || lead.company.to_lowercase().contains(&needle);
            matches_search && status.matches(lead.status)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lead(id: u32, name: &str, company: &str, status: LeadStatus) -> Lead {
        Lead {
            id,
            name: name.to_string(),
            company: company.to_string(),
            email: format!("lead{}@example.com", id),
            phone: "+1 (555) 000-0000".to_string(),
            location: "Austin, TX".to_string(),
            status,
            score: 50,
            source: "Website".to_string(),
            value: "$10,000".to_string(),
            last_contact: "1 day ago".to_string(),
        }
    }

    #[test]
    fn test_query_matches_name_case_insensitive() {
        let leads = vec![
            make_lead(1, "Sarah Johnson", "TechStart Inc", LeadStatus::Qualified),
            make_lead(2, "Michael Chen", "Global Solutions", LeadStatus::New),
        ];
        let found = filter_leads(&leads, "chen", StatusFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Michael Chen");
    }

    #[test]
    fn test_query_matches_company() {
        let leads = vec![
            make_lead(1, "Sarah Johnson", "TechStart Inc", LeadStatus::Qualified),
            make_lead(2, "Michael Chen", "Global Solutions", LeadStatus::New),
        ];
        let found = filter_leads(&leads, "TECHSTART", StatusFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_status_filter_with_empty_query() {
        let leads = vec![
            make_lead(1, "Sarah Johnson", "TechStart Inc", LeadStatus::Qualified),
            make_lead(2, "Michael Chen", "Global Solutions", LeadStatus::New),
        ];
        let found = filter_leads(&leads, "", StatusFilter::Only(LeadStatus::Qualified));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_query_and_status_are_conjunctive() {
        let leads = vec![
            make_lead(1, "Sarah Johnson", "TechStart Inc", LeadStatus::Qualified),
            make_lead(2, "Michael Chen", "Global Solutions", LeadStatus::New),
        ];
        assert!(filter_leads(&leads, "chen", StatusFilter::Only(LeadStatus::Qualified)).is_empty());
        assert_eq!(filter_leads(&leads, "", StatusFilter::All).len(), 2);
    }

    #[test]
    fn test_from_select_value() {
        assert_eq!(StatusFilter::from_select_value("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_select_value("converted"),
            StatusFilter::Only(LeadStatus::Converted)
        );
    }
}
