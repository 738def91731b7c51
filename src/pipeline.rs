//! Pipeline Board Model
//!
//! Owns the partition of deals across the four pipeline stages and their
//! order within each stage. Framework-free so the move/add/update/remove
//! semantics are unit-testable on the host.
//!
//! Invariant: the union of all stage sequences is exactly the set of live
//! deals, with no duplicates - a deal belongs to one stage at one position.

use crate::models::{Deal, DealDraft, StageId};

/// The pipeline board: one ordered deal sequence per stage, enum-indexed so
/// an unknown stage identifier cannot reach any operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineBoard {
    stages: [Vec<Deal>; 4],
    next_id: u32,
}

impl PipelineBoard {
    pub fn new() -> Self {
        Self {
            stages: Default::default(),
            next_id: 1,
        }
    }

    /// Deals currently in a stage, in board order.
    pub fn deals_in(&self, stage: StageId) -> &[Deal] {
        &self.stages[stage.index()]
    }

    pub fn deal_count(&self, stage: StageId) -> usize {
        self.stages[stage.index()].len()
    }

    /// Sum of deal values in a stage. Recomputed on read, never cached.
    pub fn stage_total(&self, stage: StageId) -> f64 {
        self.stages[stage.index()].iter().map(|deal| deal.value).sum()
    }

    /// Sum of deal values across the whole board.
    pub fn total_value(&self) -> f64 {
        StageId::ALL.iter().map(|&stage| self.stage_total(stage)).sum()
    }

    /// Locate a deal by id, returning its stage and position.
    pub fn find_deal(&self, deal_id: u32) -> Option<(StageId, usize)> {
        for stage in StageId::ALL {
            if let Some(pos) = self.stages[stage.index()].iter().position(|d| d.id == deal_id) {
                return Some((stage, pos));
            }
        }
        None
    }

    pub fn get_deal(&self, deal_id: u32) -> Option<&Deal> {
        let (stage, pos) = self.find_deal(deal_id)?;
        self.stages[stage.index()].get(pos)
    }

    /// Create a deal from a draft and append it to the Qualified stage.
    /// Returns the fresh id. The draft's stage selection is ignored; stage
    /// membership is only ever changed by [`PipelineBoard::move_deal`].
    pub fn add_deal(&mut self, draft: DealDraft) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.stages[StageId::Qualified.index()].push(Deal {
            id,
            title: draft.title,
            company: draft.company,
            value: draft.value,
            probability: draft.probability,
            close_date: draft.close_date,
            contact: draft.contact,
            description: draft.description,
            notes: draft.notes,
        });
        id
    }

    /// Replace a deal's fields in place. Stage membership and position are
    /// unchanged, even though the draft carries a stage selection.
    /// Returns false if no deal has this id.
    pub fn update_deal(&mut self, deal_id: u32, draft: DealDraft) -> bool {
        let Some((stage, pos)) = self.find_deal(deal_id) else {
            return false;
        };
        let deal = &mut self.stages[stage.index()][pos];
        deal.title = draft.title;
        deal.company = draft.company;
        deal.value = draft.value;
        deal.probability = draft.probability;
        deal.close_date = draft.close_date;
        deal.contact = draft.contact;
        deal.description = draft.description;
        deal.notes = draft.notes;
        true
    }

    /// Remove a deal from the board. Returns false if no deal has this id.
    pub fn remove_deal(&mut self, deal_id: u32) -> bool {
        let Some((stage, pos)) = self.find_deal(deal_id) else {
            return false;
        };
        self.stages[stage.index()].remove(pos);
        true
    }

    /// Move a deal between stages (or reorder within one stage).
    ///
    /// Remove-then-insert: the deal leaves the source sequence first, then
    /// is inserted at `dest_index` clamped to the destination length after
    /// removal. Same stage + same index is an exact no-op to avoid useless
    /// re-renders. Returns false when the deal is not in the declared source
    /// stage; the board state is untouched in that case and the caller
    /// decides whether to report it.
    pub fn move_deal(
        &mut self,
        deal_id: u32,
        source: StageId,
        destination: StageId,
        dest_index: usize,
    ) -> bool {
        let Some(current) = self.stages[source.index()].iter().position(|d| d.id == deal_id) else {
            return false;
        };
        if source == destination && dest_index == current {
            return true;
        }
        let deal = self.stages[source.index()].remove(current);
        let dest_deals = &mut self.stages[destination.index()];
        let index = dest_index.min(dest_deals.len());
        dest_deals.insert(index, deal);
        true
    }

    /// Board pre-populated with the sample deals shown on first load.
    pub fn with_sample_deals() -> Self {
        let mut board = Self::new();
        let seed: [(StageId, &str, &str, f64, u8, &str, &str, &str, &str); 10] = [
            (StageId::Qualified, "Enterprise Software License", "TechCorp Inc", 85000.0, 40, "2024-02-15", "Sarah Johnson",
             "Large enterprise looking for comprehensive software solution",
             "Decision maker identified, budget confirmed"),
            (StageId::Qualified, "Cloud Migration Project", "Global Systems", 120000.0, 35, "2024-03-01", "Michael Chen",
             "Full cloud migration and infrastructure setup",
             "Multiple stakeholders involved, technical evaluation in progress"),
            (StageId::Qualified, "Digital Transformation", "Manufacturing Pro", 95000.0, 45, "2024-02-20", "Robert Thompson",
             "Modernizing legacy systems and processes",
             "Strong interest, waiting for board approval"),
            (StageId::Proposal, "CRM Implementation", "StartupXYZ", 45000.0, 60, "2024-01-30", "Emily Rodriguez",
             "Complete CRM setup and team training",
             "Proposal submitted, positive feedback received"),
            (StageId::Proposal, "Data Analytics Platform", "Innovation Labs", 95000.0, 65, "2024-02-10", "David Park",
             "Advanced analytics and reporting solution",
             "Demo completed successfully, negotiating terms"),
            (StageId::Proposal, "E-commerce Platform", "Retail Solutions", 75000.0, 55, "2024-02-25", "Jessica Brown",
             "Custom e-commerce platform development",
             "Proposal under review, awaiting feedback"),
            (StageId::Negotiation, "Security Audit Service", "FinTech Solutions", 32000.0, 80, "2024-01-25", "Lisa Wang",
             "Comprehensive security assessment and remediation",
             "Price negotiation in progress, timeline agreed"),
            (StageId::Negotiation, "Mobile App Development", "Health Solutions", 65000.0, 75, "2024-02-05", "Dr. Martinez",
             "Patient management mobile application",
             "Contract terms being finalized"),
            (StageId::Closed, "Website Redesign", "Creative Agency", 28000.0, 100, "2024-01-15", "James Miller",
             "Complete website redesign and optimization",
             "Project completed successfully, client very satisfied"),
            (StageId::Closed, "Process Automation", "LogisticsPro", 55000.0, 100, "2024-01-10", "Mark Johnson",
             "Automated workflow and inventory management",
             "Closed deal, implementation started"),
        ];
        for (stage, title, company, value, probability, close_date, contact, description, notes) in seed {
            let id = board.next_id;
            board.next_id += 1;
            board.stages[stage.index()].push(Deal {
                id,
                title: title.to_string(),
                company: company.to_string(),
                value,
                probability,
                close_date: close_date.to_string(),
                contact: contact.to_string(),
                description: description.to_string(),
                notes: notes.to_string(),
            });
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, value: f64) -> DealDraft {
        DealDraft {
            title: title.to_string(),
            company: "Acme Corp".to_string(),
            value,
            probability: 50,
            close_date: "2024-06-01".to_string(),
            contact: "John Smith".to_string(),
            stage: None,
            ..Default::default()
        }
    }

    /// Board with five deals in one stage, titled A..E
    fn board_with(stage: StageId, titles: &[&str]) -> (PipelineBoard, Vec<u32>) {
        let mut board = PipelineBoard::new();
        let mut ids = Vec::new();
        for title in titles {
            let id = board.add_deal(draft(title, 1000.0));
            ids.push(id);
            if stage != StageId::Qualified {
                assert!(board.move_deal(id, StageId::Qualified, stage, usize::MAX));
            }
        }
        (board, ids)
    }

    fn titles(board: &PipelineBoard, stage: StageId) -> Vec<String> {
        board.deals_in(stage).iter().map(|d| d.title.clone()).collect()
    }

    fn all_ids(board: &PipelineBoard) -> Vec<u32> {
        let mut ids: Vec<u32> = StageId::ALL
            .iter()
            .flat_map(|&s| board.deals_in(s).iter().map(|d| d.id))
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_add_appends_to_qualified() {
        let mut board = PipelineBoard::new();
        let mut d = draft("New Deal", 5000.0);
        d.stage = Some(StageId::Negotiation); // form selection is ignored
        let id = board.add_deal(d);
        assert_eq!(board.find_deal(id), Some((StageId::Qualified, 0)));
    }

    #[test]
    fn test_same_stage_reorder() {
        let (mut board, ids) = board_with(StageId::Proposal, &["A", "B", "C", "D", "E"]);
        // C (index 2) to the front
        assert!(board.move_deal(ids[2], StageId::Proposal, StageId::Proposal, 0));
        assert_eq!(titles(&board, StageId::Proposal), ["C", "A", "B", "D", "E"]);
    }

    #[test]
    fn test_cross_stage_move() {
        let (mut board, ids) = board_with(StageId::Qualified, &["A", "B", "C"]);
        for title in ["X", "Y"] {
            let id = board.add_deal(draft(title, 1000.0));
            assert!(board.move_deal(id, StageId::Qualified, StageId::Proposal, usize::MAX));
        }
        assert!(board.move_deal(ids[1], StageId::Qualified, StageId::Proposal, 1));
        assert_eq!(titles(&board, StageId::Qualified), ["A", "C"]);
        assert_eq!(titles(&board, StageId::Proposal), ["X", "B", "Y"]);
    }

    #[test]
    fn test_move_to_same_slot_is_noop() {
        let (mut board, ids) = board_with(StageId::Qualified, &["A", "B", "C"]);
        let before = board.clone();
        assert!(board.move_deal(ids[1], StageId::Qualified, StageId::Qualified, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_clamps_destination_index() {
        let (mut board, ids) = board_with(StageId::Qualified, &["A", "B"]);
        assert!(board.move_deal(ids[0], StageId::Qualified, StageId::Closed, 99));
        assert_eq!(titles(&board, StageId::Closed), ["A"]);
        // Reorder past the end of the same (shortened) stage
        assert!(board.move_deal(ids[1], StageId::Qualified, StageId::Qualified, 99));
        assert_eq!(titles(&board, StageId::Qualified), ["B"]);
    }

    #[test]
    fn test_move_missing_deal_leaves_board_untouched() {
        let (mut board, ids) = board_with(StageId::Qualified, &["A", "B"]);
        let before = board.clone();
        // Wrong source stage
        assert!(!board.move_deal(ids[0], StageId::Proposal, StageId::Closed, 0));
        // Unknown id
        assert!(!board.move_deal(999, StageId::Qualified, StageId::Closed, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_partition_invariant_across_operations() {
        let mut board = PipelineBoard::with_sample_deals();
        let mut live = all_ids(&board);
        assert_eq!(live.len(), 10);

        let added = board.add_deal(draft("Fresh", 1000.0));
        live.push(added);
        live.sort_unstable();

        assert!(board.move_deal(added, StageId::Qualified, StageId::Negotiation, 0));
        assert!(board.move_deal(1, StageId::Qualified, StageId::Closed, 1));
        assert!(board.move_deal(1, StageId::Closed, StageId::Closed, 0));
        // Failed move must not disturb the partition
        assert!(!board.move_deal(added, StageId::Qualified, StageId::Proposal, 0));

        assert_eq!(all_ids(&board), live);

        assert!(board.remove_deal(added));
        live.retain(|&id| id != added);
        assert_eq!(all_ids(&board), live);
    }

    #[test]
    fn test_update_keeps_stage_and_position() {
        let (mut board, ids) = board_with(StageId::Negotiation, &["A", "B", "C"]);
        let mut patch = draft("B renamed", 9000.0);
        patch.stage = Some(StageId::Closed); // must be ignored
        assert!(board.update_deal(ids[1], patch));
        assert_eq!(board.find_deal(ids[1]), Some((StageId::Negotiation, 1)));
        let deal = board.get_deal(ids[1]).unwrap();
        assert_eq!(deal.title, "B renamed");
        assert_eq!(deal.value, 9000.0);
        assert!(!board.update_deal(999, draft("nope", 1.0)));
    }

    #[test]
    fn test_stage_totals() {
        let mut board = PipelineBoard::new();
        assert_eq!(board.stage_total(StageId::Qualified), 0.0);
        let id = board.add_deal(draft("A", 1000.0));
        assert_eq!(board.stage_total(StageId::Qualified), 1000.0);
        board.add_deal(draft("B", 250.0));
        assert_eq!(board.stage_total(StageId::Qualified), 1250.0);

        let system_total = board.total_value();
        assert!(board.move_deal(id, StageId::Qualified, StageId::Proposal, 0));
        assert_eq!(board.stage_total(StageId::Qualified), 250.0);
        assert_eq!(board.stage_total(StageId::Proposal), 1000.0);
        assert_eq!(board.total_value(), system_total);
    }

    #[test]
    fn test_sample_board_shape() {
        let board = PipelineBoard::with_sample_deals();
        assert_eq!(board.deal_count(StageId::Qualified), 3);
        assert_eq!(board.deal_count(StageId::Proposal), 3);
        assert_eq!(board.deal_count(StageId::Negotiation), 2);
        assert_eq!(board.deal_count(StageId::Closed), 2);
        assert_eq!(board.stage_total(StageId::Qualified), 300000.0);
        assert_eq!(board.stage_total(StageId::Closed), 83000.0);
        // Closed is not terminal: the generic move still applies
        let mut board = board;
        let closed_id = board.deals_in(StageId::Closed)[0].id;
        assert!(board.move_deal(closed_id, StageId::Closed, StageId::Negotiation, 0));
    }
}
