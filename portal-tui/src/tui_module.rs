// File: portal-tui/src/tui_module.rs

use portal_common::models::{Benefit, StudentProfile};
use std::collections::HashMap;
use std::sync::Mutex;

/// Ephemeral annotation kept per rendered benefit card (title and cost), so
/// redemption does not re-fetch the catalog.
#[derive(Debug, Clone)]
pub struct BenefitTag {
    pub titulo: String,
    pub custo: i64,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    /// Last loaded/saved profile; feeds the editable fields and the email
    /// receipt.
    pub profile: Option<StudentProfile>,
    /// One entry per benefit card currently "on screen".
    pub benefit_tags: HashMap<i64, BenefitTag>,
    /// The most recently rendered QR code; replaced (never stacked) on each
    /// redemption.
    pub last_qr: Option<String>,
}

/// Holds the dashboard's client-side state between commands.
pub struct PortalTuiModule {
    pub dashboard: Mutex<DashboardState>,
}

impl PortalTuiModule {
    pub fn new() -> Self {
        Self {
            dashboard: Mutex::new(DashboardState::default()),
        }
    }

    pub fn remember_profile(&self, profile: &StudentProfile) {
        self.dashboard.lock().unwrap().profile = Some(profile.clone());
    }

    pub fn profile(&self) -> Option<StudentProfile> {
        self.dashboard.lock().unwrap().profile.clone()
    }

    /// Replaces the card annotations with the freshly rendered catalog.
    pub fn remember_benefits(&self, benefits: &[Benefit]) {
        let tags = benefits
            .iter()
            .map(|b| {
                (
                    b.id,
                    BenefitTag {
                        titulo: b.titulo.clone(),
                        custo: b.custo,
                    },
                )
            })
            .collect();
        self.dashboard.lock().unwrap().benefit_tags = tags;
    }

    pub fn benefit_tag(&self, id: i64) -> Option<BenefitTag> {
        self.dashboard.lock().unwrap().benefit_tags.get(&id).cloned()
    }

    /// Removes one card after a successful redemption. Returns whether the
    /// card was present.
    pub fn remove_benefit_card(&self, id: i64) -> bool {
        self.dashboard.lock().unwrap().benefit_tags.remove(&id).is_some()
    }

    pub fn card_count(&self) -> usize {
        self.dashboard.lock().unwrap().benefit_tags.len()
    }

    /// Stores the newly rendered QR, discarding any previous one.
    pub fn set_qr(&self, qr: String) {
        self.dashboard.lock().unwrap().last_qr = Some(qr);
    }

    pub fn reset_dashboard(&self) {
        *self.dashboard.lock().unwrap() = DashboardState::default();
    }
}

impl Default for PortalTuiModule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benefit(id: i64, titulo: &str, custo: i64) -> Benefit {
        Benefit {
            id,
            titulo: titulo.to_string(),
            descricao: None,
            custo,
            image: None,
        }
    }

    #[test]
    fn remove_card_drops_exactly_the_redeemed_benefit() {
        let tui = PortalTuiModule::new();
        tui.remember_benefits(&[benefit(1, "Caneca", 30), benefit(2, "Vale-lanche", 50)]);

        assert!(tui.remove_benefit_card(2));
        assert_eq!(tui.card_count(), 1);
        assert!(tui.benefit_tag(1).is_some());
        assert!(tui.benefit_tag(2).is_none());
    }

    #[test]
    fn remove_card_is_a_no_op_for_unknown_ids() {
        let tui = PortalTuiModule::new();
        tui.remember_benefits(&[benefit(1, "Caneca", 30)]);

        assert!(!tui.remove_benefit_card(99));
        assert_eq!(tui.card_count(), 1);
    }

    #[test]
    fn remember_benefits_replaces_the_previous_catalog() {
        let tui = PortalTuiModule::new();
        tui.remember_benefits(&[benefit(1, "Caneca", 30)]);
        tui.remember_benefits(&[benefit(2, "Vale-lanche", 50)]);

        assert!(tui.benefit_tag(1).is_none());
        assert_eq!(tui.benefit_tag(2).unwrap().custo, 50);
    }

    #[test]
    fn set_qr_replaces_the_previous_code() {
        let tui = PortalTuiModule::new();
        tui.set_qr("first".to_string());
        tui.set_qr("second".to_string());
        assert_eq!(
            tui.dashboard.lock().unwrap().last_qr.as_deref(),
            Some("second")
        );
    }
}
