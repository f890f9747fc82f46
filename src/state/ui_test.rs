use super::*;

// =============================================================
// defaults
// =============================================================

#[test]
fn ui_state_defaults_to_home_not_syncing() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::Home);
    assert!(!state.syncing);
}

#[test]
fn tab_default_is_home() {
    assert_eq!(Tab::default(), Tab::Home);
}

// =============================================================
// tab set
// =============================================================

#[test]
fn tab_all_lists_each_variant_once() {
    for (i, a) in Tab::ALL.iter().enumerate() {
        for (j, b) in Tab::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn tab_labels_match_sidebar_copy() {
    assert_eq!(Tab::Home.label(), "Home");
    assert_eq!(Tab::EighthPapers.label(), "8th Papers");
    assert_eq!(Tab::NinthPapers.label(), "9th Papers");
    assert_eq!(Tab::Donations.label(), "Donate");
    assert_eq!(Tab::Settings.label(), "Vault");
}

#[test]
fn paper_category_storage_labels() {
    assert_eq!(PaperCategory::Eighth.as_str(), "8th");
    assert_eq!(PaperCategory::Ninth.as_str(), "9th");
}

// =============================================================
// panel dispatch
// =============================================================

#[test]
fn admin_home_shows_admin_dashboard() {
    assert_eq!(active_panel(Role::Admin, Tab::Home), Panel::AdminDashboard);
}

#[test]
fn student_home_shows_home_panel() {
    assert_eq!(active_panel(Role::Student, Tab::Home), Panel::Home);
}

#[test]
fn ninth_tab_dispatches_to_ninth_papers_for_students() {
    assert_eq!(
        active_panel(Role::Student, Tab::NinthPapers),
        Panel::Papers(PaperCategory::Ninth)
    );
}

#[test]
fn non_home_tabs_ignore_role() {
    for tab in [Tab::EighthPapers, Tab::NinthPapers, Tab::Donations, Tab::Settings] {
        assert_eq!(
            active_panel(Role::Student, tab),
            active_panel(Role::Admin, tab),
            "role must only matter on the home tab"
        );
    }
}

#[test]
fn eighth_tab_dispatches_to_eighth_papers() {
    assert_eq!(
        active_panel(Role::Admin, Tab::EighthPapers),
        Panel::Papers(PaperCategory::Eighth)
    );
}
