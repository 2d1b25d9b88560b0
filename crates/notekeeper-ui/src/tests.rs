#[cfg(test)]
mod tests {
    use crate::state::*;
    use notekeeper_core::auth::INVALID_CREDENTIALS;
    use notekeeper_core::editor::{NewNpcForm, SessionEditor};
    use notekeeper_types::auth::Credentials;
    use notekeeper_types::event::{AppEvent, Envelope};
    use notekeeper_types::npc::Npc;
    use notekeeper_types::session::{Session, SessionType};

    fn admin() -> Credentials {
        Credentials::new("admin", "admin")
    }

    fn signed_in() -> UiState {
        let mut state = UiState::new();
        state.process_events(vec![AppEvent::LoginSucceeded {
            credentials: admin(),
            username: "admin".to_string(),
        }]);
        state
    }

    fn session(id: &str, kind: SessionType) -> Session {
        Session {
            id: id.to_string(),
            title: format!("Session {}", id),
            session_type: kind,
            ..Default::default()
        }
    }

    fn npc(id: &str, name: &str) -> Npc {
        Npc {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(!state.auth.is_signed_in());
        assert_eq!(state.view, View::Sessions);
        assert!(state.sessions.is_empty());
        assert!(state.npcs.is_empty());
        assert!(state.editor.is_none());
        assert_eq!(state.new_session_type, SessionType::Structured);
        assert!(state.pending_delete.is_none());
        assert!(state.alert.is_none());
        assert!(state.welcome_text().is_none());
    }

    #[test]
    fn test_login_success_requests_refresh_once() {
        let mut state = UiState::new();
        let follow_ups = state.process_events(vec![
            AppEvent::LoginSucceeded {
                credentials: admin(),
                username: "admin".to_string(),
            },
            AppEvent::LoginSucceeded {
                credentials: admin(),
                username: "admin".to_string(),
            },
        ]);
        assert_eq!(follow_ups, vec![Action::RefreshAll]);
        assert_eq!(state.auth.credentials(), Some(&admin()));
        assert_eq!(state.welcome_text().as_deref(), Some("Welcome, admin"));
    }

    #[test]
    fn test_login_rejected_shows_message() {
        let mut state = UiState::new();
        let follow_ups = state.process_events(vec![AppEvent::LoginRejected]);
        assert!(follow_ups.is_empty());
        assert!(!state.auth.is_signed_in());
        assert_eq!(state.auth.form.error.as_deref(), Some(INVALID_CREDENTIALS));
    }

    #[test]
    fn test_snapshots_replace_wholesale() {
        let mut state = signed_in();
        state.process_events(vec![AppEvent::SessionsLoaded(vec![
            session("1", SessionType::Structured),
            session("2", SessionType::FreeForm),
        ])]);
        assert_eq!(state.sessions.len(), 2);

        state.process_events(vec![AppEvent::SessionsLoaded(vec![session("3", SessionType::FreeForm)])]);
        assert_eq!(state.sessions.len(), 1);
        assert_eq!(state.sessions[0].id, "3");
    }

    #[test]
    fn test_snapshots_ignored_when_signed_out() {
        let mut state = UiState::new();
        state.process_events(vec![
            AppEvent::SessionsLoaded(vec![session("1", SessionType::Structured)]),
            AppEvent::NpcsLoaded(vec![npc("n1", "Mira")]),
        ]);
        assert!(state.sessions.is_empty());
        assert!(state.npcs.is_empty());
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut state = signed_in();
        state.process_events(vec![AppEvent::NpcsLoaded(vec![npc("n1", "Mira")])]);
        state.new_session();
        state.logout();
        assert!(!state.auth.is_signed_in());
        assert!(state.npcs.is_empty());
        assert!(state.editor.is_none());
    }

    fn login_as(state: &mut UiState, name: &str) -> u64 {
        state.process_envelopes(vec![Envelope {
            login: 0,
            event: AppEvent::LoginSucceeded {
                credentials: Credentials::new(name, "pw"),
                username: name.to_string(),
            },
        }]);
        state.auth.login_id().unwrap()
    }

    #[test]
    fn test_late_events_from_previous_login_dropped() {
        let mut state = UiState::new();
        let alice = login_as(&mut state, "alice");
        state.logout();
        let bob = login_as(&mut state, "bob");
        assert_ne!(alice, bob);
        state.new_session();

        state.process_envelopes(vec![
            Envelope {
                login: alice,
                event: AppEvent::SessionsLoaded(vec![session("alice-secret", SessionType::Structured)]),
            },
            Envelope {
                login: alice,
                event: AppEvent::SessionSaved {
                    session_id: "alice-secret".to_string(),
                },
            },
        ]);
        assert!(state.sessions.is_empty());
        assert!(state.editor.is_some());
        assert_eq!(state.welcome_text().as_deref(), Some("Welcome, bob"));

        state.process_envelopes(vec![Envelope {
            login: bob,
            event: AppEvent::SessionsLoaded(vec![session("bob-1", SessionType::FreeForm)]),
        }]);
        assert_eq!(state.sessions.len(), 1);
        assert_eq!(state.sessions[0].id, "bob-1");
    }

    #[test]
    fn test_new_session_uses_preselected_variant() {
        let mut state = signed_in();
        state.new_session_type = SessionType::FreeForm;
        state.new_session();
        assert!(matches!(state.editor, Some(SessionEditor::FreeForm(_))));
    }

    #[test]
    fn test_open_session_uses_stored_variant() {
        let mut state = signed_in();
        state.process_events(vec![AppEvent::SessionsLoaded(vec![session("7", SessionType::FreeForm)])]);
        state.new_session_type = SessionType::Structured;
        assert!(state.open_session("7"));
        let editor = state.editor.as_ref().unwrap();
        assert_eq!(editor.session_type(), SessionType::FreeForm);
        assert_eq!(editor.session_id(), Some("7"));
        assert!(!state.open_session("missing"));
    }

    #[test]
    fn test_save_editor_create_then_close_on_saved() {
        let mut state = signed_in();
        state.new_session();
        if let Some(SessionEditor::Structured(editor)) = state.editor.as_mut() {
            editor.title = "Session 12".to_string();
        }
        match state.save_editor() {
            Some(Action::SaveSession { session_id, draft }) => {
                assert!(session_id.is_none());
                assert_eq!(draft.title, "Session 12");
            }
            other => panic!("Wrong action: {:?}", other),
        }

        state.process_events(vec![AppEvent::SessionSaved {
            session_id: "s1".to_string(),
        }]);
        assert!(state.editor.is_none());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = signed_in();
        state.request_delete(PendingDelete::Session {
            id: "s1".to_string(),
            title: "Session 1".to_string(),
        });
        state.cancel_delete();
        assert!(state.pending_delete.is_none());
        assert!(state.confirm_delete().is_none());

        state.request_delete(PendingDelete::Session {
            id: "s1".to_string(),
            title: "Session 1".to_string(),
        });
        assert_eq!(
            state.confirm_delete(),
            Some(Action::DeleteSession {
                session_id: "s1".to_string()
            })
        );
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_delete_prompts() {
        let session = PendingDelete::Session {
            id: "s1".to_string(),
            title: "t".to_string(),
        };
        assert_eq!(session.prompt(), "Are you sure you want to delete this session?");
        let npc = PendingDelete::Npc {
            id: "n1".to_string(),
            name: "Mira".to_string(),
        };
        assert!(npc.prompt().contains("Mira"));
    }

    #[test]
    fn test_deleted_session_closes_its_editor() {
        let mut state = signed_in();
        state.process_events(vec![AppEvent::SessionsLoaded(vec![session("4", SessionType::Structured)])]);
        state.open_session("4");
        state.process_events(vec![AppEvent::SessionDeleted {
            session_id: "4".to_string(),
        }]);
        assert!(state.editor.is_none());
    }

    #[test]
    fn test_entering_npc_view_refetches() {
        let mut state = signed_in();
        assert_eq!(state.show_view(View::Npcs), Some(Action::RefreshNpcs));
        assert_eq!(state.show_view(View::Npcs), None);
        assert_eq!(state.show_view(View::Sessions), None);
        assert_eq!(state.view, View::Sessions);
    }

    #[test]
    fn test_npc_count_text() {
        let mut state = signed_in();
        state.process_events(vec![AppEvent::NpcsLoaded(vec![npc("a", "A"), npc("b", "B")])]);
        assert_eq!(state.npc_count_text(), "2 NPCs tracked");
    }

    #[test]
    fn test_npc_saved_leaves_edit_mode() {
        let mut state = signed_in();
        let mira = npc("n1", "Mira");
        state.process_events(vec![AppEvent::NpcsLoaded(vec![mira.clone()])]);
        state.npc_edits.begin(&mira);
        state.process_events(vec![AppEvent::NpcSaved {
            npc_id: "n1".to_string(),
        }]);
        assert!(!state.npc_edits.is_editing("n1"));
    }

    #[test]
    fn test_npc_created_closes_form() {
        let mut state = signed_in();
        state.new_npc = Some(NewNpcForm::default());
        state.process_events(vec![AppEvent::NpcCreated {
            npc_id: "n9".to_string(),
        }]);
        assert!(state.new_npc.is_none());
    }

    #[test]
    fn test_extraction_success_alerts_and_clears_panel() {
        let mut state = signed_in();
        state.new_session_type = SessionType::FreeForm;
        state.new_session();
        if let Some(SessionEditor::FreeForm(editor)) = state.editor.as_mut() {
            editor.content = "We met Thorin".to_string();
            editor.capture_selection(7..13);
        }

        state.process_events(vec![AppEvent::NpcExtracted {
            npc_name: "Thorin".to_string(),
            action: "updated".to_string(),
        }]);
        assert_eq!(state.alert.as_deref(), Some("NPC \"Thorin\" updated successfully!"));
        match state.editor.as_ref() {
            Some(SessionEditor::FreeForm(editor)) => assert!(editor.extraction.is_none()),
            _ => panic!("Free-form editor expected"),
        }

        state.dismiss_alert();
        assert!(state.alert.is_none());
    }

    #[test]
    fn test_extraction_failure_keeps_panel() {
        let mut state = signed_in();
        state.new_session_type = SessionType::FreeForm;
        state.new_session();
        if let Some(SessionEditor::FreeForm(editor)) = state.editor.as_mut() {
            editor.content = "We met Thorin".to_string();
            editor.capture_selection(7..13);
        }

        state.process_events(vec![AppEvent::ExtractionFailed]);
        assert_eq!(state.alert.as_deref(), Some("Error extracting NPC"));
        match state.editor.as_ref() {
            Some(SessionEditor::FreeForm(editor)) => assert!(editor.extraction.is_some()),
            _ => panic!("Free-form editor expected"),
        }
    }

    #[test]
    fn test_suggestions_reach_free_form_editor() {
        let mut state = signed_in();
        state.new_session_type = SessionType::FreeForm;
        state.new_session();
        state.process_events(vec![AppEvent::NpcSuggestions(vec!["Thorin".to_string()])]);
        match state.editor.as_ref() {
            Some(SessionEditor::FreeForm(editor)) => assert_eq!(editor.suggestions, vec!["Thorin"]),
            _ => panic!("Free-form editor expected"),
        }
    }
}
