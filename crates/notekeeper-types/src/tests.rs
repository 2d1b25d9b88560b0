#[cfg(test)]
mod tests {
    use crate::auth::*;
    use crate::config::*;
    use crate::error::*;
    use crate::npc::*;
    use crate::session::*;

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_type_wire_names() {
        assert_eq!(serde_json::to_string(&SessionType::Structured).unwrap(), r#""structured""#);
        assert_eq!(serde_json::to_string(&SessionType::FreeForm).unwrap(), r#""free_form""#);
    }

    #[test]
    fn test_session_without_type_is_free_form() {
        let json = r#"{"id":"s1","title":"Old notes","content":"We met a dragon"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_type, SessionType::FreeForm);
        assert_eq!(session.content, "We met a dragon");
        assert!(session.structured_data.is_none());
    }

    #[test]
    fn test_session_with_partial_structured_data() {
        let json = r#"{
            "id": "s2",
            "title": "Session 3",
            "session_type": "structured",
            "created_at": "2024-05-01T18:30:00.123456",
            "structured_data": {
                "session_number": 3,
                "players_present": ["Alice"],
                "combat_encounters": [{"id": "c1", "enemies": "Wolves"}]
            }
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        let data = session.structured_data.as_ref().unwrap();
        assert_eq!(data.session_number, Some(3));
        assert_eq!(data.players_present, vec!["Alice"]);
        assert_eq!(data.combat_encounters[0].enemies, "Wolves");
        assert!(data.combat_encounters[0].outcome.is_empty());
        assert!(data.loot.is_empty());
        assert_eq!(session.session_number(), Some(3));
    }

    #[test]
    fn test_goal_preview_truncates_to_100_chars() {
        let mut data = StructuredData::default();
        data.session_goal = "x".repeat(150);
        let session = Session {
            structured_data: Some(data),
            ..Default::default()
        };
        let preview = session.goal_preview().unwrap();
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_content_preview() {
        let short = Session {
            content: "Short notes".to_string(),
            ..Default::default()
        };
        assert_eq!(short.content_preview().as_deref(), Some("Short notes"));

        let long = Session {
            content: "ä".repeat(250),
            ..Default::default()
        };
        let preview = long.content_preview().unwrap();
        assert_eq!(preview.chars().count(), 203);
        assert!(Session::default().content_preview().is_none());
    }

    #[test]
    fn test_goal_preview_absent_when_empty() {
        let session = Session {
            structured_data: Some(StructuredData::default()),
            ..Default::default()
        };
        assert!(session.goal_preview().is_none());
        assert!(Session::default().goal_preview().is_none());
    }

    #[test]
    fn test_players_line() {
        let mut data = StructuredData::default();
        data.players_present = vec!["Alice".to_string(), "Bob".to_string()];
        let session = Session {
            structured_data: Some(data),
            ..Default::default()
        };
        assert_eq!(session.players_line().as_deref(), Some("Alice, Bob"));
    }

    #[test]
    fn test_structured_draft_serialization() {
        let draft = SessionDraft::structured("Session 12", StructuredData::default());
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["session_type"], "structured");
        assert_eq!(json["title"], "Session 12");
        assert!(json.get("content").is_none());
        assert!(json["structured_data"]["players_present"].is_array());
    }

    #[test]
    fn test_free_form_draft_serialization() {
        let draft = SessionDraft::free_form("Notes", "The party rested.");
        let json: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["session_type"], "free_form");
        assert_eq!(json["content"], "The party rested.");
        assert!(json.get("structured_data").is_none());
    }

    #[test]
    fn test_mission_status_wire_names() {
        assert_eq!(serde_json::to_string(&MissionStatus::InProgress).unwrap(), r#""In Progress""#);
        assert_eq!(serde_json::to_string(&MissionStatus::OnHold).unwrap(), r#""On Hold""#);
        let status: MissionStatus = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(status, MissionStatus::Completed);
    }

    #[test]
    fn test_mission_status_labels() {
        assert_eq!(MissionStatus::all().len(), 4);
        for status in MissionStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_blank_items_carry_id() {
        let mission = Mission::blank("m1".to_string());
        assert_eq!(mission.id(), "m1");
        assert_eq!(mission.status, MissionStatus::InProgress);
        assert!(mission.mission_name.is_empty());

        let npc = NpcEncounter::blank("n1".to_string());
        assert!(!npc.first_encounter);
    }

    #[test]
    fn test_temp_ids_are_unique() {
        let a = crate::temp_id();
        let b = crate::temp_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    // ─── NPC Tests ───────────────────────────────────────────

    #[test]
    fn test_npc_status_unknown_fallback() {
        let status: NpcStatus = serde_json::from_str(r#""Missing""#).unwrap();
        assert_eq!(status, NpcStatus::Unknown);
        let status: NpcStatus = serde_json::from_str(r#""Deceased""#).unwrap();
        assert_eq!(status, NpcStatus::Deceased);
    }

    #[test]
    fn test_npc_from_backend() {
        let json = r#"{
            "id": "n1",
            "name": "Thorin",
            "status": "Alive",
            "notes": "First mentioned: sold us a sword",
            "history": [
                {"session_id": "s1", "interaction": "sold us a sword", "timestamp": "2024-05-01T18:30:00"}
            ],
            "created_at": "2024-05-01T18:30:00"
        }"#;
        let npc: Npc = serde_json::from_str(json).unwrap();
        assert_eq!(npc.name, "Thorin");
        assert_eq!(npc.status, NpcStatus::Alive);
        assert!(npc.race.is_empty());
        assert_eq!(npc.history.len(), 1);
        assert_eq!(npc.history[0].session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_extraction_outcome() {
        let json = r#"{"action": "created", "npc": {"id": "n9", "name": "Mira"}}"#;
        let outcome: ExtractionOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.action, "created");
        assert_eq!(outcome.npc.unwrap().name, "Mira");
    }

    #[test]
    fn test_format_timestamp_naive() {
        let formatted = format_timestamp("2024-05-01T18:30:00.123456");
        assert!(formatted.starts_with("2024-05-0"));
        assert_eq!(formatted.len(), "2024-05-01 18:30".len());
    }

    #[test]
    fn test_format_timestamp_unparseable() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    // ─── Auth Tests ──────────────────────────────────────────

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_auth_check_parsing() {
        let check: AuthCheck =
            serde_json::from_str(r#"{"authenticated": true, "username": "admin"}"#).unwrap();
        assert!(check.authenticated);
        assert_eq!(check.username.as_deref(), Some("admin"));

        let check: AuthCheck = serde_json::from_str("{}").unwrap();
        assert!(!check.authenticated);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(!config.has_backend_url());
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.api_base(), "/api");
    }

    #[test]
    fn test_api_base_joins_single_slash() {
        let config = ClientConfig::with_backend_url("https://notes.example.com/");
        assert_eq!(config.api_base(), "https://notes.example.com/api");
        assert_eq!(
            config.endpoint("/sessions/abc/export"),
            "https://notes.example.com/api/sessions/abc/export"
        );
    }

    #[test]
    fn test_with_backend_url_trims() {
        let config = ClientConfig::with_backend_url("  http://localhost:8001 ");
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert!(config.has_backend_url());
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = NotesError::Http { status: 404, body: "Session not found".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: Session not found");

        let err = NotesError::Network("offline".to_string());
        assert_eq!(err.to_string(), "Network error: offline");

        assert_eq!(NotesError::Unauthorized.to_string(), "Unauthorized");

        let err = NotesError::Config("page origin is \"null\"".to_string());
        assert_eq!(err.to_string(), "Configuration error: page origin is \"null\"");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: NotesError = serde_err.into();
        assert!(matches!(err, NotesError::Serialization(_)));
    }
}
