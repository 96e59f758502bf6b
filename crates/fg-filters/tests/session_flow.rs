//! End-to-end filter session: channel file, gestures, debounced search.

use std::time::Duration;

use fg_core::{ChannelGroup, ChannelId, Decade, FilterCriteria, Genre, SortOrder};
use fg_filters::{
    Action, BulkToggle, ChannelSource, FilterSession, FilterStore, JsonFileSource, RecordingSink,
    TelemetryEvent,
};

const DELAY: Duration = Duration::from_millis(500);

const CHANNELS: &str = r#"{
    "channels": [
        {"id": 1, "name": "RTP1", "is_premium": false},
        {"id": 2, "name": "TVCine Top", "is_premium": true},
        {"id": 3, "name": "SIC", "is_premium": false},
        {"id": 4, "name": "RTP2", "is_premium": false},
        {"id": 5, "name": "TVCine Edition", "is_premium": true},
        {"id": 6, "name": "TVI", "is_premium": false},
        {"id": 7, "name": "AXN", "is_premium": false},
        {"id": 8, "name": "Hollywood", "is_premium": false},
        {"id": 9, "name": "TVCine Emotion", "is_premium": true},
        {"id": 10, "name": "FOX Movies", "is_premium": false}
    ]
}"#;

fn load_source() -> JsonFileSource {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("channels.json");
    std::fs::write(&path, CHANNELS).unwrap();
    let path = camino::Utf8PathBuf::from_path_buf(path).unwrap();
    JsonFileSource::load(&path).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_full_session() {
    let listing = load_source().listing();
    let sink = RecordingSink::new();
    let mut session = FilterSession::new(&sink, DELAY);

    session.select_sort(SortOrder::Rotten);
    session.select_genre(Some(Genre::Thriller));
    session.select_year(Some(Decade::D1990));

    session.type_search("s").unwrap();
    tokio::time::advance(Duration::from_millis(100)).await;
    session.type_search("se").unwrap();
    tokio::time::advance(Duration::from_millis(100)).await;
    session.type_search("se7en").unwrap();
    assert_eq!(session.state().search, "");
    assert!(session.next_search_commit().await);

    // Hide every standard channel, then bring one back.
    assert!(session.bulk_toggle(ChannelGroup::Standard, &listing));
    let sic = listing.find(ChannelId(3)).unwrap();
    session.toggle_channel(sic);

    let selection = session.selection(&listing);
    let standard = selection.group(ChannelGroup::Standard).unwrap();
    assert_eq!(standard.rows.len(), 7);
    assert_eq!(standard.shown_count(), 1);
    assert_eq!(standard.bulk, BulkToggle::HideAll);
    let premium = selection.group(ChannelGroup::Premium).unwrap();
    assert_eq!(premium.shown_count(), 3);

    assert_eq!(
        sink.names(),
        vec![
            "sort",
            "genre",
            "year",
            "search",
            "all channels",
            "channel"
        ]
    );
    assert_eq!(
        sink.events()[5],
        TelemetryEvent::Channel {
            channel: ChannelId(3),
            channel_name: "SIC".to_owned(),
            checked: true,
        }
    );

    let state = session.into_state();
    assert_eq!(state.search, "se7en");
    assert_eq!(state.channels.len(), 6);
    assert!(state.premium.is_empty());
}

#[test]
fn test_criteria_survive_json() {
    let mut store = FilterStore::new();
    store.dispatch(Action::SetYear(Some(Decade::D1950)));
    store.dispatch(Action::SetPremium(vec![ChannelId(9), ChannelId(2)]));

    let json = serde_json::to_string(store.state()).unwrap();
    assert!(json.contains(r#""premium":[2,9]"#));

    let restored: FilterCriteria = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, store.state());
}

#[test]
fn test_actions_from_wire() {
    let actions: Vec<Action> = serde_json::from_str(
        r#"[
            {"type": "SET_GENRE", "payload": "any"},
            {"type": "TOGGLE_NATIONAL"},
            {"type": "SET_CHANNELS", "payload": [1, 4]},
            {"type": "TOGGLE_CHANNEL", "payload": 4}
        ]"#,
    )
    .unwrap();

    let mut store = FilterStore::new();
    for action in actions {
        store.dispatch(action);
    }

    assert_eq!(store.state().genre, None);
    assert!(store.state().national_only);
    assert_eq!(fg_core::sorted_ids(&store.state().channels), vec![ChannelId(1)]);
}
