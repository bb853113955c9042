use ratatui::layout::{Position, Rect};

use crate::directory::{Direction, Directory, PersonRecord};
use crate::fetcher::FetchError;
use crate::tui::grid;
use crate::tui::App;

fn sample_record(first: &str, last: &str) -> PersonRecord {
    PersonRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: "(555) 555-0100".to_string(),
        street: "4732 Sunset Blvd".to_string(),
        city: "Portland".to_string(),
        state: "Oregon".to_string(),
        postcode: "97035".to_string(),
        picture_url: "https://example.com/portraits/1.jpg".to_string(),
        birth_date: "1990-03-07T10:20:45.123Z".to_string(),
    }
}

fn sample_records(count: usize) -> Vec<PersonRecord> {
    (0..count)
        .map(|i| sample_record(&format!("First{i}"), &format!("Last{i}")))
        .collect()
}

#[test]
fn advance_next_cycles_back_to_start() {
    for n in [1usize, 3, 12] {
        for start in 0..n {
            let mut dir = Directory::new();
            dir.load(sample_records(n));
            dir.set_cursor(start);
            for _ in 0..n {
                dir.advance(Direction::Next);
            }
            assert_eq!(dir.cursor(), Some(start), "cycle length {n} from {start}");
        }
    }
}

#[test]
fn advance_prev_is_inverse_of_next() {
    let mut dir = Directory::new();
    dir.load(sample_records(7));
    for start in 0..7 {
        dir.set_cursor(start);
        dir.advance(Direction::Next);
        dir.advance(Direction::Prev);
        assert_eq!(dir.cursor(), Some(start));
    }
}

#[test]
fn advance_wraps_at_both_bounds() {
    let mut dir = Directory::new();
    dir.load(sample_records(12));
    dir.set_cursor(11);
    assert_eq!(dir.advance(Direction::Next), 0);
    dir.set_cursor(0);
    assert_eq!(dir.advance(Direction::Prev), 11);
}

#[test]
fn store_lookup_by_index_and_emptiness() {
    let mut dir = Directory::new();
    assert!(dir.is_empty());
    assert!(dir.get(0).is_none());
    dir.load(sample_records(3));
    assert!(!dir.is_empty());
    assert_eq!(dir.get(2).map(|r| r.full_name()), Some("First2 Last2".to_string()));
    assert!(dir.get(3).is_none());
    dir.set_cursor(1);
    assert_eq!(dir.focused().map(|r| r.full_name()), Some("First1 Last1".to_string()));
}

#[test]
#[should_panic]
fn set_cursor_out_of_range_panics() {
    let mut dir = Directory::new();
    dir.load(sample_records(3));
    dir.set_cursor(3);
}

#[test]
fn date_format_zero_pads_month_and_day() {
    assert_eq!(crate::utils::format_date(3, 7, 1990), "03/07/1990");
    assert_eq!(crate::utils::format_date(12, 31, 2000), "12/31/2000");
}

#[test]
fn birthday_parses_iso_date_time() {
    let record = sample_record("Anna", "Smith");
    assert_eq!(record.birthday(), "03/07/1990");
}

#[test]
fn empty_query_shows_all_cards() {
    let records = sample_records(5);
    assert_eq!(grid::visible_indices(&records, ""), vec![0, 1, 2, 3, 4]);
}

#[test]
fn unmatched_query_hides_all_cards() {
    let records = sample_records(5);
    assert!(grid::visible_indices(&records, "zzz-no-such-name").is_empty());
}

#[test]
fn filter_is_case_insensitive() {
    let mut records = sample_records(3);
    records[1] = sample_record("Anna", "Smith");
    assert_eq!(grid::visible_indices(&records, "ANN"), vec![1]);
}

#[test]
fn refiltering_brings_hidden_cards_back() {
    let mut app = App::new();
    app.on_fetch_result(Ok(sample_records(4)));
    app.submit_filter("zzz-no-such-name");
    assert!(app.visible().is_empty());
    app.submit_filter("");
    assert_eq!(app.visible().len(), 4);
}

#[test]
fn load_produces_one_card_per_record_in_order() {
    let mut app = App::new();
    app.on_fetch_result(Ok(sample_records(12)));
    assert!(app.directory().is_loaded());
    assert_eq!(app.visible(), (0..12).collect::<Vec<_>>());
}

#[test]
fn overlay_navigation_sequence_from_zero() {
    let mut app = App::new();
    app.on_fetch_result(Ok(sample_records(12)));

    let mut history = Vec::new();
    app.open_overlay_at(0);
    history.push(app.directory().cursor().unwrap());
    app.navigate(Direction::Next);
    history.push(app.directory().cursor().unwrap());
    app.navigate(Direction::Next);
    history.push(app.directory().cursor().unwrap());
    app.navigate(Direction::Prev);
    history.push(app.directory().cursor().unwrap());
    assert_eq!(history, vec![0, 1, 2, 1]);

    app.close_overlay();
    assert!(!app.overlay_open());
    assert_eq!(app.directory().len(), 12);
    assert_eq!(app.visible().len(), 12);
}

#[test]
fn failed_fetch_leaves_directory_empty() {
    let mut app = App::new();
    app.on_fetch_result(Err(FetchError::Http("Internal Server Error".to_string())));
    assert!(!app.directory().is_loaded());
    assert_eq!(app.directory().len(), 0);
    assert!(app.visible().is_empty());
}

#[test]
fn build_api_url_embeds_count_fields_and_nationality() {
    let url = crate::fetcher::build_api_url("https://randomuser.me/api/", 12, "us");
    assert_eq!(
        url,
        "https://randomuser.me/api/?results=12&inc=name,picture,email,location,phone,dob&noinfo&nat=US"
    );
}

#[test]
fn parse_records_maps_provider_fields() {
    let body = r#"{
        "results": [
            {
                "name": {"title": "Ms", "first": "Anna", "last": "Smith"},
                "location": {
                    "street": {"number": 4732, "name": "Sunset Blvd"},
                    "city": "Portland",
                    "state": "Oregon",
                    "postcode": 97035
                },
                "email": "anna.smith@example.com",
                "dob": {"date": "1990-03-07T10:20:45.123Z", "age": 35},
                "phone": "(555) 555-0100",
                "picture": {"large": "https://example.com/portraits/1.jpg"}
            }
        ]
    }"#;
    let records = crate::fetcher::parse_records(body).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.full_name(), "Anna Smith");
    assert_eq!(record.email, "anna.smith@example.com");
    assert_eq!(record.city_state(), "Portland, Oregon");
    assert_eq!(
        record.address_line(),
        "Sunset Blvd, Portland, Oregon 97035"
    );
    assert_eq!(record.birthday(), "03/07/1990");
    assert_eq!(record.picture_url, "https://example.com/portraits/1.jpg");
}

#[test]
fn parse_records_accepts_string_postcode() {
    let body = r#"{
        "results": [
            {
                "name": {"first": "Oliver", "last": "Brown"},
                "location": {
                    "street": {"number": 12, "name": "High Street"},
                    "city": "Leeds",
                    "state": "West Yorkshire",
                    "postcode": "LS1 4AP"
                },
                "email": "oliver.brown@example.com",
                "dob": {"date": "1985-12-31T00:00:00.000Z"},
                "phone": "0113 496 0100",
                "picture": {"large": "https://example.com/portraits/2.jpg"}
            }
        ]
    }"#;
    let records = crate::fetcher::parse_records(body).unwrap();
    assert_eq!(records[0].postcode, "LS1 4AP");
    assert_eq!(records[0].birthday(), "12/31/1985");
}

#[test]
fn parse_records_rejects_malformed_body() {
    let result = crate::fetcher::parse_records("<html>not json</html>");
    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn fetch_with_unparsable_url_is_a_transport_error() {
    let client = reqwest::Client::new();
    let result = crate::fetcher::fetch(&client, "not a url").await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[test]
fn hit_region_resolves_any_position_inside_a_card() {
    let regions = vec![
        (Rect::new(0, 3, 30, 5), 0),
        (Rect::new(30, 3, 30, 5), 1),
        (Rect::new(0, 8, 30, 5), 2),
    ];
    // Interior, border, and corner positions all resolve to the card.
    assert_eq!(grid::hit_region(&regions, Position::new(15, 5)), Some(0));
    assert_eq!(grid::hit_region(&regions, Position::new(30, 3)), Some(1));
    assert_eq!(grid::hit_region(&regions, Position::new(29, 12)), Some(2));
    // Outside every card.
    assert_eq!(grid::hit_region(&regions, Position::new(70, 5)), None);
}

#[test]
fn row_scroll_keeps_selected_row_on_screen() {
    // Selected above the window scrolls up to it.
    assert_eq!(grid::first_visible_row(0, 2, 3), 0);
    // Selected inside the window leaves it alone.
    assert_eq!(grid::first_visible_row(3, 2, 3), 2);
    // Selected below the window scrolls just far enough.
    assert_eq!(grid::first_visible_row(6, 2, 3), 4);
}

#[test]
fn activation_before_load_is_a_noop() {
    let mut app = App::new();
    app.handle_key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Enter,
        crossterm::event::KeyModifiers::NONE,
    ));
    assert!(!app.overlay_open());
}
