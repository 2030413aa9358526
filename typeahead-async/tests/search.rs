use std::time::Duration;

use simplelog::{Config, LevelFilter, TestLogger};
use tokio::time::{sleep, timeout};
use typeahead::filter::substring_filter;
use typeahead::{Autocomplete, Candidate, Panel, Record};
use typeahead_async::{AsyncSearch, SearchEvent};

const DELAY: Duration = Duration::from_millis(300);

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn currency(code: &str, name: &str) -> Candidate {
    Candidate::Record(Record::new().set("code", code).set("name", name))
}

fn currencies() -> Vec<Candidate> {
    vec![
        currency("USD", "US Dollar"),
        currency("EUR", "Euro"),
        currency("GBP", "British Pound"),
    ]
}

fn currency_search() -> AsyncSearch<Candidate> {
    AsyncSearch::spawn(DELAY, |query: String| async move {
        sleep(Duration::from_millis(20)).await;
        Ok::<_, String>(substring_filter(&query, &currencies()))
    })
}

#[tokio::test(start_paused = true)]
async fn test_started_then_finished() {
    init_logging();
    let mut search = currency_search();

    search.notify("eur").unwrap();

    match search.next_event().await.unwrap() {
        SearchEvent::Started { query, .. } => assert_eq!(query, "eur"),
        other => panic!("expected started, got {:?}", other),
    }
    match search.next_event().await.unwrap() {
        SearchEvent::Finished { options, .. } => {
            assert_eq!(options, vec![currency("EUR", "Euro")])
        }
        other => panic!("expected finished, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_collapse_into_one_request() {
    let mut search = currency_search();

    for text in ["e", "eu", "eur"] {
        search.notify(text).unwrap();
        sleep(Duration::from_millis(50)).await;
    }

    let started = search.next_event().await.unwrap();
    assert!(matches!(started, SearchEvent::Started { ref query, .. } if query == "eur"));
    let finished = search.next_event().await.unwrap();
    assert_eq!(finished.ticket(), started.ticket());
    assert_eq!(search.latest(), Some(started.ticket()));

    let quiet = timeout(Duration::from_secs(5), search.next_event()).await;
    assert!(quiet.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_is_dropped() {
    init_logging();
    let mut search = AsyncSearch::spawn(DELAY, |query: String| async move {
        let wait = if query == "slow" { 1_000 } else { 10 };
        sleep(Duration::from_millis(wait)).await;
        Ok::<_, String>(vec![query])
    });

    search.notify("slow").unwrap();
    sleep(Duration::from_millis(400)).await;
    search.notify("fast").unwrap();

    let first = search.next_event().await.unwrap();
    assert!(matches!(first, SearchEvent::Started { ref query, .. } if query == "slow"));

    let second = search.next_event().await.unwrap();
    assert!(matches!(second, SearchEvent::Started { ref query, .. } if query == "fast"));
    assert!(second.ticket() > first.ticket());

    let third = search.next_event().await.unwrap();
    assert_eq!(
        third,
        SearchEvent::Finished {
            ticket: second.ticket(),
            options: vec!["fast".to_string()],
        }
    );

    // The slow response finishes later and never shows up
    let quiet = timeout(Duration::from_secs(5), search.next_event()).await;
    assert!(quiet.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_failure_clears_options() {
    let mut search = AsyncSearch::spawn(DELAY, |_query: String| async move {
        Err::<Vec<Candidate>, _>("service unavailable")
    });
    let mut widget = Autocomplete::builder()
        .label("Currency")
        .options(currencies())
        .on_change(|_: &Candidate| {})
        .build()
        .unwrap();

    widget.input("eur");
    search.notify("eur").unwrap();

    search.next_event().await.unwrap().apply(&mut widget);
    assert!(widget.is_loading());

    let failed = search.next_event().await.unwrap();
    assert!(matches!(failed, SearchEvent::Failed { ref message, .. } if message == "service unavailable"));
    failed.apply(&mut widget);

    assert!(!widget.is_loading());
    assert!(widget.options().is_empty());
    assert_eq!(widget.panel(), Panel::Empty(typeahead::EmptyReason::NoResults));
}

#[tokio::test(start_paused = true)]
async fn test_widget_driven_search() {
    init_logging();
    let mut search = currency_search();
    let notifier = search.notifier();

    let mut widget = Autocomplete::builder()
        .label("Async Search")
        .description("With description and custom results display")
        .on_input_change(move |text| notifier.notify(text))
        .on_change(|_: &Candidate| {})
        .build()
        .unwrap();

    for text in ["d", "do", "dol"] {
        widget.input(text);
    }
    assert_eq!(widget.panel(), Panel::Empty(typeahead::EmptyReason::NoResults));

    search.next_event().await.unwrap().apply(&mut widget);
    assert_eq!(widget.panel(), Panel::Loading);

    search.next_event().await.unwrap().apply(&mut widget);
    assert_eq!(widget.visible_matches(), vec![currency("USD", "US Dollar")]);

    let rows = widget.panel();
    assert_eq!(rows.rows().len(), 1);
    assert_eq!(rows.rows()[0].label, "US Dollar");
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_debounce_while_notifier_is_held() {
    let search = currency_search();
    let notifier = search.notifier();
    notifier.notify("eu");
    assert!(!notifier.is_closed());

    drop(search);
    sleep(Duration::from_millis(1)).await;

    assert!(notifier.is_closed());
}
