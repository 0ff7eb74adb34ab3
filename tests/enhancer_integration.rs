use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use tokio::sync::{mpsc, watch};
use tokio_test::assert_ok;

use page_enhancer::domain::model::{
    CLASS_ALERT, CLASS_CARD, CLASS_CURRENT_TIME, CLASS_IS_INVALID, CLASS_IS_VALID,
    CLASS_RESERVE_CONFIRM,
};
use page_enhancer::{
    Confirmer, Disposition, ElementId, ElementSpec, EnhancerSettings, MemoryPage, Page,
    PageEnhancer, PageEvent, ScrollBehavior, Selector, StaticConfirmer, TimeSource,
};

struct Fixture {
    page: Arc<MemoryPage>,
    alert: ElementId,
    anchor: ElementId,
    section: ElementId,
    card: ElementId,
    clock: ElementId,
    rut_input: ElementId,
    reserve_button: ElementId,
}

fn reservation_page() -> Fixture {
    let page = MemoryPage::new();

    let alert = page.add_element(
        ElementSpec::new("div")
            .class(CLASS_ALERT)
            .text("Reserva creada correctamente"),
    );

    let nav = page.add_element(ElementSpec::new("nav"));
    let anchor = page.add_child(
        nav,
        ElementSpec::new("a").attr("href", "#disponibilidad"),
    );
    let clock = page.add_child(nav, ElementSpec::new("span").class(CLASS_CURRENT_TIME));

    let section = page.add_element(ElementSpec::new("section").html_id("disponibilidad"));
    let card = page.add_child(section, ElementSpec::new("div").class(CLASS_CARD));

    let form = page.add_element(ElementSpec::new("form"));
    let group = page.add_child(form, ElementSpec::new("div"));
    let rut_input = page.add_child(
        group,
        ElementSpec::new("input").attr("name", "rut_reservante").required(),
    );
    let reserve_button = page.add_child(
        form,
        ElementSpec::new("button")
            .class(CLASS_RESERVE_CONFIRM)
            .text("Reservar sala"),
    );

    Fixture {
        page: Arc::new(page),
        alert,
        anchor,
        section,
        card,
        clock,
        rut_input,
        reserve_button,
    }
}

/// Confirmer that records the prompts it was asked.
#[derive(Clone)]
struct RecordingConfirmer {
    answer: bool,
    calls: Arc<AtomicUsize>,
    last_message: Arc<Mutex<Option<String>>>,
}

impl RecordingConfirmer {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
            last_message: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl Confirmer for RecordingConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_message.lock().unwrap() = Some(message.to_string());
        self.answer
    }
}

/// Fixed base time advancing one second per render.
struct SteppingTime {
    base: DateTime<Local>,
    calls: std::sync::atomic::AtomicI64,
}

impl SteppingTime {
    fn new() -> Self {
        Self {
            base: Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap(),
            calls: std::sync::atomic::AtomicI64::new(0),
        }
    }
}

impl TimeSource for SteppingTime {
    fn now(&self) -> DateTime<Local> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.base + chrono::Duration::seconds(n)
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_required_field_lifecycle_through_run_loop() {
    let fixture = reservation_page();
    let mut enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        StaticConfirmer::new(true),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();

    let (events_tx, events_rx) = mpsc::channel(16);
    let (_cancel_tx, cancel_rx) = watch::channel(false);
    let engine = tokio::spawn(async move {
        enhancer.run(events_rx, cancel_rx).await;
    });

    // Blur with no value: required message shows up.
    events_tx
        .send(PageEvent::Blur { target: fixture.rut_input })
        .await
        .unwrap();
    settle().await;
    assert!(fixture.page.has_class(fixture.rut_input, CLASS_IS_INVALID));
    let feedback = fixture.page.feedback_for(fixture.rut_input).unwrap();
    assert_eq!(
        fixture.page.text(feedback).unwrap(),
        "Este campo es obligatorio"
    );
    assert!(fixture.page.is_visible(feedback));

    // Typing clears both markers.
    fixture.page.set_value(fixture.rut_input, "123");
    events_tx
        .send(PageEvent::Input { target: fixture.rut_input })
        .await
        .unwrap();
    settle().await;
    assert!(!fixture.page.has_class(fixture.rut_input, CLASS_IS_INVALID));
    assert!(!fixture.page.has_class(fixture.rut_input, CLASS_IS_VALID));

    // Blur with a short RUT: shape failure.
    events_tx
        .send(PageEvent::Blur { target: fixture.rut_input })
        .await
        .unwrap();
    settle().await;
    assert!(fixture.page.has_class(fixture.rut_input, CLASS_IS_INVALID));
    assert_eq!(
        fixture.page.text(feedback).unwrap(),
        "Por favor ingresa un RUT válido"
    );

    // A well-shaped RUT validates.
    fixture.page.set_value(fixture.rut_input, "12.345.678-9");
    events_tx
        .send(PageEvent::Blur { target: fixture.rut_input })
        .await
        .unwrap();
    settle().await;
    assert!(fixture.page.has_class(fixture.rut_input, CLASS_IS_VALID));
    assert!(!fixture.page.is_visible(feedback));

    drop(events_tx);
    engine.await.unwrap();
}

#[tokio::test]
async fn test_confirmation_gate_on_reserve_click() {
    let fixture = reservation_page();
    let declining = RecordingConfirmer::new(false);
    let enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        declining.clone(),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();

    let event = PageEvent::Click { target: fixture.reserve_button };
    let disposition = assert_ok!(enhancer.handle_event(&event).await);

    assert_eq!(disposition, Disposition::Prevented);
    assert_eq!(declining.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        declining.last_message.lock().unwrap().as_deref(),
        Some("¿Estás seguro de que quieres reservar esta sala?")
    );

    enhancer.shutdown().await;
}

#[tokio::test]
async fn test_confirmation_accepted_lets_action_through() {
    let fixture = reservation_page();
    let enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        StaticConfirmer::new(true),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();

    let event = PageEvent::Click { target: fixture.reserve_button };
    assert_eq!(
        enhancer.handle_event(&event).await.unwrap(),
        Disposition::Default
    );

    enhancer.shutdown().await;
}

#[tokio::test]
async fn test_anchor_click_scrolls_smoothly_and_prevents_default() {
    let fixture = reservation_page();
    let enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        StaticConfirmer::new(true),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();

    let event = PageEvent::Click { target: fixture.anchor };
    assert_eq!(
        enhancer.handle_event(&event).await.unwrap(),
        Disposition::Prevented
    );
    assert_eq!(
        fixture.page.scrolled(),
        vec![(fixture.section, ScrollBehavior::Smooth)]
    );

    enhancer.shutdown().await;
}

#[tokio::test]
async fn test_card_hover_sets_transition() {
    let fixture = reservation_page();
    let enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        StaticConfirmer::new(true),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();

    enhancer
        .handle_event(&PageEvent::PointerEnter { target: fixture.card })
        .await
        .unwrap();
    assert_eq!(
        fixture.page.style(fixture.card, "transition").as_deref(),
        Some("all 0.3s ease")
    );

    enhancer
        .handle_event(&PageEvent::PointerLeave { target: fixture.card })
        .await
        .unwrap();
    assert_eq!(
        fixture.page.style(fixture.card, "transition").as_deref(),
        Some("all 0.3s ease")
    );

    enhancer.shutdown().await;
}

#[tokio::test]
async fn test_events_on_unwired_elements_are_ignored() {
    let fixture = reservation_page();
    let plain = fixture.page.add_element(ElementSpec::new("div").text("fuera"));
    let enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        StaticConfirmer::new(false),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();

    assert_eq!(
        enhancer
            .handle_event(&PageEvent::Click { target: plain })
            .await
            .unwrap(),
        Disposition::Default
    );
    assert_eq!(
        enhancer
            .handle_event(&PageEvent::Blur { target: plain })
            .await
            .unwrap(),
        Disposition::Default
    );
    assert!(!fixture.page.has_class(plain, CLASS_IS_INVALID));
    assert!(fixture.page.scrolled().is_empty());

    enhancer.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_alert_dismissal_and_clock_lifecycle() {
    let fixture = reservation_page();
    let mut enhancer = PageEnhancer::attach(
        Arc::clone(&fixture.page),
        StaticConfirmer::new(true),
        Arc::new(SteppingTime::new()),
        EnhancerSettings::default(),
    )
    .unwrap();
    assert!(enhancer.clock_running());

    let (events_tx, events_rx) = mpsc::channel::<PageEvent>(4);
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let engine = tokio::spawn(async move {
        enhancer.run(events_rx, cancel_rx).await;
        enhancer
    });
    settle().await;

    // Initial render is immediate.
    assert_eq!(
        fixture.page.text(fixture.clock).unwrap(),
        "09-03-2024 14:30:00"
    );

    // Alert survives until the full delay has elapsed.
    tokio::time::advance(Duration::from_millis(4999)).await;
    settle().await;
    assert!(fixture.page.contains(fixture.alert));

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    assert!(!fixture.page.contains(fixture.alert));
    assert!(fixture.page.select(&Selector::class(CLASS_ALERT)).is_empty());

    // Five seconds of ticks rendered meanwhile.
    assert_eq!(
        fixture.page.text(fixture.clock).unwrap(),
        "09-03-2024 14:30:05"
    );

    // Cancellation stops the loop and the clock with it.
    cancel_tx.send(true).unwrap();
    let enhancer = engine.await.unwrap();
    assert!(!enhancer.clock_running());

    let frozen = fixture.page.text(fixture.clock).unwrap();
    tokio::time::advance(Duration::from_millis(3000)).await;
    settle().await;
    assert_eq!(fixture.page.text(fixture.clock).unwrap(), frozen);

    drop(events_tx);
}
