use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::{mpsc, watch};

use page_enhancer::adapters::script::{ScriptEvent, ScriptPlayer, ScriptStep, TargetRef};
use page_enhancer::config::ConfirmMode;
use page_enhancer::domain::model::{
    CLASS_ALERT, CLASS_CARD, CLASS_CURRENT_TIME, CLASS_IS_INVALID, CLASS_IS_VALID,
    CLASS_RESERVE_CONFIRM,
};
use page_enhancer::utils::logger;
use page_enhancer::{
    restore_button, show_button_loading, CliConfig, Confirmer, ElementId, ElementSpec,
    EnhancerConfig, MemoryPage, Page, PageEnhancer, Selector, StaticConfirmer, SystemTimeSource,
    TerminalConfirmer,
};

struct SamplePage {
    page: MemoryPage,
    rut_input: ElementId,
    reserve_button: ElementId,
    clock: ElementId,
}

/// Reservation page fixture: success alert, nav with anchor and clock,
/// availability section with room cards, and the reservation form.
fn sample_page() -> SamplePage {
    let page = MemoryPage::new();

    page.add_element(
        ElementSpec::new("div")
            .class(CLASS_ALERT)
            .text("Reserva creada correctamente"),
    );

    let nav = page.add_element(ElementSpec::new("nav"));
    page.add_child(
        nav,
        ElementSpec::new("a")
            .class("nav-link")
            .attr("href", "#disponibilidad")
            .text("Disponibilidad"),
    );
    let clock = page.add_child(nav, ElementSpec::new("span").class(CLASS_CURRENT_TIME));

    let section = page.add_element(ElementSpec::new("section").html_id("disponibilidad"));
    for sala in ["Sala Reuniones A", "Sala Reuniones B"] {
        let card = page.add_child(section, ElementSpec::new("div").class(CLASS_CARD));
        page.add_child(card, ElementSpec::new("h5").text(sala));
    }

    let form = page.add_element(ElementSpec::new("form"));
    let group = page.add_child(form, ElementSpec::new("div").class("mb-3"));
    let rut_input = page.add_child(
        group,
        ElementSpec::new("input")
            .attr("name", "rut_reservante")
            .attr("placeholder", "12.345.678-9")
            .required(),
    );
    let reserve_button = page.add_child(
        form,
        ElementSpec::new("button")
            .class(CLASS_RESERVE_CONFIRM)
            .text("Reservar sala"),
    );

    SamplePage {
        page,
        rut_input,
        reserve_button,
        clock,
    }
}

fn step(event: ScriptEvent, target: TargetRef) -> ScriptStep {
    ScriptStep {
        event,
        target,
        set_value: None,
    }
}

fn typing(target: TargetRef, value: &str) -> ScriptStep {
    ScriptStep {
        event: ScriptEvent::Input,
        target,
        set_value: Some(value.to_string()),
    }
}

/// Built-in run: walk the RUT field through its three validation
/// states, hover a card, follow the nav anchor, click reserve.
fn demo_script() -> ScriptPlayer {
    let rut = || TargetRef::name("rut_reservante");
    ScriptPlayer::new(vec![
        step(ScriptEvent::Blur, rut()),
        typing(rut(), "123"),
        step(ScriptEvent::Blur, rut()),
        typing(rut(), "12.345.678-9"),
        step(ScriptEvent::Blur, rut()),
        step(ScriptEvent::PointerEnter, TargetRef::class(CLASS_CARD)),
        step(ScriptEvent::PointerLeave, TargetRef::class(CLASS_CARD)),
        step(ScriptEvent::Click, TargetRef::class("nav-link")),
        step(ScriptEvent::Click, TargetRef::class(CLASS_RESERVE_CONFIRM)),
    ])
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting page-enhancer demo");
    let settings = cli.settings().context("invalid configuration")?;
    let alert_delay = settings.alert_dismiss_delay();
    let clock_tick = settings.clock_tick();

    let sample = sample_page();
    let page = Arc::new(sample.page.clone());

    let confirmer: Box<dyn Confirmer> = match cli.auto_confirm {
        ConfirmMode::Yes => Box::new(StaticConfirmer::new(true)),
        ConfirmMode::No => Box::new(StaticConfirmer::new(false)),
        ConfirmMode::Ask => Box::new(TerminalConfirmer),
    };

    let mut enhancer = PageEnhancer::attach(
        Arc::clone(&page),
        confirmer,
        Arc::new(SystemTimeSource),
        settings,
    )
    .context("failed to attach enhancer")?;

    let (events_tx, events_rx) = mpsc::channel(64);
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let engine = tokio::spawn(async move {
        enhancer.run(events_rx, cancel_rx).await;
        enhancer
    });

    let player = match &cli.events {
        Some(path) => ScriptPlayer::from_file(path)
            .with_context(|| format!("loading event script {}", path.display()))?,
        None => demo_script(),
    };
    let sent = player.play(&sample.page, &events_tx).await?;
    tracing::info!("replayed {} event(s)", sent);

    // Exercise the loading-state API around a simulated submit.
    let original = show_button_loading(page.as_ref(), sample.reserve_button, None)?;
    tokio::time::sleep(Duration::from_millis(300)).await;
    restore_button(page.as_ref(), sample.reserve_button, &original)?;

    // Let the clock tick a few times and the alert timer fire.
    tokio::time::sleep(alert_delay + clock_tick * cli.clock_ticks as u32).await;

    cancel_tx.send(true).ok();
    let enhancer = engine.await.context("enhancer task panicked")?;
    enhancer.shutdown().await;

    let rut_state = if sample.page.has_class(sample.rut_input, CLASS_IS_VALID) {
        "válido"
    } else if sample.page.has_class(sample.rut_input, CLASS_IS_INVALID) {
        "inválido"
    } else {
        "sin validar"
    };

    println!("✅ Demo completada");
    println!(
        "🕐 Reloj ({}): {}",
        page.select(&Selector::class(CLASS_CURRENT_TIME)).len(),
        page.text(sample.clock).unwrap_or_default()
    );
    println!(
        "🔔 Alertas visibles: {}",
        page.select(&Selector::class(CLASS_ALERT)).len()
    );
    println!(
        "📋 Campo RUT: '{}' ({})",
        page.value(sample.rut_input).unwrap_or_default(),
        rut_state
    );
    println!("🖱️ Desplazamientos suaves: {}", sample.page.scrolled().len());

    Ok(())
}
