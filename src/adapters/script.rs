use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::adapters::memory::MemoryPage;
use crate::domain::model::{ElementId, PageEvent, Selector};
use crate::domain::ports::Page;
use crate::utils::error::{EnhancerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Click,
    Blur,
    Input,
    PointerEnter,
    PointerLeave,
}

/// How a script step addresses an element. Exactly one of the fields
/// should be set; they are tried in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl TargetRef {
    pub fn name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn class(class: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptStep {
    pub event: ScriptEvent,
    pub target: TargetRef,
    /// Value typed into the input before the event fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_value: Option<String>,
}

/// Replays a recorded interaction sequence against a page, feeding the
/// resolved events into the enhancer's channel.
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    steps: Vec<ScriptStep>,
}

impl ScriptPlayer {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(Self {
            steps: serde_json::from_str(&data)?,
        })
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn resolve(page: &MemoryPage, target: &TargetRef) -> Option<ElementId> {
        if let Some(name) = &target.name {
            return page.select(&Selector::name(name)).first().copied();
        }
        if let Some(class) = &target.class {
            return page.select(&Selector::class(class)).first().copied();
        }
        if let Some(fragment) = &target.fragment {
            return page.find_fragment(fragment);
        }
        None
    }

    /// Sends every resolvable step; steps whose target is missing are
    /// skipped with a warning. Returns the number of events sent.
    pub async fn play(
        &self,
        page: &MemoryPage,
        events: &mpsc::Sender<PageEvent>,
    ) -> Result<usize> {
        let mut sent = 0;
        for step in &self.steps {
            let Some(target) = Self::resolve(page, &step.target) else {
                tracing::warn!("script target not found: {:?}", step.target);
                continue;
            };
            if let Some(value) = &step.set_value {
                page.set_value(target, value);
            }
            let event = match step.event {
                ScriptEvent::Click => PageEvent::Click { target },
                ScriptEvent::Blur => PageEvent::Blur { target },
                ScriptEvent::Input => PageEvent::Input { target },
                ScriptEvent::PointerEnter => PageEvent::PointerEnter { target },
                ScriptEvent::PointerLeave => PageEvent::PointerLeave { target },
            };
            events
                .send(event)
                .await
                .map_err(|_| EnhancerError::ScriptError {
                    message: "event channel closed while replaying script".to_string(),
                })?;
            sent += 1;
        }
        Ok(sent)
    }
}
