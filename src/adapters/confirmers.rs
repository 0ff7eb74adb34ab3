use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::domain::ports::Confirmer;

/// Answers every prompt the same way. Used by the scripted demo and in
/// tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirmer {
    answer: bool,
}

impl StaticConfirmer {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

#[async_trait]
impl Confirmer for StaticConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        tracing::debug!("auto-answering '{}' with {}", message, self.answer);
        self.answer
    }
}

/// Interactive yes/no prompt on the terminal. Anything other than an
/// affirmative answer declines, as does a closed stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

#[async_trait]
impl Confirmer for TerminalConfirmer {
    async fn confirm(&self, message: &str) -> bool {
        println!("{} [s/n]", message);
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        if reader.read_line(&mut line).await.is_err() {
            return false;
        }
        matches!(
            line.trim().to_lowercase().as_str(),
            "s" | "si" | "sí" | "y" | "yes"
        )
    }
}
