//! Système de logging structuré pour le codec.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le subscriber tracing global à partir de `RUST_LOG` (ou d'un
/// filtre par défaut). Destiné à être appelé une seule fois, par un binaire
/// (ex. `adn-cli`), jamais par la bibliothèque elle-même.
pub fn init_logging(default_filter: &str) {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

/// Enveloppe une étape du pipeline dans un span de niveau info, en journalisant
/// le début et la fin.
#[macro_export]
macro_rules! trace_stage {
    ($name:expr, $block:block) => {{
        let span = ::tracing::span!(::tracing::Level::INFO, $name);
        let _enter = span.enter();
        ::tracing::info!("début de l'étape: {}", $name);
        let result = $block;
        ::tracing::info!("fin de l'étape: {}", $name);
        result
    }};
}
