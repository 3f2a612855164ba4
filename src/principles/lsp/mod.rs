//! Liskov Substitution Principle
//!
//! An implementation must be usable anywhere its capability is expected.

pub mod bad;
pub mod good;

use tracing::warn;

use crate::error::ScenarioResult;
use crate::narrative::Narrative;
use crate::registry::{Principle, Scenario, ScenarioKey, Variant};

use bad::Document;
use good::ReadableDocument;

pub fn scenarios() -> [Scenario; 2] {
    [
        Scenario::new(ScenarioKey::new(Principle::Lsp, Variant::Bad), run_bad),
        Scenario::new(ScenarioKey::new(Principle::Lsp, Variant::Good), run_good),
    ]
}

fn run_bad() -> ScenarioResult<Narrative> {
    let title = ScenarioKey::new(Principle::Lsp, Variant::Bad).title();
    let mut read_only = bad::ReadOnlyDocument::default();
    let document: &mut dyn Document = &mut read_only;

    match document.set_content("New content".to_string()) {
        Ok(()) => Ok(Narrative::titled(title)
            .line("LSP says subclasses must be usable anywhere their base type is expected.")
            .blank()
            .section(
                "If ReadOnlyDocument allowed setContent:",
                [
                    "Code typed against Document could unexpectedly mutate a read-only document.",
                    "Callers would not be able to rely on the contract of the base type.",
                ],
            )),
        Err(e) => {
            warn!(error = %e, "Read-only document rejected a write made through Document");
            Ok(Narrative::titled(title)
                .line("ReadOnlyDocument implements Document but setContent breaks the expected behavior.")
                .blank()
                .section(
                    "Operation:",
                    [
                        "Document document = ReadOnlyDocument::default()".to_string(),
                        format!("document.setContent(\"New content\") -> UnsupportedOperation ({})", e.reason),
                    ],
                )
                .blank()
                .section(
                    "Problems:",
                    [
                        "Code that works with Document must now know which implementations fail.",
                        "ReadOnlyDocument is not a true substitute for Document, so LSP is violated.",
                    ],
                ))
        }
    }
}

fn run_good() -> ScenarioResult<Narrative> {
    let read_only = good::ReadOnlyTextDocument::new("Initial content");
    let document: &dyn ReadableDocument = &read_only;
    let content = document.content();

    Ok(Narrative::titled(ScenarioKey::new(Principle::Lsp, Variant::Good).title())
        .line("Read-only and writable responsibilities are modeled with separate abstractions.")
        .blank()
        .section(
            "Operation:",
            [
                "ReadableDocument document = ReadOnlyTextDocument::new(\"Initial content\")".to_string(),
                format!("document.getContent() -> {}", content),
            ],
        )
        .blank()
        .section(
            "Benefits:",
            [
                "Code that only needs to read depends on ReadableDocument.",
                "WritableDocument extends ReadableDocument for clients that need writes.",
                "All implementations respect the expectations of the type they implement, so substitutability holds.",
            ],
        ))
}
