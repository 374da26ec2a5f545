//! End-to-end discovery: manifest on disk → scan → register → resolve.

use std::path::PathBuf;
use std::sync::Arc;

use ingot_core::testing::RecordingHost;
use ingot_core::{CatalogEntry, EventListener, HostEvent, MemoryCatalog, MemorySink, Severity};
use ingot_framework::error::ConstructionError;
use ingot_framework::{
    ConversionError, ExtensionInstance, ParamConverter, Requester, RuntimeContext,
    define_extension,
};
use ingot_runtime::config::{DiscoveryConfig, IngotConfig, LoggingConfig};
use ingot_runtime::{Bootstrap, DiscoveryError};

// ─── Extensions compiled into this artifact ──────────────────────────────────

struct Silent(&'static str);

impl EventListener for Silent {
    fn name(&self) -> &str {
        self.0
    }

    fn on_event(&self, _event: &HostEvent) {}
}

fn create_join_alert(ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
    ctx.store().put("questforge.join_alert.enabled", "true");
    Ok(ExtensionInstance::Listener(Box::new(Silent("JoinAlert"))))
}

fn create_trade_log(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
    Ok(ExtensionInstance::Listener(Box::new(Silent("TradeLog"))))
}

fn create_cursed(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
    Err(ConstructionError::new(
        "questforge.listeners.Cursed",
        "ritual components missing",
    ))
}

/// Converts a quality name to its numeric tier.
struct QualityConverter;

const QUALITIES: [(&str, u8); 3] = [("rough", 0), ("fine", 1), ("epic", 2)];

impl ParamConverter for QualityConverter {
    type Value = u8;

    fn type_key(&self) -> &'static str {
        "quality"
    }

    fn can_convert(&self, raw: &str, _ctx: &RuntimeContext) -> bool {
        QUALITIES.iter().any(|(name, _)| *name == raw)
    }

    fn convert(&self, raw: &str, _ctx: &RuntimeContext) -> Result<u8, ConversionError> {
        QUALITIES
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, tier)| *tier)
            .ok_or_else(|| ConversionError::invalid(raw, "quality", "expected rough, fine or epic"))
    }

    fn complete(&self, partial: &str, _requester: &Requester, _ctx: &RuntimeContext) -> Vec<String> {
        QUALITIES
            .iter()
            .map(|(name, _)| name.to_string())
            .filter(|name| name.starts_with(partial))
            .collect()
    }
}

fn create_quality(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
    Ok(ExtensionInstance::Converter(Arc::new(QualityConverter)))
}

define_extension! {
    static JOIN_ALERT: "questforge.listeners.JoinAlert", listener, create_join_alert
}
define_extension! {
    static TRADE_LOG: "questforge.listeners.TradeLog", listener, create_trade_log
}
define_extension! {
    static CURSED: "questforge.listeners.Cursed", listener, create_cursed
}
define_extension! {
    static QUALITY: "questforge.parsers.Quality", param_parser, create_quality
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

const MANIFEST: &str = r#"{
  "extensions": [
    {"name": "questforge.listeners.TradeLog", "capability": "listener"},
    {"name": "questforge.listeners.JoinAlert", "capability": "listener"},
    {"name": "questforge.listeners.Cursed", "capability": "listener"},
    {"name": "questforge.listeners.Missing", "capability": "listener"},
    {"name": "questforge.parsers.Quality", "capability": "param-parser"},
    {"name": "otherpack.listeners.Outside", "capability": "listener"}
  ]
}"#;

fn write_artifact() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("extensions.json"), MANIFEST).unwrap();
    dir
}

fn sword_catalog() -> MemoryCatalog {
    [
        CatalogEntry::new("sword:diamond", "Diamond Sword"),
        CatalogEntry::new("sword:iron", "Iron Sword"),
    ]
    .into_iter()
    .collect()
}

fn config_for(artifact: PathBuf) -> IngotConfig {
    IngotConfig {
        discovery: DiscoveryConfig {
            artifact,
            package_prefix: "questforge.".to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[test]
fn full_startup_round_trip() {
    let artifact = write_artifact();
    let host = Arc::new(RecordingHost::new());
    let sink = Arc::new(MemorySink::new());
    let ctx = Arc::new(
        RuntimeContext::builder(host.clone())
            .catalog(Arc::new(sword_catalog()))
            .diagnostics(sink.clone())
            .build(),
    );

    let report = Bootstrap::new(config_for(artifact.path().to_path_buf()), ctx.clone())
        .run()
        .unwrap();

    assert_eq!(report.listeners, 2);
    assert_eq!(report.converters, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.registered(), 3);

    // Candidates register in lexicographic order; the cursed one is absent.
    assert_eq!(host.registered(), vec!["JoinAlert", "TradeLog"]);

    // The listener factory ran with the shared context.
    assert_eq!(
        ctx.store().get("questforge.join_alert.enabled").as_deref(),
        Some("true")
    );

    // The discovered converter resolves through the shared registry.
    let requester = Requester::named("steve");
    assert_eq!(
        ctx.converters()
            .convert_as::<u8>("quality", "fine", &ctx)
            .unwrap(),
        1
    );
    let quality = ctx.converters().lookup("quality").unwrap();
    assert!(!quality.can_convert("legendary", &ctx));
    assert_eq!(quality.complete("", &requester, &ctx), vec!["rough", "fine", "epic"]);

    // Built-in catalog conversion sees the embedding application's catalog.
    let entry = ctx
        .converters()
        .convert_as::<CatalogEntry>("catalog-entry", "sword:diamond", &ctx)
        .unwrap();
    assert_eq!(entry.display_name, "Diamond Sword");
    let catalog = ctx.converters().lookup("catalog-entry").unwrap();
    assert_eq!(
        catalog.complete("sword", &requester, &ctx),
        vec!["sword:diamond", "sword:iron"]
    );

    // One warning for the unresolvable manifest entry, one for the failed
    // construction; nothing silently discarded.
    assert_eq!(sink.count_at(Severity::Warn), 2);
    let events = sink.events();
    assert!(
        events
            .iter()
            .any(|e| e.category == "discovery" && e.message.contains("questforge.listeners.Missing"))
    );
    assert!(
        events
            .iter()
            .any(|e| e.category == "registration"
                && e.message.contains("questforge.listeners.Cursed"))
    );
}

#[test]
fn missing_artifact_aborts_with_zero_registrations() {
    let host = Arc::new(RecordingHost::new());
    let ctx = Arc::new(
        RuntimeContext::builder(host.clone())
            .without_builtin_converters()
            .build(),
    );

    let err = Bootstrap::new(config_for(PathBuf::from("/no/such/artifact")), ctx.clone())
        .run()
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::ArtifactUnreadable { .. }));
    assert_eq!(host.registration_count(), 0);
    assert!(ctx.converters().type_keys().is_empty());
}
