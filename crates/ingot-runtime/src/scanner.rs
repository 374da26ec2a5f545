//! Capability-filtered artifact scanning.
//!
//! The scanner turns an artifact's manifest into a deterministic list of
//! [`ExtensionCandidate`]s for one capability. It never instantiates
//! anything; its only side effects are reading the manifest and emitting
//! diagnostics for entries it has to skip.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use ingot_core::{Capability, DiagnosticEvent, DiagnosticsSink, Severity};
use ingot_framework::extension::{ExtensionDescriptor, find_descriptor};

use crate::error::{DiscoveryError, DiscoveryResult};
use crate::manifest::ArtifactManifest;

/// A discovered extension: its manifest name resolved to a compiled-in
/// descriptor. Produced transiently by one scan pass, consumed by the
/// registrar, not persisted.
#[derive(Debug, Clone)]
pub struct ExtensionCandidate {
    pub qualified_name: String,
    pub descriptor: &'static ExtensionDescriptor,
}

/// Scans packaged artifacts for extensions declaring one capability.
pub struct ArtifactScanner {
    sink: Arc<dyn DiagnosticsSink>,
}

impl ArtifactScanner {
    pub fn new(sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { sink }
    }

    /// Enumerates the artifact's manifest entries under `package_prefix` and
    /// yields those that resolve to a compiled-in descriptor declaring
    /// `capability`.
    ///
    /// Entries that cannot be resolved (unknown capability string, no
    /// descriptor in the inventory, capability mismatch between manifest and
    /// descriptor, or an incompatible API version) are reported as warnings
    /// and skipped; the scan continues. Only an unreadable or malformed
    /// manifest aborts the pass.
    ///
    /// The result is sorted lexicographically by qualified name, so repeated
    /// scans of the same artifact produce identical output and reproducible
    /// registration diagnostics.
    pub fn scan(
        &self,
        artifact: &Path,
        package_prefix: &str,
        capability: Capability,
    ) -> DiscoveryResult<Vec<ExtensionCandidate>> {
        if package_prefix.is_empty() {
            return Err(DiscoveryError::EmptyPrefix);
        }

        let manifest = ArtifactManifest::load(artifact)?;
        debug!(
            artifact = %artifact.display(),
            prefix = package_prefix,
            capability = %capability,
            entries = manifest.extensions.len(),
            "Scanning artifact manifest"
        );

        let mut candidates: Vec<ExtensionCandidate> = Vec::new();
        for entry in &manifest.extensions {
            if !entry.name.starts_with(package_prefix) {
                continue;
            }

            let declared: Capability = match entry.capability.parse() {
                Ok(declared) => declared,
                Err(err) => {
                    self.warn(format!("skipping manifest entry '{}'", entry.name), &err);
                    continue;
                }
            };
            if declared != capability {
                continue;
            }

            let Some(descriptor) = find_descriptor(&entry.name) else {
                self.warn(
                    format!("skipping manifest entry '{}'", entry.name),
                    &"no matching extension is compiled into this artifact",
                );
                continue;
            };
            if descriptor.capability != capability {
                self.warn(
                    format!("skipping manifest entry '{}'", entry.name),
                    &format!(
                        "manifest declares '{capability}' but the extension implements '{}'",
                        descriptor.capability
                    ),
                );
                continue;
            }
            if !descriptor.is_compatible() {
                self.warn(
                    format!("skipping manifest entry '{}'", entry.name),
                    &format!(
                        "extension API version {:#x} is not compatible with this framework",
                        descriptor.api_version
                    ),
                );
                continue;
            }

            candidates.push(ExtensionCandidate {
                qualified_name: entry.name.clone(),
                descriptor,
            });
        }

        candidates.sort_by(|a, b| a.qualified_name.cmp(&b.qualified_name));
        candidates.dedup_by(|dup, kept| {
            if dup.qualified_name == kept.qualified_name {
                self.warn(
                    format!("duplicate manifest entry '{}'", dup.qualified_name),
                    &"listed more than once; keeping a single candidate",
                );
                true
            } else {
                false
            }
        });

        Ok(candidates)
    }

    fn warn(&self, message: String, cause: &dyn std::fmt::Display) {
        self.sink
            .emit(DiagnosticEvent::new("discovery", Severity::Warn, message).with_cause(cause));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;

    use ingot_core::testing::RecordingHost;
    use ingot_core::{EventListener, HostEvent, MemorySink};
    use ingot_framework::error::ConstructionError;
    use ingot_framework::{
        ConversionError, ExtensionInstance, ParamConverter, Requester, RuntimeContext,
        define_extension,
    };

    struct Silent(&'static str);

    impl EventListener for Silent {
        fn name(&self) -> &str {
            self.0
        }

        fn on_event(&self, _event: &HostEvent) {}
    }

    fn create_alpha(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Ok(ExtensionInstance::Listener(Box::new(Silent("Alpha"))))
    }

    fn create_beta(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Ok(ExtensionInstance::Listener(Box::new(Silent("Beta"))))
    }

    struct HexConverter;

    impl ParamConverter for HexConverter {
        type Value = u32;

        fn type_key(&self) -> &'static str {
            "hex"
        }

        fn can_convert(&self, raw: &str, _ctx: &RuntimeContext) -> bool {
            u32::from_str_radix(raw, 16).is_ok()
        }

        fn convert(&self, raw: &str, _ctx: &RuntimeContext) -> Result<u32, ConversionError> {
            u32::from_str_radix(raw, 16).map_err(|e| ConversionError::invalid(raw, "hex", e))
        }

        fn complete(
            &self,
            _partial: &str,
            _requester: &Requester,
            _ctx: &RuntimeContext,
        ) -> Vec<String> {
            Vec::new()
        }
    }

    fn create_hex(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Ok(ExtensionInstance::Converter(Arc::new(HexConverter)))
    }

    define_extension! {
        static SCAN_ALPHA: "scan.alpha.Alpha", listener, create_alpha
    }
    define_extension! {
        static SCAN_BETA: "scan.alpha.Beta", listener, create_beta
    }
    define_extension! {
        static SCAN_HEX: "scan.alpha.Hex", param_parser, create_hex
    }
    define_extension! {
        static SCAN_OUTSIDE: "scan.other.Outside", listener, create_alpha
    }

    fn write_manifest(entries: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extensions.json");
        let body: Vec<String> = entries
            .iter()
            .map(|(name, cap)| format!(r#"{{"name": "{name}", "capability": "{cap}"}}"#))
            .collect();
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"extensions": [{}]}}"#, body.join(",")).unwrap();
        (dir, path)
    }

    #[test]
    fn yields_exactly_the_matching_candidates_in_order() {
        let (_dir, path) = write_manifest(&[
            ("scan.alpha.Beta", "listener"),
            ("scan.alpha.Hex", "param-parser"),
            ("scan.alpha.Alpha", "listener"),
            ("scan.other.Outside", "listener"),
        ]);
        let sink = Arc::new(MemorySink::new());
        let scanner = ArtifactScanner::new(sink.clone());

        let candidates = scanner
            .scan(&path, "scan.alpha.", Capability::Listener)
            .unwrap();
        let names: Vec<&str> = candidates
            .iter()
            .map(|c| c.qualified_name.as_str())
            .collect();
        assert_eq!(names, vec!["scan.alpha.Alpha", "scan.alpha.Beta"]);
        assert_eq!(sink.count_at(Severity::Warn), 0);

        // Deterministic across repeated runs on the same artifact.
        let again = scanner
            .scan(&path, "scan.alpha.", Capability::Listener)
            .unwrap();
        let names_again: Vec<&str> =
            again.iter().map(|c| c.qualified_name.as_str()).collect();
        assert_eq!(names, names_again);
    }

    #[test]
    fn parser_capability_scans_separately() {
        let (_dir, path) = write_manifest(&[
            ("scan.alpha.Alpha", "listener"),
            ("scan.alpha.Hex", "param-parser"),
        ]);
        let scanner = ArtifactScanner::new(Arc::new(MemorySink::new()));

        let candidates = scanner
            .scan(&path, "scan.alpha.", Capability::ParamParser)
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].qualified_name, "scan.alpha.Hex");
    }

    #[test]
    fn unresolvable_entries_are_warned_and_skipped() {
        let (_dir, path) = write_manifest(&[
            ("scan.alpha.Alpha", "listener"),
            ("scan.alpha.Ghost", "listener"),
            ("scan.alpha.Strange", "gui-widget"),
        ]);
        let sink = Arc::new(MemorySink::new());
        let scanner = ArtifactScanner::new(sink.clone());

        let candidates = scanner
            .scan(&path, "scan.alpha.", Capability::Listener)
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(sink.count_at(Severity::Warn), 2);

        let events = sink.events();
        assert!(events.iter().any(|e| e.message.contains("scan.alpha.Ghost")));
        assert!(
            events
                .iter()
                .any(|e| e.message.contains("scan.alpha.Strange"))
        );
    }

    #[test]
    fn capability_mismatch_between_manifest_and_descriptor_is_skipped() {
        // Manifest claims the hex parser is a listener.
        let (_dir, path) = write_manifest(&[("scan.alpha.Hex", "listener")]);
        let sink = Arc::new(MemorySink::new());
        let scanner = ArtifactScanner::new(sink.clone());

        let candidates = scanner
            .scan(&path, "scan.alpha.", Capability::Listener)
            .unwrap();
        assert!(candidates.is_empty());
        assert_eq!(sink.count_at(Severity::Warn), 1);
    }

    #[test]
    fn duplicate_entries_collapse_to_one_candidate() {
        let (_dir, path) = write_manifest(&[
            ("scan.alpha.Alpha", "listener"),
            ("scan.alpha.Alpha", "listener"),
        ]);
        let sink = Arc::new(MemorySink::new());
        let scanner = ArtifactScanner::new(sink.clone());

        let candidates = scanner
            .scan(&path, "scan.alpha.", Capability::Listener)
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(sink.count_at(Severity::Warn), 1);
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let (_dir, path) = write_manifest(&[("scan.alpha.Alpha", "listener")]);
        let scanner = ArtifactScanner::new(Arc::new(MemorySink::new()));

        let err = scanner.scan(&path, "", Capability::Listener).unwrap_err();
        assert!(matches!(err, DiscoveryError::EmptyPrefix));
    }

    #[test]
    fn missing_artifact_fails_without_registrations() {
        let host = Arc::new(RecordingHost::new());
        let scanner = ArtifactScanner::new(Arc::new(MemorySink::new()));

        let err = scanner
            .scan(
                Path::new("/no/such/artifact"),
                "scan.alpha.",
                Capability::Listener,
            )
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::ArtifactUnreadable { .. }));
        assert_eq!(host.registration_count(), 0);
    }
}
