//! Failure-isolated extension registration.
//!
//! The registrar is the only part of the core with an external side effect:
//! it mutates host registration state (and the converter registry). Every
//! candidate is constructed and registered independently; one broken
//! extension never takes the batch down, it is simply absent from the running
//! system and reported at startup.

use tracing::{info, warn};

use ingot_core::{DiagnosticEvent, Severity};
use ingot_framework::extension::ExtensionInstance;
use ingot_framework::RuntimeContext;

use crate::scanner::ExtensionCandidate;

/// Registers scanned candidates with the host.
pub struct ExtensionRegistrar;

impl ExtensionRegistrar {
    /// Constructs and registers every candidate, returning the success count.
    ///
    /// For each candidate the descriptor factory is called with the shared
    /// context. A factory error skips that candidate with a warning
    /// diagnostic naming it and its cause; construction of the remaining
    /// candidates always continues. Successful instances are routed by
    /// capability: listeners to [`Host::register_event_handler`], converters
    /// into the context's registry.
    ///
    /// Calling this twice with the same candidates produces two independent
    /// registrations (de-duplication is the host's concern), so callers
    /// invoke it at most once per startup.
    ///
    /// [`Host::register_event_handler`]: ingot_core::Host::register_event_handler
    pub fn register_all(candidates: &[ExtensionCandidate], ctx: &RuntimeContext) -> usize {
        let mut registered = 0;

        for candidate in candidates {
            match candidate.descriptor.instantiate(ctx) {
                Ok(ExtensionInstance::Listener(listener)) => {
                    ctx.host().register_event_handler(listener);
                    ctx.emit(DiagnosticEvent::new(
                        "registration",
                        Severity::Info,
                        format!("registered event listener '{}'", candidate.qualified_name),
                    ));
                    info!(extension = %candidate.qualified_name, "Extension registered");
                    registered += 1;
                }
                Ok(ExtensionInstance::Converter(converter)) => {
                    let type_key = converter.type_key();
                    ctx.converters().register(converter);
                    ctx.emit(DiagnosticEvent::new(
                        "registration",
                        Severity::Info,
                        format!(
                            "registered parameter converter '{}' for type '{type_key}'",
                            candidate.qualified_name
                        ),
                    ));
                    info!(
                        extension = %candidate.qualified_name,
                        type_key,
                        "Extension registered"
                    );
                    registered += 1;
                }
                Err(cause) => {
                    ctx.emit(
                        DiagnosticEvent::new(
                            "registration",
                            Severity::Warn,
                            format!("skipping extension '{}'", candidate.qualified_name),
                        )
                        .with_cause(&cause),
                    );
                    warn!(
                        extension = %candidate.qualified_name,
                        error = %cause,
                        "Extension construction failed — candidate skipped"
                    );
                }
            }
        }

        registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ingot_core::testing::RecordingHost;
    use ingot_core::{EventListener, HostEvent, MemorySink};
    use ingot_framework::error::ConstructionError;
    use ingot_framework::{ConversionError, ParamConverter, Requester, define_extension};

    struct Named(&'static str);

    impl EventListener for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn on_event(&self, _event: &HostEvent) {}
    }

    fn create_first(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Ok(ExtensionInstance::Listener(Box::new(Named("First"))))
    }

    fn create_second(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Ok(ExtensionInstance::Listener(Box::new(Named("Second"))))
    }

    fn create_broken(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Err(ConstructionError::new(
            "reg.pack.Broken",
            "required service is unavailable",
        ))
    }

    struct UpperConverter;

    impl ParamConverter for UpperConverter {
        type Value = String;

        fn type_key(&self) -> &'static str {
            "upper"
        }

        fn can_convert(&self, raw: &str, _ctx: &RuntimeContext) -> bool {
            !raw.is_empty()
        }

        fn convert(&self, raw: &str, _ctx: &RuntimeContext) -> Result<String, ConversionError> {
            if raw.is_empty() {
                return Err(ConversionError::invalid(raw, "upper", "empty token"));
            }
            Ok(raw.to_ascii_uppercase())
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

    fn create_upper(_ctx: &RuntimeContext) -> Result<ExtensionInstance, ConstructionError> {
        Ok(ExtensionInstance::Converter(Arc::new(UpperConverter)))
    }

    define_extension! {
        static REG_FIRST: "reg.pack.First", listener, create_first
    }
    define_extension! {
        static REG_SECOND: "reg.pack.Second", listener, create_second
    }
    define_extension! {
        static REG_BROKEN: "reg.pack.Broken", listener, create_broken
    }
    define_extension! {
        static REG_UPPER: "reg.pack.Upper", param_parser, create_upper
    }

    fn candidate(
        name: &str,
        descriptor: &'static ingot_framework::ExtensionDescriptor,
    ) -> ExtensionCandidate {
        ExtensionCandidate {
            qualified_name: name.to_string(),
            descriptor,
        }
    }

    #[test]
    fn one_broken_candidate_does_not_abort_the_batch() {
        let host = Arc::new(RecordingHost::new());
        let sink = Arc::new(MemorySink::new());
        let ctx = RuntimeContext::builder(host.clone())
            .diagnostics(sink.clone())
            .build();

        let candidates = vec![
            candidate("reg.pack.Broken", &REG_BROKEN),
            candidate("reg.pack.First", &REG_FIRST),
            candidate("reg.pack.Second", &REG_SECOND),
        ];

        let registered = ExtensionRegistrar::register_all(&candidates, &ctx);
        assert_eq!(registered, 2);
        assert_eq!(host.registered(), vec!["First", "Second"]);

        // Exactly one failure diagnostic, and it names the failing extension.
        assert_eq!(sink.count_at(Severity::Warn), 1);
        let events = sink.events();
        let failure = events
            .iter()
            .find(|e| e.severity == Severity::Warn)
            .unwrap();
        assert!(failure.message.contains("reg.pack.Broken"));
        assert!(failure.cause.as_deref().unwrap().contains("unavailable"));
    }

    #[test]
    fn converter_candidates_land_in_the_registry() {
        let host = Arc::new(RecordingHost::new());
        let ctx = RuntimeContext::builder(host.clone()).build();

        let registered = ExtensionRegistrar::register_all(
            &[candidate("reg.pack.Upper", &REG_UPPER)],
            &ctx,
        );
        assert_eq!(registered, 1);
        assert_eq!(host.registration_count(), 0);

        let value = ctx
            .converters()
            .convert_as::<String>("upper", "hello", &ctx)
            .unwrap();
        assert_eq!(value, "HELLO");
    }

    #[test]
    fn every_success_produces_an_info_diagnostic() {
        let sink = Arc::new(MemorySink::new());
        let ctx = RuntimeContext::builder(Arc::new(RecordingHost::new()))
            .diagnostics(sink.clone())
            .build();

        let candidates = vec![
            candidate("reg.pack.First", &REG_FIRST),
            candidate("reg.pack.Upper", &REG_UPPER),
        ];
        ExtensionRegistrar::register_all(&candidates, &ctx);

        assert_eq!(sink.count_at(Severity::Info), 2);
    }

    #[test]
    fn empty_batch_registers_nothing() {
        let host = Arc::new(RecordingHost::new());
        let ctx = RuntimeContext::builder(host.clone()).build();
        assert_eq!(ExtensionRegistrar::register_all(&[], &ctx), 0);
        assert_eq!(host.registration_count(), 0);
    }
}
