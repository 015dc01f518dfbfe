//! # aura-engine
//!
//! The adaptive presentation engine facade. One call takes a visitor
//! context and returns the design-token bundle plus the active persona:
//! normalize → cached dual prediction → persona match → rule-based
//! composition. The call never fails: every degradation resolves to
//! documented defaults, and the worst case is a default-leaning visual
//! experience, not an error.

use std::sync::Arc;

use tracing::{debug, info};

use aura_cache::PredictionCache;
use aura_core::errors::CatalogError;
use aura_core::{
    AuraConfig, AuraResult, ContextRecord, DesignTokenBundle, IStylePredictor, Persona,
};
use aura_features::normalize;
use aura_tokens::compose;

pub use aura_cache::Fingerprint;
pub use aura_core::config;
pub use aura_core::context;
pub use aura_core::telemetry::init_tracing;
pub use aura_model::{
    ClassifierArtifact, DualPredictor, FallbackPredictor, RegressorArtifact, ScalingParams,
};
pub use aura_persona::{default_persona, Matcher, PersonaCatalog};

/// One personalized render: the token bundle for the presentation
/// layer, and the persona reference for debugging/selection UIs.
#[derive(Debug, Clone)]
pub struct Personalization {
    pub bundle: DesignTokenBundle,
    pub persona: Persona,
}

/// The assembled engine. Model artifacts and the persona catalog are
/// loaded by collaborators before construction; nothing here touches
/// the network or disk at request time.
pub struct Engine {
    predictor: Arc<dyn IStylePredictor>,
    cache: PredictionCache,
    matcher: Matcher,
}

impl Engine {
    /// Build an engine from a loaded predictor, catalog, and config.
    pub fn new(
        predictor: Arc<dyn IStylePredictor>,
        catalog: PersonaCatalog,
        config: AuraConfig,
    ) -> AuraResult<Self> {
        config.validate()?;
        info!(
            personas = catalog.len(),
            cache_capacity = config.cache.capacity,
            "engine assembled"
        );
        Ok(Self {
            predictor,
            cache: PredictionCache::new(config.cache),
            matcher: Matcher::new(catalog, config.matcher),
        })
    }

    /// Demo engine: built-in artifacts, built-in catalog, defaults.
    pub fn demo() -> Self {
        Self::new(
            Arc::new(DualPredictor::demo()),
            PersonaCatalog::builtin(),
            AuraConfig::default(),
        )
        .expect("default config is valid")
    }

    /// Personalize one request. With a session id the active persona is
    /// pinned for the session lifetime; without one it is selected
    /// fresh. Never fails.
    pub fn personalize(&self, ctx: &ContextRecord, session: Option<&str>) -> Personalization {
        let vector = normalize(ctx);
        let prediction = self
            .cache
            .get_or_compute(ctx, || self.predictor.predict(&vector));

        let persona = match session {
            Some(id) => (*self.matcher.for_session(id, ctx)).clone(),
            None => self.matcher.select(ctx),
        };

        debug!(
            persona = %persona.id,
            degraded = prediction.degraded,
            confidence = prediction.overall_confidence(),
            "personalized"
        );
        let bundle = compose(&prediction, &persona);
        Personalization { bundle, persona }
    }

    /// Personalize with an explicit persona override, bypassing
    /// scoring. An unknown persona id is a caller error.
    pub fn personalize_as(
        &self,
        persona_id: &str,
        ctx: &ContextRecord,
        session: Option<&str>,
    ) -> AuraResult<Personalization> {
        let persona = match session {
            Some(id) => (*self.matcher.assign(id, persona_id)?).clone(),
            None => self
                .matcher
                .catalog()
                .get(persona_id)
                .cloned()
                .ok_or_else(|| CatalogError::UnknownPersona {
                    id: persona_id.to_string(),
                })?,
        };

        let vector = normalize(ctx);
        let prediction = self
            .cache
            .get_or_compute(ctx, || self.predictor.predict(&vector));
        let bundle = compose(&prediction, &persona);
        Ok(Personalization { bundle, persona })
    }

    /// Re-run persona selection for a session.
    pub fn refresh_persona(&self, session: &str, ctx: &ContextRecord) -> Persona {
        (*self.matcher.refresh(session, ctx)).clone()
    }

    /// Prediction cache, for stats and invalidation.
    pub fn cache(&self) -> &PredictionCache {
        &self.cache
    }

    /// Persona matcher, for score debugging.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}
