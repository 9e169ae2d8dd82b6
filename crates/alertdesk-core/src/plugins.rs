//! Plugin settings renderers.
//!
//! Each enabled notification plugin gets a settings block whose body is
//! produced by a renderer looked up by plugin id. The registry is handed to
//! the panel explicitly; plugins without a dedicated renderer use the
//! registry's fallback.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::models::{Organization, Plugin, Project};

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct PluginContext<'a> {
    pub organization: &'a Organization,
    pub project: &'a Project,
    pub plugin: &'a Plugin,
}

/// Produces a plugin's settings view of type `V`.
pub trait PluginRenderer<V> {
    /// Renderer name, used in logs.
    fn name(&self) -> &str;

    fn render_settings(&self, context: PluginContext<'_>) -> V;
}

pub struct PluginRegistry<V> {
    renderers: HashMap<String, Arc<dyn PluginRenderer<V>>>,
    fallback: Arc<dyn PluginRenderer<V>>,
}

impl<V> PluginRegistry<V> {
    pub fn new(fallback: Arc<dyn PluginRenderer<V>>) -> Self {
        Self {
            renderers: HashMap::new(),
            fallback,
        }
    }

    /// Registers a renderer for `plugin_id`, replacing any previous one.
    pub fn register(&mut self, plugin_id: impl Into<String>, renderer: Arc<dyn PluginRenderer<V>>) {
        self.renderers.insert(plugin_id.into(), renderer);
    }

    #[must_use]
    pub fn with(mut self, plugin_id: impl Into<String>, renderer: Arc<dyn PluginRenderer<V>>) -> Self {
        self.register(plugin_id, renderer);
        self
    }

    pub fn resolve(&self, plugin_id: &str) -> Arc<dyn PluginRenderer<V>> {
        let renderer = self
            .renderers
            .get(plugin_id)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.fallback));
        tracing::debug!("[plugins] Loading {} from {}", plugin_id, renderer.name());
        renderer
    }

    /// Resolves and renders in one step.
    pub fn render_settings(&self, context: PluginContext<'_>) -> V {
        self.resolve(&context.plugin.id).render_settings(context)
    }
}

impl<V> fmt::Debug for PluginRegistry<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.renderers.keys().collect();
        ids.sort();
        formatter
            .debug_struct("PluginRegistry")
            .field("renderers", &ids)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl PluginRenderer<String> for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn render_settings(&self, context: PluginContext<'_>) -> String {
            format!(
                "{}:{}:{}/{}",
                self.0, context.plugin.id, context.organization.slug, context.project.slug
            )
        }
    }

    fn fixtures() -> (Organization, Project) {
        let organization = Organization {
            slug: "acme".to_string(),
            name: "Acme".to_string(),
        };
        let project = Project {
            slug: "frontend".to_string(),
            name: "Frontend".to_string(),
            digests_min_delay: 300,
            digests_max_delay: 3600,
            plugins: vec![
                Plugin {
                    id: "webhooks".to_string(),
                    name: "WebHooks".to_string(),
                    kind: "notification".to_string(),
                    enabled: true,
                    can_disable: true,
                },
                Plugin {
                    id: "mail".to_string(),
                    name: "Mail".to_string(),
                    kind: "notification".to_string(),
                    enabled: true,
                    can_disable: false,
                },
            ],
        };
        (organization, project)
    }

    #[test]
    fn resolves_registered_renderer_then_fallback() {
        let registry =
            PluginRegistry::new(Arc::new(Named("default"))).with("webhooks", Arc::new(Named("hooks")));

        assert_eq!(registry.resolve("webhooks").name(), "hooks");
        assert_eq!(registry.resolve("mail").name(), "default");
    }

    #[test]
    fn render_settings_passes_context() {
        let (organization, project) = fixtures();
        let registry =
            PluginRegistry::new(Arc::new(Named("default"))).with("webhooks", Arc::new(Named("hooks")));

        let rendered: Vec<String> = project
            .plugins
            .iter()
            .map(|plugin| {
                registry.render_settings(PluginContext {
                    organization: &organization,
                    project: &project,
                    plugin,
                })
            })
            .collect();

        assert_eq!(
            rendered,
            vec![
                "hooks:webhooks:acme/frontend".to_string(),
                "default:mail:acme/frontend".to_string(),
            ]
        );
    }

    #[test]
    fn debug_lists_registered_ids() {
        let registry = PluginRegistry::new(Arc::new(Named("default")))
            .with("slack", Arc::new(Named("slack")))
            .with("mail", Arc::new(Named("mail")));
        let rendered = format!("{registry:?}");
        assert!(rendered.contains(r#"["mail", "slack"]"#));
        assert!(rendered.contains("default"));
    }
}
