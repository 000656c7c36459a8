//! Views handed to the page templates.
//!
//! Handlers never build HTML themselves: they produce a [`View`] naming the
//! template and carrying its attributes, and a [`ViewRenderer`] turns it into
//! a page.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

/// A template name plus the attributes it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    name: &'static str,
    model: Map<String, Value>,
}

impl View {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            model: Map::new(),
        }
    }

    /// Add an attribute.
    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.model.insert(key.to_string(), model_value(value));
        self
    }

    /// Add the `error` attribute when there is one.
    pub fn with_error(self, error: Option<String>) -> Self {
        match error {
            Some(message) => self.with("error", &message),
            None => self,
        }
    }

    /// Merge a set of already serialized attributes.
    pub fn merge(mut self, attributes: Map<String, Value>) -> Self {
        self.model.extend(attributes);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn model(&self) -> &Map<String, Value> {
        &self.model
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.model.get(key)
    }
}

/// Serialize an attribute; values that cannot be represented become `null`.
pub fn model_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        error!("Failed to serialize view attribute: {}", e);
        Value::Null
    })
}

/// Turns views into HTML pages.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View) -> String;
}

/// Renders a bare page that embeds the attributes as JSON for client-side
/// templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedJsonRenderer;

impl ViewRenderer for EmbeddedJsonRenderer {
    fn render(&self, view: &View) -> String {
        let model = Value::Object(view.model.clone()).to_string();
        // Keep the payload from closing the script element early
        let model = model.replace("</", "<\\/");

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"es\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<title>Sistema Forestal</title>\n",
                "<link rel=\"stylesheet\" href=\"/css/forest.css\">\n",
                "</head>\n",
                "<body data-view=\"{name}\">\n",
                "<script type=\"application/json\" id=\"model\">{model}</script>\n",
                "<script src=\"/js/forest.js\"></script>\n",
                "</body>\n",
                "</html>\n"
            ),
            name = view.name,
            model = model,
        )
    }
}
