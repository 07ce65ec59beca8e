//! Explicit type registration for scripted hosts.
//!
//! The host builds a registry during startup and constructs widgets by name,
//! then drives them through [`SparklineView`]'s dynamic property access.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::cell::CellRendererSparkline;
use crate::error::{Error, Result};
use crate::view::SparklineView;
use crate::widget::SparklineWidget;

pub type Constructor = fn() -> Box<dyn SparklineView>;

#[derive(Default)]
pub struct WidgetRegistry {
    types: BTreeMap<String, Constructor>,
}

impl WidgetRegistry {
    /// Empty registry; nothing is registered implicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the two built-in sparkline types.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(SparklineWidget::TYPE_NAME, || Box::new(SparklineWidget::new()));
        registry.register(CellRendererSparkline::TYPE_NAME, || {
            Box::new(CellRendererSparkline::new())
        });
        registry
    }

    /// Register `ctor` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, ctor: Constructor) {
        if self.types.insert(name.to_string(), ctor).is_some() {
            tracing::debug!(name, "replaced widget registration");
        } else {
            tracing::debug!(name, "registered widget type");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn SparklineView>> {
        let ctor = self
            .types
            .get(name)
            .ok_or_else(|| Error::UnknownWidget(name.to_string()))?;
        Ok(ctor())
    }

    /// Construct `name` and apply `properties` in key order. Order does not
    /// matter for the built-in types: the series and its grouping are only
    /// combined at paint time.
    pub fn create_with(
        &self,
        name: &str,
        properties: &Map<String, Value>,
    ) -> Result<Box<dyn SparklineView>> {
        let mut view = self.create(name)?;
        for (key, value) in properties {
            view.set_property(key, value)?;
        }
        Ok(view)
    }
}
