use crate::entities::inventory_item;
use crate::errors::ServiceError;
use minijinja::{context, Environment};

const INDEX_TEMPLATE: &str = "index.html";

/// Compiled page templates. Built once at startup and shared through
/// `AppState`. Templates ending in `.html` are auto-escaped.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, ServiceError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        Ok(Self { env })
    }

    pub fn render_inventory(
        &self,
        items: &[inventory_item::Model],
    ) -> Result<String, ServiceError> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(context! { items => items })?)
    }
}
