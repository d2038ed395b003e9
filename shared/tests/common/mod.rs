#![allow(dead_code, reason = "each test crate uses a different subset of the helpers")]

use std::collections::{BTreeMap, HashMap};

use page_enhancer_shared::{ElementKey, HostError, PageHost, StyleDeclaration, Theme};

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Default)]
pub struct MemoryElement {
    pub id: String,
    pub style: BTreeMap<&'static str, String>,
}

/// In-memory page. `storage: None` models a page without `localStorage`.
#[derive(Debug)]
pub struct MemoryHost {
    pub storage: Option<HashMap<String, String>>,
    pub attribute: Option<String>,
    pub prefers_dark: Option<bool>,
    pub elements: Vec<MemoryElement>,
    pub scrolled: Vec<ElementKey>,
}

impl MemoryHost {
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            storage: Some(HashMap::new()),
            attribute: None,
            prefers_dark,
            elements: Vec::new(),
            scrolled: Vec::new(),
        }
    }

    pub fn with_stored(mut self, value: &str) -> Self {
        if let Some(storage) = self.storage.as_mut() {
            storage.insert(STORAGE_KEY.to_string(), value.to_string());
        }
        self
    }

    pub fn without_storage(mut self) -> Self {
        self.storage = None;
        self
    }

    pub fn register(&mut self, id: &str) -> ElementKey {
        self.elements.push(MemoryElement {
            id: id.to_string(),
            style: BTreeMap::new(),
        });
        ElementKey(self.elements.len() - 1)
    }

    /// `querySelector` restricted to `#id` selectors.
    pub fn resolve(&self, href: &str) -> Option<ElementKey> {
        let id = href.strip_prefix('#')?;
        self.elements.iter().position(|el| el.id == id).map(ElementKey)
    }

    pub fn stored(&self) -> Option<&str> {
        self.storage.as_ref()?.get(STORAGE_KEY).map(String::as_str)
    }

    pub fn style(&self, key: ElementKey, property: &str) -> Option<&str> {
        self.elements.get(key.0)?.style.get(property).map(String::as_str)
    }
}

impl PageHost for MemoryHost {
    fn stored_theme(&self) -> Option<String> {
        self.stored().map(str::to_string)
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn theme_attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_theme_attribute(&mut self, theme: Theme) -> Result<(), HostError> {
        self.attribute = Some(theme.as_str().to_string());
        Ok(())
    }

    fn persist_theme(&mut self, theme: Theme) -> Result<(), HostError> {
        let storage = self.storage.as_mut().ok_or(HostError::StorageUnavailable)?;
        storage.insert(STORAGE_KEY.to_string(), theme.as_str().to_string());
        Ok(())
    }

    fn scroll_into_view(&mut self, target: ElementKey) -> Result<(), HostError> {
        if target.0 >= self.elements.len() {
            return Err(HostError::UnknownElement(target));
        }
        self.scrolled.push(target);
        Ok(())
    }

    fn set_style(
        &mut self,
        target: ElementKey,
        declarations: &[StyleDeclaration],
    ) -> Result<(), HostError> {
        let element = self.elements.get_mut(target.0).ok_or(HostError::UnknownElement(target))?;
        for declaration in declarations {
            element.style.insert(declaration.property, declaration.value.clone());
        }
        Ok(())
    }
}
