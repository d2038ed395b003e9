use page_enhancer_shared::{
    ElementKey, EnhancerConfig, HostError, PageHost, StyleDeclaration, Theme,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, MediaQueryList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage, Window,
};

/// [`PageHost`] over the live document.
///
/// Elements handed to behaviors are kept in a registry and referred to by
/// index, so the pure side never sees a `web_sys` type.
pub struct DomHost {
    document: Document,
    root: Option<Element>,
    storage: Option<Storage>,
    dark_query: Option<MediaQueryList>,
    storage_key: String,
    theme_attribute: String,
    elements: Vec<Element>,
}

impl DomHost {
    pub fn new(window: &Window, document: Document, config: &EnhancerConfig) -> Self {
        // `localStorage` throws when site data is blocked; treat that as absent.
        let storage = window.local_storage().ok().flatten();
        let dark_query = window.match_media(&config.dark_scheme_query).ok().flatten();
        Self {
            root: document.document_element(),
            document,
            storage,
            dark_query,
            storage_key: config.storage_key.clone(),
            theme_attribute: config.theme_attribute.clone(),
            elements: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn dark_query(&self) -> Option<&MediaQueryList> {
        self.dark_query.as_ref()
    }

    /// Returns the existing key when the element is already registered.
    pub fn register(&mut self, element: Element) -> ElementKey {
        if let Some(key) = self.key_of(&element) {
            return key;
        }
        self.elements.push(element);
        ElementKey(self.elements.len() - 1)
    }

    pub fn key_of(&self, element: &Element) -> Option<ElementKey> {
        self.elements.iter().position(|known| known == element).map(ElementKey)
    }

    /// Resolves a link's `href` the way `document.querySelector` would. An
    /// href that is not a valid selector (a bare `#`, for one) resolves to
    /// nothing.
    pub fn resolve_anchor(&mut self, href: &str) -> Option<ElementKey> {
        let target = self.document.query_selector(href).ok().flatten()?;
        Some(self.register(target))
    }

    fn element(&self, key: ElementKey) -> Result<&Element, HostError> {
        self.elements.get(key.0).ok_or(HostError::UnknownElement(key))
    }
}

impl PageHost for DomHost {
    fn stored_theme(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(&self.storage_key).ok().flatten()
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.dark_query.as_ref().map(MediaQueryList::matches)
    }

    fn theme_attribute(&self) -> Option<String> {
        self.root.as_ref()?.get_attribute(&self.theme_attribute)
    }

    fn set_theme_attribute(&mut self, theme: Theme) -> Result<(), HostError> {
        let root = self.root.as_ref().ok_or_else(|| HostError::Dom {
            call: "documentElement",
            reason: "document has no root element".to_string(),
        })?;
        root.set_attribute(&self.theme_attribute, theme.as_str())
            .map_err(|err| dom_error("setAttribute", &err))
    }

    fn persist_theme(&mut self, theme: Theme) -> Result<(), HostError> {
        let storage = self.storage.as_ref().ok_or(HostError::StorageUnavailable)?;
        storage
            .set_item(&self.storage_key, theme.as_str())
            .map_err(|err| HostError::StorageRejected {
                key: self.storage_key.clone(),
                reason: describe(&err),
            })
    }

    fn scroll_into_view(&mut self, target: ElementKey) -> Result<(), HostError> {
        let element = self.element(target)?;
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn set_style(
        &mut self,
        target: ElementKey,
        declarations: &[StyleDeclaration],
    ) -> Result<(), HostError> {
        let element = self.element(target)?;
        let html = element.dyn_ref::<HtmlElement>().ok_or_else(|| HostError::Dom {
            call: "style",
            reason: format!("<{}> has no inline style", element.tag_name().to_lowercase()),
        })?;
        let style = html.style();
        for declaration in declarations {
            style
                .set_property(declaration.property, &declaration.value)
                .map_err(|err| dom_error("style.setProperty", &err))?;
        }
        Ok(())
    }
}

fn dom_error(call: &'static str, err: &JsValue) -> HostError {
    HostError::Dom {
        call,
        reason: describe(err),
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
