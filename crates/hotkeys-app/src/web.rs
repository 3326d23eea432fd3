//! WebAssembly entry point and browser adapters.

use crate::shortcuts::ShortcutRegistry;
use hotkeys_core::csrf::csrf_token;
use hotkeys_core::page::{
    DISMISS_CONTROL_SELECTOR, FILTER_PANEL_SELECTOR, HELP_OVERLAY_ID, HOTKEY_LIST_SELECTOR,
    OPEN_OVERLAY_SELECTOR, SEARCH_INPUT_SELECTOR,
};
use hotkeys_core::theme::THEME_DARK_CLASS;
use hotkeys_core::{
    Context, Dispatcher, Dom, HotkeyError, HotkeyResult, KeyEvent, LiveRegion, ManualToggle,
    Modifiers, Page, PanelKind, PanelToggle, PreferredToggle, ReloadMode, TargetKind,
    ThemeNotifier, ThemeRequest,
};
use js_sys::{Function, Reflect};
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Headers, HtmlDocument, HtmlElement, HtmlInputElement, KeyboardEvent,
    Request, RequestInit, Window,
};

/// Dataset key selecting the console log level.
const LOG_LEVEL_KEY: &str = "hotkeysLogLevel";

fn dom_error(e: JsValue) -> HotkeyError {
    HotkeyError::Dom(format!("{:?}", e))
}

fn component_error(e: JsValue) -> HotkeyError {
    HotkeyError::Component(format!("{:?}", e))
}

fn network_error(e: JsValue) -> HotkeyError {
    HotkeyError::Network(format!("{:?}", e))
}

/// The live document, seen through the [`Page`] trait.
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }
}

impl Page for WebPage {
    type Element = Element;

    fn navigate(&self, url: &str) -> HotkeyResult<()> {
        self.window.location().assign(url).map_err(dom_error)
    }

    fn reload(&self, mode: ReloadMode) -> HotkeyResult<()> {
        let location = self.window.location();
        let result = match mode {
            ReloadMode::Normal => location.reload(),
            ReloadMode::Forced => location.reload_with_forceget(true),
        };
        result.map_err(dom_error)
    }

    fn search_input(&self) -> Option<Element> {
        self.query(SEARCH_INPUT_SELECTOR)
    }

    fn focus_and_select(&self, element: &Element) -> HotkeyResult<()> {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.focus().map_err(dom_error)?;
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.select();
        }
        Ok(())
    }

    fn filter_panel(&self) -> Option<Element> {
        self.query(FILTER_PANEL_SELECTOR)
    }

    fn help_overlay(&self) -> Option<Element> {
        self.document.get_element_by_id(HELP_OVERLAY_ID)
    }

    fn open_overlay(&self) -> Option<Element> {
        self.query(OPEN_OVERLAY_SELECTOR)
    }

    fn dismiss(&self, overlay: &Element) -> HotkeyResult<bool> {
        match overlay
            .query_selector(DISMISS_CONTROL_SELECTOR)
            .map_err(dom_error)?
        {
            Some(control) => {
                let html = control.dyn_ref::<HtmlElement>().ok_or_else(|| {
                    HotkeyError::Dom(format!("<{}> is not clickable", control.tag_name()))
                })?;
                html.click();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn toggle_theme(&self) -> HotkeyResult<bool> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| HotkeyError::Dom("No document element".to_string()))?;
        root.class_list().toggle(THEME_DARK_CLASS).map_err(dom_error)
    }
}

/// Shows panels through `window.bootstrap` when it is loaded.
pub struct BootstrapToggle {
    window: Window,
}

impl BootstrapToggle {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// `window.bootstrap.<Component>`, if present.
    fn component(&self, kind: PanelKind) -> Option<JsValue> {
        let bootstrap = Reflect::get(&self.window, &JsValue::from_str("bootstrap")).ok()?;
        if bootstrap.is_undefined() || bootstrap.is_null() {
            return None;
        }
        let component =
            Reflect::get(&bootstrap, &JsValue::from_str(kind.component_name())).ok()?;
        (!component.is_undefined() && !component.is_null()).then_some(component)
    }
}

fn method(target: &JsValue, name: &str) -> HotkeyResult<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(component_error)?
        .dyn_into::<Function>()
        .map_err(|_| HotkeyError::Component(format!("{} is not a function", name)))
}

impl PanelToggle<Element> for BootstrapToggle {
    fn is_available(&self, kind: PanelKind) -> bool {
        self.component(kind).is_some()
    }

    fn show(&self, element: &Element, kind: PanelKind) -> HotkeyResult<()> {
        let component = self.component(kind).ok_or_else(|| {
            HotkeyError::Unavailable(format!("bootstrap.{}", kind.component_name()))
        })?;
        let instance = method(&component, "getOrCreateInstance")?
            .call1(&component, element)
            .map_err(component_error)?;
        method(&instance, "show")?
            .call0(&instance)
            .map_err(component_error)?;
        Ok(())
    }
}

/// Element operations on the live document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&self, tag: &str) -> HotkeyResult<Element> {
        self.document.create_element(tag).map_err(dom_error)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> HotkeyResult<()> {
        parent.append_child(child).map(|_| ()).map_err(dom_error)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> HotkeyResult<()> {
        element.set_attribute(name, value).map_err(dom_error)
    }

    fn remove_attribute(&self, element: &Element, name: &str) -> HotkeyResult<()> {
        element.remove_attribute(name).map_err(dom_error)
    }

    fn add_class(&self, element: &Element, class: &str) -> HotkeyResult<()> {
        element.class_list().add_1(class).map_err(dom_error)
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> HotkeyResult<()> {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.style().set_property(property, value).map_err(dom_error),
            None => Ok(()),
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }
}

/// Posts theme changes with `fetch`.
pub struct FetchThemeNotifier {
    window: Window,
    document: Document,
}

impl FetchThemeNotifier {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// URI-decoded `csrftoken` cookie.
    fn csrf_token(&self) -> Option<String> {
        let cookies = self.document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
        let raw = csrf_token(&cookies)?;
        Some(
            js_sys::decode_uri_component(raw)
                .map(String::from)
                .unwrap_or_else(|_| raw.to_string()),
        )
    }
}

impl ThemeNotifier for FetchThemeNotifier {
    fn notify(&self, endpoint: &str) {
        let request = ThemeRequest::new(endpoint, self.csrf_token());
        let window = self.window.clone();

        // Detached on purpose. Nothing awaits this task, and its outcome is
        // only logged: no retry, no timeout, no rollback of the local toggle.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = send_theme_request(&window, &request).await {
                log::debug!("Theme notification to {} failed: {}", request.url, e);
            }
        });
    }
}

async fn send_theme_request(window: &Window, request: &ThemeRequest) -> HotkeyResult<()> {
    let headers = Headers::new().map_err(network_error)?;
    for (name, value) in request.headers() {
        headers.set(name, value).map_err(network_error)?;
    }

    let init = RequestInit::new();
    init.set_method(ThemeRequest::METHOD);
    init.set_headers(&headers);

    let fetch_request =
        Request::new_with_str_and_init(&request.url, &init).map_err(network_error)?;
    JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(network_error)?;
    Ok(())
}

/// Dataset lookup on `<body>`, falling back to `<html>`.
fn dataset_lookup(document: &Document) -> impl Fn(&str) -> Option<String> {
    let body = document.body().map(|b| b.dataset());
    let root = document
        .document_element()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|e| e.dataset());

    move |key| {
        body.as_ref()
            .and_then(|d| d.get(key))
            .or_else(|| root.as_ref().and_then(|d| d.get(key)))
    }
}

/// Convert a browser keyboard event.
fn key_event(event: &KeyboardEvent) -> KeyEvent {
    let target = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| {
            let editable = el
                .dyn_ref::<HtmlElement>()
                .map(|h| h.is_content_editable())
                .unwrap_or(false);
            TargetKind::classify(&el.tag_name(), editable)
        })
        .unwrap_or_default();

    KeyEvent {
        key: event.key(),
        code: event.code(),
        modifiers: Modifiers {
            shift: event.shift_key(),
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        },
        target,
    }
}

/// Fill an empty `[data-hotkeys-list]` container with the cheat sheet.
fn fill_cheat_sheet(document: &Document, context: &Context) -> HotkeyResult<()> {
    let Some(list) = document
        .query_selector(HOTKEY_LIST_SELECTOR)
        .map_err(dom_error)?
    else {
        return Ok(());
    };
    if list.child_element_count() > 0 {
        return Ok(());
    }

    for shortcut in ShortcutRegistry::for_role(context.role) {
        let term = document.create_element("dt").map_err(dom_error)?;
        let kbd = document.create_element("kbd").map_err(dom_error)?;
        kbd.set_text_content(Some(&shortcut.format()));
        term.append_child(&kbd).map_err(dom_error)?;

        let detail = document.create_element("dd").map_err(dom_error)?;
        detail.set_text_content(Some(shortcut.description));

        list.append_child(&term).map_err(dom_error)?;
        list.append_child(&detail).map_err(dom_error)?;
    }
    Ok(())
}

/// Read the page context and bind the keydown listener.
fn install(window: Window, document: Document) -> HotkeyResult<()> {
    let context = Context::from_lookup(dataset_lookup(&document));
    log::info!(
        "Hotkeys for role {} (theme endpoint: {})",
        context.role,
        context.theme_endpoint().unwrap_or("none")
    );

    if let Err(e) = fill_cheat_sheet(&document, &context) {
        log::warn!("Failed to render hotkey cheat sheet: {}", e);
    }

    let toggle = PreferredToggle::new(
        BootstrapToggle::new(window.clone()),
        ManualToggle::new(WebDom::new(document.clone())),
    );
    let dispatcher = Dispatcher::new(
        context,
        WebPage::new(window.clone(), document.clone()),
        toggle,
        LiveRegion::new(WebDom::new(document.clone())),
        FetchThemeNotifier::new(window.clone(), document),
    );

    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key_event = key_event(&event);
        let dispatch = dispatcher.select(&key_event);
        if dispatch.is_ignored() {
            return;
        }
        if dispatch.prevent_default {
            event.prevent_default();
        }
        log::debug!("Hotkey {:?} ({}) -> {}", key_event.key, key_event.code, dispatch.action);
        dispatcher.perform(dispatch.action);
    });

    window
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    listener.forget(); // Bound for the page's lifetime

    Ok(())
}

/// Initialize logging and install the hotkey dispatcher.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let level = dataset_lookup(&document)(LOG_LEVEL_KEY)
        .and_then(|raw| log::Level::from_str(&raw).ok())
        .unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Hotkeys: logger already initialized".into());
    }

    log::info!("Starting storefront hotkeys (WASM)");

    if let Err(e) = install(window, document) {
        log::error!("Hotkeys not installed: {}", e);
    }
}
