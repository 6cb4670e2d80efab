// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the wiki search.
//!
//! This is the browser-facing side: `fetch` for the index, `setTimeout` for
//! the debounce, `innerHTML` for results. Everything with logic in it lives in
//! the controllers and the renderer; this module only plugs them into the DOM.
//!
//! # Usage
//!
//! ```js
//! import init, { WikiSearch } from "./pkg/wiki_search.js";
//!
//! await init();
//! const search = new WikiSearch();      // or new WikiSearch({ debounceMs: 200 })
//! search.attach();                      // wires #quick-search and #search-input
//!
//! // Direct API, no DOM involved
//! await search.load();
//! const results = search.search("magik", 10);
//! ```

use crate::config::{FieldConfig, SearchConfig};
use crate::controller::{Debouncer, LocalTask, ResultsView, Scheduler, SearchField};
use crate::error::IndexLoadError;
use crate::index::{IndexCache, IndexSource};
use crate::render::{Layout, Renderer};
use gloo_timers::callback::Timeout;
use js_sys::Promise;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent, Node, Response};

type BrowserField = SearchField<FetchSource, DomResultsView, TimeoutScheduler>;
type Listener = Closure<dyn FnMut(Event)>;

/// Install the panic hook and console subscriber. Safe to call repeatedly.
fn init_logging() {
    console_error_panic_hook::set_once();
    // A second WikiSearch on the same page finds the subscriber already set.
    let _ = tracing_wasm::try_set_as_global_default();
}

fn js_error(e: JsValue) -> IndexLoadError {
    IndexLoadError::Fetch(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

// =============================================================================
// INDEX SOURCE
// =============================================================================

/// Fetches the index over HTTP with `window.fetch`.
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl IndexSource for FetchSource {
    async fn fetch(&self) -> Result<String, IndexLoadError> {
        let window = web_sys::window()
            .ok_or_else(|| IndexLoadError::Fetch("window unavailable".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| IndexLoadError::Fetch("fetch did not return a Response".to_string()))?;

        if !resp.ok() {
            return Err(IndexLoadError::Http {
                status: resp.status(),
                url: self.url.clone(),
            });
        }

        let body = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| IndexLoadError::Fetch("response body is not text".to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// =============================================================================
// SCHEDULER AND VIEW
// =============================================================================

/// `setTimeout`-backed scheduler. Fired tasks are spawned on the microtask queue.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: LocalTask) -> Timeout {
        Timeout::new(delay_ms, move || spawn_local(task))
    }

    fn cancel(&self, handle: Timeout) {
        // Dropping a Timeout clears it.
        drop(handle);
    }
}

/// Writes markup into a results container.
pub struct DomResultsView {
    container: Element,
    /// Class toggled with visibility; `None` for the always-visible page.
    active_class: Option<String>,
}

impl DomResultsView {
    /// The active class is only toggled for layouts that hide when empty.
    pub fn new(container: Element, layout: Layout, active_class: &str) -> Self {
        Self {
            container,
            active_class: layout
                .toggles_visibility()
                .then(|| active_class.to_string()),
        }
    }

    fn set_active(&self, active: bool) {
        let Some(class) = &self.active_class else {
            return;
        };
        let list = self.container.class_list();
        let result = if active {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(e) = result {
            warn!(class = %class, error = ?e, "failed to toggle results class");
        }
    }
}

impl ResultsView for DomResultsView {
    fn show(&self, markup: &str) {
        self.container.set_inner_html(markup);
        self.set_active(true);
    }

    fn hide(&self) {
        self.container.set_inner_html("");
        self.set_active(false);
    }
}

// =============================================================================
// WASM HANDLE
// =============================================================================

/// Search handle for one page.
///
/// Owns the index cache shared by both fields and keeps the DOM listeners
/// alive for as long as the handle lives.
#[wasm_bindgen]
pub struct WikiSearch {
    config: SearchConfig,
    cache: Rc<IndexCache<FetchSource>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl WikiSearch {
    /// Create a handle. `config` is optional; see `SearchConfig` for fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<WikiSearch, JsValue> {
        init_logging();

        let config: SearchConfig = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(|e| e.to_string())?
            }
            _ => SearchConfig::default(),
        };

        let cache = Rc::new(IndexCache::new(FetchSource::new(config.index_url.clone())));
        Ok(WikiSearch {
            config,
            cache,
            listeners: Vec::new(),
        })
    }

    /// Wire up whichever search inputs exist on this page.
    ///
    /// Missing elements are skipped: article pages have only the quick search,
    /// the search page has both.
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;

        if let Some((input, container)) = find_field(&document, &self.config.quick)? {
            let renderer = Renderer::quick(&self.config.quick, &self.config.messages);
            let view =
                DomResultsView::new(container.clone(), renderer.layout(), &self.config.active_class);
            let field = self.make_field(view, renderer, self.config.quick.limit);
            self.attach_quick(&document, input, container, field)?;
            debug!(input = %self.config.quick.input_id, "quick search attached");
        }

        if let Some((input, container)) = find_field(&document, &self.config.full)? {
            let renderer = Renderer::full(&self.config.full, &self.config.messages);
            let view = DomResultsView::new(container, renderer.layout(), &self.config.active_class);
            let field = self.make_field(view, renderer, self.config.full.limit);
            self.listen(input.as_ref(), "input", input_listener(&input, &field))?;
            debug!(input = %self.config.full.input_id, "full search attached");
        }

        Ok(())
    }

    /// Load the index now. Resolves to the number of entries (0 on failure).
    #[wasm_bindgen]
    pub fn load(&self) -> Promise {
        let cache = Rc::clone(&self.cache);
        future_to_promise(async move {
            let index = cache.load().await;
            Ok(JsValue::from(index.len() as u32))
        })
    }

    /// Rank the loaded index. Returns `[]` until the index is loaded.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let limit = limit.unwrap_or(self.config.full.limit);
        let results = self.cache.search(query, limit);
        // Flattened entries serialize as maps; emit plain objects, not `Map`s.
        results
            .serialize(&Serializer::json_compatible())
            .map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen(js_name = "isLoaded")]
    pub fn is_loaded(&self) -> bool {
        self.cache.state().is_loaded()
    }

    #[wasm_bindgen(js_name = "entryCount")]
    pub fn entry_count(&self) -> usize {
        self.cache.get().map_or(0, |index| index.len())
    }
}

impl WikiSearch {
    fn make_field(&self, view: DomResultsView, renderer: Renderer, limit: usize) -> Rc<BrowserField> {
        SearchField::new(
            Rc::clone(&self.cache),
            view,
            renderer,
            limit,
            Debouncer::new(TimeoutScheduler, self.config.debounce_ms),
        )
    }

    fn listen(
        &mut self,
        target: &web_sys::EventTarget,
        event: &str,
        listener: Listener,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push(listener);
        Ok(())
    }

    fn attach_quick(
        &mut self,
        document: &web_sys::Document,
        input: HtmlInputElement,
        container: Element,
        field: Rc<BrowserField>,
    ) -> Result<(), JsValue> {
        self.listen(input.as_ref(), "input", input_listener(&input, &field))?;

        let on_focus = {
            let field = Rc::clone(&field);
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Some(load) = field.on_focus() {
                    spawn_local(load);
                }
            })
        };
        self.listen(input.as_ref(), "focus", on_focus)?;

        let on_keydown = {
            let field = Rc::clone(&field);
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let is_enter = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Enter");
                if !is_enter {
                    return;
                }
                if let Some(url) = field.on_enter() {
                    event.prevent_default();
                    navigate(&url);
                }
            })
        };
        self.listen(input.as_ref(), "keydown", on_keydown)?;

        let on_click = {
            let field = Rc::clone(&field);
            let input: Node = input.clone().into();
            let container: Node = container.into();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = target
                    .as_ref()
                    .is_some_and(|node| input.contains(Some(node)) || container.contains(Some(node)));
                if !inside {
                    field.on_outside_click();
                }
            })
        };
        self.listen(document.as_ref(), "click", on_click)
    }
}

fn find_field(
    document: &web_sys::Document,
    field: &FieldConfig,
) -> Result<Option<(HtmlInputElement, Element)>, JsValue> {
    let (Some(input), Some(container)) = (
        document.get_element_by_id(&field.input_id),
        document.get_element_by_id(&field.results_id),
    ) else {
        return Ok(None);
    };
    let input = input
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", field.input_id)))?;
    Ok(Some((input, container)))
}

fn input_listener(input: &HtmlInputElement, field: &Rc<BrowserField>) -> Listener {
    let input = input.clone();
    let field = Rc::clone(field);
    Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        field.on_input(&input.value());
    })
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        warn!(url, error = ?e, "navigation failed");
    }
}

/// Highlight `query` terms in `text` (exposed for page scripts).
#[wasm_bindgen]
pub fn highlight(text: &str, query: &str) -> String {
    crate::highlight::highlight(text, query)
}
