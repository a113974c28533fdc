//! In-memory page for exercising behaviors without a browser.
//!
//! `FakeDom` keeps a small element tree with classes, attributes, text and
//! layout numbers, and understands the selector subset the behaviors use:
//! tag, `#id`, `.class`, `[attr]`, `[attr="v"]`, `[attr*="v"]`, joined by the
//! descendant combinator. Events are delivered only to listeners on the target
//! itself (no bubbling).

use crate::dom::{Dom, DomEvent, Handler};
use crate::storage::{PreferenceStore, StorageError};
use futures::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeElement(usize);

const HTML: usize = 0;
const BODY: usize = 1;

struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    offset_top: f64,
    offset_height: f64,
}

impl Node {
    fn new(tag: &str, parent: Option<usize>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent,
            children: Vec::new(),
            offset_top: 0.0,
            offset_height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Element(usize),
    Window,
}

struct ListenerEntry {
    target: Target,
    event: &'static str,
    handler: Rc<RefCell<Handler>>,
}

struct Inner {
    nodes: Vec<Node>,
    listeners: Vec<Option<ListenerEntry>>,
    scroll_y: f64,
    title: String,
    print_count: usize,
}

#[derive(Clone)]
pub struct FakeDom {
    inner: Rc<RefCell<Inner>>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    /// An empty document: `<html><body></body></html>`.
    pub fn new() -> Self {
        let mut html = Node::new("html", None);
        html.children.push(BODY);
        let body = Node::new("body", Some(HTML));
        Self {
            inner: Rc::new(RefCell::new(Inner {
                nodes: vec![html, body],
                listeners: Vec::new(),
                scroll_y: 0.0,
                title: String::new(),
                print_count: 0,
            })),
        }
    }

    pub fn body_element(&self) -> FakeElement {
        FakeElement(BODY)
    }

    /// Append a child described by a compound selector, e.g.
    /// `a.nav__link[href="#about"]` or `section#skills.hide`.
    ///
    /// Panics on a description it cannot parse.
    pub fn append(&self, parent: &FakeElement, description: &str) -> FakeElement {
        let compound = parse_compound(description)
            .unwrap_or_else(|| panic!("unparseable element description: {description}"));
        let mut inner = self.inner.borrow_mut();
        let index = inner.nodes.len();
        let mut node = Node::new(compound.tag.as_deref().unwrap_or("div"), Some(parent.0));
        if let Some(id) = compound.id {
            node.attributes.insert("id".to_string(), id);
        }
        node.classes = compound.classes;
        for attr in compound.attrs {
            let value = match attr.op {
                AttrOp::Exists => String::new(),
                AttrOp::Equals(v) | AttrOp::Contains(v) => v,
            };
            node.attributes.insert(attr.name, value);
        }
        inner.nodes.push(node);
        inner.nodes[parent.0].children.push(index);
        FakeElement(index)
    }

    pub fn set_geometry(&self, el: &FakeElement, top: f64, height: f64) {
        let mut inner = self.inner.borrow_mut();
        let node = &mut inner.nodes[el.0];
        node.offset_top = top;
        node.offset_height = height;
    }

    pub fn classes(&self, el: &FakeElement) -> Vec<String> {
        self.inner.borrow().nodes[el.0].classes.clone()
    }

    pub fn print_count(&self) -> usize {
        self.inner.borrow().print_count
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.iter().flatten().count()
    }

    /// Click `el`. Returns whether a listener suppressed the default action.
    pub fn click(&self, el: &FakeElement) -> bool {
        self.dispatch(Target::Element(el.0), "click")
    }

    /// Move the viewport and fire a window scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.inner.borrow_mut().scroll_y = y;
        self.dispatch(Target::Window, "scroll");
    }

    fn dispatch(&self, target: Target, event: &str) -> bool {
        // Collected first so handlers can borrow the tree while they run.
        let handlers: Vec<Rc<RefCell<Handler>>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .flatten()
            .filter(|l| l.target == target && l.event == event)
            .map(|l| l.handler.clone())
            .collect();

        let ev = FakeEvent::default();
        for handler in handlers {
            (*handler.borrow_mut())(&ev);
        }
        ev.default_prevented.get()
    }

    fn document_order(inner: &Inner) -> Vec<usize> {
        let mut order = Vec::with_capacity(inner.nodes.len());
        let mut stack = vec![HTML];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(inner.nodes[index].children.iter().rev());
        }
        order
    }

    fn add_listener(&self, target: Target, event: &'static str, handler: Handler) -> FakeListener {
        let mut inner = self.inner.borrow_mut();
        inner.listeners.push(Some(ListenerEntry {
            target,
            event,
            handler: Rc::new(RefCell::new(handler)),
        }));
        FakeListener {
            dom: Rc::downgrade(&self.inner),
            slot: inner.listeners.len() - 1,
        }
    }
}

#[derive(Default)]
struct FakeEvent {
    default_prevented: Cell<bool>,
}

impl DomEvent for FakeEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

/// Detaches its listener from the `FakeDom` on drop.
pub struct FakeListener {
    dom: Weak<RefCell<Inner>>,
    slot: usize,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        if let Some(inner) = self.dom.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.listeners[self.slot] = None;
            }
        }
    }
}

impl Dom for FakeDom {
    type Element = FakeElement;
    type Listener = FakeListener;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        let Some(chain) = parse_selector(selector) else {
            return Vec::new();
        };
        let inner = self.inner.borrow();
        Self::document_order(&inner)
            .into_iter()
            .filter(|&index| matches_chain(&inner, index, &chain))
            .map(FakeElement)
            .collect()
    }

    fn body(&self) -> Option<FakeElement> {
        Some(FakeElement(BODY))
    }

    fn has_class(&self, el: &FakeElement, class: &str) -> bool {
        self.inner.borrow().nodes[el.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, el: &FakeElement, class: &str) {
        let mut inner = self.inner.borrow_mut();
        let classes = &mut inner.nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, el: &FakeElement, class: &str) {
        self.inner.borrow_mut().nodes[el.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, el: &FakeElement, class: &str) -> bool {
        if self.has_class(el, class) {
            self.remove_class(el, class);
            false
        } else {
            self.add_class(el, class);
            true
        }
    }

    fn attribute(&self, el: &FakeElement, name: &str) -> Option<String> {
        let inner = self.inner.borrow();
        let node = &inner.nodes[el.0];
        if name == "class" {
            return Some(node.classes.join(" "));
        }
        node.attributes.get(name).cloned()
    }

    fn set_attribute(&self, el: &FakeElement, name: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        let node = &mut inner.nodes[el.0];
        if name == "class" {
            node.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, el: &FakeElement) -> String {
        self.inner.borrow().nodes[el.0].text.clone()
    }

    fn set_text(&self, el: &FakeElement, text: &str) {
        self.inner.borrow_mut().nodes[el.0].text = text.to_string();
    }

    fn offset_top(&self, el: &FakeElement) -> f64 {
        self.inner.borrow().nodes[el.0].offset_top
    }

    fn offset_height(&self, el: &FakeElement) -> f64 {
        self.inner.borrow().nodes[el.0].offset_height
    }

    fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    fn title(&self) -> String {
        self.inner.borrow().title.clone()
    }

    fn set_title(&self, title: &str) {
        self.inner.borrow_mut().title = title.to_string();
    }

    fn print(&self) {
        self.inner.borrow_mut().print_count += 1;
    }

    fn listen(&self, el: &FakeElement, event: &'static str, handler: Handler) -> FakeListener {
        self.add_listener(Target::Element(el.0), event, handler)
    }

    fn listen_window(&self, event: &'static str, handler: Handler) -> FakeListener {
        self.add_listener(Target::Window, event, handler)
    }

    /// Requires a surrounding `tokio::task::LocalSet`.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}

// -- Selector subset --

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

#[derive(Debug)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Debug)]
enum AttrOp {
    Exists,
    Equals(String),
    Contains(String),
}

fn is_compound_delimiter(ch: char) -> bool {
    matches!(ch, '#' | '.' | '[')
}

fn parse_selector(selector: &str) -> Option<Vec<Compound>> {
    let chain: Vec<Compound> = selector
        .split_whitespace()
        .map(parse_compound)
        .collect::<Option<_>>()?;
    if chain.is_empty() {
        None
    } else {
        Some(chain)
    }
}

fn parse_compound(s: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let tag_end = s.find(is_compound_delimiter).unwrap_or(s.len());
    if tag_end > 0 {
        compound.tag = Some(s[..tag_end].to_ascii_lowercase());
    }

    let mut rest = &s[tag_end..];
    while let Some(first) = rest.chars().next() {
        match first {
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(is_compound_delimiter).unwrap_or(body.len());
                if end == 0 {
                    return None;
                }
                let name = body[..end].to_string();
                if first == '#' {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
                rest = &body[end..];
            }
            '[' => {
                let close = rest.find(']')?;
                compound.attrs.push(parse_attr(&rest[1..close])?);
                rest = &rest[close + 1..];
            }
            _ => return None,
        }
    }
    Some(compound)
}

fn parse_attr(s: &str) -> Option<AttrMatch> {
    let unquote = |v: &str| v.trim_matches(|c| c == '"' || c == '\'').to_string();
    let (name, op) = if let Some((name, value)) = s.split_once("*=") {
        (name, AttrOp::Contains(unquote(value)))
    } else if let Some((name, value)) = s.split_once('=') {
        (name, AttrOp::Equals(unquote(value)))
    } else {
        (s, AttrOp::Exists)
    };
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(AttrMatch {
        name: name.to_string(),
        op,
    })
}

fn matches_compound(node: &Node, compound: &Compound) -> bool {
    if let Some(tag) = &compound.tag {
        if *tag != node.tag {
            return false;
        }
    }
    if let Some(id) = &compound.id {
        if node.attributes.get("id") != Some(id) {
            return false;
        }
    }
    if !compound
        .classes
        .iter()
        .all(|class| node.classes.contains(class))
    {
        return false;
    }
    compound.attrs.iter().all(|attr| {
        let value = if attr.name == "class" {
            (!node.classes.is_empty()).then(|| node.classes.join(" "))
        } else {
            node.attributes.get(&attr.name).cloned()
        };
        match (&attr.op, value) {
            (_, None) => false,
            (AttrOp::Exists, Some(_)) => true,
            (AttrOp::Equals(expected), Some(v)) => v == *expected,
            (AttrOp::Contains(needle), Some(v)) => !needle.is_empty() && v.contains(needle.as_str()),
        }
    })
}

fn matches_chain(inner: &Inner, index: usize, chain: &[Compound]) -> bool {
    let Some((last, mut ancestors)) = chain.split_last() else {
        return false;
    };
    if !matches_compound(&inner.nodes[index], last) {
        return false;
    }

    let mut current = inner.nodes[index].parent;
    while let Some((wanted, rest)) = ancestors.split_last() {
        loop {
            let Some(parent) = current else {
                return false;
            };
            current = inner.nodes[parent].parent;
            if matches_compound(&inner.nodes[parent], wanted) {
                break;
            }
        }
        ancestors = rest;
    }
    true
}

// -- Storage --

/// Shared in-memory `PreferenceStore`. Clones see the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            entries: Rc::default(),
            unavailable: true,
        }
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendant_partial_href_match() {
        let dom = FakeDom::new();
        let body = dom.body_element();
        let menu = dom.append(&body, "div#nav-menu");
        let list = dom.append(&menu, "ul");
        let about = dom.append(&list, "a.nav__link[href=\"#about\"]");
        let outside = dom.append(&body, "a[href=\"#about\"]");

        assert_eq!(dom.query("#nav-menu a[href*=\"about\"]"), Some(about));
        assert_eq!(dom.query_all("a[href*=\"about\"]"), vec![about, outside]);
        assert_eq!(dom.query("#nav-menu a[href*=\"contact\"]"), None);
    }

    #[test]
    fn test_compound_class_selector() {
        let dom = FakeDom::new();
        let body = dom.body_element();
        let both = dom.append(&body, "div.skills__name.showmore");
        dom.append(&body, "div.skills__name");

        assert_eq!(dom.query_all(".skills__name.showmore"), vec![both]);
        assert_eq!(dom.query_all(".skills__name").len(), 2);
    }

    #[test]
    fn test_attribute_presence_selector() {
        let dom = FakeDom::new();
        let body = dom.body_element();
        let home = dom.append(&body, "section#home");
        dom.append(&body, "section.footer");

        assert_eq!(dom.query_all("section[id]"), vec![home]);
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let dom = FakeDom::new();
        dom.append(&dom.body_element(), "div#x");
        assert_eq!(dom.query("div#"), None);
        assert_eq!(dom.query("a[href*=\"x\""), None);
        assert_eq!(dom.query(""), None);
    }

    #[test]
    fn test_dropping_listener_detaches_it() {
        let dom = FakeDom::new();
        let button = dom.append(&dom.body_element(), "button#b");
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let listener = dom.listen(&button, "click", Box::new(move |_: &dyn DomEvent| {
            counter.set(counter.get() + 1)
        }));

        dom.click(&button);
        drop(listener);
        dom.click(&button);

        assert_eq!(hits.get(), 1);
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn test_unavailable_store_fails_every_call() {
        let store = MemoryStore::unavailable();
        assert_eq!(store.get("k"), Err(StorageError::Unavailable));
        assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
    }
}
