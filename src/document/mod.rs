// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! A minimal document tree.
//!
//! The presentation is held as a tree of elements, each with a tag, a set of
//! class markers, `data-*` attributes and optional text. The slideshow
//! controller only ever communicates with the renderer through these class
//! markers.
//!
//! # Style pass
//!
//! Class mutations are not observed immediately. A style pass runs when
//! layout is read ([`Document::offset_width`]) and when a frame is committed
//! ([`Document::commit_frame`]). The pass compares each element's classes
//! with the classes seen by the previous pass, starting an animation for any
//! keyframe class that appeared and cancelling it for any that went away. A
//! class removed and re-added between two passes therefore changes nothing.

pub(crate) mod animation;
pub(crate) mod class_list;
pub(crate) mod selector;

use std::{collections::BTreeMap, time::Instant};

use log::warn;

use crate::document::{
    animation::{Animation, Keyframes},
    class_list::ClassList,
    selector::Selector,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct ElementId(usize);

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag: String,
    pub(crate) classes: ClassList,
    pub(crate) dataset: BTreeMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) children: Vec<ElementId>,

    // Classes as seen by the last style pass.
    styled: ClassList,
    animations: Vec<Animation>,
}

impl Element {
    fn new(tag: &str, classes: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: ClassList::parse(classes),
            dataset: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            styled: ClassList::new(),
            animations: Vec::new(),
        }
    }

    /// The most recently started animation still applied to this element.
    pub(crate) fn animation(&self) -> Option<&Animation> {
        self.animations.iter().max_by_key(|a| a.generation)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Document {
    title: String,
    elements: Vec<Element>,
    generation: u64,
}

impl Document {
    /// Creates a document holding a single `main` root element.
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            elements: vec![Element::new("main", "")],
            generation: 0,
        }
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Appends a new element as the last child of `parent`.
    pub(crate) fn create_element(&mut self, parent: ElementId, tag: &str, classes: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag, classes));
        if let Some(parent) = self.elements.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    pub(crate) fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.text = Some(text.to_string());
        }
    }

    /// Sets a `data-*` attribute; `key` is given without the `data-` prefix.
    pub(crate) fn set_data(&mut self, id: ElementId, key: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.dataset.insert(key.to_string(), value.to_string());
        }
    }

    pub(crate) fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub(crate) fn class_list_mut(&mut self, id: ElementId) -> Option<&mut ClassList> {
        self.elements.get_mut(id.0).map(|e| &mut e.classes)
    }

    pub(crate) fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    pub(crate) fn data(&self, id: ElementId, key: &str) -> Option<&str> {
        self.element(id)?.dataset.get(key).map(String::as_str)
    }

    pub(crate) fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// All elements matching `selector`, in document order.
    pub(crate) fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let root = self.root();
        let mut found = self.query_all_within(root, selector);
        if self.matches(root, selector) {
            found.insert(0, root);
        }
        found
    }

    /// The first element matching `selector`, in document order.
    pub(crate) fn query(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    /// All descendants of `root` (excluding `root` itself) matching
    /// `selector`, in document order.
    pub(crate) fn query_all_within(&self, root: ElementId, selector: &str) -> Vec<ElementId> {
        let Some(selector) = Self::parse_selector(selector) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(element) = self.element(id) {
                if selector.matches(&element.tag, &element.classes) {
                    found.push(id);
                }
                stack.extend(element.children.iter().rev().copied());
            }
        }
        found
    }

    /// Reads the laid-out width of an element, in terminal cells.
    ///
    /// Reading layout flushes pending class changes through the style pass,
    /// exactly as a frame commit would.
    pub(crate) fn offset_width(&mut self, id: ElementId) -> u16 {
        self.style_pass(Instant::now());
        self.element(id)
            .and_then(|e| e.text.as_deref())
            .map(|t| t.chars().count().min(u16::MAX as usize) as u16)
            .unwrap_or(0)
    }

    /// Runs the style pass for a frame about to be drawn at `now`.
    pub(crate) fn commit_frame(&mut self, now: Instant) {
        self.style_pass(now);
    }

    fn style_pass(&mut self, now: Instant) {
        for element in &mut self.elements {
            if element.classes == element.styled {
                continue;
            }

            element
                .animations
                .retain(|a| element.classes.contains(a.keyframes.class_name()));

            for name in element.classes.iter() {
                let Some(keyframes) = Keyframes::from_class(name) else {
                    continue;
                };
                if !element.styled.contains(name) {
                    self.generation += 1;
                    element.animations.push(Animation {
                        keyframes,
                        generation: self.generation,
                        started: now,
                    });
                }
            }

            element.styled = element.classes.clone();
        }
    }

    fn matches(&self, id: ElementId, selector: &str) -> bool {
        match (self.element(id), Self::parse_selector(selector)) {
            (Some(element), Some(selector)) => selector.matches(&element.tag, &element.classes),
            _ => false,
        }
    }

    fn parse_selector(selector: &str) -> Option<Selector> {
        match selector.parse::<Selector>() {
            Ok(selector) => Some(selector),
            Err(e) => {
                warn!("ignoring query: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new("sample");
        let root = doc.root();
        let first = doc.create_element(root, "section", "slide");
        let item = doc.create_element(first, "p", "initially-hidden");
        doc.set_data(item, "animation", "fade-in");
        let second = doc.create_element(root, "section", "slide special");
        (doc, first, item, second)
    }

    #[test]
    fn tag_selectors_match_by_element_type() {
        let (doc, first, item, second) = sample();
        assert_eq!(doc.query_all("section"), vec![first, second]);
        assert_eq!(doc.query("p.initially-hidden"), Some(item));
        assert_eq!(doc.query("div.slide"), None);
    }

    #[test]
    fn query_all_returns_document_order() {
        let (doc, first, _, second) = sample();
        assert_eq!(doc.query_all(".slide"), vec![first, second]);
        assert_eq!(doc.query(".slide.special"), Some(second));
        assert_eq!(doc.query(".missing"), None);
    }

    #[test]
    fn query_all_within_searches_descendants_only() {
        let (doc, first, item, second) = sample();
        assert_eq!(doc.query_all_within(first, ".initially-hidden"), vec![item]);
        assert!(doc.query_all_within(second, ".initially-hidden").is_empty());
        assert!(doc.query_all_within(first, ".slide").is_empty());
    }

    #[test]
    fn malformed_selector_matches_nothing() {
        let (doc, _, _, _) = sample();
        assert!(doc.query_all("#slide").is_empty());
        assert!(doc.query_all(".slide .initially-hidden").is_empty());
        assert_eq!(doc.query(""), None);
    }

    #[test]
    fn data_attributes_are_readable() {
        let (doc, _, item, _) = sample();
        assert_eq!(doc.data(item, "animation"), Some("fade-in"));
        assert_eq!(doc.data(item, "delay"), None);
    }

    #[test]
    fn keyframe_class_starts_animation_on_style_pass() {
        let (mut doc, _, item, _) = sample();
        doc.class_list_mut(item).unwrap().add("fade-in");
        assert!(doc.element(item).unwrap().animation().is_none());

        doc.commit_frame(Instant::now());
        let animation = doc.element(item).unwrap().animation().copied().unwrap();
        assert_eq!(animation.keyframes, Keyframes::FadeIn);
    }

    #[test]
    fn remove_and_add_without_layout_read_is_collapsed() {
        let (mut doc, _, item, _) = sample();
        doc.class_list_mut(item).unwrap().add("fade-in");
        doc.commit_frame(Instant::now());
        let before = doc.element(item).unwrap().animation().unwrap().generation;

        doc.class_list_mut(item).unwrap().remove("fade-in");
        doc.class_list_mut(item).unwrap().add("fade-in");
        doc.commit_frame(Instant::now());

        let after = doc.element(item).unwrap().animation().unwrap().generation;
        assert_eq!(before, after);
    }

    #[test]
    fn remove_and_add_with_layout_read_restarts() {
        let (mut doc, _, item, _) = sample();
        doc.class_list_mut(item).unwrap().add("fade-in");
        doc.commit_frame(Instant::now());
        let before = doc.element(item).unwrap().animation().unwrap().generation;

        doc.class_list_mut(item).unwrap().remove("fade-in");
        doc.offset_width(item);
        assert!(doc.element(item).unwrap().animation().is_none());

        doc.class_list_mut(item).unwrap().add("fade-in");
        doc.commit_frame(Instant::now());

        let after = doc.element(item).unwrap().animation().unwrap().generation;
        assert!(after > before);
    }

    #[test]
    fn plain_classes_never_animate() {
        let (mut doc, first, _, _) = sample();
        doc.class_list_mut(first).unwrap().add("active");
        doc.commit_frame(Instant::now());
        assert!(doc.element(first).unwrap().animation().is_none());
        assert!(doc.has_class(first, "active"));
    }
}
