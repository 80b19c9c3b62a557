use web_sys::{Document, Element};

use crate::status::BadgeView;

/// Receives every rendered badge state.
pub trait BadgeSink {
    fn show(&self, view: &BadgeView);
}

enum Target {
    Handle(Element),
    ById { document: Document, id: String },
}

/// Writes the badge into a DOM element's text content and class name.
pub struct ElementSink {
    target: Target,
}

impl ElementSink {
    pub fn new(element: Element) -> Self {
        Self {
            target: Target::Handle(element),
        }
    }

    /// Looks the element up again on every write, so the badge may be
    /// replaced or inserted after polling starts.
    pub fn by_id(document: Document, id: impl Into<String>) -> Self {
        Self {
            target: Target::ById {
                document,
                id: id.into(),
            },
        }
    }

    fn element(&self) -> Option<Element> {
        match &self.target {
            Target::Handle(element) => Some(element.clone()),
            Target::ById { document, id } => document.get_element_by_id(id),
        }
    }
}

impl BadgeSink for ElementSink {
    fn show(&self, view: &BadgeView) {
        let Some(element) = self.element() else {
            if let Target::ById { id, .. } = &self.target {
                log::warn!("Badge element #{} not found", id);
            }
            return;
        };

        element.set_text_content(Some(&view.text));
        element.set_class_name(view.class_name());
    }
}
