use web_sys::{Document, DomTokenList};

use crate::config::MarkerTarget;
use crate::error::{js_message, ThemeError};

/// Set of visual state markers on the document.
pub trait ViewState {
    fn has_marker(&self, marker: &str) -> bool;
    fn add_marker(&self, marker: &str) -> Result<(), ThemeError>;
    fn remove_marker(&self, marker: &str) -> Result<(), ThemeError>;
}

/// Class list of the `<html>` or `<body>` element.
pub struct DocumentMarkers {
    classes: DomTokenList,
}

impl DocumentMarkers {
    pub fn new(document: &Document, target: MarkerTarget) -> Result<Self, ThemeError> {
        let classes = match target {
            MarkerTarget::Root => document.document_element().map(|el| el.class_list()),
            MarkerTarget::Body => document.body().map(|body| body.class_list()),
        }
        .ok_or_else(|| ThemeError::Document(format!("no {:?} element to mark", target)))?;
        Ok(Self { classes })
    }
}

impl ViewState for DocumentMarkers {
    fn has_marker(&self, marker: &str) -> bool {
        self.classes.contains(marker)
    }

    fn add_marker(&self, marker: &str) -> Result<(), ThemeError> {
        self.classes
            .add_1(marker)
            .map_err(|e| ThemeError::Document(js_message(&e)))
    }

    fn remove_marker(&self, marker: &str) -> Result<(), ThemeError> {
        self.classes
            .remove_1(marker)
            .map_err(|e| ThemeError::Document(js_message(&e)))
    }
}
