use crate::style;
use glam::Vec2;
use wave_core::{RenderError, RenderTarget, Rgba};
use web_sys as web;

/// Positions chain elements through their inline `left`/`top`/`opacity`.
pub struct DomTarget {
    elements: Vec<web::HtmlElement>,
}

impl DomTarget {
    pub fn new(elements: Vec<web::HtmlElement>) -> Self {
        Self { elements }
    }

    fn style(&self, index: usize) -> Result<web::CssStyleDeclaration, RenderError> {
        self.elements
            .get(index)
            .map(|el| el.style())
            .ok_or(RenderError::MissingElement { index })
    }
}

fn set(
    style: &web::CssStyleDeclaration,
    index: usize,
    name: &str,
    value: &str,
) -> Result<(), RenderError> {
    style
        .set_property(name, value)
        .map_err(|e| RenderError::Backend {
            index,
            reason: format!("{name}: {e:?}"),
        })
}

impl RenderTarget for DomTarget {
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn place(&mut self, index: usize, position: Vec2, opacity: f32) -> Result<(), RenderError> {
        let css = self.style(index)?;
        set(&css, index, "left", &style::px(position.x))?;
        set(&css, index, "top", &style::px(position.y))?;
        set(&css, index, "opacity", &style::opacity(opacity))
    }

    fn fill(&mut self, index: usize, color: Rgba) -> Result<(), RenderError> {
        let css = self.style(index)?;
        set(&css, index, "background-color", &color.to_string())
    }
}
