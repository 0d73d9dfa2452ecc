//! Case-conversion renderers and the word normalizer they share.
//!
//! The camel and dot renderers are layered on [`normalize`]; the kebab
//! renderer is an independent regex pipeline with looser semantics. No
//! renderer depends on another.

pub mod camel;
pub mod dot;
pub mod kebab;
pub mod normalize;

/// Target case style for the value-boundary entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Camel,
    Dot,
    Kebab,
}

impl CaseStyle {
    /// Render text in this style.
    pub fn render(self, input: &str) -> String {
        match self {
            CaseStyle::Camel => camel::to_camel_case(input),
            CaseStyle::Dot => dot::to_dot_case(input),
            CaseStyle::Kebab => kebab::to_kebab_case(input),
        }
    }
}
