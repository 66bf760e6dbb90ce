//! Server-rendered HTML pages.
//!
//! Templates are embedded at compile time and compiled once at startup.
//! `.html` templates are auto-escaped, so model text is shown literally.

use advisor_core::prompts::PromptStyle;
use advisor_core::relay::AdviceResult;
use tera::{Context, Tera};

const INDEX: &str = "index.html";
const CHAT: &str = "chat.html";
const RESULT: &str = "result.html";

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            (INDEX, include_str!("../templates/index.html")),
            (CHAT, include_str!("../templates/chat.html")),
            (RESULT, include_str!("../templates/result.html")),
        ])?;
        Ok(Self { tera })
    }

    /// Landing page with the advice form.
    pub fn index(&self) -> Result<String, tera::Error> {
        let mut context = Context::new();
        let styles: Vec<&str> = PromptStyle::ALL.iter().map(|s| s.as_str()).collect();
        context.insert("prompt_styles", &styles);
        self.tera.render(INDEX, &context)
    }

    pub fn chat(&self) -> Result<String, tera::Error> {
        self.tera.render(CHAT, &Context::new())
    }

    /// Advice result page.
    pub fn result(&self, result: &AdviceResult) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("advice", &result.text);
        context.insert("prompt_style", &result.style_tag);
        self.tera.render(RESULT, &context)
    }
}
