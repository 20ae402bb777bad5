//! HTML rendering for the shell pages.
//!
//! Every page has the same frame: navigation bar, the routed page content
//! and the "Image Gallery" box. Element ids are stable so browser tests and
//! handler tests can address the form controls.

use rentitease_common::html::{Document, Element};

use crate::domain::{Page, User};

const APP_LAYOUT_STYLE: &str =
    "background-color: #F0EADC; min-height: 100vh; padding: 20px; font-family: 'Times New Roman'";
const TITLE_STYLE: &str = "color: #576238; text-align: center; margin-top: 20px; \
     margin-bottom: 40px; font-family: 'Times New Roman'";
const BUTTON_STYLE: &str = "margin: 10px; width: 100px; background-color: #FFD95D; \
     color: black; font-family: 'Times New Roman'";
const NAVBAR_STYLE: &str = "display: flex; justify-content: flex-end; padding: 10px";
const GALLERY_STYLE: &str = "background-color: #F0EADC; width: 80%; height: 200px; \
     margin: auto; margin-top: 50px; padding: 20px; text-align: center; \
     border-radius: 10px; font-family: 'Times New Roman'";
const INPUT_STYLE: &str = "margin: 10px";

/// Welcome banner text.
pub const WELCOME_TEXT: &str = "Welcome to RentitEase";

/// Per-request values the page frame needs.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Signed-in account, if any.
    pub viewer: Option<User>,
    /// Text for the form's message region.
    pub message: Option<String>,
    /// Name to re-populate after a failed submission.
    pub name: String,
    /// Email to re-populate after a failed submission.
    pub email: String,
}

impl PageContext {
    /// Context for a visitor who may or may not be signed in.
    pub fn for_viewer(viewer: Option<User>) -> Self {
        Self {
            viewer,
            ..Self::default()
        }
    }

    /// Re-render a submitted form with `message` and its non-secret values.
    pub fn with_feedback(
        message: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Render the full document for `page`.
pub fn shell_page(page: Page, ctx: &PageContext) -> Document {
    let layout = Element::new("div")
        .attr("class", "container")
        .style(APP_LAYOUT_STYLE)
        .child(navbar(ctx.viewer.as_ref()))
        .child(Element::new("div").id("page-content").child(page_content(page, ctx)))
        .child(gallery());
    Document::new(page.title(), Element::new("body").child(layout))
}

/// Routed page body.
pub fn page_content(page: Page, ctx: &PageContext) -> Element {
    match page {
        Page::Login => login_form(ctx),
        Page::Register => register_form(ctx),
        Page::Welcome => welcome(ctx.viewer.as_ref()),
    }
}

fn navbar(viewer: Option<&User>) -> Element {
    let nav = Element::new("nav")
        .id("navbar")
        .style(NAVBAR_STYLE)
        .child(nav_button("login-button", "/login", "Login"))
        .child(nav_button("register-button", "/register", "Register"));
    match viewer {
        Some(_) => nav.child(
            Element::new("form")
                .attr("method", "post")
                .attr("action", "/logout")
                .child(
                    Element::new("button")
                        .id("logout-button")
                        .attr("type", "submit")
                        .style(BUTTON_STYLE)
                        .text("Logout"),
                ),
        ),
        None => nav,
    }
}

fn nav_button(id: &str, href: &str, label: &str) -> Element {
    Element::new("a")
        .id(id)
        .attr("href", href)
        .attr("class", "btn")
        .attr("role", "button")
        .style(BUTTON_STYLE)
        .text(label)
}

fn gallery() -> Element {
    Element::new("div")
        .id("gallery")
        .style(GALLERY_STYLE)
        .child(
            Element::new("h3")
                .style("font-family: 'Times New Roman'")
                .text("Image Gallery"),
        )
        .child(Element::new("div").id("image-container"))
}

fn welcome(viewer: Option<&User>) -> Element {
    let banner = Element::new("h1").id("welcome").style(TITLE_STYLE).text(WELCOME_TEXT);
    match viewer {
        Some(user) => Element::new("div").child(banner).child(
            Element::new("p")
                .id("welcome-user")
                .style("text-align: center")
                .text(format!("Hello, {}!", user.name())),
        ),
        None => banner,
    }
}

fn login_form(ctx: &PageContext) -> Element {
    Element::new("form")
        .id("login-form")
        .attr("method", "post")
        .attr("action", "/login")
        .child(Element::new("h1").style(TITLE_STYLE).text("Login"))
        .child(input("login-email", "email", "email", "Email", &ctx.email))
        .child(input("login-password", "password", "password", "Password", ""))
        .child(submit("login-submit-button"))
        .child(message_region("login-message", ctx.message.as_deref()))
}

fn register_form(ctx: &PageContext) -> Element {
    Element::new("form")
        .id("register-form")
        .attr("method", "post")
        .attr("action", "/register")
        .child(Element::new("h1").style(TITLE_STYLE).text("Register"))
        .child(input("register-name", "name", "text", "Name", &ctx.name))
        .child(input("register-email", "email", "email", "Email", &ctx.email))
        .child(input("register-password", "password", "password", "Password", ""))
        .child(submit("register-submit-button"))
        .child(message_region("register-message", ctx.message.as_deref()))
}

fn input(id: &str, name: &str, kind: &str, placeholder: &str, value: &str) -> Element {
    let element = Element::new("input")
        .id(id)
        .attr("name", name)
        .attr("type", kind)
        .attr("placeholder", placeholder)
        .attr("class", "form-control")
        .style(INPUT_STYLE);
    if value.is_empty() {
        element
    } else {
        element.attr("value", value)
    }
}

fn submit(id: &str) -> Element {
    Element::new("button")
        .id(id)
        .attr("type", "submit")
        .attr("class", "btn")
        .style(BUTTON_STYLE)
        .text("Submit")
}

fn message_region(id: &str, message: Option<&str>) -> Element {
    let region = Element::new("div").id(id).attr("role", "status");
    match message {
        Some(text) => region.text(text),
        None => region,
    }
}
