//! HTML rendering for the catalog pages.
//!
//! The layout is a fixed sidebar on the left and a main area on the right.
//! The browse section holds the filter form and the product grid; the grid
//! is also served alone so a client can refresh just that region.

use rentitease_common::html::{Document, Element};

use crate::domain::{BrandCode, Design, PRICE_CEILING, PRICE_STEP, Product, ProductQuery, Size};
use crate::domain::filter::keys;

const SIDEBAR_STYLE: &str = "width: 200px; position: fixed; top: 0; left: 0; bottom: 0; \
     background: #90EE90; padding: 20px; color: white";
const NAV_LINK_STYLE: &str = "display: block; color: white; padding: 10px";
const CONTENT_STYLE: &str = "margin-left: 220px; padding: 20px; background: #FFFF99";
const SEARCH_STYLE: &str =
    "width: 50%; padding: 10px; border-radius: 20px; border: 1px solid #ccc; \
     display: block; margin: 20px auto; text-align: center";
const CARD_STYLE: &str =
    "border: 1px solid #ddd; padding: 10px; border-radius: 10px; background: white";
const GRID_STYLE: &str =
    "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; padding: 20px";

/// Sidebar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Filter form and product grid.
    Browse,
    /// Profile placeholder.
    Profile,
    /// Rental history placeholder.
    History,
}

impl Section {
    const ALL: [Self; 3] = [Self::Browse, Self::Profile, Self::History];

    /// Sidebar link target.
    pub fn href(self) -> &'static str {
        match self {
            Self::Browse => "/",
            Self::Profile => "/profile",
            Self::History => "/history",
        }
    }

    /// Sidebar link text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Browse => "Browse Items",
            Self::Profile => "My Profile",
            Self::History => "Rental History",
        }
    }
}

/// Full browse page: filters reflecting `query` above the filtered grid.
pub fn browse_page(query: &ProductQuery, products: &[Product]) -> Document {
    let main = Element::new("div")
        .id("browse")
        .child(filter_form(query))
        .child(product_grid(products));
    layout(Section::Browse, main)
}

/// Placeholder page for a sidebar target without content yet.
pub fn placeholder_page(section: Section) -> Document {
    let main = Element::new("div")
        .id(section.href().trim_start_matches('/'))
        .child(Element::new("h3").text(section.label()))
        .child(Element::new("p").text("Nothing to show yet."));
    layout(section, main)
}

fn layout(active: Section, main: Element) -> Document {
    let sidebar = Element::new("div")
        .id("sidebar")
        .style(SIDEBAR_STYLE)
        .child(Element::new("h2").text("RentItEase"))
        .child(Element::new("hr"))
        .child(Element::new("nav").children(Section::ALL.into_iter().map(|section| {
            let link = Element::new("a")
                .attr("href", section.href())
                .attr("class", "nav-link")
                .style(NAV_LINK_STYLE)
                .text(section.label());
            if section == active {
                link.attr("aria-current", "page")
            } else {
                link
            }
        })));
    let content = Element::new("div")
        .id("page-content")
        .style(CONTENT_STYLE)
        .child(main);
    Document::new(
        format!("RentItEase | {}", active.label()),
        Element::new("body").child(sidebar).child(content),
    )
}

fn filter_form(query: &ProductQuery) -> Element {
    let brands = checklist(
        "brand-filter",
        keys::BRAND,
        BrandCode::ALL
            .into_iter()
            .map(|brand| (brand.code(), brand.label(), query.brands.contains(&brand))),
    );
    let sizes = checklist(
        "size-filter",
        keys::SIZE,
        Size::ALL
            .into_iter()
            .map(|size| (size.code(), size.label(), query.sizes.contains(&size))),
    );
    let designs = checklist(
        "design-filter",
        keys::DESIGN,
        Design::ALL
            .into_iter()
            .map(|design| (design.label(), design.label(), query.designs.contains(&design))),
    );

    let search = Element::new("input")
        .id("search-bar")
        .attr("type", "text")
        .attr("name", keys::SEARCH)
        .attr("placeholder", "Search products...")
        .style(SEARCH_STYLE)
        .attr("value", query.search.clone().unwrap_or_default());

    Element::new("form")
        .id("filter-form")
        .attr("method", "get")
        .attr("action", "/")
        .child(search)
        .child(Element::new("h4").text("Brand"))
        .child(brands)
        .child(Element::new("h4").text("Size"))
        .child(sizes)
        .child(Element::new("h4").text("Design"))
        .child(designs)
        .child(Element::new("h4").text("Price Range"))
        .child(price_input("price-min", keys::PRICE_MIN, query.price_min))
        .child(price_input("price-max", keys::PRICE_MAX, query.price_max))
        .child(
            Element::new("button")
                .id("filter-submit-button")
                .attr("type", "submit")
                .text("Apply"),
        )
}

fn checklist<'a>(
    id: &str,
    name: &'static str,
    options: impl Iterator<Item = (&'a str, &'a str, bool)>,
) -> Element {
    Element::new("div")
        .id(id)
        .children(options.map(|(value, label, checked)| {
            Element::new("label")
                .style("display: block")
                .child(
                    Element::new("input")
                        .attr("type", "checkbox")
                        .attr("name", name)
                        .attr("value", value)
                        .flag("checked", checked),
                )
                .child(format!(" {label}"))
        }))
}

fn price_input(id: &str, name: &'static str, value: Option<u32>) -> Element {
    let input = Element::new("input")
        .id(id)
        .attr("type", "number")
        .attr("name", name)
        .attr("min", "0")
        .attr("max", PRICE_CEILING.to_string())
        .attr("step", PRICE_STEP.to_string());
    match value {
        Some(price) => input.attr("value", price.to_string()),
        None => input,
    }
}

/// Grid of product cards; empty when nothing matched.
pub fn product_grid(products: &[Product]) -> Element {
    Element::new("div")
        .id("product-grid")
        .style(GRID_STYLE)
        .children(products.iter().map(product_card))
}

fn product_card(product: &Product) -> Element {
    Element::new("div")
        .attr("class", "card")
        .attr("data-product-id", product.id.to_string())
        .style(CARD_STYLE)
        .child(
            Element::new("img")
                .attr("src", product.image.as_str())
                .attr("alt", product.name.as_str())
                .style("width: 100%; border-radius: 10px"),
        )
        .child(Element::new("h4").text(product.name.as_str()))
        .child(Element::new("p").text(format!("Price: ₹{}", product.price)))
        .child(Element::new("p").text(format!("Brand: {}", product.brand)))
        .child(Element::new("p").text(format!("Location: {}", product.location)))
}
