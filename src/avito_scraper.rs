use crate::error::FetchError;
use crate::listing::PageFetcher;
use crate::models::{AttributeSpec, ListingSnapshot, ESTATE_ATTRIBUTES, NOT_SPECIFIED};
use crate::parser::{classify_property_type, format_price, normalize_address};
use crate::{debug_eprintln, debug_println};
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Node, Selector};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const TITLE_SELECTOR: &str = "title";
const PRICE_SELECTOR: &str = "span[itemprop='price']";
const PARAMS_BLOCK_SELECTOR: &str = "div[data-marker='item-view/item-params']";
// Avito appends a build hash to its class names, so match on the stable prefix.
const PARAM_ITEM_SELECTOR: &str = "li[class*='params-paramsList__item']";
const PARAM_LABEL_SELECTOR: &str = "span[class*='styles-module-noAccent']";
const ADDRESS_SELECTOR: &str = "span[class*='style-item-address__string']";

/// Blocking HTTP fetcher that presents itself as a desktop browser.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug_println!("Fetching listing page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug_println!("Got HTTP {} for {}", status, url);
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Pulls every known field out of a listing page. Missing markup never fails
/// the extraction: it turns into a fallback value or an absent attribute.
pub fn extract_listing(html: &str) -> ListingSnapshot {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let property_type = classify_property_type(&title);

    let raw_price = extract_price(&document).unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let price = format_price(&raw_price);

    let attributes = match extract_params_block(&document) {
        Some(params) => ESTATE_ATTRIBUTES
            .iter()
            .map(|spec| (spec.key, extract_param(&params, spec)))
            .collect(),
        None => {
            debug_eprintln!("Parameters block not found, no attributes extracted");
            ESTATE_ATTRIBUTES.iter().map(|spec| (spec.key, None)).collect()
        }
    };

    let raw_address = extract_address(&document).unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let address = normalize_address(&raw_address);

    ListingSnapshot {
        property_type,
        price,
        address,
        attributes,
    }
}

fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    let found = document.select(&selector).next();
    if found.is_none() {
        debug_println!("No element matches {}", css);
    }
    found
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            debug_eprintln!("Failed to parse selector {}: {:?}", css, e);
            None
        }
    }
}

fn extract_title(document: &Html) -> String {
    select_first(document, TITLE_SELECTOR)
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
}

fn extract_price(document: &Html) -> Option<String> {
    select_first(document, PRICE_SELECTOR)?
        .value()
        .attr("content")
        .map(|content| content.to_string())
}

/// The parameters block re-parsed on its own, so label lookups cannot wander
/// into the rest of the page.
fn extract_params_block(document: &Html) -> Option<Html> {
    let block = select_first(document, PARAMS_BLOCK_SELECTOR)?;
    Some(Html::parse_fragment(&block.inner_html()))
}

/// First list item whose label contains the spec's source label wins; the
/// value is the node right after the label.
fn extract_param(params: &Html, spec: &AttributeSpec) -> Option<String> {
    let item_selector = parse_selector(PARAM_ITEM_SELECTOR)?;
    let label_selector = parse_selector(PARAM_LABEL_SELECTOR)?;

    for item in params.select(&item_selector) {
        let Some(label) = item.select(&label_selector).next() else {
            continue;
        };
        if !label.text().collect::<String>().contains(spec.source_label) {
            continue;
        }

        let value = label.next_sibling().and_then(|node| match node.value() {
            Node::Text(text) => Some(text.trim().to_string()),
            Node::Element(_) => ElementRef::wrap(node).map(|e| e.text().collect::<String>()),
            _ => None,
        })?;
        let value = value.trim();

        return if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    None
}

fn extract_address(document: &Html) -> Option<String> {
    select_first(document, ADDRESS_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
}
