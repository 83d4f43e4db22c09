use super::region::Region;
use super::util::{
    decode_text, is_label_text, is_title_text, keep_entities_literal, notify_parse_fail,
    strip_line_breaks,
};
use crate::prelude::*;
use anyhow::anyhow;
use itertools::{EitherOrBoth, Itertools};
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;

/// What to do with titles left over once the label list runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    #[default]
    Truncate,
    KeepTitle,
}

impl FromStr for LabelPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(LabelPolicy::Truncate),
            "keep" => Ok(LabelPolicy::KeepTitle),
            unknown => Err(anyhow!("Unknown missing label policy: {}", unknown)),
        }
    }
}

pub struct Extractor {
    title_cell: Selector,
    anchor: Selector,
    label_cell: Selector,
}

impl Extractor {
    pub fn new(title_cell: &str, label_cell: &str) -> Result<Self> {
        Ok(Self {
            title_cell: parse_selector(title_cell)?,
            anchor: parse_selector("a")?,
            label_cell: parse_selector(label_cell)?,
        })
    }

    pub fn for_region(region: Region) -> Result<Self> {
        Self::new(
            "td.views-field-title",
            &format!("td.views-field-{}", region.label_field()),
        )
    }

    /// Pairs the i-th title with the i-th label, in document order, as `"<title>, <label>"`.
    pub fn extract(&self, html: &str, policy: LabelPolicy) -> Vec<String> {
        let document = Html::parse_document(&keep_entities_literal(&strip_line_breaks(html)));
        let titles = self.titles(&document);
        let labels = self.labels(&document);
        if titles.len() != labels.len() {
            tracing::warn!(
                "Found {} titles but {} labels, pairing by position",
                titles.len(),
                labels.len()
            );
        }

        match policy {
            LabelPolicy::Truncate => titles
                .iter()
                .zip(labels.iter())
                .map(|(title, label)| combine(title, Some(label)))
                .collect(),
            LabelPolicy::KeepTitle => titles
                .iter()
                .zip_longest(labels.iter())
                .filter_map(|pair| match pair {
                    EitherOrBoth::Both(title, label) => Some(combine(title, Some(label))),
                    EitherOrBoth::Left(title) => Some(combine(title, None)),
                    EitherOrBoth::Right(_) => None,
                })
                .collect(),
        }
    }

    fn titles(&self, document: &Html) -> Vec<String> {
        let mut titles = Vec::new();
        for cell in document.select(&self.title_cell) {
            let Some(anchor) = cell.select(&self.anchor).next() else {
                notify_parse_fail("title cell without anchor", cell.html());
                continue;
            };

            // Entity references are still literal here, so `&#8217;` passes the class check.
            let raw = text_of(anchor);
            if !is_title_text(&raw) {
                notify_parse_fail("title", &raw);
                continue;
            }

            titles.push(decode_text(&raw));
        }

        titles
    }

    fn labels(&self, document: &Html) -> Vec<String> {
        let mut labels = Vec::new();
        for cell in document.select(&self.label_cell) {
            let text = decode_text(&text_of(cell));
            let text = text.trim();
            if !is_label_text(text) {
                notify_parse_fail("label", text);
                continue;
            }

            labels.push(text.to_string());
        }

        labels
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        let err = format!("Invalid selector {}: {:?}", css, e);
        tracing::error!(err);
        anyhow!(err)
    })
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn combine(title: &str, label: Option<&String>) -> String {
    match label {
        Some(label) => format!("{}, {}", title.trim(), label).trim().to_string(),
        None => title.trim().to_string(),
    }
}
