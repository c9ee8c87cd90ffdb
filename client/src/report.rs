//! Human-readable console report. Previews count characters, not bytes.

use std::io::{Result, Write};
use std::path::Path;

use serde_json::Value;

use common::utils::char_prefix;
use metadata::renderer::{has_escaped_backslashes, Renderer};
use metadata::types::TokenMetadata;

const RULE_WIDTH: usize = 80;
const TOKEN_URI_PREVIEW: usize = 100;
const DESCRIPTION_PREVIEW: usize = 100;
const IMAGE_PREVIEW: usize = 100;
const HTML_PREVIEW: usize = 500;

pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn fetching(&mut self) -> Result<()> {
        writeln!(self.out, "Fetching tokenURI from blockchain...")
    }

    pub fn rpc_error(&mut self, err: &Value) -> Result<()> {
        writeln!(self.out, "Error: {err}")
    }

    pub fn token_uri(&mut self, token_uri: &str) -> Result<()> {
        writeln!(self.out, "TokenURI length: {}", token_uri.chars().count())?;
        writeln!(
            self.out,
            "TokenURI starts with: {}",
            char_prefix(token_uri, TOKEN_URI_PREVIEW)
        )
    }

    pub fn metadata(&mut self, metadata: &TokenMetadata) -> Result<()> {
        writeln!(self.out, "\nMetadata name: {}", metadata.name)?;
        writeln!(
            self.out,
            "Description: {}...",
            char_prefix(&metadata.description, DESCRIPTION_PREVIEW)
        )?;

        if !metadata.attributes.is_empty() {
            writeln!(self.out, "Attributes:")?;
            for attr in &metadata.attributes {
                writeln!(self.out, "  {}: {}", attr.trait_type, attr.value)?;
            }
        }

        if let Some(image) = &metadata.image {
            writeln!(self.out, "Image: {}", char_prefix(image, IMAGE_PREVIEW))?;
        }

        Ok(())
    }

    pub fn renderer(&mut self, renderer: Renderer) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "RENDERER TYPE:")?;
        writeln!(self.out, "{}", renderer.banner())?;
        writeln!(self.out, "{rule}")
    }

    pub fn html(&mut self, html: &str) -> Result<()> {
        writeln!(self.out, "\nHTML length: {} characters", html.chars().count())?;
        writeln!(self.out, "\nFirst {HTML_PREVIEW} characters:")?;
        writeln!(self.out, "{}", char_prefix(html, HTML_PREVIEW))?;

        if has_escaped_backslashes(html) {
            writeln!(self.out, "\nWARNING: Found escaped backslashes in HTML")?;
        }

        Ok(())
    }

    pub fn saved(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "\n✓ Saved to: {}", path.display())?;
        writeln!(self.out, "Open with: open {}", path.display())
    }
}
