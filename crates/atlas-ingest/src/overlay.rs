//! Augmentation records applied after parsing.
//!
//! An [`Overlay`] puts a fixed list of richer builder records in front of the
//! parsed sheet. The dashboard ships with [`Overlay::demo`]; ingestion itself
//! never depends on it.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use atlas_model::{Builder, Socials};

use crate::error::IngestError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    builders: Vec<Builder>,
    replace_existing: bool,
}

impl Overlay {
    pub fn new(builders: Vec<Builder>) -> Self {
        Self {
            builders,
            replace_existing: false,
        }
    }

    /// The demo profiles shown on the public dashboard.
    pub fn demo() -> Self {
        Self::new(demo_builders())
    }

    /// Load overlay records from a JSON array of builders.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::OverlayIo {
            path: path.to_path_buf(),
            source,
        })?;
        let builders: Vec<Builder> =
            serde_json::from_str(&text).map_err(|source| IngestError::OverlayJson {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(builders))
    }

    /// When enabled, parsed rows sharing a wallet with an overlay record are
    /// removed instead of appearing twice.
    #[must_use]
    pub fn replacing_existing(mut self, enable: bool) -> Self {
        self.replace_existing = enable;
        self
    }

    pub fn builders(&self) -> &[Builder] {
        &self.builders
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Prepend the overlay records to `parsed`, keeping both in their own order.
    pub fn apply(&self, parsed: Vec<Builder>) -> Vec<Builder> {
        let overlay: Vec<Builder> = self
            .builders
            .iter()
            .filter(|b| b.is_complete())
            .cloned()
            .collect();
        let wallets: HashSet<&str> = if self.replace_existing {
            overlay.iter().map(|b| b.wallet.as_str()).collect()
        } else {
            HashSet::new()
        };
        let mut merged = Vec::with_capacity(overlay.len() + parsed.len());
        merged.extend(overlay.iter().cloned());
        merged.extend(
            parsed
                .into_iter()
                .filter(|b| !wallets.contains(b.wallet.as_str())),
        );
        debug!(
            overlay = overlay.len(),
            builders = merged.len(),
            replace_existing = self.replace_existing,
            "applied overlay"
        );
        merged
    }
}

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

/// Fixed demo profiles.
pub fn demo_builders() -> Vec<Builder> {
    vec![
        Builder {
            role: Some("Superteam Member".to_string()),
            bio: Some(
                "Full stack developer building on Solana. Obsessed with performance and clean code."
                    .to_string(),
            ),
            avatar: Some(
                "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=800&auto=format&fit=crop&q=60"
                    .to_string(),
            ),
            submissions: 5,
            score: 50.0,
            socials: Socials {
                twitter: Some("@subhdotsol".to_string()),
                linkedin: Some("linkedin.com/in/subh".to_string()),
                github: Some("github.com/subh".to_string()),
                website: Some("subh.sol".to_string()),
            },
            skills: skills(&[
                "Anchor",
                "Rust",
                "Solana",
                "Borsh",
                "Serde",
                "Poem",
                "Diesel",
                "Solidity",
                "Foundry",
                "Prisma",
                "TailwindCSS",
                "Next.js",
                "TypeScript",
                "Bun.js",
                "Postgres",
                "NextAuth",
                "Docker",
                "Websockets",
                "Redis",
            ]),
            ..Builder::new(
                "Subhajit Chaudhury",
                "8WjXrdfSLKt9kk58w3AHMLdm4GNigRW3ub8SHy88KSTp",
                "India",
            )
        },
        Builder {
            role: Some("Creative Director".to_string()),
            bio: Some(
                "Creative Director at Superteam UK. Building the next generation of Solana consumer apps."
                    .to_string(),
            ),
            avatar: Some(
                "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=800&auto=format&fit=crop&q=60"
                    .to_string(),
            ),
            earned: 160_000.0,
            submissions: 24,
            won: 12,
            score: 1200.0,
            socials: Socials {
                twitter: Some("https://x.com".to_string()),
                github: Some("https://github.com".to_string()),
                ..Socials::default()
            },
            skills: skills(&["Design", "UI/UX", "Frontend", "React"]),
            ..Builder::new("Alex Turner", "8Wj...Mock", "United Kingdom")
        },
        Builder {
            role: Some("Full Stack Developer".to_string()),
            bio: Some(
                "Passionate about decentralized systems and high-frequency trading.".to_string(),
            ),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=800&auto=format&fit=crop&q=60"
                    .to_string(),
            ),
            earned: 4500.0,
            submissions: 10,
            won: 2,
            score: 450.0,
            socials: Socials {
                twitter: Some("https://x.com".to_string()),
                ..Socials::default()
            },
            skills: skills(&["Rust", "Solana", "TypeScript"]),
            ..Builder::new("Jone Doe", "G7x...Mock", "United Kingdom")
        },
    ]
}
