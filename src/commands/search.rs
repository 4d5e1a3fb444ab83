use clap::{Args, Subcommand};
use std::fmt::Write;

use meallab_core::{CatalogClient, MealSummary};

use crate::config::Config;

#[derive(Args)]
pub struct SearchCommand {
    #[command(subcommand)]
    pub command: SearchSubcommand,
}

#[derive(Subcommand)]
pub enum SearchSubcommand {
    /// Find meals that use an ingredient
    Ingredient {
        /// Ingredient to search for (e.g. "chicken breast")
        text: String,

        /// Maximum number of results to print
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Find meals by name
    Name {
        /// Part of the meal name
        text: String,

        /// Maximum number of results to print
        #[arg(long, short)]
        limit: Option<usize>,
    },
}

impl SearchCommand {
    pub async fn run(
        &self,
        client: &CatalogClient,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (text, limit) = match &self.command {
            SearchSubcommand::Ingredient { text, limit } | SearchSubcommand::Name { text, limit } => {
                (text.trim(), limit.unwrap_or(config.result_limit.value))
            }
        };
        if text.is_empty() {
            return Err("Please provide something to search for".into());
        }

        let hits: Vec<MealSummary> = match &self.command {
            SearchSubcommand::Ingredient { .. } => client.search_by_ingredient(text).await?,
            SearchSubcommand::Name { .. } => client
                .search_by_name(text)
                .await?
                .into_iter()
                .map(MealSummary::from)
                .collect(),
        };

        print!("{}", render_results(&hits, limit));
        Ok(())
    }
}

/// Numbered result lines, capped at `limit`, with the total count up front.
fn render_results(hits: &[MealSummary], limit: usize) -> String {
    let mut out = String::new();
    if hits.is_empty() {
        out.push_str("No meals found.\n");
        return out;
    }

    let _ = writeln!(out, "Found {} meals:", hits.len());
    for (i, hit) in hits.iter().take(limit).enumerate() {
        let _ = writeln!(out, "{}) {} (id={})", i + 1, hit.name, hit.id);
    }
    if hits.len() > limit {
        let _ = writeln!(out, "... and {} more (use --limit to see them)", hits.len() - limit);
    }
    let _ = writeln!(out, "\nTip: run 'meallab show <ID>' for details.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(n: usize) -> Vec<MealSummary> {
        (1..=n)
            .map(|i| MealSummary::new(format!("{}", 52700 + i), format!("Meal {}", i)))
            .collect()
    }

    #[test]
    fn test_render_no_results() {
        assert_eq!(render_results(&[], 10), "No meals found.\n");
    }

    #[test]
    fn test_render_numbers_results() {
        let out = render_results(&hits(2), 10);
        assert!(out.starts_with("Found 2 meals:\n"));
        assert!(out.contains("1) Meal 1 (id=52701)\n2) Meal 2 (id=52702)\n"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn test_render_respects_limit() {
        let out = render_results(&hits(5), 3);
        assert!(out.starts_with("Found 5 meals:\n"));
        assert!(out.contains("3) Meal 3"));
        assert!(!out.contains("4) Meal 4"));
        assert!(out.contains("... and 2 more"));
    }
}
