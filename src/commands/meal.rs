use clap::Args;

use meallab_core::{CatalogClient, ListName, ListStorage, ListStore, Meal};

use super::list::add_meal;
use super::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Catalog meal id
    pub id: String,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ShowArgs {
    pub async fn run(&self, client: &CatalogClient) -> Result<(), Box<dyn std::error::Error>> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err("Please provide a valid meal id".into());
        }

        let meal = client.lookup(id).await?;
        print_meal(&meal, &self.format)
    }
}

#[derive(Args)]
pub struct RandomArgs {
    /// Also add the meal to a list (favorites or cooked)
    #[arg(long, value_name = "LIST")]
    pub add: Option<ListName>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RandomArgs {
    /// Whether this invocation touches the lists on disk.
    pub fn uses_lists(&self) -> bool {
        self.add.is_some()
    }

    pub async fn run<S: ListStorage>(
        &self,
        client: &CatalogClient,
        store: Option<&mut ListStore<S>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let meal = client.random().await?;
        print_meal(&meal, &self.format)?;

        if let (Some(list), Some(store)) = (self.add, store) {
            let message = add_meal(store, list, &meal)?;
            // Keep stdout parseable in JSON mode
            match self.format {
                OutputFormat::Json => eprintln!("{}", message),
                OutputFormat::Text => println!("\n{}", message),
            }
        }
        Ok(())
    }
}

fn print_meal(meal: &Meal, format: &OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(meal)?),
        OutputFormat::Text => print!("{}", meal),
    }
    Ok(())
}
