use clap::{Args, Subcommand};
use std::fmt::Write;

use meallab_core::{
    CatalogClient, ListEntry, ListError, ListName, ListStorage, ListStore, Meal, MoveOutcome,
    Removal,
};

use super::OutputFormat;

#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub command: ListSubcommand,
}

#[derive(Subcommand)]
pub enum ListSubcommand {
    /// Look a meal up in the catalog and add it to the list
    Add {
        /// Catalog meal id (e.g. 52772)
        id: String,
    },

    /// Remove a meal from the list
    Remove {
        /// Meal id
        id: String,
    },

    /// Show the list, oldest first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ListCommand {
    pub async fn run<S: ListStorage>(
        &self,
        list: ListName,
        store: &mut ListStore<S>,
        client: impl FnOnce() -> Result<CatalogClient, meallab_core::CatalogError>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ListSubcommand::Add { id } => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(ListError::InvalidId.into());
                }
                if store.contains(list, id) {
                    println!(
                        "{}",
                        ListError::AlreadyExists {
                            list,
                            id: id.to_string(),
                        }
                    );
                    return Ok(());
                }

                let meal = client()?.lookup(id).await?;
                println!("{}", add_meal(store, list, &meal)?);
                Ok(())
            }
            ListSubcommand::Remove { id } => {
                println!("{}", remove_message(list, id.trim(), store.remove(list, id)?));
                Ok(())
            }
            ListSubcommand::List { format } => {
                let entries = store.entries(list);
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                    OutputFormat::Text => print!("{}", render_list(list, &entries)),
                }
                Ok(())
            }
        }
    }
}

#[derive(Args)]
pub struct MoveArgs {
    /// Id of the favorite you cooked
    pub id: String,
}

impl MoveArgs {
    pub fn run<S: ListStorage>(
        &self,
        store: &mut ListStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let outcome = store.move_to_cooked(&self.id)?;
        println!("{}", move_message(&outcome));
        Ok(())
    }
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Meal id to drop from Favorites and Cooked
    pub id: String,
}

impl RemoveArgs {
    pub fn run<S: ListStorage>(
        &self,
        store: &mut ListStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let removal = store.remove_from_any(&self.id)?;
        println!("{}", removal_message(self.id.trim(), removal));
        Ok(())
    }
}

/// Adds a catalog meal under its catalog id and name.
///
/// A meal already in the list is reported, not treated as a failure.
pub(crate) fn add_meal<S: ListStorage>(
    store: &mut ListStore<S>,
    list: ListName,
    meal: &Meal,
) -> Result<String, ListError> {
    match store.add(list, &meal.id, &meal.name) {
        Ok(entry) => Ok(format!("Added to {}: {}", list.label(), entry)),
        Err(err) if err.is_soft() => Ok(err.to_string()),
        Err(err) => Err(err),
    }
}

fn render_list(list: ListName, entries: &[ListEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        let _ = writeln!(out, "{} list is empty.", list.label());
        return out;
    }

    let _ = writeln!(out, "=== {} ===", list.label());
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "{}) {}", i + 1, entry);
    }
    out
}

fn remove_message(list: ListName, id: &str, removed: bool) -> String {
    if removed {
        format!("Removed from {}: {}", list.label(), id)
    } else {
        ListError::NotFound {
            list,
            id: id.to_string(),
        }
        .to_string()
    }
}

fn move_message(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Moved(entry) => format!("Moved to Cooked: {}", entry),
        MoveOutcome::AlreadyInTarget(entry) => format!(
            "Meal already exists in Cooked, removed from Favorites (id={})",
            entry.id
        ),
    }
}

fn removal_message(id: &str, removal: Removal) -> String {
    if !removal.any() {
        return format!("Id not found in Favorites or Cooked: {}", id);
    }
    let labels: Vec<_> = removal.lists().iter().map(|l| l.label()).collect();
    format!("Removed from: {}", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::{Json, Router};
    use indexmap::IndexMap;
    use meallab_core::MemoryStorage;
    use serde_json::json;

    fn store_with(list: ListName, pairs: &[(&str, &str)]) -> ListStore<MemoryStorage> {
        let record: IndexMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ListStore::load(MemoryStorage::new().with_record(list, record))
    }

    async fn serve(routes: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, routes).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn add_command(id: &str) -> ListCommand {
        ListCommand {
            command: ListSubcommand::Add { id: id.to_string() },
        }
    }

    #[test]
    fn test_add_meal_messages() {
        let mut store = ListStore::load(MemoryStorage::new());
        let meal = Meal::new("52772", "Teriyaki Chicken Casserole");

        let msg = add_meal(&mut store, ListName::Favorites, &meal).unwrap();
        assert_eq!(
            msg,
            "Added to Favorites: Teriyaki Chicken Casserole (id=52772)"
        );

        let msg = add_meal(&mut store, ListName::Favorites, &meal).unwrap();
        assert_eq!(msg, "Meal already exists in Favorites (id=52772)");
        assert_eq!(store.len(ListName::Favorites), 1);
    }

    #[test]
    fn test_add_meal_without_id_fails() {
        let mut store = ListStore::load(MemoryStorage::new());
        let err = add_meal(&mut store, ListName::Cooked, &Meal::new("", "Ghost")).unwrap_err();
        assert_eq!(err, ListError::InvalidId);
    }

    #[tokio::test]
    async fn test_add_uses_catalog_id_and_name() {
        let routes = Router::new().route(
            "/lookup.php",
            get(|| async {
                Json(json!({ "meals": [{ "idMeal": "52772", "strMeal": "Teriyaki Chicken Casserole" }] }))
            }),
        );
        let base = serve(routes).await;
        let mut store = ListStore::load(MemoryStorage::new());

        add_command(" 52772 ")
            .run(ListName::Cooked, &mut store, || CatalogClient::new(base))
            .await
            .unwrap();

        assert_eq!(
            store.get(ListName::Cooked, "52772"),
            Some("Teriyaki Chicken Casserole")
        );
        assert_eq!(store.storage().save_count(), 1);
    }

    #[tokio::test]
    async fn test_add_existing_skips_catalog() {
        let mut store = store_with(ListName::Favorites, &[("52772", "Teriyaki")]);

        add_command("52772")
            .run(ListName::Favorites, &mut store, || {
                panic!("catalog must not be contacted")
            })
            .await
            .unwrap();

        assert_eq!(store.len(ListName::Favorites), 1);
        assert_eq!(store.storage().save_count(), 0);
    }

    #[tokio::test]
    async fn test_add_blank_id_is_error() {
        let mut store = ListStore::load(MemoryStorage::new());

        let err = add_command("   ")
            .run(ListName::Favorites, &mut store, || {
                panic!("catalog must not be contacted")
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please provide a valid meal id");
    }

    #[tokio::test]
    async fn test_add_unknown_meal_is_error() {
        let routes = Router::new().route(
            "/lookup.php",
            get(|| async { Json(json!({ "meals": null })) }),
        );
        let base = serve(routes).await;
        let mut store = ListStore::load(MemoryStorage::new());

        let err = add_command("999999")
            .run(ListName::Favorites, &mut store, || CatalogClient::new(base))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No meal found for id=999999");
        assert!(store.is_empty(ListName::Favorites));
    }

    #[test]
    fn test_render_list() {
        assert_eq!(render_list(ListName::Cooked, &[]), "Cooked list is empty.\n");

        let entries = vec![ListEntry::new("2", "B"), ListEntry::new("1", "A")];
        assert_eq!(
            render_list(ListName::Favorites, &entries),
            "=== Favorites ===\n1) B (id=2)\n2) A (id=1)\n"
        );
    }

    #[test]
    fn test_remove_message() {
        assert_eq!(
            remove_message(ListName::Favorites, "1", true),
            "Removed from Favorites: 1"
        );
        assert_eq!(
            remove_message(ListName::Cooked, "9", false),
            "This id is not in Cooked: 9"
        );
    }

    #[test]
    fn test_move_messages() {
        let mut store = store_with(ListName::Favorites, &[("1", "Soup")]);
        let outcome = store.move_to_cooked("1").unwrap();
        assert_eq!(move_message(&outcome), "Moved to Cooked: Soup (id=1)");

        let outcome = MoveOutcome::AlreadyInTarget(ListEntry::new("1", "Soup"));
        assert_eq!(
            move_message(&outcome),
            "Meal already exists in Cooked, removed from Favorites (id=1)"
        );
    }

    #[test]
    fn test_move_missing_is_error() {
        let mut store = ListStore::load(MemoryStorage::new());
        let err = MoveArgs { id: "7".to_string() }.run(&mut store).unwrap_err();
        assert_eq!(err.to_string(), "This id is not in Favorites: 7");
    }

    #[test]
    fn test_removal_message() {
        assert_eq!(
            removal_message("5", Removal::default()),
            "Id not found in Favorites or Cooked: 5"
        );
        assert_eq!(
            removal_message(
                "5",
                Removal {
                    favorites: true,
                    cooked: true
                }
            ),
            "Removed from: Favorites, Cooked"
        );
        assert_eq!(
            removal_message(
                "5",
                Removal {
                    favorites: false,
                    cooked: true
                }
            ),
            "Removed from: Cooked"
        );
    }
}
