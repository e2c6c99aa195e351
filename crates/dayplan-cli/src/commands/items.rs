//! Item commands - add, list, update, delete, and clear
//!
//! Every mutation goes through the state store so the dispatch cycle
//! (effect, reducer, subscribers) runs exactly as it does for any other
//! caller of the core. Item commands require a logged-in user.

use anyhow::Result;
use chrono::Local;
use clap::Args;

use dayplan_core::domain::{parse_item_date, sort_for_list, Priority, ToDoItem};
use dayplan_core::state::Action;
use dayplan_core::usecases::UserUseCase;

use crate::context::AppContext;
use crate::output::{get_formatter, OutputFormat, OutputFormatter};

/// Parses a priority argument, rejecting unknown names
fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        _ => Err(format!(
            "unknown priority '{}' (expected low, medium, or high)",
            s
        )),
    }
}

/// Resolves the logged-in user id, printing a hint when absent
async fn require_login(users: &UserUseCase, fmt: &dyn OutputFormatter) -> Option<String> {
    let user_id = users.current_user_id().await;
    if user_id.is_none() {
        fmt.error("Not logged in. Run 'dayplan login <user-id>' first.");
    }
    user_id
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Item title
    title: String,

    /// Longer description
    #[arg(long, default_value = "")]
    description: String,

    /// Start of the scheduled window, "YYYY-MM-DD HH:MM"
    #[arg(long)]
    start: String,

    /// End of the scheduled window, same format
    #[arg(long)]
    end: String,

    /// Priority: low, medium, or high
    #[arg(long, default_value = "low", value_parser = parse_priority)]
    priority: Priority,
}

impl AddCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let user_id = match require_login(&ctx.user_use_case(), &*fmt).await {
            Some(id) => id,
            None => return Ok(()),
        };

        for date in [&self.start, &self.end] {
            if let Err(e) = parse_item_date(date) {
                fmt.error(&e.to_string());
                return Ok(());
            }
        }

        let item = ToDoItem::new(
            &self.title,
            &self.description,
            &self.start,
            &self.end,
            &user_id,
            self.priority,
        );
        let id = item.id.clone();

        let mut store = ctx.store();
        store.dispatch(Action::AddItem(item)).await;

        fmt.success(&format!("Added '{}'", self.title));
        fmt.info(&format!("id: {}", id));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ListCommand {}

impl ListCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let user_id = match require_login(&ctx.user_use_case(), &*fmt).await {
            Some(id) => id,
            None => return Ok(()),
        };

        let mut store = ctx.store();
        store.dispatch(Action::LoadItems(user_id)).await;

        let now = Local::now().naive_local();
        let mut items = store.state().to_do_items.clone();
        sort_for_list(&mut items, now);

        if format == OutputFormat::Json {
            let rows: Vec<_> = items
                .iter()
                .map(|i| {
                    serde_json::json!({
                        "id": i.id,
                        "title": i.title,
                        "description": i.description,
                        "start": i.start_date,
                        "end": i.end_date,
                        "priority": i.priority.as_str(),
                        "status": i.status_at(now).label(),
                    })
                })
                .collect();
            fmt.print_json(&serde_json::Value::Array(rows));
            return Ok(());
        }

        if items.is_empty() {
            fmt.info("No items. Add one with 'dayplan add'.");
            return Ok(());
        }

        for item in &items {
            println!(
                "[{}] {} ({})",
                item.status_at(now).label(),
                item.title,
                item.priority.label()
            );
            println!("  {} .. {}  id: {}", item.start_date, item.end_date, item.id);
            if !item.description.is_empty() {
                println!("  {}", item.description);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Id of the item to update
    id: String,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// New start date, "YYYY-MM-DD HH:MM"
    #[arg(long)]
    start: Option<String>,

    /// New end date, same format
    #[arg(long)]
    end: Option<String>,

    /// New priority: low, medium, or high
    #[arg(long, value_parser = parse_priority)]
    priority: Option<Priority>,
}

impl UpdateCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let user_id = match require_login(&ctx.user_use_case(), &*fmt).await {
            Some(id) => id,
            None => return Ok(()),
        };

        for date in [&self.start, &self.end].into_iter().flatten() {
            if let Err(e) = parse_item_date(date) {
                fmt.error(&e.to_string());
                return Ok(());
            }
        }

        let items = ctx.item_use_case().fetch_items(&user_id).await;
        let mut item = match items.into_iter().find(|i| i.id == self.id) {
            Some(item) => item,
            None => {
                fmt.error(&format!("No item with id '{}'", self.id));
                return Ok(());
            }
        };

        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(start) = &self.start {
            item.start_date = start.clone();
        }
        if let Some(end) = &self.end {
            item.end_date = end.clone();
        }
        if let Some(priority) = self.priority {
            item.priority = priority;
        }

        let title = item.title.clone();
        let mut store = ctx.store();
        store.dispatch(Action::UpdateItem(item)).await;

        fmt.success(&format!("Updated '{}'", title));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the item to delete
    id: String,
}

impl DeleteCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let user_id = match require_login(&ctx.user_use_case(), &*fmt).await {
            Some(id) => id,
            None => return Ok(()),
        };

        let items = ctx.item_use_case().fetch_items(&user_id).await;
        let item = match items.into_iter().find(|i| i.id == self.id) {
            Some(item) => item,
            None => {
                fmt.error(&format!("No item with id '{}'", self.id));
                return Ok(());
            }
        };

        let title = item.title.clone();
        let mut store = ctx.store();
        store.dispatch(Action::DeleteItem(item)).await;

        fmt.success(&format!("Deleted '{}'", title));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Confirm deletion of every item
    #[arg(long)]
    yes: bool,
}

impl ClearCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);

        if !self.yes {
            fmt.error("This deletes every item for every user. Pass --yes to confirm.");
            return Ok(());
        }

        ctx.item_use_case().delete_all_items().await;
        fmt.success("All items deleted");
        Ok(())
    }
}
