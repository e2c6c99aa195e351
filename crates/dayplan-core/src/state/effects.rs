//! Side-effect executor for dispatched actions
//!
//! Runs the [`ItemUseCase`] operation that corresponds to an action
//! before the reducer applies the pure state transition. `LoadItems` is
//! the one action that answers with a follow-up action carrying the
//! freshly fetched list.

use crate::usecases::ItemUseCase;

use super::action::Action;

/// Executes item persistence side effects for the store
pub struct ItemEffects {
    items: ItemUseCase,
}

impl ItemEffects {
    pub fn new(items: ItemUseCase) -> Self {
        Self { items }
    }

    /// Runs the side effect for `action`, returning a follow-up action
    /// to dispatch afterwards, if any
    pub async fn run(&self, action: &Action) -> Option<Action> {
        match action {
            Action::LoadItems(user_id) => {
                let items = self.items.fetch_items(user_id).await;
                Some(Action::SetItems(items))
            }
            Action::AddItem(item) => {
                self.items.save_item(item).await;
                None
            }
            Action::UpdateItem(item) => {
                self.items.update_item(item).await;
                None
            }
            Action::DeleteItem(item) => {
                self.items.delete_item(item).await;
                None
            }
            Action::SetUser(_) | Action::SetItems(_) => None,
        }
    }
}
